use h3o::error::{InvalidGeometry, InvalidLatLng};
use thiserror::Error;

/// Failures raised by the conversion engine.
///
/// Every kind is terminal for the call that raised it; errors from child
/// conversions propagate unchanged to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("got invalid resolution {0}, expected from 0 to 15")]
    InvalidResolution(u8),

    /// A bare feature without a geometry.
    #[error("feature has no geometry")]
    NullGeometry,

    /// A feature collection member without a geometry.
    #[error("feature collection contains a feature without geometry")]
    MalformedCollection,

    #[error("got {0} points, expected >= 2 points")]
    DegenerateLineString(usize),

    /// A value the geometry model admits but the engine cannot interpret,
    /// e.g. a position without both coordinates.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(&'static str),

    #[error("cell indexes are empty")]
    EmptyCellSet,

    /// The grid indexer rejected a coordinate (non-finite input).
    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] InvalidLatLng),

    /// The grid indexer rejected a polygon.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] InvalidGeometry),
}
