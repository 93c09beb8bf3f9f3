use self::dedup::Dedup;
use self::geo::{polygon_centroid, polygon_from_rings, position_to_point, resample};
use geo_types::Point;
use geojson::{GeoJson, Value};
use h3o::geom::{ContainmentMode, PolyfillConfig, ToCells};
use h3o::{CellIndex, LatLng, Resolution};
use itertools::Itertools;
use std::convert::TryFrom;

mod dedup;
mod error;
mod geo;
pub mod output;

pub use error::Error;
pub use output::to_feature_collection;

/// Converts a GeoJSON object into the set of H3 cells covering it.
///
/// The conversion is lossy: the returned cells approximate the input
/// shape at the precision the resolution allows. Cells appear in
/// first-occurrence order with duplicates removed.
///
/// # Example
///
/// ```
/// use geojson2h3::to_cells;
///
/// let object: geojson::GeoJson = r#"{"type":"Point","coordinates":[13.4,52.52]}"#
///     .parse()
///     .unwrap();
/// let cells = to_cells(7, &object).unwrap();
/// assert_eq!(cells.len(), 1);
/// ```
pub fn to_cells(resolution: u8, object: &GeoJson) -> Result<Vec<CellIndex>, Error> {
    let resolution =
        Resolution::try_from(resolution).map_err(|_| Error::InvalidResolution(resolution))?;
    match object {
        GeoJson::FeatureCollection(collection) => {
            let mut sets = vec![];
            for feature in &collection.features {
                let geometry = feature.geometry.as_ref().ok_or(Error::MalformedCollection)?;
                sets.push(value_to_cells(&geometry.value, resolution)?);
            }
            Ok(sets.dedup_merge())
        }
        GeoJson::Feature(feature) => {
            let geometry = feature.geometry.as_ref().ok_or(Error::NullGeometry)?;
            value_to_cells(&geometry.value, resolution)
        }
        GeoJson::Geometry(geometry) => value_to_cells(&geometry.value, resolution),
    }
}

fn value_to_cells(value: &Value, resolution: Resolution) -> Result<Vec<CellIndex>, Error> {
    match value {
        Value::Point(position) => {
            let cell = point_to_cell(position_to_point(position)?, resolution)?;
            Ok(vec![cell])
        }
        Value::MultiPoint(positions) => {
            let mut sets = vec![];
            for position in positions {
                let cell = point_to_cell(position_to_point(position)?, resolution)?;
                sets.push(vec![cell]);
            }
            Ok(sets.dedup_merge())
        }
        Value::LineString(line) => {
            // A single line can revisit cells; normalize here as well.
            let cells = line_string_to_cells(line, resolution)?;
            Ok(vec![cells].dedup_merge())
        }
        Value::MultiLineString(lines) => {
            let mut sets = vec![];
            for line in lines {
                sets.push(line_string_to_cells(line, resolution)?);
            }
            Ok(sets.dedup_merge())
        }
        Value::Polygon(rings) => polygon_to_cells(rings, resolution),
        Value::MultiPolygon(polygons) => {
            let mut sets = vec![];
            for rings in polygons {
                sets.push(polygon_to_cells(rings, resolution)?);
            }
            Ok(sets.dedup_merge())
        }
        Value::GeometryCollection(geometries) => {
            let mut sets = vec![];
            for geometry in geometries {
                sets.push(value_to_cells(&geometry.value, resolution)?);
            }
            Ok(sets.dedup_merge())
        }
    }
}

fn point_to_cell(point: Point<f64>, resolution: Resolution) -> Result<CellIndex, Error> {
    let coordinate = LatLng::new(point.y(), point.x())?;
    Ok(coordinate.to_cell(resolution))
}

fn line_string_to_cells(
    line: &[Vec<f64>],
    resolution: Resolution,
) -> Result<Vec<CellIndex>, Error> {
    if line.len() < 2 {
        return Err(Error::DegenerateLineString(line.len()));
    }
    let mut points = vec![];
    for (start, end) in line.iter().tuple_windows() {
        let start = position_to_point(start)?;
        let end = position_to_point(end)?;
        points.extend(resample(start, end, resolution));
    }
    let mut cells = vec![];
    for point in points {
        cells.push(point_to_cell(point, resolution)?);
    }
    Ok(cells)
}

fn polygon_to_cells(
    rings: &[Vec<Vec<f64>>],
    resolution: Resolution,
) -> Result<Vec<CellIndex>, Error> {
    let polygon = polygon_from_rings(rings)?;
    let config =
        PolyfillConfig::new(resolution).containment_mode(ContainmentMode::ContainsCentroid);
    let cells: Vec<CellIndex> = h3o::geom::Polygon::from_degrees(polygon.clone())?
        .to_cells(config)
        .collect();
    if !cells.is_empty() {
        return Ok(cells);
    }
    // Polyfill covers nothing when the polygon is smaller than one cell;
    // fall back to the cell under its centroid.
    let centroid = polygon_centroid(&polygon).ok_or(Error::UnsupportedGeometry(
        "polygon without an exterior ring",
    ))?;
    Ok(vec![point_to_cell(centroid, resolution)?])
}
