use super::error::Error;
use geo::prelude::*;
use geo_types::{LineString, Point, Polygon};
use h3o::Resolution;

// Step distances in meters, one per resolution, sized to the grid's
// average cell edge so consecutive samples land in the same or an
// adjacent cell.
const STEP_METERS: [f64; 16] = [
    1_107_000.0,
    418_000.0,
    158_000.0,
    59_000.0,
    22_000.0,
    8_000.0,
    3_000.0,
    1_000.0,
    460.0,
    170.0,
    60.0,
    24.0,
    9.4,
    3.5,
    1.3,
    0.5,
];

// Resolutions are 0-15, so the lookup is total.
pub fn step_for(resolution: Resolution) -> f64 {
    STEP_METERS[u8::from(resolution) as usize]
}

/// Resamples the great-circle segment between two points so consecutive
/// points are no farther apart than the resolution's step distance.
///
/// The result always begins with `start` and ends with `end`; a segment
/// shorter than one step passes through unchanged.
pub fn resample(start: Point<f64>, end: Point<f64>, resolution: Resolution) -> Vec<Point<f64>> {
    let step = step_for(resolution);
    let distance = start.haversine_distance(&end);
    if distance <= step {
        return vec![start, end];
    }
    let bearing = start.haversine_bearing(end);
    let mut points = vec![start];
    let mut travelled = step;
    while travelled < distance {
        points.push(start.haversine_destination(bearing, travelled));
        travelled += step;
    }
    points.push(end);
    points
}

pub fn position_to_point(position: &[f64]) -> Result<Point<f64>, Error> {
    match position {
        [longitude, latitude, ..] => Ok(Point::new(*longitude, *latitude)),
        _ => Err(Error::UnsupportedGeometry(
            "position without both coordinates",
        )),
    }
}

fn ring_to_line_string(ring: &[Vec<f64>]) -> Result<LineString<f64>, Error> {
    let coordinates = ring
        .iter()
        .map(|position| {
            let point = position_to_point(position)?;
            Ok((point.x(), point.y()))
        })
        .collect::<Result<Vec<(f64, f64)>, Error>>()?;
    Ok(coordinates.into())
}

/// Builds a polygon from GeoJSON rings, exterior first, ring order kept
/// as given.
pub fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, Error> {
    let (exterior, holes) = match rings.split_first() {
        Some(split) => split,
        None => {
            return Err(Error::UnsupportedGeometry(
                "polygon without an exterior ring",
            ))
        }
    };
    let exterior = ring_to_line_string(exterior)?;
    let interiors = holes
        .iter()
        .map(|ring| ring_to_line_string(ring))
        .collect::<Result<Vec<LineString<f64>>, Error>>()?;
    Ok(Polygon::new(exterior, interiors))
}

pub fn polygon_centroid(polygon: &Polygon<f64>) -> Option<Point<f64>> {
    polygon.centroid()
}
