use super::error::Error;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use h3o::CellIndex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::to_string;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>>;
}

#[derive(Serialize, Deserialize)]
struct JSONCell {
    h3index: String,
    h3resolution: u8,
}

fn cell_to_feature(cell: CellIndex) -> Feature {
    let boundary = cell.boundary();
    let mut ring: Vec<Vec<f64>> = boundary
        .iter()
        .map(|vertex| vec![vertex.lng(), vertex.lat()])
        .collect();
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }
    let mut properties = JsonObject::new();
    properties.insert(
        String::from("h3index"),
        JsonValue::from(cell.to_string()),
    );
    properties.insert(
        String::from("h3resolution"),
        JsonValue::from(u8::from(cell.resolution())),
    );
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Builds a feature collection outlining the given cells.
///
/// Each cell becomes one polygon feature tracing the cell's closed
/// boundary ring, with the canonical index and the resolution in its
/// properties. Features keep the input order.
pub fn to_feature_collection(cells: &[CellIndex]) -> Result<FeatureCollection, Error> {
    if cells.is_empty() {
        return Err(Error::EmptyCellSet);
    }
    let features = cells
        .par_iter()
        .map(|&cell| cell_to_feature(cell))
        .collect();
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

impl Output for Vec<CellIndex> {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
        for cell in self.iter() {
            let json_cell = JSONCell {
                h3index: cell.to_string(),
                h3resolution: cell.resolution().into(),
            };
            let json = to_string(&json_cell)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
        let feature_collection = to_feature_collection(self)?;
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}
