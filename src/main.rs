use geojson::GeoJson;
use geojson2h3::output::Output;
use geojson2h3::to_cells;
use h3o::CellIndex;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "geojson2h3",
    about = "Convert GeoJSON objects into H3 cell sets and back"
)]
enum Opt {
    /// Cover the shapes in a GeoJSON document with H3 cells
    #[structopt(name = "cells")]
    Cells {
        /// GeoJSON file to read, stdin if omitted
        #[structopt(short = "f", long = "file")]
        file: Option<String>,
        /// H3 resolution, 0 (coarsest) to 15 (finest)
        #[structopt(short = "r", long = "resolution")]
        resolution: u8,
        /// Write one GeoJSON feature collection instead of JSON lines
        #[structopt(long = "geojson")]
        geojson: bool,
    },
    /// Outline H3 cells as a GeoJSON feature collection
    #[structopt(name = "features")]
    Features {
        /// Cell indexes in canonical hex form, stdin if omitted
        indexes: Vec<String>,
    },
}

fn read_input(file: Option<String>) -> Result<String, Box<dyn Error>> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match opt {
        Opt::Cells {
            file,
            resolution,
            geojson,
        } => {
            let object: GeoJson = read_input(file)?.parse()?;
            let cells = to_cells(resolution, &object)?;
            if geojson {
                cells.write_geojson(&mut writer)?;
            } else {
                cells.write_json_lines(&mut writer)?;
            }
        }
        Opt::Features { indexes } => {
            let indexes = if indexes.is_empty() {
                read_input(None)?
                    .split_whitespace()
                    .map(String::from)
                    .collect()
            } else {
                indexes
            };
            let cells = indexes
                .iter()
                .map(|index| index.parse::<CellIndex>())
                .collect::<Result<Vec<CellIndex>, _>>()?;
            cells.write_geojson(&mut writer)?;
        }
    }
    Ok(())
}
