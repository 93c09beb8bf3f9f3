use criterion::{criterion_group, criterion_main, Criterion};
use geojson::GeoJson;
use geojson2h3::output::Output;
use geojson2h3::{to_cells, to_feature_collection};
use std::io::{Result, Write};

const NYC_POLYGON: &str = r#"{"type":"Polygon","coordinates":[[[-73.932043,40.731168],
[-73.888112,40.67702],[-73.812604,40.757185],[-73.844867,40.797232],[-73.846239,40.764468],
[-73.870951,40.749381],[-73.87301,40.776431],[-73.895662,40.773831],[-73.893603,40.758746],
[-73.870951,40.735331],[-73.891544,40.739495],[-73.864087,40.724402],[-73.892917,40.708265],
[-73.908018,40.742617],[-73.932043,40.731168]]]}"#;

const NYC_LINE: &str = r#"{"type":"LineString","coordinates":[[-74.010794,40.729827],
[-73.932541,40.67698],[-73.914179,40.735812],[-73.927221,40.717725],[-73.938375,40.742186],
[-73.937689,40.725663],[-73.949015,40.734771],[-73.942494,40.705361],[-73.955879,40.716424],
[-73.96017,40.740885],[-73.995349,40.745178]]}"#;

struct MockWriter;

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

pub fn to_cells_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("nyc");
    group.sample_size(10);
    let polygon: GeoJson = NYC_POLYGON.parse().unwrap();
    group.bench_function("polygon_to_cells", |b| {
        b.iter(|| to_cells(9, &polygon).unwrap())
    });
    let line: GeoJson = NYC_LINE.parse().unwrap();
    group.bench_function("line_to_cells", |b| {
        b.iter(|| to_cells(10, &line).unwrap())
    });
    group.finish();
}

pub fn to_features_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("nyc");
    group.sample_size(10);
    let polygon: GeoJson = NYC_POLYGON.parse().unwrap();
    let cells = to_cells(9, &polygon).unwrap();
    group.bench_function("cells_to_features", |b| {
        b.iter(|| to_feature_collection(&cells).unwrap())
    });
    group.bench_function("write_json_lines", |b| {
        b.iter(|| {
            let mut writer = MockWriter;
            cells.write_json_lines(&mut writer).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, to_cells_bench, to_features_bench);
criterion_main!(benches);
