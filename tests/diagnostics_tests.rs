//! Warnings are logged once per query, however many rays trigger them.
//!
//! Everything lives in a single test because the logger is process-wide.

mod support;

use inpolyhedron::{
    grid::GridAxes,
    inside::inside_polyhedron_into,
    polyhedron::{Polyhedron, Triangle},
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use nalgebra::Point3;
use std::sync::Mutex;
use support::open_cube;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn warnings_containing(needle: &str) -> usize {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level == Level::Warn && message.contains(needle))
        .count()
}

#[test]
fn diagnostics_warn_once_per_query() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // several rays through the missing triangle see a single crossing
    let open = open_cube();
    let grid = GridAxes::new(
        vec![0.3, 0.7, 0.9],
        vec![0.2, 0.45, 0.6],
        vec![0.25, 0.5, 0.75, 1.5],
    );
    let inside = open.inside_grid(&grid);
    let summary = inside.report().diagnostics;
    assert!(summary.odd_crossing_rays > 1);
    assert!(summary.odd_crossings_warned);
    assert_eq!(summary.singular_systems, 0);
    assert_eq!(warnings_containing("Odd number of crossings"), 1);

    // a fresh query warns again
    let again = open.inside_grid(&grid);
    assert_eq!(again.as_slice(), inside.as_slice());
    assert_eq!(warnings_containing("Odd number of crossings"), 2);

    // a triangle standing on the x = y plane, so every ray along z runs parallel to it
    let standing: Triangle = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 0.0),
    ];
    let xy = [0.5, 1.5];
    let z = [0.0, 1.0, 2.0];
    let mut out = vec![true; 12];
    let report = inside_polyhedron_into(&mut out, &[standing], &xy, &xy, &z).unwrap();
    assert_eq!(report.diagnostics.singular_systems, 4);
    assert!(report.diagnostics.singular_warned);
    assert!(out.iter().all(|&b| !b));
    assert_eq!(warnings_containing("parallel to the traced ray"), 1);

    // closed geometry stays quiet
    let before = RECORDS.lock().unwrap().len();
    let cube = Polyhedron::cube(1.0);
    let inside = cube.inside_grid(&GridAxes::new(vec![0.3, 0.8], vec![0.1, 0.6], vec![0.45, 0.9, 2.0]));
    assert!(inside.report().diagnostics.is_clean());
    let after = RECORDS.lock().unwrap();
    assert!(after[before..].iter().all(|(level, _)| *level != Level::Warn));
}
