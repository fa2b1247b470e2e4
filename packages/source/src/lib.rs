#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crash data loading and normalization.
//!
//! Reads the row-oriented crash export (header row, `LAT`/`LON` plus
//! descriptive columns), keeps every row whose coordinates parse as finite
//! numbers, and produces [`CrashRecord`]s for the aggregation and map
//! layers. Rows without usable coordinates are skipped and counted, never
//! treated as errors.

pub mod categorize;
pub mod parsing;

use std::io::Read;
use std::path::Path;

use crash_map_crash_models::CrashRecord;
use serde::Deserialize;

use crate::parsing::parse_lat_lon;

/// Errors that can occur while loading crash data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV stream itself is unreadable (e.g. a malformed header row).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// The result of a completed load: the usable records plus how many rows
/// were dropped for missing or unparseable coordinates.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Records whose coordinates parsed as finite numbers.
    pub records: Vec<CrashRecord>,
    /// Rows dropped during the load.
    pub skipped: usize,
}

/// One raw CSV row. Everything is optional text; type coercion happens after
/// the row is read.
#[derive(Debug, Deserialize)]
struct CrashRow {
    #[serde(rename = "LAT", default)]
    lat: Option<String>,
    #[serde(rename = "LON", default)]
    lon: Option<String>,
    #[serde(default)]
    crash_case: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    county: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    intersection: Option<String>,
    #[serde(default)]
    road_type: Option<String>,
    #[serde(default)]
    road_condition: Option<String>,
}

/// Loads crash records from a CSV stream.
///
/// Row-level defects (malformed rows, missing or unparseable coordinates)
/// are skipped and counted in [`LoadOutcome::skipped`].
///
/// # Errors
///
/// Returns [`SourceError`] if the stream itself cannot be read, including
/// a stream that becomes unreadable mid-transfer. A load never reports
/// success over truncated data.
pub fn load_records(reader: impl Read) -> Result<LoadOutcome, SourceError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader.headers()?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in csv_reader.deserialize::<CrashRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                // The iterator surfaces both malformed rows and underlying
                // stream failures; only the former are skippable.
                if e.is_io_error() {
                    return Err(SourceError::Csv(e));
                }
                log::debug!("Skipping malformed row: {e}");
                skipped += 1;
                continue;
            }
        };

        let Some((lat, lon)) = parse_lat_lon(row.lat.as_deref(), row.lon.as_deref()) else {
            log::debug!("Skipping row without usable coordinates");
            skipped += 1;
            continue;
        };

        records.push(CrashRecord {
            lat,
            lon,
            crash_case: clean(row.crash_case),
            year: clean(row.year),
            county: clean(row.county),
            city: clean(row.city),
            intersection: clean(row.intersection),
            road_type: clean(row.road_type),
            road_condition: clean(row.road_condition),
        });
    }

    log::info!(
        "Loaded {} crash records ({skipped} rows skipped)",
        records.len()
    );

    Ok(LoadOutcome { records, skipped })
}

/// Loads crash records from a CSV file on disk.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be opened or read.
pub fn load_records_from_path(path: impl AsRef<Path>) -> Result<LoadOutcome, SourceError> {
    load_records(std::fs::File::open(path)?)
}

/// Normalizes a raw field: trims whitespace and maps empty text to `None`.
fn clean(field: Option<String>) -> Option<String> {
    let field = field?;
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
