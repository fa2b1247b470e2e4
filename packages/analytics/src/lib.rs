#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-location crash statistics.
//!
//! Groups crash records by a fixed-precision coordinate key and counts how
//! many crashes at each location fall into each weather category. The full
//! breakdown table is built in one pass before any map annotation is
//! created, so annotation summaries always embed final totals.

use std::collections::BTreeMap;

use crash_map_crash_models::{CrashRecord, WeatherCategory};
use crash_map_source::categorize::weather_category;
use serde::{Deserialize, Serialize};

/// Builds the coordinate key that groups crashes at (nearly) the same
/// physical location: both coordinates rounded to 5 decimal places.
///
/// The same function feeds both the aggregation pass and the annotation
/// lookup pass, so the rounding mode (Rust's `{:.5}` formatting,
/// round-half-to-even) is applied consistently.
#[must_use]
pub fn coordinate_key(lat: f64, lon: f64) -> String {
    format!("{lat:.5},{lon:.5}")
}

/// Crash counts at one location, split by weather category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Total crashes at this location.
    pub total: usize,
    /// Crashes on a dry road surface.
    pub dry: usize,
    /// Crashes in ice, frost, slush, or snow.
    pub winter: usize,
    /// Crashes on a wet road surface.
    pub rain: usize,
    /// Crashes with any other (or missing) road condition.
    pub other: usize,
}

impl Breakdown {
    /// Counts one crash in the given weather category.
    pub const fn bump(&mut self, category: WeatherCategory) {
        self.total += 1;
        match category {
            WeatherCategory::Dry => self.dry += 1,
            WeatherCategory::Winter => self.winter += 1,
            WeatherCategory::Rain => self.rain += 1,
            WeatherCategory::Other => self.other += 1,
        }
    }
}

/// Builds the per-location breakdown table in a single pass.
///
/// Records are coordinate-valid by construction (the source loader already
/// dropped rows without finite coordinates), so every record counts.
#[must_use]
pub fn aggregate(records: &[CrashRecord]) -> BTreeMap<String, Breakdown> {
    let mut breakdowns: BTreeMap<String, Breakdown> = BTreeMap::new();

    for record in records {
        let category = weather_category(record.road_condition.as_deref().unwrap_or(""));
        breakdowns
            .entry(coordinate_key(record.lat, record.lon))
            .or_default()
            .bump(category);
    }

    breakdowns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: f64, lon: f64, road_condition: &str) -> CrashRecord {
        CrashRecord {
            lat,
            lon,
            crash_case: None,
            year: None,
            county: None,
            city: None,
            intersection: None,
            road_type: None,
            road_condition: if road_condition.is_empty() {
                None
            } else {
                Some(road_condition.to_string())
            },
        }
    }

    #[test]
    fn rounds_to_five_decimal_places() {
        assert_eq!(coordinate_key(43.000_012_34, -107.500_056_78), "43.00001,-107.50006");
        assert_eq!(coordinate_key(43.0, -107.5), "43.00000,-107.50000");
    }

    #[test]
    fn nearby_coordinates_share_a_key() {
        let key_a = coordinate_key(43.000_012_34, -107.500_056_78);
        let key_b = coordinate_key(43.000_012_99, -107.500_056_01);
        assert_eq!(key_a, key_b);
    }

    #[test]
    fn groups_nearby_records_into_one_entry() {
        let records = vec![
            record(43.000_012_34, -107.500_056_78, "Dry"),
            record(43.000_012_99, -107.500_056_01, "Snow"),
            record(41.1398, -104.8202, "Wet"),
        ];
        let breakdowns = aggregate(&records);

        assert_eq!(breakdowns.len(), 2);
        let shared = &breakdowns[&coordinate_key(43.000_012_34, -107.500_056_78)];
        assert_eq!(shared.total, 2);
        assert_eq!(shared.dry, 1);
        assert_eq!(shared.winter, 1);
    }

    #[test]
    fn totals_match_bucket_sums() {
        let records = vec![
            record(43.0, -107.5, "Dry"),
            record(43.0, -107.5, "Snow"),
            record(43.0, -107.5, "Wet"),
            record(43.0, -107.5, "foggy"),
            record(43.0, -107.5, ""),
            record(41.1, -104.8, "Sand on icy road"),
        ];
        for breakdown in aggregate(&records).values() {
            assert_eq!(
                breakdown.total,
                breakdown.dry + breakdown.winter + breakdown.rain + breakdown.other
            );
        }
    }

    #[test]
    fn missing_condition_counts_as_other() {
        let breakdowns = aggregate(&[record(43.0, -107.5, "")]);
        let entry = &breakdowns[&coordinate_key(43.0, -107.5)];
        assert_eq!(entry.other, 1);
        assert_eq!(entry.total, 1);
    }
}
