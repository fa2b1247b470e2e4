//! Turns loaded crash records into renderable annotations.

use std::collections::BTreeMap;

use crash_map_analytics::{Breakdown, coordinate_key};
use crash_map_crash_models::CrashRecord;
use crash_map_map_models::{Annotation, LatLng, MarkerStyle};
use crash_map_source::categorize::{road_type_category, weather_category};

/// Builds one annotation per record, embedding the record's descriptive
/// fields and its location's final breakdown counts in the popup summary.
///
/// `breakdowns` must be the completed table for the same record set;
/// summaries reference final totals, not running ones.
pub fn build_annotations(
    records: &[CrashRecord],
    breakdowns: &BTreeMap<String, Breakdown>,
) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(records.len());

    for record in records {
        let key = coordinate_key(record.lat, record.lon);
        let Some(breakdown) = breakdowns.get(&key) else {
            // aggregate() saw the same records, so every key is present
            continue;
        };

        let weather = weather_category(record.road_condition.as_deref().unwrap_or(""));
        let road_type = road_type_category(record.road_type.as_deref().unwrap_or(""));

        annotations.push(Annotation {
            id: annotations.len(),
            position: LatLng::new(record.lat, record.lon),
            weather,
            road_type,
            style: MarkerStyle::for_weather(weather),
            summary: summary_text(record, breakdown),
        });
    }

    annotations
}

/// Formats the plain-text popup summary for one crash.
fn summary_text(record: &CrashRecord, breakdown: &Breakdown) -> String {
    format!(
        "Crash Case: {}\n\
         Year: {}\n\
         Road Condition: {}\n\
         Intersection: {}\n\
         Road Type: {}\n\
         City / County: {} / {}\n\
         Coordinates: {:.5}, {:.5}\n\
         \n\
         Total crashes at this location: {}\n\
         Winter crashes: {}\n\
         Rain crashes: {}\n\
         Dry crashes: {}\n\
         Other crashes: {}",
        or_na(record.crash_case.as_deref()),
        or_na(record.year.as_deref()),
        or_na(record.road_condition.as_deref()),
        or_na(record.intersection.as_deref()),
        or_na(record.road_type.as_deref()),
        or_na(record.city.as_deref()),
        or_na(record.county.as_deref()),
        record.lat,
        record.lon,
        breakdown.total,
        breakdown.winter,
        breakdown.rain,
        breakdown.dry,
        breakdown.other,
    )
}

/// Renders an absent field as `N/A`.
fn or_na(field: Option<&str>) -> &str {
    field.unwrap_or("N/A")
}
