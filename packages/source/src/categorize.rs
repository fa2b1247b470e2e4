//! Free-text category normalization.
//!
//! Maps the crash dataset's free-text `road_condition` and `road_type`
//! descriptions to the canonical [`WeatherCategory`] and
//! [`RoadTypeCategory`] taxonomies. Descriptions vary by reporting agency,
//! so we use case-insensitive keyword detection to classify.
//!
//! The keyword lists and their evaluation order are a behavioral contract:
//! existing datasets were categorized with exactly these rules, so changing
//! them changes which bucket a crash lands in.

use crash_map_crash_models::{RoadTypeCategory, WeatherCategory};

/// Winter takes priority over the other buckets ("sand on icy road" must not
/// fall through to the dry check).
const WINTER_KEYWORDS: &[&str] = &["ice", "frost", "sand on icy road", "slush", "snow"];

/// Maps a raw road-condition string to a weather category.
///
/// Case-insensitive, first match wins: winter keywords, then `wet`, then
/// `dry`. Everything else (including the empty string) is
/// [`WeatherCategory::Other`]. Callers with an absent field pass `""`.
#[must_use]
pub fn weather_category(raw: &str) -> WeatherCategory {
    let lower = raw.to_lowercase();

    if contains_any(&lower, WINTER_KEYWORDS) {
        return WeatherCategory::Winter;
    }
    if lower.contains("wet") {
        return WeatherCategory::Rain;
    }
    if lower.contains("dry") {
        return WeatherCategory::Dry;
    }

    WeatherCategory::Other
}

/// Maps a raw road-type string to a road-type category.
///
/// Case-insensitive: `urban` anywhere in the text is
/// [`RoadTypeCategory::Urban`]; everything else (including the empty string)
/// is [`RoadTypeCategory::Rural`].
#[must_use]
pub fn road_type_category(raw: &str) -> RoadTypeCategory {
    let lower = raw.to_lowercase();

    if lower.contains("urban") {
        return RoadTypeCategory::Urban;
    }

    RoadTypeCategory::Rural
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_winter_conditions() {
        assert_eq!(weather_category("Snow"), WeatherCategory::Winter);
        assert_eq!(weather_category("ICE"), WeatherCategory::Winter);
        assert_eq!(weather_category("Frost on bridge"), WeatherCategory::Winter);
        assert_eq!(weather_category("Sand on icy road"), WeatherCategory::Winter);
        assert_eq!(weather_category("Slush"), WeatherCategory::Winter);
        assert_eq!(
            weather_category("light snow, blowing"),
            WeatherCategory::Winter
        );
    }

    #[test]
    fn winter_wins_over_wet_and_dry() {
        // "wet" and "snow" both present; winter keywords are checked first
        assert_eq!(weather_category("wet with snow"), WeatherCategory::Winter);
        assert_eq!(weather_category("dry, frost patches"), WeatherCategory::Winter);
    }

    #[test]
    fn maps_rain_and_dry() {
        assert_eq!(weather_category("Wet"), WeatherCategory::Rain);
        assert_eq!(weather_category("wet pavement"), WeatherCategory::Rain);
        assert_eq!(weather_category("Dry"), WeatherCategory::Dry);
        assert_eq!(weather_category("DRY SURFACE"), WeatherCategory::Dry);
    }

    #[test]
    fn other_fallback() {
        assert_eq!(weather_category(""), WeatherCategory::Other);
        assert_eq!(weather_category("foggy"), WeatherCategory::Other);
        assert_eq!(weather_category("muddy"), WeatherCategory::Other);
    }

    #[test]
    fn maps_road_types() {
        assert_eq!(road_type_category("Urban Interstate"), RoadTypeCategory::Urban);
        assert_eq!(road_type_category("URBAN local"), RoadTypeCategory::Urban);
        assert_eq!(road_type_category("Rural highway"), RoadTypeCategory::Rural);
    }

    #[test]
    fn rural_fallback() {
        assert_eq!(road_type_category(""), RoadTypeCategory::Rural);
        assert_eq!(road_type_category("county road"), RoadTypeCategory::Rural);
        assert_eq!(road_type_category("interstate"), RoadTypeCategory::Rural);
    }
}
