#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crash category taxonomy types and marker color definitions.
//!
//! This crate defines the canonical weather and road-type categories used
//! across the entire crash-map system. Raw crash rows carry free-text
//! condition descriptions; the source package normalizes them into these
//! closed category sets.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Marker color used when a host renders a point it cannot attribute to any
/// known weather category (e.g. data produced by an older build).
///
/// Every [`WeatherCategory`] has its own color via [`WeatherCategory::color`],
/// so within this system the fallback is never selected.
pub const FALLBACK_COLOR: &str = "#f1f501ff";

/// Weather category derived from a crash's free-text road condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WeatherCategory {
    /// Dry road surface
    Dry,
    /// Ice, frost, slush, or snow
    Winter,
    /// Wet road surface
    Rain,
    /// Anything else, including missing descriptions
    Other,
}

impl WeatherCategory {
    /// All weather categories, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Dry, Self::Winter, Self::Rain, Self::Other]
    }

    /// Returns the marker color (RGBA hex) for this category.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Dry => "#40ec0cff",
            Self::Winter => "#368fe9ff",
            Self::Rain => "#f52b2bff",
            Self::Other => "#f08f08ff",
        }
    }
}

/// Road-type category derived from a crash's free-text road classification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoadTypeCategory {
    /// Urban roads (interstates, arterials, local streets inside city limits)
    Urban,
    /// Rural roads; also the default when the classification is unrecognized
    Rural,
}

impl RoadTypeCategory {
    /// All road-type categories, in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Urban, Self::Rural]
    }
}

/// A crash record with validated coordinates.
///
/// Produced by the source loader after coordinate parsing. The descriptive
/// fields are best-effort: sources leave columns blank or omit them, so
/// everything except the coordinates is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrashRecord {
    /// Latitude (WGS84). Always finite.
    pub lat: f64,
    /// Longitude (WGS84). Always finite.
    pub lon: f64,
    /// Case number assigned by the reporting agency.
    pub crash_case: Option<String>,
    /// Year the crash occurred.
    pub year: Option<String>,
    /// County where the crash occurred.
    pub county: Option<String>,
    /// City where the crash occurred.
    pub city: Option<String>,
    /// Nearest intersection or milepost description.
    pub intersection: Option<String>,
    /// Free-text road classification (e.g. "Urban Interstate").
    pub road_type: Option<String>,
    /// Free-text road surface condition (e.g. "Dry", "Sand on icy road").
    pub road_condition: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_category_colors() {
        assert_eq!(WeatherCategory::Dry.color(), "#40ec0cff");
        assert_eq!(WeatherCategory::Winter.color(), "#368fe9ff");
        assert_eq!(WeatherCategory::Rain.color(), "#f52b2bff");
        assert_eq!(WeatherCategory::Other.color(), "#f08f08ff");
    }

    #[test]
    fn weather_category_string_forms() {
        assert_eq!(WeatherCategory::Winter.to_string(), "winter");
        assert_eq!(WeatherCategory::Dry.as_ref(), "dry");
        assert_eq!(
            "rain".parse::<WeatherCategory>().unwrap(),
            WeatherCategory::Rain
        );
        assert!("sleet".parse::<WeatherCategory>().is_err());
    }

    #[test]
    fn road_type_category_string_forms() {
        assert_eq!(RoadTypeCategory::Urban.to_string(), "urban");
        assert_eq!(RoadTypeCategory::Rural.as_ref(), "rural");
        assert_eq!(
            "rural".parse::<RoadTypeCategory>().unwrap(),
            RoadTypeCategory::Rural
        );
    }
}
