//! Category visibility filters.

use std::collections::BTreeMap;

use crash_map_crash_models::{RoadTypeCategory, WeatherCategory};
use crash_map_map_models::Annotation;
use strum_macros::{AsRefStr, Display, EnumString};

/// Which filter table a UI toggle targets.
///
/// The string forms (`weather`, `roadType`) match the `data-filter-type`
/// tags the host UI puts on its checkboxes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum FilterKind {
    /// The weather-category table.
    Weather,
    /// The road-type-category table.
    RoadType,
}

/// Two independent category → visibility tables, mutated by UI checkbox
/// toggles and read by the view refresher.
///
/// Keys are not validated against the closed category sets: an unknown key
/// is stored and simply never matches any annotation. A key missing from a
/// table is treated as not visible.
#[derive(Debug, Clone)]
pub struct FilterState {
    weather: BTreeMap<String, bool>,
    road_type: BTreeMap<String, bool>,
}

impl Default for FilterState {
    /// Starts with every known category visible.
    fn default() -> Self {
        Self {
            weather: WeatherCategory::all()
                .into_iter()
                .map(|category| (category.to_string(), true))
                .collect(),
            road_type: RoadTypeCategory::all()
                .into_iter()
                .map(|category| (category.to_string(), true))
                .collect(),
        }
    }
}

impl FilterState {
    /// Stores one toggle. Idempotent; toggles have no ordering dependency.
    pub fn set(&mut self, kind: FilterKind, key: &str, visible: bool) {
        let table = match kind {
            FilterKind::Weather => &mut self.weather,
            FilterKind::RoadType => &mut self.road_type,
        };
        table.insert(key.to_string(), visible);
    }

    /// Whether the given annotation passes both filter tables.
    #[must_use]
    pub fn is_visible(&self, annotation: &Annotation) -> bool {
        let weather_ok = self
            .weather
            .get(annotation.weather.as_ref())
            .copied()
            .unwrap_or(false);
        let road_ok = self
            .road_type
            .get(annotation.road_type.as_ref())
            .copied()
            .unwrap_or(false);
        weather_ok && road_ok
    }
}
