#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map-facing data types shared between the crash-map core and widget hosts.
//!
//! The rendering widget itself (tile layers, marker clustering) lives
//! outside this workspace; these types plus the display constants are the
//! contract a host needs to draw what the core computes.

use crash_map_crash_models::{RoadTypeCategory, WeatherCategory};
use serde::{Deserialize, Serialize};

/// Initial viewport center (Wyoming).
pub const DEFAULT_CENTER: LatLng = LatLng::new(43.0, -107.5);

/// Initial viewport zoom.
pub const DEFAULT_ZOOM: f64 = 6.0;

/// Maximum zoom supported by the basemap tile layers.
pub const TILE_MAX_ZOOM: f64 = 19.0;

/// Zoom level at which the cluster layer stops clustering and shows
/// individual markers.
pub const CLUSTERING_DISABLED_AT_ZOOM: f64 = 13.0;

/// Minimum zoom applied when an annotation is activated (clicked). The
/// viewport recenters at `max(current zoom, MIN_ACTIVATION_ZOOM)` so
/// activation never zooms out.
pub const MIN_ACTIVATION_ZOOM: f64 = 12.0;

/// Pixel padding applied when fitting the viewport to the visible set.
pub const FIT_PADDING_PX: u32 = 20;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Computes the bounding box of a set of points. Returns `None` for an
    /// empty set.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for point in points {
            match bounds.as_mut() {
                Some(bounds) => bounds.extend(point),
                None => {
                    bounds = Some(Self::new(point.lng, point.lat, point.lng, point.lat));
                }
            }
        }
        bounds
    }

    /// Grows the box to include the given point.
    pub const fn extend(&mut self, point: LatLng) {
        if point.lng < self.west {
            self.west = point.lng;
        }
        if point.lng > self.east {
            self.east = point.lng;
        }
        if point.lat < self.south {
            self.south = point.lat;
        }
        if point.lat > self.north {
            self.north = point.lat;
        }
    }
}

/// How a crash marker is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Marker radius in pixels.
    pub radius: f64,
    /// Stroke color (RGBA hex).
    pub color: &'static str,
    /// Fill color (RGBA hex). Matches the stroke color.
    pub fill_color: &'static str,
    /// Fill opacity, 0.0 to 1.0.
    pub fill_opacity: f64,
    /// Stroke weight in pixels.
    pub weight: f64,
}

impl MarkerStyle {
    /// The standard crash marker style, colored by weather category.
    #[must_use]
    pub const fn for_weather(category: WeatherCategory) -> Self {
        Self {
            radius: 6.0,
            color: category.color(),
            fill_color: category.color(),
            fill_opacity: 0.85,
            weight: 1.0,
        }
    }
}

/// A single renderable crash point.
///
/// The controller owns the full annotation list for the lifetime of the
/// loaded dataset and replaces it wholesale on reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Identifier: the annotation's index in the controller's full list,
    /// stable for the lifetime of the loaded dataset. Hosts hand it back
    /// when a marker is activated, so clicks on a filtered (visible-only)
    /// layer still resolve without host-side bookkeeping.
    pub id: usize,
    /// Marker position.
    pub position: LatLng,
    /// Weather category this crash belongs to.
    pub weather: WeatherCategory,
    /// Road-type category this crash belongs to.
    pub road_type: RoadTypeCategory,
    /// How to draw the marker.
    pub style: MarkerStyle,
    /// Plain-text popup summary: the crash's descriptive fields plus the
    /// per-location breakdown counts.
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert_eq!(BoundingBox::from_points([]), None);
    }

    #[test]
    fn bounds_of_single_point_is_degenerate() {
        let bounds = BoundingBox::from_points([LatLng::new(43.0, -107.5)]).unwrap();
        assert_eq!(bounds, BoundingBox::new(-107.5, 43.0, -107.5, 43.0));
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = BoundingBox::from_points([
            LatLng::new(43.0, -107.5),
            LatLng::new(41.14, -104.82),
            LatLng::new(44.8, -106.96),
        ])
        .unwrap();
        assert_eq!(bounds, BoundingBox::new(-107.5, 41.14, -104.82, 44.8));
    }

    #[test]
    fn marker_style_uses_category_color() {
        let style = MarkerStyle::for_weather(WeatherCategory::Rain);
        assert_eq!(style.color, "#f52b2bff");
        assert_eq!(style.color, style.fill_color);
        assert!((style.radius - 6.0).abs() < f64::EPSILON);
    }
}
