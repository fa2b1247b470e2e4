//! The seam between the crash-map core and the rendering widget.

use crash_map_map_models::{Annotation, BoundingBox, LatLng};

/// Operations the external map widget must provide.
///
/// The widget owns the actual tile layers and the cluster-aware marker
/// layer; the core only tells it what to show and where to look.
pub trait MapWidget {
    /// Replaces the cluster layer's contents with exactly the given
    /// annotations (full replace, not an incremental diff).
    fn set_annotations(&mut self, visible: &[Annotation]);

    /// Returns the current viewport zoom level.
    fn zoom(&self) -> f64;

    /// Recenters the viewport on `center` at the given zoom.
    fn set_view(&mut self, center: LatLng, zoom: f64);

    /// Fits the viewport to `bounds`, with `padding_px` pixels of margin on
    /// each side.
    fn fit_bounds(&mut self, bounds: BoundingBox, padding_px: u32);
}
