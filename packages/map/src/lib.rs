#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The crash map controller.
//!
//! Owns the loaded annotation list and the category visibility filters, and
//! drives the external map widget through the [`MapWidget`] seam. The host
//! dispatches its UI events here: a one-shot [`MapController::load`] when
//! the page starts, [`MapController::set_filter`] + [`MapController::refresh`]
//! on checkbox toggles, and [`MapController::activate`] on marker clicks.
//! Everything runs on the host's single event-dispatch thread; each
//! operation completes before the next is dispatched.

pub mod builder;
pub mod filter;
pub mod widget;

use std::io::Read;

use crash_map_map_models::{Annotation, BoundingBox, FIT_PADDING_PX, MIN_ACTIVATION_ZOOM};
use crash_map_source::SourceError;

pub use crate::filter::{FilterKind, FilterState};
pub use crate::widget::MapWidget;

/// What a completed load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Annotations now held by the controller.
    pub annotations: usize,
    /// Input rows dropped for missing or unparseable coordinates.
    pub skipped_rows: usize,
}

/// Owns all mutable crash-map state and the widget handle.
///
/// Replaces the annotation list wholesale on each load; filter state
/// deliberately survives reloads.
pub struct MapController<W: MapWidget> {
    widget: W,
    annotations: Vec<Annotation>,
    filters: FilterState,
}

impl<W: MapWidget> MapController<W> {
    /// Creates a controller with an empty annotation list and every
    /// category visible.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            annotations: Vec::new(),
            filters: FilterState::default(),
        }
    }

    /// Loads the crash dataset from a CSV stream, rebuilds the breakdown
    /// table and the annotation list, and runs the first refresh.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the stream cannot be read. On error the
    /// annotation list keeps its previous contents (empty on first load)
    /// and the filters are untouched.
    pub fn load(&mut self, reader: impl Read) -> Result<LoadSummary, SourceError> {
        let outcome = match crash_map_source::load_records(reader) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Crash data load failed: {e}");
                return Err(e);
            }
        };

        // The breakdown table must be complete before any annotation is
        // built: summaries embed final per-location totals.
        let breakdowns = crash_map_analytics::aggregate(&outcome.records);
        self.annotations = builder::build_annotations(&outcome.records, &breakdowns);
        self.refresh();

        Ok(LoadSummary {
            annotations: self.annotations.len(),
            skipped_rows: outcome.skipped,
        })
    }

    /// Stores one filter toggle. Has no observable effect until
    /// [`Self::refresh`] runs.
    pub fn set_filter(&mut self, kind: FilterKind, key: &str, visible: bool) {
        self.filters.set(kind, key, visible);
    }

    /// Recomputes the visible subset and pushes it to the widget.
    ///
    /// The widget receives a full replacement of its annotation layer. If
    /// anything is visible the viewport is fitted to the visible set's
    /// bounding box; an empty subset leaves the viewport unchanged.
    pub fn refresh(&mut self) {
        let visible: Vec<Annotation> = self
            .annotations
            .iter()
            .filter(|annotation| self.filters.is_visible(annotation))
            .cloned()
            .collect();

        self.widget.set_annotations(&visible);

        if let Some(bounds) =
            BoundingBox::from_points(visible.iter().map(|annotation| annotation.position))
        {
            self.widget.fit_bounds(bounds, FIT_PADDING_PX);
        }
    }

    /// Handles a marker click: recenters on the annotation without ever
    /// zooming out (`max(current zoom, MIN_ACTIVATION_ZOOM)`).
    ///
    /// `id` is the [`Annotation::id`] the widget received with the marker,
    /// so clicks resolve even when filters have hidden part of the list.
    /// An unknown id is a no-op.
    pub fn activate(&mut self, id: usize) {
        let Some(annotation) = self.annotations.get(id) else {
            return;
        };
        let zoom = self.widget.zoom().max(MIN_ACTIVATION_ZOOM);
        self.widget.set_view(annotation.position, zoom);
    }

    /// The full annotation list for the loaded dataset.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The annotations that pass the current filters.
    #[must_use]
    pub fn visible_annotations(&self) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|annotation| self.filters.is_visible(annotation))
            .collect()
    }

    /// The widget handle.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the widget handle, for host-side configuration.
    pub const fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }
}
