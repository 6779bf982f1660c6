//! Which section of the page the reader is looking at.
//!
//! A section is "active" when it overlaps the focal band, a horizontal strip
//! of the viewport defined by two insets. The browser's intersection observer
//! does the geometry while the page runs; [`measure`] does the same sum on
//! bounding rectangles to seed the tracker on mount.

use super::sections::SectionId;

/// A horizontal strip of the viewport, given as fractions cut from its top
/// and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl FocalBand {
    /// The observer root margin that shrinks the viewport down to this band.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top_inset),
            percent(self.bottom_inset)
        )
    }

    /// Viewport-relative `(top, bottom)` of the band in pixels.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        (
            viewport_height * self.top_inset,
            viewport_height * (1.0 - self.bottom_inset),
        )
    }

    /// Share of `region` that lies inside the band, between 0 and 1.
    ///
    /// Sections span the full page width, so the share of the area equals
    /// the share of the height.
    pub fn overlap_ratio(&self, region: RegionRect, viewport_height: f64) -> f64 {
        let height = region.bottom - region.top;
        if height <= 0.0 {
            return 0.0;
        }
        let (band_top, band_bottom) = self.bounds(viewport_height);
        let overlap = region.bottom.min(band_bottom) - region.top.max(band_top);
        (overlap / height).clamp(0.0, 1.0)
    }
}

fn percent(fraction: f64) -> String {
    let value = (fraction * 100.0 * 1000.0).round() / 1000.0;
    format!("{}", value)
}

/// Viewport-relative vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    pub top: f64,
    pub bottom: f64,
}

/// One section's visibility as reported in an observation batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub section: SectionId,
    pub is_intersecting: bool,
}

/// Turns measured rectangles into a batch, in the order given.
pub fn measure(
    band: FocalBand,
    threshold: f64,
    viewport_height: f64,
    regions: &[(SectionId, RegionRect)],
) -> Vec<Observation> {
    regions
        .iter()
        .map(|(section, rect)| {
            let ratio = band.overlap_ratio(*rect, viewport_height);
            Observation {
                section: *section,
                is_intersecting: ratio > 0.0 && ratio >= threshold,
            }
        })
        .collect()
}

/// Holds the active-section pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Applies a batch of observations. Every intersecting entry overwrites
    /// the pointer, so the last one in the batch wins. Returns whether the
    /// pointer moved.
    pub fn apply_batch<I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = Observation>,
    {
        let before = self.active;
        for observation in batch {
            if observation.is_intersecting {
                self.active = observation.section;
            }
        }
        before != self.active
    }
}
