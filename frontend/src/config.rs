use crate::view::tracker::FocalBand;

/// How long a download slot shows its "preparing" state before the save fires.
pub const DOWNLOAD_DELAY_MS: u32 = 2_500;

/// Delay before honouring a `#fragment` present when the page loads.
pub const FRAGMENT_JUMP_DELAY_MS: u32 = 100;

/// Fraction of the viewport cut from the top of the focal band.
pub const FOCAL_BAND_TOP_INSET: f64 = 0.20;

/// Fraction of the viewport cut from the bottom of the focal band.
pub const FOCAL_BAND_BOTTOM_INSET: f64 = 0.40;

/// Minimal share of a section's area that has to sit inside the focal band.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Page-wide tunables, provided to the component tree through a context.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub download_delay_ms: u32,
    pub fragment_jump_delay_ms: u32,
    pub focal_band: FocalBand,
    pub visibility_threshold: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            download_delay_ms: DOWNLOAD_DELAY_MS,
            fragment_jump_delay_ms: FRAGMENT_JUMP_DELAY_MS,
            focal_band: FocalBand {
                top_inset: FOCAL_BAND_TOP_INSET,
                bottom_inset: FOCAL_BAND_BOTTOM_INSET,
            },
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }
}
