//! Scroll progress and the decorations driven by it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub at: f64,
    pub color: Rgb,
}

/// Page background over the whole scroll: white through the first 40%, then
/// sky blue, easing back to slate at the bottom.
pub const BACKGROUND_RAMP: [ColorStop; 4] = [
    ColorStop { at: 0.0, color: Rgb::from_hex(0xffffff) },
    ColorStop { at: 0.4, color: Rgb::from_hex(0xffffff) },
    ColorStop { at: 0.6, color: Rgb::from_hex(0xb6e3f4) },
    ColorStop { at: 1.0, color: Rgb::from_hex(0xf8fafc) },
];

/// Fraction of the document scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Piecewise-linear colour along `stops`, which must be sorted by `at`.
/// Progress outside the first and last stop takes the edge colour.
pub fn interpolate_color(stops: &[ColorStop], progress: f64) -> Rgb {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgb::from_hex(0xffffff),
    };
    if progress <= first.at {
        return first.color;
    }
    if progress >= last.at {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if progress <= to.at {
            let span = to.at - from.at;
            let t = if span > 0.0 { (progress - from.at) / span } else { 1.0 };
            let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t).round() as u8;
            return Rgb {
                r: channel(from.color.r, to.color.r),
                g: channel(from.color.g, to.color.g),
                b: channel(from.color.b, to.color.b),
            };
        }
    }
    last.color
}

pub fn background_color(progress: f64) -> Rgb {
    interpolate_color(&BACKGROUND_RAMP, progress)
}

/// Scroll progress at which the floating items reach their resting place.
pub const PARALLAX_END: f64 = 0.3;

/// Start and end offsets, in pixels, of a floating decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTrack {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl ParallaxTrack {
    pub fn offset(&self, progress: f64) -> (f64, f64) {
        let t = (progress / PARALLAX_END).clamp(0.0, 1.0);
        (
            lerp(self.from.0, self.to.0, t),
            lerp(self.from.1, self.to.1, t),
        )
    }

    pub fn transform(&self, progress: f64) -> String {
        let (x, y) = self.offset(progress);
        format!("transform: translate({:.1}px, {:.1}px);", x, y)
    }
}

/// The grocery items drifting towards the phone mockup in the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingKind {
    Milk,
    Shirt,
    Qr,
}

impl FloatingKind {
    pub const ALL: [FloatingKind; 3] = [FloatingKind::Milk, FloatingKind::Shirt, FloatingKind::Qr];

    pub fn track(self) -> ParallaxTrack {
        match self {
            FloatingKind::Milk => ParallaxTrack { from: (-300.0, 100.0), to: (-100.0, 0.0) },
            FloatingKind::Shirt => ParallaxTrack { from: (300.0, -100.0), to: (150.0, 200.0) },
            FloatingKind::Qr => ParallaxTrack { from: (-200.0, 300.0), to: (0.0, 400.0) },
        }
    }
}
