//! Gauge parameter set and the few types it is built from.

use bon::Builder;
use thiserror::Error;

/// Color representation for gauge elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// One entry of the flat sector description.
///
/// Sectors are given as a leading lower bound followed by (color, upper
/// bound) pairs: `[Bound(v0), Color(c1), Bound(v1), Color(c2), ...]`.
/// A trailing color with no bound closes its arc at `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectorEntry {
    Bound(f64),
    Color(Color),
}

/// The only configuration shape that is rejected outright: every mapping
/// coefficient divides by `max - min`.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("empty gauge range: min {min} must be strictly below max {max}")]
    EmptyRange { min: f64, max: f64 },
}

/// Full parameter set of a gauge.
///
/// Built once via the generated builder; mutated afterwards through the
/// typed setters on [`crate::SpeedMeter`], which enforce the clamping rules
/// and schedule the partial redraws.
#[derive(Debug, Clone, Builder)]
pub struct GaugeConfig {
    /// Lower bound of the value domain.
    #[builder(default = 0.0)]
    pub min: f64,
    /// Upper bound of the value domain, strictly above `min`.
    #[builder(default = 100.0)]
    pub max: f64,

    /// Value spacing between labeled major ticks. Non-positive spacing, or
    /// spacing wider than the range, disables tick drawing.
    #[builder(default = 10.0)]
    pub tick: f64,
    /// Minor ticks between two consecutive major ticks.
    #[builder(default = 0)]
    pub subtick: u32,

    /// Draw the first major tick and its numeral.
    #[builder(default = true)]
    pub display_first: bool,
    /// Draw the last major tick and its numeral.
    #[builder(default = true)]
    pub display_last: bool,

    /// Dial sweep start, degrees clockwise from 12 o'clock, in [-360, 360].
    #[builder(default = -90.0)]
    pub start_angle: f64,
    /// Dial sweep end, degrees clockwise from 12 o'clock, in [-360, 360].
    /// Equal to `start_angle` means a full 360-degree dial.
    #[builder(default = 135.0)]
    pub end_angle: f64,

    /// Rim, tick and numeral color.
    #[builder(default = Color::new(0xff, 0xff, 0xff))]
    pub cadran_color: Color,

    /// Text label; empty means none. Ignored when `label_icon` is set.
    #[builder(default = String::new())]
    pub label: String,
    /// Image-service key for an icon label.
    pub label_icon: Option<String>,
    /// Icon size as a fraction of the radius, in [0, 1].
    #[builder(default = 0.5)]
    pub label_icon_scale: f64,
    /// Label anchor radius as a fraction of the radius, in [-1, 1].
    #[builder(default = 0.3)]
    pub label_radius_ratio: f64,
    /// Label anchor angle as a fraction of the sweep, in [0, 1].
    #[builder(default = 0.5)]
    pub label_angle_ratio: f64,

    /// Needle color, used by the procedural needle sprite.
    #[builder(default = Color::new(0x6b, 0xf2, 0xff))]
    pub needle_color: Color,
    /// Image-service key for a custom needle sprite; falls back to the
    /// procedural needle when absent or unresolvable.
    pub needle_image: Option<String>,

    /// Flat sector description, see [`SectorEntry`].
    #[builder(default = Vec::new())]
    pub sectors: Vec<SectorEntry>,
    /// 0 fills sectors as full pie wedges; > 0 strokes a ring of that width
    /// inset from the rim.
    #[builder(default = 0.0)]
    pub sector_width: f64,

    /// When set, an arc trails the needle from the sweep start in this color.
    pub shadow_color: Option<Color>,

    /// Formatter for tick numerals; defaults to rounded integers.
    pub tick_label: Option<fn(f64) -> String>,

    /// Initial value, clamped into `[min, max]` at construction.
    #[builder(default = 0.0)]
    pub value: f64,
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Numeral text for a tick value.
    pub fn tick_text(&self, v: f64) -> String {
        match self.tick_label {
            Some(f) => f(v),
            None => format!("{}", v.round() as i64),
        }
    }
}
