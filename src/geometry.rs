//! Screen-space layout: center and radius from widget bounds, tick and
//! sector placement, label anchoring.
//!
//! All points are in the widget's local coordinate space with y up; dial
//! angles are degrees clockwise from 12 o'clock, so a point at angle `d` and
//! radius `rho` is `(cx + rho*sin(d), cy + rho*cos(d))`.

use crate::config::{Color, GaugeConfig, SectorEntry};
use crate::mapping::AngleMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Widget bounds in the host's layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Point on the dial at `angle_deg` (dial frame) and `rho` from the center.
pub fn dial_point(center: Point, rho: f64, angle_deg: f64) -> Point {
    let t = angle_deg.to_radians();
    Point::new(center.x + rho * t.sin(), center.y + rho * t.cos())
}

// Radial insets for graduation marks, from the rim inward.
pub const MAJOR_TICK_INNER: f64 = 10.0;
pub const TICK_LABEL_INSET: f64 = 20.0;

/// One labeled graduation mark.
#[derive(Debug, Clone, PartialEq)]
pub struct MajorTick {
    pub value: f64,
    pub angle: f64,
    /// Numeral and mark suppressed (first/last with display flag off) while
    /// the slot still anchors its subticks.
    pub drawn: bool,
}

/// Major tick layout: values step from `min` by `tick` while they stay at or
/// below `max`; angles are spread uniformly by index between the sweep
/// endpoints, independent of whether `tick` divides the range.
///
/// Fewer than two positions (spacing wider than the range, or non-positive
/// spacing) yields an empty layout: tick drawing is a no-op, not an error.
pub fn major_ticks(cfg: &GaugeConfig) -> Vec<MajorTick> {
    if cfg.tick <= 0.0 {
        return Vec::new();
    }
    let count = (((cfg.max - cfg.min) / cfg.tick) + 1e-9).floor() as usize + 1;
    if count < 2 {
        return Vec::new();
    }
    let theta0 = cfg.start_angle;
    let theta1 = if cfg.start_angle == cfg.end_angle {
        cfg.start_angle + 360.0
    } else {
        cfg.end_angle
    };
    let delta = (theta1 - theta0) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let first = i == 0;
            let last = i == count - 1;
            MajorTick {
                value: cfg.min + cfg.tick * i as f64,
                angle: theta0 + delta * i as f64,
                drawn: (!first && !last)
                    || (first && cfg.display_first)
                    || (last && cfg.display_last),
            }
        })
        .collect()
}

/// Minor mark angles between two consecutive major ticks: the gap is divided
/// into `subtick + 1` equal parts, marks fall strictly between the majors.
pub fn subtick_angles(gap_start: f64, gap_end: f64, subtick: u32) -> Vec<f64> {
    if subtick == 0 {
        return Vec::new();
    }
    let delta = (gap_end - gap_start) / f64::from(subtick + 1);
    (1..=subtick)
        .map(|j| gap_start + delta * f64::from(j))
        .collect()
}

/// A resolved colored sector, in dial degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorArc {
    pub color: Color,
    pub a0: f64,
    pub a1: f64,
}

/// Walk the flat sector list into contiguous arcs.
///
/// Expected shape is `Bound, (Color, Bound)*` with an optional trailing
/// `Color` whose upper bound defaults to `max`. Anything that cannot be
/// paired that way resolves to no sectors at all; a broken sector list must
/// never fail the redraw pass.
pub fn resolve_sectors(
    entries: &[SectorEntry],
    map: &AngleMap,
    max: f64,
) -> Vec<SectorArc> {
    let mut it = entries.iter();
    let Some(SectorEntry::Bound(v0)) = it.next() else {
        return Vec::new();
    };
    let mut arcs = Vec::new();
    let mut a0 = map.angle_of(*v0);
    loop {
        let color = match it.next() {
            None => break,
            Some(SectorEntry::Color(c)) => *c,
            Some(SectorEntry::Bound(_)) => return Vec::new(),
        };
        let v1 = match it.next() {
            None => max,
            Some(SectorEntry::Bound(v)) => *v,
            Some(SectorEntry::Color(_)) => return Vec::new(),
        };
        let a1 = map.angle_of(v1);
        arcs.push(SectorArc { color, a0, a1 });
        a0 = a1;
    }
    arcs
}

/// Anchor point of the text/icon label: angle interpolated across the raw
/// sweep by `label_angle_ratio`, radius scaled by `label_radius_ratio`
/// (negative ratios place the label on the opposite side of the center).
pub fn label_anchor(cfg: &GaugeConfig, center: Point, radius: f64) -> Point {
    let theta = cfg.start_angle + cfg.label_angle_ratio * (cfg.end_angle - cfg.start_angle);
    dial_point(center, radius * cfg.label_radius_ratio, theta)
}
