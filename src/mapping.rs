//! Linear value <-> angle mapping for the dial.
//!
//! Two frames are involved. The *dial frame* measures degrees clockwise from
//! 12 o'clock, so a point at angle `d` sits at
//! `(cx + r*sin(d), cy + r*cos(d))` with y up. The *screen frame* is the
//! plain `atan2` angle of a pointer position relative to the center, in
//! radians with y up. The forward mapping produces dial degrees for drawing;
//! the inverse consumes screen radians from hit tests.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Precomputed forward and inverse mapping coefficients for one dial
/// configuration. Rebuilt whenever range or sweep angles change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMap {
    min: f64,
    max: f64,
    // forward: angle_of(v) = -(a*v + b), dial degrees
    a: f64,
    b: f64,
    // inverse: value_at(theta) = ra*theta + rb, screen radians
    start_theta: f64,
    end_theta: f64,
    direct: bool,
    ra: f64,
    rb: f64,
}

impl AngleMap {
    /// Requires `min < max` (enforced upstream by the config validation).
    ///
    /// Equal start and end angles mean a full-circle dial: the effective
    /// sweep is +360 dial degrees, which is a screen sweep of -2*pi.
    pub fn new(min: f64, max: f64, start_angle: f64, end_angle: f64) -> Self {
        let theta0 = start_angle;
        let theta1 = if start_angle == end_angle {
            start_angle + 360.0
        } else {
            end_angle
        };
        let a = (theta0 - theta1) / (max - min);
        let b = -theta0 - a * min;

        let start_theta = FRAC_PI_2 - start_angle.to_radians();
        let end_theta = if start_angle == end_angle {
            start_theta - TAU
        } else {
            FRAC_PI_2 - end_angle.to_radians()
        };
        let direct = start_theta < end_theta;
        let ra = (max - min) / (end_theta - start_theta);
        let rb = min - ra * start_theta;

        Self {
            min,
            max,
            a,
            b,
            start_theta,
            end_theta,
            direct,
            ra,
            rb,
        }
    }

    /// Dial angle in degrees for a value. `angle_of(min)` is the start
    /// angle, `angle_of(max)` the end angle (start + 360 for a full circle).
    pub fn angle_of(&self, value: f64) -> f64 {
        -(self.a * value + self.b)
    }

    /// Screen-frame equivalent of a dial angle, for tests and callers that
    /// need to compare against `atan2` output.
    pub fn screen_theta(angle_deg: f64) -> f64 {
        FRAC_PI_2 - angle_deg.to_radians()
    }

    /// Value for a screen-frame angle, or `None` when the angle maps outside
    /// the domain.
    ///
    /// The angle is wrapped into the sweep's own turn, which re-enters dials
    /// whose sweep crosses the atan2 discontinuity at +-pi and dials pushed
    /// a full turn away by large start angles.
    pub fn value_at(&self, theta: f64) -> Option<f64> {
        let (lo, hi) = if self.direct {
            (self.start_theta, self.end_theta)
        } else {
            (self.end_theta, self.start_theta)
        };
        let mut theta = theta;
        if theta < lo || theta > hi {
            theta = lo + (theta - lo).rem_euclid(TAU);
        }
        let v = self.ra * theta + self.rb;
        (v >= self.min && v <= self.max).then_some(v)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
