//! Property-based tests for the gauge's mapping and widget invariants.
//!
//! Random ranges and sweeps go through the forward mapping, back through
//! the inverse, and through the widget's clamping and capping rules.

use proptest::prelude::*;

use speedmeter::{AngleMap, Bounds, GaugeConfig, NoImages, NoText, SpeedMeter};

/// Fold a screen angle into atan2's output range, as a hit test sees it.
fn fold(theta: f64) -> f64 {
    theta.sin().atan2(theta.cos())
}

/// Ranges wide enough that float noise stays far from the tolerance.
fn range() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0f64..1000.0, 1.0f64..2000.0).prop_map(|(min, span)| (min, min + span))
}

/// Sweeps clear of the degenerate equal-angle case (tested separately) and
/// of the exact 360-degree sweep, whose two endpoints share one screen
/// direction.
fn sweep() -> impl Strategy<Value = (f64, f64)> {
    (-360.0f64..360.0, -360.0f64..360.0)
        .prop_filter("distinct, capped, non-degenerate sweep", |(sa, se)| {
            let d = (se - sa).abs();
            d > 1.0 && d < 359.0
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Forward then inverse recovers any in-range value, for clockwise and
    /// counterclockwise sweeps alike.
    #[test]
    fn round_trip((min, max) in range(), (sa, se) in sweep(), t in 0.001f64..0.999) {
        let map = AngleMap::new(min, max, sa, se);
        let v = min + t * (max - min);
        let theta = fold(AngleMap::screen_theta(map.angle_of(v)));
        let got = map.value_at(theta);
        prop_assert!(got.is_some(), "in-sweep angle rejected for v={v}");
        let got = got.unwrap();
        let tol = (max - min) * 1e-9;
        prop_assert!((got - v).abs() <= tol, "round trip drifted: {v} -> {got}");
    }

    /// Same property on a full-circle dial, whose inverse must wrap across
    /// the atan2 seam.
    #[test]
    fn round_trip_full_circle((min, max) in range(), sa in -360.0f64..360.0, t in 0.001f64..0.999) {
        let map = AngleMap::new(min, max, sa, sa);
        let v = min + t * (max - min);
        let theta = fold(AngleMap::screen_theta(map.angle_of(v)));
        let got = map.value_at(theta);
        prop_assert!(got.is_some(), "full-circle angle rejected for v={v}");
        let tol = (max - min) * 1e-9;
        prop_assert!((got.unwrap() - v).abs() <= tol);
    }

    /// The forward mapping is strictly monotonic over the domain, in the
    /// direction of the sweep.
    #[test]
    fn forward_monotonic((min, max) in range(), (sa, se) in sweep()) {
        let map = AngleMap::new(min, max, sa, se);
        let step = (max - min) / 64.0;
        let direction = (se - sa).signum();
        for i in 0..64 {
            let v = min + step * f64::from(i);
            let d = map.angle_of(v + step) - map.angle_of(v);
            prop_assert!(d * direction > 0.0, "not monotonic at {v}: step {d}");
        }
    }

    /// Clamping an out-of-range value is idempotent and lands on a bound.
    #[test]
    fn value_clamping_idempotent((min, max) in range(), v in -1.0e6f64..1.0e6) {
        let cfg = GaugeConfig::builder().min(min).max(max).build();
        let mut w = SpeedMeter::new(cfg).unwrap();
        w.set_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0));
        w.set_value(v);
        let once = w.value();
        w.set_value(v);
        prop_assert_eq!(once, w.value());
        prop_assert!(once >= min && once <= max);
        if v < min {
            prop_assert_eq!(once, min);
        } else if v > max {
            prop_assert_eq!(once, max);
        }
    }

    /// Whatever angles the host pushes, the sweep magnitude never exceeds
    /// a full turn, and a violating assignment caps it at exactly 360.
    #[test]
    fn sweep_never_exceeds_full_turn(
        sa in -360.0f64..360.0,
        se in -360.0f64..360.0,
        swap in any::<bool>(),
    ) {
        let mut w = SpeedMeter::new(GaugeConfig::builder().build()).unwrap();
        if swap {
            w.set_start_angle(sa);
            w.set_end_angle(se);
        } else {
            w.set_end_angle(se);
            w.set_start_angle(sa);
        }
        let sweep = w.config().end_angle - w.config().start_angle;
        prop_assert!(sweep.abs() <= 360.0 + 1e-9, "sweep {sweep} escaped the cap");
        w.redraw(&NoText, &NoImages);
    }

    /// The tick layout always starts at the sweep start and ends at the
    /// sweep end, however unevenly `tick` divides the range.
    #[test]
    fn ticks_pin_the_sweep_ends((min, max) in range(), tick_div in 1u32..40) {
        let tick = (max - min) / f64::from(tick_div);
        let cfg = GaugeConfig::builder().min(min).max(max).tick(tick).build();
        let ticks = speedmeter::geometry::major_ticks(&cfg);
        prop_assert!(ticks.len() >= 2);
        prop_assert!((ticks[0].angle - cfg.start_angle).abs() < 1e-9);
        prop_assert!((ticks.last().unwrap().angle - cfg.end_angle).abs() < 1e-9);
        prop_assert!((ticks[0].value - min).abs() < 1e-9);
        prop_assert!(ticks.last().unwrap().value <= max + 1e-9);
    }
}
