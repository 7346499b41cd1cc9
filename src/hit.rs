//! Pointer position to value: the inverse of the dial layout.

use crate::geometry::Point;
use crate::mapping::AngleMap;

/// Maps a widget-local pointer position (y up) back to a domain value.
///
/// Borrowed from the widget's current geometry for the duration of one
/// lookup; never owns state of its own.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    center: Point,
    radius: f64,
    map: &'a AngleMap,
    extended: bool,
}

impl<'a> HitTester<'a> {
    pub fn new(center: Point, radius: f64, map: &'a AngleMap, extended: bool) -> Self {
        Self {
            center,
            radius,
            map,
            extended,
        }
    }

    /// `Some(value)` when the point lies inside the dial disk and its angle
    /// falls within the sweep; `None` otherwise — never a fabricated value.
    ///
    /// The extended-touch flag is carried on the widget but does not widen
    /// acceptance: an out-of-sweep angle misses either way. Whether it
    /// should instead clamp to the nearest bound is an embedding-application
    /// decision, deliberately not taken here.
    pub fn locate(&self, pos: Point) -> Option<f64> {
        let dx = pos.x - self.center.x;
        let dy = pos.y - self.center.y;
        if dx * dx + dy * dy > self.radius * self.radius {
            return None;
        }
        let theta = dy.atan2(dx);
        let v = self.map.value_at(theta);
        if v.is_some() || !self.extended {
            return v;
        }
        // Extended mode reserved; out-of-sweep angles miss either way.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::dial_point;
    use approx::assert_relative_eq;

    fn tester(map: &AngleMap) -> HitTester<'_> {
        HitTester::new(Point::new(200.0, 200.0), 100.0, map, false)
    }

    #[test]
    fn points_outside_the_disk_never_hit() {
        let map = AngleMap::new(0.0, 100.0, -90.0, 135.0);
        let t = tester(&map);
        for deg in 0..360 {
            let p = dial_point(Point::new(200.0, 200.0), 101.0, f64::from(deg));
            assert_eq!(t.locate(p), None, "angle {deg}");
        }
    }

    #[test]
    fn mid_sweep_point_recovers_the_value() {
        let map = AngleMap::new(0.0, 100.0, -90.0, 135.0);
        let t = tester(&map);
        let p = dial_point(Point::new(200.0, 200.0), 50.0, map.angle_of(50.0));
        let v = t.locate(p).expect("point on the dial must hit");
        assert_relative_eq!(v, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn dead_zone_misses_even_in_extended_mode() {
        let map = AngleMap::new(0.0, 100.0, -90.0, 135.0);
        let center = Point::new(200.0, 200.0);
        // Between the sweep ends: dial angle 200 degrees is off-dial.
        let p = dial_point(center, 50.0, 200.0);
        assert_eq!(HitTester::new(center, 100.0, &map, false).locate(p), None);
        assert_eq!(HitTester::new(center, 100.0, &map, true).locate(p), None);
    }

    #[test]
    fn full_circle_hits_everywhere_inside() {
        let map = AngleMap::new(0.0, 100.0, 0.0, 0.0);
        let t = tester(&map);
        let p = dial_point(Point::new(200.0, 200.0), 60.0, 90.0);
        assert_relative_eq!(t.locate(p).unwrap(), 25.0, epsilon = 1e-9);
        let p = dial_point(Point::new(200.0, 200.0), 60.0, 270.0);
        assert_relative_eq!(t.locate(p).unwrap(), 75.0, epsilon = 1e-9);
    }
}
