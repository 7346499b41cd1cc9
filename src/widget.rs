//! The gauge widget: parameter owner, redraw scheduler, input surface.
//!
//! Setters never emit drawing primitives. They update the parameter set,
//! apply the clamping rules, and mark the affected redraw groups dirty; all
//! emission happens inside [`SpeedMeter::redraw`], which first refreshes the
//! mapping coefficients, then rebuilds only the dirty groups, then applies
//! the cheap value-driven mutations (shadow end angle, needle rotation)
//! through the retained scene handles. Host callbacks that mutate
//! parameters between paints therefore cannot interleave with a rebuild.

use log::debug;

use crate::config::{Color, ConfigError, GaugeConfig, SectorEntry};
use crate::geometry::{
    self, Bounds, Point, MAJOR_TICK_INNER, TICK_LABEL_INSET,
};
use crate::hit::HitTester;
use crate::mapping::AngleMap;
use crate::render;
use crate::scene::{
    ArcHandle, Group, ImageSource, Primitive, RotationHandle, Scene, TextSource,
};

const CADRAN_WIDTH: f64 = 1.5;
const MAJOR_TICK_WIDTH: f64 = 2.0;
const MINOR_TICK_WIDTH: f64 = 0.75;
const SHADOW_WIDTH: f64 = 6.0;
const TICK_NUMERAL_PX: f32 = 18.0;
const LABEL_PX: f32 = 24.0;

/// Pointer button discriminator. Secondary-button semantics belong to the
/// embedding application; the gauge only acts on primary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// A pointer press or drag sample in widget-local coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub button: PointerButton,
    /// Multi-touch double gesture; ignored by the gauge.
    pub double_tap: bool,
}

/// Bit set of dirty redraw groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct GroupSet(u8);

impl GroupSet {
    const ALL: GroupSet = GroupSet(0b1_1111);

    fn mark(&mut self, group: Group) {
        self.0 |= 1u8 << group.index();
    }

    fn contains(self, group: Group) -> bool {
        self.0 & (1u8 << group.index()) != 0
    }

    fn take(&mut self) -> GroupSet {
        std::mem::take(self)
    }
}

/// Circular analog gauge widget.
///
/// Owns the parameter set and the retained drawing scene; a backend replays
/// [`SpeedMeter::scene`] after each [`SpeedMeter::redraw`].
#[derive(Debug)]
pub struct SpeedMeter {
    config: GaugeConfig,
    bounds: Bounds,
    value: f64,
    extended_touch: bool,
    map: AngleMap,
    scene: Scene,
    dirty: GroupSet,
    map_stale: bool,
    value_moved: bool,
    shadow_arc: Option<ArcHandle>,
    needle_rot: Option<RotationHandle>,
}

impl SpeedMeter {
    /// Rejects an empty value range; everything else is clamped into shape.
    pub fn new(mut config: GaugeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        config.start_angle = config.start_angle.clamp(-360.0, 360.0);
        config.end_angle = config.end_angle.clamp(-360.0, 360.0);
        if config.end_angle - config.start_angle > 360.0 {
            config.end_angle = config.start_angle + 360.0;
        } else if config.start_angle - config.end_angle > 360.0 {
            config.end_angle = config.start_angle - 360.0;
        }
        config.sector_width = config.sector_width.max(0.0);
        config.label_icon_scale = config.label_icon_scale.clamp(0.0, 1.0);
        config.label_radius_ratio = config.label_radius_ratio.clamp(-1.0, 1.0);
        config.label_angle_ratio = config.label_angle_ratio.clamp(0.0, 1.0);
        let map = AngleMap::new(
            config.min,
            config.max,
            config.start_angle,
            config.end_angle,
        );
        let value = config.value.clamp(config.min, config.max);
        Ok(Self {
            config,
            bounds: Bounds::default(),
            value,
            extended_touch: false,
            map,
            scene: Scene::new(),
            dirty: GroupSet::ALL,
            map_stale: false,
            value_moved: false,
            shadow_arc: None,
            needle_rot: None,
        })
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn set_extended_touch(&mut self, on: bool) {
        self.extended_touch = on;
    }

    /// All geometry is center/radius-relative, so a bounds change rebuilds
    /// every group.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.dirty = GroupSet::ALL;
        }
    }

    /// Out-of-range values are clamped, never rejected. Only the shadow end
    /// angle and the needle rotation change; no group rebuilds.
    pub fn set_value(&mut self, value: f64) {
        let clamped = value.clamp(self.config.min, self.config.max);
        if clamped != value {
            debug!("value {value} clamped to {clamped}");
        }
        self.value = clamped;
        self.value_moved = true;
    }

    /// Replace the domain range. The current value is re-clamped into it.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        self.config.min = min;
        self.config.max = max;
        self.value = self.value.clamp(min, max);
        self.map_stale = true;
        self.value_moved = true;
        self.dirty.mark(Group::Sectors);
        self.dirty.mark(Group::Shadow);
        self.dirty.mark(Group::Dial);
        Ok(())
    }

    /// Sweep start in degrees, clamped to [-360, 360]. If the sweep would
    /// exceed a full turn the end angle is pulled along to cap it at
    /// exactly 360.
    pub fn set_start_angle(&mut self, deg: f64) {
        self.config.start_angle = deg.clamp(-360.0, 360.0);
        if self.config.end_angle - self.config.start_angle > 360.0 {
            self.config.end_angle = self.config.start_angle + 360.0;
            debug!("end angle pulled to {} to cap the sweep", self.config.end_angle);
        } else if self.config.start_angle - self.config.end_angle > 360.0 {
            self.config.end_angle = self.config.start_angle - 360.0;
            debug!("end angle pulled to {} to cap the sweep", self.config.end_angle);
        }
        self.sweep_changed();
    }

    /// Sweep end in degrees, clamped to [-360, 360]; caps the sweep by
    /// pulling the start angle along.
    pub fn set_end_angle(&mut self, deg: f64) {
        self.config.end_angle = deg.clamp(-360.0, 360.0);
        if self.config.end_angle - self.config.start_angle > 360.0 {
            self.config.start_angle = self.config.end_angle - 360.0;
            debug!(
                "start angle pulled to {} to cap the sweep",
                self.config.start_angle
            );
        } else if self.config.start_angle - self.config.end_angle > 360.0 {
            self.config.start_angle = self.config.end_angle + 360.0;
            debug!(
                "start angle pulled to {} to cap the sweep",
                self.config.start_angle
            );
        }
        self.sweep_changed();
    }

    fn sweep_changed(&mut self) {
        // Mapping coefficients feed every group's geometry.
        self.map_stale = true;
        self.value_moved = true;
        self.dirty = GroupSet::ALL;
    }

    pub fn set_tick(&mut self, tick: f64) {
        self.config.tick = tick;
        self.dirty.mark(Group::Dial);
    }

    pub fn set_subtick(&mut self, subtick: u32) {
        self.config.subtick = subtick;
        self.dirty.mark(Group::Dial);
    }

    pub fn set_display_first(&mut self, on: bool) {
        self.config.display_first = on;
        self.dirty.mark(Group::Dial);
    }

    pub fn set_display_last(&mut self, on: bool) {
        self.config.display_last = on;
        self.dirty.mark(Group::Dial);
    }

    pub fn set_cadran_color(&mut self, color: Color) {
        self.config.cadran_color = color;
        self.dirty.mark(Group::Dial);
    }

    pub fn set_tick_label(&mut self, formatter: Option<fn(f64) -> String>) {
        self.config.tick_label = formatter;
        self.dirty.mark(Group::Dial);
    }

    pub fn set_sectors(&mut self, sectors: Vec<SectorEntry>) {
        self.config.sectors = sectors;
        self.dirty.mark(Group::Sectors);
    }

    pub fn set_sector_width(&mut self, width: f64) {
        self.config.sector_width = width.max(0.0);
        self.dirty.mark(Group::Sectors);
    }

    pub fn set_shadow_color(&mut self, color: Option<Color>) {
        self.config.shadow_color = color;
        self.dirty.mark(Group::Sectors);
        self.dirty.mark(Group::Shadow);
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.config.label = label.into();
        self.dirty.mark(Group::Label);
    }

    pub fn set_label_icon(&mut self, icon: Option<String>) {
        self.config.label_icon = icon;
        self.dirty.mark(Group::Label);
    }

    pub fn set_label_icon_scale(&mut self, scale: f64) {
        self.config.label_icon_scale = scale.clamp(0.0, 1.0);
        self.dirty.mark(Group::Label);
    }

    pub fn set_label_radius_ratio(&mut self, ratio: f64) {
        self.config.label_radius_ratio = ratio.clamp(-1.0, 1.0);
        self.dirty.mark(Group::Label);
    }

    pub fn set_label_angle_ratio(&mut self, ratio: f64) {
        self.config.label_angle_ratio = ratio.clamp(0.0, 1.0);
        self.dirty.mark(Group::Label);
    }

    pub fn set_needle_color(&mut self, color: Color) {
        self.config.needle_color = color;
        self.dirty.mark(Group::Needle);
    }

    pub fn set_needle_image(&mut self, key: Option<String>) {
        self.config.needle_image = key;
        self.dirty.mark(Group::Needle);
    }

    /// Map a widget-local point (y up) to a value, or `None` when it misses
    /// the dial.
    pub fn locate(&self, pos: Point) -> Option<f64> {
        HitTester::new(
            self.bounds.center(),
            self.bounds.radius(),
            &self.map,
            self.extended_touch,
        )
        .locate(pos)
    }

    /// Primary press/drag sets the value through the hit test; secondary
    /// buttons and double-tap gestures are left to the embedding
    /// application. Returns whether the event moved the value.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        if event.double_tap || event.button != PointerButton::Primary {
            return false;
        }
        match self.locate(event.pos) {
            Some(v) => {
                self.set_value(v);
                true
            }
            None => false,
        }
    }

    /// The redraw pass: refresh mapping coefficients, rebuild dirty groups,
    /// then apply value-driven handle mutations. Idempotent when clean.
    pub fn redraw(&mut self, text: &dyn TextSource, images: &dyn ImageSource) {
        if self.map_stale {
            self.map = AngleMap::new(
                self.config.min,
                self.config.max,
                self.config.start_angle,
                self.config.end_angle,
            );
            self.map_stale = false;
        }
        let dirty = self.dirty.take();
        let center = self.bounds.center();
        let radius = self.bounds.radius();

        if dirty.contains(Group::Sectors) {
            self.rebuild_sectors(center, radius);
        }
        if dirty.contains(Group::Shadow) {
            self.rebuild_shadow(center, radius);
        }
        if dirty.contains(Group::Dial) {
            self.rebuild_dial(text, center, radius);
        }
        if dirty.contains(Group::Label) {
            self.rebuild_label(text, images, center, radius);
        }
        if dirty.contains(Group::Needle) {
            self.rebuild_needle(images, center, radius);
        }

        if self.value_moved {
            let angle = self.map.angle_of(self.value);
            if let Some(h) = self.shadow_arc {
                self.scene.set_arc_end(h, angle);
            }
            if let Some(h) = self.needle_rot {
                self.scene.set_rotation(h, angle);
            }
            self.value_moved = false;
        }
    }

    fn rebuild_sectors(&mut self, center: Point, radius: f64) {
        self.scene.clear(Group::Sectors);
        let arcs = geometry::resolve_sectors(&self.config.sectors, &self.map, self.config.max);
        debug!("rebuilding sectors: {} arc(s)", arcs.len());
        for arc in arcs {
            let prim = if self.config.sector_width > 0.0 {
                Primitive::Ring {
                    center,
                    radius,
                    width: self.config.sector_width,
                    a0: arc.a0,
                    a1: arc.a1,
                    color: arc.color,
                }
            } else {
                Primitive::Wedge {
                    center,
                    radius,
                    a0: arc.a0,
                    a1: arc.a1,
                    color: arc.color,
                }
            };
            self.scene.push(Group::Sectors, prim);
        }
    }

    fn rebuild_shadow(&mut self, center: Point, radius: f64) {
        self.scene.clear(Group::Shadow);
        self.shadow_arc = None;
        if let Some(color) = self.config.shadow_color {
            let a0 = self.map.angle_of(self.config.min);
            let a1 = self.map.angle_of(self.value);
            self.shadow_arc = Some(self.scene.push_arc(
                Group::Shadow,
                center,
                radius - SHADOW_WIDTH / 2.0,
                SHADOW_WIDTH,
                a0,
                a1,
                color,
            ));
        }
    }

    fn rebuild_dial(&mut self, text: &dyn TextSource, center: Point, radius: f64) {
        self.scene.clear(Group::Dial);
        let color = self.config.cadran_color;
        let full_circle = self.config.start_angle == self.config.end_angle;
        if full_circle {
            self.scene.push(
                Group::Dial,
                Primitive::Circle {
                    center,
                    radius,
                    width: CADRAN_WIDTH,
                    color,
                },
            );
        } else {
            self.scene.push(
                Group::Dial,
                Primitive::Arc {
                    center,
                    radius,
                    width: CADRAN_WIDTH,
                    a0: self.config.start_angle,
                    a1: self.config.end_angle,
                    color,
                },
            );
            // Chords from the sweep ends into the hub.
            self.scene.push(
                Group::Dial,
                Primitive::Polyline {
                    points: vec![
                        geometry::dial_point(center, radius, self.config.start_angle),
                        center,
                        geometry::dial_point(center, radius, self.config.end_angle),
                    ],
                    width: CADRAN_WIDTH,
                    color,
                },
            );
        }

        let ticks = geometry::major_ticks(&self.config);
        debug!("rebuilding dial: {} major tick(s)", ticks.len());
        for (i, tick) in ticks.iter().enumerate() {
            if tick.drawn {
                self.scene.push(
                    Group::Dial,
                    Primitive::Polyline {
                        points: vec![
                            geometry::dial_point(center, radius - 1.0, tick.angle),
                            geometry::dial_point(center, radius - MAJOR_TICK_INNER, tick.angle),
                        ],
                        width: MAJOR_TICK_WIDTH,
                        color,
                    },
                );
                if let Some(texture) =
                    text.rasterize(&self.config.tick_text(tick.value), TICK_NUMERAL_PX)
                {
                    self.scene.push(
                        Group::Dial,
                        Primitive::Text {
                            pos: geometry::dial_point(
                                center,
                                radius - TICK_LABEL_INSET,
                                tick.angle,
                            ),
                            color,
                            texture,
                        },
                    );
                }
            }
            if let Some(next) = ticks.get(i + 1) {
                for sub in
                    geometry::subtick_angles(tick.angle, next.angle, self.config.subtick)
                {
                    self.scene.push(
                        Group::Dial,
                        Primitive::Polyline {
                            points: vec![
                                geometry::dial_point(center, radius, sub),
                                geometry::dial_point(center, radius - MAJOR_TICK_INNER, sub),
                            ],
                            width: MINOR_TICK_WIDTH,
                            color,
                        },
                    );
                }
            }
        }
    }

    fn rebuild_label(
        &mut self,
        text: &dyn TextSource,
        images: &dyn ImageSource,
        center: Point,
        radius: f64,
    ) {
        self.scene.clear(Group::Label);
        let pos = geometry::label_anchor(&self.config, center, radius);
        if let Some(key) = &self.config.label_icon {
            if let Some(texture) = images.load(key) {
                let side = f64::from(texture.width.max(texture.height));
                let scale = if side > 0.0 {
                    radius * self.config.label_icon_scale / side
                } else {
                    0.0
                };
                let (w, h) = (
                    f64::from(texture.width) * scale,
                    f64::from(texture.height) * scale,
                );
                self.scene.push(
                    Group::Label,
                    Primitive::Image {
                        pos,
                        width: w,
                        height: h,
                        texture,
                    },
                );
            }
            return;
        }
        if self.config.label.is_empty() {
            return;
        }
        if let Some(texture) = text.rasterize(&self.config.label, LABEL_PX) {
            self.scene.push(
                Group::Label,
                Primitive::Text {
                    pos,
                    color: self.config.cadran_color,
                    texture,
                },
            );
        }
    }

    fn rebuild_needle(&mut self, images: &dyn ImageSource, center: Point, radius: f64) {
        self.scene.clear(Group::Needle);
        let texture = self
            .config
            .needle_image
            .as_deref()
            .and_then(|key| images.load(key))
            .unwrap_or_else(|| render::needle_sprite(radius, self.config.needle_color));
        self.needle_rot = Some(self.scene.push_sprite(
            Group::Needle,
            center,
            radius,
            self.map.angle_of(self.value),
            texture,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NoImages, NoText};
    use approx::assert_relative_eq;

    fn widget() -> SpeedMeter {
        let cfg = GaugeConfig::builder()
            .shadow_color(Color::new(0x40, 0x40, 0x40))
            .sectors(vec![
                SectorEntry::Bound(0.0),
                SectorEntry::Color(Color::from_hex("#ff0000").unwrap()),
                SectorEntry::Bound(50.0),
                SectorEntry::Color(Color::from_hex("#00ff00").unwrap()),
            ])
            .label("km/h".to_string())
            .build();
        let mut w = SpeedMeter::new(cfg).unwrap();
        w.set_bounds(Bounds::new(0.0, 0.0, 400.0, 400.0));
        w
    }

    fn needle_angle(w: &SpeedMeter) -> f64 {
        match &w.scene().group(Group::Needle)[0] {
            Primitive::Sprite { angle, .. } => *angle,
            other => panic!("unexpected needle primitive {other:?}"),
        }
    }

    fn shadow_end(w: &SpeedMeter) -> f64 {
        match &w.scene().group(Group::Shadow)[0] {
            Primitive::Arc { a1, .. } => *a1,
            other => panic!("unexpected shadow primitive {other:?}"),
        }
    }

    #[test]
    fn empty_range_config_is_rejected() {
        let cfg = GaugeConfig::builder().min(1.0).max(1.0).build();
        assert!(SpeedMeter::new(cfg).is_err());
    }

    #[test]
    fn construction_normalizes_angles() {
        let cfg = GaugeConfig::builder()
            .start_angle(-400.0)
            .end_angle(500.0)
            .build();
        let w = SpeedMeter::new(cfg).unwrap();
        assert_eq!(w.config().start_angle, -360.0);
        assert_eq!(w.config().end_angle, 0.0);
    }

    #[test]
    fn value_clamping_is_idempotent() {
        let mut w = widget();
        w.set_value(250.0);
        assert_eq!(w.value(), 100.0);
        w.set_value(250.0);
        assert_eq!(w.value(), 100.0);
        w.set_value(-3.0);
        assert_eq!(w.value(), 0.0);
    }

    #[test]
    fn sweep_is_capped_at_exactly_360() {
        let mut w = widget();
        // start -90: asking for end 350 would sweep 440 degrees.
        w.set_end_angle(350.0);
        assert_relative_eq!(
            w.config().end_angle - w.config().start_angle,
            360.0
        );
        assert_relative_eq!(w.config().end_angle, 350.0);

        let mut w = widget();
        w.set_start_angle(-360.0);
        assert_relative_eq!(
            w.config().end_angle - w.config().start_angle,
            360.0
        );
        assert_relative_eq!(w.config().start_angle, -360.0);
    }

    #[test]
    fn setters_mark_only_their_groups() {
        let mut w = widget();
        w.redraw(&NoText, &NoImages);
        assert_eq!(w.dirty, GroupSet::default());

        w.set_tick(20.0);
        assert!(w.dirty.contains(Group::Dial));
        assert!(!w.dirty.contains(Group::Sectors));
        assert!(!w.dirty.contains(Group::Needle));
        w.redraw(&NoText, &NoImages);

        w.set_sectors(Vec::new());
        assert!(w.dirty.contains(Group::Sectors));
        assert!(!w.dirty.contains(Group::Dial));
        w.redraw(&NoText, &NoImages);

        w.set_shadow_color(None);
        assert!(w.dirty.contains(Group::Sectors));
        assert!(w.dirty.contains(Group::Shadow));
        assert!(!w.dirty.contains(Group::Label));
        w.redraw(&NoText, &NoImages);

        w.set_label("rpm");
        assert!(w.dirty.contains(Group::Label));
        assert!(!w.dirty.contains(Group::Dial));

        w.set_bounds(Bounds::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(w.dirty, GroupSet::ALL);
    }

    #[test]
    fn value_changes_mutate_handles_without_rebuilds() {
        let mut w = widget();
        w.redraw(&NoText, &NoImages);
        let dial_len = w.scene().group(Group::Dial).len();

        w.set_value(75.0);
        assert_eq!(w.dirty, GroupSet::default());
        w.redraw(&NoText, &NoImages);

        let expected = w.map.angle_of(75.0);
        assert_relative_eq!(needle_angle(&w), expected);
        assert_relative_eq!(shadow_end(&w), expected);
        assert_eq!(w.scene().group(Group::Dial).len(), dial_len);
        assert_eq!(w.scene().group(Group::Needle).len(), 1);
        assert_eq!(w.scene().group(Group::Shadow).len(), 1);
    }

    #[test]
    fn needle_rotation_matches_forward_mapping() {
        let mut w = widget();
        w.set_value(50.0);
        w.redraw(&NoText, &NoImages);
        // Default sweep -90..135 maps 50 to 22.5 degrees.
        assert_relative_eq!(needle_angle(&w), 22.5);
        assert!(needle_angle(&w) != w.map.angle_of(0.0));
        assert!(needle_angle(&w) != w.map.angle_of(100.0));
    }

    #[test]
    fn range_change_reclamps_the_value_and_refreshes_rotation() {
        let mut w = widget();
        w.set_value(90.0);
        w.redraw(&NoText, &NoImages);

        w.set_range(0.0, 50.0).unwrap();
        assert_eq!(w.value(), 50.0);
        assert!(w.dirty.contains(Group::Dial));
        assert!(w.dirty.contains(Group::Sectors));
        assert!(w.dirty.contains(Group::Shadow));
        assert!(!w.dirty.contains(Group::Needle));
        w.redraw(&NoText, &NoImages);
        assert_relative_eq!(needle_angle(&w), w.map.angle_of(50.0));

        assert!(w.set_range(10.0, 10.0).is_err());
    }

    #[test]
    fn sectors_emit_wedges_at_mapped_angles() {
        let mut w = widget();
        w.redraw(&NoText, &NoImages);
        let sectors = w.scene().group(Group::Sectors);
        assert_eq!(sectors.len(), 2);
        match (&sectors[0], &sectors[1]) {
            (
                Primitive::Wedge { a0, a1, color, .. },
                Primitive::Wedge {
                    a0: b0,
                    a1: b1,
                    color: c1,
                    ..
                },
            ) => {
                assert_eq!(*color, Color::new(0xff, 0, 0));
                assert_eq!(*c1, Color::new(0, 0xff, 0));
                assert_relative_eq!(*a0, w.map.angle_of(0.0));
                assert_relative_eq!(*a1, w.map.angle_of(50.0));
                assert_relative_eq!(*b0, w.map.angle_of(50.0));
                assert_relative_eq!(*b1, w.map.angle_of(100.0));
            }
            other => panic!("unexpected sector primitives {other:?}"),
        }
    }

    #[test]
    fn sector_width_switches_to_rings() {
        let mut w = widget();
        w.set_sector_width(12.0);
        w.redraw(&NoText, &NoImages);
        assert!(matches!(
            w.scene().group(Group::Sectors)[0],
            Primitive::Ring { width, .. } if width == 12.0
        ));
    }

    #[test]
    fn pointer_primary_sets_the_value_secondary_does_not() {
        let mut w = widget();
        w.redraw(&NoText, &NoImages);
        let center = w.bounds().center();
        let target = geometry::dial_point(center, 100.0, w.map.angle_of(50.0));

        let ev = PointerEvent {
            pos: target,
            button: PointerButton::Secondary,
            double_tap: false,
        };
        assert!(!w.on_pointer(ev));

        let ev = PointerEvent {
            pos: target,
            button: PointerButton::Primary,
            double_tap: true,
        };
        assert!(!w.on_pointer(ev));

        let ev = PointerEvent {
            pos: target,
            button: PointerButton::Primary,
            double_tap: false,
        };
        assert!(w.on_pointer(ev));
        assert_relative_eq!(w.value(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn pointer_outside_the_disk_is_ignored() {
        let mut w = widget();
        w.redraw(&NoText, &NoImages);
        let before = w.value();
        let ev = PointerEvent {
            pos: Point::new(0.5, 0.5),
            button: PointerButton::Primary,
            double_tap: false,
        };
        assert!(!w.on_pointer(ev));
        assert_eq!(w.value(), before);
    }

    #[test]
    fn locate_at_half_radius_matches_the_scenario() {
        let mut w = widget();
        w.redraw(&NoText, &NoImages);
        let center = w.bounds().center();
        let p = geometry::dial_point(center, 100.0, 22.5);
        assert_relative_eq!(w.locate(p).unwrap(), 50.0, epsilon = 1e-9);
    }
}
