//! Retained-mode drawing surface and the host services the gauge consumes.
//!
//! The widget never touches pixels. It emits [`Primitive`]s into one of five
//! named groups of a [`Scene`]; a backend (see [`crate::render`]) replays the
//! groups back-to-front. Each group can be cleared and regenerated without
//! touching the others, and the two primitives that change on every value
//! update (shadow arc, needle sprite) hand back handles whose single
//! parameter can be mutated in place instead of re-emitting geometry.

use crate::config::Color;
use crate::geometry::Point;

/// Independently invalidatable visual groups, in z-order back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Sectors,
    Shadow,
    Dial,
    Label,
    Needle,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Sectors,
        Group::Shadow,
        Group::Dial,
        Group::Label,
        Group::Needle,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Group::Sectors => 0,
            Group::Shadow => 1,
            Group::Dial => 2,
            Group::Label => 3,
            Group::Needle => 4,
        }
    }
}

/// Greyscale coverage texture produced by the text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTexture {
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, `width * height` bytes, row 0 at the top.
    pub coverage: Vec<u8>,
}

/// RGBA8 texture for needle sprites and icon labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaTexture {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, row 0 at the top.
    pub pixels: Vec<u8>,
}

/// Text rasterization service: string in, coverage texture with pixel
/// dimensions out. `None` (no font, empty string) skips the text quietly.
pub trait TextSource {
    fn rasterize(&self, text: &str, px: f32) -> Option<TextTexture>;
}

/// Null text service; every label degenerates to a no-op.
pub struct NoText;

impl TextSource for NoText {
    fn rasterize(&self, _text: &str, _px: f32) -> Option<TextTexture> {
        None
    }
}

/// Image loading service for needle sprites and icon labels, keyed by the
/// path/name the config carries.
pub trait ImageSource {
    fn load(&self, key: &str) -> Option<RgbaTexture>;
}

/// Null image service.
pub struct NoImages;

impl ImageSource for NoImages {
    fn load(&self, _key: &str) -> Option<RgbaTexture> {
        None
    }
}

/// One retained drawing instruction. Angles are dial-frame degrees
/// (clockwise from 12 o'clock); points are widget-local with y up.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled pie wedge from `a0` to `a1` over the whole disk.
    Wedge {
        center: Point,
        radius: f64,
        a0: f64,
        a1: f64,
        color: Color,
    },
    /// Thick arc band: radial extent `[radius - width, radius]`.
    Ring {
        center: Point,
        radius: f64,
        width: f64,
        a0: f64,
        a1: f64,
        color: Color,
    },
    /// Stroked arc centered on `radius`.
    Arc {
        center: Point,
        radius: f64,
        width: f64,
        a0: f64,
        a1: f64,
        color: Color,
    },
    /// Stroked full circle.
    Circle {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
    /// Stroked open polyline (ticks, sweep-end chords).
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Color,
    },
    /// Coverage texture tinted with `color`, centered at `pos`.
    Text {
        pos: Point,
        color: Color,
        texture: TextTexture,
    },
    /// RGBA texture scaled to `width` x `height`, centered at `pos`.
    Image {
        pos: Point,
        width: f64,
        height: f64,
        texture: RgbaTexture,
    },
    /// Square RGBA sprite of side `2 * half`, centered on `origin` and
    /// rotated about it by `angle` dial degrees. The rotation lives in the
    /// transform parameter only; the texture is never re-baked for a new
    /// angle.
    Sprite {
        origin: Point,
        half: f64,
        angle: f64,
        texture: RgbaTexture,
    },
}

/// Handle to the mutable end angle of a retained [`Primitive::Arc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcHandle {
    group: Group,
    index: usize,
}

/// Handle to the mutable rotation of a retained [`Primitive::Sprite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationHandle {
    group: Group,
    index: usize,
}

/// Five retained primitive groups, replayed back-to-front by a backend.
#[derive(Debug, Default)]
pub struct Scene {
    groups: [Vec<Primitive>; 5],
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every primitive the group last emitted.
    pub fn clear(&mut self, group: Group) {
        log::trace!("scene: clear {group:?}");
        self.groups[group.index()].clear();
    }

    pub fn push(&mut self, group: Group, primitive: Primitive) {
        self.groups[group.index()].push(primitive);
    }

    /// Push an arc whose end angle will be updated in place.
    pub fn push_arc(
        &mut self,
        group: Group,
        center: Point,
        radius: f64,
        width: f64,
        a0: f64,
        a1: f64,
        color: Color,
    ) -> ArcHandle {
        let list = &mut self.groups[group.index()];
        list.push(Primitive::Arc {
            center,
            radius,
            width,
            a0,
            a1,
            color,
        });
        ArcHandle {
            group,
            index: list.len() - 1,
        }
    }

    /// Push a rotated sprite whose angle will be updated in place.
    pub fn push_sprite(
        &mut self,
        group: Group,
        origin: Point,
        half: f64,
        angle: f64,
        texture: RgbaTexture,
    ) -> RotationHandle {
        let list = &mut self.groups[group.index()];
        list.push(Primitive::Sprite {
            origin,
            half,
            angle,
            texture,
        });
        RotationHandle {
            group,
            index: list.len() - 1,
        }
    }

    /// Mutate the retained arc's end angle. Stale handles (group cleared
    /// since the push) are ignored.
    pub fn set_arc_end(&mut self, handle: ArcHandle, end: f64) {
        if let Some(Primitive::Arc { a1, .. }) =
            self.groups[handle.group.index()].get_mut(handle.index)
        {
            *a1 = end;
        }
    }

    /// Mutate the retained sprite's rotation angle. Stale handles are
    /// ignored.
    pub fn set_rotation(&mut self, handle: RotationHandle, angle_deg: f64) {
        if let Some(Primitive::Sprite { angle, .. }) =
            self.groups[handle.group.index()].get_mut(handle.index)
        {
            *angle = angle_deg;
        }
    }

    /// Primitives of one group, in emission order.
    pub fn group(&self, group: Group) -> &[Primitive] {
        &self.groups[group.index()]
    }

    /// All primitives in paint order (groups back-to-front).
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.groups.iter().flatten()
    }
}
