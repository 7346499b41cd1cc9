//! Circular analog gauge widget ("speedmeter").
//!
//! A dial with an arc scale, graduation marks and numerals, optional
//! colored value sectors, a rotating needle, an optional shadow arc
//! trailing the needle, and a text or icon label. The widget computes all
//! layout from a small parameter set, redraws only the visual groups whose
//! parameters changed, and maps pointer positions back to values for
//! interactive setting.
//!
//! The crate is split the way the work splits:
//!
//! - [`mapping`] — the linear value <-> angle mapping and its inverse;
//! - [`geometry`] — center/radius, tick, sector and label layout;
//! - [`scene`] — the retained drawing groups and the host services
//!   (text rasterization, image loading) the widget consumes;
//! - [`widget`] — the [`SpeedMeter`] facade with dependency-driven partial
//!   redraw scheduling;
//! - [`hit`] — pointer-to-value hit testing;
//! - [`render`] — a software rasterizer backend for the scene.
//!
//! ```no_run
//! use speedmeter::{Bounds, GaugeConfig, NoImages, NoText, SpeedMeter};
//!
//! let mut meter = SpeedMeter::new(GaugeConfig::builder().max(220.0).build())?;
//! meter.set_bounds(Bounds::new(0.0, 0.0, 400.0, 400.0));
//! meter.set_value(88.0);
//! meter.redraw(&NoText, &NoImages);
//! # Ok::<(), speedmeter::ConfigError>(())
//! ```

pub mod config;
pub mod geometry;
pub mod hit;
pub mod mapping;
pub mod render;
pub mod scene;
pub mod widget;

pub use config::{Color, ConfigError, GaugeConfig, SectorEntry};
pub use geometry::{Bounds, Point};
pub use hit::HitTester;
pub use mapping::AngleMap;
pub use render::FontBook;
pub use scene::{
    Group, ImageSource, NoImages, NoText, Primitive, RgbaTexture, Scene, TextSource, TextTexture,
};
pub use widget::{PointerButton, PointerEvent, SpeedMeter};
