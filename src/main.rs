//! Demo host: a speed dial in a window.
//!
//! The value wanders toward a random target while the mouse is up; a
//! primary click or drag sets it through the widget's hit test. The gauge
//! itself never sees the window, only bounds, pointer samples and services.

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use rand::Rng;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use speedmeter::{
    render, Bounds, Color, GaugeConfig, NoImages, NoText, Point, PointerButton, PointerEvent,
    SectorEntry, SpeedMeter, TextSource,
};

const BACKGROUND: Color = Color::new(0x10, 0x14, 0x18);

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn load_font() -> Box<dyn TextSource> {
    for path in FONT_PATHS {
        if let Ok(data) = std::fs::read(path) {
            if let Some(book) = render::FontBook::new(data) {
                log::info!("numerals use {path}");
                return Box::new(book);
            }
        }
    }
    log::warn!("no usable font found; numerals and labels are skipped");
    Box::new(NoText)
}

/// Sector bands at fixed fractions of the range: calm, warning, danger.
fn speed_sectors(min: f64, max: f64) -> Vec<SectorEntry> {
    let span = max - min;
    vec![
        SectorEntry::Bound(min),
        SectorEntry::Color(Color::new(0x2e, 0x7d, 0x32)),
        SectorEntry::Bound(min + span * 0.64),
        SectorEntry::Color(Color::new(0xef, 0x6c, 0x00)),
        SectorEntry::Bound(min + span * 0.82),
        SectorEntry::Color(Color::new(0xc6, 0x28, 0x28)),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut min_value = 0.0;
    let mut max_value = 220.0;
    let mut window_title = "Speedmeter".to_string();
    let mut args = env::args().peekable();
    while let Some(arg) = args.next() {
        if arg == "--range" {
            if let (Some(x), Some(y)) = (args.next(), args.next()) {
                if let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) {
                    min_value = x.min(y);
                    max_value = x.max(y);
                }
            }
        } else if arg == "--title" {
            if let Some(title) = args.next() {
                window_title = title;
            }
        }
    }
    if min_value >= max_value {
        eprintln!("--range needs two distinct values");
        process::exit(2);
    }

    let config = GaugeConfig::builder()
        .min(min_value)
        .max(max_value)
        .tick((max_value - min_value) / 10.0)
        .subtick(1)
        .start_angle(-90.0)
        .end_angle(135.0)
        .cadran_color(Color::new(0xe8, 0xe8, 0xe8))
        .sectors(speed_sectors(min_value, max_value))
        .sector_width(14.0)
        .shadow_color(Color::new(0x24, 0x55, 0x5e))
        .label("km/h".to_string())
        .label_radius_ratio(-0.35)
        .build();
    let mut meter = SpeedMeter::new(config)?;

    let logical = 400.0;
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&window_title)
        .with_inner_size(LogicalSize::new(logical, logical))
        .build(&event_loop)?;
    let window = Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let mut fb_width = size.width as usize;
    let mut fb_height = size.height as usize;
    meter.set_bounds(Bounds::new(0.0, 0.0, fb_width as f64, fb_height as f64));

    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

    let text = load_font();
    let images = NoImages;

    let mut rng = rand::rng();
    let mut target = min_value + (max_value - min_value) * 0.4;
    let mut cursor = (0.0f64, 0.0f64);
    let mut mouse_down = false;

    let target_fps = 60.0;
    let frame_duration = std::time::Duration::from_secs_f64(1.0 / target_fps);
    let mut last_frame = Instant::now();

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    fb_width = new_size.width as usize;
                    fb_height = new_size.height as usize;
                    let _ = pixels.resize_buffer(new_size.width, new_size.height);
                    let _ = pixels.resize_surface(new_size.width, new_size.height);
                    meter.set_bounds(Bounds::new(
                        0.0,
                        0.0,
                        fb_width as f64,
                        fb_height as f64,
                    ));
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x, position.y);
                    if mouse_down {
                        meter.on_pointer(pointer_event(cursor, fb_height));
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left {
                        mouse_down = state == ElementState::Pressed;
                        if mouse_down && meter.on_pointer(pointer_event(cursor, fb_height)) {
                            target = meter.value();
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if !mouse_down {
                        if rng.random_range(0.0..1.0) < 0.01 {
                            target = rng.random_range(min_value..max_value);
                        }
                        let v = meter.value();
                        meter.set_value(v + (target - v) * 0.1);
                    }
                    meter.redraw(text.as_ref(), &images);

                    let frame = pixels.frame_mut();
                    render::clear(frame, BACKGROUND);
                    render::rasterize(meter.scene(), frame, fb_width, fb_height);
                    let _ = pixels.render();
                }
                _ => {}
            },
            Event::AboutToWait => {
                if last_frame.elapsed() >= frame_duration {
                    window_clone.request_redraw();
                    last_frame = Instant::now();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

/// Window cursor positions are y-down; the widget's local space is y-up.
fn pointer_event((x, y): (f64, f64), fb_height: usize) -> PointerEvent {
    PointerEvent {
        pos: Point::new(x, (fb_height as f64 - 1.0) - y),
        button: PointerButton::Primary,
        double_tap: false,
    }
}
