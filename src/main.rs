//! Windowed Bezier curve viewer.
//!
//! Flattens one quadratic and one cubic curve into line segments, draws
//! them once into an SDL2 window (quadratic green, cubic red on black)
//! and then idles in the event loop until Escape is pressed or the
//! window is closed.

use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Point as PixelPoint;
use sdl2::render::WindowCanvas;

use bezel::{Bezier, CubicBezier, NativeFloat, Point, PointN, QuadraticBezier, Spline};

type P2 = PointN<f64, 2>;

/// Control points shown when no --quad flag is given.
/// 0,0 is the upper-left of the window and 1,1 is the lower-right.
const QUAD: [(f64, f64); 3] = [(0.2, 0.2), (0.5, 0.9), (0.9, 0.1)];

/// Control points shown when no --cubic flag is given.
const CUBIC: [(f64, f64); 4] = [(0.1, 0.9), (0.3, 0.2), (0.5, 1.6), (0.8, 0.4)];

#[derive(Parser, Debug)]
#[command(about = "Draw a quadratic and a cubic Bezier curve as flattened line segments")]
struct Args {
    /// Number of line segments each curve is flattened into.
    /// Low values produce a jagged line but take less time to compute,
    /// high values a smoother line at more compute.
    #[arg(long, default_value = "20")]
    steps: NonZeroUsize,

    /// Window width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Control points of the quadratic curve, three `x,y` pairs in
    /// normalized coordinates
    #[arg(long, num_args = 3, allow_hyphen_values = true, value_parser = parse_point)]
    quad: Option<Vec<(f64, f64)>>,

    /// Control points of the cubic curve, four `x,y` pairs in
    /// normalized coordinates
    #[arg(long, num_args = 4, allow_hyphen_values = true, value_parser = parse_point)]
    cubic: Option<Vec<(f64, f64)>>,
}

/// Everything the renderer needs, resolved from the CLI up front so the
/// render path reads no process-wide state.
#[derive(Debug, Clone)]
struct Config {
    steps: usize,
    width: u32,
    height: u32,
    quad: QuadraticBezier<P2>,
    cubic: CubicBezier<P2>,
}

impl Config {
    fn from_args(args: &Args) -> Self {
        Config {
            steps: args.steps.get(),
            width: args.width,
            height: args.height,
            quad: Bezier::new(control_points(&args.quad, QUAD)),
            cubic: Bezier::new(control_points(&args.cubic, CUBIC)),
        }
    }
}

/// Control points from the CLI, or the built-in set when the flag was
/// not given. clap has already pinned the argument count to N.
fn control_points<const N: usize>(
    arg: &Option<Vec<(f64, f64)>>,
    fallback: [(f64, f64); N],
) -> [P2; N] {
    let mut points = [P2::default(); N];
    let pairs = arg.as_deref().unwrap_or(&fallback[..]);
    for (point, &(x, y)) in points.iter_mut().zip(pairs) {
        *point = PointN::new([x, y]);
    }
    points
}

/// Parse one `x,y` control point argument.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok((coord(x)?, coord(y)?))
}

/// Map a normalized point to window pixels. Coordinates are truncated
/// towards zero like the renderer's integer line endpoints.
fn to_pixel(p: P2, width: u32, height: u32) -> PixelPoint {
    PixelPoint::new(
        (width as NativeFloat * p.axis(0)) as i32,
        (height as NativeFloat * p.axis(1)) as i32,
    )
}

/// Flatten one curve and draw its polyline, each consecutive pair of
/// samples as one line segment.
fn draw_curve<const N: usize>(
    canvas: &mut WindowCanvas,
    curve: &Bezier<P2, N>,
    config: &Config,
    color: Color,
) -> Result<()> {
    canvas.set_draw_color(color);
    let mut prev: Option<PixelPoint> = None;
    for sample in curve.polyline(config.steps) {
        let pixel = to_pixel(sample, config.width, config.height);
        if let Some(prev) = prev {
            canvas.draw_line(prev, pixel).map_err(anyhow::Error::msg)?;
        }
        prev = Some(pixel);
    }
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let video = sdl.video().map_err(anyhow::Error::msg)?;

    let window = video
        .window("bezel", config.width, config.height)
        .position_centered()
        .build()
        .context("creating window")?;
    let mut canvas = window
        .into_canvas()
        .build()
        .context("creating renderer")?;

    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    // Curves are flattened and drawn exactly once; the idle loop below
    // never triggers a redraw.
    draw_curve(&mut canvas, &config.quad, config, Color::RGB(0, 255, 0))?;
    draw_curve(&mut canvas, &config.cubic, config, Color::RGB(255, 0, 0))?;
    canvas.present();

    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;
    'running: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_args(&args);
    debug!("{config:?}");
    info!(
        "flattening a degree {} and a degree {} curve into {} segments each",
        config.quad.degree(),
        config.cubic.degree(),
        config.steps
    );

    run(&config)
}
