#![feature(portable_simd)]

// External crates
use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};
use raylib::prelude::*;

// STD library
use std::path::PathBuf;
use std::time::Instant;

// Internal modules
mod band;
mod geometry;
mod line;
mod point2d;
mod raster;
mod screen;
mod session;
mod shape;
mod stats;
mod tile;
mod triangle;
mod vector;

// Internal imports
use crate::band::{save_band_layout, split_bands, worker_count};
use crate::geometry::double_area;
use crate::point2d::Point2D;
use crate::screen::{ScreenSpace, BACKGROUND};
use crate::session::{InputSnapshot, SessionAction, SessionState};
use crate::shape::{Shape, FLAT_COLOR};
use crate::stats::{plot_frame_times, print_report, FrameStats};
use crate::triangle::Triangle2D;

/// Benchmark of four rendering strategies over one rotating 2D polygon.
#[derive(Parser, Debug)]
struct Args {
    /// Shape to render
    #[arg(value_enum)]
    shape: Shape,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Worker cap for the tile-parallel stage
    #[arg(long, default_value_t = 4)]
    max_workers: u32,
    /// Save the tile band layout to bands.png before rendering
    #[arg(long)]
    dump_bands: bool,
    /// Output path for the frame-time chart
    #[arg(long, default_value = "frame_times.png")]
    chart: PathBuf,
}

/// The four strategies, run in sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Strategy {
    Scalar,
    TileParallel,
    Vector,
    Hardware,
}

impl Strategy {
    const ALL: [Strategy; 4] =
        [Strategy::Scalar, Strategy::TileParallel, Strategy::Vector, Strategy::Hardware];

    fn label(self) -> &'static str {
        match self {
            Strategy::Scalar => "Scalar CPU",
            Strategy::TileParallel => "Multicore CPU",
            Strategy::Vector => "Vector CPU",
            Strategy::Hardware => "GPU",
        }
    }
}

/// On-screen trigger region that advances to the next strategy.
struct NextButton {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl NextButton {
    fn new(width: u32, height: u32) -> Self {
        NextButton { x: width as i32 - 210, y: height as i32 - 60, w: 190, h: 40 }
    }

    fn contains(&self, p: Vector2) -> bool {
        let (mx, my) = (p.x as i32, p.y as i32);
        mx >= self.x && mx < self.x + self.w && my >= self.y && my < self.y + self.h
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cores = num_cpus::get();
    info!("Number of logical CPU cores: {cores}");

    // Build thread pool based on number of cores
    rayon::ThreadPoolBuilder::new()
        .num_threads(cores)
        .build_global()?;

    let workers = worker_count(args.max_workers);
    info!("Tile-parallel stage uses {workers} band workers");

    if args.dump_bands {
        let bands = split_bands(args.height, workers);
        debug!("Band layout: {bands:?}");
        save_band_layout(&bands, args.width, args.height, "bands.png");
        info!("Saved bands.png");
    }

    // Shape name already validated by the CLI; the provider is pure
    let verts = args.shape.vertices();

    let mut screen = ScreenSpace::new(args.width, args.height);
    let image = Image::gen_image_color(args.width as i32, args.height as i32, Color::BLACK);

    // Create raylib handle
    let (mut rl, thread) = raylib::init()
        .size(args.width as i32, args.height as i32)
        .title("rastbench")
        .build();
    rl.set_target_fps(60);
    let mut texture = rl
        .load_texture_from_image(&thread, &image)
        .expect("raylib texture loading failed");

    let mut all_stats: Vec<FrameStats> = Vec::new();
    for strategy in Strategy::ALL {
        info!("Stage: {}", strategy.label());
        let mut stage_stats = FrameStats::new(strategy.label());
        let action = run_stage(
            &mut rl,
            &thread,
            &mut texture,
            &mut screen,
            strategy,
            &verts,
            workers,
            &mut stage_stats,
        );
        debug!(
            "{}: {} frames, avg {:.2} ms",
            strategy.label(),
            stage_stats.frame_times.len(),
            stage_stats.avg_ms()
        );
        all_stats.push(stage_stats);
        if action == SessionAction::Quit {
            break;
        }
    }

    print_report(args.shape, &all_stats);
    if let Err(e) = plot_frame_times(&all_stats, &args.chart) {
        warn!("frame-time chart not written: {e}");
    }
    Ok(())
}

/// One strategy's frame loop: poll input, step the session state, transform,
/// rasterize, present, record the frame time. Returns how the stage ended.
#[allow(clippy::too_many_arguments)]
fn run_stage(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    texture: &mut Texture2D,
    screen: &mut ScreenSpace,
    strategy: Strategy,
    verts: &[Point2D],
    workers: u32,
    stage_stats: &mut FrameStats,
) -> SessionAction {
    let mut state = SessionState::new(screen.width, screen.height);
    let button = NextButton::new(screen.width, screen.height);

    loop {
        // cooperative shutdown, checked once per frame
        if rl.window_should_close() || rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            return SessionAction::Quit;
        }

        let frame_start = Instant::now();

        let input = InputSnapshot {
            left: rl.is_key_down(KeyboardKey::KEY_LEFT),
            right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
            up: rl.is_key_down(KeyboardKey::KEY_UP),
            down: rl.is_key_down(KeyboardKey::KEY_DOWN),
            rotate: rl.is_key_down(KeyboardKey::KEY_R),
        };
        state.apply_input(&input);
        if strategy == Strategy::Scalar && rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            state.toggle_mode();
        }

        let advance = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && button.contains(rl.get_mouse_position());

        let screen_verts = state.transform_vertices(verts);
        let triangles = Triangle2D::assemble(&screen_verts);

        let fps = rl.get_fps();
        let window_width = rl.get_screen_width();
        let window_height = rl.get_screen_height();

        if strategy == Strategy::Hardware {
            // thin pass-through: raylib rasterizes the triangles itself
            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::new(BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], 255));
            for tri in &triangles {
                let (mut b, mut c) = (tri.b.pos, tri.c.pos);
                // raylib fills counter-clockwise triangles only
                if double_area(tri.a.pos, b, c) < 0.0 {
                    std::mem::swap(&mut b, &mut c);
                }
                d.draw_triangle(
                    Vector2 { x: tri.a.pos.x, y: tri.a.pos.y },
                    Vector2 { x: b.x, y: b.y },
                    Vector2 { x: c.x, y: c.y },
                    Color::new(FLAT_COLOR[0], FLAT_COLOR[1], FLAT_COLOR[2], 255),
                );
            }
            draw_overlay(&mut d, strategy, &state, fps, &button);
        } else {
            screen.clear(BACKGROUND);
            match strategy {
                Strategy::Scalar => raster::rasterize(screen, &triangles, state.mode),
                Strategy::TileParallel => tile::rasterize(screen, &triangles, FLAT_COLOR, workers),
                Strategy::Vector => vector::rasterize(screen, &triangles, FLAT_COLOR),
                Strategy::Hardware => unreachable!(),
            }

            // Put it in a window!
            let _ = texture.update_texture(&screen.rgba);
            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            d.draw_texture_pro(
                &*texture,
                Rectangle { x: 0.0, y: 0.0, width: screen.width as f32, height: screen.height as f32 },
                Rectangle { x: 0.0, y: 0.0, width: window_width as f32, height: window_height as f32 },
                Vector2 { x: 0.0, y: 0.0 },
                0.0,
                Color::WHITE,
            );
            draw_overlay(&mut d, strategy, &state, fps, &button);
        }

        stage_stats.record(frame_start.elapsed());

        if advance {
            return SessionAction::NextStage;
        }
    }
}

fn draw_overlay(
    d: &mut RaylibDrawHandle,
    strategy: Strategy,
    state: &SessionState,
    fps: u32,
    button: &NextButton,
) {
    let header = if strategy == Strategy::Scalar {
        format!("{} ({}) | FPS: {}", strategy.label(), state.mode.label(), fps)
    } else {
        format!("{} | FPS: {}", strategy.label(), fps)
    };
    d.draw_text(&header, 10, 10, 20, Color::WHITE);

    d.draw_rectangle(button.x, button.y, button.w, button.h, Color::new(70, 70, 200, 255));
    d.draw_text("Next renderer", button.x + 20, button.y + 10, 18, Color::WHITE);
}
