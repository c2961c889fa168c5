//! Gridwalk entry point
//!
//! Runs the demo headlessly: a scripted input sequence stands in for a
//! windowed host, driving the disc through the map at a fixed timestep and
//! logging where the collision resolver lets it go.

use std::path::Path;

use gridwalk::consts::*;
use gridwalk::render::{SurfaceFit, build_scene};
use gridwalk::settings::Settings;
use gridwalk::sim::{FrameInput, GridError, TileGrid, WorldState, tick};

const DEMO_MAP_WIDTH: u32 = 32;
const DEMO_MAP_HEIGHT: u32 = 32;

/// Border-walled 32x32 demo map, one row per line
const DEMO_MAP: &str = concat!(
    "################################",
    "#..............................#",
    "#.......#####.#.....#####......#",
    "#.......#...#.#.....#..........#",
    "#.......#...#.#.....#..........#",
    "#.......#####.#####.#####......#",
    "#..............................#",
    "#....#####.#####.#####.#####...#",
    "#........#.#...#.....#.....#...#",
    "#....#####.#...#.#####.#####...#",
    "#....#.....#...#.#.....#.......#",
    "#....#####.#####.#####.#####...#",
    "#..............................#",
    "#..............................#",
    "#..#.#..........#....#.........#",
    "#..#.#..........#....#.........#",
    "#..#.#.......#####.#######.....#",
    "#..#.#..........#....#.........#",
    "#..#.#.............###.#.#.....#",
    "#..#.##########................#",
    "#..#..........#....#.#.#.#.....#",
    "#..#.####.###.#................#",
    "#..#.#......#.#................#",
    "#..#.#.####.#.#....###..###....#",
    "#..#.#......#.#....#......#....#",
    "#..#.########.#....#......#....#",
    "#..#..........#....#......#....#",
    "#..############....#......#....#",
    "#..................########....#",
    "#..............................#",
    "#..............................#",
    "################################",
);

fn main() -> Result<(), GridError> {
    env_logger::init();
    log::info!("Gridwalk (headless demo) starting...");

    let settings = Settings::load(Path::new("gridwalk_settings.json"));
    let grid = TileGrid::from_ascii(DEMO_MAP_WIDTH, DEMO_MAP_HEIGHT, DEMO_MAP)?;
    let mut world = WorldState::new(grid);

    // Scripted stand-in for key/mouse polling: wander, sprint into a wall,
    // follow the disc for a while, then reset the scenario
    let script: &[(u32, FrameInput)] = &[
        (
            120,
            FrameInput {
                right: true,
                ..FrameInput::default()
            },
        ),
        (
            90,
            FrameInput {
                down: true,
                right: true,
                fast: true,
                ..FrameInput::default()
            },
        ),
        (
            1,
            FrameInput {
                toggle_follow: true,
                ..FrameInput::default()
            },
        ),
        (
            240,
            FrameInput {
                left: true,
                fast: true,
                ..FrameInput::default()
            },
        ),
        (60, FrameInput::default()),
        (
            1,
            FrameInput {
                reset: true,
                ..FrameInput::default()
            },
        ),
    ];

    let mut frame = 0u32;
    for (frames, input) in script {
        for _ in 0..*frames {
            tick(&mut world, input, SIM_DT);
            frame += 1;
            if frame % 30 == 0 {
                log::info!(
                    "t={:6.2}s pos=({:5.2}, {:5.2}) vel=({:5.2}, {:5.2})",
                    world.time_secs,
                    world.disc.pos.x,
                    world.disc.pos.y,
                    world.disc.vel.x,
                    world.disc.vel.y,
                );
            }
        }
    }

    let scene = build_scene(&world, &settings);
    let fit = SurfaceFit::compute(
        SURFACE_WIDTH as f32,
        SURFACE_HEIGHT as f32,
        (SURFACE_WIDTH * settings.window_scale) as f32,
        (SURFACE_HEIGHT * settings.window_scale) as f32,
    );
    log::info!(
        "final scene: {} vertices, surface scale {:.1}, margin ({:.0}, {:.0})",
        scene.len(),
        fit.scale,
        fit.margin.x,
        fit.margin.y,
    );

    Ok(())
}
