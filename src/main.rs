use arboard::Clipboard;
use gridcaster::config::Config;
use gridcaster::input::{self, Key};
use gridcaster::input_log::{InputLog, KeyPhase};
use gridcaster::render::{render_scene, Canvas, Rgba};
use gridcaster::Simulation;
use macroquad::prelude::*;

/// Physical keys -> logical keys; arrows and WASD both drive the player
const KEYMAP: [(KeyCode, Key); 8] = [
    (KeyCode::Up, Key::Forward),
    (KeyCode::W, Key::Forward),
    (KeyCode::Down, Key::Backward),
    (KeyCode::S, Key::Backward),
    (KeyCode::Left, Key::TurnLeft),
    (KeyCode::A, Key::TurnLeft),
    (KeyCode::Right, Key::TurnRight),
    (KeyCode::D, Key::TurnRight),
];

/// Canvas backed by macroquad's immediate-mode shapes
struct ScreenCanvas;

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.0, c.1, c.2, c.3)
}

impl Canvas for ScreenCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        draw_rectangle(x, y, width, height, to_color(color));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba) {
        draw_line(x1, y1, x2, y2, 1.0, to_color(color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        draw_circle(x, y, radius, to_color(color));
    }
}

fn window_conf() -> Conf {
    // Quiet read; main() loads again and reports what it found
    let config = Config::read_file().ok().flatten().unwrap_or_default();
    let (width, height) = match config.build_grid() {
        Ok(grid) => (grid.world_width(), grid.world_height()),
        Err(_) => (480.0, 352.0),
    };

    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Feed this frame's key transitions into the player and the log
fn handle_input(sim: &mut Simulation, log: &mut InputLog) {
    for &(code, key) in &KEYMAP {
        if is_key_pressed(code) {
            input::press(&mut sim.player, key);
            log.log(key, KeyPhase::Pressed);
        }
        if is_key_released(code) {
            input::release(&mut sim.player, key);
            log.log(key, KeyPhase::Released);
        }
    }
}

fn copy_to_clipboard(sim: &Simulation) {
    let marker = sim.player.cell(&sim.grid);
    let layout = sim.grid.to_layout_string(Some(marker));
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(&layout) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Map layout copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

fn dump_frame(sim: &Simulation) {
    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize frame: {}", e),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();

    let mut sim = match Simulation::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            return;
        }
    };
    println!(
        "Map {}x{} (tile {}), {} rays over {:.1} degrees",
        sim.grid.cols,
        sim.grid.rows,
        sim.grid.tile_size,
        sim.caster.ray_count(),
        config.camera.fov_degrees
    );

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--dump" {
        dump_frame(&sim);
        return;
    }

    let mut log = InputLog::new();
    let mut canvas = ScreenCanvas;

    loop {
        handle_input(&mut sim, &mut log);

        // Copy map to clipboard on C key
        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&sim);
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        sim.update();

        clear_background(BLACK);
        render_scene(&mut canvas, &sim, config.visual.minimap_scale);

        next_frame().await
    }

    if config.logging.enable_input_log {
        log.print_with_durations();
        println!("{}", log.summary());
        match log.save_to_file(&config.logging.input_log_path) {
            Ok(()) => println!("Input log saved to {}", config.logging.input_log_path),
            Err(e) => eprintln!("Failed to save input log: {}", e),
        }
    }
}
