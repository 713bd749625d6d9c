use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel_playground::constants::*;
use carousel_playground::controller::clamp_interval;
use carousel_playground::{ContainerRatio, Effect};
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;

mod error;
mod gallery;
mod playground;
mod renderer;
mod texture_loader;

use crate::gallery::Gallery;
use crate::playground::{Playground, now_ms};

/// Interactive playground for carousel slider effects.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of images to show; generated placeholder cards are used when omitted
    image_dir: Option<PathBuf>,

    /// Effect shown at startup (cube, stack, zoom-out, standard, multiple, coverflow)
    #[arg(short, long, default_value_t = Effect::default())]
    effect: Effect,

    /// Auto-play interval in milliseconds, clamped to 500..=8000
    #[arg(short, long, default_value_t = AUTOPLAY_DEFAULT_MS)]
    speed: Millis,

    /// Container aspect: auto, 21/9, 16/9, 4/3, 1/1, 3/4 or 9/16
    #[arg(short, long, default_value_t = ContainerRatio::default())]
    ratio: ContainerRatio,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Print the code snippet of the selected effect and exit
    #[arg(long)]
    print_code: bool,

    /// List the available effects and exit
    #[arg(long)]
    list: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    if args.list {
        for effect in Effect::ALL {
            println!("{:<10} {:<10} {}", effect.id(), effect.title(), effect.description());
        }
        return Ok(());
    }
    if args.print_code {
        print!("{}", args.effect.snippet());
        return Ok(());
    }

    let speed = clamp_interval(args.speed);
    if speed != args.speed {
        warn!("auto-play interval {}ms clamped to {}ms", args.speed, speed);
    }

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slider UI Kit")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let gallery = match &args.image_dir {
        Some(dir) => Gallery::load_dir(&mut rl, &thread, dir)
            .with_context(|| format!("loading images from {}", dir.display()))?,
        None => Gallery::placeholders(&mut rl, &thread).context("generating default gallery")?,
    };
    info!(
        "{} images, effect {}, auto-play {}ms, ratio {}",
        gallery.len(),
        args.effect,
        speed,
        args.ratio
    );

    let start = now_ms(&rl);
    let mut playground = Playground::new(gallery, args.effect, speed, args.ratio, start);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        playground.handle_input(&mut rl, &thread);
        playground.update(now_ms(&rl), dt);

        let container = playground.container(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mut d = rl.begin_drawing(&thread);
        playground.draw(&mut d, container);
    }

    Ok(())
}
