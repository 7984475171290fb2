//! Overflow label simulator - runs a label over a simulated clock and prints
//! the marquee state per frame.
//!
//! Usage:
//!   overflow-sim --text "Installation of title updates in progress" --width 160
//!   overflow-sim --fonts-dir ./fonts --font-size 22 --seconds 10 --every 30
//!   overflow-sim --unselected --dump       # idle state with fade bands

use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use overflow_text::dump::print_scene;
use overflow_text::render::FontMeasurer;
use overflow_text::{Color, FixedAdvanceMeasurer, ManualTicks, MarqueeConfig, OverflowLabel, Scene, TextMeasurer};

/// Ticks per second of the simulated clock.
const SIM_FREQUENCY: u64 = 19_200_000;

#[derive(Parser)]
#[command(name = "overflow-sim")]
#[command(about = "Simulate an overflowing label frame by frame")]
struct Cli {
    /// Label text (normalized to a single line)
    #[arg(short, long, default_value = "Installing localized content, please do not turn off the console")]
    text: String,

    /// Box width in pixels
    #[arg(long, default_value_t = 240)]
    width: i32,

    /// Box height in pixels
    #[arg(long, default_value_t = 32)]
    height: i32,

    #[arg(long, default_value_t = 22)]
    font_size: u32,

    /// Measure with fonts from this directory instead of a fixed advance
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    fps: u64,

    /// Simulated duration
    #[arg(long, default_value_t = 6)]
    seconds: u64,

    /// Leave the label unselected (idle clipped view)
    #[arg(long)]
    unselected: bool,

    /// Print every Nth frame
    #[arg(long, default_value_t = 15)]
    every: u64,

    /// Marquee config file (defaults to the user config path)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background color as #RRGGBB[AA]
    #[arg(long, default_value = "#000000FF")]
    background: String,

    /// Dump the scene after the last frame
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(MarqueeConfig::default_path);
    let config = MarqueeConfig::load(&config_path);

    let measurer: Rc<dyn TextMeasurer> = match &cli.fonts_dir {
        Some(dir) => Rc::new(FontMeasurer::from_dir(dir)?),
        None => Rc::new(FixedAdvanceMeasurer::for_font_size(cli.font_size)),
    };
    let ticks = Rc::new(ManualTicks::new(SIM_FREQUENCY));

    let mut scene = Scene::new();
    let mut label = OverflowLabel::with_config(cli.font_size, Color::WHITE, measurer, ticks.clone(), config);
    label.set_background_color(Color::from_hex(&cli.background)?);
    label.set_bounds(0, 0, cli.width, cli.height);
    label.set_text(&cli.text);
    label.attach(&mut scene);
    label.set_selected(!cli.unselected, false);

    println!("text:        {:?}", label.text());
    println!("clipped:     {:?}", label.clipped_text());
    println!("overflowing: {}", label.is_overflowing());
    println!();
    println!("{:>6} {:>8}  {:<9} {:>6} {:>5}  clip", "frame", "ms", "phase", "offset", "alpha");

    let fps = cli.fps.max(1);
    let frame_ticks = SIM_FREQUENCY / fps;
    let frames = cli.seconds * fps;
    let every = cli.every.max(1);
    for frame in 0..=frames {
        if frame > 0 {
            ticks.advance(frame_ticks);
        }
        label.update(false);
        if frame % every == 0 || frame == frames {
            let clip = label
                .clip_rect()
                .map(|r| format!("({},{}) {}x{}", r.x, r.y, r.width, r.height))
                .unwrap_or_else(|| "off".to_string());
            println!(
                "{:>6} {:>8}  {:<9} {:>6} {:>5}  {}",
                frame,
                frame * 1000 / fps,
                label.phase().as_str(),
                label.scroll_offset(),
                label.fade_alpha(),
                clip
            );
        }
    }

    if cli.dump {
        print_scene(&scene, false);
    }
    Ok(())
}
