use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clock_render::{
    Charset, CircularStyle, ClockController, DisplayMode, FixedClock, RenderOptions, SystemClock,
    TimeSource, TimeValue, MAX_SCALE, MIN_SCALE,
};
use log::{debug, warn};

mod watch;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the time as digital or analog text-art")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a single frame and exit
    Show(ShowArgs),
    /// Show a live clock that refreshes every second
    Watch(WatchArgs),
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Render this time (HH:MM or HH:MM:SS) instead of the current local time
    #[arg(long, env = "TEXT_CLOCK_AT")]
    at: Option<TimeValue>,
    /// Write the frame to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct WatchArgs {
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Clock face layout
    #[arg(long, value_enum, default_value = "digital", env = "TEXT_CLOCK_MODE")]
    mode: ModeChoice,
    /// Use 12-hour formatting (digital mode)
    #[arg(long, default_value_t = false, env = "TEXT_CLOCK_TWELVE_HOUR")]
    twelve_hour: bool,
    /// Leave out the seconds field (digital mode)
    #[arg(long, default_value_t = false, env = "TEXT_CLOCK_HIDE_SECONDS")]
    hide_seconds: bool,
    /// Size multiplier, clamped to 1..5
    #[arg(long, default_value_t = 3, env = "TEXT_CLOCK_SCALE")]
    scale: usize,
    /// Detail level of the circular face
    #[arg(long, value_enum, default_value = "detailed", env = "TEXT_CLOCK_STYLE")]
    style: StylePreset,
    /// Characters used for glyph cells
    #[arg(long, value_enum, default_value = "blocks", env = "TEXT_CLOCK_CHARSET")]
    charset: CharsetChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ModeChoice {
    Digital,
    Circular,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StylePreset {
    Detailed,
    Simple,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CharsetChoice {
    Blocks,
    Ascii,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Show(args) => show(args),
        Commands::Watch(args) => watch(args),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let options = args.settings.to_options();
    let time = match args.at {
        Some(time) => time,
        None => SystemClock.now(),
    };
    debug!("rendering {time} with {options:?}");

    let mut controller = ClockController::new(FixedClock::new(time), options);
    let frame = controller.tick().context("renderer produced no frame")?;

    match &args.output {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("failed to create {:?}", path))?;
            writeln!(file, "{}", frame).with_context(|| format!("failed to write {:?}", path))?;
        },
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", frame)?;
        },
    }

    Ok(())
}

fn watch(args: WatchArgs) -> Result<()> {
    let mut controller = ClockController::new(SystemClock, args.settings.to_options());
    watch::run(&mut controller)
}

impl RenderSettings {
    fn to_options(&self) -> RenderOptions {
        if !(MIN_SCALE..=MAX_SCALE).contains(&self.scale) {
            warn!("scale {} outside {MIN_SCALE}..={MAX_SCALE}, clamping", self.scale);
        }

        let mut options = RenderOptions::default().with_scale(self.scale);
        options.mode = self.mode.to_mode();
        options.use_24_hour = !self.twelve_hour;
        options.show_seconds = !self.hide_seconds;
        options.style = self.style.to_style();
        options.charset = self.charset.to_charset();
        options
    }
}

impl ModeChoice {
    fn to_mode(self) -> DisplayMode {
        match self {
            ModeChoice::Digital => DisplayMode::Digital,
            ModeChoice::Circular => DisplayMode::Circular,
        }
    }
}

impl StylePreset {
    fn to_style(self) -> CircularStyle {
        match self {
            StylePreset::Detailed => CircularStyle::detailed(),
            StylePreset::Simple => CircularStyle::simple(),
        }
    }
}

impl CharsetChoice {
    fn to_charset(self) -> Charset {
        match self {
            CharsetChoice::Blocks => Charset::Blocks,
            CharsetChoice::Ascii => Charset::Ascii,
        }
    }
}
