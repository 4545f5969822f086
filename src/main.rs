use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use worldtime::dashboard::{self, DashboardConfig};
use worldtime::geography::{cities_in, Region};
use worldtime::map::{grid_size, MapRenderer};
use worldtime::settings::Settings;
use worldtime::terminal::Terminal;

#[derive(Parser)]
#[command(name = "worldtime")]
#[command(version)]
#[command(about = "Terminal world clock: braille world map with a live day/night overlay", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/worldtime/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the live world map
    Map {
        /// Start with the day/night overlay on
        #[arg(short, long)]
        day_night: bool,

        /// Seconds between redraws
        #[arg(short, long)]
        tick: Option<f32>,
    },

    /// Print a single frame of the map to stdout
    Print {
        /// Frame width in columns (default: terminal width or 80)
        #[arg(short = 'W', long)]
        width: Option<u16>,

        /// Frame height in rows (default: terminal height or 24)
        #[arg(short = 'H', long)]
        height: Option<u16>,

        /// Color by day/night phase
        #[arg(short, long)]
        day_night: bool,

        /// Print style markup instead of ANSI colors
        #[arg(short, long)]
        raw: bool,
    },

    /// List the city catalog by region
    Cities,
}

/// Install the log subscriber. Without a log file, logs go to stderr unless
/// the live map owns the screen.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if !interactive => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn print_frame(width: u16, height: u16, day_night: bool, raw: bool, settings: &Settings) -> io::Result<()> {
    let renderer = MapRenderer::new(settings.map.marker_layout());
    let now = chrono::Utc::now();
    let mut stdout = io::stdout().lock();

    if raw {
        writeln!(stdout, "{}", renderer.render(width, height, now, day_night))?;
        return Ok(());
    }

    let (cols, rows) = grid_size(width, height);
    let mut term = Terminal::offscreen(cols as u16, rows as u16);
    for (i, line) in renderer.render_grid(cols, rows, now, day_night).iter().enumerate() {
        term.set_markup(0, i as i32, line);
    }
    term.write_ansi(&mut stdout)
}

fn print_cities() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Available cities:")?;
    for region in Region::ALL {
        writeln!(stdout, "\n[{region}]")?;
        for city in cities_in(region) {
            writeln!(
                stdout,
                "  {:<4} {:<14} {:<31} {}",
                city.code, city.name, city.timezone, city.country
            )?;
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Map { .. });
    init_logging(cli.log_file.as_deref(), interactive)?;

    let settings = match &cli.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::load(),
    };

    match cli.command {
        Commands::Map { day_night, tick } => {
            let mut map = settings.map;
            if let Some(tick) = tick {
                map.tick = tick;
            }
            let config = DashboardConfig {
                tick: map.tick_seconds(),
                day_night: day_night || map.day_night,
                markers: map.marker_layout(),
            };
            dashboard::run(config)?;
        }
        Commands::Print {
            width,
            height,
            day_night,
            raw,
        } => {
            let (term_w, term_h) = crossterm::terminal::size().unwrap_or((80, 24));
            let day_night = day_night || settings.map.day_night;
            print_frame(width.unwrap_or(term_w), height.unwrap_or(term_h), day_night, raw, &settings)?;
        }
        Commands::Cities => print_cities()?,
    }

    Ok(())
}
