mod app;
mod celebration;
mod render;
mod report;
mod settings;
mod theme;

use app::{App, AppAction};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hanoi_core::{
    collect_moves, compare_timings, count_iterative, count_recursive, growth_curve,
    parse_disk_count, time_strategies, HanoiConfig, HanoiError, Peg, Strategy, Summary,
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Largest disk count accepted for closed-form output
const MAX_SUMMARY_DISKS: u32 = 10_000;

#[derive(Parser)]
#[command(name = "hanoi", version, about = "Tower of Hanoi move engine and visualizer")]
struct Cli {
    /// Config file (defaults to config.json in the local data directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Largest disk count to list or animate
    #[arg(long, global = true, value_name = "N")]
    max_visual: Option<u32>,

    /// Largest disk count in the timing sweep (at most 63)
    #[arg(long, global = true, value_name = "N")]
    max_timing: Option<u32>,

    /// Largest disk count in the growth curve
    #[arg(long, global = true, value_name = "N")]
    max_growth: Option<u32>,

    /// Pause between animation steps in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    delay: Option<u64>,

    /// Log file verbosity
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Debug)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Animate the solution in the terminal (default)
    Animate {
        #[arg(value_parser = parse_disks, default_value = "5")]
        disks: u32,
        #[arg(short, long, default_value_t = Strategy::Iterative)]
        strategy: Strategy,
    },
    /// Show the closed-form move count
    Count {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_SUMMARY_DISKS as i64))]
        disks: u32,
    },
    /// List every move
    Moves {
        #[arg(value_parser = parse_disks)]
        disks: u32,
        #[arg(short, long, default_value_t = Strategy::Iterative)]
        strategy: Strategy,
        #[arg(long)]
        json: bool,
    },
    /// Compare recursive and iterative execution time for 1..=n disks
    Timings {
        #[arg(value_parser = parse_disks)]
        disks: u32,
        #[arg(long)]
        json: bool,
    },
    /// Print the growth curve of log10(2^n)
    Growth {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_SUMMARY_DISKS as i64))]
        disks: u32,
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration
    Config {
        /// Save the resolved configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Disk count for commands that enumerate moves: 1..=MAX_DISKS
fn parse_disks(s: &str) -> Result<u32, String> {
    match parse_disk_count(s) {
        Ok(0) => Err("at least one disk is required".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Log to a file; the terminal belongs to the animation
fn init_logging(level: LevelFilter) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let dir = settings::data_dir();
    if fs::create_dir_all(&dir).is_ok() {
        if let Ok(log_file) = File::create(dir.join("hanoi.log")) {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());
    log::info!("hanoi {} starting", env!("CARGO_PKG_VERSION"));

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(settings::default_config_path);
    let overrides = settings::Overrides {
        max_visual_n: cli.max_visual,
        max_timing_n: cli.max_timing,
        max_growth_n: cli.max_growth,
        animation_delay_ms: cli.delay,
    };
    let config = settings::resolve(settings::load(&config_path), &overrides);

    let command = cli.command.unwrap_or(Command::Animate {
        disks: 5,
        strategy: Strategy::default(),
    });

    let result = match command {
        Command::Animate { disks, strategy } => return animate(disks, strategy, &config),
        Command::Count { disks } => {
            count(disks, &config);
            Ok(())
        }
        Command::Moves {
            disks,
            strategy,
            json,
        } => list_moves(disks, strategy, json, &config),
        Command::Timings { disks, json } => timings(disks, json, &config),
        Command::Growth { disks, json } => growth(disks, json, &config),
        Command::Config { write } => {
            print!("{}", report::to_json(&config)?);
            println!();
            if write {
                settings::save(&config, &config_path)?;
                println!("Saved to {}", config_path.display());
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn count(disks: u32, config: &HanoiConfig) {
    print!("{}", report::format_summary(&Summary::for_disks(disks)));
    match time_strategies(disks, config) {
        Ok(sample) => {
            print!(
                "{}",
                report::format_cross_check(disks, count_recursive(disks), count_iterative(disks))
            );
            print!("{}", report::format_timing_sample(&sample));
        }
        Err(_) => println!(
            "Counted:     skipped above {} disks (see --max-timing)",
            config.timing_limit()
        ),
    }
}

fn list_moves(
    disks: u32,
    strategy: Strategy,
    json: bool,
    config: &HanoiConfig,
) -> Result<(), HanoiError> {
    let moves = collect_moves(disks, strategy, config)?;
    if json {
        println!("{}", report::to_json(&moves).unwrap_or_default());
    } else {
        print!("{}", report::format_moves(&moves));
    }
    Ok(())
}

fn timings(disks: u32, json: bool, config: &HanoiConfig) -> Result<(), HanoiError> {
    let samples = compare_timings(disks, config);
    if json {
        println!("{}", report::to_json(&samples).unwrap_or_default());
    } else {
        print!("{}", report::format_timings(&samples));
        if disks > config.timing_limit() {
            println!("(capped at {} disks)", config.timing_limit());
        }
    }
    Ok(())
}

fn growth(disks: u32, json: bool, config: &HanoiConfig) -> Result<(), HanoiError> {
    let points = growth_curve(disks, config);
    if json {
        println!("{}", report::to_json(&points).unwrap_or_default());
    } else {
        print!("{}", report::format_growth(&points));
    }
    Ok(())
}

fn animate(disks: u32, strategy: Strategy, config: &HanoiConfig) -> io::Result<()> {
    let mut app = match App::new(disks, strategy, config) {
        Ok(app) => app,
        Err(e @ HanoiError::ResourceLimitExceeded { .. }) => {
            // Too many moves to show; the closed form still applies
            println!("{}", e);
            print!("{}", report::format_summary(&Summary::for_disks(disks)));
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    print!("{}", finish_animation(&app, result)?);
    Ok(())
}

/// Final tower report once the terminal is restored, or the loop's error
fn finish_animation(app: &App, result: io::Result<()>) -> io::Result<String> {
    if let Err(e) = result {
        log::error!("animation failed after {} moves: {}", app.moves_applied(), e);
        return Err(e);
    }
    Ok(format!(
        "{} after {} of {} moves:\n{}",
        if app.towers().is_solved_on(Peg::C) {
            "Solved"
        } else {
            "Stopped"
        },
        app.moves_applied(),
        app.total_moves(),
        app.towers()
    ))
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Tick rate follows the playback state
        let tick_rate = app.get_tick_rate();

        // Render
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        }

        // One replay step (or animation frame) per tick
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    log::info!(
        "Animation closed after {} of {} moves",
        app.moves_applied(),
        app.total_moves()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_failure_is_propagated() {
        let app = App::new(3, Strategy::Iterative, &HanoiConfig::default()).unwrap();
        let err = finish_animation(&app, Err(io::Error::new(io::ErrorKind::Other, "tty lost")))
            .unwrap_err();
        assert_eq!(err.to_string(), "tty lost");
    }

    #[test]
    fn test_finished_animation_reports_towers() {
        let app = App::new(3, Strategy::Iterative, &HanoiConfig::default()).unwrap();
        let text = finish_animation(&app, Ok(())).unwrap();
        assert!(text.starts_with("Stopped after 0 of 7 moves:\n"));
        assert!(text.ends_with("A: [3 2 1]\nB: []\nC: []\n"));
    }

    #[test]
    fn test_parse_disks_rejects_zero() {
        assert!(parse_disks("0").is_err());
        assert_eq!(parse_disks("4"), Ok(4));
        assert!(parse_disks("-2").is_err());
    }
}
