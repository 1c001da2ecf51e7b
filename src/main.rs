//! # Stand-up CLI Entry Point
//!
//! ## Overview
//!
//! `standup` opens a terminal form where each team member's task update is
//! picked, typed and saved. Saved entries are rendered into the daily summary,
//! which can be opened as a prefilled Gmail draft or copied to the clipboard.
//!
//! ## Usage
//!
//! ```bash
//! # Today's stand-up
//! standup
//!
//! # A specific day with another theme
//! standup --date 2024-01-15 --theme nord
//!
//! # Use a different config file
//! standup --config ./team.json
//!
//! # Print the resolved configuration and exit
//! standup --debug
//! ```
//!
//! ## Logging
//!
//! The TUI owns the terminal, so logs go to `standup.log` in the platform data
//! directory (or `--log-file`). The level is read from `STANDUP_LOG`, e.g.
//! `STANDUP_LOG=debug standup`.
//!
//! ## Key Bindings
//!
//! - `j` / `k` - Move between entries
//! - `h` / `l` - Pick the team member
//! - `Enter` / `i` - Type the task text
//! - `s` - Save details, `e` - Edit, `a` - Add, `d` - Delete
//! - `[` / `]` / `t` / `D` - Change the date
//! - `m` - Open the email draft, `y` - Copy the summary
//! - `?` - Help, `q` - Quit

use standup::mail::{BrowserLauncher, Launcher};
use standup::session::Session;
use standup::ui::{self, config::Config, theme::Theme, Action, App};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "STANDUP_LOG";

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Standup - record daily stand-up updates and draft the summary email
#[derive(Parser, Debug)]
#[command(name = "standup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect daily stand-up updates and draft the summary email", long_about = None)]
struct Args {
    /// Stand-up date (YYYY-MM-DD), defaults to today
    #[arg(short, long, value_name = "DATE", value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Colour theme, overrides the config file
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    debug: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, ui::app::DATE_INPUT_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.clone()) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args);

    let _ = panic::take_hook();

    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    result
}

/// Route tracing output to a log file
fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = match log_file {
        Some(path) => path,
        None => {
            let dirs = directories::ProjectDirs::from("", "", "standup")
                .context("Could not determine data directory")?;
            dirs.data_dir().join("standup.log")
        }
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<(Config, Option<PathBuf>)> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Ok((Config::load_from(path)?, Some(path.clone())))
        }
        None => Ok((Config::load(), Config::config_path().ok())),
    }
}

fn resolve_theme(cli_theme: Option<&str>, config: &Config) -> Result<Theme> {
    if let Some(name) = cli_theme {
        return match Theme::by_name(name) {
            Some(theme) => Ok(theme.clone()),
            None => {
                let available: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
                bail!(
                    "Unknown theme '{}'. Available: {}",
                    name,
                    available.join(", ")
                )
            }
        };
    }

    Ok(Theme::by_name(&config.theme)
        .unwrap_or_else(|| {
            warn!(theme = %config.theme, "unknown theme in config, using default");
            Theme::default_theme()
        })
        .clone())
}

fn run_application(args: Args) -> Result<()> {
    let (config, config_path) = load_config(args.config.as_ref())?;
    config.validate().context("Invalid configuration")?;
    let theme = resolve_theme(args.theme.as_deref(), &config)?;

    if args.debug {
        println!("=== Configuration ===");
        match &config_path {
            Some(path) => println!("  Path: {}", path.display()),
            None => println!("  Path: (none)"),
        }
        println!("  Theme: {}", theme.name);
        println!("  Team members: {}", config.team_members.join(", "));
        println!("  Recipients: {}", config.recipients.join(", "));
        match &config.cc {
            Some(cc) => println!("  Cc: {}", cc.join(", ")),
            None => println!("  Cc: (same as recipients)"),
        }
        println!("  Signature: {}", config.signature);
        return Ok(());
    }

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let session = Session::new(date, config.team_members.clone());
    let mut app = App::new(session, config.mail_settings(), theme);

    info!(%date, members = config.team_members.len(), "starting stand-up session");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let mut launcher = BrowserLauncher;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, &mut launcher);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    info!("session closed");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    launcher: &mut dyn Launcher,
) -> Result<()> {
    loop {
        app.expire_status(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Short timeout so the status banner disappears on time
        let Some(event) = event_reader.read_event(Duration::from_millis(250))? else {
            continue;
        };

        if let Event::Key(key) = event {
            match ui::handle_key(app, key) {
                Action::SendMail => app.send_mail(launcher),
                Action::CopySummary => app.copy_summary(&mut io::stdout()),
                Action::None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn args() -> Args {
        Args {
            date: None,
            theme: None,
            config: None,
            log_file: None,
            debug: false,
        }
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![key_event(KeyCode::Char('a'))]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn test_args_parse_from_command_line() {
        let args = Args::try_parse_from(["standup", "--date", "2024-01-15", "--theme", "nord"])
            .unwrap();
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(args.theme.as_deref(), Some("nord"));
        assert!(!args.debug);
    }

    #[test]
    fn test_resolve_theme_cli_unknown_errors() {
        let err = resolve_theme(Some("neon"), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'neon'"));
    }

    #[test]
    fn test_resolve_theme_config_unknown_falls_back() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(None, &config).unwrap();
        assert_eq!(theme.name, Theme::default_theme().name);
    }

    #[test]
    fn test_run_application_missing_config() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/standup/config.json")),
            ..args()
        };
        let err = run_application(args).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_run_application_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"recipients": ["nope"]}"#).unwrap();

        let args = Args {
            config: Some(path),
            ..args()
        };
        let err = run_application(args).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_run_application_debug_exits_early() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"recipients": ["team@example.com"]}"#).unwrap();

        let args = Args {
            config: Some(path),
            debug: true,
            ..args()
        };
        assert!(run_application(args).is_ok());
    }

    #[test]
    fn test_init_logging_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("standup.log");
        // A global subscriber may already be set by another test; the file is
        // created either way.
        let _ = init_logging(Some(path.clone()));
        assert!(path.exists());
    }
}
