//! selection-studio CLI
//!
//! Step through selection sort in the terminal, or print the recorded steps.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use selection_studio::config::{Config, LogLevel};
use selection_studio::error::Result;
use selection_studio::input::{share, DataSource};
use selection_studio::logging;
use selection_studio::playback::Speed;
use selection_studio::report::{self, ReportFormat};
use selection_studio::trace::{generate, Locale};
use selection_studio::ui::{App, AppOptions};

#[derive(Parser)]
#[command(name = "selection-studio")]
#[command(about = "Step through selection sort one comparison at a time")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (default: ./selection-studio.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevelArg>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive visualizer (default)
    Play(PlayArgs),

    /// Print every step of the run
    Trace {
        #[command(flatten)]
        data: DataArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Narrative language
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Print the ?data= string for an array
    Share {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args, Clone, Default)]
struct PlayArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Playback speed, 20 (slow) to 980 (fast)
    #[arg(long, value_parser = clap::value_parser!(u16).range(20..=980))]
    speed: Option<u16>,

    /// Narrative language
    #[arg(long, value_enum)]
    locale: Option<LocaleArg>,
}

#[derive(Args, Clone, Default)]
struct DataArgs {
    /// Array as a comma-separated list, or a ?data= query / URL
    #[arg(long, conflicts_with = "file")]
    data: Option<String>,

    /// Read the array from a .txt or .csv file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Seed for the random array used when no data is given
    #[arg(long)]
    seed: Option<u64>,
}

impl DataArgs {
    fn source(&self) -> DataSource {
        DataSource {
            data: self.data.clone(),
            file: self.file.clone(),
            seed: self.seed,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Human => ReportFormat::Human,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    En,
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Ja => Locale::Ja,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_with_explicit_path(path)?,
        None => Config::load()?,
    };

    let command = cli.command.unwrap_or(Commands::Play(cli.play));
    let tui_mode = matches!(command, Commands::Play(_));

    if config.general.enable_logging {
        let log_file = logging::log_path(
            cli.log_file.as_deref(),
            &config.general.log_file,
            tui_mode,
        );
        let level = cli
            .log_level
            .map(LogLevel::from)
            .unwrap_or(config.general.log_level);
        logging::init(log_file.as_deref(), level, tui_mode);
    }
    debug!(?config, "configuration resolved");

    match command {
        Commands::Play(args) => cmd_play(&config, args),
        Commands::Trace {
            data,
            format,
            locale,
        } => {
            let locale = locale.map(Locale::from).unwrap_or(config.ui.locale);
            cmd_trace(&config, &data, format, locale)
        }
        Commands::Share { data } => cmd_share(&config, &data),
    }
}

fn cmd_play(config: &Config, args: PlayArgs) -> Result<()> {
    let bounds = config.bounds();
    // Validate before touching the terminal so errors print normally
    let values = args.data.source().resolve(&bounds)?;
    info!(values = %share::encode(&values), "starting visualizer");

    let options = AppOptions {
        bounds,
        speed: args.speed.map(Speed::new).unwrap_or_else(|| config.speed()),
        locale: args.locale.map(Locale::from).unwrap_or(config.ui.locale),
        seed: args.data.seed,
    };
    let mut app = App::new(values, options);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn cmd_trace(config: &Config, data: &DataArgs, format: OutputFormat, locale: Locale) -> Result<()> {
    let values = data.source().resolve(&config.bounds())?;
    let trace = generate(&values);
    let report = report::format_trace(&trace, format.into(), locale)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", report)?;
    if format == OutputFormat::Json {
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_share(config: &Config, data: &DataArgs) -> Result<()> {
    let values = data.source().resolve(&config.bounds())?;
    println!("{}", share::share_query(&values));
    Ok(())
}
