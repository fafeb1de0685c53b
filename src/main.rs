use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::{self, File};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tapedeck::app::App;
use tapedeck::config::Config;
use tapedeck::source::{self, DurationProbe};
use tapedeck::{RepeatMode, Session, input, ui};

#[derive(Parser, Debug)]
#[command(name = "tapedeck", version)]
#[command(about = "Play local audio files from a terminal playlist", long_about = None)]
struct Args {
    /// Audio files or directories, in the order they should play
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Start with the playlist shuffled
    #[arg(short = 's', long)]
    shuffle: bool,

    /// Repeat mode at startup (overrides the config file)
    #[arg(short = 'r', long, value_enum)]
    repeat: Option<RepeatArg>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Where to write the log (the terminal is taken by the player)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RepeatArg {
    Off,
    All,
    Single,
}

impl From<RepeatArg> for RepeatMode {
    fn from(arg: RepeatArg) -> Self {
        match arg {
            RepeatArg::Off => RepeatMode::Off,
            RepeatArg::All => RepeatMode::All,
            RepeatArg::Single => RepeatMode::Single,
        }
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if args.shuffle {
        config.playback.shuffle = true;
    }
    if let Some(repeat) = args.repeat {
        config.playback.repeat = repeat.into();
    }

    let tracks = source::collect_tracks(&args.paths)?;
    log::info!("Selected {} track(s)", tracks.len());

    let probe = DurationProbe::spawn(tracks.iter().map(|track| track.source.clone()).collect());
    let session = Session::new(tracks);
    let mut app = App::new(session, config, probe).context("failed to start audio player")?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("failed to install signal handler")?;

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &interrupted);
    restore_terminal(&mut terminal)?;
    result
}

fn run(terminal: &mut Tui, app: &mut App, interrupted: &AtomicBool) -> Result<()> {
    app.start();

    while app.is_running() && !interrupted.load(Ordering::SeqCst) {
        terminal.draw(|frame| ui::draw(frame, &app.view()))?;
        input::handle_input(app)?;
        app.update();
    }

    log::info!("Shutting down");
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let path = args.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tapedeck")
        .join("tapedeck.log")
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
