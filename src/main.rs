use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use zone_explorer::app::App;
use zone_explorer::config::SimConfig;
use zone_explorer::simulation::{FeedbackCategory, Simulation};
use zone_explorer::ui::draw_ui;

#[derive(Debug, Parser)]
#[command(version, about = "Watch an agent explore its comfort, stretch and growth zones")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Initial feedback selection (supportive, neutral, critical)
    #[arg(long)]
    feedback: Option<FeedbackCategory>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run this many frames without a terminal and print a summary
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if cli.headless.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(feedback) = cli.feedback {
        config.initial_feedback = feedback;
    }
    Ok(config)
}

fn run_headless(config: &SimConfig, frames: u64) {
    let mut app = App::from_parts(Simulation::new(config), config);
    for _ in 0..frames {
        app.on_tick();
    }

    let sim = &app.simulation;
    let bounds = sim.bounds();
    println!("frames:            {}", sim.frame);
    println!("feedback:          {} ({:+.2})", sim.psyche.category, sim.psyche.feedback);
    println!("confidence:        {:.3}", sim.psyche.confidence);
    println!("learning progress: {:+.3}", sim.psyche.learning_progress);
    println!("curiosity:         {:.3}", sim.psyche.curiosity);
    println!("position:          ({:.1}, {:.1})", sim.agent.x, sim.agent.y);
    println!("zone:              {}", sim.zone());
    println!("bounds:            [{:.1}, {:.1}] {:?}", bounds.min_x, bounds.max_x, bounds.lockout);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = load_config(&cli)?;
    tracing::info!(?config, "starting");

    if let Some(frames) = cli.headless {
        run_headless(&config, frames);
        return Ok(());
    }

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App State
    let mut app = App::new(&config);
    let tick_rate = config.tick_rate();

    let res = run_app(&mut terminal, &mut app, tick_rate);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("terminal loop failed: {err}");
    }
    tracing::info!(frames = app.simulation.frame, "stopped");

    res.context("terminal loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        // 1. Update
        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        // 2. Render
        terminal.draw(|f| draw_ui(f, &app.simulation, &app.panel))?;

        // 3. Input
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
