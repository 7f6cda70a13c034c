use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use reel::build_info;
use reel::constants::{FRAME_INTERVAL_MS, MAX_FRAME_DT_SECS};
use reel::fishing::Angler;
use reel::logger::{self, LogBuffer};
use reel::minigame::MinigameOutcome;
use reel::settings::{Settings, SettingsManager};
use reel::ui::draw_ui;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
struct CliArgs {
    debug: bool,
    config_path: Option<PathBuf>,
    init_config: bool,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);

    let manager = match &cli.config_path {
        Some(path) => SettingsManager::with_settings_file(path)?,
        None => SettingsManager::new()?,
    };

    if cli.init_config {
        manager.save(&Settings::default())?;
        println!(
            "Wrote default settings to {}",
            manager.settings_path().display()
        );
        return Ok(());
    }

    let settings = match manager.load_or_init() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!(
                "Could not load settings from {}: {}",
                manager.settings_path().display(),
                e
            );
            std::process::exit(1);
        }
    };

    let log_buffer = logger::init(cli.debug);

    let bag = match manager.load_bag() {
        Ok(bag) => bag,
        Err(e) => {
            log::warn!("Could not load bag, starting empty: {}", e);
            Default::default()
        }
    };

    if settings.water.is_empty() {
        log::warn!("No fish configured, every bite is an empty hook");
    }

    let auto_activate = settings.auto_activate || cli.debug;
    let mut angler = Angler::new(
        settings.minigame,
        settings.rod,
        settings.water,
        StdRng::from_entropy(),
    )?
    .with_bag(bag);
    if auto_activate {
        angler.start_practice_reel();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut angler, &manager, log_buffer);

    // Cleanup terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    angler.stow();
    manager.save_bag(angler.bag())?;
    result?;

    let bag = angler.bag();
    println!(
        "Bag: {} fish, {:.2} kg, worth {:.0}",
        bag.len(),
        bag.total_weight_g() / 1000.0,
        bag.total_value()
    );

    Ok(())
}

/// Frame loop: draw, read input, step the world with the measured dt.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    angler: &mut Angler<StdRng>,
    manager: &SettingsManager,
    log_buffer: &LogBuffer,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_frame = Instant::now();

    loop {
        let log_lines = log_buffer.lines();
        terminal.draw(|frame| draw_ui(frame, &*angler, &log_lines))?;

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    match key_event.code {
                        KeyCode::Char(' ') => {
                            angler.primary_action();
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        _ => {}
                    }
                }
            }
        }

        if last_frame.elapsed() >= frame_interval {
            let dt = last_frame.elapsed().as_secs_f64().min(MAX_FRAME_DT_SECS);
            last_frame = Instant::now();

            if angler.tick(dt) == Some(MinigameOutcome::Success) {
                if let Err(e) = manager.save_bag(angler.bag()) {
                    log::warn!("Could not save bag: {}", e);
                }
            }
        }
    }
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        debug: false,
        config_path: None,
        init_config: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--debug" => {
                cli.debug = true;
            }
            "--config" => {
                if i + 1 < args.len() {
                    cli.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("--config needs a path");
                    std::process::exit(1);
                }
            }
            "init-config" => {
                cli.init_config = true;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'reel --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_help() {
    println!("Reel - terminal fishing reel minigame\n");
    println!("Usage: reel [options] [command]\n");
    println!("Commands:");
    println!("  init-config      Write the default settings file and exit");
    println!("Options:");
    println!("  --config <path>  Use this settings file instead of the default");
    println!("  --debug          Verbose log and start a practice reel right away");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nControls: Space casts, reels and pushes; q or Esc quits.");
}
