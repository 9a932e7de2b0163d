use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use dino_runner::core::constants::WINDOW_TITLE;
use dino_runner::core::GameConfig;
use dino_runner::dino::{resize, tick_session, DinoSession};
use dino_runner::input::{handle_event, InputResult};
use dino_runner::ui::dino_scene::{scene_layout, viewport_for_canvas};
use dino_runner::ui::draw_ui;
use dino_runner::utils::{init_logging, load_config, version_line};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--print-config" => {
                let config = load_config();
                let json = serde_json::to_string_pretty(&config)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{}", json);
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dino Runner - jump the obstacles, don't touch them\n");
                println!("Usage: dino-runner [option]\n");
                println!("Options:");
                println!("  --print-config  Show the effective configuration");
                println!("  --version       Show version information");
                println!("  --help          Show this help message");
                println!("\nConfig: ~/.dino-runner/config.json");
                println!("Log:    ~/.dino-runner/dino-runner.log (filter with RUST_LOG)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'dino-runner --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("Starting {}", version_line());

    let config = load_config();
    log::debug!("Config: {:?}", config);

    let mut terminal = setup_terminal()?;
    let result = run_game(&mut terminal, &config);
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Game loop failed: {}", e);
    }
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(SetTitle(WINDOW_TITLE))?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Frame loop: advance the session, draw it, then wait for input until the
/// next frame is due.
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
) -> io::Result<()> {
    let mut session = DinoSession::new(config);
    let frame_interval = Duration::from_millis(config.frame_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        let layout = scene_layout(terminal.size()?);
        if let Some(viewport) = viewport_for_canvas(layout.canvas) {
            resize(&mut session, viewport);
        }

        // Whole milliseconds only; the remainder carries into the next frame
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick += Duration::from_millis(dt_ms);
        tick_session(&mut session, dt_ms);

        terminal.draw(|frame| draw_ui(frame, &session))?;

        let deadline = last_tick + frame_interval;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            let event = event::read()?;
            if handle_event(&mut session, &event, &layout) == InputResult::Quit {
                log::info!(
                    "Quit after {} rounds, highest score {}",
                    session.rounds_played,
                    session.highest_score
                );
                return Ok(());
            }
        }
    }
}
