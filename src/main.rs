use bossrush::build_info;
use bossrush::catalog::all_bosses;
use bossrush::core::{BossRush, CatchUpLoop};
use bossrush::ui::{self, LogView};
use bossrush::utils::{logging, SaveStore};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const LOG_SCROLL_PAGE: usize = 10;

/// Screen-level state that is not part of the game itself.
#[derive(Default)]
struct ViewState {
    log_view: LogView,
    confirming_reset: bool,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Boss Rush - learn to dodge, one boss at a time\n");
                println!("Usage: bossrush [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Saves, config.json and logs live in ~/.bossrush/");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'bossrush --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = SaveStore::new()?;
    let _log_guard = logging::init_file_logging(&store.dir().join("logs"));
    tracing::info!("{} starting", build_info::version_line());

    let config = store.load_config();
    let (expertise, progress) = store.load();
    let mut game = match BossRush::with_state(config, all_bosses(), expertise, progress) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!(error = %e, "cannot start");
            eprintln!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &store);

    // Cleanup terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    store.save(game.expertise(), game.progress())?;
    tracing::info!("saved and exiting");
    result
}

/// Runs the fight screen until the player quits. The catch-up loop lives only
/// as long as this function, so leaving the screen stops it.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut BossRush,
    store: &SaveStore,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut catch_up = CatchUpLoop::new(Duration::from_millis(game.config().tick_interval_ms));
    let mut view = ViewState::default();

    loop {
        terminal.draw(|frame| {
            ui::draw_ui(frame, game, &view.log_view);
            if view.confirming_reset {
                ui::draw_reset_confirm(frame, game);
            }
        })?;

        // Wait for input until the next timer firing is due
        let timeout = catch_up.time_until_next(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Flow::Quit = handle_key(key, game, &mut view, store) {
                        return Ok(());
                    }
                }
            }
        }

        if Instant::now() >= catch_up.next_firing() {
            let report = catch_up.run_batch(game, &mut rng);
            view.log_view.on_batch(report.log_grew);
            if game.take_dirty() {
                save_or_warn(store, game);
            }
        }
    }
}

fn handle_key(
    key: KeyEvent,
    game: &mut BossRush,
    view: &mut ViewState,
    store: &SaveStore,
) -> Flow {
    if view.confirming_reset {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                game.reset_progress();
                game.take_dirty();
                save_or_warn(store, game);
                *view = ViewState::default();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                view.confirming_reset = false;
            }
            _ => {}
        }
        return Flow::Continue;
    }

    let current = game.current_boss_index();
    let boss_count = game.catalog().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => view.confirming_reset = true,
        KeyCode::Left if current > 0 => select(game, current - 1),
        KeyCode::Right if current + 1 < boss_count => select(game, current + 1),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as u8 - b'1') as usize;
            if index < boss_count {
                select(game, index);
            }
        }
        KeyCode::Up => view.log_view.scroll_up(1, game.combat().log.len()),
        KeyCode::Down => view.log_view.scroll_down(1),
        KeyCode::PageUp => view
            .log_view
            .scroll_up(LOG_SCROLL_PAGE, game.combat().log.len()),
        KeyCode::PageDown => view.log_view.scroll_down(LOG_SCROLL_PAGE),
        KeyCode::End => view.log_view = LogView::default(),
        _ => {}
    }
    Flow::Continue
}

fn select(game: &mut BossRush, index: usize) {
    if let Err(e) = game.select_boss(index) {
        tracing::warn!(error = %e, "boss select rejected");
    }
}

fn save_or_warn(store: &SaveStore, game: &BossRush) {
    if let Err(e) = store.save(game.expertise(), game.progress()) {
        tracing::warn!(error = %e, "save failed");
    }
}
