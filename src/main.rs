use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keyword_quiz::{
    Config, FetchResponse, HttpQuizSource, QuizSource, SessionController, SessionModel, draw,
    logger, spawn_fetch_worker,
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    if let Err(e) = logger::init(&config.log_path) {
        eprintln!(
            "Could not open log file {}: {}",
            config.log_path.display(),
            e
        );
    }
    logger::log(&format!(
        "Starting with endpoint {} and {} seconds",
        config.endpoint, config.total_seconds
    ));

    let source: Arc<dyn QuizSource> = Arc::new(HttpQuizSource::new(&config)?);
    let (request_tx, request_rx) = crossbeam_channel::unbounded();
    let (response_tx, response_rx) = crossbeam_channel::unbounded();
    // Not joined on exit: an in-flight request would hold the UI until it times out.
    let _worker = spawn_fetch_worker(source, response_tx, request_rx)?;

    let mut controller =
        SessionController::new(SessionModel::new(config.total_seconds), Some(request_tx));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut controller, &response_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    logger::log("Exiting");

    result.map_err(Into::into)
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut SessionController,
    responses: &Receiver<FetchResponse>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, controller))?;

        let timeout = controller
            .timer
            .time_until_next(Instant::now())
            .map_or(IDLE_POLL, |until_tick| until_tick.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            controller.handle_key(key, Instant::now());
        }

        while let Ok(response) = responses.try_recv() {
            controller.apply_fetch_response(response, Instant::now());
        }
        controller.on_timer(Instant::now());

        if controller.should_quit {
            return Ok(());
        }
    }
}
