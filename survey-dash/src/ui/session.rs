//! Terminal session and the main UI event loop.
//!
//! `App` holds everything the loop needs: the selected page, the current
//! dataset snapshot and the active view. Fetches run on the shared Tokio
//! runtime and hand their result back over a oneshot channel, so the loop
//! keeps drawing the loading screen while they are in flight.

use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Margin, Frame, Terminal};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    data::{self, Dataset},
    error::Result,
    pages::{self, PAGES},
    ui::{
        components::{draw_help_bar, draw_sidebar},
        events::{key_action, Action},
        layout::screen_split,
        views::{make_view, View},
    },
};

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

pub struct App {
    url: String,
    timeout: Duration,
    selected: usize,
    dataset: Option<Dataset>,
    pending: Option<oneshot::Receiver<Dataset>>,
    view: Box<dyn View>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let selected = pages::index_of(pages::find(&config.default_page));
        let timeout = config.request_timeout();
        Self {
            url: config.data_url.clone(),
            timeout,
            selected,
            dataset: None,
            pending: None,
            view: make_view(PAGES[selected].id, None, &config.data_url, timeout),
        }
    }

    /// An app with the dataset already in hand.
    pub fn with_dataset(page_id: &str, dataset: Dataset) -> Self {
        let selected = pages::index_of(pages::find(page_id));
        let url = dataset.url.clone();
        Self {
            view: make_view(PAGES[selected].id, Some(&dataset), &url, Duration::ZERO),
            url,
            timeout: Duration::ZERO,
            selected,
            dataset: Some(dataset),
            pending: None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a fetch in the background. A reload drops the cached copy first.
    pub fn start_load(&mut self, reload: bool) {
        if self.pending.is_some() {
            debug!("load already in flight");
            return;
        }
        let (tx, rx) = oneshot::channel();
        let url = self.url.clone();
        let timeout = self.timeout;
        crate::runtime().spawn(async move {
            if reload {
                data::invalidate(&url).await;
            }
            let dataset = data::load_data(&url, timeout).await;
            if tx.send(dataset).is_err() {
                warn!("dashboard closed before the dataset arrived");
            }
        });
        self.pending = Some(rx);
        self.view = make_view(PAGES[self.selected].id, None, &self.url, self.timeout);
    }

    /// Picks up a finished fetch. Returns `true` if the view changed.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(dataset) => {
                self.pending = None;
                self.set_dataset(dataset);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                warn!("load task ended without a result");
                self.pending = None;
                false
            }
        }
    }

    fn set_dataset(&mut self, dataset: Dataset) {
        info!(
            rows = dataset.table.len(),
            failed = dataset.error.is_some(),
            "dataset ready"
        );
        self.dataset = Some(dataset);
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.view = make_view(
            PAGES[self.selected].id,
            self.dataset.as_ref(),
            &self.url,
            self.timeout,
        );
    }

    fn select(&mut self, index: usize) -> Flow {
        if index >= PAGES.len() || index == self.selected {
            return Flow::Continue;
        }
        debug!(page = PAGES[index].id, "page selected");
        self.selected = index;
        self.rebuild_view();
        Flow::Redraw
    }

    pub fn handle_event(&mut self, ev: &Event) -> Flow {
        match key_action(ev) {
            Some(Action::Quit) => Flow::Quit,
            Some(Action::NextPage) => self.select((self.selected + 1) % PAGES.len()),
            Some(Action::PrevPage) => {
                self.select((self.selected + PAGES.len() - 1) % PAGES.len())
            }
            Some(Action::GoTo(i)) => self.select(i),
            Some(Action::Reload) => {
                if self.pending.is_some() {
                    return Flow::Continue;
                }
                info!(url = %self.url, "reload requested");
                self.start_load(true);
                Flow::Redraw
            }
            None => {
                if self.view.on_event(ev) {
                    Flow::Redraw
                } else {
                    Flow::Continue
                }
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let (sidebar, body, help) = screen_split(f.area());
        let status = if self.pending.is_some() {
            None
        } else {
            self.dataset.as_ref()
        };
        draw_sidebar(f, sidebar, self.selected, status);
        self.view.draw(
            f,
            body.inner(Margin {
                vertical: 0,
                horizontal: 1,
            }),
        );
        draw_help_bar(f, help, &self.view.hints());
    }
}

/// Runs the dashboard until the user quits.
#[tracing::instrument(skip(config), fields(url = %config.data_url))]
pub fn run(config: &Config) -> Result<()> {
    let mut term = setup_terminal()?;
    let mut app = App::new(config);
    app.start_load(false);

    let result = event_loop(&mut term, &mut app, config.tick());

    /* ── graceful clear & restore ──────────────────────────────────── */
    restore_terminal();
    term.show_cursor()?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut term = Terminal::new(CrosstermBackend::new(stdout))?;
    term.clear()?;
    Ok(term)
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show).ok();
}

fn event_loop(
    term: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if app.poll_load() {
            dirty = true;
        }

        /* ── periodic redraw ────────────────────────────────────────── */
        if dirty || last_tick.elapsed() >= tick {
            term.draw(|f| app.draw(f))?;
            last_tick = Instant::now();
            dirty = false;
        }

        /* ── input until the next tick ──────────────────────────────── */
        let wait = tick.saturating_sub(last_tick.elapsed());
        if event::poll(wait)? {
            match app.handle_event(&event::read()?) {
                Flow::Quit => break,
                Flow::Redraw => dirty = true,
                Flow::Continue => {}
            }
        }
    }

    info!("quit requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    use crate::data::Table;

    const CSV: &str = "age_midpoint,marital_status,addicted_with\n\
                       22.5,Not Married,Alcohol\n\
                       27.5,Married,Cannabis\n\
                       17.5,Not Married,Alcohol\n";

    fn dataset(error: Option<&str>) -> Dataset {
        let table = match error {
            Some(_) => Table::default(),
            None => Table::from_csv(CSV.as_bytes()).unwrap(),
        };
        Dataset {
            url: "fixture.csv".into(),
            table: Arc::new(table),
            error: error.map(str::to_owned),
            loaded_at: Local::now(),
        }
    }

    fn key(c: KeyCode) -> Event {
        Event::Key(KeyEvent::new(c, KeyModifiers::NONE))
    }

    fn render(app: &mut App) -> String {
        let mut term = Terminal::new(TestBackend::new(120, 40)).unwrap();
        term.draw(|f| app.draw(f)).unwrap();
        let buf = term.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_home_is_default_page() {
        let mut app = App::with_dataset("home", dataset(None));
        let screen = render(&mut app);
        assert!(screen.contains("Student Survey"));
        assert!(screen.contains("Homepage"));
        assert!(screen.contains("3 rows × 3 cols"));
        assert!(screen.contains("q:quit"));
    }

    #[test]
    fn test_page_navigation_keys() {
        let mut app = App::with_dataset("home", dataset(None));

        assert_eq!(app.handle_event(&key(KeyCode::Tab)), Flow::Redraw);
        assert_eq!(app.selected(), 1);
        assert!(render(&mut app).contains("Drug Use Demographics"));

        assert_eq!(app.handle_event(&key(KeyCode::BackTab)), Flow::Redraw);
        assert_eq!(app.handle_event(&key(KeyCode::BackTab)), Flow::Redraw);
        assert_eq!(app.selected(), PAGES.len() - 1);

        assert_eq!(app.handle_event(&key(KeyCode::Char('1'))), Flow::Redraw);
        assert_eq!(app.selected(), 0);
        // already there, or out of range
        assert_eq!(app.handle_event(&key(KeyCode::Char('1'))), Flow::Continue);
        assert_eq!(app.handle_event(&key(KeyCode::Char('9'))), Flow::Continue);

        assert_eq!(app.handle_event(&key(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(app.handle_event(&key(KeyCode::Esc)), Flow::Quit);
    }

    #[test]
    fn test_correlations_shows_key_findings() {
        let mut app = App::with_dataset("correlations", dataset(None));
        let screen = render(&mut app);
        assert!(screen.contains("Key Findings"));
        assert!(screen.contains("20 - 25 Years"));
        assert!(screen.contains("Tension/Anxiety"));
    }

    #[test]
    fn test_failed_load_shows_error_and_halts() {
        let mut app = App::with_dataset("main", dataset(Some("connection refused")));
        let screen = render(&mut app);
        assert!(screen.contains("Error loading data: connection refused"));
        assert!(screen.contains("Please check the data source URL or file content."));
        assert!(!screen.contains("Data Preview"));
        assert!(screen.contains("load failed"));
    }

    #[test]
    fn test_background_load_replaces_loading_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("df.csv");
        std::fs::write(&path, CSV).unwrap();
        let config = Config {
            data_url: path.display().to_string(),
            ..Config::default()
        };

        let mut app = App::new(&config);
        app.start_load(false);
        assert!(app.is_loading());
        assert!(render(&mut app).contains("Loading survey data"));

        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.poll_load() {
            assert!(Instant::now() < deadline, "load did not finish");
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!app.is_loading());
        assert!(render(&mut app).contains("Student Survey"));
    }
}
