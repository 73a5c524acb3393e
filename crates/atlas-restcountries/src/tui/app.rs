//! Application state and event loop for the interactive search

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::ui;
use super::worker::{SearchQuery, SearchResponse, spawn_worker};
use crate::client::CountrySource;
use crate::country::{CountryDetail, CountrySummary};
use crate::outcome::SearchOutcome;
use crate::{NOT_FOUND_NOTICE, TOO_MANY_NOTICE};

/// Quiet period after the last keystroke before a query settles
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// How long notices stay on screen
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Simple single-line text input with cursor
#[derive(Default, Clone)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| self.cursor + c.len_utf8())
                .unwrap_or(self.cursor);
            self.text.drain(self.cursor..next);
        }
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| self.cursor + c.len_utf8())
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Delete the word before the cursor (whitespace-delimited)
    pub fn delete_word_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let s = &self.text[..self.cursor];
        let trimmed_len = s
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let start = s[..trimmed_len]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Clear all text
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle a key event, returns true if the event edited or moved anything
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let has_ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = modifiers.contains(KeyModifiers::ALT);

        match code {
            KeyCode::Char('u') if has_ctrl => self.clear(),
            KeyCode::Char('w') if has_ctrl => self.delete_word_before(),
            KeyCode::Char('a') if has_ctrl => self.move_start(),
            KeyCode::Char('e') if has_ctrl => self.move_end(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Char(c) if !has_ctrl && !has_alt => self.insert_char(c),
            _ => return false,
        }
        true
    }
}

/// Transient notice line
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
    pub is_error: bool,
}

impl Toast {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
            is_error: true,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// What the output region currently shows. Assigning a new variant replaces
/// the old one wholesale, so the list and detail views can never be visible
/// at the same time.
pub enum View {
    Idle,
    Searching { started_at: Instant },
    List(Vec<CountrySummary>),
    Detail(Box<CountryDetail>),
}

/// Application state
pub struct App {
    /// Search input
    pub input: TextInput,
    /// Current output region content
    pub view: View,
    /// Toast notification
    pub toast: Option<Toast>,
    /// How long the displayed result took to fetch
    pub last_duration: Option<Duration>,
    /// Should quit?
    pub should_quit: bool,
    /// Query counter; responses answering anything older are discarded
    query_counter: u64,
    /// Last settled query text (for change detection)
    last_query: String,
    /// Time of the last edit, drives the debounce
    last_input_time: Instant,
    /// Channel to send queries to the worker
    query_tx: Sender<SearchQuery>,
    /// Channel to receive responses from the worker
    response_rx: Receiver<SearchResponse>,
}

impl App {
    pub fn new<S: CountrySource>(source: S) -> Self {
        let (query_tx, query_rx) = mpsc::channel::<SearchQuery>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();

        spawn_worker(source, query_rx, response_tx);

        Self::with_worker(query_tx, response_rx)
    }

    fn with_worker(query_tx: Sender<SearchQuery>, response_rx: Receiver<SearchResponse>) -> Self {
        Self {
            input: TextInput::default(),
            view: View::Idle,
            toast: None,
            last_duration: None,
            should_quit: false,
            query_counter: 0,
            last_query: String::new(),
            last_input_time: Instant::now(),
            query_tx,
            response_rx,
        }
    }

    /// Send the current input to the worker once the quiet period elapsed
    /// and the text actually changed. Blank input clears the output without
    /// issuing a request.
    fn maybe_send_query(&mut self) {
        if self.last_input_time.elapsed() < DEBOUNCE {
            return;
        }

        let query = self.input.text.clone();
        if query == self.last_query {
            return;
        }
        self.last_query = query.clone();
        self.toast = None;
        self.last_duration = None;

        if query.trim().is_empty() {
            self.view = View::Idle;
            return;
        }

        // Starting a search wipes the previous output
        self.view = View::Searching {
            started_at: Instant::now(),
        };
        self.query_counter += 1;
        let _ = self.query_tx.send(SearchQuery {
            id: self.query_counter,
            text: query,
        });
    }

    /// Apply worker responses (non-blocking). A response that does not
    /// answer the latest issued query lost the race and is dropped.
    fn poll_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            if response.query_id != self.query_counter {
                continue;
            }
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: SearchResponse) {
        if response.error.is_some() {
            // All failures collapse into the same user-facing notice
            self.view = View::Idle;
            self.toast = Some(Toast::error(NOT_FOUND_NOTICE));
            return;
        }

        match response.outcome {
            Some(SearchOutcome::TooMany(_)) => {
                self.view = View::Idle;
                self.toast = Some(Toast::notice(TOO_MANY_NOTICE));
            }
            Some(SearchOutcome::Matches(countries)) => {
                self.view = View::List(countries);
                self.last_duration = Some(response.duration);
            }
            Some(SearchOutcome::Single(detail)) => {
                self.view = View::Detail(detail);
                self.last_duration = Some(response.duration);
            }
            None => self.view = View::Idle,
        }
    }

    /// Clear expired toast
    fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            match (key.code, key.modifiers) {
                (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                _ => {
                    if self.input.handle_key(key.code, key.modifiers) {
                        self.last_input_time = Instant::now();
                    }
                }
            }
        }
    }
}

/// Run the interactive search against `source`
pub fn run<S: CountrySource>(source: S) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // ~30Hz is plenty for a text UI
    const FRAME_TIME: Duration = Duration::from_millis(33);

    loop {
        let frame_start = Instant::now();

        // Drain all pending events first (lowest latency for input)
        let mut events_processed = 0usize;
        while event::poll(Duration::from_millis(0))? && events_processed < 100 {
            app.handle_event(event::read()?);
            events_processed += 1;
            if app.should_quit {
                break;
            }
        }

        if app.should_quit {
            break;
        }

        app.maybe_send_query();
        app.update_toast();
        app.poll_responses();

        terminal.draw(|f| ui::render(f, app))?;

        // Sleep for the remainder of the frame
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }

    Ok(())
}
