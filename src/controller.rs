use crate::error::FetchError;
use crate::logger;
use crate::models::{FetchRequest, FetchResponse, SessionState};
use crate::session::SessionModel;
use crate::timer::TickTimer;
use crate::utils::byte_index;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Drives a `SessionModel` from key presses, timer ticks and fetch responses.
#[derive(Debug)]
pub struct SessionController {
    pub model: SessionModel,
    pub timer: TickTimer,
    pub input_buffer: String,
    /// Cursor position in characters, not bytes.
    pub cursor_position: usize,
    pub should_quit: bool,
    fetch_tx: Option<Sender<FetchRequest>>,
}

impl SessionController {
    pub fn new(model: SessionModel, fetch_tx: Option<Sender<FetchRequest>>) -> Self {
        Self {
            model,
            timer: TickTimer::default(),
            input_buffer: String::new(),
            cursor_position: 0,
            should_quit: false,
            fetch_tx,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.model.state() {
            SessionState::Idle => match key.code {
                KeyCode::Enter | KeyCode::Char('s') => self.request_quiz(),
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            SessionState::Loading { .. } => {
                if key.code == KeyCode::Esc {
                    self.reset();
                }
            }
            SessionState::LoadFailed { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.request_quiz(),
                KeyCode::Esc => self.reset(),
                _ => {}
            },
            SessionState::Playing(_) => self.handle_playing_key(key, now),
            SessionState::Finished { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.reset(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.reset(),
            KeyCode::Enter => {
                self.submit_buffer();
                self.clear_input();
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_len() {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input_len(),
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let idx = byte_index(&self.input_buffer, self.cursor_position - 1);
                    self.input_buffer.remove(idx);
                    self.cursor_position -= 1;
                    self.submit_buffer();
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input_len() {
                    let idx = byte_index(&self.input_buffer, self.cursor_position);
                    self.input_buffer.remove(idx);
                    self.submit_buffer();
                }
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                let idx = byte_index(&self.input_buffer, self.cursor_position);
                self.input_buffer.insert(idx, c);
                self.cursor_position += 1;
                self.submit_buffer();
            }
            _ => {}
        }
        self.sync_timer(now);
    }

    /// Check the whole input against the answers; a hit clears the field.
    fn submit_buffer(&mut self) {
        if self.model.submit_word(&self.input_buffer).is_hit() {
            logger::log(&format!(
                "Hit '{}' ({}/{})",
                self.input_buffer,
                self.model.hits(),
                self.model.total_answers()
            ));
            self.clear_input();
        }
    }

    fn request_quiz(&mut self) {
        let Some(request_id) = self.model.begin_loading() else {
            return;
        };
        let sent = self
            .fetch_tx
            .as_ref()
            .is_some_and(|tx| tx.send(FetchRequest::Fetch { request_id }).is_ok());
        if !sent {
            logger::log("Fetch worker unavailable");
            let error = FetchError::WorkerUnavailable;
            self.model.complete_loading(request_id, Err(error));
        }
    }

    pub fn apply_fetch_response(&mut self, response: FetchResponse, now: Instant) {
        let request_id = response.request_id();
        let result = response.into_result();
        if self.model.complete_loading(request_id, result) {
            self.clear_input();
            self.sync_timer(now);
        }
    }

    /// Apply every tick that elapsed by `now`.
    pub fn on_timer(&mut self, now: Instant) {
        for _ in 0..self.timer.due_ticks(now) {
            if !self.model.tick() {
                break;
            }
        }
        self.sync_timer(now);
    }

    pub fn reset(&mut self) {
        self.model.reset();
        self.clear_input();
        self.timer.stop();
    }

    /// Keep the timer running exactly while the session is playing.
    fn sync_timer(&mut self, now: Instant) {
        match (self.model.is_playing(), self.timer.is_running()) {
            (true, false) => self.timer.start(now),
            (false, true) => self.timer.stop(),
            _ => {}
        }
    }

    fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    fn input_len(&self) -> usize {
        self.input_buffer.chars().count()
    }
}
