use crate::error::FetchError;
use crate::logger;
use crate::models::{Outcome, Quiz, Round, SessionState, Submission};

/// Format a number of seconds as zero-padded `mm:ss`.
pub fn format_seconds(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Question, answer set, countdown and found answers for one play-through.
///
/// All mutation goes through the operations below. Calls that do not apply
/// to the current state are no-ops rather than errors.
#[derive(Debug, Clone)]
pub struct SessionModel {
    total_seconds: u32,
    state: SessionState,
    quiz: Option<Quiz>,
    next_request_id: u64,
}

impl SessionModel {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            state: SessionState::Idle,
            quiz: None,
            next_request_id: 1,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn question(&self) -> Option<&str> {
        self.quiz.as_ref().map(Quiz::question)
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn total_answers(&self) -> usize {
        self.quiz.as_ref().map_or(0, |quiz| quiz.answers().len())
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, SessionState::Playing(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &self.state {
            SessionState::Finished { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    fn round(&self) -> Option<&Round> {
        match &self.state {
            SessionState::Playing(round) | SessionState::Finished { round, .. } => Some(round),
            _ => None,
        }
    }

    /// Found answers, most recent first.
    pub fn found_answers(&self) -> &[String] {
        self.round()
            .map(|round| round.found.as_slice())
            .unwrap_or(&[])
    }

    pub fn hits(&self) -> usize {
        self.found_answers().len()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.round()
            .map_or(self.total_seconds, |round| round.remaining_seconds)
    }

    pub fn format_remaining(&self) -> String {
        format_seconds(self.remaining_seconds())
    }

    /// Enter `Loading` and hand out the id the matching response must carry.
    pub fn begin_loading(&mut self) -> Option<u64> {
        match self.state {
            SessionState::Idle
            | SessionState::LoadFailed { .. }
            | SessionState::Finished { .. } => {
                let request_id = self.next_request_id;
                self.next_request_id += 1;
                self.quiz = None;
                self.state = SessionState::Loading { request_id };
                logger::log(&format!("Loading quiz (request {})", request_id));
                Some(request_id)
            }
            SessionState::Loading { .. } | SessionState::Playing(_) => None,
        }
    }

    /// Apply a fetch result. Responses for anything but the current request are dropped.
    pub fn complete_loading(&mut self, request_id: u64, result: Result<Quiz, FetchError>) -> bool {
        match self.state {
            SessionState::Loading { request_id: id } if id == request_id => {}
            _ => {
                logger::log(&format!(
                    "Ignoring stale response for request {}",
                    request_id
                ));
                return false;
            }
        }

        match result {
            Ok(quiz) => self.start(quiz),
            Err(error) => {
                logger::log(&format!("Quiz request {} failed: {}", request_id, error));
                self.state = SessionState::LoadFailed {
                    message: error.to_string(),
                };
            }
        }
        true
    }

    pub fn start(&mut self, quiz: Quiz) {
        if self.is_playing() {
            return;
        }
        logger::log(&format!(
            "Session started with {} answers, {} seconds",
            quiz.answers().len(),
            self.total_seconds
        ));
        self.quiz = Some(quiz);
        self.state = SessionState::Playing(Round::new(self.total_seconds));
    }

    pub fn submit_word(&mut self, word: &str) -> Submission {
        let (Some(quiz), SessionState::Playing(round)) = (self.quiz.as_ref(), &mut self.state)
        else {
            return Submission::Ignored;
        };

        if !quiz.contains(word) {
            return Submission::Miss;
        }
        if round.found.iter().any(|found| found == word) {
            return Submission::Repeat;
        }

        round.found.insert(0, word.to_string());
        if round.found.len() < quiz.answers().len() {
            return Submission::Hit;
        }

        logger::log("All answers found");
        let round = round.clone();
        self.state = SessionState::Finished {
            outcome: Outcome::Won,
            round,
        };
        Submission::Won
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> bool {
        let SessionState::Playing(round) = &mut self.state else {
            return false;
        };

        if round.remaining_seconds > 0 {
            round.remaining_seconds -= 1;
            return true;
        }

        logger::log(&format!("Time is up with {} hits", round.found.len()));
        let round = round.clone();
        self.state = SessionState::Finished {
            outcome: Outcome::TimedOut,
            round,
        };
        true
    }

    pub fn reset(&mut self) {
        if self.state != SessionState::Idle {
            logger::log("Session reset");
        }
        self.quiz = None;
        self.state = SessionState::Idle;
    }
}
