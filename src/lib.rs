pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch_worker;
pub mod logger;
pub mod models;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use api::{HttpQuizSource, QuizSource, parse_quiz};
pub use config::Config;
pub use controller::SessionController;
pub use error::{ConfigError, FetchError, FetchErrorKind};
pub use fetch_worker::spawn_fetch_worker;
pub use models::{FetchRequest, FetchResponse, Outcome, Quiz, Round, SessionState, Submission};
pub use session::{SessionModel, format_seconds};
pub use timer::TickTimer;
pub use ui::draw;
