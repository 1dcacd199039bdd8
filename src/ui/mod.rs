mod dialogs;
pub mod layout;
mod quiz;

pub use dialogs::{draw_finished, draw_load_error, draw_loading};
pub use layout::{calculate_quiz_chunks, centered_rect};
pub use quiz::draw_quiz;

use crate::controller::SessionController;
use crate::models::SessionState;
use ratatui::Frame;

/// Draw the quiz screen and, when the session calls for one, a dialog on top.
pub fn draw(f: &mut Frame, controller: &SessionController) {
    draw_quiz(f, controller);

    let model = &controller.model;
    match model.state() {
        SessionState::Loading { .. } => draw_loading(f),
        SessionState::LoadFailed { message } => draw_load_error(f, message),
        SessionState::Finished { outcome, .. } => {
            draw_finished(f, *outcome, model.hits(), model.total_answers())
        }
        SessionState::Idle | SessionState::Playing(_) => {}
    }
}
