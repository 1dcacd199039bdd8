use crate::models::Outcome;
use crate::ui::layout::centered_rect;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DIALOG_WIDTH_PERCENT: u16 = 60;

fn draw_dialog(f: &mut Frame, title: &str, accent: Color, body: Text) {
    // Borders plus one spare row for a wrapped message.
    let height = body.lines.len() as u16 + 3;
    let area = centered_rect(DIALOG_WIDTH_PERCENT, height, f.area());

    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn action_line(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ])
}

pub fn draw_loading(f: &mut Frame) {
    let mut text = Text::default();
    text.push_line(Line::from("Loading quiz..."));
    text.push_line(Line::from(""));
    text.push_line(action_line("Esc", " Cancel"));
    draw_dialog(f, "Please wait", Color::Yellow, text);
}

pub fn draw_load_error(f: &mut Frame, message: &str) {
    let mut text = Text::default();
    text.push_line(Line::from("Could not load the quiz."));
    text.push_line(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    text.push_line(Line::from(""));
    text.push_line(action_line("Enter", " Retry"));
    text.push_line(action_line("Esc", " Back"));
    draw_dialog(f, "Request failed", Color::Red, text);
}

pub fn draw_finished(f: &mut Frame, outcome: Outcome, hits: usize, total: usize) {
    let mut text = Text::default();
    let (title, accent) = match outcome {
        Outcome::Won => {
            text.push_line(Line::from("Good job!"));
            text.push_line(Line::from("You found all the answers on time."));
            ("Congratulations", Color::Green)
        }
        Outcome::TimedOut => {
            text.push_line(Line::from("Sorry, time is up!"));
            text.push_line(Line::from(format!(
                "You got {} out of {} answers.",
                hits, total
            )));
            ("Time finished", Color::Red)
        }
    };
    text.push_line(Line::from(""));
    let again = match outcome {
        Outcome::Won => " Play Again",
        Outcome::TimedOut => " Try Again",
    };
    text.push_line(action_line("Enter", again));
    draw_dialog(f, title, accent, text);
}
