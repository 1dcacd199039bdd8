use crate::controller::SessionController;
use crate::models::SessionState;
use crate::ui::layout::{calculate_quiz_chunks, split_status};
use crate::utils::{cursor_column, first_uppercased, format_hit_count};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const START_PROMPT: &str = "Press Enter to load a quiz and start the clock";

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz(f: &mut Frame, controller: &SessionController) {
    let layout = calculate_quiz_chunks(f.area());
    let model = &controller.model;

    let header_text = model.question().unwrap_or(START_PROMPT);
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(header, layout.header_area);

    let (hits_area, timer_area) = split_status(layout.status_area);
    let hits = Paragraph::new(format_hit_count(model.hits(), model.total_answers()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Hits"));
    f.render_widget(hits, hits_area);

    let timer_style = if model.is_playing() && model.remaining_seconds() <= 30 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let timer = Paragraph::new(model.format_remaining())
        .style(timer_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Time"));
    f.render_widget(timer, timer_area);

    let input_text = if model.is_playing() {
        Line::from(controller.input_buffer.as_str())
    } else {
        Line::from(Span::styled(
            "[Type keywords here once the quiz starts]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    };
    let column = cursor_column(&controller.input_buffer, controller.cursor_position) as u16;
    let scroll_x = if model.is_playing() {
        input_scroll(column, layout.input_area.width)
    } else {
        0
    };
    let input = Paragraph::new(input_text)
        .scroll((0, scroll_x))
        .block(Block::default().borders(Borders::ALL).title("Keyword"));
    f.render_widget(input, layout.input_area);

    if model.is_playing() {
        let cursor_x = layout.input_area.x + 1 + column - scroll_x;
        let cursor_y = layout.input_area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let items: Vec<ListItem> = if model.found_answers().is_empty() {
        vec![ListItem::new("No keywords found yet").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        model
            .found_answers()
            .iter()
            .map(|answer| ListItem::new(first_uppercased(answer)))
            .collect()
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Found"));
    f.render_widget(list, layout.list_area);

    let help = Paragraph::new(help_line(model.state()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// Columns to scroll the input so the cursor stays inside a bordered box of `width`.
fn input_scroll(column: u16, width: u16) -> u16 {
    let max_column = width.saturating_sub(3);
    column.saturating_sub(max_column)
}

fn help_line(state: &SessionState) -> Line<'static> {
    let mut spans = Vec::new();
    let mut push = |key: &'static str, label: &'static str| {
        spans.push(Span::styled(key, key_style()));
        spans.push(Span::from(label));
    };

    match state {
        SessionState::Idle => {
            push("Enter", " Start  ");
            push("q", " Quit  ");
        }
        SessionState::Loading { .. } => {
            push("Esc", " Cancel  ");
        }
        SessionState::LoadFailed { .. } => {
            push("Enter", " Retry  ");
            push("Esc", " Back  ");
        }
        SessionState::Playing(_) => {
            push("Enter", " Submit  ");
            push("Esc", " Reset  ");
        }
        SessionState::Finished { .. } => {
            push("Enter", " Play Again  ");
            push("q", " Quit  ");
        }
    }
    push("Ctrl+C", " Exit App");

    Line::from(spans)
}
