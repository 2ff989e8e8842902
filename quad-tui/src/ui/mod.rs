//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! The layout mirrors a pocket calculator: expression trace on top,
//! display under it, then the 4×5 keypad and a hint bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use libquadcalc::Operator;

use crate::app::AppState;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // expression trace
            Constraint::Length(3),  // display
            Constraint::Min(10),    // keypad
            Constraint::Length(1),  // hints
        ])
        .split(area);

    render_expression(frame, chunks[0], state);
    render_display(frame, chunks[1], state);
    render_keypad(frame, chunks[2], state);
    render_hints(frame, chunks[3]);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Render the running expression trace
fn render_expression(frame: &mut Frame, area: Rect, state: &AppState) {
    let trace = Paragraph::new(state.calculator.expression.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);

    frame.render_widget(trace, area);
}

/// Render the current display value
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.calculator.display.is_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let display = Paragraph::new(state.calculator.display_text())
        .style(style)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(display, area);
}

/// Render the keypad grid with the active operator highlighted
fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    render_row(frame, rows[0], state, &["C", "±", "%", "÷"]);
    render_row(frame, rows[1], state, &["7", "8", "9", "×"]);
    render_row(frame, rows[2], state, &["4", "5", "6", "-"]);
    render_row(frame, rows[3], state, &["1", "2", "3", "+"]);

    // Bottom row: the zero key spans two columns.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[4]);

    render_button(frame, cols[0], "0", button_style(state, "0"));
    render_button(frame, cols[1], ".", button_style(state, "."));
    render_button(frame, cols[2], "=", button_style(state, "="));
}

fn render_row(frame: &mut Frame, area: Rect, state: &AppState, labels: &[&str; 4]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (label, col) in labels.iter().zip(cols.iter()) {
        render_button(frame, *col, label, button_style(state, label));
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style) {
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(button, area);
}

fn button_style(state: &AppState, label: &str) -> Style {
    let operator = Operator::ALL.iter().copied().find(|op| op.symbol() == label);

    match operator {
        // The pending operator stays lit until the next operand starts.
        Some(op) if state.calculator.is_operator_active(op) => {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        }
        Some(_) => Style::default().fg(Color::Yellow),
        None => match label {
            "=" => Style::default().fg(Color::Yellow),
            "C" | "±" | "%" => Style::default().fg(Color::Gray),
            _ => Style::default(),
        },
    }
}

/// Render the one-line key hint bar
fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "0-9 . | + - * / | Enter: = | c: clear | s: ± | %: percent | F1: help | q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(hints, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  0-9      - Digits"),
        Line::from("  .        - Decimal point"),
        Line::from("  + - * /  - Operators"),
        Line::from("  Enter, = - Equals"),
        Line::from("  c        - Clear"),
        Line::from("  s        - Toggle sign"),
        Line::from("  %        - Percent"),
        Line::from(""),
        Line::from("  F1, ?    - Toggle help"),
        Line::from("  q, Esc   - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
