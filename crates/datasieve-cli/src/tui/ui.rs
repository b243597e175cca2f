use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{Focus, FormApp};
use datasieve_core::project;
use datasieve_types::ResponseField;

pub(crate) fn draw(f: &mut Frame, app: &FormApp) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_title(f, main_chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    render_editor(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(columns[1]);

    render_selector(f, right[0], app);
    render_response(f, right[1], app);

    render_footer(f, main_chunks[2], app);
}

fn render_title(f: &mut Frame, area: Rect, app: &FormApp) {
    let mut spans = vec![
        Span::styled(
            " datasieve",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if app.in_flight {
        spans.push(Span::styled(
            "  submitting…",
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_editor(f: &mut Frame, area: Rect, app: &FormApp) {
    let border_color = if app.validation_message.is_some() {
        Color::Red
    } else if app.payload.is_some() {
        Color::Green
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title("Payload (JSON)");
    if app.focus == Focus::Editor {
        block = block.title_style(Style::default().add_modifier(Modifier::BOLD));
    }

    let editor = Paragraph::new(app.input.as_str())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(editor, area);
}

fn render_selector(f: &mut Frame, area: Rect, app: &FormApp) {
    let lines: Vec<Line> = ResponseField::DISPLAY_ORDER
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let mark = if app.selection.contains(field) {
                "[x]"
            } else {
                "[ ]"
            };
            let mut style = Style::default();
            if app.focus == Focus::Selector && i == app.selector_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::styled(format!(" {} {}", mark, field.label()), style)
        })
        .collect();

    let mut block = Block::default().borders(Borders::ALL).title("Fields");
    if app.focus == Focus::Selector {
        block = block.title_style(Style::default().add_modifier(Modifier::BOLD));
    }

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_response(f: &mut Frame, area: Rect, app: &FormApp) {
    let block = Block::default().borders(Borders::ALL).title("Response");

    let Some(response) = &app.response else {
        let placeholder = Paragraph::new(Line::styled(
            " no response yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let lines: Vec<Line> = project(response, &app.selection)
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", row.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(row.joined()),
            ])
        })
        .collect();

    let body = if lines.is_empty() {
        Text::from(Line::styled(
            " no fields selected (or all selected fields are empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(lines)
    };

    f.render_widget(
        Paragraph::new(body).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_footer(f: &mut Frame, area: Rect, app: &FormApp) {
    let keys = Line::styled(
        " Tab focus · Space toggle field · Ctrl-S submit · Esc quit",
        Style::default().fg(Color::DarkGray),
    );

    // One message slot: submission errors win over validator hints
    let message = if let Some(error) = &app.error {
        Line::styled(format!(" {}", error), Style::default().fg(Color::Red))
    } else if let Some(hint) = &app.validation_message {
        Line::styled(format!(" {}", hint), Style::default().fg(Color::Yellow))
    } else if let Some(at) = &app.submitted_at {
        Line::styled(
            format!(" last response {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::raw("")
    };

    f.render_widget(Paragraph::new(Text::from(vec![keys, message])), area);
}
