//! Form pane: one row per field, plus the validation list

use crate::app::App;
use crate::state::{Focus, FormField, Skill};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the form pane, with the validation list below it when non-empty
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let error_count = app.state.errors.len() as u16;

    if error_count > 0 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(error_count + 2)])
            .split(area);
        draw_fields(frame, chunks[0], app);
        draw_errors(frame, chunks[1], app);
    } else {
        draw_fields(frame, area, app);
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| field_line(app, *field))
        .collect();

    let block = Block::default()
        .title(" Personal Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(app: &App, field: FormField) -> Line<'static> {
    let is_active = app.cursor.field() == field;
    let marker = if is_active { "\u{25b6} " } else { "  " };
    let label_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{}: ", field.label()), label_style),
    ];

    match field {
        FormField::Focus => spans.extend(focus_spans(app, is_active)),
        FormField::Skills => spans.extend(skill_spans(app, is_active)),
        FormField::Experience => spans.extend(experience_spans(app, is_active)),
        FormField::Confidence => spans.extend(confidence_spans(app)),
        _ => spans.extend(text_spans(app, field, is_active)),
    }

    Line::from(spans)
}

fn text_spans(app: &App, field: FormField, is_active: bool) -> Vec<Span<'static>> {
    let value = match field {
        FormField::Name => app.state.form.name.clone(),
        FormField::Email => app.state.form.email.clone(),
        FormField::Phone => app.state.form.phone.clone(),
        FormField::Objective => app.state.form.objective.clone(),
        FormField::Degree => app.state.form.degree.clone(),
        // The controlled number input echoes the parsed value, blank when NaN
        FormField::GradYear => app
            .state
            .form
            .grad_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
        FormField::StartDate => app.state.form.start_date.clone(),
        _ => String::new(),
    };

    let mut spans = vec![Span::raw(value)];
    if is_active {
        spans.push(Span::styled("\u{258c}", Style::default().fg(Color::Cyan)));
    }
    spans
}

fn focus_spans(app: &App, is_active: bool) -> Vec<Span<'static>> {
    let mut spans = vec![];
    for focus in Focus::ALL {
        let selected = app.state.form.focus == focus;
        let radio = if selected { "(\u{2022}) " } else { "( ) " };
        let style = if selected && is_active {
            Style::default().fg(Color::Cyan)
        } else if selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{radio}{}  ", focus.label()),
            style,
        ));
    }
    spans
}

fn skill_spans(app: &App, is_active: bool) -> Vec<Span<'static>> {
    let mut spans = vec![];
    for (idx, skill) in Skill::ALL.iter().enumerate() {
        let included = app.state.form.skills.contains(skill);
        let checkbox = if included { "[x]" } else { "[ ]" };
        let under_cursor = is_active && idx == app.cursor.skill_index;
        let style = if under_cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else if included {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{checkbox} {} ", skill.label()),
            style,
        ));
    }
    spans
}

fn experience_spans(app: &App, is_active: bool) -> Vec<Span<'static>> {
    let label = app.state.form.experience.label();
    if is_active {
        vec![Span::styled(
            format!("\u{25c2} {label} \u{25b8}"),
            Style::default().fg(Color::Cyan),
        )]
    } else {
        vec![Span::raw(label)]
    }
}

fn confidence_spans(app: &App) -> Vec<Span<'static>> {
    let level = app.state.form.confidence_level.unwrap_or(5).clamp(1, 10) as usize;
    let bar: String = "\u{2588}".repeat(level) + &"\u{2591}".repeat(10 - level);
    vec![
        Span::styled(bar, Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {level}/10")),
    ]
}

fn draw_errors(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .errors
        .iter()
        .map(|message| {
            ListItem::new(Line::from(Span::styled(
                format!("\u{2022} {message}"),
                Style::default().fg(Color::Red),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Validation ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(list, area);
}
