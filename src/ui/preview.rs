//! Live resume preview pane

use crate::app::App;
use crate::state::ResumeForm;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label/value pairs mirroring the form, in display order
fn entries(form: &ResumeForm) -> Vec<(&'static str, String)> {
    vec![
        ("Name", form.name.clone()),
        ("Email", form.email.clone()),
        ("Phone", form.phone.clone()),
        ("Objective", form.objective.clone()),
        ("Degree", form.degree.clone()),
        ("Year", number_text(form.grad_year)),
        ("Development Focus", form.focus.label().to_string()),
        (
            "Skills",
            form.skills
                .iter()
                .map(|skill| skill.label())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ("Experience", form.experience.label().to_string()),
        (
            "Confidence",
            format!("{}/10", number_text(form.confidence_level)),
        ),
        ("Start Date", form.start_date.clone()),
    ]
}

/// Number fields that failed to parse render as "NaN"
fn number_text(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "NaN".to_string(),
    }
}

/// Plain-text rendering of the resume, used for the clipboard export
pub fn resume_text(form: &ResumeForm) -> String {
    entries(form)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draw the preview pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = entries(&app.state.form)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Resume ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Experience, Focus, ResumeState, Skill};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resume_text_mirrors_the_form() {
        let mut state = ResumeState::default();
        state.update_name("Ada Lovelace");
        state.update_email("ada@example.com");
        state.update_grad_year("2000");
        state.update_focus(Focus::BackEnd);
        state.update_skills(Skill::Python, true);
        state.update_skills(Skill::Git, true);
        state.update_experience(Experience::OneToTwo);
        state.update_confidence_level("8");
        state.update_start_date("2026-09-01");

        let text = resume_text(&state.form);
        assert!(text.contains("Name: Ada Lovelace"));
        assert!(text.contains("Email: ada@example.com"));
        assert!(text.contains("Year: 2000"));
        assert!(text.contains("Development Focus: Back End"));
        assert!(text.contains("Skills: Python, Git"));
        assert!(text.contains("Experience: 1-2 years"));
        assert!(text.contains("Confidence: 8/10"));
        assert!(text.contains("Start Date: 2026-09-01"));
    }

    #[test]
    fn test_unparsed_year_renders_as_nan() {
        let mut state = ResumeState::default();
        state.update_grad_year("abc");
        let text = resume_text(&state.form);
        assert!(text.contains("Year: NaN"));
    }

    #[test]
    fn test_labels_appear_in_form_order() {
        let state = ResumeState::default();
        let text = resume_text(&state.form);
        let labels = [
            "Name:",
            "Email:",
            "Phone:",
            "Objective:",
            "Degree:",
            "Year:",
            "Development Focus:",
            "Skills:",
            "Experience:",
            "Confidence:",
            "Start Date:",
        ];
        let mut last = 0;
        for label in labels {
            let pos = text[last..]
                .find(label)
                .unwrap_or_else(|| panic!("{label} missing or out of order"));
            last += pos + label.len();
        }
        assert_eq!(text.lines().count(), labels.len());
    }
}
