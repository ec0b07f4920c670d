//! Application state and key handling

use crate::autosave::Autosave;
use crate::config::ResumeConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{FormCursor, FormField, ResumeState};
use crate::ui::resume_text;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// The form model: field values, validation errors, save status
    pub state: ResumeState,
    /// Which form row (and skill checkbox) is active
    pub cursor: FormCursor,
    /// User configuration
    pub config: ResumeConfig,
    /// Debounce timer for the save-status indicator
    pub autosave: Autosave,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Raw graduation-year input; the model stores only the parsed value
    grad_year_input: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: ResumeConfig) -> Self {
        let state = ResumeState::default();
        let grad_year_input = state
            .form
            .grad_year
            .map(|year| year.to_string())
            .unwrap_or_default();

        Self {
            state,
            cursor: FormCursor::default(),
            config,
            autosave: Autosave::new(),
            copy_message: None,
            grad_year_input,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Preview pane width as a percentage of the screen
    pub fn preview_percent(&self) -> u16 {
        self.config.preview_percent.unwrap_or(50).clamp(20, 80)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Copy feedback lasts until the next interaction
        self.copy_message = None;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.cursor.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.cursor.prev_field(),
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Char(c) => {
                if key.modifiers.contains(COPY_MODIFIER) && c == 'y' {
                    self.copy_resume();
                } else if c == ' ' && self.cursor.field() == FormField::Skills {
                    self.toggle_skill();
                } else {
                    self.insert_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Left/Right on choice rows: cycle enums, move the skill cursor,
    /// adjust the confidence slider. No-op on text rows.
    fn adjust_field(&mut self, delta: i64) {
        match self.cursor.field() {
            FormField::Focus => {
                let focus = self.state.form.focus;
                let next = if delta > 0 { focus.next() } else { focus.prev() };
                self.state.update_focus(next);
                self.schedule_settle();
            }
            FormField::Skills => {
                // Moving the checkbox cursor is navigation, not an edit
                if delta > 0 {
                    self.cursor.next_skill();
                } else {
                    self.cursor.prev_skill();
                }
            }
            FormField::Experience => {
                let experience = self.state.form.experience;
                let next = if delta > 0 {
                    experience.next()
                } else {
                    experience.prev()
                };
                self.state.update_experience(next);
                self.schedule_settle();
            }
            FormField::Confidence => {
                // The slider is what keeps the level in 1-10; the model
                // stores whatever string it is handed
                let current = self.state.form.confidence_level.unwrap_or(5);
                let next = (current + delta).clamp(1, 10);
                self.state.update_confidence_level(&next.to_string());
                self.schedule_settle();
            }
            _ => {}
        }
    }

    /// Space on the skills row: flip the checkbox under the cursor
    fn toggle_skill(&mut self) {
        let skill = self.cursor.skill();
        let included = !self.state.form.skills.contains(&skill);
        self.state.update_skills(skill, included);
        self.schedule_settle();
    }

    fn insert_char(&mut self, c: char) {
        let field = self.cursor.field();
        if !field.is_text() {
            return;
        }

        if field == FormField::GradYear {
            self.grad_year_input.push(c);
            let raw = self.grad_year_input.clone();
            self.state.update_grad_year(&raw);
        } else {
            let mut value = self.text_value(field).to_string();
            value.push(c);
            self.store_text(field, &value);
        }
        self.schedule_settle();
    }

    fn delete_char(&mut self) {
        let field = self.cursor.field();
        if !field.is_text() {
            return;
        }

        if field == FormField::GradYear {
            if self.grad_year_input.pop().is_none() {
                return;
            }
            let raw = self.grad_year_input.clone();
            self.state.update_grad_year(&raw);
        } else {
            let mut value = self.text_value(field).to_string();
            if value.pop().is_none() {
                return;
            }
            self.store_text(field, &value);
        }
        self.schedule_settle();
    }

    fn text_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.state.form.name,
            FormField::Email => &self.state.form.email,
            FormField::Phone => &self.state.form.phone,
            FormField::Objective => &self.state.form.objective,
            FormField::Degree => &self.state.form.degree,
            FormField::StartDate => &self.state.form.start_date,
            _ => "",
        }
    }

    fn store_text(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.state.update_name(value),
            FormField::Email => self.state.update_email(value),
            FormField::Phone => self.state.update_phone(value),
            FormField::Objective => self.state.update_objective(value),
            FormField::Degree => self.state.update_degree(value),
            FormField::StartDate => self.state.update_start_date(value),
            _ => {}
        }
    }

    /// Restart the debounce window for the revision just produced
    fn schedule_settle(&mut self) {
        self.autosave.schedule(self.state.revision());
    }

    /// Copy the rendered resume to the system clipboard
    fn copy_resume(&mut self) {
        let text = resume_text(&self.state.form);
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                self.copy_message = Some("Resume copied to clipboard".to_string());
            }
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SaveStatus, Skill, INVALID_EMAIL_ERROR};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_on_field(field: FormField) -> App {
        let mut app = App::new(ResumeConfig::default());
        while app.cursor.field() != field {
            app.cursor.next_field();
        }
        app
    }

    #[tokio::test]
    async fn test_typing_updates_active_text_field() {
        let mut app = app_on_field(FormField::Name);
        for c in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.state.form.name, "Ada");
        assert_eq!(app.state.save_status, SaveStatus::Saving);
    }

    #[tokio::test]
    async fn test_email_typing_flags_and_resolves() {
        let mut app = app_on_field(FormField::Email);
        for c in "a@b".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert!(app.state.errors.contains(INVALID_EMAIL_ERROR));
        for c in ".c".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert!(!app.state.errors.contains(INVALID_EMAIL_ERROR));
    }

    #[tokio::test]
    async fn test_grad_year_keeps_raw_input_buffer() {
        let mut app = app_on_field(FormField::GradYear);
        // Wipe the prefilled current year
        for _ in 0..8 {
            app.handle_key(key(KeyCode::Backspace)).unwrap();
        }
        for c in "2005x".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.state.form.grad_year, Some(2005));
    }

    #[tokio::test]
    async fn test_space_toggles_skill_only_on_skills_row() {
        let mut app = app_on_field(FormField::Skills);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.state.form.skills, vec![Skill::TypeScript]);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.state.form.skills.is_empty());

        let mut app = app_on_field(FormField::Name);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.state.form.name, " ");
        assert!(app.state.form.skills.is_empty());
    }

    #[tokio::test]
    async fn test_skill_cursor_moves_without_editing() {
        let mut app = app_on_field(FormField::Skills);
        let revision = app.state.revision();
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.cursor.skill(), Skill::Python);
        assert_eq!(app.state.revision(), revision);
    }

    #[tokio::test]
    async fn test_confidence_slider_clamps() {
        let mut app = app_on_field(FormField::Confidence);
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right)).unwrap();
        }
        assert_eq!(app.state.form.confidence_level, Some(10));
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Left)).unwrap();
        }
        assert_eq!(app.state.form.confidence_level, Some(1));
    }

    #[tokio::test]
    async fn test_focus_cycles_with_arrows() {
        use crate::state::Focus;
        let mut app = app_on_field(FormField::Focus);
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.state.form.focus, Focus::FrontEnd);
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.state.form.focus, Focus::FullStack);
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut app = App::new(ResumeConfig::default());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_copy_message_clears_on_next_key() {
        let mut app = app_on_field(FormField::Name);
        app.copy_message = Some("Resume copied to clipboard".to_string());
        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.copy_message, None);
        assert_eq!(app.state.form.name, "a");

        // Navigation counts as interaction too
        app.copy_message = Some("Resume copied to clipboard".to_string());
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.copy_message, None);
    }

    #[tokio::test]
    async fn test_backspace_on_empty_grad_year_is_noop() {
        let mut app = app_on_field(FormField::GradYear);
        // Wipe the prefilled current year, with extra presses past empty
        for _ in 0..8 {
            app.handle_key(key(KeyCode::Backspace)).unwrap();
        }
        let revision = app.state.revision();
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.state.revision(), revision);
    }

    #[tokio::test]
    async fn test_backspace_on_empty_field_is_noop() {
        let mut app = app_on_field(FormField::Name);
        let revision = app.state.revision();
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.state.revision(), revision);
    }
}
