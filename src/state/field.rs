//! Form field cursor

use super::resume::Skill;

/// The form rows, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Objective,
    Degree,
    GradYear,
    Focus,
    Skills,
    Experience,
    Confidence,
    StartDate,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Objective,
        FormField::Degree,
        FormField::GradYear,
        FormField::Focus,
        FormField::Skills,
        FormField::Experience,
        FormField::Confidence,
        FormField::StartDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Objective => "Objective",
            FormField::Degree => "Degree",
            FormField::GradYear => "Graduation Year",
            FormField::Focus => "Development Focus",
            FormField::Skills => "Skills",
            FormField::Experience => "Experience",
            FormField::Confidence => "Confidence",
            FormField::StartDate => "Start Date",
        }
    }

    /// Whether the row accepts character input
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FormField::Name
                | FormField::Email
                | FormField::Phone
                | FormField::Objective
                | FormField::Degree
                | FormField::GradYear
                | FormField::StartDate
        )
    }
}

/// Which row is active, plus the checkbox cursor within the skills row
#[derive(Debug, Clone, Default)]
pub struct FormCursor {
    active_index: usize,
    pub skill_index: usize,
}

impl FormCursor {
    pub fn field(&self) -> FormField {
        FormField::ALL[self.active_index]
    }

    pub fn skill(&self) -> Skill {
        Skill::ALL[self.skill_index]
    }

    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        if self.active_index == 0 {
            self.active_index = FormField::ALL.len() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    pub fn next_skill(&mut self) {
        self.skill_index = (self.skill_index + 1) % Skill::ALL.len();
    }

    pub fn prev_skill(&mut self) {
        if self.skill_index == 0 {
            self.skill_index = Skill::ALL.len() - 1;
        } else {
            self.skill_index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_cycling_wraps_forward() {
        let mut cursor = FormCursor::default();
        assert_eq!(cursor.field(), FormField::Name);
        for _ in 0..FormField::ALL.len() {
            cursor.next_field();
        }
        assert_eq!(cursor.field(), FormField::Name);
    }

    #[test]
    fn test_field_cycling_wraps_backward() {
        let mut cursor = FormCursor::default();
        cursor.prev_field();
        assert_eq!(cursor.field(), FormField::StartDate);
    }

    #[test]
    fn test_skill_cursor_wraps() {
        let mut cursor = FormCursor::default();
        cursor.prev_skill();
        assert_eq!(cursor.skill(), Skill::Git);
        cursor.next_skill();
        assert_eq!(cursor.skill(), Skill::TypeScript);
    }
}
