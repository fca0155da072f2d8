//! Input forms for the three add-entry popups. Each form owns its raw text
//! buffers, tracks which field has focus, and parses into typed values on
//! submit so the view-model only ever sees cleaned-up input.

use anyhow::{anyhow, Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Render one labelled form line, highlighting the focused field.
fn field_line(field_name: &str, value: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        "<required>".to_string()
    } else {
        value.to_string()
    };

    let value_style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let cursor = if is_active { "_" } else { "" };
    Line::from(vec![
        Span::raw(format!("{field_name}: ")),
        Span::styled(format!("{display}{cursor}"), value_style),
    ])
}

/// Fields available within the teacher form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum TeacherField {
    #[default]
    Name,
    Department,
}

/// Form state for the "add teacher" popup.
#[derive(Default, Clone)]
pub(crate) struct TeacherForm {
    pub(crate) name: String,
    pub(crate) department: String,
    pub(crate) active: TeacherField,
    pub(crate) error: Option<String>,
}

impl TeacherForm {
    /// Swap focus between the name and department fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            TeacherField::Name => TeacherField::Department,
            TeacherField::Department => TeacherField::Name,
        };
    }

    /// Append a character to the active field, rejecting control input.
    pub(crate) fn push_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        match self.active {
            TeacherField::Name => self.name.push(ch),
            TeacherField::Department => self.department.push(ch),
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            TeacherField::Name => {
                self.name.pop();
            }
            TeacherField::Department => {
                self.department.pop();
            }
        }
    }

    /// Validate the inputs and return trimmed values ready for submission.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Teacher name is required."));
        }
        let department = self.department.trim();
        if department.is_empty() {
            return Err(anyhow!("Department is required."));
        }
        Ok((name.to_string(), department.to_string()))
    }

    /// Render the form body for the popup widget.
    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        vec![
            field_line("Name", &self.name, self.active == TeacherField::Name),
            field_line(
                "Department",
                &self.department,
                self.active == TeacherField::Department,
            ),
        ]
    }
}

/// Fields available within the student form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum StudentField {
    #[default]
    Name,
    Grade,
}

/// Form state for the "add student" popup. The grade is kept as raw text
/// while editing; only digits are accepted and the value parses on submit.
#[derive(Default, Clone)]
pub(crate) struct StudentForm {
    pub(crate) name: String,
    pub(crate) grade: String,
    pub(crate) active: StudentField,
    pub(crate) error: Option<String>,
}

impl StudentForm {
    /// Swap focus between the name and grade fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            StudentField::Name => StudentField::Grade,
            StudentField::Grade => StudentField::Name,
        };
    }

    /// Append a character to the active field. The grade field only takes
    /// digits, which rules out most malformed input before parsing.
    pub(crate) fn push_char(&mut self, ch: char) {
        match self.active {
            StudentField::Name => {
                if !ch.is_control() {
                    self.name.push(ch);
                }
            }
            StudentField::Grade => {
                if ch.is_ascii_digit() {
                    self.grade.push(ch);
                }
            }
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            StudentField::Name => {
                self.name.pop();
            }
            StudentField::Grade => {
                self.grade.pop();
            }
        }
    }

    /// Validate the inputs and return typed values. The grade range itself is
    /// checked by the view-model; this only guarantees a parseable integer.
    pub(crate) fn parse_inputs(&self) -> Result<(String, i64)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Student name is required."));
        }
        let grade_raw = self.grade.trim();
        if grade_raw.is_empty() {
            return Err(anyhow!("Grade is required."));
        }
        let grade = grade_raw
            .parse::<i64>()
            .context("Grade must be an integer.")?;
        Ok((name.to_string(), grade))
    }

    /// Render the form body for the popup widget.
    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        vec![
            field_line("Name", &self.name, self.active == StudentField::Name),
            field_line(
                "Grade (1-5)",
                &self.grade,
                self.active == StudentField::Grade,
            ),
        ]
    }
}

/// Form state for the single-field "add subject" popup.
#[derive(Default, Clone)]
pub(crate) struct SubjectForm {
    pub(crate) name: String,
    pub(crate) error: Option<String>,
}

impl SubjectForm {
    /// Append a character, rejecting control input.
    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.name.push(ch);
        }
    }

    /// Remove the last character.
    pub(crate) fn backspace(&mut self) {
        self.name.pop();
    }

    /// Validate and return the trimmed subject name.
    pub(crate) fn parse_inputs(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Subject name is required."));
        }
        Ok(name.to_string())
    }

    /// Render the form body for the popup widget.
    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        vec![field_line("Name", &self.name, true)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_form_requires_both_fields() {
        let mut form = TeacherForm::default();
        assert!(form.parse_inputs().is_err());

        for ch in "Ada Lovelace".chars() {
            form.push_char(ch);
        }
        assert!(form.parse_inputs().is_err());

        form.toggle_field();
        for ch in "Mathematics".chars() {
            form.push_char(ch);
        }
        let (name, department) = form.parse_inputs().unwrap();
        assert_eq!(name, "Ada Lovelace");
        assert_eq!(department, "Mathematics");
    }

    #[test]
    fn student_grade_field_only_accepts_digits() {
        let mut form = StudentForm::default();
        form.toggle_field();
        form.push_char('x');
        form.push_char('4');
        form.push_char('!');
        assert_eq!(form.grade, "4");
    }

    #[test]
    fn student_form_parses_typed_grade() {
        let mut form = StudentForm::default();
        for ch in "Ivan".chars() {
            form.push_char(ch);
        }
        form.toggle_field();
        form.push_char('3');
        let (name, grade) = form.parse_inputs().unwrap();
        assert_eq!(name, "Ivan");
        assert_eq!(grade, 3);
    }

    #[test]
    fn subject_form_trims_and_rejects_blank() {
        let mut form = SubjectForm::default();
        form.push_char(' ');
        assert!(form.parse_inputs().is_err());
        for ch in "Algorithms ".chars() {
            form.push_char(ch);
        }
        assert_eq!(form.parse_inputs().unwrap(), "Algorithms");
    }
}
