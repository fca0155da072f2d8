//! Application state for the TUI: which tab is active, which row is selected,
//! and which modal (add form or delete confirmation) is open. All persistence
//! goes through the view-model; the UI only ever sees cached display strings
//! and the drained notification events.

use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::Frame;

use crate::db::SqliteStore;
use crate::viewmodel::{UiEvent, UniversityViewModel};

use super::forms::{StudentForm, SubjectForm, TeacherForm};
use super::helpers::leading_id;
use super::screens::{draw_confirm_popup, draw_footer, draw_form_popup, draw_list, draw_tabs};

/// Footer space reserved for status messages and key hints.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the tab strip including its border.
const TABS_HEIGHT: u16 = 3;

/// The three entity tabs, in display order.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Tab {
    Teachers,
    Students,
    Subjects,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Teachers, Tab::Students, Tab::Subjects];

    fn title(self) -> &'static str {
        match self {
            Tab::Teachers => "Teachers",
            Tab::Students => "Students",
            Tab::Subjects => "Subjects",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Modal state scoped to the active tab.
enum Mode {
    Normal,
    AddingTeacher(TeacherForm),
    AddingStudent(StudentForm),
    AddingSubject(SubjectForm),
    ConfirmDelete { entry: String },
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    vm: UniversityViewModel<SqliteStore>,
    tab: Tab,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    /// Wrap a (typically still disconnected) view-model.
    pub fn new(vm: UniversityViewModel<SqliteStore>) -> Self {
        Self {
            vm,
            tab: Tab::Teachers,
            selected: 0,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Second startup phase: attempt the database connection now that the
    /// terminal is up, so a slow or failing backend never blocks the UI from
    /// appearing.
    pub fn on_ready(&mut self) {
        self.vm.connect();
        self.absorb_events();
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        let mode = mem::replace(&mut self.mode, Mode::Normal);
        match mode {
            Mode::Normal => return Ok(self.handle_normal_key(key)),
            Mode::AddingTeacher(form) => self.handle_teacher_form(key, form),
            Mode::AddingStudent(form) => self.handle_student_form(key, form),
            Mode::AddingSubject(form) => self.handle_subject_form(key, form),
            Mode::ConfirmDelete { entry } => self.handle_confirm_delete(key, entry),
        }
        Ok(false)
    }

    fn handle_normal_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Right => {
                self.tab = self.tab.next();
                self.selected = 0;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.tab = self.tab.previous();
                self.selected = 0;
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.current_entries().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            KeyCode::Char('a') => {
                self.mode = match self.tab {
                    Tab::Teachers => Mode::AddingTeacher(TeacherForm::default()),
                    Tab::Students => Mode::AddingStudent(StudentForm::default()),
                    Tab::Subjects => Mode::AddingSubject(SubjectForm::default()),
                };
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let entry = self.current_entries().get(self.selected).cloned();
                if let Some(entry) = entry {
                    self.mode = Mode::ConfirmDelete { entry };
                }
            }
            KeyCode::Char('r') => {
                self.vm.refresh();
                self.absorb_events();
            }
            KeyCode::Char('c') => {
                if !self.vm.is_connected() {
                    self.vm.connect();
                    self.absorb_events();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_teacher_form(&mut self, key: KeyCode, mut form: TeacherForm) {
        match key {
            KeyCode::Esc => {}
            KeyCode::Tab | KeyCode::BackTab => {
                form.toggle_field();
                self.mode = Mode::AddingTeacher(form);
            }
            KeyCode::Backspace => {
                form.backspace();
                self.mode = Mode::AddingTeacher(form);
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                self.mode = Mode::AddingTeacher(form);
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, department)) => {
                    if self.vm.add_teacher(&name, &department) {
                        self.absorb_events();
                        self.set_status(StatusKind::Info, format!("Added teacher {name}"));
                    } else {
                        form.error = self.absorb_events();
                        self.mode = Mode::AddingTeacher(form);
                    }
                }
                Err(err) => {
                    form.error = Some(err.to_string());
                    self.mode = Mode::AddingTeacher(form);
                }
            },
            _ => {
                self.mode = Mode::AddingTeacher(form);
            }
        }
    }

    fn handle_student_form(&mut self, key: KeyCode, mut form: StudentForm) {
        match key {
            KeyCode::Esc => {}
            KeyCode::Tab | KeyCode::BackTab => {
                form.toggle_field();
                self.mode = Mode::AddingStudent(form);
            }
            KeyCode::Backspace => {
                form.backspace();
                self.mode = Mode::AddingStudent(form);
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                self.mode = Mode::AddingStudent(form);
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, grade)) => {
                    if self.vm.add_student(&name, grade) {
                        self.absorb_events();
                        self.set_status(StatusKind::Info, format!("Added student {name}"));
                    } else {
                        form.error = self.absorb_events();
                        self.mode = Mode::AddingStudent(form);
                    }
                }
                Err(err) => {
                    form.error = Some(err.to_string());
                    self.mode = Mode::AddingStudent(form);
                }
            },
            _ => {
                self.mode = Mode::AddingStudent(form);
            }
        }
    }

    fn handle_subject_form(&mut self, key: KeyCode, mut form: SubjectForm) {
        match key {
            KeyCode::Esc => {}
            KeyCode::Backspace => {
                form.backspace();
                self.mode = Mode::AddingSubject(form);
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                self.mode = Mode::AddingSubject(form);
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok(name) => {
                    if self.vm.add_subject(&name) {
                        self.absorb_events();
                        self.set_status(StatusKind::Info, format!("Added subject {name}"));
                    } else {
                        form.error = self.absorb_events();
                        self.mode = Mode::AddingSubject(form);
                    }
                }
                Err(err) => {
                    form.error = Some(err.to_string());
                    self.mode = Mode::AddingSubject(form);
                }
            },
            _ => {
                self.mode = Mode::AddingSubject(form);
            }
        }
    }

    fn handle_confirm_delete(&mut self, key: KeyCode, entry: String) {
        match key {
            KeyCode::Char('y') | KeyCode::Enter => {
                let Some(id) = leading_id(&entry) else {
                    self.set_status(StatusKind::Error, "Could not read record id".to_string());
                    return;
                };
                let deleted = match self.tab {
                    Tab::Teachers => self.vm.delete_teacher(id),
                    Tab::Students => self.vm.delete_student(id),
                    Tab::Subjects => self.vm.delete_subject(id),
                };
                if deleted {
                    self.absorb_events();
                    self.set_status(StatusKind::Info, "Record deleted".to_string());
                } else if let Some(message) = self.absorb_events() {
                    self.set_status(StatusKind::Error, message);
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => {}
            _ => {
                self.mode = Mode::ConfirmDelete { entry };
            }
        }
    }

    /// Render the whole frame: tabs, active list, footer, and any open modal.
    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TABS_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(frame.area());

        let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
        draw_tabs(frame, chunks[0], &titles, self.tab.index());

        draw_list(
            frame,
            chunks[1],
            self.tab.title(),
            self.current_entries(),
            self.selected,
        );

        let status = self
            .status
            .as_ref()
            .map(|status| (status.text.as_str(), status.kind.style()));
        draw_footer(
            frame,
            chunks[2],
            status,
            self.vm.is_connected(),
            self.vm.total_records(),
        );

        match &self.mode {
            Mode::Normal => {}
            Mode::AddingTeacher(form) => draw_form_popup(
                frame,
                frame.area(),
                "Add Teacher",
                form.build_lines(),
                form.error.as_deref(),
            ),
            Mode::AddingStudent(form) => draw_form_popup(
                frame,
                frame.area(),
                "Add Student",
                form.build_lines(),
                form.error.as_deref(),
            ),
            Mode::AddingSubject(form) => draw_form_popup(
                frame,
                frame.area(),
                "Add Subject",
                form.build_lines(),
                form.error.as_deref(),
            ),
            Mode::ConfirmDelete { entry } => draw_confirm_popup(frame, frame.area(), entry),
        }
    }

    fn current_entries(&self) -> &[String] {
        match self.tab {
            Tab::Teachers => self.vm.teachers(),
            Tab::Students => self.vm.students(),
            Tab::Subjects => self.vm.subjects(),
        }
    }

    /// Translate pending view-model events into footer state, returning the
    /// last error message so form handlers can show it inline instead.
    fn absorb_events(&mut self) -> Option<String> {
        let mut last_error = None;
        for event in self.vm.drain_events() {
            match event {
                UiEvent::DataChanged => self.clamp_selection(),
                UiEvent::ConnectionChanged(true) => {
                    self.set_status(StatusKind::Info, "Database connected".to_string());
                }
                UiEvent::ConnectionChanged(false) => {
                    self.set_status(StatusKind::Error, "Database connection failed".to_string());
                }
                UiEvent::Error(message) => {
                    self.set_status(StatusKind::Error, message.clone());
                    last_error = Some(message);
                }
            }
        }
        last_error
    }

    fn clamp_selection(&mut self) {
        let len = self.current_entries().len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusMessage { text, kind });
    }
}
