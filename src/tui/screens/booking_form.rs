//! Booking form screen: guest and payment details for an advance booking.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{
    BookingDraft, BookingVia, Country, Field, FieldKind, PaymentMethod, RoomType, cycle,
    validate_draft,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Returns the form row index of `field`.
fn index_of(field: Field) -> usize {
    Field::all()
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

/// State for the booking form screen.
///
/// The [`BookingDraft`] is the source of truth; the [`Form`] mirrors its
/// values for display and carries focus and per-field errors.
#[derive(Debug, Clone)]
pub struct BookingFormState {
    draft: BookingDraft,
    form: Form,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFormState {
    /// Creates a form holding a default draft.
    pub fn new() -> Self {
        let fields = Field::all()
            .iter()
            .map(|f| match f.kind() {
                FieldKind::Select => FormField::select(f.label(), true),
                FieldKind::Text | FieldKind::Date | FieldKind::Amount => {
                    FormField::text(f.label(), true)
                }
            })
            .collect();
        let mut state = Self {
            draft: BookingDraft::default(),
            form: Form::new(fields),
        };
        state.sync();
        state
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the field that has focus.
    pub fn focused_field(&self) -> Field {
        Field::all()
            .get(self.form.focus())
            .copied()
            .unwrap_or(Field::CustomerName)
    }

    /// Clears the draft back to its defaults and returns focus to the top.
    pub fn reset_draft(&mut self) {
        self.draft.reset();
        self.form.clear_errors();
        self.form.set_focus(0);
        self.sync();
    }

    /// Copies every draft value into the display form.
    fn sync(&mut self) {
        for (i, field) in Field::all().iter().enumerate() {
            self.form.set_value(i, self.draft.get(*field));
        }
    }

    /// Steps the focused select field to its next or previous option.
    ///
    /// Country goes through [`BookingDraft::set_country`], so the phone
    /// number follows.
    fn cycle_select(&mut self, forward: bool) {
        let field = self.focused_field();
        let current = self.draft.get(field);
        match field {
            Field::Country => {
                let next = cycle::<Country>(current, forward);
                self.draft.set_country(next);
            }
            Field::BookingVia => {
                let next = cycle::<BookingVia>(current, forward);
                self.draft.set_field(field, next);
            }
            Field::RoomType => {
                let next = cycle::<RoomType>(current, forward);
                self.draft.set_field(field, next);
            }
            Field::PaymentMethod => {
                let next = cycle::<PaymentMethod>(current, forward);
                self.draft.set_field(field, next);
            }
            _ => return,
        }
        self.sync();
    }

    fn handle_char(&mut self, ch: char) -> Action {
        let field = self.focused_field();
        match field.kind() {
            FieldKind::Select => match ch {
                'q' => return Action::Quit,
                ' ' => self.cycle_select(true),
                _ => {}
            },
            FieldKind::Text | FieldKind::Date | FieldKind::Amount => {
                self.draft.push_char(field, ch);
                self.sync();
            }
        }
        Action::None
    }

    fn handle_backspace(&mut self) {
        let field = self.focused_field();
        if field.kind() != FieldKind::Select {
            self.draft.pop_char(field);
            self.sync();
        }
    }

    /// Validates every field and, if all pass, hands the draft off for submission.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();

        for (field, err) in validate_draft(&self.draft) {
            self.form.set_error(index_of(field), err.to_string());
        }

        if let Some(first) = self.form.first_error() {
            self.form.set_focus(first);
            return Action::None;
        }

        Action::Submit(self.draft.clone())
    }
}

impl ScreenState for BookingFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Raw mode delivers Ctrl+C as a key; other Ctrl/Alt chords are not input
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Right => {
                self.cycle_select(true);
                Action::None
            }
            KeyCode::Left => {
                self.cycle_select(false);
                Action::None
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                Action::None
            }
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the booking form screen.
#[mutants::skip]
pub fn draw_booking_form(state: &BookingFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Advance Payment Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    draw_form(state.form(), frame, form_area);

    let footer = Paragraph::new(Line::from(
        "Tab/\u{2191}\u{2193}: move  \u{2190}/\u{2192}: choose  Enter: confirm booking  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
