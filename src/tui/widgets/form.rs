//! Reusable form widget for text and select inputs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one field row, including its border.
const ROW_HEIGHT: u16 = 3;

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Current value as displayed.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
    /// Whether the value is chosen from a list rather than typed.
    pub select: bool,
}

impl FormField {
    /// Creates a free-text field.
    pub fn text(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
            required,
            select: false,
        }
    }

    /// Creates a field whose value is picked from a list.
    pub fn select(label: impl Into<String>, required: bool) -> Self {
        Self {
            select: true,
            ..Self::text(label, required)
        }
    }
}

/// A multi-field form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index`. Out-of-range indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Replaces the displayed value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value.clear();
            field.value.push_str(value);
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the index of the first field with an error.
    pub fn first_error(&self) -> Option<usize> {
        self.fields.iter().position(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Number of columns needed to fit `count` rows of fields into `height`.
fn column_count(count: usize, height: u16) -> usize {
    let rows_fit = usize::from((height / ROW_HEIGHT).max(1));
    count.div_ceil(rows_fit).max(1)
}

fn draw_field(field: &FormField, is_focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if field.error.is_some() {
        Color::Red
    } else if is_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let spans = if field.select {
        let arrow_style = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value = if field.value.is_empty() {
            Span::styled("Select", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(field.value.as_str())
        };
        vec![
            Span::styled("\u{25c0} ", arrow_style),
            value,
            Span::styled(" \u{25b6}", arrow_style),
        ]
    } else {
        let mut spans = vec![Span::raw(field.value.as_str())];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans
    };

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if let Some(ref err) = field.error {
        let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        // Overlaps the bottom border of the field.
        let err_area = Rect {
            x: area.x + 2,
            y: area.y + ROW_HEIGHT.saturating_sub(1),
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(error_line, err_area);
    }
}

/// Renders a form within the given area, splitting into columns when it is too short.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    if form.fields.is_empty() {
        return;
    }
    let columns = column_count(form.fields.len(), area.height);
    let per_column = form.fields.len().div_ceil(columns);

    let column_areas =
        Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(area);

    for (col, chunk) in form.fields.chunks(per_column).enumerate() {
        let rows = Layout::vertical(chunk.iter().map(|_| Constraint::Length(ROW_HEIGHT)))
            .split(column_areas[col]);
        for (row, field) in chunk.iter().enumerate() {
            let index = col * per_column + row;
            draw_field(field, index == form.focus, frame, rows[row]);
        }
    }
}
