//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Dimmed hint shown while the value is empty.
    pub placeholder: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be filled in to submit.
    pub required: bool,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            placeholder: String::new(),
            error: None,
            required,
        }
    }

    /// Sets the placeholder hint.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// A multi-field text form with focus management.
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

    /// Moves focus to the field at `index`; out-of-range indices are ignored.
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

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears the error on one field.
    pub fn clear_error(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = None;
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

/// Height of one bordered input row.
const ROW_HEIGHT: u16 = 3;

/// Border colour for a field: red on error, yellow when focused.
fn border_color(field: &FormField, focused: bool) -> Color {
    match (&field.error, focused) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Yellow,
        (None, false) => Color::DarkGray,
    }
}

/// The input line: value or dimmed placeholder, plus a cursor when focused.
fn input_line(field: &FormField, focused: bool) -> Line<'_> {
    let text = if field.value.is_empty() {
        Span::styled(field.placeholder.as_str(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(field.value.as_str())
    };
    let mut line = Line::from(text);
    if focused {
        line.push_span(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    line
}

/// Renders a form within the given area, one bordered row per field.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical(form.fields.iter().map(|_| Constraint::Length(ROW_HEIGHT)))
        .split(area);

    for ((i, field), row) in form.fields.iter().enumerate().zip(rows.iter().copied()) {
        let focused = i == form.focus;
        let title = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(field, focused)));
        frame.render_widget(Paragraph::new(input_line(field, focused)).block(block), row);

        // Error text sits on the row's bottom border.
        if let Some(err) = &field.error {
            let [_, err_row] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(row);
            let err_area = err_row.inner(Margin::new(2, 0));
            frame.render_widget(
                Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red)),
                err_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::new("Category", false),
            FormField::new("Activity", true).with_placeholder("e.g. Salad, Running"),
            FormField::new("Calories", true),
        ])
    }

    fn render(form: &Form) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        terminal
            .draw(|frame| draw_form(form, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        let form = make_form();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_next_wraps() {
        let mut form = make_form();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), 2);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn focus_on_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        form.focus_next();
        form.focus_prev();
        form.set_focus(3);
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn set_focus_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_focus(1);
        form.set_focus(99);
        assert_eq!(form.focus(), 1);
    }

    // --- Values ---

    #[test]
    fn set_value_replaces() {
        let mut form = make_form();
        form.set_value(1, "Salad");
        form.set_value(1, "Soup");
        assert_eq!(form.value(1), "Soup");
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn value_out_of_bounds_returns_empty() {
        let mut form = make_form();
        form.set_value(99, "nope");
        assert_eq!(form.value(99), "");
    }

    // --- Errors ---

    #[test]
    fn errors_set_and_clear() {
        let mut form = make_form();
        form.set_error(1, "blank".into());
        form.set_error(2, "zero".into());
        assert!(form.has_errors());
        form.clear_error(1);
        assert_eq!(form.fields()[1].error, None);
        assert!(form.has_errors());
        form.clear_errors();
        assert!(!form.has_errors());
    }

    #[test]
    fn set_error_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_error(99, "nope".into());
        assert!(!form.has_errors());
    }

    // --- Rendering ---

    #[test]
    fn renders_placeholder_when_empty() {
        let output = render(&make_form());
        assert!(output.contains("e.g. Salad"));
        assert!(output.contains("Activity *"));
    }

    #[test]
    fn value_hides_placeholder() {
        let mut form = make_form();
        form.set_value(1, "Soup");
        let output = render(&form);
        assert!(output.contains("Soup"));
        assert!(!output.contains("e.g. Salad"));
    }

    #[test]
    fn error_shown_on_row_border() {
        let mut form = make_form();
        form.set_error(2, "must be above zero".into());
        let output = render(&form);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[8].contains("must be above zero"));
    }
}
