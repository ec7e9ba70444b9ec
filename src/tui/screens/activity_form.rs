//! Activity form screen: create a new activity or edit the selected one.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{
    ActivityField, ActivityForm, Category, IdGenerator, SyncOutcome, UuidGenerator,
    ValidationError, category_name,
};
use crate::state::{ActivityAction, ActivityState};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the category selector.
const CATEGORY: usize = 0;
/// Field index for the activity name.
const NAME: usize = 1;
/// Field index for the calorie count.
const CALORIES: usize = 2;

/// Maps a widget row to the draft field it edits.
fn field_at(index: usize) -> ActivityField {
    ActivityField::ALL[index]
}

/// State for the activity form screen.
#[derive(Debug, Clone)]
pub struct ActivityFormState<G = UuidGenerator> {
    activity: ActivityForm<G>,
    form: Form,
    error: Option<String>,
}

impl Default for ActivityFormState<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityFormState<UuidGenerator> {
    /// Creates the screen with a blank draft.
    pub fn new() -> Self {
        Self::with_activity_form(ActivityForm::new())
    }
}

impl<G: IdGenerator> ActivityFormState<G> {
    /// Creates the screen around an existing activity form.
    pub fn with_activity_form(activity: ActivityForm<G>) -> Self {
        let form = Form::new(vec![
            FormField::new(ActivityField::Category.label(), false),
            FormField::new(ActivityField::Name.label(), true)
                .with_placeholder("e.g. Breakfast, Orange juice, Salad, Weights, Cycling"),
            FormField::new(ActivityField::Calories.label(), true)
                .with_placeholder("e.g. 300 or 500"),
        ]);
        let mut state = Self {
            activity,
            form,
            error: None,
        };
        state.refresh();
        state
    }

    /// Returns the underlying activity form.
    pub fn activity(&self) -> &ActivityForm<G> {
        &self.activity
    }

    /// Returns the input widget for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message to display.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Reconciles the draft with the activity state, redrawing inputs when a
    /// record was loaded for editing.
    pub fn sync(&mut self, state: &ActivityState) -> SyncOutcome {
        let outcome = self.activity.sync(state);
        match outcome {
            SyncOutcome::Loaded => {
                self.form.clear_errors();
                self.error = None;
                self.refresh();
            }
            SyncOutcome::Missing => {
                self.error = Some("Selected activity no longer exists".into());
            }
            SyncOutcome::Unchanged => {}
        }
        outcome
    }

    /// Replaces the draft with a blank record and clears the inputs.
    pub fn start_new(&mut self) {
        self.activity.start_new();
        self.form.clear_errors();
        self.error = None;
        self.refresh();
        self.form.set_focus(CATEGORY);
    }

    /// Copies the draft's display values into the input widget.
    fn refresh(&mut self) {
        let category = self.activity.draft().category;
        self.form
            .set_value(CATEGORY, format!("< {} >", category_name(category)));
        for index in [NAME, CALORIES] {
            let value = self.activity.display_value(field_at(index));
            self.form.set_value(index, value);
        }
    }

    /// Stores new raw text for a text input, showing the error if it is rejected.
    fn edit(&mut self, index: usize, raw: &str) {
        match self.activity.update_field(field_at(index), raw) {
            Ok(()) => {
                self.form.clear_error(index);
                let value = self.activity.display_value(field_at(index));
                self.form.set_value(index, value);
            }
            Err(e) => self.form.set_error(index, e.to_string()),
        }
    }

    /// Steps the category selector forward or backward.
    fn cycle_category(&mut self, forward: bool) {
        let next = Category::cycle(self.activity.draft().category, forward);
        if self
            .activity
            .update_field(ActivityField::Category, &next.to_string())
            .is_ok()
        {
            self.refresh();
        }
    }

    /// Handles a printable character on the focused input.
    fn handle_char(&mut self, ch: char) {
        match self.form.focus() {
            CATEGORY => {
                if ch == ' ' {
                    self.cycle_category(true);
                }
            }
            index => {
                let mut raw = self.form.value(index).to_string();
                raw.push(ch);
                self.edit(index, &raw);
            }
        }
    }

    /// Handles backspace on the focused input.
    fn handle_backspace(&mut self) {
        let index = self.form.focus();
        if index == CATEGORY {
            return;
        }
        let mut raw = self.form.value(index).to_string();
        raw.pop();
        self.edit(index, &raw);
    }

    /// Validates the draft and, when valid, returns its save action.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.error = None;

        let mut action = Action::None;
        match self
            .activity
            .submit(&mut |a: ActivityAction| action = Action::Dispatch(a))
        {
            Ok(()) => {
                self.refresh();
                self.form.set_focus(NAME);
            }
            Err(e) => {
                let index = match e {
                    ValidationError::BlankName => NAME,
                    ValidationError::ZeroCalories | ValidationError::NotANumber(_) => CALORIES,
                };
                self.form.set_error(index, e.to_string());
            }
        }
        action
    }
}

impl<G: IdGenerator> ScreenState for ActivityFormState<G> {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Left | KeyCode::Right if self.form.focus() == CATEGORY => {
                self.cycle_category(key.code == KeyCode::Right);
                Action::None
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Navigate(Screen::ActivityList),
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Renders the activity form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_activity_form<G: IdGenerator>(
    state: &ActivityFormState<G>,
    frame: &mut Frame,
    area: Rect,
) {
    let draft = state.activity().draft();
    let title = if draft.name.is_empty() && draft.calories == 0 {
        " New Activity "
    } else {
        " Activity "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, submit_area, error_area, _, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    // Submit control: dimmed while the draft is invalid
    let submit_style = if state.activity().is_valid() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = format!(" {} ", state.activity().submit_label().to_uppercase());
    frame.render_widget(
        Paragraph::new(Span::styled(label, submit_style)).alignment(Alignment::Center),
        submit_area,
    );

    if let Some(err) = state.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)))
                .alignment(Alignment::Center),
            error_area,
        );
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  \u{2190}/\u{2192}: category  Enter: save  Esc: list  F1: help",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
