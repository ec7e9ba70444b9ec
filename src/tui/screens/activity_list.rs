//! Activity list screen: browse, edit, and delete recorded activities.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::{Activity, category_name};
use crate::state::{ActivityAction, ActivityState};
use crate::tui::action::{Action, ScreenState};

/// A destructive action waiting for y/n confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    /// Delete the activity at this index.
    Delete(usize),
    /// Remove every activity.
    Restart,
}

/// State for the activity list screen.
#[derive(Debug, Clone, Default)]
pub struct ActivityListState {
    /// Cached copy of the activity list.
    activities: Vec<Activity>,
    /// Index of the highlighted row, or `None` if the list is empty.
    selected: Option<usize>,
    /// Destructive action awaiting confirmation.
    pending: Option<PendingConfirm>,
    /// Error message from the last failed operation.
    error: Option<String>,
}

impl ActivityListState {
    /// Creates an empty state. Call [`load`](Self::load) to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the cached list, keeping the selection in range.
    pub fn load(&mut self, state: &ActivityState) {
        self.activities = state.activities.clone();
        self.selected = match (self.activities.len(), self.selected) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.pending = None;
    }

    /// Returns the cached activity list.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the action awaiting confirmation, if any.
    pub fn pending(&self) -> Option<PendingConfirm> {
        self.pending
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message to display on this screen.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Handles y/n while a confirmation is pending.
    fn handle_confirm(&mut self, pending: PendingConfirm, key: KeyEvent) -> Action {
        self.pending = None;
        if !matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            return Action::None;
        }
        match pending {
            PendingConfirm::Delete(i) => self.activities.get(i).map_or(Action::None, |a| {
                Action::Dispatch(ActivityAction::DeleteActivity { id: a.id.clone() })
            }),
            PendingConfirm::Restart => Action::Dispatch(ActivityAction::RestartApp),
        }
    }

    /// Returns an action to edit the currently selected activity.
    fn edit_current(&self) -> Action {
        self.selected
            .and_then(|i| self.activities.get(i))
            .map_or(Action::None, |a| {
                Action::Dispatch(ActivityAction::SetActiveId {
                    id: Some(a.id.clone()),
                })
            })
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.activities.len() => Some(i + 1),
            other => other,
        };
    }
}

impl ScreenState for ActivityListState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if let Some(pending) = self.pending {
            return self.handle_confirm(pending, key);
        }
        self.error = None;

        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self.edit_current(),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.pending = self.selected.map(PendingConfirm::Delete);
                Action::None
            }
            KeyCode::Char('R') => {
                if !self.activities.is_empty() {
                    self.pending = Some(PendingConfirm::Restart);
                }
                Action::None
            }
            KeyCode::Char('n') => Action::Dispatch(ActivityAction::SetActiveId { id: None }),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the activity list screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_activity_list(state: &ActivityListState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Activities ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.activities().is_empty() {
        let mut lines = vec![
            Line::from(""),
            Line::from("No activities yet."),
            Line::from("Press 'n' to add one."),
        ];
        if let Some(err) = state.error() {
            lines.push(Line::from(""));
            lines.push(Line::styled(err, Style::default().fg(Color::Red)));
        }
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(vec!["Category", "Activity", "Calories"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .activities()
        .iter()
        .enumerate()
        .map(|(i, activity)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if activity.is_food() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Magenta)
            };
            Row::new(vec![
                category_name(activity.category).to_string(),
                activity.name.clone(),
                activity.calories.to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(table, table_area);

    let (footer_text, footer_style) = match state.pending() {
        Some(PendingConfirm::Delete(_)) => (
            "Delete this activity? y/n".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Some(PendingConfirm::Restart) => (
            "Delete ALL activities? y/n".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        None => match state.error() {
            Some(err) => (err.to_string(), Style::default().fg(Color::Red)),
            None => (
                "n: new  Enter: edit  d: delete  R: restart  F1: help  q: quit".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };
    frame.render_widget(Paragraph::new(footer_text).style(footer_style), footer_area);
}
