use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{error, info};

use crate::state::{ActivityAction, ActivityState, Dispatch};
use crate::storage::ActivityManager;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ActivityFormState, ActivityListState, HelpState, draw_activity_form, draw_activity_list,
    draw_help,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Create or edit an activity.
    ActivityForm,
    /// Browse recorded activities.
    ActivityList,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::ActivityForm => "Activity Form",
            Self::ActivityList => "Activity List",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    manager: ActivityManager,
    state: ActivityState,
    activity_form: ActivityFormState,
    activity_list: ActivityListState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::ActivityForm`] screen, loading
    /// stored activities from `manager`.
    pub fn new(manager: ActivityManager) -> Result<Self, AppError> {
        let state = ActivityState::with_activities(manager.load()?);
        info!(count = state.activities.len(), "starting with stored activities");

        let mut activity_list = ActivityListState::new();
        activity_list.load(&state);

        Ok(Self {
            screen: Screen::ActivityForm,
            manager,
            state,
            activity_form: ActivityFormState::new(),
            activity_list,
            help: HelpState::new(),
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::ActivityForm => draw_activity_form(&self.activity_form, frame, main_area),
            Screen::ActivityList => draw_activity_list(&self.activity_list, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        let ctx = StatusBarContext {
            summary: self.state.summary(),
            activity_count: self.state.activities.len(),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.open_from(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::ActivityForm => self.activity_form.handle_key(key),
            Screen::ActivityList => self.activity_list.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies a screen [`Action`].
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Dispatch(activity_action) => self.dispatch_activity(activity_action),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Reduces the activity state, persists it, and refreshes the screens.
    ///
    /// Starting a new activity, deleting the record in the form, and
    /// restarting all discard the draft so it cannot resave a stale record.
    fn dispatch_activity(&mut self, action: ActivityAction) {
        let persist = !matches!(action, ActivityAction::SetActiveId { .. });
        let to_form = matches!(action, ActivityAction::SetActiveId { .. });
        let discard_draft = match &action {
            ActivityAction::SetActiveId { id: None } | ActivityAction::RestartApp => true,
            ActivityAction::DeleteActivity { id } => {
                *id == self.activity_form.activity().draft().id
            }
            _ => false,
        };

        self.state.dispatch(action);

        if persist && let Err(e) = self.manager.save(&self.state.activities) {
            error!(error = %e, "failed to save activities");
            let msg = format!("Could not save: {e}");
            match self.screen {
                Screen::ActivityList => self.activity_list.set_error(msg),
                _ => self.activity_form.set_error(msg),
            }
        }

        self.activity_form.sync(&self.state);
        if discard_draft {
            self.activity_form.start_new();
        }
        self.activity_list.load(&self.state);
        if to_form {
            self.screen = Screen::ActivityForm;
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the activity state.
    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    /// Returns the activity form screen state.
    pub fn activity_form(&self) -> &ActivityFormState {
        &self.activity_form
    }

    /// Returns the activity list screen state.
    pub fn activity_list(&self) -> &ActivityListState {
        &self.activity_list
    }
}
