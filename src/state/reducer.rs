use tracing::info;

use super::summary::CalorieSummary;
use crate::model::{Activity, ActivityId};

/// An action that updates [`ActivityState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityAction {
    /// Insert a new activity, or replace the existing one with the same id.
    SaveActivity { new_activity: Activity },
    /// Select an activity for editing, or clear the selection.
    SetActiveId { id: Option<ActivityId> },
    /// Remove an activity.
    DeleteActivity { id: ActivityId },
    /// Remove every activity.
    RestartApp,
}

/// Capability to hand an [`ActivityAction`] to a state container.
pub trait Dispatch {
    fn dispatch(&mut self, action: ActivityAction);
}

impl<F> Dispatch for F
where
    F: FnMut(ActivityAction),
{
    fn dispatch(&mut self, action: ActivityAction) {
        self(action)
    }
}

/// The activity list and the id of the activity being edited, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityState {
    pub activities: Vec<Activity>,
    pub active_id: Option<ActivityId>,
}

impl ActivityState {
    /// Creates a state holding `activities` with nothing selected.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            active_id: None,
        }
    }

    /// Returns the first activity with the given id.
    pub fn find(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Totals calories consumed and burned.
    pub fn summary(&self) -> CalorieSummary {
        CalorieSummary::of(&self.activities)
    }
}

impl Dispatch for ActivityState {
    fn dispatch(&mut self, action: ActivityAction) {
        *self = reduce(std::mem::take(self), action);
    }
}

/// Applies `action` to `state`, returning the new state.
pub fn reduce(mut state: ActivityState, action: ActivityAction) -> ActivityState {
    match action {
        ActivityAction::SaveActivity { new_activity } => {
            match state
                .activities
                .iter_mut()
                .find(|a| a.id == new_activity.id)
            {
                Some(existing) => {
                    info!(id = %new_activity.id, "updated activity");
                    *existing = new_activity;
                }
                None => {
                    info!(id = %new_activity.id, "added activity");
                    state.activities.push(new_activity);
                }
            }
            state.active_id = None;
        }
        ActivityAction::SetActiveId { id } => {
            state.active_id = id;
        }
        ActivityAction::DeleteActivity { id } => {
            state.activities.retain(|a| a.id != id);
            if state.active_id.as_ref() == Some(&id) {
                state.active_id = None;
            }
            info!(%id, "deleted activity");
        }
        ActivityAction::RestartApp => {
            info!(count = state.activities.len(), "cleared all activities");
            state.activities.clear();
            state.active_id = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{EXERCISE, FOOD};

    fn activity(id: &str, category: u32, name: &str, calories: u32) -> Activity {
        Activity {
            id: ActivityId::new(id),
            category,
            name: name.to_string(),
            calories,
        }
    }

    fn id(s: &str) -> ActivityId {
        ActivityId::new(s)
    }

    fn sample_state() -> ActivityState {
        ActivityState::with_activities(vec![
            activity("a", FOOD, "Toast", 120),
            activity("b", EXERCISE, "Swim", 400),
        ])
    }

    // --- SaveActivity ---

    #[test]
    fn save_new_appends() {
        let state = reduce(
            sample_state(),
            ActivityAction::SaveActivity {
                new_activity: activity("c", FOOD, "Soup", 200),
            },
        );
        assert_eq!(state.activities.len(), 3);
        assert_eq!(state.activities[2].name, "Soup");
    }

    #[test]
    fn save_existing_replaces_in_place() {
        let mut state = sample_state();
        state.active_id = Some(id("a"));
        let state = reduce(
            state,
            ActivityAction::SaveActivity {
                new_activity: activity("a", FOOD, "Bagel", 250),
            },
        );
        assert_eq!(
            state.activities,
            vec![
                activity("a", FOOD, "Bagel", 250),
                activity("b", EXERCISE, "Swim", 400),
            ]
        );
        assert_eq!(state.active_id, None);
    }

    #[test]
    fn save_clears_active_id() {
        let mut state = sample_state();
        state.active_id = Some(id("b"));
        let state = reduce(
            state,
            ActivityAction::SaveActivity {
                new_activity: activity("c", FOOD, "Soup", 200),
            },
        );
        assert_eq!(state.active_id, None);
    }

    // --- SetActiveId ---

    #[test]
    fn set_active_id_selects() {
        let state = reduce(
            sample_state(),
            ActivityAction::SetActiveId { id: Some(id("b")) },
        );
        assert_eq!(state.active_id, Some(id("b")));
        assert_eq!(state.activities, sample_state().activities);
    }

    #[test]
    fn set_active_id_none_clears() {
        let mut state = sample_state();
        state.active_id = Some(id("a"));
        let state = reduce(state, ActivityAction::SetActiveId { id: None });
        assert_eq!(state.active_id, None);
    }

    // --- DeleteActivity ---

    #[test]
    fn delete_removes_matching() {
        let state = reduce(
            sample_state(),
            ActivityAction::DeleteActivity { id: id("a") },
        );
        assert_eq!(state.activities, vec![activity("b", EXERCISE, "Swim", 400)]);
    }

    #[test]
    fn delete_active_clears_selection() {
        let mut state = sample_state();
        state.active_id = Some(id("a"));
        let state = reduce(state, ActivityAction::DeleteActivity { id: id("a") });
        assert_eq!(state.active_id, None);
    }

    #[test]
    fn delete_other_keeps_selection() {
        let mut state = sample_state();
        state.active_id = Some(id("b"));
        let state = reduce(state, ActivityAction::DeleteActivity { id: id("a") });
        assert_eq!(state.active_id, Some(id("b")));
    }

    #[test]
    fn delete_unknown_is_noop() {
        let state = reduce(
            sample_state(),
            ActivityAction::DeleteActivity { id: id("zzz") },
        );
        assert_eq!(state, sample_state());
    }

    // --- RestartApp ---

    #[test]
    fn restart_clears_everything() {
        let mut state = sample_state();
        state.active_id = Some(id("a"));
        let state = reduce(state, ActivityAction::RestartApp);
        assert_eq!(state, ActivityState::default());
    }

    // --- Dispatch ---

    #[test]
    fn state_dispatch_reduces_in_place() {
        let mut state = sample_state();
        state.dispatch(ActivityAction::DeleteActivity { id: id("b") });
        assert_eq!(state.activities.len(), 1);
    }

    #[test]
    fn find_returns_first_match() {
        let state = sample_state();
        assert_eq!(state.find(&id("b")).map(|a| a.name.as_str()), Some("Swim"));
        assert!(state.find(&id("nope")).is_none());
    }

    #[quickcheck]
    fn saving_n_distinct_activities_yields_n(n: u8) -> bool {
        let n = n.min(50) as usize;
        let mut state = ActivityState::default();
        for i in 0..n {
            state.dispatch(ActivityAction::SaveActivity {
                new_activity: activity(&i.to_string(), FOOD, "Apple", 95),
            });
        }
        state.activities.len() == n
    }

    #[quickcheck]
    fn resaving_same_id_never_grows(times: u8) -> bool {
        let mut state = sample_state();
        for i in 0..times.min(30) {
            state.dispatch(ActivityAction::SaveActivity {
                new_activity: activity("a", FOOD, "Toast", u32::from(i) + 1),
            });
        }
        state.activities.len() == 2
    }
}
