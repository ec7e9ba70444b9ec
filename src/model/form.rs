//! The activity form: a local draft kept in step with external activity state.

use tracing::{debug, info, warn};

use super::activity::{Activity, ActivityId, IdGenerator, UuidGenerator};
use super::category::FOOD;
use super::validation::{ValidationError, parse_number, validate_activity};
use crate::state::{ActivityAction, ActivityState, Dispatch};

/// An editable field of the activity form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    Category,
    Name,
    Calories,
}

/// How a field's raw input text is stored in the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Parsed as an unsigned integer; blank input is zero.
    Numeric,
    /// Stored verbatim.
    Text,
}

impl ActivityField {
    /// All fields in display order.
    pub const ALL: [ActivityField; 3] = [Self::Category, Self::Name, Self::Calories];

    /// Returns the storage kind of this field.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Category | Self::Calories => FieldKind::Numeric,
            Self::Name => FieldKind::Text,
        }
    }

    /// Returns the stable identifier of this field.
    pub fn id(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Name => "name",
            Self::Calories => "calories",
        }
    }

    /// Looks up a field by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Name => "Activity",
            Self::Calories => "Calories",
        }
    }

    /// Parses `raw` according to this field's kind and stores it in `draft`.
    fn apply(self, draft: &mut Activity, raw: &str) -> Result<(), ValidationError> {
        match self {
            Self::Category => draft.category = parse_number(raw)?,
            Self::Name => draft.name = raw.to_string(),
            Self::Calories => draft.calories = parse_number(raw)?,
        }
        Ok(())
    }
}

/// Result of reconciling the draft with external state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The active id did not change, or changed to none.
    Unchanged,
    /// The record with the new active id was loaded into the draft.
    Loaded,
    /// The new active id matched no record; the draft was kept.
    Missing,
}

/// Draft state for creating or editing one [`Activity`].
///
/// The draft is replaced wholesale when the external active id changes to a
/// known record, edited field by field, and reset to a blank record with a
/// fresh id after each successful submit.
#[derive(Debug, Clone)]
pub struct ActivityForm<G = UuidGenerator> {
    draft: Activity,
    observed_active: Option<ActivityId>,
    ids: G,
}

impl Default for ActivityForm<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityForm<UuidGenerator> {
    /// Creates a form that generates UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl<G: IdGenerator> ActivityForm<G> {
    /// Creates a form with a blank draft, drawing ids from `ids`.
    pub fn with_id_generator(mut ids: G) -> Self {
        Self {
            draft: Activity::blank(ids.fresh_id()),
            observed_active: None,
            ids,
        }
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    /// Loads the record selected by `state.active_id` when that id changes.
    ///
    /// A change to no active id only records the change. An id with no
    /// matching record leaves the draft untouched.
    pub fn sync(&mut self, state: &ActivityState) -> SyncOutcome {
        if state.active_id == self.observed_active {
            return SyncOutcome::Unchanged;
        }
        self.observed_active = state.active_id.clone();

        let Some(id) = &state.active_id else {
            return SyncOutcome::Unchanged;
        };
        match state.find(id) {
            Some(activity) => {
                info!(%id, "loaded activity for editing");
                self.draft = activity.clone();
                SyncOutcome::Loaded
            }
            None => {
                warn!(%id, "active activity not found, keeping current draft");
                SyncOutcome::Missing
            }
        }
    }

    /// Stores raw input text in one draft field, leaving the others untouched.
    ///
    /// Numeric fields reject text that is not an unsigned integer, in which
    /// case the draft is unchanged.
    pub fn update_field(&mut self, field: ActivityField, raw: &str) -> Result<(), ValidationError> {
        field.apply(&mut self.draft, raw)
    }

    /// Checks the draft: trimmed name non-empty and calories above zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_activity(&self.draft)
    }

    /// Returns `true` if the draft may be submitted.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Dispatches the draft as a save action, then starts a fresh blank draft.
    ///
    /// An invalid draft is never dispatched; the validation error is returned
    /// and the draft is kept.
    pub fn submit<D: Dispatch + ?Sized>(&mut self, dispatch: &mut D) -> Result<(), ValidationError> {
        self.validate()?;
        let fresh = Activity::blank(self.ids.fresh_id());
        let new_activity = std::mem::replace(&mut self.draft, fresh);
        debug!(id = %new_activity.id, "submitting activity");
        dispatch.dispatch(ActivityAction::SaveActivity { new_activity });
        Ok(())
    }

    /// Discards the draft and starts a blank record with a fresh id.
    ///
    /// The observed active id is kept, so a later change still loads its record.
    pub fn start_new(&mut self) {
        self.draft = Activity::blank(self.ids.fresh_id());
        debug!(id = %self.draft.id, "started new draft");
    }

    /// Label for the submit control, by draft category.
    pub fn submit_label(&self) -> &'static str {
        if self.draft.category == FOOD {
            "Save food item"
        } else {
            "Save exercise item"
        }
    }

    /// Text shown in the input for `field`. Zero calories display as empty.
    pub fn display_value(&self, field: ActivityField) -> String {
        match field {
            ActivityField::Category => self.draft.category.to_string(),
            ActivityField::Name => self.draft.name.clone(),
            ActivityField::Calories if self.draft.calories == 0 => String::new(),
            ActivityField::Calories => self.draft.calories.to_string(),
        }
    }
}
