mod activity;
mod category;
mod form;
mod validation;

pub use activity::{Activity, ActivityId, IdGenerator, UuidGenerator};
pub use category::{CATEGORIES, Category, EXERCISE, FOOD, category_name};
pub use form::{ActivityField, ActivityForm, FieldKind, SyncOutcome};
pub use validation::{ValidationError, parse_number, validate_activity};
