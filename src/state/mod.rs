//! Activity state container: the activity list, the active id, and the
//! reducer that applies [`ActivityAction`]s to them.

mod reducer;
mod summary;

pub use reducer::{ActivityAction, ActivityState, Dispatch, reduce};
pub use summary::CalorieSummary;
