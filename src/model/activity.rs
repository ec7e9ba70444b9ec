use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::FOOD;

/// Opaque unique identifier of an [`Activity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[mutants::skip]
impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single food or exercise entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub category: u32,
    pub name: String,
    pub calories: u32,
}

impl Activity {
    /// Creates a blank food activity with the given id.
    pub fn blank(id: ActivityId) -> Self {
        Self {
            id,
            category: FOOD,
            name: String::new(),
            calories: 0,
        }
    }

    /// Returns `true` if this activity counts as calories consumed.
    pub fn is_food(&self) -> bool {
        self.category == FOOD
    }
}

/// Source of fresh activity identifiers.
pub trait IdGenerator {
    fn fresh_id(&mut self) -> ActivityId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> ActivityId,
{
    fn fresh_id(&mut self) -> ActivityId {
        self()
    }
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn fresh_id(&mut self) -> ActivityId {
        ActivityId(Uuid::new_v4().to_string())
    }
}
