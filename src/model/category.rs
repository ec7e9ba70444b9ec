/// Category id for food (calories consumed).
pub const FOOD: u32 = 1;
/// Category id for exercise (calories burned).
pub const EXERCISE: u32 = 2;

/// An entry of the static category lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

/// All known categories, in selector order.
pub static CATEGORIES: &[Category] = &[
    Category {
        id: FOOD,
        name: "Food",
    },
    Category {
        id: EXERCISE,
        name: "Exercise",
    },
];

impl Category {
    /// Returns the category following `id` in selector order, wrapping around.
    ///
    /// Unknown ids restart from the first category.
    pub fn cycle(id: u32, forward: bool) -> u32 {
        let len = CATEGORIES.len();
        let next = match CATEGORIES.iter().position(|c| c.id == id) {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None => 0,
        };
        CATEGORIES[next].id
    }
}

/// Returns the display name for a category id, or `"Unknown"`.
pub fn category_name(id: u32) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map_or("Unknown", |c| c.name)
}
