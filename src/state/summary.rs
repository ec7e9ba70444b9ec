use crate::model::Activity;

/// Calorie totals across a list of activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalorieSummary {
    /// Calories from food activities.
    pub consumed: u64,
    /// Calories from every non-food activity.
    pub burned: u64,
    /// `consumed - burned`; negative when more was burned.
    pub net: i64,
}

impl CalorieSummary {
    pub fn of(activities: &[Activity]) -> Self {
        let (consumed, burned) =
            activities
                .iter()
                .fold((0_u64, 0_u64), |(consumed, burned), activity| {
                    let calories = u64::from(activity.calories);
                    if activity.is_food() {
                        (consumed + calories, burned)
                    } else {
                        (consumed, burned + calories)
                    }
                });
        Self {
            consumed,
            burned,
            net: consumed as i64 - burned as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{ActivityId, EXERCISE, FOOD};

    fn activity(category: u32, calories: u32) -> Activity {
        Activity {
            id: ActivityId::new("x"),
            category,
            name: "x".into(),
            calories,
        }
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(CalorieSummary::of(&[]), CalorieSummary::default());
    }

    #[test]
    fn splits_food_and_exercise() {
        let summary = CalorieSummary::of(&[
            activity(FOOD, 500),
            activity(EXERCISE, 300),
            activity(FOOD, 200),
        ]);
        assert_eq!(summary.consumed, 700);
        assert_eq!(summary.burned, 300);
        assert_eq!(summary.net, 400);
    }

    #[test]
    fn unknown_category_counts_as_burned() {
        let summary = CalorieSummary::of(&[activity(7, 100)]);
        assert_eq!(summary.burned, 100);
        assert_eq!(summary.net, -100);
    }

    #[quickcheck]
    fn net_is_consumed_minus_burned(entries: Vec<(bool, u16)>) -> bool {
        let activities: Vec<Activity> = entries
            .iter()
            .map(|&(food, cal)| activity(if food { FOOD } else { EXERCISE }, u32::from(cal)))
            .collect();
        let s = CalorieSummary::of(&activities);
        s.net == s.consumed as i64 - s.burned as i64
            && s.consumed + s.burned == entries.iter().map(|&(_, c)| u64::from(c)).sum::<u64>()
    }
}
