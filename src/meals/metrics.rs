use serde::Serialize;

/// Diet summary over a user's meal history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: u64,
    pub within_diet_meals: u64,
    pub outside_diet_meals: u64,
    /// Longest run of consecutive within-diet meals.
    pub best_sequence: u64,
}

impl MealMetrics {
    /// Fold `within_diet` flags given in insertion order.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut metrics = Self::default();
        let mut streak = 0u64;
        for within_diet in flags {
            metrics.total_meals += 1;
            if within_diet {
                metrics.within_diet_meals += 1;
                streak += 1;
                metrics.best_sequence = metrics.best_sequence.max(streak);
            } else {
                metrics.outside_diet_meals += 1;
                streak = 0;
            }
        }
        metrics
    }
}
