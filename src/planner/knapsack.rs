use crate::error::{PlannerError, Result};
use crate::models::{Catalog, Selection};
use crate::planner::constants::{DEFAULT_MAX_TARGET, MAX_TARGET_CEILING};

/// Limits applied before any table is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Largest target accepted, in calories. Capped at `MAX_TARGET_CEILING`.
    pub max_target: u32,
}

impl SelectorConfig {
    /// The target limit actually enforced.
    pub fn limit(&self) -> u32 {
        self.max_target.min(MAX_TARGET_CEILING)
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_target: DEFAULT_MAX_TARGET,
        }
    }
}

/// Select items whose total calories is as large as possible without
/// exceeding `target`, using the default limits.
pub fn select(target: i64, catalog: &Catalog) -> Result<Selection> {
    select_with(target, catalog, &SelectorConfig::default())
}

/// 0/1 knapsack over the catalog with value = weight = calories.
///
/// Forward pass keeps one rolling row of best sums plus a taken flag per
/// (item, budget) cell. A flag is set only when adding the item strictly beats
/// the best sum of the items before it, which is the same test as comparing a
/// table row to the row above. Reconstruction walks from the last item to the
/// first starting at the full target, so among equal optima the combination
/// built from earlier catalog items wins. Zero-calorie items never strictly
/// improve a sum and are therefore never selected.
///
/// Runs in O(items × target) time and space.
pub fn select_with(target: i64, catalog: &Catalog, config: &SelectorConfig) -> Result<Selection> {
    if target < 0 {
        return Err(PlannerError::InvalidInput(format!(
            "target calories must be non-negative, got {}",
            target
        )));
    }

    let limit = config.limit();
    if target > limit as i64 {
        return Err(PlannerError::InvalidInput(format!(
            "target calories {} exceeds the limit of {}",
            target, limit
        )));
    }

    let items = catalog.items();
    let budget = target as usize;

    if items.is_empty() || budget == 0 {
        return Ok(Selection::default());
    }

    let width = budget + 1;
    let mut best = vec![0u32; width];
    let mut taken = vec![false; items.len() * width];

    for (i, item) in items.iter().enumerate() {
        let cost = item.calories as usize;
        if cost > budget {
            continue;
        }

        let row = &mut taken[i * width..(i + 1) * width];

        // Descending so best[j - cost] still holds the previous row.
        for j in (cost..=budget).rev() {
            let with_item = best[j - cost] + item.calories;
            if with_item > best[j] {
                best[j] = with_item;
                row[j] = true;
            }
        }
    }

    let mut remaining = budget;
    let mut chosen = Vec::new();
    for i in (0..items.len()).rev() {
        if taken[i * width + remaining] {
            chosen.push(i);
            remaining -= items[i].calories as usize;
        }
    }
    chosen.reverse();

    let selection = Selection {
        items: chosen.into_iter().map(|i| items[i].clone()).collect(),
        achieved: best[budget],
    };

    debug_assert_eq!(
        selection.items.iter().map(|i| i.calories).sum::<u32>(),
        selection.achieved
    );

    tracing::debug!(
        target_calories = target,
        catalog_items = items.len(),
        chosen = selection.items.len(),
        achieved = selection.achieved,
        "knapsack selection complete"
    );

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn catalog(items: &[(&str, u32)]) -> Catalog {
        Catalog::from_items(
            items
                .iter()
                .map(|(name, cal)| FoodItem::new("misc", *name, *cal)),
        )
    }

    #[test]
    fn test_apple_banana_egg() {
        let c = catalog(&[("apple", 95), ("banana", 105), ("egg", 78)]);
        let s = select(180, &c).unwrap();
        assert_eq!(s.achieved, 173);
        assert_eq!(s.names(), vec!["apple", "egg"]);
    }

    #[test]
    fn test_single_item_over_target() {
        let c = catalog(&[("toast", 150)]);
        let s = select(100, &c).unwrap();
        assert_eq!(s, Selection::default());
    }

    #[test]
    fn test_rice_beans_chicken() {
        let c = catalog(&[("rice", 200), ("beans", 150), ("chicken", 300)]);
        let s = select(450, &c).unwrap();
        assert_eq!(s.achieved, 450);
        assert_eq!(s.names(), vec!["beans", "chicken"]);
    }

    #[test]
    fn test_exact_fit_takes_everything() {
        let c = catalog(&[("a", 10), ("b", 20), ("c", 30)]);
        let s = select(60, &c).unwrap();
        assert_eq!(s.achieved, 60);
        assert_eq!(s.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tie_prefers_earlier_items() {
        let c = catalog(&[("first", 50), ("second", 50)]);
        let s = select(50, &c).unwrap();
        assert_eq!(s.names(), vec!["first"]);

        let c = catalog(&[("a", 30), ("b", 20), ("c", 50)]);
        let s = select(50, &c).unwrap();
        assert_eq!(s.achieved, 50);
        assert_eq!(s.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_zero_cost_items_not_selected() {
        let c = catalog(&[("water", 0), ("apple", 95), ("tea", 0)]);
        let s = select(100, &c).unwrap();
        assert_eq!(s.achieved, 95);
        assert_eq!(s.names(), vec!["apple"]);
    }

    #[test]
    fn test_zero_target() {
        let c = catalog(&[("apple", 95)]);
        assert_eq!(select(0, &c).unwrap(), Selection::default());
    }

    #[test]
    fn test_empty_catalog() {
        let s = select(500, &Catalog::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.achieved, 0);
    }

    #[test]
    fn test_negative_target_rejected() {
        let c = catalog(&[("apple", 95)]);
        assert!(matches!(select(-1, &c), Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_target_over_limit_rejected() {
        let config = SelectorConfig { max_target: 1000 };
        let c = catalog(&[("apple", 95)]);

        assert!(select_with(1000, &c, &config).is_ok());
        assert!(matches!(
            select_with(1001, &c, &config),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(matches!(
            select(DEFAULT_MAX_TARGET as i64 + 1, &c),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_names_differing_in_case_both_selectable() {
        let c = catalog(&[("Tea", 10), ("tea", 20)]);
        let s = select(30, &c).unwrap();
        assert_eq!(s.achieved, 30);
        assert_eq!(s.names(), vec!["Tea", "tea"]);
    }

    #[test]
    fn test_configured_limit_capped_at_ceiling() {
        let config = SelectorConfig {
            max_target: u32::MAX,
        };
        assert_eq!(config.limit(), MAX_TARGET_CEILING);

        let c = catalog(&[("apple", 95)]);
        assert!(matches!(
            select_with(MAX_TARGET_CEILING as i64 + 1, &c, &config),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(matches!(
            select_with(4_000_000_000, &c, &config),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_catalog_not_mutated() {
        let c = catalog(&[("apple", 95), ("banana", 105), ("egg", 78)]);
        let before: Vec<FoodItem> = c.items().to_vec();
        let _ = select(180, &c).unwrap();
        assert_eq!(c.items(), before.as_slice());
    }
}
