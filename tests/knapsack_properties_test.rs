use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meal_basket_rs::models::{Catalog, FoodItem};
use meal_basket_rs::planner::{SelectorConfig, select, select_with};

fn random_catalog(rng: &mut StdRng, max_items: usize) -> Catalog {
    let n = rng.gen_range(0..=max_items);
    Catalog::from_items((0..n).map(|i| {
        let category = ["fruits", "grains", "protein"][rng.gen_range(0..3)];
        FoodItem::new(category, format!("item-{}", i), rng.gen_range(0..=300))
    }))
}

/// Best subset sum not exceeding `target`, by trying every subset.
fn brute_force_best(catalog: &Catalog, target: u32) -> u32 {
    let costs: Vec<u32> = catalog.items().iter().map(|i| i.calories).collect();
    (0u32..(1 << costs.len()))
        .map(|mask| {
            costs
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, cost)| *cost)
                .sum::<u32>()
        })
        .filter(|&sum| sum <= target)
        .max()
        .unwrap_or(0)
}

#[test]
fn test_selection_is_optimal() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng, 10);
        let target = rng.gen_range(0..=1200u32);

        let selection = select(target as i64, &catalog).unwrap();
        assert_eq!(
            selection.achieved,
            brute_force_best(&catalog, target),
            "suboptimal for target {} over {:?}",
            target,
            catalog.items()
        );
    }
}

#[test]
fn test_selection_is_bounded_and_consistent() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng, 12);
        let target = rng.gen_range(0..=1500u32);
        let selection = select(target as i64, &catalog).unwrap();

        assert!(selection.achieved <= target);

        let sum: u32 = selection.items.iter().map(|i| i.calories).sum();
        assert_eq!(sum, selection.achieved);

        let names: HashSet<&str> = selection.names().into_iter().collect();
        assert_eq!(names.len(), selection.items.len(), "duplicate item selected");

        for item in &selection.items {
            assert!(catalog.get(&item.name).is_some());
            assert!(item.calories > 0, "zero-calorie item selected");
        }
    }
}

#[test]
fn test_selection_is_monotonic_in_target() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let catalog = random_catalog(&mut rng, 8);
        let mut previous = 0;
        for target in (0..=1000).step_by(25) {
            let achieved = select(target, &catalog).unwrap().achieved;
            assert!(achieved >= previous);
            previous = achieved;
        }
    }
}

#[test]
fn test_selection_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..50 {
        let catalog = random_catalog(&mut rng, 15);
        let target = rng.gen_range(0..=2000) as i64;

        let first = select(target, &catalog).unwrap();
        let second = select(target, &catalog).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_zero_target_and_empty_catalog() {
    let mut rng = StdRng::seed_from_u64(5);
    let catalog = random_catalog(&mut rng, 10);

    let selection = select(0, &catalog).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.achieved, 0);

    for target in [0, 1, 500, 10_000] {
        let selection = select(target, &Catalog::new()).unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.achieved, 0);
    }
}

#[test]
fn test_large_target_within_limit() {
    let catalog = Catalog::from_items((1..=40).map(|i| FoodItem::new("misc", format!("f{}", i), i * 37)));
    let config = SelectorConfig { max_target: 10_000 };

    let selection = select_with(10_000, &catalog, &config).unwrap();
    assert!(selection.achieved <= 10_000);
    // 37 * (1 + ... + 40) = 30340, so a near-exact fill is reachable
    assert!(selection.achieved > 10_000 - 37);
}
