// Tue Jan 13 2026 - Alex

use virtual_bistro::{Cuisine, Dish, Kitchen, KitchenConfig, RoundingPolicy};

const DISHES_JSON: &str = include_str!("../demos/dishes.json");

fn thirteen_dish_kitchen(config: &KitchenConfig) -> Kitchen {
    let dishes: Vec<Dish> = serde_json::from_str(DISHES_JSON).unwrap();
    let (kitchen, rejected) = Kitchen::from_dishes(config, dishes);
    assert_eq!(rejected, 0);
    kitchen
}

#[test]
fn test_thirteen_dish_report_layout() {
    let kitchen = thirteen_dish_kitchen(&KitchenConfig::default());

    assert_eq!(kitchen.len(), 13);
    assert_eq!(kitchen.total_prep_time(), 805);
    assert_eq!(kitchen.average_prep_time(), 62);
    assert_eq!(kitchen.elaborate_count(), 7);
    assert_eq!(kitchen.elaborate_percentage(), 53.85);

    let expected = "\
ITALIAN: 2
MEXICAN: 3
CHINESE: 2
INDIAN: 1
AMERICAN: 1
FRENCH: 2
OTHER: 2

AVERAGE PREP TIME: 62
ELABORATE DISHES: 53.85%
";

    let mut out = Vec::new();
    kitchen.write_report(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_round_up_policy_matches_on_thirteen_dishes() {
    let config = KitchenConfig::default().with_rounding(RoundingPolicy::Up);
    let kitchen = thirteen_dish_kitchen(&config);
    assert_eq!(kitchen.elaborate_percentage(), 53.85);
}

#[test]
fn test_report_after_removals() {
    let mut kitchen = thirteen_dish_kitchen(&KitchenConfig::default());

    assert_eq!(kitchen.remove_below_prep_time(60), 5);
    assert_eq!(kitchen.remove_by_category("OTHER"), 2);

    let report = kitchen.report();
    assert_eq!(report.count(Cuisine::Other), 0);
    assert_eq!(report.count(Cuisine::Mexican), 1);
    assert_eq!(report.total_dishes(), 6);
    // 90 + 85 + 75 + 65 + 80 + 70
    assert_eq!(kitchen.total_prep_time(), 465);
    assert_eq!(report.average_prep_time, 78);
    assert_eq!(report.elaborate_percentage, 100.0);
}
