use crate::catalog::MealCatalogs;
use crate::models::{Catalog, FoodItem};

/// (category, name, calories) rows, in catalog order.
type CatalogTable = &'static [(&'static str, &'static str, u32)];

pub const BREAKFAST_ITEMS: CatalogTable = &[
    ("fruits", "Apple", 95),
    ("fruits", "Banana", 105),
    ("fruits", "Orange", 62),
    ("fruits", "Blueberries (1 cup)", 85),
    ("grains", "Oatmeal (1 cup)", 154),
    ("grains", "Whole Wheat Toast", 80),
    ("grains", "Bagel", 245),
    ("grains", "Granola (1/2 cup)", 300),
    ("dairy", "Greek Yogurt", 100),
    ("dairy", "Milk (1 cup)", 103),
    ("dairy", "Cottage Cheese (1/2 cup)", 110),
    ("protein", "Boiled Egg", 78),
    ("protein", "Scrambled Eggs (2)", 182),
    ("protein", "Turkey Bacon (2 slices)", 70),
    ("spreads", "Peanut Butter (1 tbsp)", 94),
    ("spreads", "Honey (1 tbsp)", 64),
    ("drinks", "Orange Juice (1 cup)", 112),
];

pub const LUNCH_ITEMS: CatalogTable = &[
    ("grains", "Brown Rice (1 cup)", 216),
    ("grains", "Quinoa (1 cup)", 222),
    ("grains", "Whole Wheat Wrap", 130),
    ("protein", "Grilled Chicken Breast", 284),
    ("protein", "Tuna (1 can)", 191),
    ("protein", "Tofu (1/2 block)", 188),
    ("legumes", "Black Beans (1 cup)", 227),
    ("legumes", "Lentil Soup", 180),
    ("legumes", "Hummus (1/4 cup)", 102),
    ("vegetables", "Garden Salad", 33),
    ("vegetables", "Roasted Peppers", 40),
    ("vegetables", "Avocado (1/2)", 120),
    ("dairy", "Feta Cheese (1 oz)", 75),
    ("fruits", "Pear", 101),
    ("fruits", "Grapes (1 cup)", 104),
];

pub const DINNER_ITEMS: CatalogTable = &[
    ("protein", "Baked Salmon", 350),
    ("protein", "Lean Beef Steak", 271),
    ("protein", "Roast Turkey", 189),
    ("protein", "Shrimp (3 oz)", 84),
    ("grains", "Whole Wheat Pasta (1 cup)", 174),
    ("grains", "Sweet Potato", 112),
    ("grains", "Couscous (1 cup)", 176),
    ("vegetables", "Steamed Broccoli", 55),
    ("vegetables", "Green Beans", 44),
    ("vegetables", "Spinach Saute", 41),
    ("vegetables", "Roasted Carrots", 52),
    ("soups", "Minestrone", 127),
    ("soups", "Tomato Soup", 90),
    ("desserts", "Dark Chocolate (1 oz)", 170),
    ("desserts", "Fruit Sorbet", 120),
];

/// Build a catalog from a static table.
pub fn catalog_from_table(table: CatalogTable) -> Catalog {
    Catalog::from_items(
        table
            .iter()
            .map(|&(category, name, calories)| FoodItem::new(category, name, calories)),
    )
}

/// The catalogs shipped with the binary.
pub fn builtin_catalogs() -> MealCatalogs {
    MealCatalogs::new(
        catalog_from_table(BREAKFAST_ITEMS),
        catalog_from_table(LUNCH_ITEMS),
        catalog_from_table(DINNER_ITEMS),
    )
}
