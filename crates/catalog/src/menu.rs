//! Menu data — cuisines, categories and priced items.
//!
//! Pre-configured tables for each kitchen, in the style of a printed menu:
//! one const slice per cuisine, grouped by category name. Prices are in
//! cents ([`Money::from_cents`]).

use order::Money;

/// The five kitchens selectable from the cuisine picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cuisine {
    /// Soups, tomyam, rice dishes.
    Thai,
    /// North Indian; items open the customize sheet.
    Indian,
    /// Tiffin items.
    SouthIndian,
    /// Burgers, pasta, pizza.
    Western,
    /// Cold / hot drinks and shakes.
    Drinks,
}

impl Cuisine {
    /// All cuisines in picker order.
    pub const ALL: [Cuisine; 5] = [
        Cuisine::Thai,
        Cuisine::Indian,
        Cuisine::SouthIndian,
        Cuisine::Western,
        Cuisine::Drinks,
    ];

    /// Display name as shown on the cuisine picker header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Cuisine::Thai => "THAI KITCHEN",
            Cuisine::Indian => "INDIAN KITCHEN",
            Cuisine::SouthIndian => "SOUTH INDIAN",
            Cuisine::Western => "WESTERN KITCHEN",
            Cuisine::Drinks => "DRINKS",
        }
    }

    /// Category names for this cuisine's menu filter, in display order.
    #[must_use]
    pub const fn categories(self) -> &'static [&'static str] {
        match self {
            Cuisine::Thai => &[
                "SOUP",
                "THAI VEG",
                "DISHES",
                "FISHES",
                "OMELETTE",
                "NOODLES",
                "STEAM RICE",
                "FRIED RICE",
            ],
            Cuisine::Indian => &["STARTERS", "MAIN COURSE", "BREADS"],
            Cuisine::SouthIndian => &["TIFFIN"],
            Cuisine::Western => &["MAINS"],
            Cuisine::Drinks => &["COLD", "HOT", "SHAKES"],
        }
    }

    /// Every item this cuisine offers, in menu order.
    #[must_use]
    pub const fn items(self) -> &'static [CatalogItem] {
        match self {
            Cuisine::Thai => THAI_ITEMS,
            Cuisine::Indian => INDIAN_ITEMS,
            Cuisine::SouthIndian => SOUTH_INDIAN_ITEMS,
            Cuisine::Western => WESTERN_ITEMS,
            Cuisine::Drinks => DRINK_ITEMS,
        }
    }

    /// Items belonging to one category of this cuisine.
    pub fn items_in_category(
        self,
        category: &'static str,
    ) -> impl Iterator<Item = &'static CatalogItem> {
        self.items().iter().filter(move |i| i.category == category)
    }
}

/// One orderable item. `customizable` items open the customize sheet instead
/// of being added to the cart directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable id, unique across all cuisines.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price.
    pub price: Money,
    /// Category within the owning cuisine.
    pub category: &'static str,
    /// Whether adding goes through the customize sheet.
    pub customizable: bool,
}

const fn item(
    id: &'static str,
    name: &'static str,
    cents: u64,
    category: &'static str,
) -> CatalogItem {
    CatalogItem {
        id,
        name,
        price: Money::from_cents(cents),
        category,
        customizable: false,
    }
}

const fn custom_item(
    id: &'static str,
    name: &'static str,
    cents: u64,
    category: &'static str,
) -> CatalogItem {
    CatalogItem {
        id,
        name,
        price: Money::from_cents(cents),
        category,
        customizable: true,
    }
}

const THAI_ITEMS: &[CatalogItem] = &[
    item("t1", "Tomyam Seafood (S)", 850, "SOUP"),
    item("t2", "Tomyam Seafood (L)", 1250, "SOUP"),
    item("t3", "Tomyam Chicken (S)", 700, "SOUP"),
    item("t4", "Tomyam Chicken (L)", 1050, "SOUP"),
    item("t5", "Tomyam Beef (S)", 800, "SOUP"),
    item("t6", "Tomyam Beef (L)", 1180, "SOUP"),
    item("t7", "OX Tail (S)", 980, "DISHES"),
    item("t8", "OX Tail (L)", 1480, "DISHES"),
    item("t9", "Thai Fried Chicken", 880, "DISHES"),
    item("t10", "Fish Soup (S)", 750, "SOUP"),
    item("t11", "Fish Soup (L)", 1100, "SOUP"),
    item("t12", "Steam Rice", 150, "STEAM RICE"),
    item("t13", "Fried Rice", 550, "FRIED RICE"),
    item("t14", "Tomyam Fish (S)", 800, "FISHES"),
    item("t15", "Tomyam Fish (L)", 1200, "FISHES"),
    item("t16", "Kangkong Belacan", 800, "THAI VEG"),
    item("t17", "Mixed Vegetables", 750, "THAI VEG"),
    item("t18", "Prawn Omelette", 900, "OMELETTE"),
    item("t19", "Onion Omelette", 600, "OMELETTE"),
    item("t20", "Pad Thai", 850, "NOODLES"),
    item("t21", "Fried Kuey Teow", 800, "NOODLES"),
];

const INDIAN_ITEMS: &[CatalogItem] = &[
    custom_item("st1", "Paneer Tikka", 950, "STARTERS"),
    custom_item("st2", "Chicken 65", 1050, "STARTERS"),
    custom_item("mc1", "Butter Chicken", 1350, "MAIN COURSE"),
    custom_item("mc2", "Dal Tadka", 900, "MAIN COURSE"),
    custom_item("b1", "Butter Naan", 250, "BREADS"),
    custom_item("b2", "Tandoori Roti", 200, "BREADS"),
];

const SOUTH_INDIAN_ITEMS: &[CatalogItem] = &[
    item("si1", "Dosa", 350, "TIFFIN"),
    item("si2", "Idli", 250, "TIFFIN"),
    item("si3", "Vada", 280, "TIFFIN"),
];

const WESTERN_ITEMS: &[CatalogItem] = &[
    item("w1", "Burger", 850, "MAINS"),
    item("w2", "Pasta", 1000, "MAINS"),
    item("w3", "Pizza", 1200, "MAINS"),
];

const DRINK_ITEMS: &[CatalogItem] = &[
    item("c1", "Lime Juice", 6000, "COLD"),
    item("c2", "Soft Drink", 5000, "COLD"),
    item("h1", "Tea", 2500, "HOT"),
    item("h2", "Coffee", 4000, "HOT"),
    item("s1", "Chocolate Milkshake", 12000, "SHAKES"),
    item("s2", "Strawberry Milkshake", 12000, "SHAKES"),
];

/// Find an item by id across every cuisine.
#[must_use]
pub fn find(id: &str) -> Option<&'static CatalogItem> {
    Cuisine::ALL
        .iter()
        .flat_map(|c| c.items().iter())
        .find(|i| i.id == id)
}
