//! The purchasable-item catalog.
//!
//! Loaded once at session start and immutable from then on; the cart takes
//! denormalized snapshots of whatever it adds, so the catalog is a pure
//! read-only input to the order-taking flow.

use common::ItemId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Menu category of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Coffee,
    Tea,
    Snacks,
    Desserts,
    Juice,
}

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Category; 5] = [
        Category::Coffee,
        Category::Tea,
        Category::Snacks,
        Category::Desserts,
        Category::Juice,
    ];

    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Tea => "Tea",
            Category::Snacks => "Snacks",
            Category::Desserts => "Desserts",
            Category::Juice => "Juice",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable menu item.
///
/// Immutable for the session lifetime; created at catalog load, never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item identifier.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Menu category.
    pub category: Category,

    /// Price per unit.
    pub unit_price: Money,
}

impl CatalogItem {
    /// Creates a new catalog item.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: Category,
        unit_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            unit_price,
        }
    }
}

/// The immutable list of purchasable items for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Creates a catalog from a list of items.
    ///
    /// Item ids must be unique; the catalog loader owns that guarantee.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog item ids must be unique"
        );
        Self { items }
    }

    /// The standard café menu.
    pub fn standard() -> Self {
        use Category::*;

        let price = Money::from_rupees;
        Self::new(vec![
            CatalogItem::new(1u32, "Cappuccino", Coffee, price(180)),
            CatalogItem::new(2u32, "Latte", Coffee, price(200)),
            CatalogItem::new(3u32, "Espresso", Coffee, price(150)),
            CatalogItem::new(4u32, "Americano", Coffee, price(160)),
            CatalogItem::new(5u32, "Green Tea", Tea, price(120)),
            CatalogItem::new(6u32, "Masala Chai", Tea, price(80)),
            CatalogItem::new(7u32, "Croissant", Snacks, price(150)),
            CatalogItem::new(8u32, "Sandwich", Snacks, price(180)),
            CatalogItem::new(9u32, "Chocolate Cake", Desserts, price(250)),
            CatalogItem::new(10u32, "Brownie", Desserts, price(180)),
            CatalogItem::new(11u32, "Mango Smoothie", Juice, price(220)),
            CatalogItem::new(12u32, "Fresh Orange", Juice, price(160)),
        ])
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns all items in menu order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Returns the items in a category, preserving menu order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_has_twelve_items() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_standard_menu_ids_are_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<_> = catalog.items().iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::standard();
        let item = catalog.get(ItemId::new(1)).unwrap();
        assert_eq!(item.name, "Cappuccino");
        assert_eq!(item.category, Category::Coffee);
        assert_eq!(item.unit_price.rupees(), 180);

        assert!(catalog.get(ItemId::new(999)).is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::standard();
        let coffee: Vec<_> = catalog.by_category(Category::Coffee).collect();
        assert_eq!(coffee.len(), 4);
        assert!(coffee.iter().all(|i| i.category == Category::Coffee));
        // Menu order preserved within the category.
        assert_eq!(coffee[0].name, "Cappuccino");
        assert_eq!(coffee[3].name, "Americano");
    }

    #[test]
    fn test_every_category_is_stocked() {
        let catalog = Catalog::standard();
        for category in Category::ALL {
            assert!(
                catalog.by_category(category).next().is_some(),
                "no items in {category}"
            );
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Coffee.to_string(), "Coffee");
        assert_eq!(Category::Desserts.to_string(), "Desserts");
    }

    #[test]
    fn test_catalog_item_serialization() {
        let item = CatalogItem::new(7u32, "Croissant", Category::Snacks, Money::from_rupees(150));
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
