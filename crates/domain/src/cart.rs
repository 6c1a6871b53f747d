//! The shopping-cart aggregate for a single in-progress order.

use common::ItemId;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::money::{Money, TaxRate};

/// A line in the cart: one catalog item at some quantity.
///
/// Name and unit price are denormalized snapshots taken when the item is
/// first added, so a later catalog change cannot reprice an open cart.
/// Invariant: `quantity >= 1`; a line that would reach 0 is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog item this line refers to.
    pub item_id: ItemId,

    /// Item name at the time of adding.
    pub name: String,

    /// Unit price at the time of adding.
    pub unit_price: Money,

    /// Quantity ordered, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Returns the total for this line (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Derived bill amounts for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all line totals.
    pub subtotal: Money,

    /// Tax on the subtotal, rounded half-up to the whole rupee.
    pub tax: Money,

    /// Subtotal plus tax.
    pub total: Money,
}

/// Accumulates catalog items for one in-progress order and derives the
/// bill amounts.
///
/// Lines are kept in insertion order, and ids are unique within the cart
/// (adding an existing item merges into its line). Created empty when an
/// order-taking session starts; reset on admission or explicit cancel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    tax_rate: TaxRate,
}

impl Cart {
    /// Creates an empty cart taxed at the given rate.
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            lines: Vec::new(),
            tax_rate,
        }
    }

    /// Returns the cart's tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Adds one unit of a catalog item.
    ///
    /// If a line for the item already exists its quantity is incremented;
    /// otherwise a new line is appended. Never fails.
    pub fn add_item(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: 1,
            });
        }
    }

    /// Adjusts a line's quantity by a signed delta, clamping at zero.
    ///
    /// A line that reaches zero is removed. An absent id is a non-event,
    /// not an error: the call is a silent no-op.
    pub fn adjust_quantity(&mut self, item_id: ItemId, delta: i32) {
        let Some(index) = self.lines.iter().position(|l| l.item_id == item_id) else {
            return;
        };

        let line = &mut self.lines[index];
        let new_quantity = (i64::from(line.quantity) + i64::from(delta)).max(0) as u32;
        if new_quantity == 0 {
            self.lines.remove(index);
        } else {
            line.quantity = new_quantity;
        }
    }

    /// Removes a line unconditionally; no-op if the id is absent.
    pub fn remove_item(&mut self, item_id: ItemId) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for an item, if present.
    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Computes the bill amounts for the current lines.
    ///
    /// Pure and recomputed on every call, so it can never go stale against
    /// a mutation.
    pub fn totals(&self) -> CartTotals {
        let subtotal: Money = self.lines.iter().map(CartLine::line_total).sum();
        let tax = self.tax_rate.apply(subtotal);
        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(TaxRate::STANDARD_GST)
    }
}
