use std::collections::HashSet;

use crate::error::Result;
use crate::models::food::{CatalogRecord, FoodItem};

/// An ordered, duplicate-free list of food items for one meal.
///
/// Items are kept grouped by category: categories in first-seen order, items
/// within a category in insertion order. That flattened order is what the
/// selector iterates, so it decides tie-breaks between equal optima.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
    keys: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from unvalidated records.
    ///
    /// Fails on the first record with an invalid calorie cost. Repeated names
    /// are dropped (first occurrence wins); names are compared exactly.
    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut catalog = Self::new();
        for record in records {
            let item = record.into_item()?;
            catalog.push(item);
        }
        Ok(catalog)
    }

    /// Build a catalog from already-validated items.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = FoodItem>,
    {
        let mut catalog = Self::new();
        for item in items {
            catalog.push(item);
        }
        catalog
    }

    /// Add an item after the last item of its category.
    ///
    /// Returns false (and leaves the catalog unchanged) if an item with the
    /// exact same name is already present. "Tea" and "tea" are distinct items.
    pub fn push(&mut self, item: FoodItem) -> bool {
        if self.keys.contains(&item.name) {
            tracing::warn!(
                name = %item.name,
                category = %item.category,
                "duplicate food item ignored"
            );
            return false;
        }
        self.keys.insert(item.name.clone());

        match self
            .items
            .iter()
            .rposition(|existing| existing.category == item.category)
        {
            Some(idx) => self.items.insert(idx + 1, item),
            None => self.items.push(item),
        }
        true
    }

    /// Items in selection order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Get an item by name. An exact match wins; otherwise the first
    /// case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        if let Some(item) = self.items.iter().find(|item| item.name == name) {
            return Some(item);
        }
        let key = name.trim().to_lowercase();
        self.items.iter().find(|item| item.key() == key)
    }

    /// Items grouped by category, in catalog order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&FoodItem>)> {
        let mut groups: Vec<(&str, Vec<&FoodItem>)> = Vec::new();
        for item in &self.items {
            if let Some((category, members)) = groups.last_mut() {
                if *category == item.category.as_str() {
                    members.push(item);
                    continue;
                }
            }
            groups.push((item.category.as_str(), vec![item]));
        }
        groups
    }

    /// Sum of every item's calories.
    pub fn total_calories(&self) -> u64 {
        self.items.iter().map(|item| item.calories as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
