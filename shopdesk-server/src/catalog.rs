//! In-memory product catalog
//!
//! Records keep insertion order. Price lookups scan front to back and the
//! first match wins, since prices are not unique. Every record also gets a
//! catalog-assigned id that is never reused.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{NewProduct, Product};

/// Catalog shared between handlers
pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// Products loaded by [`Catalog::seeded`]
const SEED_PRODUCTS: &[(&str, i64, &str)] = &[
    ("Laptop", 45000, "High-performance laptop for work and gaming"),
    ("Smartphone", 15000, "Latest model smartphone with AMOLED display"),
    ("Headphones", 3000, "Wireless over-ear noise cancelling headphones"),
    ("Keyboard", 1200, "Mechanical keyboard with RGB lighting"),
    ("Monitor", 9000, "24-inch Full HD monitor for productivity"),
];

#[derive(Debug)]
pub struct Catalog {
    items: Vec<Product>,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Catalog with the five default products.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (name, price, description) in SEED_PRODUCTS {
            // Seed rows satisfy every product rule
            if let Ok(product) = NewProduct::new(name, *price, description) {
                catalog.insert(product);
            }
        }
        catalog
    }

    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All products, insertion order.
    pub fn list(&self) -> &[Product] {
        &self.items
    }

    /// Append a product and return the stored record.
    pub fn insert(&mut self, product: NewProduct) -> &Product {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Product::from_new(id, product));
        tracing::debug!(id, "product appended");
        &self.items[self.items.len() - 1]
    }

    fn position_by_price(&self, price: i64) -> Option<usize> {
        self.items.iter().position(|p| p.price == price)
    }

    fn position_by_id(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }

    /// First product with this price.
    pub fn find_by_price(&self, price: i64) -> Option<&Product> {
        self.position_by_price(price).map(|i| &self.items[i])
    }

    /// Overwrite the first product with this price. Its id is kept.
    pub fn update_by_price(&mut self, price: i64, product: NewProduct) -> Option<&Product> {
        let i = self.position_by_price(price)?;
        self.items[i].replace_with(product);
        Some(&self.items[i])
    }

    /// Remove the first product with this price.
    pub fn remove_by_price(&mut self, price: i64) -> Option<Product> {
        let i = self.position_by_price(price)?;
        Some(self.items.remove(i))
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.position_by_id(id).map(|i| &self.items[i])
    }

    pub fn update(&mut self, id: u64, product: NewProduct) -> Option<&Product> {
        let i = self.position_by_id(id)?;
        self.items[i].replace_with(product);
        Some(&self.items[i])
    }

    pub fn remove(&mut self, id: u64) -> Option<Product> {
        let i = self.position_by_id(id)?;
        Some(self.items.remove(i))
    }
}
