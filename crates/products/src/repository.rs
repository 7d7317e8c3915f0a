//! Product storage abstractions.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use catalog_core::{DomainError, DomainResult, Entity};

use crate::product::{Product, ProductId};

/// Key/value store of products, keyed by id.
pub trait ProductRepository: Send + Sync {
    /// The stored product, or `None`. Absence is not an error.
    fn find_by_id(&self, id: &ProductId) -> Option<Product>;

    /// All stored products in insertion order; empty when nothing is stored.
    fn find_all(&self) -> Vec<Product>;

    /// Upsert. Assigns a fresh id when the product has none.
    ///
    /// # Errors
    /// - `InvalidArgument` when `product` is `None`.
    fn save(&self, product: Option<Product>) -> DomainResult<Product>;

    /// Remove the product if present; no-op otherwise.
    fn delete(&self, id: &ProductId);

    fn count(&self) -> usize {
        self.find_all().len()
    }

    fn contains(&self, id: &ProductId) -> bool {
        self.find_by_id(id).is_some()
    }
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: &ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Product> {
        (**self).find_all()
    }

    fn save(&self, product: Option<Product>) -> DomainResult<Product> {
        (**self).save(product)
    }

    fn delete(&self, id: &ProductId) {
        (**self).delete(id)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn contains(&self, id: &ProductId) -> bool {
        (**self).contains(id)
    }
}

/// In-memory, insertion-ordered product store.
///
/// A single lock guards the whole map, so id assignment and insert happen
/// atomically with respect to other callers.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<IndexMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single insert/remove, so a panicking holder cannot
    // leave the map half-updated; recovering the guard is sound.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<ProductId, Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<ProductId, Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: &ProductId) -> Option<Product> {
        self.read().get(id).cloned()
    }

    fn find_all(&self) -> Vec<Product> {
        self.read().values().cloned().collect()
    }

    fn save(&self, product: Option<Product>) -> DomainResult<Product> {
        let mut product =
            product.ok_or_else(|| DomainError::invalid_argument("product must be present"))?;

        let mut products = self.write();
        let id = product.id_or_assign(ProductId::new);
        products.insert(id, product.clone());
        tracing::trace!(product_id = %id, "product stored");

        Ok(product)
    }

    fn delete(&self, id: &ProductId) {
        if self.write().shift_remove(id).is_some() {
            tracing::trace!(product_id = %id, "product removed");
        }
    }

    fn count(&self) -> usize {
        self.read().len()
    }

    fn contains(&self, id: &ProductId) -> bool {
        self.read().contains_key(id)
    }
}
