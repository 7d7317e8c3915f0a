use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::{DomainError, Entity, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    /// Fresh, time-ordered identifier.
    pub fn new() -> Self {
        Self(EntityId::new())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(EntityId::from_uuid(uuid))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<EntityId>().map(Self)
    }
}

impl From<ProductId> for EntityId {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Catalog entity.
///
/// `id` stays `None` until the product is first saved and never changes
/// afterwards. `created_at` is stamped by the service on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    description: Option<String>,
    price: Decimal,
    created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// A product that has not been stored yet (no id, no timestamp).
    pub fn new(name: impl Into<String>, description: Option<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            price,
            created_at: None,
        }
    }

    /// Rebuild a product from known state, e.g. fixtures or an external copy.
    pub fn restore(
        id: ProductId,
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            description,
            price,
            created_at,
        }
    }

    /// Stamp the creation time.
    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Replace the business fields, keeping identity and creation time.
    pub(crate) fn overwrite(
        mut self,
        name: String,
        description: Option<String>,
        price: Decimal,
    ) -> Self {
        self.name = name;
        self.description = description;
        self.price = price;
        self
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }

    fn id_or_assign(&mut self, generate: impl FnOnce() -> Self::Id) -> Self::Id {
        *self.id.get_or_insert_with(generate)
    }
}
