//! Product use cases: validate -> map -> store -> project.

use catalog_core::{Clock, DomainError, DomainResult, SystemClock};

use crate::dto::{InfoProductDto, ProductDto};
use crate::mapper::ProductMapper;
use crate::product::ProductId;
use crate::repository::ProductRepository;
use crate::validator::ProductValidator;

const KIND: &str = "product";

/// Orchestrates validator, mapper and repository for each use case.
#[derive(Debug)]
pub struct ProductService<R, C = SystemClock> {
    repository: R,
    mapper: ProductMapper,
    validator: ProductValidator,
    clock: C,
}

impl<R: ProductRepository> ProductService<R> {
    /// Service with default validation rules and the wall clock.
    pub fn new(repository: R) -> Self {
        Self::with_parts(repository, ProductValidator::new(), SystemClock)
    }
}

impl<R, C> ProductService<R, C>
where
    R: ProductRepository,
    C: Clock,
{
    pub fn with_parts(repository: R, validator: ProductValidator, clock: C) -> Self {
        Self {
            repository,
            mapper: ProductMapper::new(),
            validator,
            clock,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// # Errors
    /// - `NotFound` when nothing is stored under `id`.
    pub fn get(&self, id: ProductId) -> DomainResult<InfoProductDto> {
        match self.repository.find_by_id(&id) {
            Some(product) => Ok(self.mapper.to_info_product_dto(&product)),
            None => {
                tracing::debug!(product_id = %id, "product not found");
                Err(DomainError::not_found(KIND, id))
            }
        }
    }

    pub fn get_all(&self) -> Vec<InfoProductDto> {
        self.repository
            .find_all()
            .iter()
            .map(|p| self.mapper.to_info_product_dto(p))
            .collect()
    }

    /// Store a new product and return its generated id.
    ///
    /// # Errors
    /// - `Validation` when any field of `dto` is rejected.
    pub fn create(&self, dto: &ProductDto) -> DomainResult<ProductId> {
        self.ensure_valid(dto)?;

        let product = self.mapper.to_product(dto).created(self.clock.now());
        let saved = self.repository.save(Some(product))?;
        let id = saved
            .product_id()
            .ok_or_else(|| DomainError::invalid_argument("repository returned product without id"))?;

        tracing::info!(product_id = %id, "product created");
        Ok(id)
    }

    /// Overwrite name/description/price of an existing product.
    ///
    /// # Errors
    /// - `Validation` when any field of `dto` is rejected (checked first).
    /// - `NotFound` when nothing is stored under `id`.
    pub fn update(&self, id: ProductId, dto: &ProductDto) -> DomainResult<()> {
        self.ensure_valid(dto)?;

        let existing = self.repository.find_by_id(&id).ok_or_else(|| {
            tracing::warn!(product_id = %id, "update of unknown product");
            DomainError::not_found(KIND, id)
        })?;

        let merged = self.mapper.merge(existing, dto);
        self.repository.save(Some(merged))?;

        tracing::info!(product_id = %id, "product updated");
        Ok(())
    }

    /// Idempotent; unknown ids are ignored.
    pub fn delete(&self, id: ProductId) {
        self.repository.delete(&id);
        tracing::info!(product_id = %id, "product deleted");
    }

    fn ensure_valid(&self, dto: &ProductDto) -> DomainResult<()> {
        let violations = self.validator.violations(dto);
        if violations.is_empty() {
            return Ok(());
        }

        let fields = violations
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(fields = %fields, "product rejected");
        Err(DomainError::validation(fields))
    }
}
