//! Products catalog module.
//!
//! Layered CRUD over the `Product` entity: the service validates incoming
//! DTOs, maps them to entities and delegates storage to a repository. No
//! layer calls back into a higher one.

pub mod dto;
pub mod mapper;
pub mod product;
pub mod repository;
pub mod service;
pub mod validator;

pub use dto::{InfoProductDto, ProductDto};
pub use mapper::ProductMapper;
pub use product::{Product, ProductId};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use validator::{Field, ProductValidator, Validatable, ValidationRules};

