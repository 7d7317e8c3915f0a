#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use catalog_products::{InfoProductDto, Product, ProductDto, ProductId};

/// Test data with named defaults; override fields with struct update syntax.
#[derive(Debug, Clone)]
pub struct ProductTestData {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Default for ProductTestData {
    fn default() -> Self {
        Self {
            id: "b8003c54-c22b-450a-a0d3-94b646150584".parse().unwrap(),
            name: "Продукт".to_string(),
            description: Some("Описание продукта".to_string()),
            price: Decimal::ONE,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        }
    }
}

impl ProductTestData {
    pub fn product(&self) -> Product {
        Product::restore(
            self.id,
            self.name.clone(),
            self.description.clone(),
            self.price,
            Some(self.created_at),
        )
    }

    pub fn dto(&self) -> ProductDto {
        ProductDto::new(self.name.clone(), self.description.clone(), self.price)
    }

    pub fn info(&self) -> InfoProductDto {
        InfoProductDto {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}
