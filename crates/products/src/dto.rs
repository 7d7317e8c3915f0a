//! Boundary shapes of the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::ProductId;

/// Request shape for create/update. Identity and timestamp are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
}

impl ProductDto {
    pub fn new(name: impl Into<String>, description: Option<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description,
            price,
        }
    }
}

/// Read projection of a stored product (no creation time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoProductDto {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_dto_accepts_missing_description() {
        let dto: ProductDto = serde_json::from_value(json!({
            "name": "Продукт",
            "price": "1.50"
        }))
        .unwrap();

        assert_eq!(dto.description, None);
        assert_eq!(dto.price, Decimal::new(150, 2));
    }

    #[test]
    fn info_dto_serializes_id_as_plain_uuid() {
        let id: ProductId = "b8003c54-c22b-450a-a0d3-94b646150584".parse().unwrap();
        let dto = InfoProductDto {
            id: Some(id),
            name: "Продукт".to_string(),
            description: None,
            price: Decimal::ONE,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["id"], json!("b8003c54-c22b-450a-a0d3-94b646150584"));
        assert_eq!(value["name"], json!("Продукт"));
        assert!(value.get("createdAt").is_none());
    }
}

