//! DTO <-> entity conversions. Purely structural; no validation here.

use crate::dto::{InfoProductDto, ProductDto};
use crate::product::Product;

#[derive(Debug, Default, Copy, Clone)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    /// New, unsaved entity. Identity and creation time are left unset.
    pub fn to_product(&self, dto: &ProductDto) -> Product {
        Product::new(dto.name.clone(), dto.description.clone(), dto.price)
    }

    pub fn to_info_product_dto(&self, product: &Product) -> InfoProductDto {
        InfoProductDto {
            id: product.product_id(),
            name: product.name().to_string(),
            description: product.description().map(str::to_string),
            price: product.price(),
        }
    }

    /// `product` with name/description/price taken from `dto`.
    pub fn merge(&self, product: Product, dto: &ProductDto) -> Product {
        product.overwrite(dto.name.clone(), dto.description.clone(), dto.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn dto() -> ProductDto {
        ProductDto::new(
            "Продукт",
            Some("Описание продукта".to_string()),
            Decimal::ONE,
        )
    }

    #[test]
    fn to_product_copies_fields_without_identity() {
        let product = ProductMapper.to_product(&dto());

        assert_eq!(product.product_id(), None);
        assert_eq!(product.created_at(), None);
        assert_eq!(product.name(), "Продукт");
        assert_eq!(product.description(), Some("Описание продукта"));
        assert_eq!(product.price(), Decimal::ONE);
    }

    #[test]
    fn to_info_product_dto_projects_stored_fields() {
        let id: ProductId = "b8003c54-c22b-450a-a0d3-94b646150584".parse().unwrap();
        let product = Product::restore(id, "Продукт", None, Decimal::TEN, Some(Utc::now()));

        let info = ProductMapper.to_info_product_dto(&product);

        assert_eq!(
            info,
            InfoProductDto {
                id: Some(id),
                name: "Продукт".to_string(),
                description: None,
                price: Decimal::TEN,
            }
        );
    }

    #[test]
    fn merge_overwrites_business_fields_only() {
        let id: ProductId = "b8003c54-c22b-450a-a0d3-94b646150584".parse().unwrap();
        let created = Utc.with_ymd_and_hms(2023, 10, 1, 8, 30, 0).unwrap();
        let stored = Product::restore(id, "Старый", None, Decimal::ONE, Some(created));
        let update = ProductDto::new("Новый товар", Some("Свежее описание".to_string()), Decimal::TEN);

        let merged = ProductMapper.merge(stored, &update);

        assert_eq!(merged.product_id(), Some(id));
        assert_eq!(merged.created_at(), Some(created));
        assert_eq!(merged.name(), "Новый товар");
        assert_eq!(merged.description(), Some("Свежее описание"));
        assert_eq!(merged.price(), Decimal::TEN);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: dto -> entity -> info dto keeps every business field.
            #[test]
            fn round_trip_preserves_business_fields(
                name in "\\PC{0,20}",
                description in proptest::option::of("\\PC{0,40}"),
                mantissa in any::<i64>(),
                scale in 0u32..10
            ) {
                let dto = ProductDto::new(name, description, Decimal::new(mantissa, scale));
                let info = ProductMapper.to_info_product_dto(&ProductMapper.to_product(&dto));

                prop_assert_eq!(info.id, None);
                prop_assert_eq!(info.name, dto.name);
                prop_assert_eq!(info.description, dto.description);
                prop_assert_eq!(info.price, dto.price);
            }
        }
    }
}
