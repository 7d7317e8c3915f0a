//! Field validation for products and incoming DTOs.
//!
//! # Responsibility
//! - Pure predicates: no side effects, no errors, a plain `bool` per check.
//! - Report which fields failed so the service can reject with context.
//!
//! # Invariants
//! - Patterns are anchored full matches; lengths count Unicode scalar values.
//! - A name must be present and non-blank; a description may be absent or blank.
//! - A price must be present and strictly positive.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult};

use crate::dto::ProductDto;
use crate::product::Product;

/// Cyrillic letters (including `ё`/`Ё`) and the ASCII space.
pub const CYRILLIC_ALPHABET: &str = "а-яА-ЯёЁ ";
pub const NAME_LENGTH: RangeInclusive<usize> = 5..=10;
pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 10..=30;

static DEFAULT_PATTERNS: Lazy<Patterns> = Lazy::new(|| {
    Patterns::compile(&ValidationRules::default()).expect("default validation rules compile")
});

/// Locale-specific formatting rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Body of a regex character class, without the brackets.
    pub alphabet: String,
    pub name_length: RangeInclusive<usize>,
    pub description_length: RangeInclusive<usize>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            alphabet: CYRILLIC_ALPHABET.to_string(),
            name_length: NAME_LENGTH,
            description_length: DESCRIPTION_LENGTH,
        }
    }
}

#[derive(Debug, Clone)]
struct Patterns {
    name: Regex,
    description: Regex,
}

impl Patterns {
    fn compile(rules: &ValidationRules) -> DomainResult<Self> {
        Ok(Self {
            name: bounded(&rules.alphabet, &rules.name_length)?,
            description: bounded(&rules.alphabet, &rules.description_length)?,
        })
    }
}

fn bounded(alphabet: &str, length: &RangeInclusive<usize>) -> DomainResult<Regex> {
    if length.is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "empty length range {}..={}",
            length.start(),
            length.end()
        )));
    }
    let pattern = format!("^[{alphabet}]{{{},{}}}$", length.start(), length.end());
    Regex::new(&pattern)
        .map_err(|e| DomainError::invalid_argument(format!("invalid alphabet `{alphabet}`: {e}")))
}

/// A validated field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    CreatedAt,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::CreatedAt => "createdAt",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the validator knows how to check as a whole.
pub trait Validatable {
    /// Every field of `self` that fails its check, in declaration order.
    fn violations(&self, validator: &ProductValidator) -> Vec<Field>;
}

/// Stateless product validator.
#[derive(Debug, Clone)]
pub struct ProductValidator {
    patterns: Patterns,
}

impl Default for ProductValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductValidator {
    /// Validator with the default (Cyrillic) rules.
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Validator with custom rules.
    ///
    /// # Errors
    /// - `InvalidArgument` when the alphabet is not a valid character class
    ///   body or a length range is empty.
    pub fn with_rules(rules: &ValidationRules) -> DomainResult<Self> {
        Ok(Self {
            patterns: Patterns::compile(rules)?,
        })
    }

    pub fn check_name(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) if !name.trim().is_empty() => self.patterns.name.is_match(name),
            _ => false,
        }
    }

    pub fn check_description(&self, description: Option<&str>) -> bool {
        match description {
            None => true,
            Some(d) if d.trim().is_empty() => true,
            Some(d) => self.patterns.description.is_match(d),
        }
    }

    pub fn check_price(&self, price: Option<Decimal>) -> bool {
        price.is_some_and(|p| p > Decimal::ZERO)
    }

    pub fn check_created(&self, created_at: Option<DateTime<Utc>>) -> bool {
        created_at.is_some()
    }

    /// `true` iff every field of `value` passes.
    pub fn check_validation<T: Validatable + ?Sized>(&self, value: &T) -> bool {
        value.violations(self).is_empty()
    }

    pub fn violations<T: Validatable + ?Sized>(&self, value: &T) -> Vec<Field> {
        value.violations(self)
    }
}

fn collect(checks: &[(Field, bool)]) -> Vec<Field> {
    checks
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| *field)
        .collect()
}

impl Validatable for ProductDto {
    fn violations(&self, validator: &ProductValidator) -> Vec<Field> {
        collect(&[
            (Field::Name, validator.check_name(Some(self.name.as_str()))),
            (
                Field::Description,
                validator.check_description(self.description.as_deref()),
            ),
            (Field::Price, validator.check_price(Some(self.price))),
        ])
    }
}

impl Validatable for Product {
    fn violations(&self, validator: &ProductValidator) -> Vec<Field> {
        collect(&[
            (Field::Name, validator.check_name(Some(self.name()))),
            (
                Field::Description,
                validator.check_description(self.description()),
            ),
            (Field::Price, validator.check_price(Some(self.price()))),
            (Field::CreatedAt, validator.check_created(self.created_at())),
        ])
    }
}
