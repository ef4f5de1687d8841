//! Forms for creating, editing and restocking products.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, Product, ProductSubmission};
use crate::domain::types::{CategoryName, ProductId, ProductName};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Product modal submission. The id is only present when editing.
pub struct ProductForm {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    pub quantity_in_stock: u32,
    /// `YYYY-MM-DD` as produced by a date input; empty means none.
    #[serde(default)]
    pub expiration_date: Option<String>,
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, FormError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FormError::InvalidDate),
        None => Ok(None),
    }
}

impl TryFrom<ProductForm> for ProductSubmission {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;
        // NaN compares false against the range bound, so check it here.
        if !form.unit_price.is_finite() {
            return Err(FormError::InvalidPrice);
        }

        let name = ProductName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let category = CategoryName::new(form.category).map_err(|_| FormError::InvalidCategory)?;
        let expiration_date = parse_date(form.expiration_date.as_deref())?;

        let new_product = NewProduct::new(
            name,
            category,
            form.unit_price,
            form.quantity_in_stock,
            expiration_date,
        );

        match form.id {
            Some(id) => {
                let id = ProductId::new(id).map_err(|_| FormError::InvalidProductId)?;
                Ok(ProductSubmission::Update(Product::from_new(id, new_product)))
            }
            None => Ok(ProductSubmission::Create(new_product)),
        }
    }
}

#[derive(Debug, Deserialize)]
/// Stock toggle button payload.
pub struct ToggleStockForm {
    pub in_stock: bool,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: Option<i64>) -> ProductForm {
        ProductForm {
            id,
            name: " Oat milk ".to_string(),
            category: "Dairy".to_string(),
            unit_price: 1.8,
            quantity_in_stock: 6,
            expiration_date: Some("2026-12-24".to_string()),
        }
    }

    #[test]
    fn form_with_id_becomes_update() {
        let submission = ProductSubmission::try_from(form(Some(4))).unwrap();
        match submission {
            ProductSubmission::Update(product) => {
                assert_eq!(product.id.get(), 4);
                assert_eq!(product.name.as_str(), "Oat milk");
                assert_eq!(product.expiration_date, NaiveDate::from_ymd_opt(2026, 12, 24));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn form_without_id_becomes_create() {
        let submission = ProductSubmission::try_from(form(None)).unwrap();
        assert!(!submission.is_update());
    }

    #[test]
    fn blank_date_is_none_and_bad_date_is_rejected() {
        let mut blank = form(None);
        blank.expiration_date = Some("  ".to_string());
        match ProductSubmission::try_from(blank).unwrap() {
            ProductSubmission::Create(product) => assert_eq!(product.expiration_date, None),
            other => panic!("expected create, got {other:?}"),
        }

        let mut bad = form(None);
        bad.expiration_date = Some("24/12/2026".to_string());
        assert!(matches!(
            ProductSubmission::try_from(bad),
            Err(FormError::InvalidDate)
        ));
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut negative = form(None);
        negative.unit_price = -1.0;
        assert!(matches!(
            ProductSubmission::try_from(negative),
            Err(FormError::Validation(_))
        ));

        let mut whitespace = form(None);
        whitespace.name = "   ".to_string();
        assert!(matches!(
            ProductSubmission::try_from(whitespace),
            Err(FormError::InvalidName)
        ));

        assert!(matches!(
            ProductSubmission::try_from(form(Some(0))),
            Err(FormError::InvalidProductId)
        ));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for price in [f64::NAN, f64::INFINITY] {
            let mut invalid = form(None);
            invalid.unit_price = price;
            assert!(matches!(
                ProductSubmission::try_from(invalid),
                Err(FormError::InvalidPrice)
            ));
        }
    }
}
