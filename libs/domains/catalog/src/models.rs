use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Language code for the always-present English variant
pub const ENGLISH: &str = "en";
/// Language code for the optional Thai variant
pub const THAI: &str = "th";

/// Validated product-creation request.
///
/// This is the typed contract the core operates on; the HTTP boundary
/// rejects malformed bodies before they reach the service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub vat: Option<f64>,
    pub tax: Option<f64>,
    #[validate(nested)]
    pub th: Option<LocalizedOverride>,
    #[validate(nested)]
    pub en: Option<LocalizedOverride>,
}

/// Per-language override block of a create request.
///
/// English overrides fall back to the base fields when absent; Thai
/// overrides are used verbatim.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LocalizedOverride {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub vat: Option<f64>,
    pub tax: Option<f64>,
}

/// Currency amount with its unit symbol.
///
/// `unit` is present exactly when `value` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Money {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Denormalized `{id, value}` snapshot of a product's price, captured at
/// write time. Not a live reference; future updates must re-denormalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Denormalized snapshot of a product-language document embedded in the
/// product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRef {
    pub id: String,
    pub language_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Back-reference from a price to one of its price-language children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceLanguageRef {
    pub id: String,
    pub language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Document persisted in `product.product`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDocument {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Vec<LanguageRef>>,
}

/// Document persisted in `product.price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceDocument {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Vec<PriceLanguageRef>>,
}

/// Document persisted in `productLanguage.productLanguage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductLanguageDocument {
    pub id: String,
    pub language_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Document persisted in `productLanguage.priceLanguage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceLanguageDocument {
    pub id: String,
    pub language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
}

/// Fully composed, self-consistent set of documents for one create call.
///
/// `price` and `price_languages` are populated iff the request carried a
/// numeric price; `languages` always holds at least the English entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentBundle {
    pub product: ProductDocument,
    pub price: Option<PriceDocument>,
    pub languages: Vec<ProductLanguageDocument>,
    pub price_languages: Vec<PriceLanguageDocument>,
}

/// Insert acknowledgment for a create call.
///
/// The id comes from the composed bundle, not from the database.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    pub id: String,
}

/// One page of products plus the total count under the same filter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<ProductDocument>,
    pub total: u64,
}

/// Raw list-query parameters as they arrive on the wire.
///
/// All fields are strings; parsing with defaults happens in the query
/// builder, never here.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}
