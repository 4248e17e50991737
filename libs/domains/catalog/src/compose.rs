//! Expansion of a create request into the denormalized document bundle.

use crate::id::new_id;
use crate::models::{
    CreateProduct, DocumentBundle, ENGLISH, LanguageRef, Money, PriceDocument,
    PriceLanguageDocument, PriceLanguageRef, PriceRef, ProductDocument, ProductLanguageDocument,
    THAI,
};

/// Fixed currency symbol attached to every present numeric amount
pub const CURRENCY_UNIT: &str = "฿";

/// Expand a create request into the full document set.
///
/// Pure function, no I/O. Rules:
/// - the English language document is always produced, falling back to the
///   base `name`/`description` when no `en` override is supplied;
/// - a Thai document is produced only when `th` is present, verbatim;
/// - price, price-language documents and the price back-reference exist iff
///   the request carries a numeric `price`;
/// - every produced price-language is appended to the price's `language`
///   back-reference list as it is built, Thai before English.
///
/// The returned bundle is self-consistent; no partial bundle is ever
/// produced.
pub fn compose(request: CreateProduct) -> DocumentBundle {
    let english_name = request
        .en
        .as_ref()
        .map(|en| en.name.clone())
        .unwrap_or_else(|| request.name.clone());
    let english_description = request
        .en
        .as_ref()
        .and_then(|en| en.description.clone())
        .or_else(|| request.description.clone());

    let mut languages = vec![ProductLanguageDocument {
        id: new_id(),
        language_code: ENGLISH.to_string(),
        name: english_name.clone(),
        description: english_description.clone(),
    }];

    if let Some(th) = &request.th {
        languages.push(ProductLanguageDocument {
            id: new_id(),
            language_code: THAI.to_string(),
            name: th.name.clone(),
            description: th.description.clone(),
        });
    }

    let mut price_languages = Vec::new();
    let price = request.price.map(|value| {
        let mut price_doc = PriceDocument {
            id: new_id(),
            value: Some(value),
            unit: Some(CURRENCY_UNIT.to_string()),
            vat: money(request.vat),
            tax: money(request.tax),
            language: Some(Vec::new()),
        };

        if let Some(th) = &request.th {
            let thai = PriceLanguageDocument {
                id: new_id(),
                language_code: THAI.to_string(),
                name: Some(th.name.clone()),
                description: th.description.clone(),
                unit: th.unit.clone(),
                price: th.price,
                vat: money(request.vat),
                tax: money(request.tax),
            };
            append_back_reference(&mut price_doc, &thai);
            price_languages.push(thai);
        }

        let english = PriceLanguageDocument {
            id: new_id(),
            language_code: ENGLISH.to_string(),
            name: Some(english_name.clone()),
            description: english_description.clone(),
            unit: request
                .en
                .as_ref()
                .and_then(|en| en.unit.clone())
                .or_else(|| Some(CURRENCY_UNIT.to_string())),
            price: request.en.as_ref().and_then(|en| en.price).or(Some(value)),
            vat: money(request.vat),
            tax: money(request.tax),
        };
        append_back_reference(&mut price_doc, &english);
        price_languages.push(english);

        price_doc
    });

    let product = ProductDocument {
        id: new_id(),
        name: request.name,
        description: request.description,
        price: price.as_ref().map(|p| PriceRef {
            id: p.id.clone(),
            value: p.value,
        }),
        language: Some(
            languages
                .iter()
                .map(|lang| LanguageRef {
                    id: lang.id.clone(),
                    language_code: lang.language_code.clone(),
                    name: lang.name.clone(),
                    description: lang.description.clone(),
                })
                .collect(),
        ),
    };

    DocumentBundle {
        product,
        price,
        languages,
        price_languages,
    }
}

fn money(value: Option<f64>) -> Option<Money> {
    value.map(|v| Money {
        unit: Some(CURRENCY_UNIT.to_string()),
        value: Some(v),
    })
}

fn append_back_reference(price: &mut PriceDocument, lang: &PriceLanguageDocument) {
    price
        .language
        .get_or_insert_with(Vec::new)
        .push(PriceLanguageRef {
            id: lang.id.clone(),
            language_code: lang.language_code.clone(),
            name: lang.name.clone(),
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedOverride;
    use std::collections::HashSet;

    fn base_request() -> CreateProduct {
        CreateProduct {
            name: "Product 1".to_string(),
            description: None,
            price: None,
            unit: None,
            vat: None,
            tax: None,
            th: None,
            en: None,
        }
    }

    fn thai_override() -> LocalizedOverride {
        LocalizedOverride {
            name: "สินค้า 1".to_string(),
            description: Some("คำอธิบาย".to_string()),
            price: None,
            unit: None,
            vat: None,
            tax: None,
        }
    }

    #[test]
    fn test_priced_product_without_thai() {
        let bundle = compose(CreateProduct {
            price: Some(100.0),
            ..base_request()
        });

        let price = bundle.price.expect("price document");
        assert_eq!(price.value, Some(100.0));
        assert_eq!(price.unit.as_deref(), Some("฿"));
        assert_eq!(price.vat, None);
        assert_eq!(price.tax, None);

        assert_eq!(bundle.languages.len(), 1);
        assert_eq!(bundle.languages[0].language_code, "en");
        assert_eq!(bundle.languages[0].name, "Product 1");

        assert_eq!(bundle.price_languages.len(), 1);
        assert_eq!(bundle.price_languages[0].language_code, "en");
        assert_eq!(bundle.price_languages[0].name.as_deref(), Some("Product 1"));
        assert_eq!(bundle.price_languages[0].price, Some(100.0));
    }

    #[test]
    fn test_priced_product_with_thai_variant() {
        let bundle = compose(CreateProduct {
            price: Some(100.0),
            th: Some(thai_override()),
            ..base_request()
        });

        assert_eq!(bundle.languages.len(), 2);
        let thai = &bundle.languages[1];
        assert_eq!(thai.language_code, "th");
        assert_eq!(thai.name, "สินค้า 1");
        assert_eq!(thai.description.as_deref(), Some("คำอธิบาย"));

        // Thai price language first, then English
        assert_eq!(bundle.price_languages.len(), 2);
        assert_eq!(bundle.price_languages[0].language_code, "th");
        assert_eq!(bundle.price_languages[1].language_code, "en");
    }

    #[test]
    fn test_unpriced_product_has_no_price_documents() {
        let bundle = compose(base_request());

        assert_eq!(bundle.price, None);
        assert!(bundle.price_languages.is_empty());
        assert_eq!(bundle.product.price, None);
        // English product language still exists
        assert_eq!(bundle.languages.len(), 1);
    }

    #[test]
    fn test_english_falls_back_to_base_fields() {
        let bundle = compose(CreateProduct {
            description: Some("base description".to_string()),
            price: Some(50.0),
            ..base_request()
        });

        assert_eq!(bundle.languages[0].name, "Product 1");
        assert_eq!(
            bundle.languages[0].description.as_deref(),
            Some("base description")
        );
        assert_eq!(
            bundle.price_languages[0].description.as_deref(),
            Some("base description")
        );
    }

    #[test]
    fn test_english_override_wins_over_base_fields() {
        let bundle = compose(CreateProduct {
            description: Some("base description".to_string()),
            price: Some(50.0),
            en: Some(LocalizedOverride {
                name: "Override".to_string(),
                description: Some("override description".to_string()),
                price: Some(60.0),
                unit: Some("$".to_string()),
                vat: None,
                tax: None,
            }),
            ..base_request()
        });

        assert_eq!(bundle.languages[0].name, "Override");
        assert_eq!(
            bundle.languages[0].description.as_deref(),
            Some("override description")
        );
        let en_price = &bundle.price_languages[0];
        assert_eq!(en_price.price, Some(60.0));
        assert_eq!(en_price.unit.as_deref(), Some("$"));
        // The base product keeps its own name
        assert_eq!(bundle.product.name, "Product 1");
    }

    #[test]
    fn test_thai_fields_have_no_fallback() {
        let bundle = compose(CreateProduct {
            description: Some("base description".to_string()),
            price: Some(50.0),
            th: Some(LocalizedOverride {
                name: "สินค้า".to_string(),
                description: None,
                price: None,
                unit: None,
                vat: None,
                tax: None,
            }),
            ..base_request()
        });

        let thai_price = &bundle.price_languages[0];
        assert_eq!(thai_price.language_code, "th");
        assert_eq!(thai_price.description, None);
        assert_eq!(thai_price.price, None);
        assert_eq!(thai_price.unit, None);
    }

    #[test]
    fn test_unit_assigned_exactly_when_value_present() {
        let bundle = compose(CreateProduct {
            price: Some(100.0),
            vat: Some(7.0),
            ..base_request()
        });

        let price = bundle.price.unwrap();
        assert_eq!(
            price.vat,
            Some(Money {
                unit: Some("฿".to_string()),
                value: Some(7.0),
            })
        );
        assert_eq!(price.tax, None);
    }

    #[test]
    fn test_product_embeds_price_and_language_snapshots() {
        let bundle = compose(CreateProduct {
            price: Some(100.0),
            th: Some(thai_override()),
            ..base_request()
        });

        let price = bundle.price.as_ref().unwrap();
        let price_ref = bundle.product.price.as_ref().unwrap();
        assert_eq!(price_ref.id, price.id);
        assert_eq!(price_ref.value, Some(100.0));

        let language_refs = bundle.product.language.as_ref().unwrap();
        assert_eq!(language_refs.len(), 2);
        for (lang_ref, lang) in language_refs.iter().zip(&bundle.languages) {
            assert_eq!(lang_ref.id, lang.id);
            assert_eq!(lang_ref.name, lang.name);
        }

        let back_refs = price.language.as_ref().unwrap();
        assert_eq!(back_refs.len(), 2);
        for (back_ref, lang) in back_refs.iter().zip(&bundle.price_languages) {
            assert_eq!(back_ref.id, lang.id);
            assert_eq!(back_ref.language_code, lang.language_code);
        }
    }

    #[test]
    fn test_all_ids_in_bundle_are_distinct() {
        let bundle = compose(CreateProduct {
            price: Some(100.0),
            th: Some(thai_override()),
            ..base_request()
        });

        let mut ids: Vec<&str> = vec![&bundle.product.id];
        ids.push(&bundle.price.as_ref().unwrap().id);
        ids.extend(bundle.languages.iter().map(|l| l.id.as_str()));
        ids.extend(bundle.price_languages.iter().map(|l| l.id.as_str()));

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
