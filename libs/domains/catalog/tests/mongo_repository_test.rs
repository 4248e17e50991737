//! MongoDB repository tests for the catalog domain
//!
//! These run against a real single-node replica set container and cover the
//! transactional write path end to end, including rollback. They are ignored
//! by default because they require Docker.
//!
//! Run with: cargo test -p domain-catalog --test mongo_repository_test -- --ignored

use domain_catalog::*;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use test_utils::{TestDataBuilder, TestMongo};

fn request(name: &str, price: Option<f64>, thai: bool) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        price,
        unit: None,
        vat: None,
        tax: None,
        th: thai.then(|| LocalizedOverride {
            name: format!("{name} (th)"),
            description: None,
            price: None,
            unit: None,
            vat: None,
            tax: None,
        }),
        en: None,
    }
}

async fn count(mongo: &TestMongo, db: &str, collection: &str) -> u64 {
    mongo
        .client()
        .database(db)
        .collection::<Document>(collection)
        .count_documents(doc! {})
        .await
        .unwrap()
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_persists_all_four_collections() {
    let mongo = TestMongo::new().await;
    let repository = MongoCatalogRepository::new(mongo.client());
    let service = CatalogService::new(repository);
    let builder = TestDataBuilder::from_test_name("mongo_create_all");

    let name = builder.name("product", "main");
    let created = service
        .create_product(request(&name, Some(100.0), true))
        .await
        .unwrap();

    assert_eq!(count(&mongo, "product", "product").await, 1);
    assert_eq!(count(&mongo, "product", "price").await, 1);
    assert_eq!(count(&mongo, "productLanguage", "productLanguage").await, 2);
    assert_eq!(count(&mongo, "productLanguage", "priceLanguage").await, 2);

    let product = service.get_product(&created.id).await.unwrap();
    assert_eq!(product.name, name);
    assert_eq!(product.price.unwrap().value, Some(100.0));
    assert_eq!(product.language.unwrap().len(), 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_without_price_skips_price_collections() {
    let mongo = TestMongo::new().await;
    let repository = MongoCatalogRepository::new(mongo.client());
    let service = CatalogService::new(repository);

    service
        .create_product(request("Widget", None, false))
        .await
        .unwrap();

    assert_eq!(count(&mongo, "product", "product").await, 1);
    assert_eq!(count(&mongo, "product", "price").await, 0);
    assert_eq!(count(&mongo, "productLanguage", "productLanguage").await, 1);
    assert_eq!(count(&mongo, "productLanguage", "priceLanguage").await, 0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_failed_insert_rolls_back_every_collection() {
    let mongo = TestMongo::new().await;
    let repository = MongoCatalogRepository::new(mongo.client());

    let products = mongo
        .client()
        .database("product")
        .collection::<Document>("product");
    products
        .create_index(
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await
        .unwrap();

    // Pre-insert the product id so the final insert of the bundle hits the
    // unique index after the language and price documents already went in
    let bundle = compose(request("Widget", Some(100.0), true));
    products
        .insert_one(doc! { "id": &bundle.product.id, "name": "occupied" })
        .await
        .unwrap();

    let result = repository.create(bundle).await;
    assert!(matches!(result, Err(CatalogError::Database(_))));

    // Only the pre-inserted document survives; the transaction left nothing
    assert_eq!(count(&mongo, "product", "product").await, 1);
    assert_eq!(count(&mongo, "product", "price").await, 0);
    assert_eq!(count(&mongo, "productLanguage", "productLanguage").await, 0);
    assert_eq!(count(&mongo, "productLanguage", "priceLanguage").await, 0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_paginates_sorts_and_counts() {
    let mongo = TestMongo::new().await;
    let repository = MongoCatalogRepository::new(mongo.client());
    let service = CatalogService::new(repository);

    for name in ["banana", "apple", "cherry", "date", "elderberry"] {
        service
            .create_product(request(name, None, false))
            .await
            .unwrap();
    }

    let page = service
        .list_products(ListParams {
            page: Some("2".to_string()),
            page_size: Some("2".to_string()),
            sort: Some("name".to_string()),
            order: Some("asc".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    let names: Vec<&str> = page.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["cherry", "date"]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_get_by_id_returns_none_for_unknown() {
    let mongo = TestMongo::new().await;
    let repository = MongoCatalogRepository::new(mongo.client());

    let found = repository.get_by_id("does-not-exist").await.unwrap();
    assert_eq!(found, None);
}
