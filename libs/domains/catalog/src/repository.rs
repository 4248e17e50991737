use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    DocumentBundle, PriceDocument, PriceLanguageDocument, ProductCreated, ProductDocument,
    ProductLanguageDocument, ProductPage,
};
use crate::query::ListQuery;

/// Persistence contract for the catalog.
///
/// `create` takes a fully composed bundle and must persist it atomically:
/// either every document lands or none do.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, bundle: DocumentBundle) -> CatalogResult<ProductCreated>;

    async fn list(&self, query: ListQuery) -> CatalogResult<ProductPage>;

    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<ProductDocument>>;
}

#[derive(Debug, Default)]
struct Collections {
    products: Vec<ProductDocument>,
    prices: Vec<PriceDocument>,
    product_languages: Vec<ProductLanguageDocument>,
    price_languages: Vec<PriceLanguageDocument>,
}

/// In-memory repository for tests and local development.
///
/// Writes are applied under one lock after staging, so a failure leaves
/// every collection untouched, mirroring the transactional store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    collections: Arc<RwLock<Collections>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `create` fail before touching any collection.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Per-collection document counts: (product, price, productLanguage,
    /// priceLanguage).
    pub async fn document_counts(&self) -> (usize, usize, usize, usize) {
        let collections = self.collections.read().await;
        (
            collections.products.len(),
            collections.prices.len(),
            collections.product_languages.len(),
            collections.price_languages.len(),
        )
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalogStore {
    async fn create(&self, bundle: DocumentBundle) -> CatalogResult<ProductCreated> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CatalogError::Internal(
                "write failure injected".to_string(),
            ));
        }

        let id = bundle.product.id.clone();
        let mut collections = self.collections.write().await;
        collections.price_languages.extend(bundle.price_languages);
        if let Some(price) = bundle.price {
            collections.prices.push(price);
        }
        collections.product_languages.extend(bundle.languages);
        collections.products.push(bundle.product);

        Ok(ProductCreated { id })
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<ProductPage> {
        let collections = self.collections.read().await;
        let total = collections.products.len() as u64;

        let mut products: Vec<ProductDocument> = collections.products.clone();
        if let Some(sort) = &query.sort {
            if let Some((field, direction)) = sort.iter().next() {
                let ascending = direction.as_i32() == Some(1);
                if field == "name" {
                    products.sort_by(|a, b| {
                        if ascending {
                            a.name.cmp(&b.name)
                        } else {
                            b.name.cmp(&a.name)
                        }
                    });
                }
            }
        }

        let data = products
            .into_iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .collect();

        Ok(ProductPage { data, total })
    }

    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<ProductDocument>> {
        let collections = self.collections.read().await;
        Ok(collections.products.iter().find(|p| p.id == id).cloned())
    }
}
