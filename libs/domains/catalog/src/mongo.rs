//! MongoDB-backed repository.
//!
//! Documents span two logical databases, `product` and `productLanguage`,
//! so the write path uses a multi-document transaction against a replica
//! set rather than per-collection writes.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, ClientSession, Collection};
use tracing::warn;

use crate::error::CatalogResult;
use crate::models::{
    DocumentBundle, PriceDocument, PriceLanguageDocument, ProductCreated, ProductDocument,
    ProductLanguageDocument, ProductPage,
};
use crate::query::{ListQuery, build_get_query};
use crate::repository::ProductRepository;

const PRODUCT_DB: &str = "product";
const PRODUCT_LANGUAGE_DB: &str = "productLanguage";

const PRODUCT_COLLECTION: &str = "product";
const PRICE_COLLECTION: &str = "price";
const PRODUCT_LANGUAGE_COLLECTION: &str = "productLanguage";
const PRICE_LANGUAGE_COLLECTION: &str = "priceLanguage";

/// Repository over the four catalog collections.
#[derive(Debug, Clone)]
pub struct MongoCatalogRepository {
    client: Client,
}

impl MongoCatalogRepository {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn products(&self) -> Collection<ProductDocument> {
        self.client
            .database(PRODUCT_DB)
            .collection(PRODUCT_COLLECTION)
    }

    fn prices(&self) -> Collection<PriceDocument> {
        self.client.database(PRODUCT_DB).collection(PRICE_COLLECTION)
    }

    fn product_languages(&self) -> Collection<ProductLanguageDocument> {
        self.client
            .database(PRODUCT_LANGUAGE_DB)
            .collection(PRODUCT_LANGUAGE_COLLECTION)
    }

    fn price_languages(&self) -> Collection<PriceLanguageDocument> {
        self.client
            .database(PRODUCT_LANGUAGE_DB)
            .collection(PRICE_LANGUAGE_COLLECTION)
    }

    /// Insert the bundle inside the open transaction.
    ///
    /// Insertion order is fixed: price languages, price, product languages,
    /// product. Children land before the documents that reference them.
    async fn insert_bundle(
        &self,
        session: &mut ClientSession,
        bundle: &DocumentBundle,
    ) -> Result<(), mongodb::error::Error> {
        if !bundle.price_languages.is_empty() {
            self.price_languages()
                .insert_many(&bundle.price_languages)
                .session(&mut *session)
                .await?;
        }

        if let Some(price) = &bundle.price {
            self.prices()
                .insert_one(price)
                .session(&mut *session)
                .await?;
        }

        self.product_languages()
            .insert_many(&bundle.languages)
            .session(&mut *session)
            .await?;

        self.products()
            .insert_one(&bundle.product)
            .session(&mut *session)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoCatalogRepository {
    /// Persist the bundle atomically.
    ///
    /// On any insert failure the transaction is aborted and the original
    /// error is returned unchanged. The session is released when it drops,
    /// on every path.
    async fn create(&self, bundle: DocumentBundle) -> CatalogResult<ProductCreated> {
        let id = bundle.product.id.clone();

        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        match self.insert_bundle(&mut session, &bundle).await {
            Ok(()) => {
                session.commit_transaction().await?;
                Ok(ProductCreated { id })
            }
            Err(err) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    warn!(error = %abort_err, "Failed to abort product create transaction");
                }
                Err(err.into())
            }
        }
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<ProductPage> {
        let products = self.products();

        let (data, total) = futures::try_join!(
            async {
                let mut find = products
                    .find(query.filter.clone())
                    .skip(query.skip)
                    .limit(query.limit);
                if let Some(sort) = query.sort.clone() {
                    find = find.sort(sort);
                }
                find.await?.try_collect::<Vec<ProductDocument>>().await
            },
            async { products.count_documents(query.filter.clone()).await },
        )?;

        Ok(ProductPage { data, total })
    }

    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<ProductDocument>> {
        Ok(self.products().find_one(build_get_query(id)).await?)
    }
}
