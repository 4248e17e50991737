use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::compose::compose;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateProduct, ListParams, ProductCreated, ProductDocument, ProductPage};
use crate::query::build_list_query;
use crate::repository::ProductRepository;

/// Catalog business logic over a [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate the request, compose the document bundle and persist it
    /// atomically. The returned id is the composed product id.
    pub async fn create_product(&self, request: CreateProduct) -> CatalogResult<ProductCreated> {
        request
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let bundle = compose(request);
        let created = self.repository.create(bundle).await?;

        info!(product_id = %created.id, "Product created");
        Ok(created)
    }

    /// Fetch one page of products together with the total count.
    pub async fn list_products(&self, params: ListParams) -> CatalogResult<ProductPage> {
        self.repository.list(build_list_query(&params)).await
    }

    /// Fetch a single product by id.
    pub async fn get_product(&self, id: &str) -> CatalogResult<ProductDocument> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn request(name: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: None,
            price: Some(100.0),
            unit: None,
            vat: None,
            tax: None,
            th: None,
            en: None,
        }
    }

    #[tokio::test]
    async fn test_create_product_passes_composed_bundle() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_create()
            .withf(|bundle| {
                bundle.product.name == "Widget"
                    && bundle.price.is_some()
                    && bundle.languages.len() == 1
            })
            .times(1)
            .returning(|bundle| {
                Ok(ProductCreated {
                    id: bundle.product.id,
                })
            });

        let service = CatalogService::new(repository);
        let created = service.create_product(request("Widget")).await.unwrap();
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_product_rejects_empty_name() {
        let mut repository = MockProductRepository::new();
        repository.expect_create().times(0);

        let service = CatalogService::new(repository);
        let result = service.create_product(request("")).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_products_translates_params() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_list()
            .withf(|query| query.limit == 5 && query.skip == 5)
            .times(1)
            .returning(|_| {
                Ok(ProductPage {
                    data: vec![],
                    total: 0,
                })
            });

        let service = CatalogService::new(repository);
        let params = ListParams {
            page: Some("2".to_string()),
            page_size: Some("5".to_string()),
            ..Default::default()
        };
        let page = service.list_products(params).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_get_product_maps_missing_to_not_found() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_get_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(repository);
        let result = service.get_product("missing").await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }
}
