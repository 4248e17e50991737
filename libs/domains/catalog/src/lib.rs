//! Catalog Domain
//!
//! This module provides the product catalog: list/get/create operations for
//! products with per-language and per-currency price/name/description
//! variants, persisted as a denormalized multi-collection document set.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (thin adapters)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, composition, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB/in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Request contract, document types
//! └─────────────┘
//! ```
//!
//! The write path expands one create request into a document bundle
//! (product, price, productLanguage[], priceLanguage[]) via the pure
//! [`compose`] function, then persists the bundle in a single MongoDB
//! transaction. The read path builds filter/sort/pagination queries with
//! [`query::build_list_query`] and executes them transaction-free.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryCatalogStore,
//!     service::CatalogService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryCatalogStore::new();
//! let service = CatalogService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod compose;
pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod mongo;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use compose::compose;
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, DocumentBundle, ListParams, LocalizedOverride, PriceDocument,
    PriceLanguageDocument, ProductCreated, ProductDocument, ProductLanguageDocument, ProductPage,
};
pub use mongo::MongoCatalogRepository;
pub use query::{ListQuery, build_get_query, build_list_query};
pub use repository::{InMemoryCatalogStore, ProductRepository};
pub use service::CatalogService;
