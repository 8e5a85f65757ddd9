//! # Video Blob API
//!
//! A small HTTP service that accepts video uploads and stores them in an
//! Azure Blob Storage container, and lists what has been uploaded.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Upload rules (accepted types, size cap, key sanitization)
//! - **Application**: Use cases and the blob gateway port
//! - **Infrastructure**: Azure Blob Storage adapter on the Azure SDK clients
//! - **API**: HTTP handlers, middleware and OpenAPI docs
//!
//! ## Example Usage
//!
//! ```no_run
//! use video_blob_api::{api::create_router, application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let state = ApplicationBuilder::new(config).with_infrastructure()?.build();
//! let app = create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::value_objects;
