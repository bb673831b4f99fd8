//! TrustLoop Core - Shared widget types library.
//!
//! This crate provides the types shared by all TrustLoop components:
//! - `embed` - Snippet, stylesheet and install-step generation
//! - `guide` - Installation guide web service
//! - `cli` - Command-line snippet tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file or
//! network I/O. Catalogs are parsed from strings the caller has already read.
//!
//! # Modules
//!
//! - [`types`] - Widget IDs, types, customization and generator input
//! - [`widget`] - Persisted widget records
//! - [`catalog`] - A tenant's widget list, parsed from YAML/JSON
//! - [`analytics`] - Click-through rates and catalog totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod catalog;
pub mod types;
pub mod widget;

pub use analytics::{CatalogSummary, Insight, PerformanceRating, WidgetPerformance};
pub use catalog::{CatalogError, WidgetCatalog};
pub use types::*;
pub use widget::Widget;
