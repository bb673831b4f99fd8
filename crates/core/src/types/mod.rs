//! Core types for TrustLoop widgets.
//!
//! This module provides type-safe wrappers for the widget domain.

pub mod customization;
pub mod id;
pub mod shop_domain;
pub mod widget_config;
pub mod widget_type;

pub use customization::{CustomValue, Customization, JsNumber};
pub use id::WidgetId;
pub use shop_domain::{ShopDomain, ShopDomainError};
pub use widget_config::WidgetConfig;
pub use widget_type::*;
