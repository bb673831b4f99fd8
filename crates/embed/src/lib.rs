//! TrustLoop Embed - Widget snippet generation.
//!
//! Turns a [`WidgetConfig`](trustloop_core::WidgetConfig) into the text a
//! merchant pastes into their storefront:
//!
//! - a platform-agnostic HTML embed with an inline bootstrap script
//! - a Liquid snippet specific to the widget type, registering the widget in
//!   `window.TrustLoopConfig.widgets`
//! - a React component with mount/unmount lifecycle
//! - the widget stylesheet, install steps and theme placement
//!
//! Snippets load the runtime from a CDN (`widget.js`/`widget.css`) that
//! exposes `TrustLoop.init(id)` and `TrustLoop.destroy(id)`. Everything is
//! rendered from compiled `askama` templates under `templates/`.
//!
//! # Example
//!
//! ```rust,ignore
//! let generator = WidgetCodeGenerator::default();
//! let config = WidgetConfig::new("w42", WidgetType::Popup, "acme.myshopify.com");
//! let artifact = generator.generate_artifact(&config, EmbedFormat::Liquid)?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod artifact;
pub mod attrs;
pub mod config;
pub mod error;
pub mod escaping;
pub mod generator;
pub mod guide;
pub mod instructions;
mod templates;

pub use artifact::{EmbedFormat, GeneratedArtifact, TemplatedEmbed};
pub use config::{ConfigError, EmbedConfig};
pub use error::EmbedError;
pub use escaping::Escaping;
pub use generator::WidgetCodeGenerator;
pub use guide::{FormatSnippet, InstallGuide};
pub use instructions::{GENERIC_STEPS, Placement, installation_steps, steps_for};
