//! CLI command implementations.

pub mod catalog;
pub mod render;

use trustloop_embed::{EmbedConfig, Escaping, WidgetCodeGenerator};

/// Build a generator from `TRUSTLOOP_*` settings.
///
/// `--escape` turns escaping on even when the environment leaves it off.
///
/// # Errors
///
/// Returns an error if a generator setting is invalid.
pub fn generator(escape: bool) -> Result<WidgetCodeGenerator, trustloop_embed::ConfigError> {
    let mut config = EmbedConfig::from_env()?;
    if escape {
        config = config.with_escaping(Escaping::Html);
    }
    Ok(WidgetCodeGenerator::new(config))
}
