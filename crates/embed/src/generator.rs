//! The widget code generator.

use askama::Template;
use trustloop_core::{CustomValue, Customization, WidgetConfig, WidgetType};

use crate::artifact::{EmbedFormat, GeneratedArtifact, TemplatedEmbed};
use crate::attrs::{component_props, data_attributes};
use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::instructions::installation_steps;
use crate::templates::{
    CarouselLiquid, CollectionLiquid, FloatingLiquid, GenericEmbed, PopupLiquid, ProductLiquid,
    ReactComponent, SnippetContext, ThankYouLiquid, WidgetStylesheet,
};

const DEFAULT_PRIMARY_COLOR: &str = "#005BD3";
const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
const DEFAULT_TEXT_COLOR: &str = "#000000";
const DEFAULT_BORDER_RADIUS: f64 = 8.0;
const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Turns widget configs into installable snippets.
///
/// Stateless apart from its configuration: every method is a pure function
/// of its arguments, so the same input always yields byte-identical output.
/// Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct WidgetCodeGenerator {
    config: EmbedConfig,
}

impl WidgetCodeGenerator {
    #[must_use]
    pub const fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Platform-agnostic HTML embed.
    ///
    /// A container carrying `data-*` attributes for the type, id, shop and
    /// every customization key, plus an inline script that initialises the
    /// runtime (loading it from the CDN first if needed).
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::Template` if rendering fails.
    pub fn generate_embed(&self, config: &WidgetConfig) -> Result<String, EmbedError> {
        let ctx = self.snippet_context(config);
        Ok(GenericEmbed { ctx: &ctx }.render()?)
    }

    /// Liquid snippet for the widget's type.
    ///
    /// Each type has its own template targeting the theme file it belongs
    /// in; the snippet registers the widget in
    /// `window.TrustLoopConfig.widgets` for the runtime to pick up. An
    /// unrecognised type yields [`TemplatedEmbed::Fallback`] carrying the
    /// generic embed.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::Template` if rendering fails.
    pub fn generate_templated_embed(
        &self,
        config: &WidgetConfig,
    ) -> Result<TemplatedEmbed, EmbedError> {
        let Some(widget_type) = config.widget_type() else {
            tracing::warn!(
                widget_id = %config.id,
                requested = %config.kind,
                "Unrecognised widget type, falling back to generic embed"
            );
            return Ok(TemplatedEmbed::Fallback {
                requested: config.kind.as_str().to_owned(),
                snippet: self.generate_embed(config)?,
            });
        };

        let ctx = self.snippet_context(config);
        let ctx = &ctx;
        let snippet = match widget_type {
            WidgetType::Carousel => CarouselLiquid { ctx }.render()?,
            WidgetType::Product => ProductLiquid { ctx }.render()?,
            WidgetType::Collection => CollectionLiquid { ctx }.render()?,
            WidgetType::Floating => FloatingLiquid { ctx }.render()?,
            WidgetType::ThankYou => ThankYouLiquid { ctx }.render()?,
            WidgetType::Popup => PopupLiquid {
                ctx,
                trigger: config.trigger.unwrap_or_default(),
            }
            .render()?,
        };

        Ok(TemplatedEmbed::Variant {
            widget_type,
            snippet,
        })
    }

    /// React component that loads the runtime on mount and calls
    /// `TrustLoop.destroy` on unmount.
    ///
    /// Customization is passed as component props rather than `data-*`
    /// attributes.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::Template` if rendering fails.
    pub fn generate_component_embed(&self, config: &WidgetConfig) -> Result<String, EmbedError> {
        let ctx = self.snippet_context(config);
        Ok(ReactComponent {
            ctx: &ctx,
            props: component_props(config.customization.as_ref(), self.config.escaping),
        }
        .render()?)
    }

    /// Full widget stylesheet.
    ///
    /// Primary, background and text colour, border radius and font size are
    /// each taken from the customization when present and defaulted
    /// independently otherwise.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::Template` if rendering fails.
    pub fn generate_stylesheet(
        &self,
        customization: Option<&Customization>,
    ) -> Result<String, EmbedError> {
        let escaping = self.config.escaping;
        let get = |key: &str| customization.and_then(|c| c.get(key));
        // Values interpolate the way a template literal would stringify them
        let css = |value: String| escaping.css(&value).into_owned();
        let or_default = |key: &str, default: CustomValue| {
            get(key).cloned().unwrap_or(default)
        };

        let font_size = or_default(
            Customization::FONT_SIZE,
            CustomValue::Number(DEFAULT_FONT_SIZE),
        );

        let stylesheet = WidgetStylesheet {
            primary_color: css(
                or_default(Customization::PRIMARY_COLOR, DEFAULT_PRIMARY_COLOR.into()).to_string(),
            ),
            background_color: css(
                or_default(Customization::BACKGROUND_COLOR, DEFAULT_BACKGROUND_COLOR.into())
                    .to_string(),
            ),
            text_color: css(
                or_default(Customization::TEXT_COLOR, DEFAULT_TEXT_COLOR.into()).to_string(),
            ),
            border_radius: css(
                or_default(
                    Customization::BORDER_RADIUS,
                    CustomValue::Number(DEFAULT_BORDER_RADIUS),
                )
                .to_string(),
            ),
            font_size: css(font_size.to_string()),
            font_size_small: font_size.js_sub(1.0),
            font_size_large: css(font_size.js_add(4.0)),
        };
        Ok(stylesheet.render()?)
    }

    /// Snippet, install steps and stylesheet for one format.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::Template` if rendering fails.
    pub fn generate_artifact(
        &self,
        config: &WidgetConfig,
        format: EmbedFormat,
    ) -> Result<GeneratedArtifact, EmbedError> {
        let (snippet, fallback_used) = match format {
            EmbedFormat::Liquid => {
                let templated = self.generate_templated_embed(config)?;
                let fallback_used = templated.is_fallback();
                (templated.into_snippet(), fallback_used)
            }
            EmbedFormat::Html => (self.generate_embed(config)?, false),
            EmbedFormat::React => (self.generate_component_embed(config)?, false),
        };

        tracing::debug!(
            widget_id = %config.id,
            widget_type = %config.kind,
            format = %format,
            bytes = snippet.len(),
            "Generated widget snippet"
        );

        Ok(GeneratedArtifact {
            format,
            snippet,
            instructions: installation_steps(&config.kind)
                .iter()
                .map(|&step| step.to_owned())
                .collect(),
            stylesheet: self.generate_stylesheet(config.customization.as_ref())?,
            fallback_used,
        })
    }

    fn snippet_context<'a>(&'a self, config: &'a WidgetConfig) -> SnippetContext<'a> {
        let escaping = self.config.escaping;
        let id = config.id.as_str();

        SnippetContext {
            widget_type: escaping.attr(config.kind.as_str()),
            id_attr: escaping.attr(id),
            id_js: escaping.js(id),
            shop_domain: escaping.attr(&config.shop_domain),
            attrs: data_attributes(config.customization.as_ref(), escaping),
            script_url: self.config.script_url(),
            stylesheet_url: self.config.stylesheet_url(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use trustloop_core::{PopupTrigger, TriggerKind, WidgetKind};

    use super::*;
    use crate::escaping::Escaping;
    use crate::instructions::GENERIC_STEPS;

    fn popup_w42() -> WidgetConfig {
        serde_json::from_str(
            r##"{
                "id": "w42",
                "type": "popup",
                "shopDomain": "acme.myshopify.com",
                "customization": {"primaryColor": "#ff0000", "autoRotate": false}
            }"##,
        )
        .unwrap()
    }

    fn config_of(widget_type: WidgetType) -> WidgetConfig {
        WidgetConfig::new("w1", widget_type, "demo.myshopify.com").with_customization(
            Customization::new()
                .with(Customization::PRIMARY_COLOR, "#123456")
                .with(Customization::SHOW_PHOTOS, true),
        )
    }

    #[test]
    fn test_output_is_deterministic() {
        let generator = WidgetCodeGenerator::default();
        let config = popup_w42();

        assert_eq!(
            generator.generate_embed(&config).unwrap(),
            generator.generate_embed(&config).unwrap()
        );
        assert_eq!(
            generator.generate_templated_embed(&config).unwrap(),
            generator.generate_templated_embed(&config).unwrap()
        );
        assert_eq!(
            generator.generate_component_embed(&config).unwrap(),
            generator.generate_component_embed(&config).unwrap()
        );
        assert_eq!(
            generator.generate_stylesheet(config.customization.as_ref()).unwrap(),
            generator.generate_stylesheet(config.customization.as_ref()).unwrap()
        );
    }

    #[test]
    fn test_embed_carries_every_customization_key() {
        let mut config = popup_w42();
        config.customization = Some(
            Customization::new()
                .with(Customization::BACKGROUND_COLOR, "#fafafa")
                .with(Customization::ROTATION_SPEED, 5.0)
                .with(Customization::SHOW_DATES, false)
                .with("maxReviews", 10.0),
        );
        let embed = WidgetCodeGenerator::default().generate_embed(&config).unwrap();

        assert!(embed.contains(r##"data-background-color="#fafafa""##));
        assert!(embed.contains(r#"data-rotation-speed="5""#));
        assert!(embed.contains(r#"data-show-dates="false""#));
        assert!(embed.contains(r#"data-max-reviews="10""#));
        assert!(!embed.contains("data-primary-color"));
        assert!(!embed.contains("data-font-size"));
    }

    #[test]
    fn test_embed_without_customization() {
        let config = WidgetConfig::new("c1", WidgetType::Carousel, "demo.myshopify.com");
        let embed = WidgetCodeGenerator::default().generate_embed(&config).unwrap();

        assert!(embed.contains("     data-shop-domain=\"demo.myshopify.com\"\n     >"));
        assert!(embed.contains("window.TrustLoop.init('c1');"));
        assert!(embed.contains("https://cdn.trustloop.com/widget.js?v=1.0.0"));
        assert!(!embed.ends_with('\n'));
    }

    #[test]
    fn test_every_type_has_its_own_template() {
        let generator = WidgetCodeGenerator::default();
        let markers = [
            (WidgetType::Carousel, "<!-- TrustLoop Homepage Carousel Widget -->"),
            (WidgetType::Product, "<!-- TrustLoop Product Reviews Widget -->"),
            (WidgetType::Collection, "<!-- TrustLoop Collection Rating Snippets -->"),
            (WidgetType::Floating, "<!-- TrustLoop Floating Review Widget -->"),
            (WidgetType::ThankYou, "<!-- TrustLoop Thank You Page Widget -->"),
            (WidgetType::Popup, "<!-- TrustLoop Popup Widget -->"),
        ];

        for (widget_type, marker) in markers {
            let config = config_of(widget_type);
            let templated = generator.generate_templated_embed(&config).unwrap();
            let generic = generator.generate_embed(&config).unwrap();

            assert!(
                matches!(&templated, TemplatedEmbed::Variant { widget_type: t, .. } if *t == widget_type)
            );
            assert!(templated.snippet().starts_with(marker), "{widget_type}");
            assert_ne!(templated.snippet(), generic);
            assert!(templated.snippet().contains("window.TrustLoopConfig.widgets.push({"));
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_generic_embed() {
        let generator = WidgetCodeGenerator::default();
        let config = WidgetConfig::new("b1", "banner", "demo.myshopify.com");

        let templated = generator.generate_templated_embed(&config).unwrap();
        let generic = generator.generate_embed(&config).unwrap();

        assert_eq!(
            templated,
            TemplatedEmbed::Fallback {
                requested: "banner".to_string(),
                snippet: generic.clone(),
            }
        );
        assert!(generic.contains("<!-- TrustLoop Widget: banner -->"));
    }

    #[test]
    fn test_popup_end_to_end() {
        let templated = WidgetCodeGenerator::default()
            .generate_templated_embed(&popup_w42())
            .unwrap();
        let snippet = templated.snippet();

        assert!(!templated.is_fallback());
        assert!(snippet.contains("acme.myshopify.com"));
        assert!(snippet.contains(r#"<div id="trustloop-popup-w42""#));
        assert!(snippet.contains("  id: 'w42',"));
        assert!(snippet.contains("  trigger: {\n    type: 'scroll',"));
        assert!(snippet.contains("value: 50"));
        assert!(!snippet.contains("Homepage"));
        assert!(snippet.contains(r##"data-primary-color="#ff0000""##));
    }

    #[test]
    fn test_popup_trigger_override() {
        let config = popup_w42().with_trigger(PopupTrigger {
            kind: TriggerKind::Time,
            value: 5000,
        });
        let snippet = WidgetCodeGenerator::default()
            .generate_templated_embed(&config)
            .unwrap()
            .into_snippet();

        assert!(snippet.contains("    type: 'time', // or 'time' or 'exit'\n    value: 5000 //"));
    }

    #[test]
    fn test_component_embed_pairs_init_and_destroy() {
        let component = WidgetCodeGenerator::default()
            .generate_component_embed(&popup_w42())
            .unwrap();

        assert!(component.contains("window.TrustLoop.init('w42');"));
        assert!(component.contains("window.TrustLoop.destroy('w42');"));
        assert!(component.contains("        primaryColor={\"#ff0000\"}\n  autoRotate={false}"));
        assert!(!component.contains("data-primary-color"));
    }

    #[test]
    fn test_stylesheet_defaults() {
        let css = WidgetCodeGenerator::default().generate_stylesheet(None).unwrap();

        assert!(css.contains("color: #005BD3;"));
        assert!(css.contains("background-color: #ffffff;"));
        assert!(css.contains("color: #000000;"));
        assert!(css.contains("border-radius: 8px;"));
        assert!(css.contains("font-size: 14px;"));
        assert!(css.contains("font-size: 13px;"));
    }

    #[test]
    fn test_stylesheet_single_override_changes_only_its_rules() {
        let generator = WidgetCodeGenerator::default();
        let defaults = generator.generate_stylesheet(None).unwrap();
        let custom = generator
            .generate_stylesheet(Some(
                &Customization::new().with(Customization::PRIMARY_COLOR, "#ff0000"),
            ))
            .unwrap();

        assert_eq!(custom, defaults.replace("#005BD3", "#ff0000"));
        assert!(custom.contains("border-radius: 8px;"));
    }

    #[test]
    fn test_stylesheet_font_size_derivatives() {
        let css = WidgetCodeGenerator::default()
            .generate_stylesheet(Some(&Customization::new().with(Customization::FONT_SIZE, 16.0)))
            .unwrap();

        assert!(css.contains("font-size: 16px;"));
        assert!(css.contains("font-size: 15px;"));
        assert!(css.contains("font-size: 20px;"));
        assert!(!css.contains("font-size: 14px;"));
    }

    #[test]
    fn test_stylesheet_accepts_text_numbers() {
        let customization: Customization =
            serde_json::from_str(r#"{"borderRadius": "12", "fontSize": "16"}"#).unwrap();
        let css = WidgetCodeGenerator::default()
            .generate_stylesheet(Some(&customization))
            .unwrap();

        assert!(css.contains("border-radius: 12px;"));
        assert!(css.contains("font-size: 16px;"));
        // Subtraction coerces, addition concatenates
        assert!(css.contains("font-size: 15px;"));
        assert!(css.contains("font-size: 164px;"));
    }

    #[test]
    fn test_stylesheet_stringifies_non_text_colors() {
        let css = WidgetCodeGenerator::default()
            .generate_stylesheet(Some(
                &Customization::new()
                    .with(Customization::TEXT_COLOR, 0.0)
                    .with(Customization::FONT_SIZE, true),
            ))
            .unwrap();

        assert!(css.contains("  color: 0;"));
        assert!(css.contains("font-size: truepx;"));
        assert!(css.contains("font-size: 0px;"));
        assert!(css.contains("font-size: 5px;"));
    }

    #[test]
    fn test_artifact_bundles_steps_and_stylesheet() {
        let generator = WidgetCodeGenerator::default();
        let config = popup_w42();
        let artifact = generator.generate_artifact(&config, EmbedFormat::React).unwrap();

        assert_eq!(artifact.format, EmbedFormat::React);
        assert_eq!(
            artifact.snippet,
            generator.generate_component_embed(&config).unwrap()
        );
        assert_eq!(artifact.instructions.len(), 7);
        assert!(artifact.stylesheet.contains("#ff0000"));
        assert!(!artifact.fallback_used);
    }

    #[test]
    fn test_artifact_flags_fallback() {
        let config = WidgetConfig::new("b1", WidgetKind::from("banner"), "demo.myshopify.com");
        let artifact = WidgetCodeGenerator::default()
            .generate_artifact(&config, EmbedFormat::Liquid)
            .unwrap();

        assert!(artifact.fallback_used);
        assert_eq!(artifact.instructions, GENERIC_STEPS);
    }

    #[test]
    fn test_custom_cdn() {
        let generator =
            WidgetCodeGenerator::new(EmbedConfig::new("https://cdn.example.com/tl", "2.1.0").unwrap());
        let snippet = generator
            .generate_templated_embed(&config_of(WidgetType::Carousel))
            .unwrap()
            .into_snippet();

        assert!(snippet.contains(
            "{{ 'https://cdn.example.com/tl/widget.css?v=2.1.0' | stylesheet_tag }}"
        ));
        assert!(snippet.contains("{{ 'https://cdn.example.com/tl/widget.js?v=2.1.0' | script_tag }}"));
    }

    #[test]
    fn test_verbatim_interpolation_is_default() {
        let config = WidgetConfig::new("x'y", WidgetType::Floating, "a\"b");
        let snippet = WidgetCodeGenerator::default().generate_embed(&config).unwrap();

        assert!(snippet.contains("data-shop-domain=\"a\"b\""));
        assert!(snippet.contains("init('x'y')"));
    }

    #[test]
    fn test_html_escaping_mode() {
        let generator =
            WidgetCodeGenerator::new(EmbedConfig::default().with_escaping(Escaping::Html));
        let config = WidgetConfig::new("x'y", WidgetType::Floating, "a\"b").with_customization(
            Customization::new().with(Customization::PRIMARY_COLOR, "red\"><script>"),
        );

        let embed = generator.generate_embed(&config).unwrap();
        assert!(embed.contains("data-shop-domain=\"a&quot;b\""));
        assert!(embed.contains("init('x\\'y')"));
        assert!(embed.contains("data-widget-id=\"x&#x27;y\""));
        assert!(!embed.contains("<script>\""));

        let css = generator.generate_stylesheet(config.customization.as_ref()).unwrap();
        assert!(css.contains("color: redscript;"));
    }
}
