//! Per-widget installation bundle.

use serde::Serialize;
use trustloop_core::{Widget, WidgetId, WidgetKind};

use crate::artifact::EmbedFormat;
use crate::error::EmbedError;
use crate::generator::WidgetCodeGenerator;
use crate::instructions::{Placement, installation_steps};

/// One tab of the install guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatSnippet {
    pub format: EmbedFormat,
    pub label: &'static str,
    pub code: String,
}

/// Everything the install guide shows for one widget: a snippet per format,
/// the theme placement, ordered steps and the stylesheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallGuide {
    pub widget_id: WidgetId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub placement: Placement,
    /// The Liquid snippet wrapped in its placement markers.
    pub placement_code: String,
    pub steps: &'static [&'static str],
    /// In [`EmbedFormat::ALL`] order.
    pub snippets: Vec<FormatSnippet>,
    pub stylesheet: String,
    /// The widget's type was not recognised and the Liquid tab holds the
    /// generic embed.
    pub fallback_used: bool,
}

impl InstallGuide {
    /// Generate the guide for a stored widget.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::Template` if any snippet fails to render.
    pub fn build(
        generator: &WidgetCodeGenerator,
        widget: &Widget,
        shop_domain: &str,
    ) -> Result<Self, EmbedError> {
        let config = widget.to_config(shop_domain);
        let placement = Placement::for_kind(&config.kind);

        let templated = generator.generate_templated_embed(&config)?;
        let fallback_used = templated.is_fallback();
        let liquid = templated.into_snippet();
        let placement_code = placement.wrap(&liquid);

        let snippets = vec![
            FormatSnippet {
                format: EmbedFormat::Liquid,
                label: EmbedFormat::Liquid.label(),
                code: liquid,
            },
            FormatSnippet {
                format: EmbedFormat::Html,
                label: EmbedFormat::Html.label(),
                code: generator.generate_embed(&config)?,
            },
            FormatSnippet {
                format: EmbedFormat::React,
                label: EmbedFormat::React.label(),
                code: generator.generate_component_embed(&config)?,
            },
        ];

        Ok(Self {
            widget_id: widget.id.clone(),
            name: widget.name.clone(),
            kind: config.kind.clone(),
            placement,
            placement_code,
            steps: installation_steps(&config.kind),
            snippets,
            stylesheet: generator.generate_stylesheet(config.customization.as_ref())?,
            fallback_used,
        })
    }

    /// The snippet for one format.
    #[must_use]
    pub fn snippet(&self, format: EmbedFormat) -> Option<&str> {
        self.snippets
            .iter()
            .find(|s| s.format == format)
            .map(|s| s.code.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn widget(json: &str) -> Widget {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_carousel_guide() {
        let generator = WidgetCodeGenerator::default();
        let widget = widget(
            r##"{"id": "wdg_1", "name": "Homepage Carousel", "type": "carousel",
                 "configuration": {"primaryColor": "#005BD3"}}"##,
        );
        let guide = InstallGuide::build(&generator, &widget, "acme.myshopify.com").unwrap();

        assert_eq!(guide.snippets.len(), 3);
        assert!(!guide.fallback_used);
        assert_eq!(guide.steps.len(), 7);
        assert_eq!(
            guide.placement.file,
            "sections/index.liquid or templates/index.liquid"
        );

        let liquid = guide.snippet(EmbedFormat::Liquid).unwrap();
        assert!(liquid.starts_with("<!-- TrustLoop Homepage Carousel Widget -->"));
        assert!(guide.placement_code.starts_with(
            "<!-- TrustLoop Homepage Carousel -->\n<div id=\"trustloop-carousel\"></div>\n"
        ));
        assert!(guide.placement_code.contains(liquid));

        let config = widget.to_config("acme.myshopify.com");
        assert_eq!(
            guide.snippet(EmbedFormat::Html).unwrap(),
            generator.generate_embed(&config).unwrap()
        );
    }

    #[test]
    fn test_build_unknown_type_guide() {
        let generator = WidgetCodeGenerator::default();
        let widget = widget(r#"{"id": 5, "name": "Banner", "type": "banner"}"#);
        let guide = InstallGuide::build(&generator, &widget, "acme.myshopify.com").unwrap();

        assert!(guide.fallback_used);
        assert_eq!(
            guide.snippet(EmbedFormat::Liquid),
            guide.snippet(EmbedFormat::Html)
        );
        assert_eq!(guide.placement_code, guide.snippet(EmbedFormat::Html).unwrap());
        assert_eq!(guide.steps.len(), 6);
    }

    #[test]
    fn test_serializes_for_api() {
        let widget = widget(r#"{"id": "p1", "name": "Product", "type": "product"}"#);
        let guide =
            InstallGuide::build(&WidgetCodeGenerator::default(), &widget, "acme.myshopify.com")
                .unwrap();
        let json = serde_json::to_value(&guide).unwrap();

        assert_eq!(json["widgetId"], "p1");
        assert_eq!(json["type"], "product");
        assert_eq!(json["snippets"][2]["format"], "react");
        assert_eq!(json["placement"]["location"], "After the product description or in the product tabs");
    }
}
