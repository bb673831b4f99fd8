//! Generated snippets compared byte-for-byte with recorded output.
//!
//! Every case uses the default CDN settings and verbatim values.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use trustloop_core::WidgetId;
use trustloop_embed::{EmbedFormat, TemplatedEmbed, WidgetCodeGenerator};
use trustloop_integration_tests::{SHOP, widget_config};

struct Case {
    name: &'static str,
    html: &'static str,
    liquid: &'static str,
    jsx: &'static str,
}

macro_rules! case {
    ($name:literal) => {
        Case {
            name: $name,
            html: include_str!(concat!("golden/", $name, ".html")),
            liquid: include_str!(concat!("golden/", $name, ".liquid")),
            jsx: include_str!(concat!("golden/", $name, ".jsx")),
        }
    };
}

fn assert_case(config: &trustloop_core::WidgetConfig, case: &Case) {
    let generator = WidgetCodeGenerator::default();

    assert_eq!(
        generator.generate_embed(config).unwrap(),
        case.html,
        "{} html",
        case.name
    );
    assert_eq!(
        generator.generate_component_embed(config).unwrap(),
        case.jsx,
        "{} jsx",
        case.name
    );

    let templated = generator.generate_templated_embed(config).unwrap();
    assert!(
        matches!(templated, TemplatedEmbed::Variant { .. }),
        "{} should use its own template",
        case.name
    );
    assert_eq!(templated.snippet(), case.liquid, "{} liquid", case.name);
}

#[test]
fn test_popup_golden() {
    let config = widget_config(
        "w42",
        "popup",
        "acme.myshopify.com",
        Some(json!({"primaryColor": "#ff0000", "autoRotate": false})),
    );
    assert_case(&config, &case!("popup_w42"));
}

#[test]
fn test_carousel_golden() {
    let config = widget_config("c1", "carousel", SHOP, None);
    assert_case(&config, &case!("carousel_plain"));
}

#[test]
fn test_product_golden() {
    let config = widget_config(
        "p7",
        "product",
        SHOP,
        Some(json!({"primaryColor": "#123456", "showPhotos": true, "rotationSpeed": 5})),
    );
    assert_case(&config, &case!("product_custom"));
}

#[test]
fn test_collection_golden() {
    let config = widget_config(
        "col3",
        "collection",
        SHOP,
        Some(json!({"showRatings": true})),
    );
    assert_case(&config, &case!("collection_custom"));
}

#[test]
fn test_floating_golden_with_numeric_id() {
    let config = widget_config(WidgetId::from(9_i64), "floating", SHOP, None);
    assert_case(&config, &case!("floating_plain"));
}

#[test]
fn test_thankyou_golden() {
    let config = widget_config(
        "ty1",
        "thankyou",
        SHOP,
        Some(json!({"backgroundColor": "#fafafa", "borderRadius": 12})),
    );
    assert_case(&config, &case!("thankyou_custom"));
}

#[test]
fn test_default_stylesheet_golden() {
    let generator = WidgetCodeGenerator::default();
    assert_eq!(
        generator.generate_stylesheet(None).unwrap(),
        include_str!("golden/default.css")
    );
}

#[test]
fn test_custom_stylesheet_golden() {
    let generator = WidgetCodeGenerator::default();
    let customization = serde_json::from_value(json!({"primaryColor": "#ff0000", "fontSize": 16}))
        .unwrap();
    assert_eq!(
        generator.generate_stylesheet(Some(&customization)).unwrap(),
        include_str!("golden/custom.css")
    );
}

#[test]
fn test_artifact_matches_direct_generation() {
    let generator = WidgetCodeGenerator::default();
    let config = widget_config("c1", "carousel", SHOP, None);

    for format in EmbedFormat::ALL {
        let artifact = generator.generate_artifact(&config, format).unwrap();
        let expected = match format {
            EmbedFormat::Liquid => include_str!("golden/carousel_plain.liquid"),
            EmbedFormat::Html => include_str!("golden/carousel_plain.html"),
            EmbedFormat::React => include_str!("golden/carousel_plain.jsx"),
        };
        assert_eq!(artifact.snippet, expected, "{format}");
        assert_eq!(artifact.stylesheet, include_str!("golden/default.css"));
        assert_eq!(artifact.instructions.len(), 7);
    }
}

#[test]
fn test_unknown_type_liquid_is_generic_embed() {
    let generator = WidgetCodeGenerator::default();
    let config = widget_config("b1", "banner", SHOP, None);

    let templated = generator.generate_templated_embed(&config).unwrap();
    assert!(templated.is_fallback());
    assert_eq!(templated.snippet(), generator.generate_embed(&config).unwrap());
}

#[test]
fn test_attributes_follow_supplied_key_order() {
    let generator = WidgetCodeGenerator::default();
    let config = widget_config(
        "w42",
        "popup",
        "acme.myshopify.com",
        Some(json!({"autoRotate": false, "primaryColor": "#ff0000"})),
    );
    let expected = include_str!("golden/popup_w42.html").replace(
        "     data-primary-color=\"#ff0000\"\n     data-auto-rotate=\"false\">",
        "     data-auto-rotate=\"false\"\n     data-primary-color=\"#ff0000\">",
    );

    assert_eq!(generator.generate_embed(&config).unwrap(), expected);
    assert!(
        generator
            .generate_component_embed(&config)
            .unwrap()
            .contains("        autoRotate={false}\n  primaryColor={\"#ff0000\"}")
    );
}

#[test]
fn test_text_valued_numbers_render() {
    let generator = WidgetCodeGenerator::default();
    let config = widget_config(
        "ty1",
        "thankyou",
        SHOP,
        Some(json!({"backgroundColor": "#fafafa", "borderRadius": "12"})),
    );

    assert_eq!(
        generator.generate_embed(&config).unwrap(),
        include_str!("golden/thankyou_custom.html")
    );

    let css = generator
        .generate_stylesheet(config.customization.as_ref())
        .unwrap();
    assert!(css.contains("border-radius: 12px;"));
    assert!(!css.contains("border-radius: 8px;"));
}
