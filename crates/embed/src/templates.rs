//! Compiled snippet and stylesheet templates.
//!
//! Templates live under `templates/` and use the `snippet` syntax from
//! `askama.toml`: `[[ expr ]]` instead of `{{ expr }}`, so Liquid and JSX
//! braces are emitted untouched. Every template renders with escaping off;
//! values arrive here already escaped (or not) per [`crate::Escaping`].

use std::borrow::Cow;

use askama::Template;
use trustloop_core::PopupTrigger;

/// Values shared by every snippet template.
pub struct SnippetContext<'a> {
    /// Raw type tag, attribute-safe.
    pub widget_type: Cow<'a, str>,
    /// Widget id for attribute context.
    pub id_attr: Cow<'a, str>,
    /// Widget id for inline-script string context.
    pub id_js: Cow<'a, str>,
    pub shop_domain: Cow<'a, str>,
    /// Pre-joined `data-*` attributes.
    pub attrs: String,
    pub script_url: &'a str,
    pub stylesheet_url: &'a str,
}

#[derive(Template)]
#[template(path = "embed/generic.html", escape = "none")]
pub struct GenericEmbed<'a> {
    pub ctx: &'a SnippetContext<'a>,
}

#[derive(Template)]
#[template(path = "liquid/carousel.liquid", escape = "none")]
pub struct CarouselLiquid<'a> {
    pub ctx: &'a SnippetContext<'a>,
}

#[derive(Template)]
#[template(path = "liquid/product.liquid", escape = "none")]
pub struct ProductLiquid<'a> {
    pub ctx: &'a SnippetContext<'a>,
}

/// Placed inside the collection's product loop, one element per product.
#[derive(Template)]
#[template(path = "liquid/collection.liquid", escape = "none")]
pub struct CollectionLiquid<'a> {
    pub ctx: &'a SnippetContext<'a>,
}

#[derive(Template)]
#[template(path = "liquid/floating.liquid", escape = "none")]
pub struct FloatingLiquid<'a> {
    pub ctx: &'a SnippetContext<'a>,
}

#[derive(Template)]
#[template(path = "liquid/thankyou.liquid", escape = "none")]
pub struct ThankYouLiquid<'a> {
    pub ctx: &'a SnippetContext<'a>,
}

#[derive(Template)]
#[template(path = "liquid/popup.liquid", escape = "none")]
pub struct PopupLiquid<'a> {
    pub ctx: &'a SnippetContext<'a>,
    pub trigger: PopupTrigger,
}

#[derive(Template)]
#[template(path = "react/component.jsx", escape = "none")]
pub struct ReactComponent<'a> {
    pub ctx: &'a SnippetContext<'a>,
    /// Pre-joined JSX prop lines.
    pub props: String,
}

#[derive(Template)]
#[template(path = "css/widget.css", escape = "none")]
pub struct WidgetStylesheet {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub border_radius: String,
    pub font_size: String,
    /// Mobile breakpoint text.
    pub font_size_small: String,
    /// Popup heading.
    pub font_size_large: String,
}
