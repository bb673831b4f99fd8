//! Whole-catalog commands.
//!
//! `export` writes one directory per widget:
//!
//! ```text
//! <out>/<widget-id>/    sanitized, with `-2`, `-3`... appended on collision
//!   widget.liquid     Liquid snippet, wrapped in its placement markers
//!   widget.html       Standalone HTML/JavaScript embed
//!   widget.jsx        React component
//!   trustloop.css     Stylesheet for the widget's customization
//!   INSTALL.txt       Placement and numbered install steps
//!   guide.json        Everything above as one document
//! ```

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use trustloop_core::{CatalogSummary, WidgetCatalog, WidgetPerformance};
use trustloop_embed::{EmbedFormat, InstallGuide, WidgetCodeGenerator};
use trustloop_guide::load_catalog;

/// Write every widget's install bundle under `out`.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a snippet fails to
/// render, or a file cannot be written.
pub async fn export(
    generator: &WidgetCodeGenerator,
    catalog_path: &Path,
    out: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let catalog = load_catalog(catalog_path).await?;
    let mut written = 0;
    let mut taken = HashSet::new();

    for widget in &catalog.widgets {
        let guide = InstallGuide::build(generator, widget, catalog.shop_domain.as_str())?;
        let dir = out.join(unique_dir_name(widget.id.as_str(), &mut taken));
        tokio::fs::create_dir_all(&dir).await?;

        for snippet in &guide.snippets {
            let code = if snippet.format == EmbedFormat::Liquid {
                &guide.placement_code
            } else {
                &snippet.code
            };
            let file = dir.join(format!("widget.{}", snippet.format.file_extension()));
            write_file(&file, code).await?;
            written += 1;
        }

        write_file(&dir.join("trustloop.css"), &guide.stylesheet).await?;
        write_file(&dir.join("INSTALL.txt"), &install_text(&guide)).await?;
        write_file(&dir.join("guide.json"), &serde_json::to_string_pretty(&guide)?).await?;
        written += 3;

        if guide.fallback_used {
            tracing::warn!(
                widget_id = %widget.id,
                widget_type = %widget.kind,
                "No Liquid template for this widget type, exported the generic embed"
            );
        }
        tracing::info!(widget_id = %widget.id, dir = %dir.display(), "Exported widget");
    }

    Ok(written)
}

/// Catalog totals followed by one line per widget.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn stats(catalog_path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let catalog = load_catalog(catalog_path).await?;
    Ok(stats_report(&catalog))
}

fn stats_report(catalog: &WidgetCatalog) -> String {
    let summary = CatalogSummary::of(&catalog.widgets);
    let mut out = format!(
        "{}: {} widgets, {} active, {} views, {} clicks, {:.1}% average CTR",
        catalog.shop_domain,
        catalog.len(),
        summary.active_widgets,
        summary.total_views,
        summary.total_clicks,
        summary.average_ctr,
    );

    for widget in &catalog.widgets {
        let performance = WidgetPerformance::of(widget);
        let _ = write!(
            out,
            "\n{:<12} {:<10} {:>8} views {:>6} clicks {:>6.1}% {}{}",
            widget.id.as_str(),
            widget.kind.as_str(),
            widget.views,
            widget.clicks,
            performance.ctr,
            performance.rating,
            if widget.is_active { "" } else { " (inactive)" },
        );
    }
    out
}

fn install_text(guide: &InstallGuide) -> String {
    let mut out = format!(
        "{} ({})\n\nFile: {}\nLocation: {}\n\n",
        guide.name, guide.kind, guide.placement.file, guide.placement.location
    );
    for (i, step) in guide.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", i + 1);
    }
    out
}

/// Directory name for a widget ID.
///
/// IDs are free text, so anything outside `[A-Za-z0-9_-]` becomes `_`.
fn dir_name(id: &str) -> PathBuf {
    let name: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(if name.is_empty() { "_".to_string() } else { name })
}

/// [`dir_name`], suffixed until it differs from every name in `taken`.
///
/// Comparison ignores ASCII case so bundles stay apart on case-insensitive
/// filesystems.
fn unique_dir_name(id: &str, taken: &mut HashSet<String>) -> PathBuf {
    let base = dir_name(id);
    let base = base.to_string_lossy();
    let mut name = base.to_string();
    let mut n = 2;
    while !taken.insert(name.to_ascii_lowercase()) {
        name = format!("{base}-{n}");
        n += 1;
    }
    if name != base {
        tracing::warn!(widget_id = id, dir = %name, "Export directory already used, renamed");
    }
    PathBuf::from(name)
}

async fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    tokio::fs::write(path, contents).await?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const CATALOG: &str = "shopDomain: acme.myshopify.com
widgets:
  - id: w1
    name: Homepage carousel
    type: carousel
    views: 1500
    clicks: 150
  - id: ../escape
    name: Banner
    type: banner
    isActive: false
";

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name("w42"), PathBuf::from("w42"));
        assert_eq!(dir_name("../x"), PathBuf::from("___x"));
        assert_eq!(dir_name(""), PathBuf::from("_"));
    }

    #[test]
    fn test_unique_dir_name() {
        let mut taken = HashSet::new();
        assert_eq!(unique_dir_name("a.b", &mut taken), PathBuf::from("a_b"));
        assert_eq!(unique_dir_name("a/b", &mut taken), PathBuf::from("a_b-2"));
        assert_eq!(unique_dir_name("A_B", &mut taken), PathBuf::from("A_B-3"));
        assert_eq!(unique_dir_name("a_b-2", &mut taken), PathBuf::from("a_b-2-2"));
        assert_eq!(unique_dir_name("w1", &mut taken), PathBuf::from("w1"));
    }

    #[tokio::test]
    async fn test_export_keeps_colliding_ids_apart() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"shopDomain: acme.myshopify.com
widgets:
  - {id: a.b, name: Dot carousel, type: carousel}
  - {id: a/b, name: Slash popup, type: popup}
",
        )
        .unwrap();
        let out = tempfile::tempdir().unwrap();

        let written = export(&WidgetCodeGenerator::default(), file.path(), out.path())
            .await
            .unwrap();
        assert_eq!(written, 12);

        let first = std::fs::read_to_string(out.path().join("a_b/INSTALL.txt")).unwrap();
        let second = std::fs::read_to_string(out.path().join("a_b-2/INSTALL.txt")).unwrap();
        assert!(first.starts_with("Dot carousel (carousel)"));
        assert!(second.starts_with("Slash popup (popup)"));

        let jsx = std::fs::read_to_string(out.path().join("a_b-2/widget.jsx")).unwrap();
        assert!(jsx.contains("TrustLoop.init('a/b')"));
    }

    #[tokio::test]
    async fn test_export_writes_bundle_per_widget() {
        let catalog = catalog_file();
        let out = tempfile::tempdir().unwrap();
        let generator = WidgetCodeGenerator::default();

        let written = export(&generator, catalog.path(), out.path()).await.unwrap();
        assert_eq!(written, 12);

        let liquid = std::fs::read_to_string(out.path().join("w1/widget.liquid")).unwrap();
        assert!(liquid.starts_with("<!-- TrustLoop Homepage Carousel -->"));
        assert!(liquid.ends_with("<!-- End TrustLoop Carousel -->"));

        let install = std::fs::read_to_string(out.path().join("w1/INSTALL.txt")).unwrap();
        assert!(install.contains("7. Customize the widget position"));

        // Unsafe ID stays inside the output directory
        assert!(out.path().join("___escape/widget.jsx").exists());
        let guide: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(out.path().join("___escape/guide.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(guide["fallbackUsed"], true);
    }

    #[test]
    fn test_stats_report() {
        let catalog = WidgetCatalog::from_yaml_str(CATALOG).unwrap();
        let report = stats_report(&catalog);
        let mut lines = report.lines();

        assert_eq!(
            lines.next(),
            Some("acme.myshopify.com: 2 widgets, 1 active, 1500 views, 150 clicks, 5.0% average CTR")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("w1"));
        assert!(first.contains("10.0%"));
        assert!(lines.next().unwrap().ends_with("(inactive)"));
    }
}
