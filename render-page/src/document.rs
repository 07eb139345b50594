use anyhow::{Context, Result};
use barbot_display::{escape, Node};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::Path;

use crate::config::PageConfig;

/// Wraps the rendered page body in a standalone HTML document.
pub fn render_document(
    config: &PageConfig,
    body: &Node,
    generated_at: Option<DateTime<Utc>>,
) -> String {
    let mut head = String::from("<meta charset=\"utf-8\">");
    head.push_str(&format!("<title>{}</title>", escape(&config.title)));
    if let Some(stylesheet) = &config.stylesheet {
        head.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape(stylesheet)
        ));
    }
    if let Some(generated_at) = generated_at {
        head.push_str(&format!(
            "<meta name=\"generated\" content=\"{}\">",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\"><head>{}</head><body>{}</body></html>\n",
        escape(&config.lang),
        head,
        body.to_html()
    )
}

/// Write the document, creating parent directories as needed.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write document: {:?}", path))?;
    Ok(())
}
