//! HTML rendering and file export
//!
//! The flyer body is authored as markdown (title block, quotes) interleaved
//! with raw HTML blocks (day grid, right panel), converted to HTML with
//! pulldown-cmark and wrapped in a standalone page. Render options affect
//! chrome only: theme, preview border, scale.

use crate::application::{ArtifactExporter, FlierRenderer, RenderOptions};
use crate::domain::{progress, DayBlock, FlierConfig};
use crate::error::{FlierError, Result};
use pulldown_cmark::{html, Parser};
use std::fs;
use std::path::Path;

/// Renders a flyer configuration to a standalone HTML page
pub struct HtmlRenderer;

impl FlierRenderer for HtmlRenderer {
    fn render(&self, config: &FlierConfig, options: &RenderOptions) -> Result<String> {
        let markdown = flyer_markdown(config);

        let mut body = String::new();
        html::push_html(&mut body, Parser::new(&markdown));

        Ok(wrap_page(config, options, &body))
    }
}

fn flyer_markdown(config: &FlierConfig) -> String {
    let mut md = String::new();

    // User text is escaped before it enters the markdown source; inline
    // HTML would otherwise pass through the converter untouched.
    md.push_str(&format!("# {}\n\n", escape_html(&config.title)));
    md.push_str(&format!("## {}\n\n", escape_html(&config.subtitle)));

    for day in &config.days {
        md.push_str(&day_block_html(day, &config.header_color));
        md.push('\n');
    }

    md.push_str(&right_panel_html(config));
    // Blank line to close the raw HTML block before any markdown quotes
    md.push('\n');

    for quote in &config.right_panel.inspirational_quotes {
        md.push_str(&format!("> {}\n\n", escape_html(quote)));
    }

    md
}

fn day_block_html(day: &DayBlock, fallback_color: &str) -> String {
    let mut block = String::new();

    block.push_str("<section class=\"day\">\n");
    block.push_str(&format!(
        "<header style=\"background-color: {}\"><span class=\"day-name\">{}</span>\
        <span class=\"day-date\">{}</span></header>\n",
        escape_html(day.header_color(fallback_color)),
        escape_html(&day.day),
        escape_html(&day.date),
    ));

    if day.events.is_empty() {
        block.push_str("<div class=\"event empty\"><em>No events scheduled</em></div>\n");
    }
    for event in &day.events {
        block.push_str("<div class=\"event\"><span class=\"event-title\">");
        block.push_str(&escape_html(&event.title));
        if event.is_optional {
            block.push_str("<span class=\"badge\">OPTIONAL</span>");
        }
        block.push_str("</span>");
        if !event.time.is_empty() {
            block.push_str(&format!(
                "<span class=\"event-time\">{}</span>",
                escape_html(&event.time)
            ));
        }
        block.push_str("</div>\n");
    }

    if day.special_guest.enabled {
        block.push_str(&format!(
            "<div class=\"guest guest-{}\" style=\"color: {}\">{}</div>\n",
            day.special_guest.shape.as_str(),
            escape_html(&day.special_guest.color),
            escape_html(&day.special_guest.text),
        ));
    }

    block.push_str("</section>\n");
    block
}

fn right_panel_html(config: &FlierConfig) -> String {
    let mut panel = String::new();
    panel.push_str("<aside class=\"right-panel\">\n");

    let image_url = config.right_panel.background_image.trim();
    if image_url.is_empty() {
        panel.push_str("<div class=\"backdrop placeholder\"><p>No background image</p></div>\n");
    } else {
        // A URL that fails to load at view time degrades to its alt text;
        // the rest of the flyer still renders.
        panel.push_str(&format!(
            "<img class=\"backdrop\" src=\"{}\" alt=\"No background image\">\n",
            escape_html(image_url)
        ));
    }

    for hashtag in &config.right_panel.hashtags {
        panel.push_str(&format!(
            "<div class=\"hashtag\" style=\"color: {}\">{}</div>\n",
            escape_html(hashtag.color().unwrap_or("#FFFFFF")),
            escape_html(hashtag.text()),
        ));
    }

    let bar = &config.progress;
    let pct = progress::percentage(bar.current, bar.goal);
    panel.push_str(&format!(
        "<div class=\"progress\"><div class=\"progress-fill\" \
        style=\"width: {:.1}%; background-color: {}\"></div>\
        <span class=\"progress-label\">{}</span></div>\n",
        pct,
        escape_html(&bar.color),
        escape_html(&bar.label),
    ));

    panel.push_str("</aside>\n");
    panel
}

fn wrap_page(config: &FlierConfig, options: &RenderOptions, body: &str) -> String {
    let theme = if options.dark_mode { "dark" } else { "light" };
    let border = if options.for_export {
        "none"
    } else {
        "4px dashed #cbd5e1"
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
        <title>{title}</title>\n\
        <style>\n\
        body.dark {{ background: #111827; color: #f9fafb; }}\n\
        body.light {{ background: #ffffff; color: #1e293b; }}\n\
        .flier {{ width: {width}; height: {height}; border: {border}; \
        transform: scale({scale}); transform-origin: top left; \
        font-family: Arial, sans-serif; overflow: hidden; }}\n\
        .day header {{ color: #ffffff; display: flex; justify-content: space-between; \
        padding: 4px 8px; }}\n\
        .event {{ display: flex; justify-content: space-between; padding: 2px 8px; }}\n\
        .badge {{ background: #2563eb; color: #ffffff; font-size: 0.7em; \
        margin-left: 6px; padding: 1px 6px; border-radius: 4px; }}\n\
        .right-panel {{ position: relative; }}\n\
        .right-panel .backdrop {{ width: 100%; object-fit: cover; }}\n\
        .hashtag {{ font-size: 2em; font-weight: bold; }}\n\
        .progress {{ position: relative; height: 2em; background: #374151; \
        border-radius: 1em; overflow: hidden; }}\n\
        .progress-fill {{ height: 100%; }}\n\
        .progress-label {{ position: absolute; inset: 0; text-align: center; \
        font-weight: bold; color: #ffffff; }}\n\
        </style>\n</head>\n\
        <body class=\"{theme}\">\n<div class=\"flier\">\n{body}</div>\n</body>\n</html>\n",
        title = escape_html(&config.title),
        width = escape_html(&config.dimensions.width),
        height = escape_html(&config.dimensions.height),
        border = border,
        scale = options.scale,
        theme = theme,
        body = body,
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writes the artifact to a file, atomically enough that a failed export
/// never leaves a half-written destination behind.
pub struct FileArtifactExporter;

impl ArtifactExporter for FileArtifactExporter {
    fn export(&self, artifact: &str, destination: &Path) -> Result<()> {
        let staging = destination.with_extension("tmp");

        if let Err(e) = fs::write(&staging, artifact) {
            let _ = fs::remove_file(&staging);
            return Err(FlierError::Export(format!(
                "Failed to write {}: {}",
                destination.display(),
                e
            )));
        }

        if let Err(e) = fs::rename(&staging, destination) {
            let _ = fs::remove_file(&staging);
            return Err(FlierError::Export(format!(
                "Failed to finalize {}: {}",
                destination.display(),
                e
            )));
        }

        Ok(())
    }
}
