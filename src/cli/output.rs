//! Output formatting utilities

use crate::domain::{progress, FlierConfig};

/// Format the flyer for terminal display
pub fn format_flier_summary(config: &FlierConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} - {}\n", config.title, config.subtitle));
    output.push_str(&format!(
        "{} x {}, header {}\n\n",
        config.dimensions.width, config.dimensions.height, config.header_color
    ));

    for day in &config.days {
        output.push_str(&format!("{:<10} {}", day.day, day.date));
        if let Some(color) = &day.color {
            output.push_str(&format!("  [{}]", color));
        }
        output.push('\n');

        if day.events.is_empty() {
            output.push_str("  (no events)\n");
        }
        for event in &day.events {
            output.push_str(&format!("  {}", event.title));
            if !event.time.is_empty() {
                output.push_str(&format!("  {}", event.time));
            }
            if event.is_optional {
                output.push_str("  [optional]");
            }
            output.push('\n');
        }

        if day.special_guest.enabled {
            output.push_str(&format!(
                "  * {} ({}, {})\n",
                day.special_guest.text,
                day.special_guest.shape.as_str(),
                day.special_guest.color
            ));
        }
    }

    output.push_str("\nHashtags:\n");
    if config.right_panel.hashtags.is_empty() {
        output.push_str("  (none)\n");
    }
    for hashtag in &config.right_panel.hashtags {
        match hashtag.color() {
            Some(color) => output.push_str(&format!("  {} ({})\n", hashtag.text(), color)),
            None => output.push_str(&format!("  {}\n", hashtag.text())),
        }
    }

    if !config.right_panel.inspirational_quotes.is_empty() {
        output.push_str("\nQuotes:\n");
        for quote in &config.right_panel.inspirational_quotes {
            output.push_str(&format!("  \"{}\"\n", quote));
        }
    }

    output.push_str(&format!(
        "\nProgress: {} ({:.0}%)\n",
        config.progress.label,
        progress::percentage(config.progress.current, config.progress.goal)
    ));

    output
}
