// src/terminal.rs
use std::collections::{HashMap, HashSet};

use crate::presentation::{Field, PresentationAdapter, Region};

/// Retained display state rendered as plain text once a submission settles.
#[derive(Debug, Default)]
pub struct TerminalScreen {
    visible: HashSet<Region>,
    texts: HashMap<Field, String>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.contains(&region)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn visible_regions(&self) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|r| self.is_visible(*r))
            .collect()
    }

    fn field(&self, field: Field) -> &str {
        self.text(field).unwrap_or("")
    }

    /// Renders every visible region in a fixed order.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.is_visible(Region::WaitingIndicator) {
            out.push_str("⏳ Waiting for the execution service...\n");
        }

        if self.is_visible(Region::ErrorPanel) {
            out.push_str(&format!("❌ Error: {}\n", self.field(Field::ErrorMessageText)));
        }

        if self.is_visible(Region::StatusPanel) {
            out.push_str(&format!("{}\n", self.field(Field::StatusSummaryLabel)));
            if self.is_visible(Region::RetvalDisplay) {
                out.push_str(&format!("  exit code: {}\n", self.field(Field::RetvalValue)));
            }
            if self.is_visible(Region::SignalDisplay) {
                out.push_str(&format!("  signal:    {}\n", self.field(Field::SignalValue)));
            }
            out.push_str(&format!("  time:      {}s\n", self.field(Field::TimeValue)));

            if self.is_visible(Region::StdoutPanel) {
                out.push_str("--- stdout ---\n");
                push_block(&mut out, self.field(Field::StdoutText));
            }
            if self.is_visible(Region::StderrPanel) {
                out.push_str("--- stderr ---\n");
                push_block(&mut out, self.field(Field::StderrText));
            }
        }

        out
    }
}

fn push_block(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}

impl PresentationAdapter for TerminalScreen {
    fn show(&mut self, region: Region) {
        self.visible.insert(region);
    }

    fn hide(&mut self, region: Region) {
        self.visible.remove(&region);
    }

    fn set_text(&mut self, field: Field, value: &str) {
        self.texts.insert(field, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_everything_hidden() {
        let screen = TerminalScreen::new();
        assert!(screen.visible_regions().is_empty());
        assert_eq!(screen.render(), "");
    }

    #[test]
    fn test_render_result_panel() {
        let mut screen = TerminalScreen::new();
        screen.show(Region::StatusPanel);
        screen.show(Region::RetvalDisplay);
        screen.show(Region::StdoutPanel);
        screen.set_text(Field::StatusSummaryLabel, "Finished");
        screen.set_text(Field::RetvalValue, "0");
        screen.set_text(Field::TimeValue, "0.01");
        screen.set_text(Field::StdoutText, "1\n");
        screen.set_text(Field::StderrText, "ignored while hidden");

        assert_eq!(
            screen.render(),
            "Finished\n  exit code: 0\n  time:      0.01s\n--- stdout ---\n1\n"
        );
    }

    #[test]
    fn test_render_error_panel() {
        let mut screen = TerminalScreen::new();
        screen.show(Region::WaitingIndicator);
        screen.set_visible(Region::WaitingIndicator, false);
        screen.show(Region::ErrorPanel);
        screen.set_text(Field::ErrorMessageText, "backend unreachable");

        assert_eq!(screen.visible_regions(), vec![Region::ErrorPanel]);
        assert_eq!(screen.render(), "❌ Error: backend unreachable\n");
    }
}
