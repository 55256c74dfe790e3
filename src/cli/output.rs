use std::fmt;

use colored::Colorize;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Success,
    Warning,
    Error,
}

/// Styles CLI messages; falls back to plain labels when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Honors `NO_COLOR` on top of the configured preference.
    pub fn from_env(color_enabled: bool) -> Self {
        Self::new(color_enabled && std::env::var_os("NO_COLOR").is_none())
    }

    pub fn header(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, format!("=== {title} ==="))
    }

    pub fn success(&self, message: impl fmt::Display) -> String {
        self.decorate("✔", "OK:", message, Style::Success)
    }

    pub fn warning(&self, message: impl fmt::Display) -> String {
        self.decorate("⚠", "WARNING:", message, Style::Warning)
    }

    pub fn error(&self, message: impl fmt::Display) -> String {
        self.decorate("✖", "ERROR:", message, Style::Error)
    }

    fn decorate(
        &self,
        icon: &str,
        plain_label: &str,
        message: impl fmt::Display,
        style: Style,
    ) -> String {
        if self.color {
            self.apply_style(style, format!("{icon} {message}"))
        } else {
            format!("{plain_label} {message}")
        }
    }

    fn apply_style(&self, style: Style, text: String) -> String {
        if !self.color {
            return text;
        }
        match style {
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Error => text.red().to_string(),
            Style::Header => text.bold().to_string(),
        }
    }
}
