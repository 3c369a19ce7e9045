//! Terminal rendering for core types.
//!
//! Extension traits adding colored output to yinyang-core types using
//! owo_colors, so the core crate stays free of presentation concerns.

use owo_colors::OwoColorize;
use yinyang_core::{DisplayEvent, Group, Theme};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DisplayEvent {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("  {}  {}", self.title.bold(), self.price),
            format!("  {} · {}", self.date_label, self.time)
                .dimmed()
                .to_string(),
            format!("  {}, {}", self.venue, self.location)
                .dimmed()
                .to_string(),
        ];

        if !self.description.is_empty() {
            lines.push(format!("  {}", self.description));
        }
        lines.push(format!("  {}: {}", self.cta, self.ticket_link));

        lines.join("\n")
    }
}

/// Group name tinted with its theme color.
pub trait GroupRender {
    fn themed_name(&self) -> String;
}

impl GroupRender for Group {
    fn themed_name(&self) -> String {
        match self.profile().theme {
            Theme::Blue => self.name().blue().bold().to_string(),
            Theme::Red => self.name().red().bold().to_string(),
        }
    }
}
