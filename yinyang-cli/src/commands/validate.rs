use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use owo_colors::OwoColorize;
use yinyang_core::{EventCatalog, schedule};

pub fn run(data: Option<&Path>) -> Result<()> {
    let catalog = match data {
        Some(path) => EventCatalog::load(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => EventCatalog::bundled()?,
    };

    let mut problems = 0;

    for event in catalog.events() {
        if event.calendar_date().is_none() {
            problems += 1;
            println!(
                "  {} {} has an unparseable date: {:?}",
                "~".yellow(),
                event.id,
                event.date
            );
        }
    }

    let today = Local::now().date_naive();
    for event in schedule::stale_upcoming(catalog.events(), today) {
        problems += 1;
        println!(
            "  {} {} is marked upcoming but dated {}",
            "~".yellow(),
            event.id,
            event.date
        );
    }

    if problems == 0 {
        println!("{} events, no problems found.", catalog.len());
    } else {
        println!();
        println!(
            "{} events, {} {}.",
            catalog.len(),
            problems,
            if problems == 1 { "problem" } else { "problems" }
        );
    }

    Ok(())
}
