use anyhow::Result;
use owo_colors::OwoColorize;
use yinyang_core::{DisplayEvent, EventCatalog, Group, schedule};

use crate::render::{GroupRender, Render};

pub fn run(group: Group, all: bool) -> Result<()> {
    let catalog = EventCatalog::bundled()?;

    let upcoming = schedule::upcoming_events_for(group, catalog.events());

    println!("{} — Upcoming Events", group.themed_name());
    println!();

    if upcoming.is_empty() {
        println!(
            "  {}",
            "No upcoming events scheduled at the moment.".dimmed()
        );
        println!(
            "  {}",
            "Check back soon or follow us on social media for announcements!".dimmed()
        );
    } else {
        print_events(&upcoming);
    }

    if all {
        let past = schedule::past_events_for(group, catalog.events());
        if !past.is_empty() {
            println!();
            println!("{} — Past Events", group.themed_name());
            println!();
            print_events(&past);
        }
    }

    Ok(())
}

fn print_events(events: &[DisplayEvent]) {
    for (i, event) in events.iter().enumerate() {
        println!("{}", event.render());

        // Spacing between events, but not after the last one
        if i < events.len() - 1 {
            println!();
        }
    }
}
