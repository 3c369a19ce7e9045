use anyhow::Result;
use owo_colors::OwoColorize;
use yinyang_core::{DisplayEvent, EventCatalog};

pub fn run(event_id: &str) -> Result<()> {
    let catalog = EventCatalog::bundled()?;

    let Some(record) = catalog.find(event_id) else {
        anyhow::bail!(
            "Event '{}' not found. Run `yinyang events` to list events.",
            event_id
        );
    };

    let event = DisplayEvent::from_record(record);

    println!("{}: {}", event.cta, event.title.bold());

    if open::that(&event.ticket_link).is_err() {
        println!("(Could not open browser automatically, please open the link yourself)");
    }
    println!("{}", event.ticket_link.dimmed());

    Ok(())
}
