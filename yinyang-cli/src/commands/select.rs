use anyhow::{Context, Result};
use dialoguer::Select;
use yinyang_core::{FileSelectionStore, Group, SelectionStore};

use crate::render::GroupRender;

pub fn run(group_arg: Option<&str>) -> Result<()> {
    let group = match group_arg {
        Some(input) => crate::parse_group(input)?,
        None => prompt_group()?,
    };

    let mut store =
        FileSelectionStore::open_default().context("Could not open the selection store")?;
    store
        .set_active(group)
        .context("Could not save the selection")?;

    println!("Selected: {}", group.themed_name());
    println!("Run `yinyang events` to see what's coming up.");

    Ok(())
}

/// The landing screen: pick a side.
fn prompt_group() -> Result<Group> {
    let groups = Group::both();
    let labels: Vec<String> = groups
        .iter()
        .map(|g| format!("{} — {}", g.name(), g.profile().tagline))
        .collect();

    let picked = Select::new()
        .with_prompt("Which ensemble?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(groups[picked])
}
