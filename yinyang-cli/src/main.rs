mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use yinyang_core::{FileSelectionStore, Group, SelectionStore};

#[derive(Parser)]
#[command(name = "yinyang")]
#[command(about = "Browse the Yashika and Ryuu taiko ensembles from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the active ensemble
    Select {
        /// Group to select ("yashika" or "ryuu"); prompts when omitted
        group: Option<String>,
    },
    /// Show upcoming events for an ensemble
    Events {
        /// Only this group (defaults to the selected ensemble)
        #[arg(short, long)]
        group: Option<String>,

        /// Also show past events
        #[arg(long)]
        all: bool,
    },
    /// Show an ensemble's profile, socials, and booking contact
    Info {
        /// Only this group (defaults to the selected ensemble)
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Open the ticket or registration page for an event
    Tickets {
        /// Event id, as shown by `yinyang events`
        event_id: String,
    },
    /// Check the event data for problems
    Validate {
        /// Events file to check instead of the bundled data
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Select { group } => commands::select::run(group.as_deref()),
        Commands::Events { group, all } => {
            let group = resolve_group(group.as_deref())?;
            commands::events::run(group, all)
        }
        Commands::Info { group } => {
            let group = resolve_group(group.as_deref())?;
            commands::info::run(group)
        }
        Commands::Tickets { event_id } => commands::tickets::run(&event_id),
        Commands::Validate { data } => commands::validate::run(data.as_deref()),
    }
}

pub(crate) fn parse_group(input: &str) -> Result<Group> {
    input.parse().map_err(|_| {
        let available: Vec<_> = Group::both().iter().map(|g| g.as_str()).collect();
        anyhow::anyhow!(
            "Group '{}' not found. Available: {}",
            input,
            available.join(", ")
        )
    })
}

/// Resolve which group a command presents: the `--group` flag wins, then
/// the persisted selection, then the default.
fn resolve_group(flag: Option<&str>) -> Result<Group> {
    let explicit = flag.map(parse_group).transpose()?;
    let stored = FileSelectionStore::open_default()
        .ok()
        .map(|store| store.active());

    Ok(Group::resolve(explicit, stored))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_group ---

    #[test]
    fn parse_group_accepts_both_literals() {
        assert_eq!(parse_group("yashika").unwrap(), Group::Yashika);
        assert_eq!(parse_group("ryuu").unwrap(), Group::Ryuu);
    }

    #[test]
    fn parse_group_error_lists_available_groups() {
        let err = parse_group("taiko").unwrap_err().to_string();
        assert!(err.contains("yashika, ryuu"));
    }
}
