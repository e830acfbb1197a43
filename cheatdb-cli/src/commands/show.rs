use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cheatdb_core::{BadgeFlags, Credit, Game, MetadataKind};

use crate::commands::open_game;
use crate::error::CliError;

pub(crate) fn run_show(root: &Path, query: &str, raw: bool, json: bool) -> Result<(), CliError> {
    let mut game = open_game(root, query)?;
    game.compute_badges();

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    print_header(&game);

    for group in &game.groups {
        let name = if group.is_ungrouped() {
            group.name.if_supports_color(Stdout, |t| t.dimmed()).to_string()
        } else {
            group.name.if_supports_color(Stdout, |t| t.bold()).to_string()
        };
        log::info!("{} ({})", name, group.codes.len());
        for entry in &group.codes {
            let badges = entry.badge_flags.unwrap_or_default();
            log::info!("  {}{}", entry.name, format_badges(badges));
            if raw && !entry.raw.is_empty() {
                for line in entry.raw.lines() {
                    log::info!(
                        "      {}",
                        line.if_supports_color(Stdout, |t| t.dimmed())
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_header(game: &Game) {
    log::info!(
        "{} {}",
        game.name.if_supports_color(Stdout, |t| t.bold()),
        game.folder
            .display()
            .if_supports_color(Stdout, |t| t.dimmed()),
    );

    for &kind in MetadataKind::all() {
        let values: Vec<&str> = game.metadata_values(kind).collect();
        if !values.is_empty() {
            log::info!(
                "  {}: {}",
                kind,
                values.join(", ").if_supports_color(Stdout, |t| t.cyan())
            );
        }
    }

    if !game.credits.is_empty() {
        let credits: Vec<String> = game.credits.iter().map(format_credit).collect();
        log::info!("  Credits: {}", credits.join(", "));
    }

    if let Some(note) = &game.top_note_html {
        log::info!("  Note: {} line(s)", note.lines().count());
    }

    log::info!(
        "  {} groups, {} codes",
        game.groups.len(),
        game.entry_count()
    );
    log::info!("");
}

fn format_credit(credit: &Credit) -> String {
    match &credit.role {
        Some(role) => format!("{} ({role})", credit.name),
        None => credit.name.clone(),
    }
}

fn format_badges(badges: BadgeFlags) -> String {
    let mut out = String::new();
    if badges.has_mods {
        out.push_str(&format!(
            " {}",
            "[mods]".if_supports_color(Stdout, |t| t.yellow())
        ));
    }
    if badges.has_note {
        out.push_str(&format!(
            " {}",
            "[note]".if_supports_color(Stdout, |t| t.green())
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_formatting() {
        assert_eq!(format_credit(&Credit::new("Jane", Some("Testing"))), "Jane (Testing)");
        assert_eq!(format_credit(&Credit::new("John", None)), "John");
    }

    #[test]
    fn no_badges_format_to_nothing() {
        assert_eq!(format_badges(BadgeFlags::default()), "");
    }
}
