//! Embed builders for command replies.
//!
//! Builders are pure functions of their inputs so replies can be checked without a
//! Discord connection.

use std::time::Duration;

use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::model::{character::Character, skill::Skill};

pub const ABOUT_AUTHOR: &str = "Cantrip - An All-Purpose D&D Discord Bot";

pub const ABOUT_DESCRIPTION: &str = "Cantrip is a Discord bot, written in Rust using serenity and poise, \
with the goal of making the popular tabletop game \"Dungeons and Dragons 5th Edition\" (D&D 5e) \
easier to organize and play by providing a suite of organizational and planning tools.";

pub const AUTHORS: &str = "Scott Fisher\nSinjin Serrano\nDavid Wolfe";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ICON_URL: &str =
    "https://bitbucket.org/comp-350-2/cantrip-discord-bot/raw/a168d2e16fe99b7386af18d785bd5d001adbd9fb/icon.jpg";

pub const LOGO_URL: &str =
    "https://bitbucket.org/comp-350-2/cantrip-discord-bot/raw/a168d2e16fe99b7386af18d785bd5d001adbd9fb/logo.jpg";

pub const CHARACTER_SHEET_THUMBNAIL_URL: &str =
    "https://bitbucket.org/comp-350-2/cantrip-discord-bot/raw/1e3af2deeecf8f8134cda012b7dc92026b59bfc5/assets/character_sheet_mini.jpg";

/// Builds the `/about` embed.
///
/// # Arguments
/// - `command_names` - Names of the registered top-level commands, without the slash
/// - `latency` - Current gateway heartbeat latency
pub fn about_embed(command_names: &[String], latency: Duration) -> CreateEmbed {
    let commands = command_names
        .iter()
        .map(|name| format!("/{}\n", name))
        .collect::<String>();

    CreateEmbed::new()
        .title("About:")
        .description(ABOUT_DESCRIPTION)
        .colour(Colour::BLUE)
        .author(CreateEmbedAuthor::new(ABOUT_AUTHOR).icon_url(ICON_URL))
        .thumbnail(LOGO_URL)
        .field("Commands:", format!("```{}```", commands), true)
        .field("Authors:", AUTHORS, true)
        .field("Version:", VERSION, true)
        .footer(CreateEmbedFooter::new(format!(
            "Bot latency is {}ms",
            latency.as_millis()
        )))
}

/// Builds the character sheet embed shown by `/character view`.
///
/// # Arguments
/// - `character` - Character to display
/// - `owner_name` - Display name of the owning user
/// - `owner_avatar_url` - Avatar URL of the owning user
pub fn character_sheet_embed(
    character: &Character,
    owner_name: &str,
    owner_avatar_url: &str,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&character.name)
        .description(character.summary())
        .colour(Colour::DARK_RED)
        .author(
            CreateEmbedAuthor::new(format!("{}'s Character Sheet", owner_name))
                .icon_url(owner_avatar_url),
        )
        .thumbnail(CHARACTER_SHEET_THUMBNAIL_URL)
        .field("Initiative:", character.initiative.to_string(), false);

    for (label, score) in character.abilities.labeled() {
        embed = embed.field(format!("{}:", label), score.to_string(), true);
    }

    if !character.proficiencies.is_empty() {
        embed = embed.field(
            "Proficient Skills:",
            Skill::join_display_names(&character.proficiencies),
            false,
        );
    }

    embed.image(&character.portrait).footer(CreateEmbedFooter::new(format!(
        "Created on {}",
        character.created.format("%m/%d/%Y")
    )))
}
