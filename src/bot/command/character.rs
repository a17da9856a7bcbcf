//! `/character` command group for managing player characters.
//!
//! Each user owns their own characters; names are looked up per invoking user, so two
//! users can both have a "Gandalf".

use std::time::Duration;

use poise::CreateReply;
use serenity::all::{
    ButtonStyle, ComponentInteractionCollector, CreateActionRow, CreateButton,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{embed::character_sheet_embed, Context},
    error::AppError,
    model::character::{AbilityScores, CreateCharacterOutcome, CreateCharacterParam},
    service::character::CharacterService,
};

/// How long the delete confirmation button stays active.
const DELETE_CONFIRM_TIMEOUT: Duration = Duration::from_secs(180);

const CREATE_HINT: &str =
    "You can use other `/character ...` commands to view, edit, or delete your characters if you wish.";

/// Manage your player characters
#[poise::command(
    slash_command,
    subcommands("create", "view", "delete"),
    subcommand_required
)]
pub async fn character(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Create a new player character for yourself
#[allow(clippy::too_many_arguments)]
#[poise::command(slash_command, member_cooldown = 1)]
pub async fn create(
    ctx: Context<'_>,
    #[description = "Character name"]
    #[max_length = 255]
    name: String,
    #[description = "Character level"]
    #[min = 1]
    #[max = 20]
    level: i32,
    // Attribute bounds take literals only; -20 is checked by CharacterService::create
    #[description = "Initiative modifier, between -20 and 20"]
    #[max = 20]
    initiative: i32,
    #[description = "Strength ability score"]
    #[min = 1]
    #[max = 30]
    strength: i32,
    #[description = "Dexterity ability score"]
    #[min = 1]
    #[max = 30]
    dexterity: i32,
    #[description = "Constitution ability score"]
    #[min = 1]
    #[max = 30]
    constitution: i32,
    #[description = "Intelligence ability score"]
    #[min = 1]
    #[max = 30]
    intelligence: i32,
    #[description = "Wisdom ability score"]
    #[min = 1]
    #[max = 30]
    wisdom: i32,
    #[description = "Charisma ability score"]
    #[min = 1]
    #[max = 30]
    charisma: i32,
    #[description = "Comma separated list of skills you are proficient in (e.g. 'Acrobatics, Animal Handling')"]
    #[max_length = 255]
    proficiencies: Option<String>,
    #[description = "(Optional) Character's race"]
    #[max_length = 255]
    race: Option<String>,
    #[description = "(Optional) Character's class"]
    #[max_length = 255]
    class: Option<String>,
    #[description = "(Optional) URL to image of character portrait"]
    #[max_length = 255]
    portrait: Option<String>,
) -> Result<(), AppError> {
    let db = &ctx.data().db;
    let service = CharacterService::new(db);

    let outcome = service
        .create(CreateCharacterParam {
            user_id: ctx.author().id.get(),
            name,
            level,
            initiative,
            abilities: AbilityScores {
                strength,
                dexterity,
                constitution,
                intelligence,
                wisdom,
                charisma,
            },
            proficiencies,
            race,
            class,
            portrait,
        })
        .await?;

    let reply = CreateReply::default()
        .content(create_reply_message(&outcome))
        .ephemeral(true);
    ctx.send(reply).await?;

    Ok(())
}

/// Display basic info about one of your player characters
#[poise::command(slash_command, member_cooldown = 1)]
pub async fn view(
    ctx: Context<'_>,
    #[description = "Character name"]
    #[max_length = 255]
    #[autocomplete = "autocomplete_character_name"]
    name: String,
) -> Result<(), AppError> {
    let db = &ctx.data().db;
    let service = CharacterService::new(db);

    let character = service.get_by_name(ctx.author().id.get(), &name).await?;

    let owner_name = match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().display_name().to_string(),
    };
    let owner_avatar = ctx.author().face();

    let embed = character_sheet_embed(&character, &owner_name, &owner_avatar);
    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Delete one of your player characters
///
/// The character is only removed once the invoking user presses the confirmation button.
#[poise::command(slash_command, member_cooldown = 1)]
pub async fn delete(
    ctx: Context<'_>,
    #[description = "Character name"]
    #[max_length = 255]
    #[autocomplete = "autocomplete_character_name"]
    name: String,
) -> Result<(), AppError> {
    let db = &ctx.data().db;
    let service = CharacterService::new(db);
    let user_id = ctx.author().id.get();

    let character = service.get_by_name(user_id, &name).await?;

    let confirm_id = format!("{}-delete-character", ctx.id());
    let button = CreateButton::new(confirm_id.clone())
        .label("Yes, I'm sure!")
        .style(ButtonStyle::Danger)
        .emoji('⚠');

    let reply = ctx
        .send(
            CreateReply::default()
                .content(format!(
                    "Are you absolutely sure you want to delete \"{}\"?",
                    character.name
                ))
                .components(vec![CreateActionRow::Buttons(vec![button])])
                .ephemeral(true),
        )
        .await?;

    let press = ComponentInteractionCollector::new(ctx.serenity_context())
        .author_id(ctx.author().id)
        .channel_id(ctx.channel_id())
        .timeout(DELETE_CONFIRM_TIMEOUT)
        .filter(move |press| press.data.custom_id == confirm_id)
        .await;

    let Some(press) = press else {
        reply
            .edit(
                ctx,
                CreateReply::default()
                    .content(format!(
                        "Deletion of \"{}\" was cancelled because no confirmation was received.",
                        character.name
                    ))
                    .components(vec![]),
            )
            .await?;
        return Ok(());
    };

    let result = service.delete(user_id, &character).await;

    // Answer the press on failure too, before the error reply
    press
        .create_response(
            ctx.serenity_context(),
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content(delete_response_content(&character.name, result.is_ok()))
                    .components(vec![]),
            ),
        )
        .await?;

    result?;

    tracing::debug!(
        "{} deleted character \"{}\"",
        ctx.author().name,
        character.name
    );

    Ok(())
}

/// Text replacing the delete confirmation once the button is pressed.
fn delete_response_content(name: &str, deleted: bool) -> String {
    if deleted {
        format!(
            ":white_check_mark: Character \"{}\" has successfully been deleted!",
            name
        )
    } else {
        format!("Character \"{}\" could not be deleted.", name)
    }
}

/// Suggests the invoking user's character names.
async fn autocomplete_character_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let service = CharacterService::new(&ctx.data().db);

    match service
        .autocomplete_names(ctx.author().id.get(), partial)
        .await
    {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Failed to autocomplete character names: {}", e);
            Vec::new()
        }
    }
}

/// Builds the ephemeral reply for `/character create`.
fn create_reply_message(outcome: &CreateCharacterOutcome) -> String {
    let status = match outcome {
        CreateCharacterOutcome::Created(character) => format!(
            ":white_check_mark: Character \"{}\" has successfully been created!",
            character.name
        ),
        CreateCharacterOutcome::CreatedNextOfKin {
            character,
            requested_name,
        } => format!(
            ":white_check_mark: Character \"{}\" has successfully been created!\n\
             (You already had a character named {}, so a next of kin was created)",
            character.name, requested_name
        ),
        CreateCharacterOutcome::LimitReached { limit } => format!(
            ":warning: Sorry! You can only have {} characters saved at a time.",
            limit
        ),
    };

    format!("{}\n\n{}", status, CREATE_HINT)
}
