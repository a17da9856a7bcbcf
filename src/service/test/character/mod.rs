use crate::{
    error::AppError,
    model::{
        character::{AbilityScores, CreateCharacterOutcome, CreateCharacterParam},
        skill::Skill,
    },
    service::character::{CharacterService, DEFAULT_PORTRAIT_URL, MAX_CHARACTERS},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod autocomplete_names;
mod create;
mod delete;
mod get_by_name;

/// Builds create parameters as the `/character create` command would.
fn create_param(user_id: u64, name: &str) -> CreateCharacterParam {
    CreateCharacterParam {
        user_id,
        name: name.to_string(),
        level: 3,
        initiative: 1,
        abilities: AbilityScores {
            strength: 8,
            dexterity: 16,
            constitution: 12,
            intelligence: 14,
            wisdom: 10,
            charisma: 13,
        },
        proficiencies: None,
        race: None,
        class: None,
        portrait: None,
    }
}
