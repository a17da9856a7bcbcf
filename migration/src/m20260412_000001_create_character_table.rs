use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::UserId))
                    .col(string(Character::Name))
                    .col(date(Character::Created))
                    .col(integer(Character::Level))
                    .col(integer(Character::Initiative))
                    .col(integer(Character::Strength))
                    .col(integer(Character::Dexterity))
                    .col(integer(Character::Constitution))
                    .col(integer(Character::Intelligence))
                    .col(integer(Character::Wisdom))
                    .col(integer(Character::Charisma))
                    .col(string_null(Character::Proficiencies))
                    .col(string_null(Character::Race))
                    .col(string_null(Character::Class))
                    .col(string(Character::Portrait))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_character_user_id")
                    .table(Character::Table)
                    .col(Character::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    UserId,
    Name,
    Created,
    Level,
    Initiative,
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    Proficiencies,
    Race,
    Class,
    Portrait,
}
