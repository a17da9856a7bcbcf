use crate::{bot::Context, error::AppError, model::dice::DiceSpec};

/// Rolls 1 or more of the following dice: [d4, d6, d8, d10, d12, d20]
#[poise::command(slash_command)]
pub async fn roll(
    ctx: Context<'_>,
    #[description = "Dice to roll, e.g. 2d6 or 1d20+5"] dice_spec: String,
) -> Result<(), AppError> {
    let spec = DiceSpec::parse(&dice_spec)?;
    let result = spec.roll(&mut rand::rng());

    ctx.say(result.to_string()).await?;

    Ok(())
}
