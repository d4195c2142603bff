//! `/trophies`: clan wars trophy bookkeeping for the clan wars server.

use serenity::all::Role;

use super::Context;
use crate::{
    data::trophy::ClanWarsTrophyRepository,
    error::AppError,
    model::trophy::{leaderboard_pages, TrophyChange, TrophyOp},
    service::trophy::{ClanRef, TrophyService},
};

/// Rejects invocations outside the configured clan wars server.
fn ensure_clan_wars_guild(configured: Option<u64>, guild_id: Option<u64>) -> Result<(), AppError> {
    match (configured, guild_id) {
        (Some(expected), Some(actual)) if expected == actual => Ok(()),
        _ => Err(AppError::BadRequest(
            "Trophy commands can only be used in the clan wars server.".to_string(),
        )),
    }
}

fn summary(op: TrophyOp, amount: u64, changes: &[TrophyChange]) -> String {
    let verb = match op {
        TrophyOp::Add => "Added",
        TrophyOp::Remove => "Removed",
    };

    let mut lines = vec![format!("{} {} trophies:", verb, amount)];
    lines.extend(changes.iter().map(TrophyChange::summary_line));
    lines.join("\n")
}

fn clan_refs(roles: impl IntoIterator<Item = Option<Role>>) -> Vec<ClanRef> {
    roles
        .into_iter()
        .flatten()
        .map(|role| ClanRef {
            role_id: role.id.get(),
            name: role.name,
        })
        .collect()
}

async fn apply_and_refresh(
    ctx: Context<'_>,
    op: TrophyOp,
    amount: u64,
    clans: Vec<ClanRef>,
) -> Result<(), AppError> {
    let state = ctx.data();
    let service = TrophyService::new(state, ctx.http());

    let changes = service.apply(op, amount, &clans).await?;
    ctx.say(summary(op, amount, &changes)).await?;

    if let Err(e) = service.refresh_leaderboard().await {
        tracing::error!("Failed to refresh the trophy leaderboard: {}", e);
    }

    Ok(())
}

/// Clan wars trophies
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    subcommands("add", "remove", "leaderboard", "reset"),
    subcommand_required
)]
pub async fn trophies(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Give trophies to up to ten clans
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_ROLES")]
async fn add(
    ctx: Context<'_>,
    #[description = "Trophies per clan"] amount: u64,
    #[description = "Clan role"] clan1: Role,
    clan2: Option<Role>,
    clan3: Option<Role>,
    clan4: Option<Role>,
    clan5: Option<Role>,
    clan6: Option<Role>,
    clan7: Option<Role>,
    clan8: Option<Role>,
    clan9: Option<Role>,
    clan10: Option<Role>,
) -> Result<(), AppError> {
    ctx.defer().await?;
    ensure_clan_wars_guild(
        ctx.data().config.clan_wars_guild_id,
        ctx.guild_id().map(|g| g.get()),
    )?;

    let clans = clan_refs([
        Some(clan1),
        clan2,
        clan3,
        clan4,
        clan5,
        clan6,
        clan7,
        clan8,
        clan9,
        clan10,
    ]);
    apply_and_refresh(ctx, TrophyOp::Add, amount, clans).await
}

/// Take trophies from up to ten clans
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_ROLES")]
async fn remove(
    ctx: Context<'_>,
    #[description = "Trophies per clan"] amount: u64,
    #[description = "Clan role"] clan1: Role,
    clan2: Option<Role>,
    clan3: Option<Role>,
    clan4: Option<Role>,
    clan5: Option<Role>,
    clan6: Option<Role>,
    clan7: Option<Role>,
    clan8: Option<Role>,
    clan9: Option<Role>,
    clan10: Option<Role>,
) -> Result<(), AppError> {
    ctx.defer().await?;
    ensure_clan_wars_guild(
        ctx.data().config.clan_wars_guild_id,
        ctx.guild_id().map(|g| g.get()),
    )?;

    let clans = clan_refs([
        Some(clan1),
        clan2,
        clan3,
        clan4,
        clan5,
        clan6,
        clan7,
        clan8,
        clan9,
        clan10,
    ]);
    apply_and_refresh(ctx, TrophyOp::Remove, amount, clans).await
}

/// Show the trophy leaderboard
#[poise::command(slash_command, prefix_command, guild_only)]
async fn leaderboard(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;
    ensure_clan_wars_guild(
        ctx.data().config.clan_wars_guild_id,
        ctx.guild_id().map(|g| g.get()),
    )?;

    let clans = ClanWarsTrophyRepository::new(&ctx.data().db)
        .get_all()
        .await?;
    let pages = leaderboard_pages(clans);
    let pages: Vec<&str> = pages.iter().map(String::as_str).collect();

    poise::builtins::paginate(ctx, &pages).await?;

    Ok(())
}

/// Clear every clan's trophies for a new season
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_ROLES")]
async fn reset(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;
    ensure_clan_wars_guild(
        ctx.data().config.clan_wars_guild_id,
        ctx.guild_id().map(|g| g.get()),
    )?;

    let deleted = TrophyService::new(ctx.data(), ctx.http()).reset().await?;

    tracing::info!("{} reset the clan wars trophies", ctx.author().name);

    ctx.say(format!(
        "✅ Trophies reset. {} clan total(s) cleared.",
        deleted
    ))
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_clan_wars_guild_is_accepted() {
        assert!(ensure_clan_wars_guild(Some(5), Some(5)).is_ok());
        assert!(ensure_clan_wars_guild(Some(5), Some(6)).is_err());
        assert!(ensure_clan_wars_guild(None, Some(5)).is_err());
        assert!(ensure_clan_wars_guild(Some(5), None).is_err());
    }

    #[test]
    fn summary_lists_each_change() {
        let changes = vec![
            TrophyChange {
                clan_name: "Straymons".to_string(),
                old: 4,
                new: 7,
            },
            TrophyChange {
                clan_name: "Cerulean".to_string(),
                old: 0,
                new: 3,
            },
        ];

        assert_eq!(
            summary(TrophyOp::Add, 3, &changes),
            "Added 3 trophies:\nStraymons: 🏆 **4** ➔ 🏆 **7**\nCerulean: 🏆 **0** ➔ 🏆 **3**"
        );
    }
}
