//! Guild member events.

use serenity::all::{Context, GuildId, Member, User};

use crate::{
    config::Config,
    service::{member::MemberService, operator_log},
    state::AppState,
};

/// Whether departures from `guild_id` are cleaned up. Only the home guild counts once one is
/// configured.
pub fn tracks_guild(config: &Config, guild_id: u64) -> bool {
    config.home_guild_id.map_or(true, |home| home == guild_id)
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &AppState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if !tracks_guild(&state.config, guild_id.get()) {
        return;
    }

    match MemberService::new(state).remove_member(user.id.get()).await {
        Ok(cleanup) if cleanup.was_member || cleanup.alerts > 0 => {
            tracing::info!(
                "{} left guild {}: removed {} alerts, {} special battle timers, cancelled {} timers",
                user.name,
                guild_id,
                cleanup.alerts,
                cleanup.special_battles,
                cleanup.timers_cancelled
            );
        }
        Ok(_) => tracing::debug!("{} left guild {} with nothing stored", user.name, guild_id),
        Err(e) => operator_log::report(&ctx.http, &state.config, "member_removal", &e).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_home_guild_is_tracked_when_configured() {
        let mut config = Config::test_default();
        assert!(tracks_guild(&config, 8));

        config.home_guild_id = Some(7);
        assert!(tracks_guild(&config, 7));
        assert!(!tracks_guild(&config, 8));
    }
}
