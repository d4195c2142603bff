//! Raises goal counters from the game's clan stats embeds.
//!
//! A stats embed shows the invoker's own total on top (`You're Rank N ... with X catches!`) and
//! one block per member below:
//!
//! ```text
//! **1** misty
//! <:dexcaught:123> 1,204 <:oldrod:456> 88
//! ```
//!
//! Totals only ever raise the cached counters. Announcements triggered here go to the goal
//! tracker channel only.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::{from_game, Listener, ListenerContext};
use crate::{
    error::AppError,
    model::{goal::GoalPeriod, message::InboundMessage},
    service::goal::{GoalService, GoalTrigger},
    util::parse::parse_count,
};

static RANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(\d+)\*\*\s+(.+)$").expect("valid regex"));
static CAUGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:<:dexcaught:\d+>|:dexcaught:)\s*([\d,]+)").expect("valid regex")
});
static FISHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:<:oldrod:\d+>|:oldrod:)\s*([\d,]+)").expect("valid regex")
});
static TOP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"You're Rank \d+ in your clan's (weekly|monthly) stats — with ([\d,]+) catches!")
        .expect("valid regex")
});
static PAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Page (\d+)").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRow {
    pub name: String,
    pub pokemon: u64,
    pub fish: u64,
}

/// Period of a stats embed from its title.
pub fn stats_period(title: &str) -> Option<GoalPeriod> {
    if title.contains("Clan Weekly Stats") {
        Some(GoalPeriod::Weekly)
    } else if title.contains("Clan Monthly Stats") {
        Some(GoalPeriod::Monthly)
    } else {
        None
    }
}

/// Page number from a footer like `Page 2/5 • ...`; embeds without one are page 1.
pub fn page_number(footer: &str) -> u32 {
    PAGE.captures(footer)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(1)
}

/// The invoker's own total, when the top line belongs to `period`.
pub fn top_line(description: &str, period: GoalPeriod) -> Option<u64> {
    let caps = TOP_LINE.captures(description)?;
    if &caps[1] != period.as_str() {
        return None;
    }
    parse_count(&caps[2])
}

/// Member blocks of a stats embed, in the order shown.
pub fn parse_rows(description: &str) -> Vec<StatsRow> {
    let mut rows = Vec::new();
    let mut lines = description.lines().map(str::trim).peekable();

    while let Some(line) = lines.next() {
        let Some(caps) = RANK_LINE.captures(line) else {
            continue;
        };
        let name = caps[2].trim_matches('*').trim().to_string();

        let Some(stats) = lines.next_if(|next| CAUGHT.is_match(next) || FISHED.is_match(next))
        else {
            continue;
        };
        let count = |re: &Regex| {
            re.captures(stats)
                .and_then(|c| parse_count(&c[1]))
                .unwrap_or(0)
        };

        rows.push(StatsRow {
            name,
            pokemon: count(&CAUGHT),
            fish: count(&FISHED),
        });
    }

    rows
}

pub struct ClanStats;

#[async_trait]
impl Listener for ClanStats {
    fn name(&self) -> &'static str {
        "clan_stats"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        from_game(msg)
            && msg
                .embed()
                .is_some_and(|e| stats_period(e.title()).is_some())
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let Some(embed) = msg.embed() else {
            return Ok(());
        };
        let Some(period) = stats_period(embed.title()) else {
            return Ok(());
        };
        let Some(invoker) = msg.invoker.as_ref() else {
            tracing::debug!("Stats message {} has no invoker", msg.message_id);
            return Ok(());
        };

        let page = page_number(embed.footer());
        if !ctx
            .state
            .caches
            .processed_stats
            .first_seen((msg.message_id, page))
        {
            return Ok(());
        }

        let caches = &ctx.state.caches;
        let channel_id = caches
            .members
            .get(invoker.user_id)
            .and_then(|m| m.channel_id);
        for p in GoalPeriod::ALL {
            caches
                .goal(p)
                .ensure(invoker.user_id, &invoker.user_name, channel_id);
        }

        let goals = GoalService::new(&ctx.state, &ctx.http);

        if page == 1 {
            let top_line = top_line(embed.description(), period);
            if let Some(total) = top_line {
                tracing::debug!("{} reports {} {} catches", invoker.user_name, total, period);
            }
            goals
                .check_and_announce(
                    invoker.user_id,
                    msg.channel_id,
                    GoalTrigger::Stats { period, top_line },
                )
                .await;
        }

        let cache = caches.goal(period);
        let mut raised = 0;
        for row in parse_rows(embed.description()) {
            let Some(member) = caches.members.find_by_name(&row.name) else {
                continue;
            };
            if !cache.raise_counts(member.user_id, &member.user_name, row.pokemon, row.fish) {
                continue;
            }
            raised += 1;
            goals
                .check_and_announce(
                    member.user_id,
                    msg.channel_id,
                    GoalTrigger::Stats {
                        period,
                        top_line: None,
                    },
                )
                .await;
        }

        tracing::debug!(
            "Processed {} stats page {} of message {}, {} members raised",
            period,
            page,
            msg.message_id,
            raised
        );

        Ok(())
    }
}
