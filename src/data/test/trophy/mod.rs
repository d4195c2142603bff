use crate::{
    data::trophy::{ClanWarsTrophyRepository, LeaderboardMessageRepository},
    model::trophy::ClanTrophy,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::clan_wars_trophy::ClanWarsTrophyFactory};

mod clan;
mod leaderboard_message;
