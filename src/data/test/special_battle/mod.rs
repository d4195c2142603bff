use crate::{
    data::special_battle::SpecialBattleTimerRepository,
    model::special_battle::SpecialBattleTimer,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_due;
mod upsert;

fn timer(user_id: u64, npc_name: &str, ends_on: i64) -> SpecialBattleTimer {
    SpecialBattleTimer {
        user_id,
        npc_name: npc_name.to_string(),
        user_name: "ash".to_string(),
        ends_on,
        channel_id: 42,
    }
}
