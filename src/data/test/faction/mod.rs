use crate::{
    data::{faction_ball::FactionBallRepository, faction_member::FactionMemberRepository},
    model::faction::{Faction, FactionMember},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::faction_member::FactionMemberFactory};

mod ball;
mod member;
