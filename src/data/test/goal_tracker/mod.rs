use crate::{
    data::goal_tracker::GoalTrackerRepository,
    model::goal::{GoalEntry, GoalPeriod},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::goal_tracker::GoalTrackerFactory};

mod delete_period;
mod flush;
mod get_all;
mod upsert;
