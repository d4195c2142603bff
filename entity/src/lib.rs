pub mod prelude;

pub mod clan_wars_trophy;
pub mod daily_faction_ball;
pub mod faction_member;
pub mod goal_tracker;
pub mod special_battle_timer;
pub mod timer_setting;
pub mod trophy_leaderboard_message;
pub mod user_alert;
pub mod user_reminder;
pub mod user_timezone;
