pub use super::clan_wars_trophy::Entity as ClanWarsTrophy;
pub use super::daily_faction_ball::Entity as DailyFactionBall;
pub use super::faction_member::Entity as FactionMember;
pub use super::goal_tracker::Entity as GoalTracker;
pub use super::special_battle_timer::Entity as SpecialBattleTimer;
pub use super::timer_setting::Entity as TimerSetting;
pub use super::trophy_leaderboard_message::Entity as TrophyLeaderboardMessage;
pub use super::user_alert::Entity as UserAlert;
pub use super::user_reminder::Entity as UserReminder;
pub use super::user_timezone::Entity as UserTimezone;
