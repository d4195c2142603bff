mod faction;
mod goal_tracker;
mod special_battle;
mod timer_setting;
mod trophy;
mod user_alert;
mod user_reminder;
