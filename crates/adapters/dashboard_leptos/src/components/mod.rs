mod skeleton;
mod stat_card;
mod time_stats;

pub use skeleton::StatGridSkeleton;
pub use stat_card::StatCard;
pub use time_stats::TimeStatsGrid;
