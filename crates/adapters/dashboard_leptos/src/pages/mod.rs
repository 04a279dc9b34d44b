mod not_found;
mod time_dashboard;

pub use not_found::NotFound;
pub use time_dashboard::TimeDashboard;
