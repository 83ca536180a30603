pub mod dashboard;

pub use dashboard::AdminDashboard;
