pub mod d101_admin;

pub use d101_admin::ui::AdminDashboard;
