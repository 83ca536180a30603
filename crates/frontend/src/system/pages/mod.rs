pub mod debug;
pub mod login;

pub use debug::DebugPage;
pub use login::LoginPage;
