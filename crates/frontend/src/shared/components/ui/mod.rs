pub mod badge;
pub mod button;
pub mod spinner;

pub use badge::{Badge, OrderStatusBadge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use spinner::Spinner;
