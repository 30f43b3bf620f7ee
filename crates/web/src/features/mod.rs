pub mod events;
pub mod hidden;
pub mod rankings;
pub mod teams;
