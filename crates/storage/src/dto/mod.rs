pub mod event;
pub mod hidden;
pub mod ranking;
pub mod team;
