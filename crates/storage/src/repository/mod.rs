pub mod event;
pub mod hidden;
pub mod team;
