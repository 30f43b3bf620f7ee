mod event;
mod hidden;
mod performance;
mod team;

pub use event::Event;
pub use hidden::HiddenFlag;
pub use performance::{Performance, parse_finish_time};
pub use team::Team;
