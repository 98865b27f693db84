mod engine;
mod session;
mod target;
mod tick;
mod trigger;

pub use engine::{remaining_ms, CelebrationEvent, CountdownEngine};
pub use session::CountdownSession;
pub use target::{compute_target, CountdownZone};
pub use tick::{TickTimer, TICK_INTERVAL};
pub use trigger::{CelebrationTrigger, Transition};
