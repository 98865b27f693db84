//! Confetti effect calls and burst scheduling.
//!
//! The countdown only decides *when* confetti fires and with which
//! parameters. Drawing the particles is the job of whatever implements
//! [`EffectsSink`].

mod burst;
mod params;

pub use burst::{BurstSchedule, BurstScheduler, BURST_WINDOW_MS, FRAME_INTERVAL_US};
pub use params::{
    random_burst_origin, ConfettiParams, EffectsSink, Origin, BURST_FRAME_PARTICLES,
    BURST_FRAME_TICKS, DEFAULT_TICKS,
};

#[cfg(test)]
pub use params::MockEffectsSink;
