use rand::rngs::StdRng;
use rand::Rng;

use super::engine::{CelebrationEvent, CountdownEngine};
use super::target::CountdownZone;
use crate::models::countdown::{CelebrationState, CountdownSnapshot};
use crate::services::clock::Clock;
use crate::services::effects::{BurstScheduler, ConfettiParams, EffectsSink};

/// Everything the countdown window does, minus the drawing.
///
/// Owns the clock, the engine and the burst scheduler. Effect calls go to
/// whichever [`EffectsSink`] the host passes to [`CountdownSession::mount`]
/// and [`CountdownSession::pump`].
pub struct CountdownSession<C: Clock, R: Rng = StdRng> {
    clock: C,
    engine: CountdownEngine,
    bursts: BurstScheduler<R>,
    mounted: bool,
}

impl<C: Clock> CountdownSession<C, StdRng> {
    pub fn new(clock: C, zone: CountdownZone) -> Self {
        let engine = CountdownEngine::from_clock(&clock, zone);
        Self::with_parts(clock, engine, BurstScheduler::from_entropy())
    }
}

impl<C: Clock, R: Rng> CountdownSession<C, R> {
    pub fn with_parts(clock: C, engine: CountdownEngine, bursts: BurstScheduler<R>) -> Self {
        Self {
            clock,
            engine,
            bursts,
            mounted: false,
        }
    }

    /// Fire the opening salvo. Only the first call has an effect.
    pub fn mount(&mut self, sink: &mut dyn EffectsSink) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        sink.fire(&ConfettiParams::opening_salvo());
    }

    /// Read the clock and advance the engine. On the celebration tick a
    /// burst is started.
    pub fn tick(&mut self) -> Option<CelebrationEvent> {
        let now = self.clock.now();
        let event = self.engine.tick(now);
        if event.is_some() {
            self.bursts.start(now);
        }
        event
    }

    /// User-requested burst. Allowed any number of times in any state and
    /// never touches the celebration state.
    pub fn burst(&mut self) {
        self.bursts.start(self.clock.now());
    }

    /// Deliver due burst frames to `sink`. Returns the number of calls made.
    pub fn pump(&mut self, sink: &mut dyn EffectsSink) -> u32 {
        self.bursts.pump(self.clock.now(), sink)
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        self.engine.snapshot()
    }

    pub fn state(&self) -> CelebrationState {
        self.engine.state()
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    /// True while a burst still has frames to deliver.
    pub fn is_bursting(&self) -> bool {
        self.bursts.is_active()
    }
}
