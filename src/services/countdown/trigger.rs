use crate::models::countdown::CelebrationState;

/// Result of feeding one remaining-time observation to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// `Waiting -> Celebrated` happened on this observation
    Fired,
}

/// One-shot celebration guard.
///
/// `Waiting -> Celebrated` happens the first time a non-positive remaining
/// time is observed. Nothing moves it back, including a clock that later
/// reads before the target again.
#[derive(Debug, Clone, Default)]
pub struct CelebrationTrigger {
    state: CelebrationState,
}

impl CelebrationTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CelebrationState {
        self.state
    }

    pub fn observe(&mut self, remaining_ms: i64) -> Transition {
        match self.state {
            CelebrationState::Waiting if remaining_ms <= 0 => {
                self.state = CelebrationState::Celebrated;
                Transition::Fired
            }
            CelebrationState::Waiting | CelebrationState::Celebrated => Transition::Unchanged,
        }
    }
}
