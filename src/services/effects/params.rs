use rand::Rng;
use serde::{Deserialize, Serialize};

/// Launch point as fractions of the viewport. `y` may be slightly negative,
/// which places the origin just above the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One confetti effect call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiParams {
    pub particle_count: u32,
    /// Cone width in degrees around straight up
    pub spread: f32,
    pub start_velocity: f32,
    /// Particle size multiplier
    pub scalar: f32,
    /// Particle lifetime in physics steps
    pub ticks: u32,
    pub origin: Origin,
}

pub const DEFAULT_TICKS: u32 = 200;
pub const BURST_FRAME_TICKS: u32 = 60;
pub const BURST_FRAME_PARTICLES: u32 = 7;

impl ConfettiParams {
    /// The single call made when the window first opens.
    pub fn opening_salvo() -> Self {
        Self {
            particle_count: 100,
            spread: 60.0,
            start_velocity: 40.0,
            scalar: 0.9,
            ticks: DEFAULT_TICKS,
            origin: Origin::new(0.5, 0.6),
        }
    }

    /// One frame of a celebration burst.
    pub fn burst_frame(origin: Origin) -> Self {
        Self {
            particle_count: BURST_FRAME_PARTICLES,
            spread: 360.0,
            start_velocity: 40.0,
            scalar: 1.0,
            ticks: BURST_FRAME_TICKS,
            origin,
        }
    }
}

/// Random burst origin: `x` in `[0, 1)`, `y` in `[-0.2, 0.8)`.
pub fn random_burst_origin<R: Rng>(rng: &mut R) -> Origin {
    Origin::new(rng.gen::<f32>(), rng.gen::<f32>() - 0.2)
}

/// Receiver of confetti effect calls. The window's particle layer is the
/// real implementation.
#[cfg_attr(test, mockall::automock)]
pub trait EffectsSink {
    fn fire(&mut self, params: &ConfettiParams);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_origins_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let origin = random_burst_origin(&mut rng);
            assert!((0.0..1.0).contains(&origin.x));
            assert!((-0.2..0.8).contains(&origin.y));
        }
    }

    #[test]
    fn test_opening_salvo_values() {
        let params = ConfettiParams::opening_salvo();
        assert_eq!(params.particle_count, 100);
        assert_eq!(params.spread, 60.0);
        assert_eq!(params.start_velocity, 40.0);
        assert_eq!(params.scalar, 0.9);
        assert_eq!(params.origin, Origin::new(0.5, 0.6));
    }
}
