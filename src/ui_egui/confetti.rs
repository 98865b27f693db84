//! Confetti particles painted over the whole window.
//!
//! Each effect call spawns a handful of paper rectangles that shoot out of
//! the origin, slow down, fall under gravity and fade out over their tick
//! budget. Physics advances in fixed 60 Hz steps so the motion does not
//! depend on the host frame rate.

use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::services::effects::{ConfettiParams, EffectsSink};

const STEP_SECONDS: f32 = 1.0 / 60.0;
/// Never run more than this many physics steps per frame after a stall.
const MAX_STEPS_PER_FRAME: u32 = 8;
const GRAVITY: f32 = 3.0;
const DECAY: f32 = 0.9;
const BASE_SIZE: f32 = 10.0;
const MAX_PARTICLES: usize = 4_000;

const PALETTE: [Color32; 7] = [
    Color32::from_rgb(0x26, 0xcc, 0xff),
    Color32::from_rgb(0xa2, 0x5a, 0xfd),
    Color32::from_rgb(0xff, 0x5e, 0x7e),
    Color32::from_rgb(0x88, 0xff, 0x5a),
    Color32::from_rgb(0xfc, 0xff, 0x42),
    Color32::from_rgb(0xff, 0xa6, 0x2d),
    Color32::from_rgb(0xff, 0x36, 0xff),
];

#[derive(Debug, Clone)]
struct Particle {
    pos: Pos2,
    angle: f32,
    velocity: f32,
    tick: u32,
    total_ticks: u32,
    color: Color32,
    size: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
}

impl Particle {
    fn step(&mut self) {
        self.pos.x += self.angle.cos() * self.velocity;
        self.pos.y += self.angle.sin() * self.velocity + GRAVITY;
        self.velocity *= DECAY;
        self.wobble += self.wobble_speed;
        self.tilt += 0.1;
        self.tick += 1;
    }

    fn is_alive(&self) -> bool {
        self.tick < self.total_ticks
    }

    fn opacity(&self) -> f32 {
        1.0 - self.tick as f32 / self.total_ticks.max(1) as f32
    }

    fn shape(&self) -> Shape {
        let half_w = self.size * 0.5;
        let half_h = self.size * 0.3 * self.wobble.cos().abs().max(0.15);
        let (sin, cos) = self.tilt.sin_cos();
        let corners = [
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(half_w, half_h),
            Vec2::new(-half_w, half_h),
        ]
        .map(|c| self.pos + Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos));

        Shape::convex_polygon(
            corners.to_vec(),
            self.color.gamma_multiply(self.opacity()),
            Stroke::NONE,
        )
    }
}

/// Particle system that turns effect calls into pixels.
pub struct ConfettiLayer<R: Rng = StdRng> {
    particles: Vec<Particle>,
    viewport: Rect,
    accumulator: f32,
    rng: R,
}

impl ConfettiLayer<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for ConfettiLayer<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> ConfettiLayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            particles: Vec::new(),
            viewport: Rect::from_min_size(Pos2::ZERO, Vec2::new(760.0, 620.0)),
            accumulator: 0.0,
            rng,
        }
    }

    /// Area that origin fractions are resolved against.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn is_animating(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Advance the simulation by `dt` seconds of wall time.
    pub fn advance(&mut self, dt: f32) {
        if self.particles.is_empty() {
            self.accumulator = 0.0;
            return;
        }

        self.accumulator += dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= STEP_SECONDS && steps < MAX_STEPS_PER_FRAME {
            self.step();
            self.accumulator -= STEP_SECONDS;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = 0.0;
        }
    }

    /// One fixed physics step.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn paint(&self, painter: &egui::Painter) {
        painter.extend(self.particles.iter().map(Particle::shape));
    }

    fn spawn(&mut self, params: &ConfettiParams) -> Particle {
        let origin = Pos2::new(
            self.viewport.left() + params.origin.x * self.viewport.width(),
            self.viewport.top() + params.origin.y * self.viewport.height(),
        );
        let spread = params.spread.to_radians();
        let angle = -std::f32::consts::FRAC_PI_2 + (0.5 * spread - self.rng.gen::<f32>() * spread);
        let velocity =
            params.start_velocity * 0.5 + self.rng.gen::<f32>() * params.start_velocity;

        Particle {
            pos: origin,
            angle,
            velocity,
            tick: 0,
            total_ticks: params.ticks.max(1),
            color: PALETTE[self.rng.gen_range(0..PALETTE.len())],
            size: BASE_SIZE * params.scalar,
            wobble: self.rng.gen::<f32>() * 10.0,
            wobble_speed: 0.05 + self.rng.gen::<f32>() * 0.05,
            tilt: self.rng.gen::<f32>() * std::f32::consts::PI,
        }
    }
}

impl<R: Rng> EffectsSink for ConfettiLayer<R> {
    fn fire(&mut self, params: &ConfettiParams) {
        let room = MAX_PARTICLES.saturating_sub(self.particles.len());
        let count = (params.particle_count as usize).min(room);
        for _ in 0..count {
            let particle = self.spawn(params);
            self.particles.push(particle);
        }
    }
}
