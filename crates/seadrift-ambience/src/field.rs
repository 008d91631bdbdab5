//! Drifting particle field with cursor repulsion.
//!
//! The simulation runs in a virtual pixel space scaled up from terminal
//! cells, so the pixel-domain constants (repulsion radius, wrap margin,
//! drift speeds) keep their meaning on a cell grid.

use std::collections::HashMap;

use fastrand::Rng;
use ratatui::style::Color;

use crate::color::hsla_on_dark;

/// Number of particles in the field for the lifetime of the scene.
pub const PARTICLE_COUNT: usize = 35;
/// Maximum distance at which the pointer pushes particles away.
pub const REPEL_RADIUS: f32 = 100.0;

/// Particles wrap once they pass this far beyond the surface edge.
const WRAP_MARGIN: f32 = 10.0;
/// Transient velocity retained each frame.
const DAMPING: f32 = 0.95;
/// Repulsion impulse scale at zero distance.
const REPEL_STRENGTH: f32 = 1.5;
/// Pointer position while no pointer is over the surface; far enough that
/// nothing is ever in repulsion range.
const POINTER_AWAY: (f32, f32) = (-1000.0, -1000.0);

/// Virtual pixels per terminal column.
const CELL_PX_X: f32 = 8.0;
/// Virtual pixels per terminal row.
const CELL_PX_Y: f32 = 16.0;

/// A single drifting particle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in virtual pixel space.
    pub x: f32,
    pub y: f32,
    /// Constant drift, fixed at creation.
    pub base_vx: f32,
    pub base_vy: f32,
    /// Transient velocity accumulated from repulsion; decays every frame.
    pub vx: f32,
    pub vy: f32,
    /// Draw radius in virtual pixels (1-3).
    pub radius: f32,
    /// Draw opacity (0.15-0.40).
    pub opacity: f32,
    /// Hue in degrees (200-215).
    pub hue: f32,
}

impl Particle {
    fn spawn(width: f32, height: f32, rng: &mut Rng) -> Self {
        Self {
            x: rng.f32() * width,
            y: rng.f32() * height,
            base_vx: 0.15 + rng.f32() * 0.25,
            base_vy: 0.05 + rng.f32() * 0.15,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0 + rng.f32() * 2.0,
            opacity: 0.15 + rng.f32() * 0.25,
            hue: 200.0 + rng.f32() * 15.0,
        }
    }
}

/// The particle population and the surface it drifts across.
#[derive(Debug)]
pub struct ParticleField {
    /// Surface extent in virtual pixels.
    width: f32,
    height: f32,
    /// Pointer position in virtual pixels, or the away sentinel.
    pointer_x: f32,
    pointer_y: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field for a surface of `cols` x `rows` cells.
    ///
    /// Returns `None` when the surface has no extent; the component is then
    /// skipped entirely and silently.
    pub fn new(cols: u16, rows: u16, rng: &mut Rng) -> Option<Self> {
        if cols == 0 || rows == 0 {
            return None;
        }
        let width = cols as f32 * CELL_PX_X;
        let height = rows as f32 * CELL_PX_Y;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
        Some(Self {
            width,
            height,
            pointer_x: POINTER_AWAY.0,
            pointer_y: POINTER_AWAY.1,
            particles,
        })
    }

    /// Update the surface extent. Positions are not reflowed; particles left
    /// outside the new bounds are corrected by the next wrap check.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols as f32 * CELL_PX_X;
        self.height = rows as f32 * CELL_PX_Y;
    }

    /// Move the pointer to a cell position.
    pub fn set_pointer_cell(&mut self, col: u16, row: u16) {
        self.pointer_x = (col as f32 + 0.5) * CELL_PX_X;
        self.pointer_y = (row as f32 + 0.5) * CELL_PX_Y;
    }

    /// Reset the pointer to the off-surface sentinel.
    pub fn pointer_left(&mut self) {
        self.pointer_x = POINTER_AWAY.0;
        self.pointer_y = POINTER_AWAY.1;
    }

    /// Advance one frame: integrate drift and transient velocity, apply
    /// pointer repulsion, decay, then wrap. Under reduced motion only the
    /// wrap correction runs.
    pub fn step(&mut self, reduced_motion: bool) {
        for p in &mut self.particles {
            if !reduced_motion {
                p.x += p.base_vx + p.vx;
                p.y += p.base_vy + p.vy;

                let dx = p.x - self.pointer_x;
                let dy = p.y - self.pointer_y;
                let dist = (dx * dx + dy * dy).sqrt();
                // Zero force exactly at the center keeps the impulse finite.
                if dist > 0.0 && dist < REPEL_RADIUS {
                    let force = (1.0 - dist / REPEL_RADIUS) * REPEL_STRENGTH;
                    p.vx += dx / dist * force;
                    p.vy += dy / dist * force;
                }

                p.vx *= DAMPING;
                p.vy *= DAMPING;
            }

            if p.x > self.width + WRAP_MARGIN {
                p.x = -WRAP_MARGIN;
            }
            if p.x < -WRAP_MARGIN {
                p.x = self.width + WRAP_MARGIN;
            }
            if p.y > self.height + WRAP_MARGIN {
                p.y = -WRAP_MARGIN;
            }
            if p.y < -WRAP_MARGIN {
                p.y = self.height + WRAP_MARGIN;
            }
        }
    }

    /// The current population.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Per-cell glyphs and colors for compositing over the backdrop.
    pub fn overlay(&self) -> HashMap<(u16, u16), (char, Color)> {
        let cols = (self.width / CELL_PX_X) as i32;
        let rows = (self.height / CELL_PX_Y) as i32;
        let mut cells = HashMap::with_capacity(self.particles.len());
        for p in &self.particles {
            let col = (p.x / CELL_PX_X).floor() as i32;
            let row = (p.y / CELL_PX_Y).floor() as i32;
            if col < 0 || row < 0 || col >= cols || row >= rows {
                continue;
            }
            let glyph = if p.radius < 1.7 {
                '·'
            } else if p.radius < 2.4 {
                '•'
            } else {
                '●'
            };
            let color = hsla_on_dark(p.hue, 0.20, 0.45, p.opacity);
            cells.insert((col as u16, row as u16), (glyph, color));
        }
        cells
    }
}
