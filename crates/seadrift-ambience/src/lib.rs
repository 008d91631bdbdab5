//! Ambient scene components for the seadrift terminal page.
//!
//! Four independent pieces: a time-of-day palette clock, a pointer-driven
//! parallax tracker, a drifting particle field with cursor repulsion, and a
//! scripted "typing with typos" tagline animation. Each owns its mutable
//! state exclusively; the binary ticks all of them once per frame and
//! composes their output. None of them depends on another, and the absence
//! of any one never blocks the rest.

mod color;
mod field;
mod palette;
mod parallax;
mod typing;

pub use color::{hsl_to_rgb, hsla_on_dark, mix};
pub use field::{Particle, ParticleField, PARTICLE_COUNT, REPEL_RADIUS};
pub use palette::{PaletteClock, PALETTE_INTERVAL_MS, PROP_SEA_DEEP, PROP_SEA_FOAM, PROP_SEA_MID};
pub use parallax::{ParallaxTracker, PROP_MOUSE_X, PROP_MOUSE_Y};
pub use typing::{TypingAnimator, TypingScript, TypingStep, TYPING_START_DELAY_MS};
