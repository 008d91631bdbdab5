//! Core value types for the seadrift ambient scene.

mod period;
mod style;

pub use period::{Hsl, Palette, TimePeriod};
pub use style::{StyleMap, StyleSink, StyleValue};
