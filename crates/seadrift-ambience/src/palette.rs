//! Time-of-day palette clock.

use seadrift_core::{Palette, StyleSink, StyleValue, TimePeriod};

/// Property holding the darkest sea layer.
pub const PROP_SEA_DEEP: &str = "--sea-deep";
/// Property holding the middle sea layer.
pub const PROP_SEA_MID: &str = "--sea-mid";
/// Property holding the foam layer.
pub const PROP_SEA_FOAM: &str = "--sea-foam";

/// Interval between palette re-evaluations.
pub const PALETTE_INTERVAL_MS: u64 = 60_000;

/// Resolves the wall-clock hour to a [`TimePeriod`] and publishes its three
/// sea colors, immediately on the first tick and then once a minute.
#[derive(Debug)]
pub struct PaletteClock {
    period: TimePeriod,
    last_applied_ms: Option<u64>,
}

impl Default for PaletteClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteClock {
    /// Create a clock that has not yet applied a palette.
    pub fn new() -> Self {
        Self {
            period: TimePeriod::Night,
            last_applied_ms: None,
        }
    }

    /// The period as of the most recent apply.
    pub fn period(&self) -> TimePeriod {
        self.period
    }

    /// The palette as of the most recent apply.
    pub fn palette(&self) -> Palette {
        self.period.palette()
    }

    /// Re-evaluate on the fixed cadence. Applies on the very first call and
    /// whenever [`PALETTE_INTERVAL_MS`] has elapsed since the last apply.
    pub fn tick(&mut self, elapsed_ms: u64, hour: u32, sink: &mut impl StyleSink) {
        let due = match self.last_applied_ms {
            None => true,
            Some(at) => elapsed_ms.saturating_sub(at) >= PALETTE_INTERVAL_MS,
        };
        if due {
            self.apply(hour, sink);
            self.last_applied_ms = Some(elapsed_ms);
        }
    }

    /// Resolve the palette for `hour` and write the three sea properties.
    /// Idempotent: the same hour always produces the same writes.
    pub fn apply(&mut self, hour: u32, sink: &mut impl StyleSink) {
        self.period = TimePeriod::from_hour(hour);
        let palette = self.period.palette();
        sink.set_property(PROP_SEA_DEEP, StyleValue::Color(palette.deep));
        sink.set_property(PROP_SEA_MID, StyleValue::Color(palette.mid));
        sink.set_property(PROP_SEA_FOAM, StyleValue::Color(palette.foam));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seadrift_core::{Hsl, StyleMap};

    #[test]
    fn apply_writes_the_period_palette() {
        let mut clock = PaletteClock::new();
        let mut style = StyleMap::new();
        clock.apply(23, &mut style);

        assert_eq!(clock.period(), TimePeriod::Night);
        assert_eq!(style.color(PROP_SEA_DEEP), Some(Hsl::new(215, 35, 14)));
        assert_eq!(style.color(PROP_SEA_MID), Some(Hsl::new(210, 28, 22)));
        assert_eq!(style.color(PROP_SEA_FOAM), Some(Hsl::new(205, 22, 33)));
    }

    #[test]
    fn apply_is_idempotent_for_an_hour() {
        let mut clock = PaletteClock::new();
        let mut style = StyleMap::new();
        clock.apply(6, &mut style);
        let first = style.color(PROP_SEA_DEEP);
        clock.apply(6, &mut style);
        assert_eq!(style.color(PROP_SEA_DEEP), first);
    }

    #[test]
    fn tick_applies_immediately_then_once_per_interval() {
        let mut clock = PaletteClock::new();
        let mut style = StyleMap::new();

        clock.tick(0, 6, &mut style);
        assert_eq!(clock.period(), TimePeriod::Dawn);

        // Hour changes mid-interval are not picked up until the next apply.
        clock.tick(PALETTE_INTERVAL_MS - 1, 23, &mut style);
        assert_eq!(clock.period(), TimePeriod::Dawn);

        clock.tick(PALETTE_INTERVAL_MS, 23, &mut style);
        assert_eq!(clock.period(), TimePeriod::Night);
        assert_eq!(style.color(PROP_SEA_DEEP), Some(Hsl::new(215, 35, 14)));
    }
}
