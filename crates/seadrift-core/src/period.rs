//! Time-of-day periods and their sea color palettes.

use std::fmt;

/// An HSL color triple with integer components, as used by the palette table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees (0-359).
    pub h: u16,
    /// Saturation percentage (0-100).
    pub s: u8,
    /// Lightness percentage (0-100).
    pub l: u8,
}

impl Hsl {
    /// Construct an HSL triple.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.h, self.s, self.l)
    }
}

/// The three sea colors owned by a [`TimePeriod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Darkest layer, the top of the scene.
    pub deep: Hsl,
    /// Middle layer.
    pub mid: Hsl,
    /// Lightest layer, the foam line at the bottom.
    pub foam: Hsl,
}

impl Palette {
    const fn new(deep: Hsl, mid: Hsl, foam: Hsl) -> Self {
        Self { deep, mid, foam }
    }
}

/// Named segment of the day used to select the ambient palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Dawn,
    Morning,
    Afternoon,
    Dusk,
    Night,
}

impl TimePeriod {
    /// Resolve the period for an hour of day (0-23) via fixed half-open
    /// intervals: [5,8) dawn, [8,12) morning, [12,17) afternoon, [17,20)
    /// dusk, otherwise night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..8 => Self::Dawn,
            8..12 => Self::Morning,
            12..17 => Self::Afternoon,
            17..20 => Self::Dusk,
            _ => Self::Night,
        }
    }

    /// The fixed deep/mid/foam triples for this period.
    ///
    /// Morning and afternoon share the same daylight palette.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dawn => Palette::new(Hsl::new(28, 30, 16), Hsl::new(20, 25, 25), Hsl::new(15, 20, 37)),
            Self::Morning | Self::Afternoon => {
                Palette::new(Hsl::new(210, 30, 15), Hsl::new(205, 25, 23), Hsl::new(200, 18, 35))
            }
            Self::Dusk => Palette::new(Hsl::new(25, 28, 16), Hsl::new(22, 22, 25), Hsl::new(18, 18, 37)),
            Self::Night => Palette::new(Hsl::new(215, 35, 14), Hsl::new(210, 28, 22), Hsl::new(205, 22, 33)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, TimePeriod::Night)]
    #[case(4, TimePeriod::Night)]
    #[case(5, TimePeriod::Dawn)]
    #[case(7, TimePeriod::Dawn)]
    #[case(8, TimePeriod::Morning)]
    #[case(11, TimePeriod::Morning)]
    #[case(12, TimePeriod::Afternoon)]
    #[case(16, TimePeriod::Afternoon)]
    #[case(17, TimePeriod::Dusk)]
    #[case(19, TimePeriod::Dusk)]
    #[case(20, TimePeriod::Night)]
    #[case(23, TimePeriod::Night)]
    fn hour_resolves_to_period(#[case] hour: u32, #[case] expected: TimePeriod) {
        assert_eq!(TimePeriod::from_hour(hour), expected);
    }

    #[test]
    fn morning_and_afternoon_share_a_palette() {
        assert_eq!(TimePeriod::Morning.palette(), TimePeriod::Afternoon.palette());
    }

    #[test]
    fn hsl_formats_as_css_function() {
        assert_eq!(Hsl::new(215, 35, 14).to_string(), "hsl(215 35% 14%)");
        assert_eq!(Hsl::new(28, 30, 16).to_string(), "hsl(28 30% 16%)");
    }
}
