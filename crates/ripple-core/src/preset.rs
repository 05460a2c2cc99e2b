//! Potential preset selection.

use std::fmt;

/// One of the fixed set of potential-field generators.
///
/// Presets form a cycle: any integer index maps onto a preset via
/// [`Preset::from_index`] (modulo the count), and [`Preset::next`] /
/// [`Preset::prev`] wrap at the ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Circular well: `−V_char` inside radius 0.3 of the origin.
    #[default]
    Well,
    /// Circular barrier: `+V_char` inside radius 0.3 of the origin.
    Barrier,
    /// Harmonic bowl: `V_char·(X² + Y²)`.
    Harmonic,
    /// Corrugated quartic: cosine corrugation on a quartic bowl.
    CorrugatedQuartic,
}

impl Preset {
    /// Number of presets in the cycle.
    pub const COUNT: usize = 4;

    /// All presets in index order.
    pub const ALL: [Preset; Preset::COUNT] = [
        Preset::Well,
        Preset::Barrier,
        Preset::Harmonic,
        Preset::CorrugatedQuartic,
    ];

    /// Map an arbitrary index onto the preset cycle.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Position of this preset in the cycle, in `[0, COUNT)`.
    pub fn index(self) -> usize {
        match self {
            Preset::Well => 0,
            Preset::Barrier => 1,
            Preset::Harmonic => 2,
            Preset::CorrugatedQuartic => 3,
        }
    }

    /// The next preset, wrapping after the last.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The previous preset, wrapping before the first.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Well => "well",
            Preset::Barrier => "barrier",
            Preset::Harmonic => "harmonic",
            Preset::CorrugatedQuartic => "corrugated-quartic",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_round_trips() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_index(preset.index()), preset);
        }
    }

    #[test]
    fn next_and_prev_are_inverse() {
        for preset in Preset::ALL {
            assert_eq!(preset.next().prev(), preset);
            assert_eq!(preset.prev().next(), preset);
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut p = Preset::Well;
        for _ in 0..Preset::COUNT {
            p = p.next();
        }
        assert_eq!(p, Preset::Well);
    }

    proptest! {
        #[test]
        fn from_index_is_cyclic(i in 0usize..10_000) {
            prop_assert_eq!(Preset::from_index(i), Preset::from_index(i + Preset::COUNT));
        }
    }
}
