//! Armor mitigation.

/// Health lost when armor meets or exceeds the incoming damage. Also the
/// floor for any hit that gets past armor.
pub const GRAZE_DAMAGE: f32 = 1.0;

/// How an incoming hit was converted into health loss.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mitigation {
    /// No armor: the full amount goes through.
    Unarmored(f32),
    /// Armor soaked part of the hit; the excess goes through, at least a graze.
    Reduced(f32),
    /// Armor matched or exceeded the hit; a flat graze goes through.
    Graze,
}

impl Mitigation {
    /// Health the defender loses.
    pub fn health_loss(&self) -> f32 {
        match *self {
            Self::Unarmored(loss) | Self::Reduced(loss) => loss,
            Self::Graze => GRAZE_DAMAGE,
        }
    }

    pub fn is_graze(&self) -> bool {
        matches!(self, Self::Graze)
    }
}

/// Apply the armor threshold to an incoming hit.
///
/// # Formula
///
/// ```text
/// armor == 0           -> loss = incoming
/// 0 < armor < incoming -> loss = max(incoming - armor, 1)
/// armor >= incoming    -> loss = 1 (graze)
/// ```
///
/// Armor is a threshold, not a pool: it is never consumed. An armored
/// defender always loses at least [`GRAZE_DAMAGE`] per landed hit.
pub fn mitigate(armor: f32, incoming: f32) -> Mitigation {
    if armor <= 0.0 {
        Mitigation::Unarmored(incoming)
    } else if armor < incoming {
        Mitigation::Reduced((incoming - armor).max(GRAZE_DAMAGE))
    } else {
        Mitigation::Graze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_above_incoming_grazes() {
        let result = mitigate(15.0, 10.0);
        assert!(result.is_graze());
        assert_eq!(result.health_loss(), 1.0);
    }

    #[test]
    fn armor_below_incoming_subtracts_armor() {
        assert_eq!(mitigate(15.0, 20.0), Mitigation::Reduced(5.0));
        assert_eq!(mitigate(15.0, 20.0).health_loss(), 5.0);
    }

    #[test]
    fn armor_equal_to_incoming_grazes() {
        let result = mitigate(20.0, 20.0);
        assert!(result.is_graze());
        assert_eq!(result.health_loss(), GRAZE_DAMAGE);
    }

    #[test]
    fn fractional_excess_is_floored_to_a_graze() {
        assert_eq!(mitigate(15.0, 15.5), Mitigation::Reduced(1.0));
    }

    #[test]
    fn no_armor_takes_everything() {
        assert_eq!(mitigate(0.0, 20.0), Mitigation::Unarmored(20.0));
        assert_eq!(mitigate(0.0, 20.0).health_loss(), 20.0);
    }
}
