/// Duel configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Upper bound on exchanges before the engine gives up on a duel.
    /// Mitigation guarantees progress, so reaching it means a regression.
    pub max_exchanges: u32,
}

impl DuelConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_EXCHANGES: u32 = 1_000;

    pub fn new() -> Self {
        Self {
            max_exchanges: Self::DEFAULT_MAX_EXCHANGES,
        }
    }

    pub fn with_max_exchanges(max_exchanges: u32) -> Self {
        Self {
            max_exchanges: max_exchanges.max(1),
        }
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
