use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy)]
#[serde(default)]
pub struct EnchantmentsConfig {
    /// Gates the bonus-catch loop of Fishing Fanatic. The level-up roll is
    /// intentionally not gated by this flag; a disabled enchantment can
    /// still gain levels on its own.
    pub fishing_fanatic: bool,
}

impl Default for EnchantmentsConfig {
    fn default() -> Self {
        Self {
            fishing_fanatic: true,
        }
    }
}
