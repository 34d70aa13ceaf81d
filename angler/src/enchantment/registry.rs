use std::collections::HashMap;
use std::sync::Arc;

use angler_core::Identifier;

use super::Enchantment;

/// Enchantments known to the module, filled by explicit registration at mod
/// load instead of constructor side effects.
#[derive(Default)]
pub struct EnchantmentRegistry {
    enchantments: HashMap<Identifier, Arc<Enchantment>>,
}

impl EnchantmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, enchantment: Enchantment) -> Arc<Enchantment> {
        let identifier = enchantment.identifier.clone();
        if self.enchantments.contains_key(&identifier) {
            log::warn!("Enchantment {identifier} registered twice, keeping the first definition");
            return self.enchantments[&identifier].clone();
        }

        let enchantment = Arc::new(enchantment);
        self.enchantments
            .insert(identifier, enchantment.clone());
        enchantment
    }

    pub fn get(&self, identifier: &Identifier) -> Option<&Arc<Enchantment>> {
        self.enchantments.get(identifier)
    }
}
