use angler_core::text::TextComponent;

use crate::entity::{Entity, EntityId, EntityType};
use crate::item::ItemStack;

pub struct Player {
    pub entity: Entity,
    /// Biases loot table resolution toward rarer outcomes.
    pub luck: f32,
    /// The equipped tool. Enchantment levels are persisted on its tag data.
    pub main_hand: ItemStack,
    last_status_message: Option<TextComponent<'static>>,
}

impl Player {
    pub fn new(entity_id: EntityId, main_hand: ItemStack) -> Self {
        Self {
            entity: Entity::new(entity_id, EntityType::Player),
            luck: 0.0,
            main_hand,
            last_status_message: None,
        }
    }

    /// Displays transient status text above the hotbar.
    pub fn send_status_message(&mut self, message: TextComponent<'static>) {
        log::debug!("status message: {}", message.to_plain());
        self.last_status_message = Some(message);
    }

    pub fn last_status_message(&self) -> Option<&TextComponent<'static>> {
        self.last_status_message.as_ref()
    }
}
