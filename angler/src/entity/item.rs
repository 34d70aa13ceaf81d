use angler_core::math::Vector3;

use crate::entity::{Entity, EntityId, EntityType};
use crate::item::ItemStack;

/// A dropped item stack waiting to be picked up.
#[derive(Clone, Debug)]
pub struct ItemEntity {
    pub entity: Entity,
    pub item_stack: ItemStack,
}

impl ItemEntity {
    pub fn new(entity_id: EntityId, pos: Vector3<f64>, item_stack: ItemStack) -> Self {
        let mut entity = Entity::new(entity_id, EntityType::Item);
        entity.set_pos(pos);
        Self { entity, item_stack }
    }
}
