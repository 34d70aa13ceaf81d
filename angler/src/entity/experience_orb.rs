use angler_core::math::Vector3;

use crate::entity::{Entity, EntityId, EntityType};

#[derive(Clone, Debug)]
pub struct ExperienceOrb {
    pub entity: Entity,
    /// Experience points granted on pickup.
    pub amount: i32,
}

impl ExperienceOrb {
    pub fn new(entity_id: EntityId, pos: Vector3<f64>, amount: i32) -> Self {
        let mut entity = Entity::new(entity_id, EntityType::ExperienceOrb);
        entity.set_pos(pos);
        Self { entity, amount }
    }
}
