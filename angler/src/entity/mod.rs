use angler_core::math::Vector3;
use uuid::Uuid;

pub mod experience_orb;
pub mod item;
pub mod player;

pub type EntityId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityType {
    Player,
    Item,
    ExperienceOrb,
}

/// Common state shared by everything placed in a world.
#[derive(Clone, Debug)]
pub struct Entity {
    /// A unique identifier for the entity
    pub entity_id: EntityId,
    pub uuid: Uuid,
    /// The type of entity (e.g., player, item)
    pub entity_type: EntityType,
    /// The entity's current position in the world
    pub pos: Vector3<f64>,
    /// The entity's current velocity vector
    pub velocity: Vector3<f64>,
}

impl Entity {
    pub fn new(entity_id: EntityId, entity_type: EntityType) -> Self {
        Self {
            entity_id,
            uuid: Uuid::new_v4(),
            entity_type,
            pos: Vector3::new(0.0, 0.0, 0.0),
            velocity: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn set_pos(&mut self, pos: Vector3<f64>) {
        self.pos = pos;
    }

    pub fn set_velocity(&mut self, velocity: Vector3<f64>) {
        self.velocity = velocity;
    }
}
