use angler_core::Identifier;

use crate::entity::experience_orb::ExperienceOrb;
use crate::entity::item::ItemEntity;
use crate::entity::EntityId;
use crate::loot::{LootError, LootTable, LootTableManager};

pub enum SpawnedEntity {
    Item(ItemEntity),
    ExperienceOrb(ExperienceOrb),
}

/// The slice of the host's world this module touches: spawning entities and
/// resolving loot tables. All mutation happens on the host's tick thread.
pub struct World {
    loot_table_manager: LootTableManager,
    pub entities: Vec<SpawnedEntity>,
    next_entity_id: EntityId,
}

impl World {
    pub fn new(loot_table_manager: LootTableManager) -> Self {
        Self {
            loot_table_manager,
            entities: Vec::new(),
            next_entity_id: 0,
        }
    }

    pub fn new_entity_id(&mut self) -> EntityId {
        self.next_entity_id += 1;
        self.next_entity_id
    }

    pub fn spawn_entity(&mut self, entity: SpawnedEntity) {
        self.entities.push(entity);
    }

    pub fn loot_table(&self, identifier: &Identifier) -> Result<&LootTable, LootError> {
        self.loot_table_manager.get_loot_table(identifier)
    }

    pub fn item_entities(&self) -> impl Iterator<Item = &ItemEntity> {
        self.entities.iter().filter_map(|entity| match entity {
            SpawnedEntity::Item(item) => Some(item),
            _ => None,
        })
    }

    pub fn experience_orbs(&self) -> impl Iterator<Item = &ExperienceOrb> {
        self.entities.iter().filter_map(|entity| match entity {
            SpawnedEntity::ExperienceOrb(orb) => Some(orb),
            _ => None,
        })
    }
}
