use std::collections::HashMap;

use angler_core::{random::RandomImpl, Identifier};
use serde::Deserialize;
use thiserror::Error;

use crate::item::ItemStack;

const FISHING_JSON: &str = include_str!("../../assets/fishing.json");

#[derive(Error, Debug)]
pub enum LootError {
    #[error("No loot table registered for {0}")]
    UnknownTable(Identifier),
}

/// A weighted pool of possible reward stacks, resolved against a context.
#[derive(Deserialize, Clone, Debug)]
pub struct LootTable {
    pub pools: Vec<LootPool>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LootPool {
    #[serde(default = "default_rolls")]
    pub rolls: u32,
    pub entries: Vec<LootPoolEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LootPoolEntry {
    pub name: Identifier,
    #[serde(default = "default_weight")]
    pub weight: i32,
    /// Per point of luck, this much is added to the effective weight.
    #[serde(default)]
    pub quality: f32,
}

const fn default_rolls() -> u32 {
    1
}

const fn default_weight() -> i32 {
    1
}

impl LootPoolEntry {
    fn effective_weight(&self, luck: f32) -> i32 {
        (self.weight + (self.quality * luck).floor() as i32).max(0)
    }
}

impl LootTable {
    /// One full pool-resolution pass: every pool contributes its rolls.
    pub fn generate_loot(
        &self,
        rng: &mut impl RandomImpl,
        context: &LootContext,
    ) -> Vec<ItemStack> {
        let mut stacks = Vec::new();
        for pool in &self.pools {
            for _ in 0..pool.rolls {
                if let Some(entry) = pool.pick(rng, context) {
                    stacks.push(ItemStack::new(entry.name.clone()));
                }
            }
        }
        stacks
    }
}

impl LootPool {
    fn pick(&self, rng: &mut impl RandomImpl, context: &LootContext) -> Option<&LootPoolEntry> {
        let total: i32 = self
            .entries
            .iter()
            .map(|entry| entry.effective_weight(context.luck))
            .sum();
        if total <= 0 {
            return None;
        }

        let mut roll = rng.next_bounded_i32(total);
        for entry in &self.entries {
            let weight = entry.effective_weight(context.luck);
            if roll < weight {
                return Some(entry);
            }
            roll -= weight;
        }
        None
    }
}

/// Request-scoped inputs biasing loot resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct LootContext {
    pub luck: f32,
}

impl LootContext {
    pub fn builder() -> LootContextBuilder {
        LootContextBuilder::default()
    }
}

#[derive(Default)]
pub struct LootContextBuilder {
    luck: f32,
}

impl LootContextBuilder {
    pub fn with_luck(mut self, luck: f32) -> Self {
        self.luck = luck;
        self
    }

    pub fn build(self) -> LootContext {
        LootContext { luck: self.luck }
    }
}

pub struct LootTableManager {
    tables: HashMap<Identifier, LootTable>,
}

impl LootTableManager {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Loads the loot tables shipped with the module.
    pub fn bootstrap() -> Self {
        let tables: HashMap<Identifier, LootTable> =
            serde_json::from_str(FISHING_JSON).expect("Could not parse fishing.json loot tables.");
        Self { tables }
    }

    pub fn insert(&mut self, identifier: Identifier, table: LootTable) {
        self.tables.insert(identifier, table);
    }

    pub fn get_loot_table(&self, identifier: &Identifier) -> Result<&LootTable, LootError> {
        self.tables
            .get(identifier)
            .ok_or_else(|| LootError::UnknownTable(identifier.clone()))
    }
}

impl Default for LootTableManager {
    fn default() -> Self {
        Self::new()
    }
}
