use angler_config::EnchantmentsConfig;
use angler_core::math::Vector3;
use angler_core::random::RandomImpl;

use crate::entity::player::Player;
use crate::item::ItemStack;
use crate::loot::LootError;
use crate::world::World;

/// A successful reel-in, as resolved by the host before handlers run.
pub struct ItemFishedEvent {
    /// The already-determined primary drop(s).
    pub drops: Vec<ItemStack>,
    /// Where the bobber sat when the catch happened.
    pub hook_pos: Vector3<f64>,
    rod_damage: i32,
}

impl ItemFishedEvent {
    pub fn new(drops: Vec<ItemStack>, hook_pos: Vector3<f64>) -> Self {
        Self {
            drops,
            hook_pos,
            rod_damage: 1,
        }
    }

    pub fn primary_drop(&self) -> Option<&ItemStack> {
        self.drops.first()
    }

    /// Durability the rod will lose once the event resolves.
    pub fn rod_damage(&self) -> i32 {
        self.rod_damage
    }

    /// Overrides the durability cost the host applies to the rod.
    pub fn damage_rod_by(&mut self, damage: i32) {
        self.rod_damage = damage;
    }
}

/// Everything a catch handler may read or mutate, borrowed for one event.
pub struct FishedContext<'a, R: RandomImpl> {
    pub world: &'a mut World,
    pub player: &'a mut Player,
    pub event: &'a mut ItemFishedEvent,
    pub rng: &'a mut R,
    pub config: EnchantmentsConfig,
}

/// Invoked synchronously by the host's catch-resolution path, replacing the
/// broadcast event bus the host exposes to other modules.
pub trait FishedEventHandler {
    fn on_item_fished<R: RandomImpl>(&self, ctx: FishedContext<'_, R>) -> Result<(), LootError>;
}
