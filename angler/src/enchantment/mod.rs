use angler_core::text::color::NamedColor;
use angler_core::text::TextComponent;
use angler_core::Identifier;
use serde::Deserialize;

use crate::lang;

pub mod fishing_fanatic;
pub mod registry;

pub use registry::EnchantmentRegistry;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Enchantment Rarity
pub enum Rarity {
    Common,
    UnCommon,
    Rare,
    VeryRare,
}

/// Which items an enchantment can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    FishingRod,
    Weapon,
    Breakable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
}

/// A stackable, leveled modifier attachable to an item. Levels are persisted
/// as `{id, lvl}` entries on the item's tag data, not here; this struct is
/// the immutable definition shared by every stack carrying the enchantment.
#[derive(Debug, Clone)]
pub struct Enchantment {
    pub identifier: Identifier,
    pub rarity: Rarity,
    pub category: ItemCategory,
    pub slots: Vec<EquipmentSlot>,
    pub max_level: i32,
    pub treasure: bool,
    enchantability_base: i32,
    enchantability_span: i32,
}

impl Enchantment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identifier: Identifier,
        rarity: Rarity,
        category: ItemCategory,
        slots: Vec<EquipmentSlot>,
        max_level: i32,
        treasure: bool,
        enchantability_base: i32,
        enchantability_span: i32,
    ) -> Self {
        Self {
            identifier,
            rarity,
            category,
            slots,
            max_level,
            treasure,
            enchantability_base,
            enchantability_span,
        }
    }

    pub fn min_enchantability(&self, level: i32) -> i32 {
        self.enchantability_base * level
    }

    pub fn max_enchantability(&self, level: i32) -> i32 {
        self.min_enchantability(level) + self.enchantability_span
    }

    /// Bonus melee damage granted per level when the enchanted item is used
    /// as a weapon.
    pub fn attack_bonus(&self, level: i32) -> f32 {
        level as f32
    }

    /// Display name for the given level. The capped level gets a gray
    /// "True" qualifier in front of the name.
    pub fn translated_name(&self, level: i32) -> TextComponent<'static> {
        let key = format!(
            "enchantment.{}.{}",
            self.identifier.namespace, self.identifier.path
        );
        let name = lang::translate(&key);

        if level == self.max_level {
            let qualifier = lang::translate("angler.true_level");
            TextComponent::text_string(format!("{qualifier} {name}"))
                .color_named(NamedColor::Gray)
        } else {
            TextComponent::text_string(name)
        }
    }
}
