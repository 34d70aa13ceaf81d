use angler_core::Identifier;
use angler_nbt::{NbtCompound, NbtTag};

use crate::enchantment::Enchantment;

mod item_registry;
pub use item_registry::ITEMS;

/// Name of the tag list holding `{id, lvl}` enchantment entries.
const ENCHANTMENTS_TAG: &str = "Enchantments";

/// A stack of items plus its structured tag data. The tag compound is the
/// only thing this module durably mutates; the host owns everything else.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    pub item: Identifier,
    pub item_count: u32,
    pub nbt: NbtCompound,
}

impl ItemStack {
    pub fn new(item: Identifier) -> Self {
        Self {
            item,
            item_count: 1,
            nbt: NbtCompound::new(),
        }
    }

    pub fn display_name(&self) -> String {
        match ITEMS.get(&self.item.to_string()) {
            Some(item) => item.display_name.clone(),
            None => self.item.path.clone(),
        }
    }

    /// Level of the given enchantment on this stack, 0 when absent.
    ///
    /// Matches the first tag entry whose id contains the enchantment's path,
    /// the same first-match rule used when levels are rewritten.
    pub fn enchantment_level(&self, enchantment: &Enchantment) -> i32 {
        let Some(entries) = self.nbt.get_list(ENCHANTMENTS_TAG) else {
            return 0;
        };
        for entry in entries {
            let Some(entry) = entry.extract_compound() else {
                continue;
            };
            if let Some(id) = entry.get_string("id") {
                if id.contains(&enchantment.identifier.path) {
                    return entry.get_int("lvl").unwrap_or(0);
                }
            }
        }
        0
    }

    /// Appends a new `{id, lvl}` entry, creating the tag list if needed.
    pub fn add_enchantment(&mut self, enchantment: &Enchantment, level: i32) {
        let mut entry = NbtCompound::new();
        entry.put("id".to_string(), enchantment.identifier.to_string());
        entry.put("lvl".to_string(), level);

        match self.nbt.get_list_mut(ENCHANTMENTS_TAG) {
            Some(entries) => entries.push(entry.into()),
            None => self
                .nbt
                .put(ENCHANTMENTS_TAG.to_string(), vec![NbtTag::from(entry)]),
        }
    }

    /// Rewrites the level of the first matching entry. Later duplicate
    /// entries are never touched. Returns false when no entry matched.
    pub fn set_enchantment_level(&mut self, enchantment: &Enchantment, level: i32) -> bool {
        let Some(entries) = self.nbt.get_list_mut(ENCHANTMENTS_TAG) else {
            return false;
        };
        for entry in entries {
            let Some(entry) = entry.extract_compound_mut() else {
                continue;
            };
            let matches = entry
                .get_string("id")
                .is_some_and(|id| id.contains(&enchantment.identifier.path));
            if matches {
                entry.set("lvl".to_string(), level);
                return true;
            }
        }
        false
    }
}
