use std::sync::Arc;

use angler_core::math::Vector3;
use angler_core::random::RandomImpl;
use angler_core::text::color::NamedColor;
use angler_core::text::TextComponent;
use angler_core::Identifier;

use crate::enchantment::{Enchantment, EquipmentSlot, ItemCategory, Rarity};
use crate::entity::experience_orb::ExperienceOrb;
use crate::entity::item::ItemEntity;
use crate::entity::player::Player;
use crate::event::{FishedContext, FishedEventHandler};
use crate::item::ItemStack;
use crate::lang;
use crate::loot::{LootContext, LootError};
use crate::world::{SpawnedEntity, World};

pub const MAX_LEVEL: i32 = 6;

/// Chance per enchantment level to draw one extra pass from the fishing
/// loot table.
pub const EXTRA_CATCH_CHANCE: f32 = 0.33334;

pub fn fishing_fanatic_id() -> Identifier {
    Identifier::new("angler", "fishing_fanatic")
}

pub fn fishing_loot_table() -> Identifier {
    Identifier::vanilla("gameplay/fishing")
}

pub fn fishing_fanatic() -> Enchantment {
    Enchantment::new(
        fishing_fanatic_id(),
        Rarity::UnCommon,
        ItemCategory::FishingRod,
        vec![EquipmentSlot::MainHand],
        MAX_LEVEL,
        true,
        10,
        20,
    )
}

/// Chance for the enchantment to gain a level on a catch, shrinking as the
/// level approaches the cap. Exactly zero at the cap.
pub fn level_up_chance(current_level: i32) -> f64 {
    f64::from(MAX_LEVEL - current_level) / 100.0
}

/// Resolves one successful catch: bonus-catch rolls, reward spawning, the
/// level-up roll, and the player notification.
pub struct FanaticRewardResolver {
    enchantment: Arc<Enchantment>,
}

impl FanaticRewardResolver {
    pub fn new(enchantment: Arc<Enchantment>) -> Self {
        Self { enchantment }
    }

    fn try_increase_level(&self, player: &mut Player, rng: &mut impl RandomImpl) -> bool {
        let level = player.main_hand.enchantment_level(&self.enchantment);
        let should_increase = rng.next_f64() < level_up_chance(level);

        if should_increase && level < self.enchantment.max_level {
            if level == 0 {
                player.main_hand.add_enchantment(&self.enchantment, 1);
            } else {
                player.main_hand.set_enchantment_level(&self.enchantment, level + 1);
            }
            true
        } else {
            false
        }
    }
}

impl FishedEventHandler for FanaticRewardResolver {
    fn on_item_fished<R: RandomImpl>(&self, ctx: FishedContext<'_, R>) -> Result<(), LootError> {
        let FishedContext {
            world,
            player,
            event,
            rng,
            config,
        } = ctx;

        let level = player.main_hand.enchantment_level(&self.enchantment);
        let loot_context = LootContext::builder().with_luck(player.luck).build();

        let mut rewards = RewardTally::new();
        if let Some(primary) = event.primary_drop() {
            rewards.add(primary.display_name());
        }

        let mut extra_items = 0;
        let mut attempt = 0;
        while attempt < level && config.fishing_fanatic {
            if rng.next_f32() < EXTRA_CATCH_CHANCE {
                let extra_rewards = world
                    .loot_table(&fishing_loot_table())?
                    .generate_loot(rng, &loot_context);

                for extra_reward in extra_rewards {
                    rewards.add(extra_reward.display_name());
                    spawn_reward(world, player, event.hook_pos, extra_reward, rng);
                    extra_items += 1;
                }
            }
            attempt += 1;
        }

        if self.try_increase_level(player, rng) {
            player.send_status_message(
                TextComponent::text_string(lang::translate("angler.fanatic_level_up")).bold(),
            );
        } else if rewards.total() > 1 {
            player.send_status_message(reward_summary(&rewards));
        }

        event.damage_rod_by(event.rod_damage() + extra_items);

        let orb_value = extra_items + rng.next_bounded_i32(2 * extra_items + 1);
        let orb_pos = player.entity.pos.add(&Vector3::new(0.0, 0.5, 0.0));
        let orb = ExperienceOrb::new(world.new_entity_id(), orb_pos, orb_value);
        world.spawn_entity(SpawnedEntity::ExperienceOrb(orb));

        Ok(())
    }
}

/// Drops the reward near the bobber and arcs it gently toward the player.
fn spawn_reward(
    world: &mut World,
    player: &Player,
    hook_pos: Vector3<f64>,
    reward: ItemStack,
    rng: &mut impl RandomImpl,
) {
    let pos = Vector3::new(
        hook_pos.x + 0.50 * rng.next_f64(),
        hook_pos.y + 0.25 * rng.next_f64(),
        hook_pos.z + 0.50 * rng.next_f64(),
    );

    let delta = player.entity.pos.sub(&pos);
    let upward_boost = delta.length_squared().powf(0.25) * 0.08;
    let velocity = Vector3::new(
        0.1 * delta.x,
        0.1 * delta.y + upward_boost,
        0.1 * delta.z,
    );

    let mut item_entity = ItemEntity::new(world.new_entity_id(), pos, reward);
    item_entity.entity.set_velocity(velocity);
    world.spawn_entity(SpawnedEntity::Item(item_entity));
}

/// Ephemeral multiset of reward display names collected during one catch.
/// Keeps first-seen order so equal counts render stably.
struct RewardTally {
    entries: Vec<(String, u32)>,
}

impl RewardTally {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add(&mut self, name: String) {
        for (seen, count) in &mut self.entries {
            if *seen == name {
                *count += 1;
                return;
            }
        }
        self.entries.push((name, 1));
    }

    fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    fn by_descending_count(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        // stable, so ties keep first-seen order
        entries.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
        entries
    }
}

fn reward_summary(rewards: &RewardTally) -> TextComponent<'static> {
    let mut message = TextComponent::text("(").color_named(NamedColor::White);

    let entries = rewards.by_descending_count();
    let last = entries.len().saturating_sub(1);
    for (i, (name, count)) in entries.iter().enumerate() {
        let color = if i == 0 {
            NamedColor::White
        } else {
            NamedColor::Gold
        };
        message = message.add_child(TextComponent::text_string((*name).to_string()).color_named(color));

        if *count > 1 {
            message = message
                .add_child(TextComponent::text_string(format!(" x{count}")).color_named(NamedColor::Gold));
        }

        if i != last {
            message = message.add_child(TextComponent::text(", ").color_named(NamedColor::White));
        }
    }

    message.add_child(TextComponent::text(")").color_named(NamedColor::White))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use angler_config::EnchantmentsConfig;
    use angler_core::math::Vector3;
    use angler_core::random::{LegacyRand, RandomImpl};
    use angler_core::Identifier;

    use super::{
        fishing_fanatic, fishing_loot_table, level_up_chance, reward_summary,
        FanaticRewardResolver, RewardTally, EXTRA_CATCH_CHANCE, MAX_LEVEL,
    };
    use crate::entity::player::Player;
    use crate::event::{FishedContext, FishedEventHandler, ItemFishedEvent};
    use crate::item::ItemStack;
    use crate::loot::{LootPool, LootPoolEntry, LootTable, LootTableManager};
    use crate::world::World;

    /// Wraps the production random source and records what gets drawn.
    struct CountingRand {
        inner: LegacyRand,
        f32_draws: Vec<f32>,
        f64_draws: u32,
    }

    impl RandomImpl for CountingRand {
        fn from_seed(seed: u64) -> Self {
            Self {
                inner: LegacyRand::from_seed(seed),
                f32_draws: Vec::new(),
                f64_draws: 0,
            }
        }

        fn next_i32(&mut self) -> i32 {
            self.inner.next_i32()
        }

        fn next_bounded_i32(&mut self, bound: i32) -> i32 {
            self.inner.next_bounded_i32(bound)
        }

        fn next_i64(&mut self) -> i64 {
            self.inner.next_i64()
        }

        fn next_bool(&mut self) -> bool {
            self.inner.next_bool()
        }

        fn next_f32(&mut self) -> f32 {
            let value = self.inner.next_f32();
            self.f32_draws.push(value);
            value
        }

        fn next_f64(&mut self) -> f64 {
            self.f64_draws += 1;
            self.inner.next_f64()
        }
    }

    fn entry(name: &str, weight: i32) -> LootPoolEntry {
        LootPoolEntry {
            name: Identifier::vanilla(name),
            weight,
            quality: 0.0,
        }
    }

    fn world_with_table(rolls: u32, entries: Vec<LootPoolEntry>) -> World {
        let mut manager = LootTableManager::new();
        manager.insert(
            fishing_loot_table(),
            LootTable {
                pools: vec![LootPool { rolls, entries }],
            },
        );
        World::new(manager)
    }

    fn player_with_rod_level(world: &mut World, level: i32) -> Player {
        let enchantment = fishing_fanatic();
        let mut rod = ItemStack::new(Identifier::vanilla("fishing_rod"));
        if level > 0 {
            rod.add_enchantment(&enchantment, level);
        }
        let mut player = Player::new(world.new_entity_id(), rod);
        player.entity.set_pos(Vector3::new(8.0, 3.0, 8.0));
        player
    }

    fn stick_catch() -> ItemFishedEvent {
        ItemFishedEvent::new(
            vec![ItemStack::new(Identifier::vanilla("stick"))],
            Vector3::new(2.0, 1.0, 3.0),
        )
    }

    fn config(fishing_fanatic: bool) -> EnchantmentsConfig {
        EnchantmentsConfig { fishing_fanatic }
    }

    fn resolver() -> FanaticRewardResolver {
        FanaticRewardResolver::new(Arc::new(fishing_fanatic()))
    }

    fn resolve<R: RandomImpl>(
        world: &mut World,
        player: &mut Player,
        event: &mut ItemFishedEvent,
        rng: &mut R,
        enabled: bool,
    ) {
        resolver()
            .on_item_fished(FishedContext {
                world,
                player,
                event,
                rng,
                config: config(enabled),
            })
            .unwrap();
    }

    #[test]
    fn bonus_attempts_match_enchantment_level() {
        for level in 0..=MAX_LEVEL {
            let mut world = world_with_table(1, vec![entry("bone", 1)]);
            let mut player = player_with_rod_level(&mut world, level);
            let mut event = stick_catch();
            let mut rng = CountingRand::from_seed(0);

            resolve(&mut world, &mut player, &mut event, &mut rng, true);

            assert_eq!(rng.f32_draws.len(), level as usize);
            let successes = rng
                .f32_draws
                .iter()
                .filter(|draw| **draw < EXTRA_CATCH_CHANCE)
                .count();
            assert_eq!(world.item_entities().count(), successes);
        }
    }

    #[test]
    fn disabled_config_skips_bonus_catches_but_not_level_up() {
        let mut world = world_with_table(1, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, 5);
        let mut event = stick_catch();
        // first f64 draw for this seed is ~0.006, below the 0.01 chance at level 5
        let mut rng = CountingRand::from_seed(5120);

        resolve(&mut world, &mut player, &mut event, &mut rng, false);

        assert!(rng.f32_draws.is_empty());
        assert_eq!(rng.f64_draws, 1);
        assert_eq!(world.item_entities().count(), 0);
        assert_eq!(
            player.main_hand.enchantment_level(&fishing_fanatic()),
            6
        );
        let message = player.last_status_message().unwrap();
        assert_eq!(message.to_plain(), "Fishing Fanatic has leveled up!");

        // the orb still spawns, worth nothing without extras
        let orb = world.experience_orbs().next().unwrap();
        assert_eq!(orb.amount, 0);
    }

    #[test]
    fn no_level_up_at_max_level() {
        let mut world = world_with_table(1, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, MAX_LEVEL);
        let mut event = stick_catch();
        // first f64 draw ~0.0004, under every positive chance
        let mut rng = LegacyRand::from_seed(5184);

        resolve(&mut world, &mut player, &mut event, &mut rng, false);

        assert_eq!(
            player.main_hand.enchantment_level(&fishing_fanatic()),
            MAX_LEVEL
        );
        assert!(player.last_status_message().is_none());
    }

    #[test]
    fn level_up_creates_entry_at_level_one() {
        let mut world = world_with_table(1, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, 0);
        let mut event = stick_catch();
        // first f64 draw ~0.052, below the 0.06 chance at level 0
        let mut rng = LegacyRand::from_seed(4608);

        resolve(&mut world, &mut player, &mut event, &mut rng, true);

        assert_eq!(player.main_hand.enchantment_level(&fishing_fanatic()), 1);
        assert_eq!(player.main_hand.nbt.get_list("Enchantments").unwrap().len(), 1);

        let message = player.last_status_message().unwrap();
        assert_eq!(message.to_plain(), "Fishing Fanatic has leveled up!");
        assert_eq!(message.style.bold, Some(true));
    }

    #[test]
    fn level_up_increments_existing_entry() {
        let mut world = world_with_table(1, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, 3);
        let mut event = stick_catch();
        // first f64 draw ~0.006, below the 0.03 chance at level 3
        let mut rng = LegacyRand::from_seed(5120);

        resolve(&mut world, &mut player, &mut event, &mut rng, false);

        assert_eq!(player.main_hand.enchantment_level(&fishing_fanatic()), 4);
        assert_eq!(player.main_hand.nbt.get_list("Enchantments").unwrap().len(), 1);
    }

    #[test]
    fn quiet_catch_shows_no_message() {
        let mut world = world_with_table(1, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, 0);
        let mut event = stick_catch();
        // first f64 draw ~0.73, the level-up fails
        let mut rng = LegacyRand::from_seed(0);

        resolve(&mut world, &mut player, &mut event, &mut rng, true);

        assert!(player.last_status_message().is_none());
        assert_eq!(event.rod_damage(), 1);
        assert_eq!(world.item_entities().count(), 0);
        assert_eq!(world.experience_orbs().next().unwrap().amount, 0);
    }

    #[test]
    fn bonus_catches_build_reward_summary() {
        let mut world = world_with_table(1, vec![entry("bone", 1), entry("stick", 1)]);
        let mut player = player_with_rod_level(&mut world, 2);
        let mut event = stick_catch();
        // both bonus rolls succeed, drawing one Bone and one Stick; the
        // level-up roll fails
        let mut rng = LegacyRand::from_seed(4109);

        resolve(&mut world, &mut player, &mut event, &mut rng, true);

        assert_eq!(world.item_entities().count(), 2);
        assert_eq!(event.rod_damage(), 3);

        let message = player.last_status_message().unwrap();
        assert_eq!(message.to_plain(), "(Stick x2, Bone)");

        let orb = world.experience_orbs().next().unwrap();
        assert_eq!(orb.amount, 4);
    }

    #[test]
    fn extra_items_scale_rod_damage_and_orb_value() {
        let mut world = world_with_table(3, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, 1);
        let mut event = stick_catch();
        // the single bonus roll succeeds, yielding three Bones; the level-up
        // roll fails
        let mut rng = LegacyRand::from_seed(4096);

        resolve(&mut world, &mut player, &mut event, &mut rng, true);

        assert_eq!(world.item_entities().count(), 3);
        assert_eq!(event.rod_damage(), 1 + 3);

        let orb = world.experience_orbs().next().unwrap();
        assert_eq!(orb.amount, 7);
        assert!(orb.amount >= 3 && orb.amount <= 9);

        let message = player.last_status_message().unwrap();
        assert_eq!(message.to_plain(), "(Bone x3, Stick)");
    }

    #[test]
    fn spawned_rewards_arc_toward_player() {
        let mut world = world_with_table(3, vec![entry("bone", 1)]);
        let mut player = player_with_rod_level(&mut world, 1);
        let mut event = stick_catch();
        let hook_pos = event.hook_pos;
        let mut rng = LegacyRand::from_seed(4096);

        resolve(&mut world, &mut player, &mut event, &mut rng, true);

        for item in world.item_entities() {
            let pos = item.entity.pos;
            assert!(pos.x >= hook_pos.x && pos.x <= hook_pos.x + 0.50);
            assert!(pos.y >= hook_pos.y && pos.y <= hook_pos.y + 0.25);
            assert!(pos.z >= hook_pos.z && pos.z <= hook_pos.z + 0.50);

            let delta = player.entity.pos.sub(&pos);
            let expected_boost = delta.length_squared().powf(0.25) * 0.08;
            let velocity = item.entity.velocity;
            assert!((velocity.x - 0.1 * delta.x).abs() < 1e-9);
            assert!((velocity.y - (0.1 * delta.y + expected_boost)).abs() < 1e-9);
            assert!((velocity.z - 0.1 * delta.z).abs() < 1e-9);
        }
    }

    #[test]
    fn level_up_chance_decreases_to_zero() {
        for level in 0..MAX_LEVEL {
            assert!(level_up_chance(level) > level_up_chance(level + 1));
        }
        assert_eq!(level_up_chance(MAX_LEVEL), 0.0);
    }

    #[test]
    fn reward_summary_breaks_ties_by_first_seen() {
        let mut tally = RewardTally::new();
        for name in ["Stick", "Bone", "Bone", "Stick"] {
            tally.add(name.to_string());
        }

        assert_eq!(tally.total(), 4);
        assert_eq!(
            reward_summary(&tally).to_plain(),
            "(Stick x2, Bone x2)"
        );
    }
}
