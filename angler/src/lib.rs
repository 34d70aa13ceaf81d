//! Gameplay extension adding the Fishing Fanatic enchantment: probabilistic
//! bonus catches, a level-up meta progression stored on the rod, and chat
//! notifications. The host server drives it through
//! [`event::FishedEventHandler`] whenever a player reels in a catch.

use log::LevelFilter;

use enchantment::registry::EnchantmentRegistry;

pub mod enchantment;
pub mod entity;
pub mod event;
pub mod item;
pub mod lang;
pub mod loot;
pub mod world;

/// Registers every enchantment this module provides. Called once by the
/// host at mod load, before any catch event is dispatched.
pub fn register_enchantments(registry: &mut EnchantmentRegistry) {
    registry.register(enchantment::fishing_fanatic::fishing_fanatic());
}

pub fn init_logger() {
    use angler_config::ANGLER_CONFIG;
    if ANGLER_CONFIG.logging.enabled {
        let mut logger = simple_logger::SimpleLogger::new();

        if !ANGLER_CONFIG.logging.timestamp {
            logger = logger.without_timestamps();
        }

        if ANGLER_CONFIG.logging.env {
            logger = logger.env();
        }

        logger = logger.with_level(convert_logger_filter(ANGLER_CONFIG.logging.level));

        logger = logger.with_colors(ANGLER_CONFIG.logging.color);
        logger = logger.with_threads(ANGLER_CONFIG.logging.threads);
        logger.init().unwrap();
    }
}

const fn convert_logger_filter(level: angler_config::logging::LevelFilter) -> LevelFilter {
    match level {
        angler_config::logging::LevelFilter::Off => LevelFilter::Off,
        angler_config::logging::LevelFilter::Error => LevelFilter::Error,
        angler_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        angler_config::logging::LevelFilter::Info => LevelFilter::Info,
        angler_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        angler_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}
