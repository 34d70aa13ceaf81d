use std::{collections::HashMap, sync::LazyLock};

const EN_US_JSON: &str = include_str!("../assets/en_us.json");

pub static TRANSLATIONS: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    serde_json::from_str(EN_US_JSON).expect("Could not parse en_us.json language file.")
});

/// Resolves a translation key, falling back to the key itself so missing
/// entries stay visible in game instead of vanishing.
pub fn translate(key: &str) -> String {
    TRANSLATIONS
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod test {
    use super::translate;

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate("angler.not_a_key"), "angler.not_a_key");
    }

    #[test]
    fn level_up_line_is_present() {
        assert_eq!(
            translate("angler.fanatic_level_up"),
            "Fishing Fanatic has leveled up!"
        );
    }
}
