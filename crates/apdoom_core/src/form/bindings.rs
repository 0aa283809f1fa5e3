//! Declarative enable/disable rules between form controls.
//!
//! A control is enabled only when every binding that targets it holds.
//! Front ends re-evaluate the table after any edit instead of wiring one
//! handler per checkbox.

use crate::config::Settings;

use super::fields::SettingField;

/// Condition a binding checks against the current settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// A toggle field must have the given value.
    Toggle { field: SettingField, is: bool },
    /// The selected game must support level flipping.
    GameSupportsFlipLevels,
}

impl Condition {
    /// Whether the condition holds for `settings`.
    pub fn holds(&self, settings: &Settings) -> bool {
        match self {
            Condition::Toggle { field, is } => field.toggle_value(settings) == Some(*is),
            Condition::GameSupportsFlipLevels => settings.launcher.game.supports_flip_levels(),
        }
    }
}

/// A rule: `target` is enabled only while `condition` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub condition: Condition,
    pub target: SettingField,
}

const fn when_on(field: SettingField, target: SettingField) -> Binding {
    Binding {
        condition: Condition::Toggle { field, is: true },
        target,
    }
}

const fn when_off(field: SettingField, target: SettingField) -> Binding {
    Binding {
        condition: Condition::Toggle { field, is: false },
        target,
    }
}

/// Every binding of the launcher form.
pub const BINDINGS: &[Binding] = &[
    // Resolution only applies in windowed mode
    when_off(SettingField::Fullscreen, SettingField::Width),
    when_off(SettingField::Fullscreen, SettingField::Height),
    // Each override flag unlocks its value
    when_on(SettingField::OverrideDifficulty, SettingField::Difficulty),
    when_on(SettingField::OverrideMonsterRando, SettingField::MonsterRando),
    when_on(SettingField::OverrideItemRando, SettingField::ItemRando),
    when_on(SettingField::OverrideMusicRando, SettingField::MusicRando),
    when_on(SettingField::OverrideFlipLevels, SettingField::FlipLevels),
    when_on(SettingField::OverrideResetLevel, SettingField::ResetLevelOnDeath),
    // Heretic has no flipped levels: the whole row is disabled
    Binding {
        condition: Condition::GameSupportsFlipLevels,
        target: SettingField::OverrideFlipLevels,
    },
    Binding {
        condition: Condition::GameSupportsFlipLevels,
        target: SettingField::FlipLevels,
    },
];

/// Whether `field`'s control is enabled for `settings`.
pub fn is_enabled(field: SettingField, settings: &Settings) -> bool {
    BINDINGS
        .iter()
        .filter(|binding| binding.target == field)
        .all(|binding| binding.condition.holds(settings))
}

/// Controls whose state depends on `source` (what to refresh after it changes).
pub fn dependents_of(source: SettingField) -> Vec<SettingField> {
    let mut out: Vec<SettingField> = Vec::new();
    for binding in BINDINGS {
        let depends = match binding.condition {
            Condition::Toggle { field, .. } => field == source,
            Condition::GameSupportsFlipLevels => source == SettingField::Game,
        };
        if depends && !out.contains(&binding.target) {
            out.push(binding.target);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Game;

    #[test]
    fn fullscreen_disables_resolution() {
        let mut settings = Settings::default();
        assert!(is_enabled(SettingField::Width, &settings));
        assert!(is_enabled(SettingField::Height, &settings));

        settings.display.fullscreen = true;
        assert!(!is_enabled(SettingField::Width, &settings));
        assert!(!is_enabled(SettingField::Height, &settings));
    }

    #[test]
    fn override_flags_gate_their_values() {
        let mut settings = Settings::default();
        assert!(!is_enabled(SettingField::Difficulty, &settings));
        assert!(!is_enabled(SettingField::ResetLevelOnDeath, &settings));

        settings.advanced.override_difficulty = true;
        settings.advanced.override_reset_level = true;
        assert!(is_enabled(SettingField::Difficulty, &settings));
        assert!(is_enabled(SettingField::ResetLevelOnDeath, &settings));
        // Unrelated controls unaffected
        assert!(!is_enabled(SettingField::MusicRando, &settings));
    }

    #[test]
    fn heretic_disables_flip_levels_row() {
        let mut settings = Settings::default();
        settings.advanced.override_flip_levels = true;
        assert!(is_enabled(SettingField::OverrideFlipLevels, &settings));
        assert!(is_enabled(SettingField::FlipLevels, &settings));

        settings.launcher.game = Game::Heretic;
        assert!(!is_enabled(SettingField::OverrideFlipLevels, &settings));
        assert!(!is_enabled(SettingField::FlipLevels, &settings));
    }

    #[test]
    fn unbound_controls_are_always_enabled() {
        let settings = Settings::default();
        assert!(is_enabled(SettingField::Server, &settings));
        assert!(is_enabled(SettingField::FastMonsters, &settings));
        assert!(is_enabled(SettingField::ForceDeathLinkOff, &settings));
    }

    #[test]
    fn dependents_follow_the_table() {
        assert_eq!(
            dependents_of(SettingField::Fullscreen),
            vec![SettingField::Width, SettingField::Height]
        );
        assert_eq!(
            dependents_of(SettingField::Game),
            vec![SettingField::OverrideFlipLevels, SettingField::FlipLevels]
        );
        assert!(dependents_of(SettingField::Server).is_empty());
    }
}
