//! Launcher form state model.

use crate::config::{AdvancedSettings, ConfigSection, Settings};

use super::bindings;
use super::fields::SettingField;
use super::FormError;

/// State of one control as a front end should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub field: SettingField,
    pub value: String,
    pub enabled: bool,
}

/// Launcher form state - holds a working copy of settings.
#[derive(Debug, Clone)]
pub struct FormModel {
    settings: Settings,
    /// Sections touched since the model was created.
    dirty: Vec<ConfigSection>,
}

impl FormModel {
    /// Create from current config settings.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            dirty: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consume the form, returning the edited settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Whether any field was edited.
    pub fn is_modified(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Sections holding edits, for section-level saves.
    pub fn dirty_sections(&self) -> &[ConfigSection] {
        &self.dirty
    }

    /// Edit a field from text input.
    ///
    /// Returns the new state of every control whose enablement depends on
    /// `field`, so a front end can refresh them. On error the settings are
    /// left unchanged.
    pub fn set(
        &mut self,
        field: SettingField,
        value: &str,
    ) -> Result<Vec<ControlState>, FormError> {
        field.set(&mut self.settings, value)?;
        self.mark_dirty(field.section());

        Ok(self.controls(&bindings::dependents_of(field)))
    }

    /// Current value of a field as text.
    pub fn get(&self, field: SettingField) -> String {
        field.get(&self.settings)
    }

    /// Whether a field's control is enabled.
    pub fn is_enabled(&self, field: SettingField) -> bool {
        bindings::is_enabled(field, &self.settings)
    }

    /// State of every control in `fields`.
    pub fn controls(&self, fields: &[SettingField]) -> Vec<ControlState> {
        fields
            .iter()
            .map(|&field| ControlState {
                field,
                value: self.get(field),
                enabled: self.is_enabled(field),
            })
            .collect()
    }

    /// Restore the advanced settings to their defaults.
    ///
    /// Every override goes back to "use server setting".
    pub fn reset_advanced(&mut self) {
        self.settings.advanced = AdvancedSettings::default();
        self.mark_dirty(ConfigSection::Advanced);
    }

    fn mark_dirty(&mut self, section: ConfigSection) {
        if !self.dirty.contains(&section) {
            self.dirty.push(section);
        }
    }
}

/// Fields shown in the advanced settings dialog, in dialog order.
pub const ADVANCED_FIELDS: [SettingField; 14] = [
    SettingField::OverrideDifficulty,
    SettingField::Difficulty,
    SettingField::OverrideMonsterRando,
    SettingField::MonsterRando,
    SettingField::OverrideItemRando,
    SettingField::ItemRando,
    SettingField::OverrideMusicRando,
    SettingField::MusicRando,
    SettingField::OverrideFlipLevels,
    SettingField::FlipLevels,
    SettingField::ForceDeathLinkOff,
    SettingField::OverrideResetLevel,
    SettingField::ResetLevelOnDeath,
    SettingField::FastMonsters,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Game, MonsterRando};

    #[test]
    fn edits_mark_their_section() {
        let mut form = FormModel::from_settings(Settings::default());
        assert!(!form.is_modified());

        form.set(SettingField::SlotName, "Player1").unwrap();
        form.set(SettingField::Password, "pw").unwrap();
        form.set(SettingField::FastMonsters, "on").unwrap();

        assert!(form.is_modified());
        assert_eq!(
            form.dirty_sections(),
            &[ConfigSection::Connection, ConfigSection::Advanced]
        );
        assert_eq!(form.settings().connection.slot_name, "Player1");
    }

    #[test]
    fn edit_returns_dependent_controls() {
        let mut form = FormModel::from_settings(Settings::default());

        let affected = form.set(SettingField::Fullscreen, "on").unwrap();
        let fields: Vec<SettingField> = affected.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![SettingField::Width, SettingField::Height]);
        assert!(affected.iter().all(|c| !c.enabled));

        let affected = form.set(SettingField::Game, "heretic").unwrap();
        assert!(affected.iter().any(|c| c.field == SettingField::FlipLevels && !c.enabled));

        assert!(form.set(SettingField::SlotName, "Player1").unwrap().is_empty());
    }

    #[test]
    fn failed_edit_leaves_settings_alone() {
        let mut form = FormModel::from_settings(Settings::default());
        assert!(form.set(SettingField::Game, "hexen").is_err());
        assert_eq!(form.settings().launcher.game, Game::UltimateDoom);
        assert!(!form.is_modified());
    }

    #[test]
    fn reset_restores_advanced_defaults_only() {
        let mut settings = Settings::default();
        settings.connection.slot_name = "Keep".to_string();
        settings.advanced.override_difficulty = true;
        settings.advanced.difficulty = Difficulty::Baby;
        settings.advanced.override_monster_rando = true;
        settings.advanced.monster_rando = MonsterRando::Vanilla;
        settings.advanced.reset_level_on_death = false;
        settings.advanced.fast_monsters = true;

        let mut form = FormModel::from_settings(settings);
        form.reset_advanced();

        let settings = form.into_settings();
        assert_eq!(settings.advanced, AdvancedSettings::default());
        assert_eq!(settings.advanced.difficulty, Difficulty::Medium);
        assert_eq!(settings.advanced.monster_rando, MonsterRando::Shuffle);
        assert!(settings.advanced.reset_level_on_death);
        assert_eq!(settings.connection.slot_name, "Keep");
    }

    #[test]
    fn controls_report_value_and_enablement() {
        let mut form = FormModel::from_settings(Settings::default());
        form.set(SettingField::OverrideDifficulty, "true").unwrap();

        let controls = form.controls(&ADVANCED_FIELDS);
        assert_eq!(controls.len(), ADVANCED_FIELDS.len());

        let difficulty = &controls[1];
        assert_eq!(difficulty.field, SettingField::Difficulty);
        assert_eq!(difficulty.value, "medium");
        assert!(difficulty.enabled);

        let monsters = &controls[3];
        assert!(!monsters.enabled);
    }
}
