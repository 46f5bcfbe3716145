use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, HookCategory, Platform, Slot};
use crate::errors::{ComposerError, Result};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ComposerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ExperienceLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == key)
            .ok_or_else(|| ComposerError::UnknownExperienceLevel(s.to_string()))
    }
}

/// Builder steps, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Hook = 1,
    Visuals = 2,
    Scene = 3,
    Generate = 4,
}

impl WizardStep {
    pub const COUNT: u8 = 4;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::Hook),
            2 => Some(WizardStep::Visuals),
            3 => Some(WizardStep::Scene),
            4 => Some(WizardStep::Generate),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Hook => "Emotional hook",
            WizardStep::Visuals => "Shot, subject & action",
            WizardStep::Scene => "Setting, camera & audio",
            WizardStep::Generate => "Generate variations",
        }
    }

    /// Slots the user fills in on this step.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            WizardStep::Hook => &[Slot::Hook],
            WizardStep::Visuals => &[Slot::ShotType, Slot::Subject, Slot::Action],
            WizardStep::Scene => &[Slot::Setting, Slot::CameraMovement, Slot::Audio],
            WizardStep::Generate => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub category: HookCategory,
    pub phrase: String,
}

/// The user's picks for one session. Setters only accept catalog values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub experience_level: Option<ExperienceLevel>,
    pub platform: Option<Platform>,
    hook: Option<Hook>,
    shot_type: Option<String>,
    subject: Option<String>,
    action: Option<String>,
    setting: Option<String>,
    camera_movement: Option<String>,
    audio: Option<String>,
    current_step: WizardStep,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            experience_level: None,
            platform: None,
            hook: None,
            shot_type: None,
            subject: None,
            action: None,
            setting: None,
            camera_movement: None,
            audio: None,
            current_step: WizardStep::Hook,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hook(&self) -> Option<&Hook> {
        self.hook.as_ref()
    }

    pub fn hook_category(&self) -> Option<HookCategory> {
        self.hook.as_ref().map(|h| h.category)
    }

    /// Picks a hook phrase; it must belong to `category`.
    pub fn set_hook(&mut self, category: HookCategory, phrase: &str) -> Result<()> {
        if !category.phrases().contains(&phrase) {
            return Err(ComposerError::NotInCatalog { slot: Slot::Hook, value: phrase.to_string() });
        }
        self.hook = Some(Hook { category, phrase: phrase.to_string() });
        Ok(())
    }

    /// Sets a non-hook slot. An empty value clears it.
    pub fn set(&mut self, slot: Slot, value: &str) -> Result<()> {
        let value = value.trim();
        let stored = if value.is_empty() {
            None
        } else if catalog::options(slot).contains(&value) {
            Some(value.to_string())
        } else {
            return Err(ComposerError::NotInCatalog { slot, value: value.to_string() });
        };
        let target = self.slot_mut(slot).ok_or_else(|| {
            ComposerError::InvalidArgument("hook needs a category, use set_hook".into())
        })?;
        *target = stored;
        Ok(())
    }

    pub fn clear(&mut self, slot: Slot) {
        if slot == Slot::Hook {
            self.hook = None;
        } else if let Some(target) = self.slot_mut(slot) {
            *target = None;
        }
    }

    /// Current value of a slot, `None` when empty.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        let value = match slot {
            Slot::Hook => self.hook.as_ref().map(|h| h.phrase.as_str()),
            Slot::ShotType => self.shot_type.as_deref(),
            Slot::Subject => self.subject.as_deref(),
            Slot::Action => self.action.as_deref(),
            Slot::Setting => self.setting.as_deref(),
            Slot::CameraMovement => self.camera_movement.as_deref(),
            Slot::Audio => self.audio.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Slot::ORDER.iter().all(|s| self.get(*s).is_none())
    }

    pub fn is_complete(&self) -> bool {
        Slot::ORDER.iter().all(|s| self.get(*s).is_some())
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// Advances one step; returns false when already on the last one.
    pub fn next_step(&mut self) -> bool {
        match WizardStep::from_number(self.current_step.number() + 1) {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Goes back one step; returns false when already on the first one.
    pub fn prev_step(&mut self) -> bool {
        match WizardStep::from_number(self.current_step.number().saturating_sub(1)) {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    pub fn jump_to(&mut self, step: WizardStep) {
        self.current_step = step;
    }

    /// Storage for plain string slots. The hook lives with its category, so `None`.
    fn slot_mut(&mut self, slot: Slot) -> Option<&mut Option<String>> {
        match slot {
            Slot::Hook => None,
            Slot::ShotType => Some(&mut self.shot_type),
            Slot::Subject => Some(&mut self.subject),
            Slot::Action => Some(&mut self.action),
            Slot::Setting => Some(&mut self.setting),
            Slot::CameraMovement => Some(&mut self.camera_movement),
            Slot::Audio => Some(&mut self.audio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_hook_rejects_phrase_from_other_category() {
        let mut sel = Selection::new();
        let err = sel.set_hook(HookCategory::Awe, "The secret behind").unwrap_err();
        assert!(matches!(err, ComposerError::NotInCatalog { slot: Slot::Hook, .. }));
        assert!(sel.hook().is_none());

        sel.set_hook(HookCategory::Curiosity, "The secret behind").unwrap();
        assert_eq!(sel.hook_category(), Some(HookCategory::Curiosity));
        assert_eq!(sel.get(Slot::Hook), Some("The secret behind"));
    }

    #[test]
    fn set_validates_membership_and_clears_on_empty() {
        let mut sel = Selection::new();
        sel.set(Slot::Subject, "High-tech gadget").unwrap();
        assert_eq!(sel.get(Slot::Subject), Some("High-tech gadget"));

        assert!(sel.set(Slot::Subject, "A dragon").is_err());
        assert_eq!(sel.get(Slot::Subject), Some("High-tech gadget"));

        sel.set(Slot::Subject, "").unwrap();
        assert_eq!(sel.get(Slot::Subject), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn set_refuses_hook_slot() {
        let mut sel = Selection::new();
        assert!(matches!(
            sel.set(Slot::Hook, "The secret behind"),
            Err(ComposerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn clear_empties_hook_and_plain_slots() {
        let mut sel = Selection::new();
        sel.set_hook(HookCategory::Transformation, "Complete makeover of").unwrap();
        sel.set(Slot::Audio, "Modern electronic beats").unwrap();

        sel.clear(Slot::Audio);
        assert_eq!(sel.get(Slot::Audio), None);
        assert_eq!(sel.get(Slot::Hook), Some("Complete makeover of"));

        sel.clear(Slot::Hook);
        assert!(sel.hook().is_none());
        assert!(sel.is_empty());
    }

    #[test]
    fn steps_are_bounded() {
        let mut sel = Selection::new();
        assert_eq!(sel.current_step(), WizardStep::Hook);
        assert!(!sel.prev_step());
        assert!(sel.next_step());
        assert!(sel.next_step());
        assert!(sel.next_step());
        assert_eq!(sel.current_step(), WizardStep::Generate);
        assert!(!sel.next_step());
        assert!(sel.prev_step());
        assert_eq!(sel.current_step().number(), 3);
    }

    #[test]
    fn experience_level_parses_case_insensitively() {
        assert_eq!("Advanced".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Advanced);
        assert!("expert".parse::<ExperienceLevel>().is_err());
    }
}
