//! Static reference data for the prompt builder.
//!
//! Everything here is compiled in and never mutated. Grouped lists (subjects,
//! settings) are flattened in declared group order so "any subject" and
//! "any setting" views are stable across calls.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::ComposerError;

/// Named attribute position in a composed prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Hook,
    ShotType,
    Subject,
    Action,
    Setting,
    CameraMovement,
    Audio,
}

impl Slot {
    /// Fixed order used when concatenating a preview.
    pub const ORDER: [Slot; 7] = [
        Slot::Hook,
        Slot::ShotType,
        Slot::Subject,
        Slot::Action,
        Slot::Setting,
        Slot::CameraMovement,
        Slot::Audio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Slot::Hook => "hook",
            Slot::ShotType => "shot type",
            Slot::Subject => "subject",
            Slot::Action => "action",
            Slot::Setting => "setting",
            Slot::CameraMovement => "camera movement",
            Slot::Audio => "audio",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Psychological trigger a hook phrase exploits.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookCategory {
    Awe,
    Curiosity,
    Shock,
    Transformation,
}

impl HookCategory {
    pub const ALL: [HookCategory; 4] = [
        HookCategory::Awe,
        HookCategory::Curiosity,
        HookCategory::Shock,
        HookCategory::Transformation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HookCategory::Awe => "awe",
            HookCategory::Curiosity => "curiosity",
            HookCategory::Shock => "shock",
            HookCategory::Transformation => "transformation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            HookCategory::Awe => "Awe",
            HookCategory::Curiosity => "Curiosity",
            HookCategory::Shock => "Shock",
            HookCategory::Transformation => "Transformation",
        }
    }

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            HookCategory::Awe => AWE_HOOKS,
            HookCategory::Curiosity => CURIOSITY_HOOKS,
            HookCategory::Shock => SHOCK_HOOKS,
            HookCategory::Transformation => TRANSFORMATION_HOOKS,
        }
    }

    /// Why this trigger works, shown next to the selected hook.
    pub fn principle(self) -> &'static str {
        match self {
            HookCategory::Awe => "Awe triggers sharing behavior by creating a sense of wonder that viewers want to pass along to others.",
            HookCategory::Curiosity => "Curiosity creates an information gap that compels viewers to keep watching to satisfy their need to know.",
            HookCategory::Shock => "Shock acts as a pattern interrupt, stopping mindless scrolling by presenting unexpected information.",
            HookCategory::Transformation => "Transformation content taps into viewers' aspirational desires and shows possibility for change.",
        }
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookCategory {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        HookCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| ComposerError::UnknownHookCategory(s.to_string()))
    }
}

/// Target short-video service.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[value(name = "tiktok", alias = "tik-tok")]
    TikTok,
    #[value(name = "youtube", alias = "yt")]
    YouTube,
    #[value(name = "instagram", alias = "ig")]
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::TikTok, Platform::YouTube, Platform::Instagram];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
            Platform::Instagram => "instagram",
        }
    }

    pub fn spec(self) -> &'static PlatformSpec {
        match self {
            Platform::TikTok => &TIKTOK,
            Platform::YouTube => &YOUTUBE,
            Platform::Instagram => &INSTAGRAM,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| ComposerError::UnknownPlatform(s.to_string()))
    }
}

/// Per-platform guidance shown once a platform is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSpec {
    pub duration: &'static str,
    pub hook_timing: &'static str,
    pub focus: &'static str,
    pub style: &'static str,
    pub tips: &'static str,
}

/// Looks up platform guidance by its key.
pub fn tips(platform: &str) -> Result<&'static PlatformSpec, ComposerError> {
    Ok(platform.parse::<Platform>()?.spec())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    People,
    Objects,
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 2] = [SubjectKind::People, SubjectKind::Objects];

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            SubjectKind::People => PEOPLE,
            SubjectKind::Objects => OBJECTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    TimePeriods,
    Locations,
}

impl SettingKind {
    pub const ALL: [SettingKind; 2] = [SettingKind::TimePeriods, SettingKind::Locations];

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            SettingKind::TimePeriods => TIME_PERIODS,
            SettingKind::Locations => LOCATIONS,
        }
    }
}

pub fn shot_types() -> &'static [&'static str] {
    SHOT_TYPES
}

pub fn actions() -> &'static [&'static str] {
    ACTIONS
}

pub fn camera_movements() -> &'static [&'static str] {
    CAMERA_MOVEMENTS
}

pub fn audio_cues() -> &'static [&'static str] {
    AUDIO_CUES
}

/// Every subject phrase, people first then objects.
pub fn subjects() -> &'static [&'static str] {
    static FLAT: OnceLock<Vec<&'static str>> = OnceLock::new();
    FLAT.get_or_init(|| flatten(SubjectKind::ALL.iter().map(|k| k.phrases())))
}

/// Every setting phrase, time periods first then locations.
pub fn settings() -> &'static [&'static str] {
    static FLAT: OnceLock<Vec<&'static str>> = OnceLock::new();
    FLAT.get_or_init(|| flatten(SettingKind::ALL.iter().map(|k| k.phrases())))
}

/// Options for any non-hook slot. Hook phrases depend on a category, see
/// [`HookCategory::phrases`]; `Slot::Hook` yields every hook phrase flattened.
pub fn options(slot: Slot) -> &'static [&'static str] {
    match slot {
        Slot::Hook => {
            static FLAT: OnceLock<Vec<&'static str>> = OnceLock::new();
            FLAT.get_or_init(|| flatten(HookCategory::ALL.iter().map(|c| c.phrases())))
        }
        Slot::ShotType => shot_types(),
        Slot::Subject => subjects(),
        Slot::Action => actions(),
        Slot::Setting => settings(),
        Slot::CameraMovement => camera_movements(),
        Slot::Audio => audio_cues(),
    }
}

fn flatten<'a>(groups: impl Iterator<Item = &'a [&'static str]>) -> Vec<&'static str> {
    groups.flat_map(|g| g.iter().copied()).collect()
}

const SHOT_TYPES: &[&str] = &[
    "Close-up", "Medium shot", "Wide shot", "Over-the-shoulder",
    "Bird's eye view", "Low angle", "High angle", "Split screen",
];

const AWE_HOOKS: &[&str] = &[
    "Mind-blowing transformation of",
    "Incredible before/after showing",
    "Stunning revelation about",
    "Breathtaking moment when",
];

const CURIOSITY_HOOKS: &[&str] = &[
    "The secret behind",
    "What nobody tells you about",
    "The shocking truth about",
    "You won't believe what happens when",
];

const SHOCK_HOOKS: &[&str] = &[
    "This will change everything you know about",
    "The most surprising thing about",
    "Nobody expected this outcome",
    "This breaks all the rules of",
];

const TRANSFORMATION_HOOKS: &[&str] = &[
    "From zero to hero in",
    "Complete makeover of",
    "Revolutionary change in",
    "Dramatic evolution of",
];

const PEOPLE: &[&str] = &[
    "Young entrepreneur", "Wise elderly person", "Everyday hero",
    "Expert craftsperson", "Unlikely teacher",
];

const OBJECTS: &[&str] = &[
    "Ordinary household item", "Forgotten vintage piece",
    "High-tech gadget", "Natural phenomenon", "Artistic creation",
];

const ACTIONS: &[&str] = &[
    "Demonstrates technique", "Reveals hidden feature", "Transforms appearance",
    "Solves complex problem", "Creates something beautiful", "Breaks conventional rule",
];

const TIME_PERIODS: &[&str] = &[
    "1920s Art Deco era", "1950s Americana", "1980s neon aesthetic",
    "Modern minimalist", "Futuristic cyber-punk", "Medieval fantasy",
];

const LOCATIONS: &[&str] = &[
    "Cozy home workshop", "Bustling city street", "Serene natural landscape",
    "High-tech laboratory", "Vintage coffee shop", "Dramatic rooftop",
];

const CAMERA_MOVEMENTS: &[&str] = &[
    "Smooth dolly push-in", "Gentle pan reveal", "Dynamic rotation around subject",
    "Slow-motion capture", "Time-lapse progression", "Steady focus pull",
];

const AUDIO_CUES: &[&str] = &[
    "Upbeat motivational music", "Gentle acoustic background",
    "Dramatic orchestral build", "Modern electronic beats",
    "Natural ambient sounds", "Vintage jazz undertones",
];

const TIKTOK: PlatformSpec = PlatformSpec {
    duration: "15-30 seconds",
    hook_timing: "First 3 seconds",
    focus: "Trend participation, emotional response",
    style: "Authentic, relatable, mobile-optimized",
    tips: "Quick cuts, text overlays, trending audio work best on TikTok. Focus on immediate emotional impact.",
};

const YOUTUBE: PlatformSpec = PlatformSpec {
    duration: "Up to 60 seconds",
    hook_timing: "First 5-8 seconds",
    focus: "Educational value, retention optimization",
    style: "Polished but approachable",
    tips: "Clear narration and visual tutorials perform well. Optimize for longer retention curves.",
};

const INSTAGRAM: PlatformSpec = PlatformSpec {
    duration: "15-90 seconds",
    hook_timing: "First 3-5 seconds",
    focus: "Aesthetic appeal, lifestyle integration",
    style: "Visually striking, brand-consistent",
    tips: "High production value and cohesive aesthetics are key. Use strategic hashtags.",
};
