//! Preview concatenation and randomized variation generation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{self, Slot};
use crate::errors::{ComposerError, Result};
use crate::selection::Selection;
use crate::wire::{GeneratedPrompt, VariationParts};

pub const PREVIEW_SEPARATOR: &str = ", ";

/// Source of uniform indices. `index(n)` must return a value in `[0, n)`.
pub trait RandomSource {
    fn index(&mut self, len: usize) -> usize;
}

/// Thread-local generator, the default for interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible generator for a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
/// Each value is reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, pos: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let v = self.script[self.pos % self.script.len()];
        self.pos += 1;
        v % len
    }
}

/// Joins every filled slot in fixed order. `None` when nothing is selected.
pub fn build_preview(selection: &Selection) -> Option<String> {
    let parts: Vec<&str> = Slot::ORDER.iter().filter_map(|s| selection.get(*s)).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(PREVIEW_SEPARATOR))
    }
}

/// Builds `count` variations. The hook stays fixed to the user's pick; every
/// other slot is sampled independently from the full catalog.
pub fn generate_variations<R: RandomSource + ?Sized>(
    selection: &Selection,
    count: i64,
    rng: &mut R,
) -> Result<Vec<GeneratedPrompt>> {
    if count <= 0 {
        return Err(ComposerError::InvalidArgument(format!(
            "variation count must be positive, got {count}"
        )));
    }
    if build_preview(selection).is_none() {
        return Err(ComposerError::IncompletePrompt);
    }
    let hook_category = selection.hook_category();
    debug!("generating {count} variations (hook category: {hook_category:?})");

    let hook = selection.get(Slot::Hook).map(str::to_string);
    let out: Vec<GeneratedPrompt> = (0..count)
        .map(|_| {
            let parts = VariationParts {
                hook: hook.clone(),
                shot_type: pick(rng, Slot::ShotType),
                subject: pick(rng, Slot::Subject),
                action: pick(rng, Slot::Action),
                setting: pick(rng, Slot::Setting),
                camera_movement: pick(rng, Slot::CameraMovement),
                audio: pick(rng, Slot::Audio),
            };
            GeneratedPrompt::new(parts, selection.platform, hook_category)
        })
        .collect();
    Ok(out)
}

fn pick<R: RandomSource + ?Sized>(rng: &mut R, slot: Slot) -> String {
    let options = catalog::options(slot);
    options[rng.index(options.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HookCategory, Platform};
    use std::collections::HashSet;

    fn full_selection() -> Selection {
        let mut sel = Selection::new();
        sel.platform = Some(Platform::TikTok);
        sel.set_hook(HookCategory::Curiosity, "The secret behind").unwrap();
        sel.set(Slot::ShotType, "Close-up").unwrap();
        sel.set(Slot::Subject, "Young entrepreneur").unwrap();
        sel.set(Slot::Action, "Demonstrates technique").unwrap();
        sel.set(Slot::Setting, "Cozy home workshop").unwrap();
        sel.set(Slot::CameraMovement, "Smooth dolly push-in").unwrap();
        sel.set(Slot::Audio, "Upbeat motivational music").unwrap();
        sel
    }

    #[test]
    fn preview_joins_all_slots_in_order() {
        assert_eq!(
            build_preview(&full_selection()).unwrap(),
            "The secret behind, Close-up, Young entrepreneur, Demonstrates technique, \
             Cozy home workshop, Smooth dolly push-in, Upbeat motivational music"
        );
    }

    #[test]
    fn preview_skips_empty_slots() {
        let mut sel = Selection::new();
        sel.set(Slot::Audio, "Natural ambient sounds").unwrap();
        sel.set(Slot::ShotType, "Wide shot").unwrap();
        assert_eq!(build_preview(&sel).unwrap(), "Wide shot, Natural ambient sounds");
    }

    #[test]
    fn preview_of_empty_selection_is_none() {
        assert_eq!(build_preview(&Selection::new()), None);
    }

    #[test]
    fn variations_rejects_non_positive_count() {
        let sel = full_selection();
        for count in [0, -3] {
            let err = generate_variations(&sel, count, &mut ThreadRandom).unwrap_err();
            assert!(matches!(err, ComposerError::InvalidArgument(_)));
        }
    }

    #[test]
    fn variations_require_some_selection() {
        let err = generate_variations(&Selection::new(), 5, &mut ThreadRandom).unwrap_err();
        assert!(matches!(err, ComposerError::IncompletePrompt));
    }

    #[test]
    fn variations_keep_hook_and_draw_from_catalog() {
        let sel = full_selection();
        let out = generate_variations(&sel, 25, &mut SeededRandom::new(7)).unwrap();
        assert_eq!(out.len(), 25);
        for p in &out {
            assert_eq!(p.parts.hook.as_deref(), Some("The secret behind"));
            assert_eq!(p.hook_category, Some(HookCategory::Curiosity));
            assert_eq!(p.platform, Some(Platform::TikTok));
            assert!(catalog::shot_types().contains(&p.parts.shot_type.as_str()));
            assert!(catalog::subjects().contains(&p.parts.subject.as_str()));
            assert!(catalog::actions().contains(&p.parts.action.as_str()));
            assert!(catalog::settings().contains(&p.parts.setting.as_str()));
            assert!(catalog::camera_movements().contains(&p.parts.camera_movement.as_str()));
            assert!(catalog::audio_cues().contains(&p.parts.audio.as_str()));
            assert!(p.text.starts_with("The secret behind "));
        }
        let ids: HashSet<_> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), out.len());
    }

    #[test]
    fn scripted_source_gives_exact_text() {
        let sel = full_selection();
        // shot, subject, action, setting, camera, audio
        let mut rng = ScriptedRandom::new(vec![1, 5, 2, 0, 3, 4]);
        let out = generate_variations(&sel, 1, &mut rng).unwrap();
        assert_eq!(
            out[0].text,
            "The secret behind Medium shot Ordinary household item Transforms appearance \
             in 1920s Art Deco era, Slow-motion capture, Natural ambient sounds"
        );
    }

    #[test]
    fn variations_without_hook_start_at_shot_type() {
        let mut sel = Selection::new();
        sel.set(Slot::Action, "Solves complex problem").unwrap();
        let mut rng = ScriptedRandom::new(vec![0]);
        let out = generate_variations(&sel, 2, &mut rng).unwrap();
        assert_eq!(out[0].hook_category, None);
        assert_eq!(
            out[0].text,
            "Close-up Young entrepreneur Demonstrates technique in 1920s Art Deco era, \
             Smooth dolly push-in, Upbeat motivational music"
        );
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let sel = full_selection();
        let a = generate_variations(&sel, 4, &mut SeededRandom::new(42)).unwrap();
        let b = generate_variations(&sel, 4, &mut SeededRandom::new(42)).unwrap();
        let texts = |v: &[GeneratedPrompt]| v.iter().map(|p| p.text.clone()).collect::<Vec<_>>();
        assert_eq!(texts(&a), texts(&b));
    }
}
