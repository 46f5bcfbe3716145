use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

use viral_prompt_gen::cli::Args;
use viral_prompt_gen::config::Config;
use viral_prompt_gen::wizard::{self, Wizard};
use viral_prompt_gen::{
    ComposerError, HookCategory, RandomSource, SeededRandom, Session, Slot, ThreadRandom, WizardStep,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let cfg = match &args.config {
        Some(p) => Config::load(Path::new(p)).with_context(|| format!("loading config {p}"))?,
        None => Config::default(),
    };

    if args.no_input && args.hook_category.is_some() && args.hook.is_none() {
        return Err(ComposerError::InvalidArgument(
            "--hook-category needs --hook when running with --no-input".into(),
        )
        .into());
    }

    let mut session = Session::new();
    apply_args(&mut session, &args)?;
    session.selection.experience_level = args.level.or(cfg.experience_level);
    session.selection.platform = args.platform.or(cfg.platform);

    let stdin = io::stdin();
    // a bare --hook-category opens that category's phrases on step 1
    let preset = args.hook_category.filter(|_| args.hook.is_none());
    let mut wizard = Wizard::new(stdin.lock(), io::stdout()).with_hook_category(preset);

    let mut rng: Box<dyn RandomSource> = match args.seed.or(cfg.seed) {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let mut count = args.count.unwrap_or(cfg.default_count);
    let export_dir = PathBuf::from(args.export_dir.clone().unwrap_or_else(|| cfg.export_dir.clone()));

    if args.no_input {
        wizard.show_intro(&session)?;
        session.selection.jump_to(WizardStep::Generate);
        wizard.show_preview(&session)?;
        wizard::check_count(count, cfg.max_count)?;
        session.generate(count, rng.as_mut())?;
        wizard.show_generated(&session)?;
    } else {
        wizard.choose_level(&mut session)?;
        wizard.choose_platform(&mut session)?;
        wizard.show_intro(&session)?;
        wizard.run_builder(&mut session)?;
        count = wizard.generate(&mut session, count, cfg.max_count, rng.as_mut())?;
    }

    if args.save_all {
        wizard::save_all(&mut session);
    }
    if args.export {
        wizard.export(&session, &export_dir)?;
    }

    if args.no_input {
        if args.save_all {
            wizard.show_saved(&session)?;
        }
    } else {
        wizard.results_loop(&mut session, count, rng.as_mut(), &export_dir)?;
    }

    Ok(())
}

/// Seeds the selection from command-line flags.
fn apply_args(session: &mut Session, args: &Args) -> anyhow::Result<()> {
    let sel = &mut session.selection;
    if let Some(phrase) = &args.hook {
        let category = match args.hook_category {
            Some(c) => c,
            None => HookCategory::ALL
                .into_iter()
                .find(|c| c.phrases().contains(&phrase.as_str()))
                .ok_or_else(|| ComposerError::NotInCatalog { slot: Slot::Hook, value: phrase.clone() })?,
        };
        sel.set_hook(category, phrase)?;
    }

    let flags = [
        (Slot::ShotType, &args.shot_type),
        (Slot::Subject, &args.subject),
        (Slot::Action, &args.action),
        (Slot::Setting, &args.setting),
        (Slot::CameraMovement, &args.camera),
        (Slot::Audio, &args.audio),
    ];
    for (slot, value) in flags {
        if let Some(v) = value {
            sel.set(slot, v)?;
        }
    }
    Ok(())
}
