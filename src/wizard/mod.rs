//! Interactive walk through the builder steps and the results screen.
//!
//! Reads answers from any `BufRead` and writes everything to the given
//! `Write`, so a session can be replayed from a buffer.

use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog::{self, HookCategory, Platform, Slot};
use crate::composer::RandomSource;
use crate::errors::{ComposerError, Result};
use crate::export;
use crate::selection::{ExperienceLevel, WizardStep};
use crate::session::Session;
use crate::ux::{self, Choice, ResultCommand};

/// Saves every prompt of the current batch; returns how many were new.
pub fn save_all(session: &mut Session) -> usize {
    let ids: Vec<_> = session.generated().iter().map(|p| p.id).collect();
    ids.into_iter().filter(|id| session.save(*id)).count()
}

/// How a run of the builder ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Finished,
    InputClosed,
}

/// Rejects counts outside `1..=max_count`.
pub fn check_count(count: i64, max_count: i64) -> Result<()> {
    if count > max_count {
        return Err(ComposerError::InvalidArgument(format!(
            "at most {max_count} variations per batch, got {count}"
        )));
    }
    if count <= 0 {
        return Err(ComposerError::InvalidArgument(format!(
            "variation count must be positive, got {count}"
        )));
    }
    Ok(())
}

pub struct Wizard<R, W> {
    input: R,
    out: W,
    hook_category: Option<HookCategory>,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out, hook_category: None }
    }

    /// Skips the category menu on step 1 and offers this category's phrases.
    pub fn with_hook_category(mut self, category: Option<HookCategory>) -> Self {
        self.hook_category = category;
        self
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }

    pub fn choose_level(&mut self, session: &mut Session) -> Result<()> {
        if session.selection.experience_level.is_some() {
            return Ok(());
        }
        let names: Vec<&str> = ExperienceLevel::ALL.iter().map(|l| l.as_str()).collect();
        if let Choice::Pick(i) = ux::choose(&mut self.input, &mut self.out, "What's your experience level?", &names)? {
            session.selection.experience_level = Some(ExperienceLevel::ALL[i]);
        }
        Ok(())
    }

    pub fn choose_platform(&mut self, session: &mut Session) -> Result<()> {
        if session.selection.platform.is_some() {
            return Ok(());
        }
        let names: Vec<&str> = Platform::ALL.iter().map(|p| p.as_str()).collect();
        if let Choice::Pick(i) = ux::choose(&mut self.input, &mut self.out, "Which platform are you creating for?", &names)? {
            session.selection.platform = Some(Platform::ALL[i]);
        }
        Ok(())
    }

    /// Platform tips and experience level.
    pub fn show_intro(&mut self, session: &Session) -> Result<()> {
        if let Some(p) = session.selection.platform {
            writeln!(self.out, "\n{}", ux::render_platform_tips(p))?;
        }
        if let Some(level) = session.selection.experience_level {
            writeln!(self.out, "{}", format!("Experience level: {level}").dimmed())?;
        }
        Ok(())
    }

    pub fn show_preview(&mut self, session: &Session) -> Result<()> {
        writeln!(self.out, "{}", ux::render_preview(session.preview().as_deref()))?;
        Ok(())
    }

    pub fn show_generated(&mut self, session: &Session) -> Result<()> {
        ux::show_generated(&mut self.out, session.selection.platform, session.generated())?;
        Ok(())
    }

    pub fn show_saved(&mut self, session: &Session) -> Result<()> {
        ux::show_saved(&mut self.out, session.saved())?;
        Ok(())
    }

    /// Walks steps 1-3. Filled slots are skipped unless the user came back to them.
    pub fn run_builder(&mut self, session: &mut Session) -> Result<Flow> {
        let mut revisit = false;
        while session.selection.current_step() != WizardStep::Generate {
            let step = session.selection.current_step();
            ux::show_step(&mut self.out, step)?;

            let mut back = false;
            for slot in step.slots() {
                if !revisit && session.selection.get(*slot).is_some() {
                    continue;
                }
                match self.prompt_slot(session, *slot)? {
                    Choice::Back => {
                        back = true;
                        break;
                    }
                    Choice::Closed => return Ok(Flow::InputClosed),
                    _ => {}
                }
            }
            self.show_preview(session)?;

            if back {
                revisit = session.selection.prev_step();
            } else {
                session.selection.next_step();
                revisit = false;
            }
        }
        Ok(Flow::Finished)
    }

    fn prompt_slot(&mut self, session: &mut Session, slot: Slot) -> Result<Choice> {
        if slot == Slot::Hook {
            return self.prompt_hook(session);
        }
        let options = catalog::options(slot);
        let choice = ux::choose(&mut self.input, &mut self.out, &format!("Choose {slot}"), options)?;
        match choice {
            Choice::Pick(i) => session.selection.set(slot, options[i])?,
            Choice::Clear => session.selection.clear(slot),
            _ => {}
        }
        Ok(choice)
    }

    fn prompt_hook(&mut self, session: &mut Session) -> Result<Choice> {
        let category = match self.hook_category.take() {
            Some(c) => c,
            None => {
                let titles: Vec<&str> = HookCategory::ALL.iter().map(|c| c.title()).collect();
                match ux::choose(&mut self.input, &mut self.out, "Which emotion should the hook trigger?", &titles)? {
                    Choice::Pick(i) => HookCategory::ALL[i],
                    Choice::Clear => {
                        session.selection.clear(Slot::Hook);
                        return Ok(Choice::Clear);
                    }
                    other => return Ok(other),
                }
            }
        };
        let phrases = category.phrases();
        let choice = ux::choose(&mut self.input, &mut self.out, &format!("{} hooks", category.title()), phrases)?;
        match choice {
            Choice::Pick(i) => {
                session.selection.set_hook(category, phrases[i])?;
                if let Some(text) = ux::render_psychology(&session.selection) {
                    writeln!(self.out, "\n{text}")?;
                }
            }
            Choice::Clear => session.selection.clear(Slot::Hook),
            _ => {}
        }
        Ok(choice)
    }

    /// Generates a batch, sending the user back to fix an incomplete
    /// selection or a bad count. Returns the count that was used.
    pub fn generate<G: RandomSource + ?Sized>(
        &mut self,
        session: &mut Session,
        mut count: i64,
        max_count: i64,
        rng: &mut G,
    ) -> Result<i64> {
        loop {
            let attempt = check_count(count, max_count)
                .and_then(|_| session.generate(count, rng).map(|_| ()));
            match attempt {
                Ok(()) => {
                    self.show_generated(session)?;
                    return Ok(count);
                }
                Err(ComposerError::IncompletePrompt) => {
                    writeln!(self.out, "\n{}", "Please complete the steps before generating prompts.".yellow())?;
                    session.selection.jump_to(WizardStep::Hook);
                    if self.run_builder(session)? == Flow::InputClosed {
                        return Err(ComposerError::IncompletePrompt);
                    }
                }
                Err(ComposerError::InvalidArgument(msg)) => {
                    writeln!(self.out, "{}", msg.yellow())?;
                    match self.read_count(max_count)? {
                        Some(n) => count = n,
                        None => return Err(ComposerError::InvalidArgument(msg)),
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_count(&mut self, max_count: i64) -> Result<Option<i64>> {
        loop {
            let prompt = format!("How many variations? (1-{max_count}):");
            let Some(line) = ux::read_line(&mut self.input, &mut self.out, &prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "{}", "enter a whole number".yellow())?,
            }
        }
    }

    pub fn export(&mut self, session: &Session, dir: &Path) -> Result<PathBuf> {
        let path = export::write(dir, &session.export()?)?;
        writeln!(self.out, "Exported to {}", path.display())?;
        Ok(path)
    }

    /// Save, delete, list, export, regenerate or quit until `q` or EOF.
    pub fn results_loop<G: RandomSource + ?Sized>(
        &mut self,
        session: &mut Session,
        count: i64,
        rng: &mut G,
        export_dir: &Path,
    ) -> Result<()> {
        ux::show_commands(&mut self.out)?;
        loop {
            let Some(line) = ux::read_line(&mut self.input, &mut self.out, ">")? else {
                return Ok(());
            };
            debug!("results command: {line:?}");
            match ux::parse_command(&line) {
                Some(ResultCommand::Save(n)) => match session.generated().get(n - 1).map(|p| p.id) {
                    Some(id) => {
                        if session.save(id) {
                            writeln!(self.out, "{}", "Saved!".green())?;
                        } else {
                            writeln!(self.out, "prompt #{n} is already saved")?;
                        }
                    }
                    None => writeln!(self.out, "{}", format!("no generated prompt #{n}").yellow())?,
                },
                Some(ResultCommand::Delete(n)) => match session.saved().get(n - 1).map(|s| s.prompt.id) {
                    Some(id) => {
                        session.delete(id);
                        writeln!(self.out, "Deleted saved prompt #{n}")?;
                    }
                    None => writeln!(self.out, "{}", format!("no saved prompt #{n}").yellow())?,
                },
                Some(ResultCommand::List) => self.show_saved(session)?,
                Some(ResultCommand::Export) => {
                    if let Err(e) = self.export(session, export_dir) {
                        writeln!(self.out, "{}", e.to_string().red())?;
                    }
                }
                Some(ResultCommand::More) => {
                    if ux::confirm(&mut self.input, &mut self.out, "Replace the current batch? Saved prompts are kept.") {
                        session.selection.jump_to(WizardStep::Generate);
                        session.generate(count, rng)?;
                        self.show_generated(session)?;
                    }
                }
                Some(ResultCommand::Quit) => return Ok(()),
                None => writeln!(self.out, "{}", "unknown command".yellow())?,
            }
        }
    }
}
