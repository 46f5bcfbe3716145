use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::catalog::{HookCategory, Platform};
use crate::selection::{Selection, WizardStep};
use crate::wire::{GeneratedPrompt, SavedPrompt};

/// Answer to a numbered choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Pick(usize),
    Skip,
    Clear,
    Back,
    /// Input reached EOF.
    Closed,
}

/// Command typed on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCommand {
    /// 1-based index into the generated batch
    Save(usize),
    /// 1-based index into the saved list
    Delete(usize),
    List,
    Export,
    More,
    Quit,
}

pub fn parse_choice(line: &str, len: usize) -> Option<Choice> {
    let s = line.trim().to_lowercase();
    match s.as_str() {
        "" => Some(Choice::Skip),
        "b" | "back" => Some(Choice::Back),
        "c" | "clear" => Some(Choice::Clear),
        _ => match s.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Some(Choice::Pick(n - 1)),
            _ => None,
        },
    }
}

pub fn parse_command(line: &str) -> Option<ResultCommand> {
    let mut it = line.split_whitespace();
    let cmd = it.next()?.to_lowercase();
    let arg = it.next().and_then(|a| a.parse::<usize>().ok());
    match (cmd.as_str(), arg) {
        ("s" | "save", Some(n)) if n > 0 => Some(ResultCommand::Save(n)),
        ("d" | "delete", Some(n)) if n > 0 => Some(ResultCommand::Delete(n)),
        ("l" | "list", None) => Some(ResultCommand::List),
        ("e" | "export", None) => Some(ResultCommand::Export),
        ("g" | "more", None) => Some(ResultCommand::More),
        ("q" | "quit", None) => Some(ResultCommand::Quit),
        _ => None,
    }
}

/// Prints a numbered menu and reads until a valid answer.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    options: &[&str],
) -> io::Result<Choice> {
    writeln!(out, "\n{}", label.bold())?;
    for (i, o) in options.iter().enumerate() {
        writeln!(out, "  {:>2}. {}", i + 1, o)?;
    }
    loop {
        write!(out, "{} ", "choice [number, enter to skip, c to clear, b to go back]:".dimmed())?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Choice::Closed);
        }
        match parse_choice(&line, options.len()) {
            Some(c) => return Ok(c),
            None => writeln!(out, "{}", format!("pick a number between 1 and {}", options.len()).yellow())?,
        }
    }
}

pub fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{} ", prompt.bold())?;
    out.flush()?;
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> bool {
    match read_line(input, out, &format!("{} [y/N]:", prompt)) {
        Ok(Some(ans)) => {
            let ans = ans.to_lowercase();
            ans == "y" || ans == "yes"
        }
        _ => false,
    }
}

pub fn render_platform_tips(platform: Platform) -> String {
    let spec = platform.spec();
    format!(
        "{}\n  {} {}\n  {} {}\n  {} {}\n  {} {}\n  {} {}",
        format!("{} Optimization Tips", platform.as_str().to_uppercase()).bold(),
        "Duration:".bold(), spec.duration,
        "Hook Timing:".bold(), spec.hook_timing,
        "Focus:".bold(), spec.focus,
        "Style:".bold(), spec.style,
        "Tips:".bold(), spec.tips,
    )
}

pub fn render_psychology(selection: &Selection) -> Option<String> {
    let hook = selection.hook()?;
    let c: HookCategory = hook.category;
    Some(format!(
        "{}\n  {}\n  {} \"{}\"",
        format!("{} Hook Psychology", c.title()).magenta().bold(),
        c.principle(),
        "Selected:".bold(),
        hook.phrase
    ))
}

pub fn render_preview(preview: Option<&str>) -> String {
    match preview {
        Some(p) => format!("{} {}", "Preview:".cyan().bold(), p),
        None => format!("{} {}", "Preview:".cyan().bold(), "Your prompt will appear here as you make selections...".dimmed()),
    }
}

pub fn show_step<W: Write>(out: &mut W, step: WizardStep) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("━━ Step {}/{}: {} ━━", step.number(), WizardStep::COUNT, step.title()).bold()
    )
}

pub fn show_generated<W: Write>(out: &mut W, platform: Option<Platform>, prompts: &[GeneratedPrompt]) -> io::Result<()> {
    let title = match platform {
        Some(p) => format!("Generated prompts for {}", p.as_str().to_uppercase()),
        None => "Generated prompts".to_string(),
    };
    writeln!(out, "\n{}", title.green().bold())?;
    for (i, p) in prompts.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, p.text)?;
    }
    Ok(())
}

pub fn show_commands<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "commands: s <n> save, d <n> delete saved, l list saved, e export, g generate more, q quit".dimmed()
    )
}

pub fn show_saved<W: Write>(out: &mut W, saved: &[SavedPrompt]) -> io::Result<()> {
    writeln!(out, "\n{}", format!("Saved prompts ({})", saved.len()).bold())?;
    if saved.is_empty() {
        return writeln!(out, "No saved prompts yet. Generate and save prompts to see them here.");
    }
    for (i, s) in saved.iter().enumerate() {
        let platform = s
            .prompt
            .platform
            .map(|p| p.as_str().to_uppercase())
            .unwrap_or_else(|| "-".into());
        writeln!(out, "{:>2}. {}", i + 1, s.prompt.text)?;
        writeln!(
            out,
            "    {}",
            format!("Platform: {} • Saved: {}", platform, s.saved_at.format("%Y-%m-%d")).dimmed()
        )?;
    }
    Ok(())
}
