//! `config` subcommands.
//!
//! `show` prints the file together with what the demo resolves from it,
//! `edit` opens it and checks it again once the editor exits, and `migrate`
//! fills in fields added by newer versions.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

use arbiter_demo::config::{migrate_config, MigrateResult};
use arbiter_demo::data::{demo_functions, DemoFunction};
use arbiter_demo::theme::{current_theme, Theme};
use arbiter_demo::Config;

/// Print the effective configuration as TOML, then the values it resolves to.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load()?;
    let theme = current_theme();

    let source = if path.exists() {
        format!("# {}", path.display())
    } else {
        format!("# {} (not found, showing defaults)", path.display())
    };
    println!("{}", theme.secondary_text(&source));
    println!("{}", theme.primary_text(&toml::to_string_pretty(&config)?));

    for line in resolved_lines(&config, demo_functions()?) {
        println!("{}", theme.secondary_text(&format!("# {}", line)));
    }
    print_problems(&config, &theme)?;
    Ok(())
}

/// What the demo uses from `config`, one `label: value` per line.
pub fn resolved_lines(config: &Config, functions: &[DemoFunction]) -> Vec<String> {
    let walkthrough = match functions.get(config.demo.default_function) {
        Some(function) => function.raw.qualified_name(),
        None => format!(
            "function {} (not available)",
            config.demo.default_function.saturating_add(1)
        ),
    };
    let log_file = config
        .logging
        .log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".to_string());

    vec![
        format!(
            "playback: {}ms per line, {}ms per character",
            config.playback.line_delay_ms, config.playback.char_delay_ms
        ),
        format!("theme: {}", config.ui.theme.as_str()),
        format!("walkthrough opens on: {}", walkthrough),
        format!("scores fill after: {}ms", config.demo.score_reveal_delay_ms),
        format!("log file: {}", log_file),
    ]
}

fn print_problems(config: &Config, theme: &Theme) -> Result<()> {
    for problem in config.problems(demo_functions()?.len()) {
        println!("{}", theme.error_text(&format!("warning: {}", problem)));
    }
    Ok(())
}

/// Open the config file in `$VISUAL` or `$EDITOR`, creating it first if needed.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let path = Config::config_path()?;
    let theme = current_theme();

    if !path.exists() {
        Config::default().save_to(&path)?;
        info!(path = %path.display(), "created default config");
    }

    let (program, args) = editor_command(
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    );
    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", path.display(), program))
    );

    let status = Command::new(&program)
        .args(&args)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to open editor {}", program))?;
    if !status.success() {
        bail!("Editor {} exited with {}", program, status);
    }

    let config = Config::load_from(&path)?;
    if config.problems(demo_functions()?.len()).is_empty() {
        println!("{}", theme.success_text("Config is valid."));
    } else {
        print_problems(&config, &theme)?;
    }
    Ok(())
}

/// Editor program and its arguments. `$VISUAL` wins over `$EDITOR`; both
/// may carry flags, e.g. `code --wait`.
fn editor_command(visual: Option<String>, editor: Option<String>) -> (String, Vec<String>) {
    let command = visual
        .into_iter()
        .chain(editor)
        .find(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string());
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_else(|| "vi".to_string());
    (program, parts.collect())
}

/// Add missing fields to the config file after showing what would change.
///
/// The migrated file is parsed before anything is written, so an unknown
/// theme or a malformed value is reported instead of being carried over.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let file_exists = path.exists();

    let content = if file_exists {
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;
    let migrated: Config = toml::from_str(&result.content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    print_problems(&migrated, &theme)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    let question = if file_exists {
        let summary = match result.sections_added.len() {
            0 => format!("Found {} missing field(s):", result.added_fields.len()),
            n => format!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                n
            ),
        };
        println!("{}", theme.primary_text(&summary));
        format!("Apply these changes to {}?", path.display())
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        format!("Create {}?", path.display())
    };
    println!();
    for line in preview_lines(&result, !file_exists) {
        println!("{}", line.render(&theme));
    }
    println!();

    if !approve(yes, &question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    write_config(&path, &result.content)?;
    let done = if file_exists {
        "Config updated successfully."
    } else {
        "Config file created successfully."
    };
    println!("{}", theme.success_text(done));
    Ok(())
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "config migrated");
    Ok(())
}

/// One line of the migrate preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLine {
    /// Existing section header, shown above fields added to it
    Section(String),
    /// Line the migration adds
    Added(String),
}

impl PreviewLine {
    fn render(&self, theme: &Theme) -> String {
        match self {
            Self::Section(line) => theme.secondary_text(&format!("  {}", line)),
            Self::Added(line) => theme.success_text(&format!("+ {}", line)),
        }
    }
}

/// Lines of `result.content` that the migration adds, with the header of
/// each existing section that gains fields.
pub fn preview_lines(result: &MigrateResult, is_new_file: bool) -> Vec<PreviewLine> {
    let mut preview = Vec::new();
    let mut section = "";
    let mut pending_header: Option<&str> = None;

    for line in result.content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name;
            if is_new_file || result.sections_added.iter().any(|s| s == name) {
                preview.push(PreviewLine::Added(line.to_string()));
                pending_header = None;
            } else {
                pending_header = Some(line);
            }
            continue;
        }

        let added = is_new_file
            || trimmed.split_once('=').is_some_and(|(key, _)| {
                let field = format!("{}.{}", section, key.trim());
                result.added_fields.contains(&field)
            });
        if added {
            if let Some(header) = pending_header.take() {
                preview.push(PreviewLine::Section(header.to_string()));
            }
            preview.push(PreviewLine::Added(line.to_string()));
        }
    }
    preview
}

/// True when the change may go ahead: `--yes`, or an interactive "y".
fn approve(yes: bool, question: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            current_theme().secondary_text("Non-interactive mode: use --yes to apply changes")
        );
        return Ok(false);
    }
    let question = current_theme().primary_text(question);
    confirm(&mut io::stdin().lock(), &mut io::stdout(), &question)
}

/// Ask a yes/no question on `output` and read the answer from `input`.
fn confirm(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
