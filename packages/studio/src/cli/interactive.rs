//! Menu-driven operator session.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Editor, Input, Password, Select};
use studio_core::{guide, Session, SessionError, Studio};

use crate::render;

const MENU: [&str; 7] = [
    "⚡ Generate assets",
    "✏️  Edit a caption",
    "💾 Save a caption",
    "📤 Export campaign to Notion",
    "📖 System manual",
    "🔄 Reset system",
    "🛑 Exit",
];

pub async fn run(studio: &Studio, session: &mut Session, password: Option<String>) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();
    let mut preset_password = password;

    loop {
        if !session.is_authenticated() {
            term.clear_screen()?;
            render::print_banner();
            if !login(studio, session, &theme, preset_password.take())? {
                return Ok(());
            }
        }

        println!();
        let selection = Select::with_theme(&theme)
            .with_prompt("COMMAND CENTER")
            .items(&MENU)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => generate(studio, session, &theme).await?,
            1 => edit(session, &theme)?,
            2 => save(studio, session, &theme).await?,
            3 => export(studio, session).await,
            4 => render::print_guide(&guide::resolve_steps(&studio.config().assets_dir)),
            5 => {
                studio.reset(session);
                println!("{}", "System reset. Unlock to start a new analysis.".bright_blue());
            }
            6 => {
                println!("{}", "👋 Goodbye!".bright_blue());
                return Ok(());
            }
            _ => unreachable!(),
        }
    }
}

/// Prompt until unlocked. Returns false when the gate can never open.
fn login(
    studio: &Studio,
    session: &mut Session,
    theme: &ColorfulTheme,
    mut preset: Option<String>,
) -> Result<bool> {
    loop {
        let attempt = match preset.take() {
            Some(p) => p,
            None => Password::with_theme(theme)
                .with_prompt("ENTER KEY")
                .allow_empty_password(true)
                .interact()?,
        };

        match studio.unlock(session, &attempt) {
            Ok(()) => return Ok(true),
            Err(SessionError::PasswordNotConfigured) => {
                println!("{}", "STUDIO_PASSWORD is not set; the studio stays locked.".bright_red());
                return Ok(false);
            }
            Err(e) => println!("{}", e.to_string().bright_red()),
        }
    }
}

async fn generate(studio: &Studio, session: &mut Session, theme: &ColorfulTheme) -> Result<()> {
    let url: String = Input::with_theme(theme)
        .with_prompt("Product URL")
        .allow_empty(true)
        .interact_text()?;

    println!("{}", "Analyzing Silhouette & Structure...".dimmed());
    let outcome = studio.generate(session, &url).await.map(|_| ());
    match outcome {
        Ok(()) => render::print_campaign(session),
        Err(e) => println!("{}", e.to_string().bright_red()),
    }
    Ok(())
}

/// Pick a record by persona; None when there is nothing to pick
fn pick_record(session: &Session, theme: &ColorfulTheme, prompt: &str) -> Result<Option<usize>> {
    let Some(campaign) = session.campaign() else {
        println!("{}", SessionError::NoCampaign.to_string().yellow());
        return Ok(None);
    };

    let items: Vec<String> = campaign
        .iter()
        .enumerate()
        .map(|(i, r)| format!("[{}] {}", i + 1, r.display_persona()))
        .collect();

    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

fn edit(session: &mut Session, theme: &ColorfulTheme) -> Result<()> {
    let Some(index) = pick_record(session, theme, "Edit which caption?")? else {
        return Ok(());
    };

    let current = session.current_post(index).unwrap_or_default().to_string();
    match Editor::new().edit(&current)? {
        Some(text) => {
            session.edit(index, text.trim_end())?;
            render::print_campaign(session);
        }
        None => println!("{}", "Edit discarded.".dimmed()),
    }
    Ok(())
}

async fn save(studio: &Studio, session: &Session, theme: &ColorfulTheme) -> Result<()> {
    let Some(index) = pick_record(session, theme, "Save which caption?")? else {
        return Ok(());
    };

    println!("{}", "Saving...".dimmed());
    match studio.save(session, index).await {
        Ok(result) => render::print_publish_result(&result),
        Err(e) => println!("{}", e.to_string().bright_red()),
    }
    Ok(())
}

async fn export(studio: &Studio, session: &Session) {
    println!("{}", "Syncing to Notion...".dimmed());
    match studio.export(session, render::print_export_progress).await {
        Ok(summary) => render::print_export_summary(&summary),
        Err(e) => println!("{}", e.to_string().bright_red()),
    }
}
