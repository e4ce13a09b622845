//! Terminal output for the operator CLI.

use colored::Colorize;
use studio_core::domains::extraction::ProductPage;
use studio_core::domains::publishing::{ExportSummary, PublishResult};
use studio_core::guide::ResolvedStep;
use studio_core::Session;

pub fn print_banner() {
    println!("{}", "╔════════════════════════════════════════╗".bright_magenta());
    println!("{}", "║        TUBO / INTELLIGENCE             ║".bright_magenta());
    println!("{}", "║     THE ARCHITECT OF CURVES            ║".bright_magenta());
    println!("{}", "╚════════════════════════════════════════╝".bright_magenta());
    println!();
}

pub fn print_product(page: &ProductPage) {
    println!("{}", page.title.to_uppercase().bright_magenta().bold());
    println!("{}", page.url.dimmed());
    println!();
    if page.has_description() {
        println!("{}", page.description);
    } else {
        println!("{}", page.description.yellow());
    }
}

pub fn print_campaign(session: &Session) {
    let Some(campaign) = session.campaign() else {
        println!("{}", "Nothing generated yet.".dimmed());
        return;
    };

    println!();
    println!("{}", session.product_name().to_uppercase().bright_magenta().bold());
    println!("{}", "─".repeat(42).dimmed());

    for (index, record) in campaign.iter().enumerate() {
        let marker = if session.is_edited(index) { " (edited)" } else { "" };
        println!(
            "{} {}{}",
            format!("[{}]", index + 1).bright_cyan(),
            record.display_persona().bold(),
            marker.yellow()
        );
        println!("{}", session.current_post(index).unwrap_or_default());
        println!("{}", "─".repeat(42).dimmed());
    }
}

pub fn print_publish_result(result: &PublishResult) {
    if result.success {
        println!("{}", "✅ Saved".bright_green());
    } else {
        println!("{}", format!("❌ {}", result.message).bright_red());
    }
}

pub fn print_export_progress(done: usize, total: usize) {
    println!("{}", format!("  synced {}/{}", done, total).dimmed());
}

pub fn print_export_summary(summary: &ExportSummary) {
    if summary.succeeded > 0 {
        println!(
            "{}",
            format!("Uploaded {} Assets.", summary.succeeded).bright_green().bold()
        );
    }
    for (index, message) in &summary.failures {
        println!("{}", format!("  [{}] {}", index + 1, message).bright_red());
    }
    if summary.skipped > 0 {
        println!(
            "{}",
            format!("  {} empty record(s) skipped", summary.skipped).dimmed()
        );
    }
    if summary.succeeded == 0 && summary.failures.is_empty() {
        println!("{}", "Nothing was uploaded.".yellow());
    }
}

pub fn print_guide(steps: &[ResolvedStep]) {
    println!("{}", "OPERATIONAL GUIDE".bright_magenta().bold());
    println!("{}", "─".repeat(42).dimmed());
    for resolved in steps {
        println!("{}", resolved.step.title.bold());
        println!("{}", resolved.step.body);
        if let Some(image) = &resolved.image {
            println!("{}", format!("  screenshot: {}", image.display()).dimmed());
        }
        println!("{}", "─".repeat(42).dimmed());
    }
}
