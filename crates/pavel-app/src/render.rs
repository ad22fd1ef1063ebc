//! Terminal output: transcript, replies, usage, and the progress spinner.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pavel_ai::{Exchange, ModelTier, Role, Session, TokenTracker, Turn};

use crate::picker::FilePicker;

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Model => "Pavel",
        Role::System => "system",
    }
}

pub fn banner(tier: ModelTier) {
    println!("{}", "🎓 Pavel AI: PhD Research Station".bright_magenta().bold());
    println!("{}", "Theoretical Physics | Pure Math | Applied Math".bright_black());
    println!(
        "{} {} ({})",
        "Model:".bright_black(),
        tier.label(),
        tier.caption().bright_black()
    );
    println!("{}", "Type /help for commands.".bright_black());
    println!();
}

pub fn print_turn(turn: &Turn) {
    let label = match turn.role {
        Role::User => role_label(turn.role).green().bold(),
        Role::Model => role_label(turn.role).cyan().bold(),
        Role::System => role_label(turn.role).bright_black(),
    };
    println!("{label}");
    println!("{}", turn.text());
    println!();
}

pub fn print_transcript(session: &Session) {
    for turn in session.visible_turns() {
        print_turn(turn);
    }
}

pub fn print_exchange(exchange: &Exchange, session: &Session) {
    for rejected in &exchange.rejected {
        println!("{} {rejected}", "skipped:".yellow());
    }
    if let Some(turn) = session.turns().last() {
        print_turn(turn);
    }
}

pub fn print_files(picker: &FilePicker) {
    if picker.is_empty() {
        println!("{}", "No files selected.".bright_black());
        return;
    }
    println!(
        "{}",
        format!(
            "{} References Loaded ({} bytes)",
            picker.len(),
            picker.total_bytes()
        )
        .green()
    );
    for attachment in picker.attachments() {
        println!(
            "  {} {}",
            attachment.name(),
            format!("({}, {} bytes)", attachment.mime_type(), attachment.len()).bright_black()
        );
    }
}

pub fn print_usage(tracker: &TokenTracker) {
    println!(
        "{} calls, {} input + {} output = {} tokens",
        tracker.call_count(),
        tracker.total().input_tokens,
        tracker.total().output_tokens,
        tracker.total_tokens()
    );
    for tier in ModelTier::ALL {
        if let Some(usage) = tracker.for_tier(tier) {
            println!("  {}: {} tokens", tier.identifier(), usage.total_tokens());
        }
    }
}

pub fn warn(message: impl std::fmt::Display) {
    println!("{}", message.to_string().yellow());
}

pub fn analyzing_message(documents: usize) -> String {
    format!("Pavel is analyzing {documents} documents...")
}

/// Spinner shown while a prompt is in flight.
pub fn spinner(documents: usize) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(analyzing_message(documents));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
