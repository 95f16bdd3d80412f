//! Colored screen renderers for each flow step.
//!
//! Renderers are pure views: they receive the controller (or pieces of it)
//! by reference and only print. All state lives in the flow controller.

use colored::Colorize;
use tend_core::fabricate::CommunityStats;
use tend_core::{Category, FlowController, HistoryEntry, Profile, Session};

/// The landing screen with the four path cards.
pub fn welcome() {
    println!();
    println!("{}", "=== tend ===".bright_magenta().bold());
    println!(
        "{}",
        "Transform your daily moments into meaningful insights.".bright_white()
    );
    println!(
        "{}",
        "Share your growth, receive guidance, and shape your evolving story.".bright_black()
    );
    println!();
    for category in Category::ALL {
        let profile = category.profile();
        println!(
            "  {} {}  {}",
            profile.glyph,
            profile.path.bold(),
            format!("(Path of {category})").bright_black()
        );
    }
    println!();
    println!(
        "{}",
        "Press Enter to begin, type 'tour' for a walkthrough, or '/quit' to leave.".bright_black()
    );
}

/// The four path cards with their descriptions.
pub fn paths() {
    println!();
    println!("{}", "The Four Paths".bright_magenta().bold());
    println!();
    for category in Category::ALL {
        let profile = category.profile();
        println!("  {} {}", profile.glyph, profile.path.bold());
        println!("    {}", profile.description.bright_black());
        println!();
    }
}

/// The optional walkthrough of the four paths.
pub fn onboarding() {
    paths();
    println!(
        "{}",
        "Every reflection is filed under one path. You always get the final say.".bright_white()
    );
    println!("{}", "Press Enter to continue.".bright_black());
}

/// The reflection prompt, with returning-user counters when present.
pub fn input(profile: &Profile) {
    println!();
    println!("{}", "Share Your Moment".bright_magenta().bold());
    println!(
        "{}",
        "What did you do, feel, or learn today? (at least 10 characters)".bright_black()
    );
    if profile.total_reflections > 0 {
        let glyph = profile
            .last_chosen
            .map(|c| c.profile().glyph)
            .unwrap_or("·");
        println!(
            "{}",
            format!(
                "{} reflections · {} day streak · current path {}",
                profile.total_reflections, profile.current_streak, glyph
            )
            .bright_black()
        );
    }
}

/// Shown when a submitted reflection is too short.
pub fn input_too_short(message: &str) {
    println!("{}", message.yellow());
}

/// The simulated analysis screen.
pub fn processing() {
    println!();
    println!("{}", "Analyzing your reflection...".bright_cyan().bold());
    for stage in [
        "Understanding context",
        "Identifying patterns",
        "Generating insights",
    ] {
        println!("  {} {}", "·".bright_cyan(), stage.bright_black());
    }
}

/// The insight reveal, with the fabricated receipt and report.
pub fn insight(session: &Session, explorer_link: Option<&str>) {
    println!();
    println!("{}", "Your Insight is Ready".bright_green().bold());
    if let Some(text) = &session.insight {
        println!();
        println!("  {}", format!("\"{text}\"").bright_blue().italic());
    }
    println!();
    println!("{}", "Your reflection:".bright_black());
    println!("  {}", session.input);
    if let Some(report) = &session.report {
        println!();
        println!("{} {}", "Ethics report:".bright_black(), report.bright_black());
    }
    if let Some(id) = &session.receipt_id {
        println!("{} {}", "Receipt:".bright_black(), id.bright_black());
    }
    if let Some(link) = explorer_link {
        println!("{} {}", "Explorer:".bright_black(), link.bright_black().underline());
    }
    println!();
    println!("{}", "Press Enter to choose your path.".bright_black());
}

/// The path selection menu.
pub fn path_selection(assigned: Option<Category>) {
    println!();
    println!("{}", "Choose Your Path Forward".bright_magenta().bold());
    println!(
        "{}",
        "How do you wish to continue your journey?".bright_black()
    );
    println!();
    for (index, category) in Category::ALL.iter().enumerate() {
        let profile = category.profile();
        let marker = if assigned == Some(*category) {
            " (suggested)".bright_green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {}. {} {}{}",
            index + 1,
            profile.glyph,
            profile.path.bold(),
            marker
        );
        println!("     {}", profile.description.bright_black());
    }
    println!();
    println!(
        "{}",
        "Pick a path by number or name (e.g. '2' or 'green').".bright_black()
    );
}

/// Shown when the chosen path does not parse.
pub fn unknown_path(message: &str) {
    println!("{}", message.yellow());
}

/// The completion screen: confirmation, counters, community stats, history.
pub fn dashboard(flow: &FlowController, stats: &CommunityStats) {
    let profile = flow.profile();
    println!();
    println!("{}", "Journey Complete!".bright_green().bold());
    if let Some(chosen) = profile.last_chosen {
        let meta = chosen.profile();
        println!(
            "{}",
            format!("Filed under {} {} (Path of {chosen})", meta.glyph, meta.path).bright_white()
        );
    }
    println!();
    println!(
        "  {}  {}",
        format!("{}", profile.total_reflections).bright_cyan().bold(),
        "total reflections".bright_black()
    );
    println!(
        "  {}  {}",
        format!("{}", profile.current_streak).bright_cyan().bold(),
        "day streak".bright_black()
    );
    println!();
    community(stats);
    if !flow.history().is_empty() {
        println!();
        history(flow.history());
    }
    println!();
    println!(
        "{}",
        "Press Enter for a new reflection, or try /history, /stats, /paths.".bright_black()
    );
}

/// Fabricated community counters.
pub fn community(stats: &CommunityStats) {
    println!("{}", "Community today".bright_magenta());
    println!(
        "  {} reflections shared · {} members active",
        stats.reflections_today.to_string().bright_cyan(),
        stats.active_members.to_string().bright_cyan()
    );
    let shares: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}%", c.profile().glyph, stats.share_for(*c)))
        .collect();
    println!("  {}", shares.join("  ").bright_black());
}

/// The full history list, most recent first.
pub fn history(entries: &[HistoryEntry]) {
    println!("{}", "Your Growth Story".bright_magenta());
    for (index, entry) in entries.iter().enumerate() {
        let number = entries.len() - index;
        println!(
            "  {} {} {}",
            format!("#{number}").bold(),
            entry.chosen.profile().glyph,
            entry
                .confirmed_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
        println!("    {}", entry.input);
        println!("    {}", entry.insight.bright_black().italic());
    }
}
