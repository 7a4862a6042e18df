// ABOUTME: CLI profiles command - list published profiles from the hosted store
//
// Queries the configured profile API and prints name, title, and bio
// for every published profile, newest first as returned by the store.

use super::OutputFormat;
use crate::config::AppConfig;
use crate::models::ProfileRecord;
use crate::profiles::ProfileStoreClient;
use anyhow::Result;

/// Execute the profiles command
pub async fn execute(format: OutputFormat) -> Result<()> {
    let config = AppConfig::load()?;
    let client = ProfileStoreClient::new(&config)?;
    let profiles = client.list_profiles().await?;

    match format {
        OutputFormat::Json => output_json(&profiles)?,
        OutputFormat::Text => output_text(&profiles),
    }

    Ok(())
}

/// Output profiles as JSON
fn output_json(profiles: &[ProfileRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    println!("{json}");
    Ok(())
}

/// Output profiles as a formatted table
fn output_text(profiles: &[ProfileRecord]) {
    if profiles.is_empty() {
        println!("No profiles published yet.");
        return;
    }

    println!(
        "{:<24} {:<28} {}",
        "NAME", "TITLE", "BIO"
    );
    println!("{}", "-".repeat(80));

    for profile in profiles {
        println!(
            "{:<24} {:<28} {}",
            truncate(&profile.full_name, 22),
            truncate(&profile.professional_title, 26),
            truncate(&profile.bio, 28),
        );
    }

    println!();
    println!(
        "{} profile{}",
        profiles.len(),
        if profiles.len() == 1 { "" } else { "s" }
    );
}

/// Truncate a string to max length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("a very long string here", 10), "a very lo…");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }
}
