//! selector-fixer CLI
//!
//! Reads a Selenium test with broken XPath selectors and a Playwright test
//! with working selectors, asks a local Ollama model for a selector mapping,
//! then writes a patched copy of the Selenium file plus a plain-text report.

use anyhow::{Context, Result};
use clap::Parser;
use selector_fixer::config::Config;
use selector_fixer::llm::client::truncate_str;
use selector_fixer::llm::OllamaClient;
use selector_fixer::{extract, report, workflow};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "selector-fixer",
    about = "Fix broken Selenium XPath selectors using a working Playwright test and Ollama",
    version
)]
struct Args {
    /// Path to Selenium test file with broken selectors
    #[arg(long)]
    selenium: PathBuf,

    /// Path to Playwright test file with working selectors
    #[arg(long)]
    playwright: PathBuf,

    /// Path to test results file (optional failure context for the prompt)
    #[arg(long)]
    test_results: Option<PathBuf>,

    /// Path for the updated Selenium test file (default: input with .fixed.py)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path for the detailed report
    #[arg(long, default_value = "selector_fix_report.txt")]
    report: PathBuf,

    /// Ollama API URL (default: http://localhost:11434, or config/OLLAMA_URL)
    #[arg(long)]
    ollama_url: Option<String>,

    /// Ollama model name (default: llama3.2, or config)
    #[arg(long)]
    model: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let selenium_code = fs::read_to_string(&args.selenium)
        .with_context(|| format!("Could not read Selenium file: {}", args.selenium.display()))?;
    let playwright_code = fs::read_to_string(&args.playwright).with_context(|| {
        format!("Could not read Playwright file: {}", args.playwright.display())
    })?;
    let test_results = match &args.test_results {
        Some(path) => Some(fs::read_to_string(path).with_context(|| {
            format!("Could not read test results file: {}", path.display())
        })?),
        None => None,
    };

    let mut config = Config::load();
    if let Some(url) = args.ollama_url {
        config.ollama_url = url;
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    eprintln!("Initializing Selector Fixer with Ollama ({})...", config.model);

    let selenium_selectors = extract::selenium_selectors(&selenium_code);
    let playwright_selectors = extract::playwright_selectors(&playwright_code);
    eprintln!(
        "Found {} Selenium selector(s) and {} Playwright selector(s)",
        selenium_selectors.len(),
        playwright_selectors.len()
    );

    eprintln!("\nAnalyzing tests and mapping selectors...");
    eprintln!("This may take a moment...\n");

    let client = OllamaClient::new(config);
    let outcome = workflow::run(
        &client,
        &selenium_code,
        &playwright_code,
        test_results.as_deref(),
    )?;

    eprintln!("Updating Selenium test code...");
    let output_path = args
        .output
        .unwrap_or_else(|| args.selenium.with_extension("fixed.py"));
    fs::write(&output_path, &outcome.patched)
        .with_context(|| format!("Could not write patched file: {}", output_path.display()))?;
    println!("✓ Updated Selenium test saved to: {}", output_path.display());

    report::write_report(&outcome.mapping, &args.report)
        .with_context(|| format!("Could not write report: {}", args.report.display()))?;
    println!("✓ Detailed report saved to: {}", args.report.display());

    print_summary(&outcome.mapping);
    Ok(())
}

fn print_summary(mapping: &selector_fixer::llm::MappingSet) {
    println!("\n{}", "=".repeat(80));
    println!("SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Selectors fixed: {}", mapping.mappings.len());

    if !mapping.mappings.is_empty() {
        println!("\nPreview of changes:");
        for (i, entry) in mapping.mappings.iter().take(3).enumerate() {
            println!("\n{}. {}", i + 1, preview_selector(&entry.broken_selector));
            println!("   -> {}", preview_selector(&entry.suggested_xpath));
        }
        if mapping.mappings.len() > 3 {
            println!("\n   ... and {} more", mapping.mappings.len() - 3);
        }
    }

    println!("\n✓ Done! Review the report and updated test file before running tests.");
}

/// Truncate a selector for the summary preview, marking the cut.
fn preview_selector(selector: &str) -> String {
    let truncated = truncate_str(selector, 60);
    if truncated.len() < selector.len() {
        format!("{}...", truncated)
    } else {
        truncated.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_selector_marks_truncation() {
        let long = "/html/body/div[1]/div[2]/div[3]/div[4]/div[5]/div[6]/form/div[7]/input";
        let preview = preview_selector(long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 63);
    }

    #[test]
    fn test_preview_selector_leaves_short_selectors_alone() {
        assert_eq!(preview_selector("//input[@id='user']"), "//input[@id='user']");
    }
}
