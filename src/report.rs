//! Report rendering
//!
//! Fixed-format plain-text summary of a mapping run: banner, entry count,
//! one numbered block per mapping, then general recommendations.

use crate::llm::MappingSet;
use std::fs;
use std::path::Path;

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Render the mapping set as a plain-text report.
pub fn render(mapping: &MappingSet) -> String {
    let banner = "=".repeat(80);
    let rule = "-".repeat(80);
    let mut report: Vec<String> = Vec::new();

    report.push(banner.clone());
    report.push("SELENIUM SELECTOR FIX REPORT".to_string());
    report.push(banner.clone());
    report.push(String::new());
    report.push(format!("Total Selectors Analyzed: {}", mapping.mappings.len()));

    if !mapping.mappings.is_empty() {
        report.push(String::new());
        report.push(rule.clone());

        for (i, entry) in mapping.mappings.iter().enumerate() {
            report.push(format!("\n{}. SELECTOR MAPPING", i + 1));
            report.push(rule.clone());
            report.push(format!("Broken XPath:      {}", or_na(&entry.broken_selector)));
            report.push(format!(
                "Playwright Equiv:  {}",
                or_na(&entry.playwright_equivalent)
            ));
            report.push(format!("Suggested XPath:   {}", or_na(&entry.suggested_xpath)));

            if !entry.suggested_css.is_empty() {
                report.push(format!("Alternative CSS:   {}", entry.suggested_css));
            }

            report.push(format!("\nReasoning: {}", or_na(&entry.reasoning)));
            report.push(String::new());
        }
    }

    if !mapping.general_recommendations.is_empty() {
        report.push(format!("\n{}", banner));
        report.push("GENERAL RECOMMENDATIONS".to_string());
        report.push(banner.clone());
        for rec in &mapping.general_recommendations {
            report.push(format!("\u{2022} {}", rec));
        }
    }

    report.join("\n")
}

/// Render the report and write it to `path` as a full-file overwrite.
/// Returns the report text either way it is consumed.
pub fn write_report(mapping: &MappingSet, path: &Path) -> anyhow::Result<String> {
    let text = render(mapping);
    fs::write(path, &text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MappingEntry;

    #[test]
    fn test_empty_set_emits_banner_and_zero_count() {
        let report = render(&MappingSet::default());
        assert!(report.contains("SELENIUM SELECTOR FIX REPORT"));
        assert!(report.contains("Total Selectors Analyzed: 0"));
        assert!(!report.contains("SELECTOR MAPPING"));
        assert!(!report.contains("GENERAL RECOMMENDATIONS"));
    }

    #[test]
    fn test_blocks_are_numbered_and_fields_fall_back_to_na() {
        let mapping = MappingSet {
            mappings: vec![
                MappingEntry {
                    broken_selector: "/html/body/div[1]/input".to_string(),
                    suggested_xpath: "//input[@id='user']".to_string(),
                    ..Default::default()
                },
                MappingEntry::default(),
            ],
            general_recommendations: vec![],
        };
        let report = render(&mapping);
        assert!(report.contains("1. SELECTOR MAPPING"));
        assert!(report.contains("2. SELECTOR MAPPING"));
        assert!(report.contains("Broken XPath:      /html/body/div[1]/input"));
        assert!(report.contains("Broken XPath:      N/A"));
        assert!(report.contains("Reasoning: N/A"));
        // Empty alternative CSS is omitted rather than shown as N/A
        assert!(!report.contains("Alternative CSS:"));
    }

    #[test]
    fn test_recommendations_are_bulleted() {
        let mapping = MappingSet {
            mappings: vec![],
            general_recommendations: vec!["Use data-testid attributes".to_string()],
        };
        let report = render(&mapping);
        assert!(report.contains("GENERAL RECOMMENDATIONS"));
        assert!(report.contains("\u{2022} Use data-testid attributes"));
    }

    #[test]
    fn test_write_report_overwrites_and_returns_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale contents").unwrap();

        let text = write_report(&MappingSet::default(), &path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, on_disk);
        assert!(!on_disk.contains("stale"));
    }
}
