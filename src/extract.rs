//! Selector extraction
//!
//! Pulls distinct locator strings out of test source without parsing the
//! language: a handful of regexes per authoring convention, duplicates
//! collapsed. Unmatched text is ignored and nothing is validated here.

use regex::Regex;
use std::collections::BTreeSet;

/// Extract XPath selectors from Selenium test code.
///
/// Matches the three common call shapes: `find_element(By.X, "...")`,
/// `find_elements(By.X, "...")`, and a bare `By.XPATH, "...")` argument pair
/// (as seen inside expected-condition tuples).
pub fn selenium_selectors(code: &str) -> Vec<String> {
    let patterns = [
        r#"find_element\([^,]+,\s*["']([^"']+)["']\)"#,
        r#"find_elements\([^,]+,\s*["']([^"']+)["']\)"#,
        r#"By\.XPATH,\s*["']([^"']+)["']\)"#,
    ];
    collect_matches(code, &patterns)
}

/// Extract selectors from Playwright test code.
///
/// Matches `locator("...")`, the `get_by_*` accessor family, and interaction
/// calls that take a selector directly (`.click("...")`, `.fill("...")`).
pub fn playwright_selectors(code: &str) -> Vec<String> {
    let patterns = [
        r#"locator\(["']([^"']+)["']\)"#,
        r#"get_by_[a-z]+\(["']([^"']+)["']\)"#,
        r#"\.click\(["']([^"']+)["']\)"#,
        r#"\.fill\(["']([^"']+)["']\)"#,
    ];
    collect_matches(code, &patterns)
}

fn collect_matches(code: &str, patterns: &[&str]) -> Vec<String> {
    let mut found = BTreeSet::new();
    for pattern in patterns {
        let re = Regex::new(pattern).unwrap();
        for caps in re.captures_iter(code) {
            if let Some(m) = caps.get(1) {
                found.insert(m.as_str().to_string());
            }
        }
    }
    found.into_iter().collect()
}
