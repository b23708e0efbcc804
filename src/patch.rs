//! Code patching
//!
//! Rewrites the Selenium source by replacing each broken selector, matched as
//! a quoted literal, with its suggested XPath. Entries are applied in order;
//! a replacement that happens to equal a later entry's broken selector is
//! itself rewritten again. That re-application is documented behavior of the
//! mapping format, not something this module guards against.

use crate::llm::MappingEntry;
use regex::{NoExpand, Regex};

/// Apply selector mappings to Selenium test code.
///
/// Entries with an empty broken or suggested field are skipped silently. The
/// broken selector must appear inside single or double quotes; the
/// replacement is always emitted double-quoted. Returns the patched text;
/// the input is not mutated.
pub fn apply_mappings(code: &str, mappings: &[MappingEntry]) -> String {
    let mut updated = code.to_string();

    for mapping in mappings {
        let broken = mapping.broken_selector.as_str();
        let suggested = mapping.suggested_xpath.as_str();
        if broken.is_empty() || suggested.is_empty() {
            continue;
        }

        let pattern = format!(r#"["']{}["']"#, regex::escape(broken));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        let replacement = format!("\"{}\"", suggested);
        updated = re.replace_all(&updated, NoExpand(&replacement)).into_owned();
    }

    updated
}
