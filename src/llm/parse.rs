//! Response normalization
//!
//! Turns the model's free-form reply into a [`MappingSet`]: strip any fence
//! markers, parse as JSON, and if that fails apply a round of mechanical
//! repairs before giving up. Failure is an explicit `Err`, never a panic.

use super::client::truncate_str;
use serde::{Deserialize, Serialize};

/// One broken-to-suggested selector correspondence.
///
/// All fields default to empty strings so entries with missing keys survive
/// parsing; consumers skip entries whose relevant fields are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingEntry {
    #[serde(default)]
    pub broken_selector: String,
    #[serde(default)]
    pub playwright_equivalent: String,
    #[serde(default)]
    pub suggested_xpath: String,
    #[serde(default)]
    pub suggested_css: String,
    #[serde(default)]
    pub reasoning: String,
}

/// The full mapping result: ordered entries plus free-text recommendations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingSet {
    #[serde(default)]
    pub mappings: Vec<MappingEntry>,
    #[serde(default)]
    pub general_recommendations: Vec<String>,
}

/// Strip markdown code fences from a response
fn strip_markdown_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let clean = if trimmed.starts_with("```json") {
        trimmed.strip_prefix("```json").unwrap_or(trimmed)
    } else if trimmed.starts_with("```") {
        trimmed.strip_prefix("```").unwrap_or(trimmed)
    } else {
        trimmed
    };
    let clean = if clean.ends_with("```") {
        clean.strip_suffix("```").unwrap_or(clean)
    } else {
        clean
    };
    clean.trim()
}

/// Try to fix common JSON issues from LLM responses
fn fix_json_issues(json: &str) -> String {
    let mut fixed = json.to_string();

    // Remove trailing commas before ] or }
    fixed = fixed.replace(",]", "]");
    fixed = fixed.replace(",}", "}");

    // Smart quotes to regular quotes
    fixed = fixed.replace('\u{201C}', "\"");
    fixed = fixed.replace('\u{201D}', "\"");
    fixed = fixed.replace('\u{2018}', "'");
    fixed = fixed.replace('\u{2019}', "'");

    // Drop control characters that sometimes slip in
    fixed = fixed
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    fixed
}

/// Parse a raw model response into a [`MappingSet`].
///
/// Logs the parse error and a truncated preview of the offending text before
/// returning `Err`; an empty response (the degraded transport case) fails
/// here like any other non-JSON text.
pub fn parse_mapping_set(response: &str) -> anyhow::Result<MappingSet> {
    let clean = strip_markdown_fences(response);

    match serde_json::from_str::<MappingSet>(clean) {
        Ok(mapping) => Ok(mapping),
        Err(err) => {
            let fixed = fix_json_issues(clean);
            if let Ok(mapping) = serde_json::from_str::<MappingSet>(&fixed) {
                return Ok(mapping);
            }
            println!("Error parsing Ollama's response: {}", err);
            println!("Response was: {}", truncate_str(clean, 500));
            Err(anyhow::anyhow!("mapping response was not valid JSON"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_response() {
        let json = r##"{
            "mappings": [
                {
                    "broken_selector": "/html/body/div[1]/input",
                    "playwright_equivalent": "#username",
                    "suggested_xpath": "//input[@id='username']",
                    "suggested_css": "#username",
                    "reasoning": "ID-based lookup survives layout changes"
                }
            ],
            "general_recommendations": ["Prefer data-testid attributes"]
        }"##;
        let mapping = parse_mapping_set(json).unwrap();
        assert_eq!(mapping.mappings.len(), 1);
        assert_eq!(mapping.mappings[0].broken_selector, "/html/body/div[1]/input");
        assert_eq!(mapping.general_recommendations.len(), 1);
    }

    #[test]
    fn test_parse_strips_fences() {
        let response = "```json\n{\"mappings\": [], \"general_recommendations\": []}\n```";
        let mapping = parse_mapping_set(response).unwrap();
        assert!(mapping.mappings.is_empty());
    }

    #[test]
    fn test_parse_repairs_trailing_comma() {
        let response = r#"{"mappings": [{"broken_selector": "//a",},], "general_recommendations": []}"#;
        let mapping = parse_mapping_set(response).unwrap();
        assert_eq!(mapping.mappings.len(), 1);
        assert_eq!(mapping.mappings[0].broken_selector, "//a");
    }

    #[test]
    fn test_parse_missing_fields_default_to_empty() {
        let response = r#"{"mappings": [{"broken_selector": "//a"}]}"#;
        let mapping = parse_mapping_set(response).unwrap();
        assert_eq!(mapping.mappings[0].suggested_xpath, "");
        assert!(mapping.general_recommendations.is_empty());
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert!(parse_mapping_set("Here are your selector mappings!").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_response() {
        assert!(parse_mapping_set("").is_err());
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let original = MappingSet {
            mappings: vec![MappingEntry {
                broken_selector: "//button[1]".to_string(),
                playwright_equivalent: "button[type=\"submit\"]".to_string(),
                suggested_xpath: "//button[@type='submit']".to_string(),
                suggested_css: String::new(),
                reasoning: "attribute match".to_string(),
            }],
            general_recommendations: vec!["Add stable IDs".to_string()],
        };
        let text = serde_json::to_string(&original).unwrap();
        let parsed = parse_mapping_set(&text).unwrap();
        assert_eq!(parsed.mappings.len(), 1);
        assert_eq!(parsed.mappings[0].suggested_xpath, original.mappings[0].suggested_xpath);
        assert_eq!(parsed.general_recommendations, original.general_recommendations);
    }
}
