//! Prompt construction for the selector mapping request

const MAPPING_PROMPT: &str = r#"You are an expert in test automation, specifically Selenium and Playwright.

I have two test files testing the same functionality:
1. A Selenium test with broken XPath selectors
2. A Playwright test with working selectors

Your task is to:
1. Identify what each test is trying to do
2. Map the broken Selenium XPath selectors to their working Playwright equivalents
3. Suggest updated, robust XPath selectors for Selenium based on the Playwright selectors
4. Provide a complete mapping in JSON format

SELENIUM TEST (with broken selectors):
```python
{selenium_code}
```

PLAYWRIGHT TEST (working):
```python
{playwright_code}
```

{test_results_section}CRITICAL INSTRUCTIONS:
- Focus on creating ROBUST selectors that won't break easily
- Prefer IDs and data attributes over complex XPaths
- Use relative XPaths, not absolute ones
- Consider using contains() or starts-with() for dynamic attributes

Respond with ONLY a valid JSON object in this exact format (no markdown, no backticks):
{
  "mappings": [
    {
      "broken_selector": "the broken XPath from Selenium",
      "playwright_equivalent": "the working Playwright selector",
      "suggested_xpath": "improved XPath for Selenium",
      "suggested_css": "alternative CSS selector if applicable",
      "reasoning": "brief explanation of the mapping and why this selector is better"
    }
  ],
  "general_recommendations": [
    "list of general recommendations for improving test stability"
  ]
}

DO NOT include any text outside the JSON object. Your entire response must be valid JSON only."#;

/// Build the mapping prompt embedding both files verbatim, plus the failure
/// log when one was provided.
pub fn build_mapping_prompt(
    selenium_code: &str,
    playwright_code: &str,
    test_results: Option<&str>,
) -> String {
    let test_results_section = match test_results {
        Some(results) => format!("TEST FAILURE RESULTS:\n{}\n\n", results),
        None => String::new(),
    };
    MAPPING_PROMPT
        .replace("{selenium_code}", selenium_code)
        .replace("{playwright_code}", playwright_code)
        .replace("{test_results_section}", &test_results_section)
}
