use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::errors::RecommendationError;
use super::model::RawRecommendation;

static CODE_FENCE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"```[A-Za-z0-9_-]*").ok());

/// Pulls the first JSON object out of the generator's raw text.
///
/// Only syntax is checked here. Missing slots, or slots that are not arrays,
/// become empty lists and non-string entries are skipped; whether the ids
/// mean anything is left to the sanitizer.
pub fn extract_recommendation(raw_text: &str) -> Result<RawRecommendation, RecommendationError> {
    let text = strip_code_fences(raw_text);
    let object = first_balanced_object(&text).ok_or(RecommendationError::GenerationParse)?;

    let parsed: Value =
        serde_json::from_str(object).map_err(|_| RecommendationError::GenerationParse)?;
    if !parsed.is_object() {
        return Err(RecommendationError::GenerationParse);
    }

    Ok(RawRecommendation {
        basic_outfit: string_list(&parsed, "basicOutfit"),
        layered_outfit: string_list(&parsed, "layeredOutfit"),
        recommendations: string_list(&parsed, "recommendations"),
    })
}

fn strip_code_fences(raw_text: &str) -> String {
    match CODE_FENCE.as_ref() {
        Some(re) => re.replace_all(raw_text, "").trim().to_string(),
        None => raw_text.trim().to_string(),
    }
}

/// Slice from the first `{` to its matching `}`. Braces inside string
/// literals do not count.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

fn string_list(parsed: &Value, key: &str) -> Vec<String> {
    parsed
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|id| id.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_plain_json_object() {
        let raw = r#"{"basicOutfit":["a","b"],"layeredOutfit":["a","b","c"],"recommendations":["d"]}"#;

        let result = extract_recommendation(raw).unwrap();

        assert_eq!(result.basic_outfit, vec!["a", "b"]);
        assert_eq!(result.layered_outfit, vec!["a", "b", "c"]);
        assert_eq!(result.recommendations, vec!["d"]);
    }

    #[test]
    fn should_strip_markdown_fences_and_surrounding_prose() {
        let raw = "Here is your outfit:\n```json\n{\"basicOutfit\": [\"a\"]}\n```\nEnjoy!";

        let result = extract_recommendation(raw).unwrap();

        assert_eq!(result.basic_outfit, vec!["a"]);
        assert!(result.layered_outfit.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn should_take_only_the_first_object() {
        let raw = r#"{"basicOutfit":["first"]} and also {"basicOutfit":["second"]}"#;

        let result = extract_recommendation(raw).unwrap();

        assert_eq!(result.basic_outfit, vec!["first"]);
    }

    #[test]
    fn should_ignore_braces_inside_strings() {
        let raw = r#"{"note":"use } and { freely \" here","recommendations":["x"]}"#;

        let result = extract_recommendation(raw).unwrap();

        assert_eq!(result.recommendations, vec!["x"]);
    }

    #[test]
    fn should_tolerate_wrong_types_and_unknown_keys() {
        let raw = r#"{"basicOutfit":"a","layeredOutfit":[1,"b",null],"extra":true}"#;

        let result = extract_recommendation(raw).unwrap();

        assert!(result.basic_outfit.is_empty());
        assert_eq!(result.layered_outfit, vec!["b"]);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn should_fail_when_no_structured_payload() {
        let result = extract_recommendation("I cannot help with that.");
        assert!(matches!(result, Err(RecommendationError::GenerationParse)));
    }

    #[test]
    fn should_fail_when_braces_never_close() {
        let result = extract_recommendation(r#"{"basicOutfit":["a"]"#);
        assert!(matches!(result, Err(RecommendationError::GenerationParse)));
    }

    #[test]
    fn should_fail_on_malformed_json() {
        let result = extract_recommendation(r#"{basicOutfit: ['a',]}"#);
        assert!(matches!(result, Err(RecommendationError::GenerationParse)));
    }

    #[test]
    fn should_fail_on_stray_closing_brace_before_object() {
        let result = extract_recommendation("} nothing {");
        assert!(matches!(result, Err(RecommendationError::GenerationParse)));
    }
}
