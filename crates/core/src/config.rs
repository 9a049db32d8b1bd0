use thiserror::Error;

use crate::components::counter::CounterSpec;

/// Built-in role list used when the page does not supply `data-roles`.
pub const DEFAULT_ROLES: [&str; 3] = [
    "Rust Systems Engineer",
    "Full-Stack + AI/ML Builder",
    "Focused on High-Impact Software",
];

pub fn default_roles() -> Vec<String> {
    DEFAULT_ROLES.iter().map(|r| (*r).to_string()).collect()
}

#[derive(Debug, Error)]
pub enum RolesParseError {
    #[error("data-roles is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("data-roles contains no usable roles")]
    Empty,
}

/// Parse an optional `data-roles` attribute: a JSON array of strings.
///
/// Empty entries are dropped; an empty result is an error so callers fall
/// back to the built-in list instead of feeding the typewriter nothing.
pub fn parse_roles(raw: &str) -> Result<Vec<String>, RolesParseError> {
    let roles: Vec<String> = serde_json::from_str(raw)?;
    let roles: Vec<String> = roles.into_iter().filter(|r| !r.is_empty()).collect();
    if roles.is_empty() {
        return Err(RolesParseError::Empty);
    }
    Ok(roles)
}

/// Build a counter spec from raw `data-*` attribute values.
///
/// Safe coercion throughout: a missing or malformed target falls back to 0,
/// divisor to 1, suffix to empty. `animated` is set only by the literal
/// string `"true"`.
pub fn counter_spec(
    target: Option<&str>,
    divisor: Option<&str>,
    suffix: Option<&str>,
    animated: Option<&str>,
) -> CounterSpec {
    CounterSpec {
        target: target.and_then(|v| v.parse().ok()).unwrap_or(0.0),
        divisor: divisor.and_then(|v| v.parse().ok()).unwrap_or(1.0),
        suffix: suffix.unwrap_or_default().to_string(),
        animated: animated == Some("true"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_role_array() {
        let roles = parse_roles(r#"["Engineer", "Builder"]"#).unwrap();
        assert_eq!(roles, vec!["Engineer", "Builder"]);
    }

    #[test]
    fn drops_empty_entries_and_rejects_empty_lists() {
        let roles = parse_roles(r#"["", "Builder", ""]"#).unwrap();
        assert_eq!(roles, vec!["Builder"]);
        assert!(matches!(parse_roles("[]"), Err(RolesParseError::Empty)));
        assert!(matches!(
            parse_roles(r#"["", ""]"#),
            Err(RolesParseError::Empty)
        ));
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(matches!(
            parse_roles(r#"{"roles": []}"#),
            Err(RolesParseError::Json(_))
        ));
        assert!(parse_roles("not json").is_err());
    }

    #[test]
    fn counter_spec_defaults_on_missing_attributes() {
        let spec = counter_spec(None, None, None, None);
        assert_eq!(spec, CounterSpec::default());
    }

    #[test]
    fn counter_spec_coerces_malformed_numbers() {
        let spec = counter_spec(Some("abc"), Some(""), Some("+"), Some("yes"));
        assert_eq!(spec.target, 0.0);
        assert_eq!(spec.divisor, 1.0);
        assert_eq!(spec.suffix, "+");
        assert!(!spec.animated);
    }

    #[test]
    fn counter_spec_reads_well_formed_attributes() {
        let spec = counter_spec(Some("125"), Some("10"), Some("k"), Some("true"));
        assert_eq!(spec.target, 125.0);
        assert_eq!(spec.divisor, 10.0);
        assert_eq!(spec.suffix, "k");
        assert!(spec.animated);
    }
}
