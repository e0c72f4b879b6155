use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::new(TEMPLATE_GLOB)?;

    tera.register_filter("formations_list", formations_list_filter);

    Ok(tera)
}

/// Split a comma-separated formations string into a list of trimmed names.
///
/// `"Python, SQL"` becomes `["Python", "SQL"]`; empty segments are dropped.
fn formations_list_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("formations_list filter expects a string"))?;

    let parts: Vec<tera::Value> = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| tera::Value::String(part.to_string()))
        .collect();

    Ok(tera::Value::Array(parts))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn apply(value: &str) -> Vec<String> {
        let result =
            formations_list_filter(&tera::Value::String(value.to_string()), &HashMap::new())
                .unwrap();
        result
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_formations_list_splits_on_commas() {
        assert_eq!(apply("Python, SQL"), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_formations_list_trims_whitespace() {
        assert_eq!(apply("  Rust ,  Go"), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_formations_list_single_entry() {
        assert_eq!(apply("Data Engineering"), vec!["Data Engineering"]);
    }

    #[test]
    fn test_formations_list_drops_empty_segments() {
        assert_eq!(apply("Python,,SQL,"), vec!["Python", "SQL"]);
        assert!(apply("").is_empty());
    }

    #[test]
    fn test_formations_list_rejects_non_strings() {
        let err = formations_list_filter(&tera::Value::Bool(true), &HashMap::new());
        assert!(err.is_err());
    }
}
