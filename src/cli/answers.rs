use crate::{
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::{read_file, read_from},
    types::Variables,
};
use serde_json::{Map, Value};
use std::path::Path;

/// Collects template variables for the `render` command.
///
/// Sources are applied in order, later ones overriding earlier keys:
/// the answers file, the `--answers` JSON (or stdin when it is `-`), then
/// individual `--var` pairs.
pub fn collect_variables(
    answers_file: Option<&Path>,
    answers: Option<&str>,
    vars: &[(String, String)],
) -> Result<Variables> {
    let mut variables = Variables::new();

    if let Some(path) = answers_file {
        log::debug!("Reading answers from {}", path.display());
        extend_from_json(&mut variables, &read_file(path)?)?;
    }

    if let Some(answers) = answers {
        let buf = if answers == STDIN_INDICATOR {
            read_from(std::io::stdin())?
        } else {
            answers.to_string()
        };
        extend_from_json(&mut variables, &buf)?;
    }

    for (key, value) in vars {
        variables.insert(key.clone(), value.clone());
    }

    Ok(variables)
}

fn extend_from_json(variables: &mut Variables, buf: &str) -> Result<()> {
    for (key, value) in parse_object(buf)? {
        variables.insert(key, value_to_string(&value));
    }
    Ok(())
}

/// Parses a JSON object; any other JSON value is rejected.
fn parse_object(buf: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(buf) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::AnswersParseError(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(Error::AnswersParseError(e.to_string())),
    }
}

/// Converts a JSON value to its substitution text.
///
/// Strings are used as-is, `null` becomes the empty string and arrays or
/// objects keep their JSON form.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_scalars_become_strings() {
        let vars = collect_variables(
            None,
            Some(r#"{"name": "demo", "count": 3, "flag": true, "none": null, "list": [1, 2]}"#),
            &[],
        )
        .unwrap();
        assert_eq!(vars["name"], "demo");
        assert_eq!(vars["count"], "3");
        assert_eq!(vars["flag"], "true");
        assert_eq!(vars["none"], "");
        assert_eq!(vars["list"], "[1,2]");
    }

    #[test]
    fn later_sources_override_earlier_ones() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("answers.json");
        std::fs::write(&file, r#"{"author": "File", "package_name": "from_file"}"#).unwrap();

        let vars = collect_variables(
            Some(&file),
            Some(r#"{"author": "Json"}"#),
            &[("package_name".to_string(), "from_var".to_string())],
        )
        .unwrap();

        assert_eq!(vars["author"], "Json");
        assert_eq!(vars["package_name"], "from_var");
    }

    #[test]
    fn non_object_json_is_rejected() {
        let err = collect_variables(None, Some("[1, 2, 3]"), &[]).unwrap_err();
        assert!(matches!(err, Error::AnswersParseError(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = collect_variables(None, Some("{not json"), &[]).unwrap_err();
        assert!(matches!(err, Error::AnswersParseError(_)));
    }

    #[test]
    fn missing_answers_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.json");
        let err = collect_variables(Some(&missing), None, &[]).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn no_sources_yield_empty_mapping() {
        assert!(collect_variables(None, None, &[]).unwrap().is_empty());
    }
}
