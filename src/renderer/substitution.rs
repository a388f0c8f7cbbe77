use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
    types::Variables,
};
use indexmap::IndexSet;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Name reported in errors for templates rendered without a name.
const ANONYMOUS_TEMPLATE: &str = "<string>";

/// Placeholder grammar:
/// - `$$` is a literal dollar sign
/// - `$identifier` and `${identifier}` are placeholders
/// - any other `$` is invalid
fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\}|(?P<invalid>))",
        )
        .expect("Invalid placeholder regex")
    })
}

/// One recognised `$` token.
enum Token<'t> {
    Escaped,
    Placeholder(&'t str),
}

/// Single-pass `$placeholder` substitution renderer.
///
/// Substituted values are emitted verbatim and never rescanned, so a value
/// containing `$other` stays literal in the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstitutionRenderer;

impl SubstitutionRenderer {
    pub fn new() -> Self {
        Self
    }

    fn classify<'t>(
        caps: &Captures<'t>,
        template: &str,
        template_name: &str,
    ) -> Result<Token<'t>> {
        if caps.name("escaped").is_some() {
            return Ok(Token::Escaped);
        }
        if let Some(id) = caps.name("named").or_else(|| caps.name("braced")) {
            return Ok(Token::Placeholder(id.as_str()));
        }
        let start = caps.get(0).map_or(0, |m| m.start());
        Err(invalid_placeholder(template, start, template_name))
    }
}

/// Builds an `InvalidPlaceholder` error with the 1-based line and column of `offset`.
fn invalid_placeholder(template: &str, offset: usize, template_name: &str) -> Error {
    let before = &template[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    Error::InvalidPlaceholder { template: template_name.to_string(), line, column }
}

impl TemplateRenderer for SubstitutionRenderer {
    fn render(
        &self,
        template: &str,
        variables: &Variables,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or(ANONYMOUS_TEMPLATE);
        let mut output = String::with_capacity(template.len());
        let mut last = 0;

        for caps in placeholder_regex().captures_iter(template) {
            let Some(whole) = caps.get(0) else { continue };
            output.push_str(&template[last..whole.start()]);
            match Self::classify(&caps, template, name)? {
                Token::Escaped => output.push('$'),
                Token::Placeholder(key) => {
                    let value = variables.get(key).ok_or_else(|| Error::MissingVariable {
                        name: key.to_string(),
                        template: name.to_string(),
                    })?;
                    output.push_str(value);
                }
            }
            last = whole.end();
        }
        output.push_str(&template[last..]);

        Ok(output)
    }

    fn placeholders(
        &self,
        template: &str,
        template_name: Option<&str>,
    ) -> Result<Vec<String>> {
        let name = template_name.unwrap_or(ANONYMOUS_TEMPLATE);
        let mut seen = IndexSet::new();
        for caps in placeholder_regex().captures_iter(template) {
            if let Token::Placeholder(key) = Self::classify(&caps, template, name)? {
                seen.insert(key.to_string());
            }
        }
        Ok(seen.into_iter().collect())
    }
}
