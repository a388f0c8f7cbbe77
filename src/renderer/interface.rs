use crate::{error::Result, types::Variables};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// # Arguments
    /// * `template` - Template text to render
    /// * `variables` - Values for every placeholder the template references
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(
        &self,
        template: &str,
        variables: &Variables,
        template_name: Option<&str>,
    ) -> Result<String>;

    /// Lists the distinct placeholder names referenced by a template, in the
    /// order they first appear.
    ///
    /// # Arguments
    /// * `template` - Template text to scan
    /// * `template_name` - Optional name for the template (used in error messages)
    fn placeholders(&self, template: &str, template_name: Option<&str>)
        -> Result<Vec<String>>;
}
