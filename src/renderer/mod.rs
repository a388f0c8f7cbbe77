//! Template rendering for the scaffolder
//!
//! Templates use flat `$name` / `${name}` placeholders; there are no
//! expressions, loops or conditionals.
//!
//! The module is structured as:
//! - `interface`: Core trait definition for template rendering
//! - `substitution`: Dollar-placeholder implementation of the renderer

pub mod interface;
pub mod substitution;

pub use interface::TemplateRenderer;
pub use substitution::SubstitutionRenderer;

/// Convenience function to create the default template renderer
pub fn new_renderer() -> impl TemplateRenderer {
    SubstitutionRenderer::new()
}
