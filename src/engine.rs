//! Template engine: name resolution, default variables and file output.

use crate::{
    constants::{DATE_FORMAT, DATE_VARIABLE, DEFAULT_EXTENSION},
    error::{Error, Result},
    ioutils::{read_file, write_file},
    renderer::{new_renderer, TemplateRenderer},
    store::TemplateStore,
    types::Variables,
};
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// Loads templates from a store root and renders them into files.
///
/// The engine keeps no state besides the root, the default extension and
/// its renderer; every call reads the template from disk again.
pub struct TemplateEngine {
    root: PathBuf,
    extension: String,
    renderer: Box<dyn TemplateRenderer>,
}

impl TemplateEngine {
    /// Creates an engine reading templates from `store`.
    pub fn new(store: &TemplateStore) -> Self {
        Self::with_root(store.root())
    }

    /// Creates an engine reading templates from `root`.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            renderer: Box::new(new_renderer()),
        }
    }

    /// Replaces the renderer used for substitution.
    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Extension, without the leading dot, inferred for names that have none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolves a template name to its path under the root.
    ///
    /// A name without an extension gets the default one appended; nothing
    /// else is normalized.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        if path.extension().is_some() {
            path
        } else {
            path.with_extension(&self.extension)
        }
    }

    /// Reads the content of the template `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        debug!("Loading template '{}' from {}", name, path.display());
        if !path.is_file() {
            return Err(Error::TemplateNotFound { path: path.display().to_string() });
        }
        read_file(&path)
    }

    /// Renders the template `name` with `variables`.
    ///
    /// `date` is injected with today's local date unless the caller supplied it.
    pub fn render(&self, name: &str, variables: &Variables) -> Result<String> {
        let template = self.load(name)?;
        self.render_str(&template, variables, Some(name))
    }

    /// Renders template text that did not come from the store.
    pub fn render_str(
        &self,
        template: &str,
        variables: &Variables,
        template_name: Option<&str>,
    ) -> Result<String> {
        let variables = with_defaults(variables);
        trace!("Rendering {:?} with variables {:?}", template_name, variables);
        self.renderer.render(template, &variables, template_name)
    }

    /// Renders the template `name` and writes it to `output_path`.
    ///
    /// Missing parent directories are created and an existing file is
    /// overwritten. Nothing is written when rendering fails.
    pub fn write<P: AsRef<Path>>(
        &self,
        name: &str,
        output_path: P,
        variables: &Variables,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let content = self.render(name, variables)?;
        debug!("Writing '{}' to {}", name, output_path.display());
        write_file(&content, output_path)
    }

    /// Lists the placeholder names the template `name` references.
    pub fn placeholders(&self, name: &str) -> Result<Vec<String>> {
        let template = self.load(name)?;
        self.renderer.placeholders(&template, Some(name))
    }
}

/// Returns `variables` merged with the computed defaults.
fn with_defaults(variables: &Variables) -> Variables {
    let mut merged = variables.clone();
    if !merged.contains_key(DATE_VARIABLE) {
        merged.insert(
            DATE_VARIABLE.to_string(),
            chrono::Local::now().format(DATE_FORMAT).to_string(),
        );
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::variables;
    use std::fs;

    fn engine_with(files: &[(&str, &str)]) -> (tempfile::TempDir, TemplateEngine) {
        let temp_dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let engine = TemplateEngine::with_root(temp_dir.path());
        (temp_dir, engine)
    }

    #[test]
    fn resolve_appends_default_extension() {
        let engine = TemplateEngine::with_root("/store");
        assert_eq!(engine.resolve("python/class"), PathBuf::from("/store/python/class.py"));
    }

    #[test]
    fn resolve_keeps_explicit_extension() {
        let engine = TemplateEngine::with_root("/store");
        assert_eq!(engine.resolve("docs/readme.md"), PathBuf::from("/store/docs/readme.md"));
        assert_eq!(engine.resolve("python/class.py"), PathBuf::from("/store/python/class.py"));
    }

    #[test]
    fn load_reads_with_and_without_extension() {
        let (_tmp, engine) = engine_with(&[("python/class.py", "class $class_name: pass\n")]);
        assert_eq!(engine.load("python/class").unwrap(), "class $class_name: pass\n");
        assert_eq!(engine.load("python/class.py").unwrap(), "class $class_name: pass\n");
    }

    #[test]
    fn load_missing_template_is_not_found() {
        let (_tmp, engine) = engine_with(&[]);
        let err = engine.load("python/nope").unwrap_err();
        match err {
            Error::TemplateNotFound { path } => assert!(path.ends_with("nope.py")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_injects_todays_date() {
        let (_tmp, engine) = engine_with(&[("stamp.py", "Created on $date")]);
        let out = engine.render("stamp", &Variables::new()).unwrap();
        let today = chrono::Local::now().format(DATE_FORMAT).to_string();
        assert_eq!(out, format!("Created on {today}"));
    }

    #[test]
    fn render_keeps_caller_supplied_date() {
        let (_tmp, engine) = engine_with(&[("stamp.py", "Created on $date")]);
        let out = engine.render("stamp", &variables([("date", "1999-12-31")])).unwrap();
        assert_eq!(out, "Created on 1999-12-31");
    }

    #[test]
    fn render_does_not_mutate_caller_variables() {
        let (_tmp, engine) = engine_with(&[("stamp.py", "$date")]);
        let vars = Variables::new();
        engine.render("stamp", &vars).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn render_reports_missing_variable_with_template_name() {
        let (_tmp, engine) = engine_with(&[("python/class.py", "class $class_name($base)")]);
        let err = engine
            .render("python/class", &variables([("class_name", "Widget")]))
            .unwrap_err();
        match err {
            Error::MissingVariable { name, template } => {
                assert_eq!(name, "base");
                assert_eq!(template, "python/class");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn write_creates_parents_and_overwrites() {
        let (tmp, engine) = engine_with(&[("hello.py", "print('$who')\n")]);
        let target = tmp.path().join("out/deep/hello.py");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "stale content that is longer than the new one\n").unwrap();

        engine.write("hello", &target, &variables([("who", "world")])).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "print('world')\n");
    }

    #[test]
    fn write_leaves_no_file_when_rendering_fails() {
        let (tmp, engine) = engine_with(&[("hello.py", "print('$who')\n")]);
        let target = tmp.path().join("out/hello.py");
        assert!(engine.write("hello", &target, &Variables::new()).is_err());
        assert!(!target.exists());
    }

    struct ShoutingRenderer;

    impl TemplateRenderer for ShoutingRenderer {
        fn render(&self, template: &str, _: &Variables, _: Option<&str>) -> Result<String> {
            Ok(template.to_uppercase())
        }

        fn placeholders(&self, _: &str, _: Option<&str>) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn with_renderer_swaps_substitution() {
        let (_tmp, engine) = engine_with(&[("hello.py", "hello $who")]);
        let engine = engine.with_renderer(Box::new(ShoutingRenderer));
        assert_eq!(engine.render("hello", &Variables::new()).unwrap(), "HELLO $WHO");
    }

    #[test]
    fn placeholders_lists_template_variables() {
        let (_tmp, engine) =
            engine_with(&[("python/test.py", "from $module_name import $class_name\n$class_name()")]);
        assert_eq!(
            engine.placeholders("python/test").unwrap(),
            vec!["module_name".to_string(), "class_name".to_string()]
        );
    }
}
