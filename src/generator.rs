//! High-level generators for packages, classes and tests.

use crate::{
    constants::{templates, DEFAULT_AUTHOR, DEFAULT_CONSTRUCTOR_BODY, DEFAULT_OUTPUT_DIR},
    engine::TemplateEngine,
    error::Result,
    ext::PathExt,
    ioutils::write_file,
    types::{variables, Variables},
};
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Derives a module name from a class name.
///
/// An underscore is inserted before every ASCII uppercase letter except the
/// first character, then the result is lowercased. Runs of capitals are
/// split letter by letter: `HTTPServer` becomes `h_t_t_p_server`.
pub fn derive_module_name(name: &str) -> String {
    let mut module = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            module.push('_');
        }
        module.extend(c.to_lowercase());
    }
    module
}

/// Inputs of [`Generator::create_package`].
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub name: String,
    pub author: String,
    pub output_dir: PathBuf,
}

impl PackageRequest {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            author: DEFAULT_AUTHOR.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Inputs of [`Generator::create_class`].
#[derive(Debug, Clone)]
pub struct ClassRequest {
    pub class_name: String,
    /// Derived from `class_name` when absent.
    pub module_name: Option<String>,
    pub output_dir: PathBuf,
    /// Inserted verbatim after `self` in the constructor signature.
    pub constructor_params: String,
    /// Inserted verbatim as the constructor body.
    pub constructor_body: String,
}

impl ClassRequest {
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
            module_name: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            constructor_params: String::new(),
            constructor_body: DEFAULT_CONSTRUCTOR_BODY.to_string(),
        }
    }
}

/// Inputs of [`Generator::create_test`].
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub class_name: String,
    /// Derived from `class_name` when absent.
    pub module_name: Option<String>,
    pub output_dir: PathBuf,
}

impl TestRequest {
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
            module_name: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Maps package/class/test intents onto template engine calls.
pub struct Generator {
    engine: TemplateEngine,
}

impl Generator {
    pub fn new(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.engine.extension())
    }

    /// Creates `<output_dir>/<name>/` with an initializer and a main module.
    ///
    /// Both files come from the package template with the same variables.
    /// The writes are independent: when the second fails the first stays on disk.
    /// Returns the package directory.
    pub fn create_package(&self, request: &PackageRequest) -> Result<PathBuf> {
        let package_dir = request.output_dir.join(&request.name);
        let vars = variables([
            ("package_name", request.name.as_str()),
            ("author", request.author.as_str()),
        ]);

        for stem in ["__init__", "main"] {
            let target = package_dir.join(self.file_name(stem));
            self.engine.write(templates::PACKAGE, &target, &vars)?;
            debug!("Wrote {}", target.display());
        }

        info!("Package '{}' created at {}", request.name, package_dir.display());
        Ok(package_dir)
    }

    /// Creates `<output_dir>/<module_name>.<ext>` from the class template.
    pub fn create_class(&self, request: &ClassRequest) -> Result<PathBuf> {
        let module_name = resolve_module_name(&request.class_name, &request.module_name);
        let target = request.output_dir.join(self.file_name(&module_name));
        let vars = variables([
            ("class_name", request.class_name.as_str()),
            ("module_name", module_name.as_str()),
            ("constructor_params", request.constructor_params.as_str()),
            ("constructor_body", request.constructor_body.as_str()),
        ]);

        self.engine.write(templates::CLASS, &target, &vars)?;
        info!("Class '{}' created at {}", request.class_name, target.display());
        Ok(target)
    }

    /// Creates `<output_dir>/test_<module_name>.<ext>` from the test template.
    pub fn create_test(&self, request: &TestRequest) -> Result<PathBuf> {
        let module_name = resolve_module_name(&request.class_name, &request.module_name);
        let target =
            request.output_dir.join(self.file_name(&format!("test_{module_name}")));
        let vars = variables([
            ("class_name", request.class_name.as_str()),
            ("module_name", module_name.as_str()),
        ]);

        self.engine.write(templates::TEST, &target, &vars)?;
        info!("Test for '{}' created at {}", request.class_name, target.display());
        Ok(target)
    }

    /// Renders an arbitrary template with caller-supplied variables.
    ///
    /// Writes to `output_path` when given, otherwise returns the text only.
    pub fn create_from_template(
        &self,
        name: &str,
        output_path: Option<&Path>,
        variables: &Variables,
    ) -> Result<String> {
        let content = self.engine.render(name, variables)?;
        if let Some(path) = output_path {
            write_file(&content, path)?;
            info!("Template '{}' rendered to {}", name, path.display());
        }
        Ok(content)
    }

    /// Lists every template under the store root with the default extension.
    ///
    /// Names are relative to the root and `/`-separated, so each one can be
    /// passed back to the engine. The extension is dropped unless the stem
    /// carries a dot of its own (`model.v2.py` stays as is), since the engine
    /// only infers it for names without one. Symlinked files are included.
    /// The order is the directory traversal order.
    pub fn list_templates(&self) -> Result<Vec<String>> {
        let root = self.engine.root();
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(self.engine.extension())
            {
                continue;
            }
            let relative = path.strip_prefix(root).map_err(anyhow::Error::from)?;
            let stem = relative.with_extension("");
            let name = if stem.extension().is_some() { relative } else { stem.as_path() };
            names.push(name.to_slash_name()?);
        }
        Ok(names)
    }
}

fn resolve_module_name(class_name: &str, module_name: &Option<String>) -> String {
    match module_name {
        Some(module) => module.clone(),
        None => derive_module_name(class_name),
    }
}
