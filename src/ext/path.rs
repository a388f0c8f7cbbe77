use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use scaffolder::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("python/class");
    /// assert_eq!(path.to_str_checked().unwrap(), "python/class");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Joins the components of a relative path with `/`, whatever the host separator.
    ///
    /// Template names are always reported in this form.
    ///
    /// # Examples
    /// ```
    /// use scaffolder::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("python").join("class");
    /// assert_eq!(path.to_slash_name().unwrap(), "python/class");
    /// ```
    fn to_slash_name(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_slash_name(&self) -> Result<String> {
        let parts = self
            .components()
            .map(|c| Path::new(c.as_os_str()).to_str_checked())
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join("/"))
    }
}
