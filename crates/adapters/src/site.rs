use std::path::Path;

use platebook_application::ApplicationError;
use url::Url;

/// Root of a published plate site: a local directory or an http(s) base URL.
/// Always stored with a trailing slash so relative joins stay inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLocation {
    base: Url,
}

impl SiteLocation {
    pub fn parse(input: &str) -> Result<Self, ApplicationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "site location must not be empty".to_string(),
            ));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let mut base = Url::parse(trimmed)
                .map_err(|error| ApplicationError::InvalidInput(format!("{trimmed}: {error}")))?;
            if !base.path().ends_with('/') {
                let path = format!("{}/", base.path());
                base.set_path(&path);
            }
            return Ok(Self { base });
        }

        Self::from_directory(Path::new(trimmed))
    }

    pub fn from_directory(path: &Path) -> Result<Self, ApplicationError> {
        let canonical = path.canonicalize().map_err(|error| {
            ApplicationError::InvalidInput(format!("site directory {:?}: {error}", path))
        })?;
        if !canonical.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "site location is not a directory: {:?}",
                canonical
            )));
        }
        let base = Url::from_directory_path(&canonical).map_err(|()| {
            ApplicationError::InvalidInput(format!("cannot express {:?} as a URL", canonical))
        })?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn join(&self, relative: &str) -> Result<Url, ApplicationError> {
        self.base
            .join(relative)
            .map_err(|error| ApplicationError::InvalidInput(format!("{relative}: {error}")))
    }

    /// Absolute URI for a page image; already-absolute URIs pass through.
    pub fn resolve_image_uri(&self, image: &str) -> String {
        self.join(image)
            .map(String::from)
            .unwrap_or_else(|_| image.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn http_base_gains_trailing_slash() {
        let site = SiteLocation::parse("https://plates.example/deck").expect("url should parse");
        assert_eq!(site.base().as_str(), "https://plates.example/deck/");
        assert_eq!(
            site.join("data/pages.json").expect("join").as_str(),
            "https://plates.example/deck/data/pages.json"
        );
    }

    #[test]
    fn directory_site_resolves_relative_images() {
        let dir = TempDir::new().expect("tempdir");
        let site = SiteLocation::parse(&dir.path().to_string_lossy()).expect("dir should parse");

        assert_eq!(site.base().scheme(), "file");
        let uri = site.resolve_image_uri("pages/page-01.jpg");
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("/pages/page-01.jpg"));
    }

    #[test]
    fn absolute_image_uris_pass_through() {
        let site = SiteLocation::parse("http://localhost:8000/").expect("url should parse");
        assert_eq!(
            site.resolve_image_uri("https://cdn.example/p1.jpg"),
            "https://cdn.example/p1.jpg"
        );
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("nope");
        assert!(matches!(
            SiteLocation::parse(&missing.to_string_lossy()),
            Err(ApplicationError::InvalidInput(_))
        ));
        assert!(matches!(
            SiteLocation::parse("  "),
            Err(ApplicationError::InvalidInput(_))
        ));
    }
}
