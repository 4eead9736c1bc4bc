use std::fs;

use platebook_application::ApplicationError;
use tracing::debug;
use url::Url;

/// Reads a text resource from a `file://` or `http(s)://` URL.
pub fn read_text(location: &Url) -> Result<String, ApplicationError> {
    debug!(%location, "reading resource");
    match location.scheme() {
        "file" => {
            let path = location.to_file_path().map_err(|()| {
                ApplicationError::InvalidInput(format!("not a local path: {location}"))
            })?;
            fs::read_to_string(&path)
                .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))
        }
        "http" | "https" => ureq::get(location.as_str())
            .call()
            .map_err(|error| ApplicationError::Network(format!("{location}: {error}")))?
            .body_mut()
            .read_to_string()
            .map_err(|error| ApplicationError::Network(format!("{location}: {error}"))),
        other => Err(ApplicationError::InvalidInput(format!(
            "unsupported scheme {other} for {location}"
        ))),
    }
}
