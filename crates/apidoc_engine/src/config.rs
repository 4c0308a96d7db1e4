use apidoc_base::error::ErrorKind;
use apidoc_base::{ApidocError, ApidocResult, FilePath, Pal};
use tracing::debug;

use crate::model::ApiSpec;

/// Loads an API description from a TOML or JSON file through the PAL.
///
/// The format is chosen by extension: `.json` parses as JSON, everything
/// else as TOML. Omitted `api_info` / `auth_info` sections fall back to the
/// placeholder defaults and omitted lists are empty. Endpoint ids in the
/// file are ignored; the editor reassigns them on load.
pub fn load_api_spec(pal: &dyn Pal, path: &FilePath) -> ApidocResult<ApiSpec> {
    let contents = pal.read_file_to_string(path)?;
    debug!(path = %path, bytes = contents.len(), "loaded API description file");
    let spec = match path.extension() {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|e| config_error(path, e.to_string()))?,
        _ => toml::from_str(&contents).map_err(|e| config_error(path, e.to_string()))?,
    };
    Ok(spec)
}

fn config_error(path: &FilePath, message: String) -> Box<ApidocError> {
    Box::new(ApidocError::new(ErrorKind::ConfigError {
        path: path.as_path().to_path_buf(),
        message,
    }))
}
