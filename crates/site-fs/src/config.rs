//! TOML configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Load and parse a TOML file.
pub fn load_toml<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    let content = io::read_text(path)?;
    toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_native(),
        message: e.to_string(),
    })
}

/// Load a TOML file, falling back to `T::default()` when it does not exist.
///
/// A file that exists but fails to parse is still an error.
pub fn load_toml_or_default<T: DeserializeOwned + Default>(path: &NormalizedPath) -> Result<T> {
    if !path.is_file() {
        tracing::debug!(path = %path, "No config file, using defaults");
        return Ok(T::default());
    }
    load_toml(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn missing_file_yields_default() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("absent.toml"));
        let loaded: Sample = load_toml_or_default(&path).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.toml");
        std::fs::write(&file, "name = [unterminated").unwrap();

        let result: Result<Sample> = load_toml_or_default(&NormalizedPath::new(&file));
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn parses_present_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("ok.toml");
        std::fs::write(&file, "name = \"blog\"\n").unwrap();

        let loaded: Sample = load_toml(&NormalizedPath::new(&file)).unwrap();
        assert_eq!(loaded.name, "blog");
    }
}
