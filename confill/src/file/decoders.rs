//! Built-in decoders for common file formats.

use figment::value::Value as FigmentValue;

#[cfg(any(feature = "yaml", feature = "toml", feature = "serde_json"))]
use super::FileDecoder;

/// Reads `contents` as UTF-8, as every text format requires.
#[cfg(any(feature = "yaml", feature = "toml"))]
fn utf8(contents: &[u8]) -> Result<&str, figment::Error> {
    std::str::from_utf8(contents)
        .map_err(|e| figment::Error::from(format!("file is not valid UTF-8: {e}")))
}

/// YAML decoder backed by `serde-saphyr` with strict boolean parsing, so
/// `yes` and `on` stay strings.
#[cfg(feature = "yaml")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Yaml;

#[cfg(feature = "yaml")]
impl FileDecoder for Yaml {
    fn decode(&self, contents: &[u8]) -> Result<FigmentValue, figment::Error> {
        let text = utf8(contents)?;
        if is_blank_document(text) {
            return Ok(empty_map());
        }
        let tree: FigmentValue = serde_saphyr::from_str_with_options(
            text,
            serde_saphyr::Options {
                strict_booleans: true,
                ..serde_saphyr::Options::default()
            },
        )
        .map_err(|e| figment::Error::from(format!("invalid YAML: {e}")))?;
        Ok(match tree {
            FigmentValue::Empty(..) => empty_map(),
            FigmentValue::String(_, ref s) if matches!(s.as_str(), "~" | "null" | "Null" | "NULL") => {
                empty_map()
            }
            other => other,
        })
    }
}

/// A YAML text holding nothing but blank lines, comments, and document
/// markers.
#[cfg(feature = "yaml")]
fn is_blank_document(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        let rest = line
            .strip_prefix("---")
            .or_else(|| line.strip_prefix("..."))
            .unwrap_or(line)
            .trim_start();
        rest.is_empty() || rest.starts_with('#')
    })
}

/// A null document decodes to a map with no keys.
#[cfg(feature = "yaml")]
fn empty_map() -> FigmentValue {
    FigmentValue::Dict(figment::value::Tag::Default, figment::value::Dict::new())
}

/// TOML decoder.
#[cfg(feature = "toml")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Toml;

#[cfg(feature = "toml")]
impl FileDecoder for Toml {
    fn decode(&self, contents: &[u8]) -> Result<FigmentValue, figment::Error> {
        toml::from_str(utf8(contents)?).map_err(|e| figment::Error::from(format!("invalid TOML: {e}")))
    }
}

/// JSON decoder.
#[cfg(feature = "serde_json")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Json;

#[cfg(feature = "serde_json")]
impl FileDecoder for Json {
    fn decode(&self, contents: &[u8]) -> Result<FigmentValue, figment::Error> {
        serde_json::from_slice(contents)
            .map_err(|e| figment::Error::from(format!("invalid JSON: {e}")))
    }
}
