//! Shared types: the config tree, supported file formats, and config actions.

use std::fmt;
use std::path::Path;

/// A parsed configuration document.
///
/// Keys keep their insertion order. Values are strings, nested mappings, or
/// opaque leaves (numbers, booleans, arrays, null).
pub type ConfigTree = serde_json::Map<String, serde_json::Value>;

/// File formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Ini,
    Toml,
}

/// Extension registry. Extensions are matched exactly, including case.
const EXTENSIONS: &[(&str, Format)] = &[
    ("json", Format::Json),
    ("yml", Format::Yaml),
    ("yaml", Format::Yaml),
    ("ini", Format::Ini),
    ("cfg", Format::Ini),
    ("toml", Format::Toml),
];

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::Yaml, Format::Ini, Format::Toml];

    /// Look up the format for a bare extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Format> {
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, format)| *format)
    }

    /// Infer the format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// All extensions registered for this format.
    pub fn extensions(self) -> impl Iterator<Item = &'static str> {
        EXTENSIONS
            .iter()
            .filter(move |(_, format)| *format == self)
            .map(|(ext, _)| *ext)
    }

    /// Every registered extension, dotted and comma separated
    /// (`.json, .yml, ...`), for error messages.
    pub fn supported_extensions() -> String {
        Format::ALL
            .iter()
            .flat_map(|format| format.extensions())
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Ini => "ini",
            Format::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// A read-only config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Every leaf as a dotted key-value pair.
    List,
    /// A single value by dotted key.
    Get { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_extensions() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.ini")), Some(Format::Ini));
        assert_eq!(Format::from_path(Path::new("a.cfg")), Some(Format::Ini));
        assert_eq!(Format::from_path(Path::new("dir/a.toml")), Some(Format::Toml));
    }

    #[test]
    fn unknown_extension_is_none() {
        assert_eq!(Format::from_path(Path::new("demo.txt")), None);
        assert_eq!(Format::from_path(Path::new("Makefile")), None);
        assert_eq!(Format::from_path(Path::new(".yaml")), None);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(Format::from_path(Path::new("a.JSON")), None);
    }

    #[test]
    fn extensions_per_format() {
        let yaml: Vec<_> = Format::Yaml.extensions().collect();
        assert_eq!(yaml, vec!["yml", "yaml"]);
        let ini: Vec<_> = Format::Ini.extensions().collect();
        assert_eq!(ini, vec!["ini", "cfg"]);
    }

    #[test]
    fn supported_extensions_cover_registry() {
        let listed = Format::supported_extensions();
        assert_eq!(listed, ".json, .yml, .yaml, .ini, .cfg, .toml");
        for (ext, _) in EXTENSIONS {
            assert!(listed.contains(&format!(".{ext}")));
        }
    }
}
