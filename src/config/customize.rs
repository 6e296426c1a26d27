use crate::utils::error::{DictError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

type TextTransform = Box<dyn Fn(&str) -> String>;

/// Pluggable hooks applied while reading entries: a key transform, a
/// definition transform and a character substitution mapping. Every field
/// defaults to identity behavior, so an unconfigured `Customization` leaves
/// input untouched.
pub struct Customization {
    getkey: TextTransform,
    getdef: TextTransform,
    mapping: HashMap<char, char>,
}

impl std::fmt::Debug for Customization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Customization")
            .field("mapping", &self.mapping)
            .finish_non_exhaustive()
    }
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            getkey: Box::new(|text| text.to_string()),
            getdef: Box::new(|text| text.to_string()),
            mapping: HashMap::new(),
        }
    }
}

impl Customization {
    /// Resolve the optional `--module` argument. `None` means defaults.
    pub fn load(module: Option<&str>) -> Result<Self> {
        match module {
            None => Ok(Self::default()),
            Some(path) => Self::from_file(path),
        }
    }

    /// Load a customization module from a TOML file. Missing sections fall
    /// back to defaults; an unreadable or malformed file is fatal.
    pub fn from_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| DictError::ModuleError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let spec: ModuleSpec = toml::from_str(&text).map_err(|e| DictError::ModuleError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let mut custom = Self::default();

        if let Some(pairs) = spec.mapping {
            tracing::info!("Loading mapping from {}", path);
            let mut mapping = HashMap::new();
            for (from, to) in &pairs {
                mapping.insert(
                    single_char("mapping key", from, path)?,
                    single_char("mapping value", to, path)?,
                );
            }
            custom.mapping = mapping;
        }
        if let Some(key) = &spec.key {
            tracing::info!("Loading getkey from {}", path);
            custom.getkey = compile(key);
        }
        if let Some(def) = &spec.def {
            tracing::info!("Loading getdef from {}", path);
            custom.getdef = compile(def);
        }

        Ok(custom)
    }

    pub fn with_mapping(mut self, mapping: HashMap<char, char>) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_getkey(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.getkey = Box::new(f);
        self
    }

    pub fn with_getdef(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.getdef = Box::new(f);
        self
    }

    pub fn getkey(&self, key: &str) -> String {
        (self.getkey)(key)
    }

    pub fn getdef(&self, definition: &str) -> String {
        (self.getdef)(definition)
    }

    /// Apply the character mapping to every character of `text`. Unmapped
    /// characters pass through unchanged.
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .map(|c| *self.mapping.get(&c).unwrap_or(&c))
            .collect()
    }
}

/// On-disk shape of a customization module.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModuleSpec {
    mapping: Option<HashMap<String, String>>,
    key: Option<TransformSpec>,
    def: Option<TransformSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransformSpec {
    lowercase: Option<bool>,
    replace: Option<Vec<(String, String)>>,
}

/// Turn a declarative transform into a function: ordered replacements first,
/// then optional lowercasing.
fn compile(spec: &TransformSpec) -> TextTransform {
    let pairs = spec.replace.clone().unwrap_or_default();
    let lowercase = spec.lowercase.unwrap_or(false);
    Box::new(move |text| {
        let mut out = text.to_string();
        for (from, to) in &pairs {
            out = out.replace(from.as_str(), to.as_str());
        }
        if lowercase {
            out = out.to_lowercase();
        }
        out
    })
}

fn single_char(field: &str, value: &str, path: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DictError::ModuleError {
            path: path.to_string(),
            reason: format!("{} '{}' must be exactly one character", field, value),
        }),
    }
}
