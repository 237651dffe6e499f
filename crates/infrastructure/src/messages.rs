//! TOML-backed message catalog
//!
//! Bundles map dotted keys to templates. Nested tables and quoted dotted
//! keys are equivalent: `[error.geo] client = ".."` and
//! `[error] "geo.client" = ".."` both define `error.geo.client`.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use application::ports::{MessagePort, fallback_message};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::MessagesConfig;

const BUILTIN_MESSAGES: &str = include_str!("messages.toml");

/// Prefix every lookup key is placed under
const KEY_PREFIX: &str = "error";

/// Errors loading a message bundle
#[derive(Debug, Error)]
pub enum MessageCatalogError {
    /// Bundle file could not be read
    #[error("Failed to read message bundle {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bundle is not valid TOML
    #[error("Invalid message bundle: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Message catalog loaded from a TOML bundle
#[derive(Clone)]
pub struct TomlMessageCatalog {
    messages: HashMap<String, String>,
}

impl fmt::Debug for TomlMessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomlMessageCatalog")
            .field("messages", &self.messages.len())
            .finish()
    }
}

impl TomlMessageCatalog {
    /// The bundle compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_MESSAGES).unwrap_or_else(|e| {
            warn!(error = %e, "Built-in message bundle is invalid, using fallback messages");
            Self {
                messages: HashMap::new(),
            }
        })
    }

    /// Parse a bundle from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, MessageCatalogError> {
        let table: toml::Table = toml::from_str(source)?;
        let mut messages = HashMap::new();
        flatten("", &table, &mut messages);
        Ok(Self { messages })
    }

    /// Read a bundle from a file
    pub fn from_file(path: &Path) -> Result<Self, MessageCatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| MessageCatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), messages = catalog.len(), "Loaded message bundle");
        Ok(catalog)
    }

    /// The configured bundle, or the built-in one when none is configured
    pub fn from_config(config: &MessagesConfig) -> Result<Self, MessageCatalogError> {
        config
            .path
            .as_deref()
            .map_or_else(|| Ok(Self::builtin()), Self::from_file)
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn template(&self, key: &str) -> Option<&str> {
        self.messages
            .get(&format!("{KEY_PREFIX}.{key}"))
            .map(String::as_str)
    }
}

impl MessagePort for TomlMessageCatalog {
    fn format(&self, key: &str, args: &[String]) -> String {
        self.template(key).map_or_else(
            || fallback_message(key),
            |template| substitute(template, args),
        )
    }
}

/// Collect string leaves under dotted keys; non-string values are ignored
fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(text) => {
                out.insert(full_key, text.clone());
            },
            toml::Value::Table(nested) => flatten(&full_key, nested, out),
            _ => {},
        }
    }
}

/// Replace `{n}` with `args[n]`
///
/// Placeholders without a matching argument are kept as written. Argument
/// text is never rescanned for placeholders.
fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let arg = (digits > 0 && after[digits..].starts_with('}'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|index| args.get(index));

        if let Some(arg) = arg {
            out.push_str(arg);
            rest = &after[digits + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}
