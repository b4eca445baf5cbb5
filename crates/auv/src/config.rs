use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AuvError;
use crate::header::HeaderFormat;

/// Settings for rendering the CSR map as source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Include-guard macro for the C rendering.
    pub guard: String,
    /// Replaces the `CSR_` prefix of every emitted name.
    pub prefix: String,
    pub format: HeaderFormat,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            guard: "_AUV_H".to_string(),
            prefix: "CSR_".to_string(),
            format: HeaderFormat::C,
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl HeaderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AuvError> {
        let path = path.as_ref();
        debug!("loading header config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, AuvError> {
        let config: HeaderConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The guard must be a C identifier; the prefix may be empty as long as
    /// every resulting register name still is one.
    pub fn validate(&self) -> Result<(), AuvError> {
        if !is_identifier(&self.guard) {
            return Err(AuvError::InvalidConfig(format!(
                "guard '{}' is not a valid identifier",
                self.guard
            )));
        }
        if !self.prefix.is_empty() && !is_identifier(&self.prefix) {
            return Err(AuvError::InvalidConfig(format!(
                "prefix '{}' is not a valid identifier",
                self.prefix
            )));
        }
        Ok(())
    }
}
