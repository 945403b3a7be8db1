//! Requirement parsing and validation.

use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

/// Separator between a package name and an exact version pin.
pub const PIN_SEPARATOR: &str = "==";

/// A package to install, optionally pinned to an exact version.
/// Format: "name" or "name==version"
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Requirement {
    pub name: String,
    pub version: Option<String>,
}

impl Requirement {
    /// Requirement for the latest available version of `name`.
    pub fn latest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Requirement pinning `name` to exactly `version`.
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// The argument handed to the package manager's install subcommand.
    pub fn target(&self) -> String {
        match &self.version {
            Some(v) => format!("{}{}{}", self.name, PIN_SEPARATOR, v),
            None => self.name.clone(),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.version.is_some()
    }

    /// Check the name and version against what a package index accepts.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if let Some(version) = &self.version {
            validate_version(&self.name, version)?;
        }
        Ok(())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target())
    }
}

impl FromStr for Requirement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let requirement = match s.split_once(PIN_SEPARATOR) {
            Some((name, version)) => Requirement::pinned(name.trim(), version.trim()),
            None => Requirement::latest(s),
        };
        requirement.validate()?;
        Ok(requirement)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!("Invalid requirement: package name cannot be empty"));
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    let starts_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
    let ends_ok = name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());

    if !(valid_chars && starts_ok && ends_ok) {
        return Err(anyhow!(
            "Invalid package name '{}'. Expected letters, digits, '-', '_' or '.', \
             starting and ending with a letter or digit. Use 'name==version' to pin a version.",
            name
        ));
    }
    Ok(())
}

fn validate_version(name: &str, version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(anyhow!(
            "Invalid requirement '{}': version after == cannot be empty. Expected 'name==version'.",
            name
        ));
    }
    if version.contains('=') {
        return Err(anyhow!(
            "Invalid requirement '{}': version '{}' cannot contain '='. Expected 'name==version'.",
            name,
            version
        ));
    }
    if version.chars().any(char::is_whitespace) {
        return Err(anyhow!(
            "Invalid requirement '{}': version '{}' cannot contain whitespace",
            name,
            version
        ));
    }
    Ok(())
}
