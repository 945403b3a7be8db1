//! Ordered lists of requirements.

use anyhow::{Context, Result};
use std::path::Path;

use super::Requirement;
use crate::runtime::Runtime;

/// The default install list as `(name, pinned version)` pairs.
///
/// `Flash` is kept as written even though it is most likely meant to be
/// the `Flask` web framework. `sklearn` is the deprecated alias of
/// `scikit-learn` on PyPI and is also kept as written.
pub const BUILTIN_REQUIREMENTS: &[(&str, Option<&str>)] = &[
    ("jupyterlab", None),
    ("jupyter", None),
    ("voila", None),
    ("numpy", None),
    ("pandas", None),
    ("wordcloud", None),
    ("matplotlib", None),
    ("sklearn", None),
    ("nltk", None),
    ("seaborn", None),
    ("pydantic", Some("2.2.0")),
    ("pydantic_core", Some("2.6.0")),
    ("fastapi", None),
    ("Flash", None),
    ("tensorflow", None),
    ("pandoc", None),
    ("nest_asyncio", None),
    ("Pillow", None),
    ("uvicorn", None),
    ("typing_extensions", Some("4.7.1")),
    ("ipython", None),
];

/// An ordered list of requirements. Order is install order; duplicates are
/// installed once per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub requirements: Vec<Requirement>,
}

impl Manifest {
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self { requirements }
    }

    pub fn builtin() -> Self {
        let requirements = BUILTIN_REQUIREMENTS
            .iter()
            .map(|(name, version)| match version {
                Some(v) => Requirement::pinned(*name, *v),
                None => Requirement::latest(*name),
            })
            .collect();
        Self { requirements }
    }

    /// Parse a requirements file: one requirement per line, `#` starts a
    /// comment, blank lines are skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let mut requirements = Vec::new();
        let content = content.trim_start_matches('\u{feff}');
        for (index, line) in content.lines().enumerate() {
            let line = match line.split_once('#') {
                Some((before, _comment)) => before,
                None => line,
            }
            .trim();
            if line.is_empty() {
                continue;
            }
            let requirement = line
                .parse::<Requirement>()
                .with_context(|| format!("Invalid requirement on line {}", index + 1))?;
            requirements.push(requirement);
        }
        Ok(Self { requirements })
    }

    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse requirements file: {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }
}
