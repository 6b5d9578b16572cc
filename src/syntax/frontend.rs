//! Loading source units from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::{Position, SourceUnit, TokenizeError};

/// Errors produced while turning a file into a [`SourceUnit`].
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{position}: invalid syntax")]
    Syntax { position: Position },
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("invalid unit file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no frontend for files with extension {0:?}")]
    Unsupported(String),
    #[error("tree-sitter error: {0}")]
    Language(String),
}

impl FrontendError {
    /// Source position the error points at, when it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            FrontendError::Syntax { position } => Some(*position),
            FrontendError::Tokenize(e) => Some(e.position()),
            _ => None,
        }
    }
}

/// Build a unit from Python source text.
#[cfg(feature = "tree-sitter")]
pub fn parse_source(path: &str, source: &str) -> Result<SourceUnit, FrontendError> {
    let tree = super::parse_python(source)?;
    let tokens = super::tokenize(source)?;
    Ok(SourceUnit::new(path, tree, tokens))
}

/// Load a unit from a file.
///
/// `.py` files go through the bundled frontend; `.json` files are units
/// serialized by an external parser.
pub fn load_unit(path: &Path) -> Result<SourceUnit, FrontendError> {
    let display = path.to_string_lossy().to_string();
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "json" => {
            let content = fs::read_to_string(path)?;
            let mut unit: SourceUnit = serde_json::from_str(&content)?;
            if unit.path.is_empty() {
                unit.path = display;
            }
            Ok(unit)
        }
        #[cfg(feature = "tree-sitter")]
        "py" | "pyi" => {
            let content = fs::read_to_string(path)?;
            parse_source(&display, &content)
        }
        #[cfg(not(feature = "tree-sitter"))]
        "py" | "pyi" => Err(FrontendError::Unsupported(ext.to_string())),
        _ => Err(FrontendError::Unsupported(ext.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_unit_fills_missing_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("unit.json");
        std::fs::write(
            &path,
            r#"{"path": "", "tree": {"kind": "module", "position": {"line": 1, "column": 0}}, "tokens": []}"#,
        )
        .unwrap();

        let unit = load_unit(&path).unwrap();
        assert!(unit.path.ends_with("unit.json"));
        assert!(unit.tokens.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.go");
        std::fs::write(&path, "package main").unwrap();

        let err = load_unit(&path).unwrap_err();
        assert!(matches!(err, FrontendError::Unsupported(ref e) if e == "go"));
    }

    #[test]
    #[cfg(feature = "tree-sitter")]
    fn test_load_python_unit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mod.py");
        std::fs::write(&path, "def f():\n    return 1\n").unwrap();

        let unit = load_unit(&path).unwrap();
        assert_eq!(unit.tree.children.len(), 1);
        assert!(unit.tokens.iter().any(|t| t.is_keyword("def")));
    }

    #[test]
    #[cfg(feature = "tree-sitter")]
    fn test_tokenize_error_carries_position() {
        let err = parse_source("bad.py", "x = 'open\n").unwrap_err();
        // tree-sitter rejects the unterminated string first
        assert!(err.position().is_some());
    }
}
