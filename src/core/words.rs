//! # Word Data Loading
//!
//! Loads and validates the words document at startup. A source is either a
//! filesystem path or an `http(s)://` URL (the data set historically lived
//! next to a static web page, so remote sources are still supported).
//!
//! Validation is staged so every failure class gets its own diagnostic:
//! fetch → non-empty body → JSON → `words` array present → array non-empty
//! → entries well-formed. On any failure the caller substitutes a
//! placeholder entry and keeps the UI interactive; partial data is never
//! shown.

use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};

/// One vocabulary record. Data files use the legacy `korean`/`chinese`
/// key names; in code the fields are the neutral term/translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "korean")]
    pub term: String,
    #[serde(rename = "chinese")]
    pub translation: String,
    pub category: String,
}

impl WordEntry {
    pub fn new(term: &str, translation: &str, category: &str) -> Self {
        Self {
            term: term.to_string(),
            translation: translation.to_string(),
            category: category.to_string(),
        }
    }
}

/// Sentinel shown when the data set could not be loaded at all.
pub fn load_placeholder() -> WordEntry {
    WordEntry::new("初始化错误", "未加载词汇数据", "error")
}

/// Sentinel shown when a filter matches nothing.
pub fn empty_filter_placeholder() -> WordEntry {
    WordEntry::new("无匹配数据", "请尝试其他分类", "error")
}

#[derive(Debug)]
pub enum LoadError {
    /// The fetch or file read itself failed (transport error, bad HTTP
    /// status, missing file).
    Fetch { source: String, detail: String },
    EmptyBody { source: String },
    /// The body is not valid JSON, or an entry has the wrong shape.
    Parse {
        source: String,
        line: usize,
        column: usize,
        bytes: usize,
        detail: String,
    },
    SchemaMissingField { source: String },
    SchemaEmptyList { source: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch { source, detail } => {
                write!(f, "failed to fetch {source}: {detail}")
            }
            LoadError::EmptyBody { source } => {
                write!(f, "words document {source} is empty")
            }
            LoadError::Parse {
                source,
                line,
                column,
                bytes,
                detail,
            } => write!(
                f,
                "invalid JSON in {source} at line {line}, column {column} ({bytes} bytes read): {detail}"
            ),
            LoadError::SchemaMissingField { source } => {
                write!(f, "{source}: root object has no `words` array")
            }
            LoadError::SchemaEmptyList { source } => {
                write!(f, "{source}: `words` array contains no entries")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load and validate the words document from a path or URL.
///
/// This is the only async entry point in the crate; the TUI starts once
/// it resolves, so nothing runs concurrently with it.
pub async fn load_words(source: &str) -> Result<Vec<WordEntry>, LoadError> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_http(source).await?
    } else {
        fs::read_to_string(source).map_err(|e| LoadError::Fetch {
            source: source.to_string(),
            detail: e.to_string(),
        })?
    };
    parse_words(source, &body)
}

async fn fetch_http(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url).await.map_err(|e| LoadError::Fetch {
        source: url.to_string(),
        detail: e.to_string(),
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Fetch {
            source: url.to_string(),
            detail: format!("HTTP status {status}"),
        });
    }
    response.text().await.map_err(|e| LoadError::Fetch {
        source: url.to_string(),
        detail: e.to_string(),
    })
}

/// Validate a raw document body. Staged so each failure class maps to a
/// distinct `LoadError` variant.
pub fn parse_words(source: &str, body: &str) -> Result<Vec<WordEntry>, LoadError> {
    if body.trim().is_empty() {
        return Err(LoadError::EmptyBody {
            source: source.to_string(),
        });
    }

    let bytes = body.len();
    let parse_err = |e: &serde_json::Error| LoadError::Parse {
        source: source.to_string(),
        line: e.line(),
        column: e.column(),
        bytes,
        detail: e.to_string(),
    };

    let document: serde_json::Value =
        serde_json::from_str(body).map_err(|e| parse_err(&e))?;

    let words = document
        .get("words")
        .and_then(|w| w.as_array())
        .ok_or_else(|| LoadError::SchemaMissingField {
            source: source.to_string(),
        })?;

    if words.is_empty() {
        return Err(LoadError::SchemaEmptyList {
            source: source.to_string(),
        });
    }

    serde_json::from_value(serde_json::Value::Array(words.clone())).map_err(|e| parse_err(&e))
}
