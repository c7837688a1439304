//! Core types for lexi-core.
//!
//! This module defines the records produced by the parser and consumed by the
//! search layer and every renderer: the lexeme [`Entry`] and its [`Sense`]s.

use serde::{Deserialize, Serialize};

/// One lexeme record, built from a `\lx` line and the tag lines that follow it.
///
/// The parser always sets `lexeme`. It is still optional here because entries
/// can come from elsewhere (JSON fixtures, other tools); the search layer
/// treats an entry without a lexeme as invalid and never returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Headword, from `\lx`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexeme: Option<String>,
    /// Variant forms, from `\va`, in order of appearance.
    #[serde(default)]
    pub variants: Vec<String>,
    /// Primary dialect label, from `\pdl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_dialect_label: Option<String>,
    /// Primary dialect variant, from `\pdv`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_dialect_variant: Option<String>,
    /// Senses, in order of appearance.
    #[serde(default)]
    pub senses: Vec<Sense>,
}

impl Entry {
    /// A fresh entry for the given headword with no variants or senses.
    pub fn new(lexeme: impl Into<String>) -> Self {
        Self {
            lexeme: Some(lexeme.into()),
            ..Self::default()
        }
    }

    /// The headword, or `""` when missing.
    pub fn lexeme_str(&self) -> &str {
        self.lexeme.as_deref().unwrap_or("")
    }

    /// The gloss of the first sense that has one.
    pub fn first_gloss(&self) -> Option<&str> {
        self.senses.iter().find_map(|s| s.gloss.as_deref())
    }
}

/// One meaning of a lexeme, opened by `\sn`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub sense_number: String,
    /// `\ps`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// `\ge`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    /// `\so`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// `\sd`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_domain: Option<String>,
    /// `\de`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Sense {
    pub fn new(sense_number: impl Into<String>) -> Self {
        Self {
            sense_number: sense_number.into(),
            ..Self::default()
        }
    }
}
