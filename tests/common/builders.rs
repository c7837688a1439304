//! Test builders — ergonomic constructors for `Entry` and `Sense`, plus an
//! SFM writer so expected entries can be turned back into parser input.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use lexi_core::{Entry, Sense};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Entry`] test fixtures.
///
/// ```rust,ignore
/// let entry = EntryBuilder::new("kuri")
///     .variant("kurii")
///     .dialect("Coastal", "kuli")
///     .sense(SenseBuilder::new("1").ps("n").gloss("dog"))
///     .build();
/// ```
pub struct EntryBuilder {
    entry: Entry,
}

impl EntryBuilder {
    pub fn new(lexeme: impl Into<String>) -> Self {
        Self { entry: Entry::new(lexeme) }
    }

    /// An entry whose lexeme was never set.
    pub fn headless() -> Self {
        Self { entry: Entry::default() }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.entry.variants.push(variant.into());
        self
    }

    pub fn dialect(mut self, label: impl Into<String>, variant: impl Into<String>) -> Self {
        self.entry.primary_dialect_label = Some(label.into());
        self.entry.primary_dialect_variant = Some(variant.into());
        self
    }

    pub fn sense(mut self, sense: SenseBuilder) -> Self {
        self.entry.senses.push(sense.build());
        self
    }

    pub fn build(self) -> Entry {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// SenseBuilder
// ---------------------------------------------------------------------------

pub struct SenseBuilder {
    sense: Sense,
}

impl SenseBuilder {
    pub fn new(number: impl Into<String>) -> Self {
        Self { sense: Sense::new(number) }
    }

    pub fn ps(mut self, ps: impl Into<String>) -> Self {
        self.sense.part_of_speech = Some(ps.into());
        self
    }

    pub fn gloss(mut self, gloss: impl Into<String>) -> Self {
        self.sense.gloss = Some(gloss.into());
        self
    }

    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.sense.definition = Some(definition.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.sense.semantic_domain = Some(domain.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.sense.source = Some(source.into());
        self
    }

    pub fn build(self) -> Sense {
        self.sense
    }
}

// ---------------------------------------------------------------------------
// SFM writer
// ---------------------------------------------------------------------------

/// Render entries as SFM text, one tag per line, in the canonical field
/// order. Entries without a lexeme cannot be expressed and are skipped.
pub fn to_sfm(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let Some(lexeme) = &entry.lexeme else { continue };
        push(&mut out, "\\lx", lexeme);
        for variant in &entry.variants {
            push(&mut out, "\\va", variant);
        }
        if let Some(label) = &entry.primary_dialect_label {
            push(&mut out, "\\pdl", label);
        }
        if let Some(variant) = &entry.primary_dialect_variant {
            push(&mut out, "\\pdv", variant);
        }
        for sense in &entry.senses {
            push(&mut out, "\\sn", &sense.sense_number);
            let fields = [
                ("\\ps", &sense.part_of_speech),
                ("\\ge", &sense.gloss),
                ("\\so", &sense.source),
                ("\\sd", &sense.semantic_domain),
                ("\\de", &sense.definition),
            ];
            for (tag, value) in fields {
                if let Some(value) = value {
                    push(&mut out, tag, value);
                }
            }
        }
        out.push('\n');
    }
    out
}

fn push(out: &mut String, tag: &str, value: &str) {
    out.push_str(tag);
    out.push(' ');
    out.push_str(value);
    out.push('\n');
}
