//! Ordered key/value listings

/// Ordered list of label/value rows, rendered inline in panel headers or as
/// a block in panel bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueList {
    pairs: Vec<(String, String)>,
    inline: bool,
}

impl KeyValueList {
    /// Block listing
    #[must_use]
    pub const fn block(pairs: Vec<(String, String)>) -> Self {
        Self {
            pairs,
            inline: false,
        }
    }

    /// Single-line listing
    #[must_use]
    pub const fn inline(pairs: Vec<(String, String)>) -> Self {
        Self {
            pairs,
            inline: true,
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.inline
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
