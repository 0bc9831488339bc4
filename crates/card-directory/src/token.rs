/// One raw input token, optionally pre-annotated as `name:key`.
///
/// Splitting on `:` yields an embedded name only when there are exactly
/// two non-empty segments; any other shape (no colon, two colons, empty
/// name segment) keeps the whole original text as the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyToken {
    original: String,
    name: Option<String>,
    key: String,
}

impl PublicKeyToken {
    /// Parse a raw input line. Returns `None` for blank input, so the
    /// `key` of a constructed token is never empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let original = raw.trim();
        if original.is_empty() {
            return None;
        }

        let segments: Vec<&str> = original.split(':').collect();
        let (name, key) = match segments.as_slice() {
            [name, key] if !name.is_empty() && !key.is_empty() => {
                (Some(name.to_string()), key.to_string())
            }
            _ => (None, original.to_string()),
        };

        Some(Self {
            original: original.to_string(),
            name,
            key,
        })
    }

    pub fn original_text(&self) -> &str {
        &self.original
    }

    pub fn has_embedded_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn embedded_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
