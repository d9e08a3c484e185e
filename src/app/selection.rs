//! Which entry, if any, is open in the detail overlay.
//!
//! The selection stores only the entry id. The entry itself is resolved
//! through [`Catalog::get`](crate::catalog::Catalog::get) at render time, so
//! the selection never holds a stale copy.

/// Detail overlay selection.
///
/// At most one entry is open at a time; opening another replaces it.
///
/// # Example
///
/// ```rust
/// use toolshelf::app::Selection;
///
/// let mut selection = Selection::default();
/// selection.select("chatgpt");
/// selection.select("claude");
/// assert_eq!(selection.id(), Some("claude"));
///
/// selection.clear();
/// assert!(!selection.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Open(String),
}

impl Selection {
    /// Opens `id`, replacing whatever was open.
    pub fn select(&mut self, id: impl Into<String>) {
        *self = Self::Open(id.into());
    }

    pub fn clear(&mut self) {
        *self = Self::None;
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Open(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert_eq!(selection.id(), None);
    }

    #[test]
    fn second_select_replaces_first() {
        let mut selection = Selection::default();
        selection.select("a");
        selection.select("b");
        assert_eq!(selection, Selection::Open("b".to_string()));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut selection = Selection::Open("a".to_string());
        selection.clear();
        selection.clear();
        assert_eq!(selection, Selection::None);
    }
}
