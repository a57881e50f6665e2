//! Case-insensitive source identifiers.
//!
//! NeoAda identifiers fold case for every lookup (declarations, calls, type names) but
//! diagnostics and `Debug` output should still show what the user actually wrote. `Ident`
//! carries both forms so lookups can hash/compare on the folded key while error messages stay
//! readable.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A name as written in source, paired with its ASCII-lowercased form used for all lookups.
#[derive(Debug, Clone, Eq)]
pub struct Ident {
    display: String,
    lowered: String,
}

impl Ident {
    /// Builds an `Ident` from source text, folding a lowercase copy for lookups.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let lowered = display.to_ascii_lowercase();
        Self { display, lowered }
    }

    /// The form exactly as written in source; used in diagnostics.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The ASCII-lowercased form used as a map key everywhere else in the engine.
    #[must_use]
    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.lowered == other.lowered
    }
}

impl Hash for Ident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lowered.hash(state);
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Lets `IndexMap<Ident, _>`/`HashMap<Ident, _>` be looked up with a plain `&str` key
/// (already expected to be lowercased by the caller) without allocating an `Ident`.
impl Borrow<str> for Ident {
    fn borrow(&self) -> &str {
        &self.lowered
    }
}

#[cfg(test)]
mod tests {
    use super::Ident;

    #[test]
    fn folds_case_for_equality() {
        assert_eq!(Ident::new("MyVar"), Ident::new("myvar"));
        assert_eq!(Ident::new("MyVar"), Ident::new("MYVAR"));
    }

    #[test]
    fn preserves_display_form() {
        let id = Ident::new("MyVar");
        assert_eq!(id.display(), "MyVar");
        assert_eq!(id.lowered(), "myvar");
    }
}
