use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

/// Reserved marker for a cell with no item in it.
pub const EMPTY_MARKER: &str = " ";

/// A canonical, lower-cased item identifier or the empty marker.
#[derive(
    Clone, Debug, Display, Deref, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Blank input collapses to the empty marker so there is only one way to spell "empty".
    pub fn new(identifier: &str) -> Self {
        if identifier.trim().is_empty() {
            Self::empty()
        } else {
            Self(identifier.to_lowercase())
        }
    }

    pub fn empty() -> Self {
        Self(EMPTY_MARKER.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == EMPTY_MARKER
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use super::{Symbol, EMPTY_MARKER};

    #[test]
    fn identifiers_are_lower_cased() {
        assert_eq!(Symbol::new("Oak_Planks").as_str(), "oak_planks");
        assert_eq!(Symbol::from("STICK"), Symbol::from("stick"));
    }

    #[test]
    fn blank_input_is_the_empty_marker() {
        for blank in ["", " ", "   ", "\t"] {
            let symbol = Symbol::new(blank);
            assert!(symbol.is_empty());
            assert_eq!(symbol.as_str(), EMPTY_MARKER);
        }
        assert!(!Symbol::new("stone").is_empty());
    }

    #[test]
    fn deserializing_normalizes() {
        let symbols: Vec<Symbol> = serde_json::from_str(r#"["Stone", "", " "]"#).unwrap();
        assert_eq!(symbols, vec![Symbol::new("stone"), Symbol::empty(), Symbol::empty()]);
    }
}
