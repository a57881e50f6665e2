//! The type registry: case-insensitive interning of built-in type names, used by
//! `Declaration`/`FormalParameter` to resolve a type-name token into a concrete [`DataType`].

use std::collections::HashMap;
use std::fmt;

use ahash::RandomState;

/// The built-in scalar/container kinds a `Value` can carry. `Reference` and `Any` are nominal
/// types too (a formal parameter or declaration can be typed as either), but neither one has
/// its own payload shape distinct from the value it wraps/aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DataType {
    Undefined,
    Any,
    Reference,
    Number,
    Natural,
    Supernatural,
    Boolean,
    Byte,
    String,
    List,
}

impl DataType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "any" => Some(Self::Any),
            "reference" => Some(Self::Reference),
            "number" => Some(Self::Number),
            "natural" => Some(Self::Natural),
            "supernatural" => Some(Self::Supernatural),
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "string" => Some(Self::String),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// A registered type: its canonical (display) name and the `DataType` it resolves to. Kept as
/// a struct rather than just a `DataType` so user-visible diagnostics can echo back the name
/// as written (`Natural` vs `natural`) while lookups stay case-insensitive.
#[derive(Debug, Clone)]
pub struct RuntimeType {
    pub display_name: String,
    pub data_type: DataType,
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Case-insensitive registry of known type names, seeded with the built-ins and open to
/// addon-registered names in the future (none are registered by the addons shipped today).
pub struct TypeRegistry {
    by_lowered_name: HashMap<String, RuntimeType, RandomState>,
}

impl TypeRegistry {
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            by_lowered_name: HashMap::default(),
        };
        for name in [
            "Any",
            "Reference",
            "Number",
            "Natural",
            "Supernatural",
            "Boolean",
            "Byte",
            "String",
            "List",
        ] {
            registry.register(name);
        }
        registry
    }

    fn register(&mut self, display_name: &str) {
        let data_type = DataType::from_name(display_name).expect("builtin name must resolve");
        self.by_lowered_name.insert(
            display_name.to_ascii_lowercase(),
            RuntimeType {
                display_name: display_name.to_owned(),
                data_type,
            },
        );
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&RuntimeType> {
        self.by_lowered_name.get(&name.to_ascii_lowercase())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, TypeRegistry};

    #[test]
    fn resolves_case_insensitively() {
        let registry = TypeRegistry::with_builtins();
        let resolved = registry.resolve("nAtUrAl").unwrap();
        assert_eq!(resolved.data_type, DataType::Natural);
        assert_eq!(resolved.display_name, "Natural");
    }

    #[test]
    fn unknown_type_name_is_none() {
        let registry = TypeRegistry::with_builtins();
        assert!(registry.resolve("widget").is_none());
    }
}
