//! The function/procedure table: user-defined (AST-bodied) and native overloads, keyed by
//! receiver type bucket and lowercased name.
//!
//! Overload resolution is first-match only (documented limitation, not arity/type dispatch):
//! the first entry registered under a name whose parameter count matches the call site wins.
//! This mirrors the reference implementation's binding order and keeps the table a plain
//! ordered list rather than a dispatch tree.

use std::fmt;
use std::rc::Rc;

use crate::ast::AstNode;
use crate::ident::Ident;
use crate::types::{DataType, RuntimeType};
use crate::value::{OpError, Value};

/// `in` (read-only, by value) or `out` (the caller's argument must be an lvalue; bound by
/// reference so the callee's writes are visible after return).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterMode {
    In,
    Out,
}

#[derive(Debug, Clone)]
pub struct FormalParameter {
    pub name: Ident,
    pub mode: ParameterMode,
    pub declared_type: Rc<RuntimeType>,
}

/// A native procedure/function body, implemented in Rust rather than NeoAda. Addons (`list`,
/// `string`) are bound this way. Receives already-evaluated, already-mode-bound arguments.
pub type NativeBody = Rc<dyn Fn(&mut [Value]) -> Result<Value, OpError>>;

#[derive(Clone)]
pub enum FunctionBody {
    /// A user-defined body: the `Procedure`/`Function` AST node, kept alive independently of
    /// the program tree it was declared in (the tree itself never shares nodes; this is the
    /// one place a clone is made, once, at declaration time).
    Ast(Rc<AstNode>),
    Native(NativeBody),
}

impl fmt::Debug for FunctionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ast(_) => f.write_str("FunctionBody::Ast"),
            Self::Native(_) => f.write_str("FunctionBody::Native"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionEntry {
    pub name: Ident,
    pub params: Vec<FormalParameter>,
    pub returns: Option<Rc<RuntimeType>>,
    pub body: FunctionBody,
}

impl FunctionEntry {
    #[must_use]
    pub fn is_procedure(&self) -> bool {
        self.returns.is_none()
    }
}

/// Key into the function table: `None` for free functions/procedures, `Some(type)` for
/// instance methods bound to a receiver type (addon methods like `list.append`).
type Bucket = Option<DataType>;

/// Overload table. Each `(bucket, lowered name)` maps to the overloads registered under it,
/// in registration order.
pub struct FunctionTable {
    entries: std::collections::HashMap<(Bucket, String), Vec<FunctionEntry>, ahash::RandomState>,
}

impl FunctionTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: std::collections::HashMap::default(),
        }
    }

    fn key(bucket: Bucket, name: &str) -> (Bucket, String) {
        (bucket, name.to_ascii_lowercase())
    }

    pub fn bind(&mut self, bucket: Bucket, entry: FunctionEntry) {
        let key = Self::key(bucket, entry.name.lowered());
        self.entries.entry(key).or_default().push(entry);
    }

    pub fn bind_fnc(&mut self, entry: FunctionEntry) {
        self.bind(None, entry);
    }

    pub fn bind_prc(&mut self, entry: FunctionEntry) {
        self.bind(None, entry);
    }

    pub fn bind_method(&mut self, receiver: DataType, entry: FunctionEntry) {
        self.bind(Some(receiver), entry);
    }

    /// Resolves a free function/procedure call: the first overload registered under `name`
    /// whose parameter count matches `arg_count`.
    #[must_use]
    pub fn resolve(&self, name: &str, arg_count: usize) -> Option<&FunctionEntry> {
        self.entries
            .get(&Self::key(None, name))?
            .iter()
            .find(|candidate| candidate.params.len() == arg_count)
    }

    /// Resolves an instance-method call bound to a receiver type.
    #[must_use]
    pub fn resolve_method(&self, receiver: DataType, name: &str, arg_count: usize) -> Option<&FunctionEntry> {
        self.entries
            .get(&Self::key(Some(receiver), name))?
            .iter()
            .find(|candidate| candidate.params.len() == arg_count)
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FunctionBody, FunctionEntry, FunctionTable};
    use crate::ast::{AstKind, AstNode};
    use crate::ident::Ident;
    use std::rc::Rc;

    fn dummy_entry(name: &str, params: usize) -> FunctionEntry {
        FunctionEntry {
            name: Ident::from(name),
            params: (0..params)
                .map(|i| super::FormalParameter {
                    name: Ident::from(format!("p{i}").as_str()),
                    mode: super::ParameterMode::In,
                    declared_type: Rc::new(crate::types::RuntimeType {
                        display_name: "Any".to_owned(),
                        data_type: crate::types::DataType::Any,
                    }),
                })
                .collect(),
            returns: None,
            body: FunctionBody::Ast(Rc::new(AstNode::new(AstKind::Block, Ident::from(""), 1, 1))),
        }
    }

    #[test]
    fn first_match_by_arity_wins() {
        let mut table = FunctionTable::new();
        table.bind_fnc(dummy_entry("greet", 1));
        table.bind_fnc(dummy_entry("greet", 2));
        assert_eq!(table.resolve("Greet", 2).unwrap().params.len(), 2);
        assert!(table.resolve("greet", 3).is_none());
    }
}
