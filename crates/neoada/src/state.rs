//! The interpreter's façade: everything an executing program shares across its whole run.
//!
//! `State` owns the type registry, the scope chain, the function table, the single return
//! slot every expression writes into, accumulated non-fatal diagnostics, the output sink, and
//! the `with`-statement addon-loading hook. `Runtime` (in `runtime.rs`) is the thin embedding
//! wrapper around it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::diagnostics::Diagnostic;
use crate::error::RuntimeError;
use crate::function::{FunctionEntry, FunctionTable};
use crate::ident::Ident;
use crate::io::{NoPrint, PrintWriter};
use crate::symbol::{ScopeStack, Symbol};
use crate::types::{DataType, TypeRegistry};
use crate::value::Value;

/// Shared handle to the output sink, so a native `print` procedure (which, like every native
/// body, only receives its arguments, not `&mut State`) can still reach the same writer an
/// embedder installed on `State` by capturing a clone of this handle in its closure.
pub type SharedPrintWriter = Rc<RefCell<Box<dyn PrintWriter>>>;

/// Registers the native procedures/functions for one addon name (`"ada.list"`,
/// `"ada.string"`, or a host-defined one) into the function table.
pub type OnWithCallback = Box<dyn FnMut(&str, &mut FunctionTable) -> Result<(), RuntimeError>>;

pub struct State {
    pub types: TypeRegistry,
    pub scopes: ScopeStack,
    pub functions: FunctionTable,
    /// The single slot every expression evaluation deposits its result into (§4.4).
    pub ret: Value,
    pub diagnostics: Vec<Diagnostic>,
    print_writer: SharedPrintWriter,
    on_with: Option<OnWithCallback>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: TypeRegistry::with_builtins(),
            scopes: ScopeStack::new(),
            functions: FunctionTable::new(),
            ret: Value::Undefined,
            diagnostics: Vec::new(),
            print_writer: Rc::new(RefCell::new(Box::new(NoPrint))),
            on_with: None,
        }
    }

    pub fn set_print_writer(&mut self, writer: Box<dyn PrintWriter>) {
        *self.print_writer.borrow_mut() = writer;
    }

    /// A clone of the shared writer handle, for embedding in a native `print` procedure's
    /// closure (see `neoada-cli`'s `main.rs`).
    #[must_use]
    pub fn print_writer_handle(&self) -> SharedPrintWriter {
        Rc::clone(&self.print_writer)
    }

    pub fn on_with(&mut self, callback: OnWithCallback) {
        self.on_with = Some(callback);
    }

    /// Invoked by the interpreter on a `with "name";` statement. Temporarily takes the
    /// callback out of `self` so it can be called with `&mut self.functions` without a
    /// conflicting borrow of `self` itself.
    pub fn handle_with(&mut self, addon_name: &str) -> Result<(), RuntimeError> {
        let Some(mut callback) = self.on_with.take() else {
            return Ok(());
        };
        let result = callback(addon_name, &mut self.functions);
        self.on_with = Some(callback);
        result
    }

    /// Declares a global of the named built-in type. Returns `false` if the type name is
    /// unknown or the name is already declared at global scope.
    #[must_use]
    pub fn define(&mut self, name: &str, type_name: &str) -> bool {
        if self.scopes.lookup_global(name).is_some() {
            return false;
        }
        let Some(runtime_type) = self.types.resolve(type_name) else {
            return false;
        };
        let initial = initial_value_for(runtime_type.data_type);
        let symbol = Symbol::new(initial, Rc::new(runtime_type.clone()));
        self.scopes.declare_global(Ident::from(name), symbol);
        true
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<Value> {
        self.scopes.lookup(name).map(|symbol| symbol.slot.borrow().clone())
    }

    #[must_use]
    pub fn value_ref(&self, name: &str) -> Option<Value> {
        self.scopes
            .lookup(name)
            .map(|symbol| Value::reference_to_slot(Rc::clone(&symbol.slot)))
    }

    pub fn bind_fnc(&mut self, entry: FunctionEntry) {
        self.functions.bind_fnc(entry);
    }

    pub fn bind_prc(&mut self, entry: FunctionEntry) {
        self.functions.bind_prc(entry);
    }

    pub fn bind_method(&mut self, receiver: DataType, entry: FunctionEntry) {
        self.functions.bind_method(receiver, entry);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The value a freshly declared symbol of the given type starts out holding, before any
/// initializer runs.
pub fn initial_value_for(data_type: DataType) -> Value {
    match data_type {
        DataType::Undefined | DataType::Reference => Value::Undefined,
        DataType::Any => Value::Any(Box::new(Value::Undefined)),
        DataType::Number => Value::Number(0.0),
        DataType::Natural => Value::Natural(0),
        DataType::Supernatural => Value::Supernatural(0),
        DataType::Boolean => Value::Boolean(false),
        DataType::Byte => Value::Byte(0),
        DataType::String => Value::new_string(""),
        DataType::List => Value::new_list(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::State;

    #[test]
    fn define_then_read_back() {
        let mut state = State::new();
        assert!(state.define("x", "Natural"));
        assert_eq!(state.value("x").unwrap().display_string(), "0");
    }

    #[test]
    fn redefining_a_global_fails() {
        let mut state = State::new();
        assert!(state.define("x", "Natural"));
        assert!(!state.define("x", "Natural"));
    }

    #[test]
    fn unknown_type_name_fails() {
        let mut state = State::new();
        assert!(!state.define("x", "Widget"));
    }
}
