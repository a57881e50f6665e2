//! Scope chain and symbol storage.
//!
//! Unlike a bytecode VM's slot-indexed namespaces, a tree-walking interpreter looks variables
//! up by name at every use, so scopes here are ordered name→slot maps (`IndexMap`, preserving
//! declaration order for diagnostics and for-loop iteration variable shadowing) rather than
//! flat `Vec<Value>` namespaces addressed by compiled indices.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ident::Ident;
use crate::types::RuntimeType;
use crate::value::Value;

/// What kind of block a scope was opened for. `Loop` scopes are where `break`/`continue`
/// are legal; `inLoopScope` walks the scope stack looking for one before any `Conditional`
/// or `Local` scope that isn't itself loop-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Local,
    Loop,
    Conditional,
}

/// One declared name: its storage slot (shared via `Rc` so a `Reference` can alias it) and
/// the type it was declared with.
pub struct Symbol {
    pub slot: Rc<RefCell<Value>>,
    pub declared_type: Rc<RuntimeType>,
}

impl Symbol {
    #[must_use]
    pub fn new(value: Value, declared_type: Rc<RuntimeType>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(value)),
            declared_type,
        }
    }
}

/// One level of the scope chain.
pub struct Scope {
    pub kind: ScopeKind,
    symbols: IndexMap<Ident, Symbol>,
}

impl Scope {
    #[must_use]
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            symbols: IndexMap::new(),
        }
    }

    pub fn declare(&mut self, name: Ident, symbol: Symbol) {
        self.symbols.insert(name, symbol);
    }

    /// Looks up by name, folding case so callers don't need to remember to lower it first
    /// (`IndexMap::get`'s borrowed-key lookup hashes the `&str` directly, bypassing `Ident`'s
    /// own case-folding `Hash` impl, so the input has to already be lowered by the time it
    /// gets here).
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name.to_ascii_lowercase().as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name.to_ascii_lowercase().as_str())
    }
}

/// The call-frame-local scope stack: one `Vec<Scope>` per active function/procedure
/// activation (and one permanent stack for the top level). `push_scope`/`pop_scope` bracket
/// blocks; `push_stack`/`pop_stack` bracket function calls by swapping in a fresh stack of
/// scopes entirely, so a function body cannot see its caller's locals.
pub struct ScopeStack {
    frames: Vec<Vec<Scope>>,
}

impl ScopeStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![vec![Scope::new(ScopeKind::Global)]],
        }
    }

    fn current_frame(&mut self) -> &mut Vec<Scope> {
        self.frames.last_mut().expect("scope stack is never empty")
    }

    pub fn push_scope(&mut self, kind: ScopeKind) {
        self.current_frame().push(Scope::new(kind));
    }

    pub fn pop_scope(&mut self) {
        let frame = self.current_frame();
        assert!(frame.len() > 1, "cannot pop a call frame's outermost scope");
        frame.pop();
    }

    /// Opens a fresh call frame (used when entering a function/procedure body), so locals
    /// declared inside cannot leak into, or see, the caller's scopes.
    pub fn push_stack(&mut self) {
        self.frames.push(vec![Scope::new(ScopeKind::Local)]);
    }

    /// Closes the current call frame, returning to the caller's scopes.
    ///
    /// # Panics
    /// Panics if called when only the top-level frame remains.
    pub fn pop_stack(&mut self) {
        assert!(self.frames.len() > 1, "cannot pop the top-level call frame");
        self.frames.pop();
    }

    pub fn declare(&mut self, name: impl Into<Ident>, symbol: Symbol) {
        self.current_frame()
            .last_mut()
            .expect("scope stack is never empty")
            .declare(name.into(), symbol);
    }

    /// Declares directly into the top-level global scope, regardless of the currently active
    /// call frame. Used by `State::define` to let an embedder seed globals before a script
    /// runs, and by `Declaration` execution at the program's outermost frame.
    pub fn declare_global(&mut self, name: impl Into<Ident>, symbol: Symbol) {
        self.frames[0][0].declare(name.into(), symbol);
    }

    #[must_use]
    pub fn lookup_global(&self, name: &str) -> Option<&Symbol> {
        self.frames[0][0].lookup(name)
    }

    /// Looks a name up through the current call frame's scopes innermost-first, then falls
    /// back to the global scope (frame 0's outermost scope) so top-level declarations and
    /// `with`-loaded addon procedures are visible from inside any function body.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let frame = self.frames.last().expect("scope stack is never empty");
        for scope in frame.iter().rev() {
            if let Some(symbol) = scope.lookup(name) {
                return Some(symbol);
            }
        }
        self.frames[0][0].lookup(name)
    }

    #[must_use]
    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        let frame = self.frames.last().expect("scope stack is never empty");
        frame.last().expect("frame always has a scope").contains(name)
    }

    /// True when a `Loop` scope is reachable from the innermost scope without first crossing
    /// a function-call boundary. Used to validate `break`/`continue`.
    #[must_use]
    pub fn in_loop_scope(&self) -> bool {
        let frame = self.frames.last().expect("scope stack is never empty");
        frame.iter().rev().any(|scope| scope.kind == ScopeKind::Loop)
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ScopeKind, ScopeStack, Symbol};
    use crate::types::{DataType, RuntimeType};
    use crate::value::Value;
    use std::rc::Rc;

    fn natural_symbol(n: i64) -> Symbol {
        Symbol::new(
            Value::Natural(n),
            Rc::new(RuntimeType {
                display_name: "Natural".to_owned(),
                data_type: DataType::Natural,
            }),
        )
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let mut stack = ScopeStack::new();
        stack.declare("x", natural_symbol(1));
        stack.push_scope(ScopeKind::Local);
        stack.declare("x", natural_symbol(2));
        assert_eq!(stack.lookup("x").unwrap().slot.borrow().display_string(), "2");
        stack.pop_scope();
        assert_eq!(stack.lookup("x").unwrap().slot.borrow().display_string(), "1");
    }

    #[test]
    fn function_frame_does_not_see_caller_locals() {
        let mut stack = ScopeStack::new();
        stack.declare("x", natural_symbol(1));
        stack.push_stack();
        assert!(stack.lookup("x").is_none());
        stack.pop_stack();
        assert!(stack.lookup("x").is_some());
    }

    #[test]
    fn global_declarations_are_visible_from_inside_a_call() {
        let mut stack = ScopeStack::new();
        stack.declare("g", natural_symbol(9));
        stack.push_stack();
        assert_eq!(stack.lookup("g").unwrap().slot.borrow().display_string(), "9");
        stack.pop_stack();
    }

    #[test]
    fn loop_scope_is_detected_through_nested_conditionals() {
        let mut stack = ScopeStack::new();
        assert!(!stack.in_loop_scope());
        stack.push_scope(ScopeKind::Loop);
        stack.push_scope(ScopeKind::Conditional);
        assert!(stack.in_loop_scope());
        stack.pop_scope();
        stack.pop_scope();
        assert!(!stack.in_loop_scope());
    }

    #[test]
    fn loop_scope_does_not_cross_a_call_boundary() {
        let mut stack = ScopeStack::new();
        stack.push_scope(ScopeKind::Loop);
        stack.push_stack();
        assert!(!stack.in_loop_scope());
        stack.pop_stack();
        assert!(stack.in_loop_scope());
    }
}
