//! The embedding façade: `Runtime` owns a `State` and drives it through the lex → parse →
//! interpret pipeline so a host never has to touch `parse::parse_program`/
//! `interpreter::run_program` directly.

use crate::addons::{ada_list, ada_string};
use crate::error::NeoAdaError;
use crate::interpreter;
use crate::parse::parse_program;
use crate::state::State;
use crate::value::Value;

/// One interpreter session: a `State` plus the lex/parse/interpret pipeline in front of it.
pub struct Runtime {
    state: State,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        let mut state = State::new();
        state.on_with(Box::new(|addon_name, functions| match addon_name {
            "ada.list" => {
                ada_list::register(functions);
                Ok(())
            }
            "ada.string" => {
                ada_string::register(functions);
                Ok(())
            }
            _ => Ok(()),
        }));
        Self { state }
    }

    /// Discards the current session and starts over with a fresh `State`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Parses and runs `text`, returning the value deposited in the return slot at the end of
    /// the top-level block (`Value::Undefined` for a script that never executes a `return`).
    pub fn run_script(&mut self, text: &str) -> Result<Value, NeoAdaError> {
        let program = parse_program(text)?;
        let value = interpreter::run_program(&mut self.state, &program)?;
        Ok(value)
    }

    /// Registers `list.length/append/insert/concat` on the `List` type bucket, the same method
    /// pack a `with "ada.list";` statement loads at runtime.
    pub fn load_addon_ada_list(&mut self) {
        ada_list::register(&mut self.state.functions);
    }

    /// Registers `string.length` on the `String` type bucket.
    pub fn load_addon_ada_string(&mut self) {
        ada_string::register(&mut self.state.functions);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Runtime;

    #[test]
    fn runs_a_script_and_reads_the_result_back() {
        let mut runtime = Runtime::new();
        runtime.run_script("declare x : Natural := 40; x := x + 2;").unwrap();
        assert_eq!(runtime.state().value("x").unwrap().display_string(), "42");
    }

    #[test]
    fn with_statement_loads_the_list_addon() {
        let mut runtime = Runtime::new();
        runtime
            .run_script(
                r#"
                with "ada.list";
                declare a : List := [1, 2, 3];
                a.append(4);
                declare n : Natural := a.length();
                "#,
            )
            .unwrap();
        assert_eq!(runtime.state().value("n").unwrap().display_string(), "4");
    }

    #[test]
    fn preloaded_addon_works_without_a_with_statement() {
        let mut runtime = Runtime::new();
        runtime.load_addon_ada_string();
        runtime
            .run_script(r#"declare s : String := "hello"; declare n : Natural := s.length();"#)
            .unwrap();
        assert_eq!(runtime.state().value("n").unwrap().display_string(), "5");
    }

    #[test]
    fn reset_clears_prior_declarations() {
        let mut runtime = Runtime::new();
        runtime.run_script("declare x : Natural := 1;").unwrap();
        runtime.reset();
        assert!(runtime.state().value("x").is_none());
    }
}
