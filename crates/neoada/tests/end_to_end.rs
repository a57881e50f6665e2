//! End-to-end scenarios (S1-S8) and the universal invariants, driven entirely through
//! `Runtime`/`State` the way the teacher exercises its own `Runner`/`ReplSession` from outside
//! the crate (see `tests/set_variable.rs`, `tests/repl_tests.rs` in the reference pack).

use neoada::{DataType, FormalParameter, FunctionBody, FunctionEntry, Ident, NeoAdaError, ParameterMode, Runtime, RuntimeType, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Registers `print(message : any)` so it appends to a plain `Rc<RefCell<String>>` the test can
/// read back directly, rather than going through the `PrintWriter` trait object (which a host
/// embedder would use, but a test asserting on exact output is simpler reading a `String`).
fn bind_collecting_print(runtime: &mut Runtime) -> Rc<RefCell<String>> {
    let collected = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&collected);
    runtime.state_mut().bind_prc(FunctionEntry {
        name: Ident::from("print"),
        params: vec![FormalParameter {
            name: Ident::from("message"),
            mode: ParameterMode::In,
            declared_type: Rc::new(RuntimeType {
                display_name: "Any".to_owned(),
                data_type: DataType::Any,
            }),
        }],
        returns: None,
        body: FunctionBody::Native(Rc::new(move |args| {
            let mut text = sink.borrow_mut();
            text.push_str(&args[0].resolved().display_string());
            text.push('\n');
            Ok(Value::Undefined)
        })),
    });
    collected
}

fn new_runtime_with_print() -> (Runtime, Rc<RefCell<String>>) {
    let mut runtime = Runtime::new();
    let output = bind_collecting_print(&mut runtime);
    runtime.load_addon_ada_list();
    runtime.load_addon_ada_string();
    (runtime, output)
}

#[test]
fn s1_declaration_and_mutation() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime.run_script("declare x : Natural := 40; x := x + 2;").unwrap();
    assert_eq!(runtime.state().value("x").unwrap().display_string(), "42");
}

#[test]
fn s2_append_then_print_the_length() {
    let (mut runtime, output) = new_runtime_with_print();
    runtime
        .run_script("declare a : List := [1, 2, 3]; a.append(4); print(#a);")
        .unwrap();
    assert_eq!(output.borrow().as_str(), "4\n");
}

#[test]
fn s3_while_loop_counts_to_three() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime
        .run_script("declare i : Natural := 0; while i < 3 loop i := i + 1; end loop;")
        .unwrap();
    assert_eq!(runtime.state().value("i").unwrap().display_string(), "3");
}

#[test]
fn s4_for_loop_sums_an_inclusive_range() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime
        .run_script("declare s : Natural := 0; for n in 1..5 loop s := s + n; end loop;")
        .unwrap();
    assert_eq!(runtime.state().value("s").unwrap().display_string(), "15");
}

#[test]
fn s5_if_else_picks_the_true_branch() {
    let (mut runtime, output) = new_runtime_with_print();
    runtime
        .run_script(r#"if 2 > 1 then print("yes"); else print("no"); end if;"#)
        .unwrap();
    assert_eq!(output.borrow().as_str(), "yes\n");
}

#[test]
fn s6_list_assignment_is_copy_on_write() {
    let (mut runtime, output) = new_runtime_with_print();
    runtime
        .run_script(
            "declare a : List := [1, 2]; declare b : List := a; b.append(9); print(#a); print(#b);",
        )
        .unwrap();
    assert_eq!(output.borrow().as_str(), "2\n3\n");
}

#[test]
fn s7_underscored_floating_literal_with_negative_exponent() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime.run_script("declare n : Number := 1_000_000.5E-3;").unwrap();
    let value: f64 = runtime.state().value("n").unwrap().display_string().parse().unwrap();
    assert!((value - 1000.0005).abs() < 1e-9);
}

#[test]
fn s8_assigning_a_string_into_a_natural_declaration_is_an_assignment_error() {
    let (mut runtime, _output) = new_runtime_with_print();
    let err = runtime.run_script(r#"declare x : Natural := "hi";"#).unwrap_err();
    assert!(matches!(
        err,
        NeoAdaError::Runtime(neoada::RuntimeError::AssignmentError { .. })
    ));
}

#[test]
fn invariant_scope_lifetime_does_not_leak_block_locals() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime
        .run_script(
            r#"
            declare cond : Boolean := true;
            if cond then
                declare inner : Natural := 7;
            end if;
            "#,
        )
        .unwrap();
    assert!(runtime.state().value("inner").is_none());
}

#[test]
fn invariant_break_outside_a_loop_does_not_abort_the_program() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime.run_script("declare x : Natural := 1; break; x := x + 1;").unwrap();
    assert_eq!(runtime.state().value("x").unwrap().display_string(), "2");
    assert_eq!(runtime.state().diagnostics.len(), 1);
}

#[test]
fn invariant_out_parameter_is_visible_to_the_caller_after_return() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime
        .run_script(
            r#"
            procedure Increment(n : out Natural) is
                n := n + 1;
            end Increment;
            declare counter : Natural := 5;
            Increment(counter);
            "#,
        )
        .unwrap();
    assert_eq!(runtime.state().value("counter").unwrap().display_string(), "6");
}

#[test]
fn invariant_return_value_survives_callee_scope_teardown() {
    let (mut runtime, _output) = new_runtime_with_print();
    runtime
        .run_script(
            r#"
            function Square(n : in Natural) return Natural is
                declare scratch : Natural := n * n;
                return scratch;
            end Square;
            declare result : Natural := Square(6);
            "#,
        )
        .unwrap();
    assert_eq!(runtime.state().value("result").unwrap().display_string(), "36");
}

#[test]
fn with_statement_loads_an_addon_not_preloaded_by_the_embedder() {
    let mut runtime = Runtime::new();
    let output = bind_collecting_print(&mut runtime);
    runtime
        .run_script(
            r#"
            with "ada.string";
            declare s : String := "hello";
            print(s.length());
            "#,
        )
        .unwrap();
    assert_eq!(output.borrow().as_str(), "5\n");
}
