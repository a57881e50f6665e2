//! The tree-walking interpreter: drives [`AstNode`] execution against a [`State`].
//!
//! Expression evaluation and statement execution are kept as two separate functions even
//! though several node kinds (calls, access) can appear in both positions, because a
//! statement additionally has to thread the four-way [`ExecState`] (`Running`/`Returning`/
//! `Breaking`/`Continuing`) back up through nested blocks, while an expression only ever
//! produces a [`Value`].

use std::rc::Rc;

use crate::ast::{AstKind, AstNode};
use crate::error::RuntimeError;
use crate::function::{FormalParameter, FunctionBody, FunctionEntry, ParameterMode};
use crate::numeric::ParsedNumber;
use crate::state::{State, initial_value_for};
use crate::symbol::{ScopeKind, Symbol};
use crate::types::{DataType, RuntimeType};
use crate::value::Value;

/// What a block's execution left the interpreter in. Statement iteration inside a block stops
/// the moment this is anything other than `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    Running,
    Returning,
    Breaking,
    Continuing,
}

/// Runs a whole program's top-level statements against `state`, in its current (global) frame.
pub fn run_program(state: &mut State, program: &AstNode) -> Result<Value, RuntimeError> {
    execute_block(state, program)?;
    let result = state.ret.resolved();
    state.ret = Value::Undefined;
    Ok(result)
}

fn execute_block(state: &mut State, block: &AstNode) -> Result<ExecState, RuntimeError> {
    for statement in &block.children {
        let exec_state = execute_statement(state, statement)?;
        if exec_state != ExecState::Running {
            return Ok(exec_state);
        }
    }
    Ok(ExecState::Running)
}

fn execute_statement(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    match node.kind {
        AstKind::Declaration | AstKind::VolatileDeclaration => execute_declaration(state, node),
        AstKind::Assignment => execute_assignment(state, node),
        AstKind::IfStatement => execute_if(state, node),
        AstKind::WhileLoop => execute_while(state, node),
        AstKind::ForLoop => execute_for(state, node),
        AstKind::Break => execute_break_or_continue(state, node, ExecState::Breaking),
        AstKind::Continue => execute_break_or_continue(state, node, ExecState::Continuing),
        AstKind::Return => execute_return(state, node),
        AstKind::Procedure | AstKind::Function => {
            declare_callable(state, node);
            Ok(ExecState::Running)
        }
        AstKind::WithAddon => {
            state.handle_with(node.value.display())?;
            Ok(ExecState::Running)
        }
        AstKind::FunctionCall | AstKind::StaticMethodCall | AstKind::InstanceMethodCall => {
            eval_call(state, node)?;
            Ok(ExecState::Running)
        }
        _ => {
            eval_expr(state, node)?;
            Ok(ExecState::Running)
        }
    }
}

fn resolve_type(state: &State, node: &AstNode) -> Result<Rc<RuntimeType>, RuntimeError> {
    state
        .types
        .resolve(node.value.display())
        .map(|found| Rc::new(found.clone()))
        .ok_or_else(|| RuntimeError::DeclarationError {
            line: node.line,
            column: node.column,
            type_name: node.value.display().to_owned(),
        })
}

fn execute_declaration(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    if state.scopes.is_declared_in_current_scope(node.value.lowered()) {
        return Err(RuntimeError::DeclarationError {
            line: node.line,
            column: node.column,
            type_name: node.value.display().to_owned(),
        });
    }
    let type_node = &node.children[0];
    let runtime_type = resolve_type(state, type_node)?;
    let initial = initial_value_for(runtime_type.data_type);
    let symbol = Symbol::new(initial, Rc::clone(&runtime_type));
    state.scopes.declare(node.value.clone(), symbol);

    if let Some(init_expr) = node.children.get(1) {
        let value = eval_expr(state, init_expr)?;
        let target = state.scopes.lookup(node.value.lowered()).expect("just declared");
        let mut slot = target.slot.borrow_mut();
        slot.assign(&value).map_err(|err| RuntimeError::AssignmentError {
            line: node.line,
            column: node.column,
            detail: err.0,
        })?;
    }
    Ok(ExecState::Running)
}

fn execute_assignment(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    let lhs = eval_expr(state, &node.children[0])?;
    let rhs = eval_expr(state, &node.children[1])?;
    if !matches!(lhs, Value::Reference(_)) {
        return Err(RuntimeError::InvalidAssignment {
            line: node.line,
            column: node.column,
        });
    }
    lhs.assign(&rhs).map_err(|err| RuntimeError::AssignmentError {
        line: node.line,
        column: node.column,
        detail: err.0,
    })?;
    state.ret = rhs;
    Ok(ExecState::Running)
}

fn execute_if(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    let cond = eval_expr(state, &node.children[0])?;
    if cond.permissive_truthy() {
        return execute_conditional_block(state, &node.children[1]);
    }
    for branch in &node.children[2..] {
        match branch.kind {
            AstKind::Elsif => {
                let elsif_cond = eval_expr(state, &branch.children[0])?;
                if elsif_cond.permissive_truthy() {
                    return execute_conditional_block(state, &branch.children[1]);
                }
            }
            AstKind::Else => return execute_conditional_block(state, &branch.children[0]),
            _ => unreachable!("IfStatement children after the then-block are only Elsif/Else"),
        }
    }
    Ok(ExecState::Running)
}

fn execute_conditional_block(state: &mut State, block: &AstNode) -> Result<ExecState, RuntimeError> {
    state.scopes.push_scope(ScopeKind::Conditional);
    let result = execute_block(state, block);
    state.scopes.pop_scope();
    result
}

fn execute_while(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    loop {
        let cond = eval_expr(state, &node.children[0])?;
        if !cond.permissive_truthy() {
            break;
        }
        state.scopes.push_scope(ScopeKind::Loop);
        let result = execute_block(state, &node.children[1]);
        state.scopes.pop_scope();
        match result? {
            ExecState::Breaking => break,
            ExecState::Continuing | ExecState::Running => {}
            ExecState::Returning => return Ok(ExecState::Returning),
        }
    }
    Ok(ExecState::Running)
}

fn expect_integer(value: &Value, line: u32, column: u32) -> Result<i64, RuntimeError> {
    match value.resolved() {
        Value::Natural(n) => Ok(n),
        Value::Supernatural(n) => i64::try_from(n).map_err(|_| RuntimeError::InvalidContainerType { line, column }),
        Value::Number(n) if n.fract() == 0.0 => Ok(n as i64),
        _ => Err(RuntimeError::InvalidContainerType { line, column }),
    }
}

fn execute_for(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    let range = &node.children[0];
    let from = eval_expr(state, &range.children[0])?;
    let to = eval_expr(state, &range.children[1])?;
    let from = expect_integer(&from, range.line, range.column)?;
    let to = expect_integer(&to, range.line, range.column)?;

    let mut i = from;
    while i <= to {
        state.scopes.push_scope(ScopeKind::Loop);
        let natural_type = Rc::new(RuntimeType {
            display_name: "Natural".to_owned(),
            data_type: DataType::Natural,
        });
        state
            .scopes
            .declare(node.value.clone(), Symbol::new(Value::Natural(i), natural_type));
        let result = execute_block(state, &node.children[1]);
        state.scopes.pop_scope();
        match result? {
            ExecState::Breaking => break,
            ExecState::Continuing | ExecState::Running => {}
            ExecState::Returning => return Ok(ExecState::Returning),
        }
        i += 1;
    }
    Ok(ExecState::Running)
}

fn execute_break_or_continue(state: &mut State, node: &AstNode, target: ExecState) -> Result<ExecState, RuntimeError> {
    if let Some(when_expr) = node.children.first() {
        let guard = eval_expr(state, when_expr)?;
        if !guard.permissive_truthy() {
            return Ok(ExecState::Running);
        }
    }
    if !state.scopes.in_loop_scope() {
        let kind = if target == ExecState::Breaking {
            crate::diagnostics::DiagnosticKind::BreakOutsideLoop
        } else {
            crate::diagnostics::DiagnosticKind::ContinueOutsideLoop
        };
        state.diagnostics.push(crate::diagnostics::Diagnostic {
            kind,
            line: node.line,
            column: node.column,
        });
        return Ok(ExecState::Running);
    }
    Ok(target)
}

fn execute_return(state: &mut State, node: &AstNode) -> Result<ExecState, RuntimeError> {
    state.ret = match node.children.first() {
        Some(expr) => eval_expr(state, expr)?,
        None => Value::Undefined,
    };
    Ok(ExecState::Returning)
}

/// Registers a `Procedure`/`Function` definition into the function table. `node.kind`
/// distinguishes the two; the presence of a return-type child is what actually determines
/// `FunctionEntry::returns`.
fn declare_callable(state: &mut State, node: &AstNode) {
    let mut children = node.children.iter();
    let mut next = children.next();

    let context = if matches!(next.map(|c| c.kind), Some(AstKind::MethodContext)) {
        let ctx = next;
        next = children.next();
        ctx
    } else {
        None
    };

    let formals_node = next.expect("Procedure/Function always has a FormalParameters child");
    let params = formals_node
        .children
        .iter()
        .map(|formal| build_formal(state, formal))
        .collect::<Vec<_>>();

    let after_formals = children.next();
    let (returns, body_block) = match node.kind {
        AstKind::Function => {
            let return_type_node = after_formals.expect("Function always has a return type child");
            let return_type = resolve_type(state, return_type_node).ok();
            let body = children.next().expect("Function always has a Block child");
            (return_type, body)
        }
        _ => (None, after_formals.expect("Procedure always has a Block child")),
    };

    let entry = FunctionEntry {
        name: node.value.clone(),
        params,
        returns,
        body: FunctionBody::Ast(Rc::new(body_block.clone())),
    };

    match context {
        Some(ctx) => {
            if let Some(data_type) = DataType::from_name(ctx.value.display()) {
                state.bind_method(data_type, entry);
            }
        }
        None if node.kind == AstKind::Function => state.bind_fnc(entry),
        None => state.bind_prc(entry),
    }
}

fn build_formal(state: &State, formal_node: &AstNode) -> FormalParameter {
    let type_node = &formal_node.children[0];
    let declared_type = resolve_type(state, type_node).unwrap_or_else(|_| {
        Rc::new(RuntimeType {
            display_name: "Any".to_owned(),
            data_type: DataType::Any,
        })
    });
    let mode = match formal_node.children.get(1) {
        Some(mode_node) if mode_node.value.lowered() == "out" => ParameterMode::Out,
        _ => ParameterMode::In,
    };
    FormalParameter {
        name: formal_node.value.clone(),
        mode,
        declared_type,
    }
}

// --- expressions ---

fn eval_expr(state: &mut State, node: &AstNode) -> Result<Value, RuntimeError> {
    let value = match node.kind {
        AstKind::Number => eval_number_literal(node)?,
        AstKind::BooleanLiteral => eval_boolean_literal(node)?,
        AstKind::Literal => Value::new_string(node.value.display()),
        AstKind::ListLiteral => {
            let mut items = Vec::with_capacity(node.children.len());
            for child in &node.children {
                items.push(eval_expr(state, child)?.resolved());
            }
            Value::new_list(items)
        }
        AstKind::Expression => eval_expr(state, &node.children[0])?,
        AstKind::Identifier => eval_identifier(state, node)?,
        AstKind::AccessOperator => eval_access(state, node)?,
        AstKind::UnaryOperator => eval_unary(state, node)?,
        AstKind::BinaryOperator => eval_binary(state, node)?,
        AstKind::FunctionCall | AstKind::StaticMethodCall | AstKind::InstanceMethodCall => eval_call(state, node)?,
        other => unreachable!("{other} is not a valid expression node"),
    };
    state.ret = value.clone();
    Ok(value)
}

fn eval_number_literal(node: &AstNode) -> Result<Value, RuntimeError> {
    if let Some(cached) = node.literal_cache.borrow().as_ref() {
        return Ok(cached.clone());
    }
    let parsed = crate::numeric::parse_numeral(node.value.display()).map_err(|err| RuntimeError::InvalidNumericValue {
        line: node.line,
        column: node.column,
        lexeme: err.0,
    })?;
    let value = match parsed {
        ParsedNumber::Natural(n) => Value::Natural(n),
        ParsedNumber::Supernatural(n) => Value::Supernatural(n),
        ParsedNumber::Number(n) => Value::Number(n),
        ParsedNumber::Byte(b) => Value::Byte(b),
    };
    *node.literal_cache.borrow_mut() = Some(value.clone());
    Ok(value)
}

fn eval_boolean_literal(node: &AstNode) -> Result<Value, RuntimeError> {
    if let Some(cached) = node.literal_cache.borrow().as_ref() {
        return Ok(cached.clone());
    }
    let value = Value::Boolean(node.value.lowered() == "true");
    *node.literal_cache.borrow_mut() = Some(value.clone());
    Ok(value)
}

fn eval_identifier(state: &mut State, node: &AstNode) -> Result<Value, RuntimeError> {
    state.value_ref(node.value.lowered()).ok_or_else(|| RuntimeError::UnknownSymbol {
        line: node.line,
        column: node.column,
        name: node.value.display().to_owned(),
    })
}

fn eval_access(state: &mut State, node: &AstNode) -> Result<Value, RuntimeError> {
    let target = &node.children[0].value;
    let symbol = state
        .scopes
        .lookup(target.lowered())
        .ok_or_else(|| RuntimeError::UnknownSymbol {
            line: node.line,
            column: node.column,
            name: target.display().to_owned(),
        })?;
    let slot = Rc::clone(&symbol.slot);

    let index_value = eval_expr(state, &node.children[1])?;
    let index = expect_integer(&index_value, node.line, node.column)?;
    if index < 0 {
        return Err(RuntimeError::InvalidAccessValue {
            line: node.line,
            column: node.column,
            detail: "index must be non-negative".to_owned(),
        });
    }

    let mut target = slot.borrow_mut();
    target.write_access(index as usize).map_err(|err| RuntimeError::InvalidAccessValue {
        line: node.line,
        column: node.column,
        detail: err.0,
    })
}

fn eval_unary(state: &mut State, node: &AstNode) -> Result<Value, RuntimeError> {
    let operand = eval_expr(state, &node.children[0])?;
    operand
        .unary(node.value.lowered())
        .map_err(|err| RuntimeError::OperatorTypeError {
            line: node.line,
            column: node.column,
            detail: err.0,
        })
}

const COMPARISON_OPS: &[&str] = &["=", "<>", "/=", "<", "<=", ">", ">="];
const ARITHMETIC_OPS: &[&str] = &["+", "-", "*", "/", "mod", "rem"];
const BOOLEAN_OPS: &[&str] = &["and", "or", "xor"];

fn eval_binary(state: &mut State, node: &AstNode) -> Result<Value, RuntimeError> {
    let op = node.value.lowered();
    let left = eval_expr(state, &node.children[0])?;
    let right = eval_expr(state, &node.children[1])?;

    if op == "&" {
        return left.concat(&right).map_err(|err| RuntimeError::OperatorTypeError {
            line: node.line,
            column: node.column,
            detail: err.0,
        });
    }
    if COMPARISON_OPS.contains(&op) {
        return eval_comparison(op, &left, &right, node.line, node.column);
    }
    if ARITHMETIC_OPS.contains(&op) {
        return left.arithmetic(op, &right).map_err(|err| RuntimeError::OperatorTypeError {
            line: node.line,
            column: node.column,
            detail: err.0,
        });
    }
    if BOOLEAN_OPS.contains(&op) {
        let a = left.strict_bool().map_err(|err| RuntimeError::OperatorTypeError {
            line: node.line,
            column: node.column,
            detail: err.0,
        })?;
        let b = right.strict_bool().map_err(|err| RuntimeError::OperatorTypeError {
            line: node.line,
            column: node.column,
            detail: err.0,
        })?;
        let result = match op {
            "and" => a && b,
            "or" => a || b,
            "xor" => a != b,
            _ => unreachable!(),
        };
        return Ok(Value::Boolean(result));
    }
    Err(RuntimeError::OperatorTypeError {
        line: node.line,
        column: node.column,
        detail: format!("unknown operator `{op}`"),
    })
}

fn eval_comparison(op: &str, left: &Value, right: &Value, line: u32, column: u32) -> Result<Value, RuntimeError> {
    let ordering = left.spaceship(right);
    match op {
        "=" => Ok(Value::Boolean(ordering == Some(std::cmp::Ordering::Equal))),
        "<>" | "/=" => Ok(Value::Boolean(ordering != Some(std::cmp::Ordering::Equal))),
        _ => {
            let Some(ordering) = ordering else {
                return Err(RuntimeError::IllegalComparison { line, column });
            };
            let result = match op {
                "<" => ordering == std::cmp::Ordering::Less,
                "<=" => ordering != std::cmp::Ordering::Greater,
                ">" => ordering == std::cmp::Ordering::Greater,
                ">=" => ordering != std::cmp::Ordering::Less,
                _ => unreachable!(),
            };
            Ok(Value::Boolean(result))
        }
    }
}

fn eval_call(state: &mut State, node: &AstNode) -> Result<Value, RuntimeError> {
    let mut children = node.children.iter();
    let (bucket, instance_ref): (Option<DataType>, Option<Value>) = match node.kind {
        AstKind::FunctionCall => (None, None),
        AstKind::StaticMethodCall => {
            let context = children.next().expect("method call always has a MethodContext child");
            let data_type = DataType::from_name(context.value.display());
            (data_type, None)
        }
        AstKind::InstanceMethodCall => {
            let context = children.next().expect("method call always has a MethodContext child");
            let instance = state.value_ref(context.value.lowered()).ok_or_else(|| RuntimeError::UnknownSymbol {
                line: node.line,
                column: node.column,
                name: context.value.display().to_owned(),
            })?;
            (Some(instance.effective_type()), Some(instance))
        }
        _ => unreachable!("eval_call only handles the three call node kinds"),
    };

    // Kept unresolved (identifiers stay `Reference`s) so `Out` formals can bind by reference;
    // `In` formals and native calls resolve their share of this list individually below.
    let mut args = Vec::new();
    for arg_node in children {
        args.push(eval_expr(state, arg_node)?);
    }

    let entry = match bucket {
        Some(data_type) => state.functions.resolve_method(data_type, node.value.display(), args.len()),
        None => state.functions.resolve(node.value.display(), args.len()),
    }
    .cloned()
    .ok_or_else(|| RuntimeError::UnknownSymbol {
        line: node.line,
        column: node.column,
        name: format!("{}:{}", bucket.map(|b| b.to_string()).unwrap_or_default(), node.value.display()),
    })?;

    match &entry.body {
        FunctionBody::Native(native) => {
            let mut native_args: Vec<Value> = Vec::with_capacity(args.len() + 1);
            if let Some(instance) = instance_ref {
                native_args.push(instance);
            }
            native_args.extend(args.into_iter().map(|arg| arg.resolved()));
            let result = native(&mut native_args).map_err(|err| RuntimeError::OperatorTypeError {
                line: node.line,
                column: node.column,
                detail: err.0,
            })?;
            Ok(result)
        }
        FunctionBody::Ast(body) => call_ast_function(state, &entry, body, args, instance_ref),
    }
}

fn call_ast_function(
    state: &mut State,
    entry: &FunctionEntry,
    body: &Rc<AstNode>,
    mut args: Vec<Value>,
    instance_ref: Option<Value>,
) -> Result<Value, RuntimeError> {
    debug_assert_eq!(
        args.len(),
        entry.params.len(),
        "resolve()/resolve_method() only ever return an entry whose arity matches the call site"
    );

    state.scopes.push_stack();

    if let Some(instance) = instance_ref {
        state
            .scopes
            .declare("this", Symbol::new(instance, Rc::new(RuntimeType { display_name: "Any".to_owned(), data_type: DataType::Any })));
    }

    // `Out` formals are bound as ordinary local values (never a second layer of `Reference` —
    // references never chain, per value.rs's invariant); the caller's lvalue is written back
    // through its own `Reference` once the body has run, emulating by-reference passing via
    // copy-in/copy-out.
    let mut out_writebacks: Vec<(Value, Rc<std::cell::RefCell<Value>>)> = Vec::new();
    for (param, arg) in entry.params.iter().zip(args.drain(..)) {
        let mut slot_value = initial_value_for(param.declared_type.data_type);
        let _ = slot_value.assign(&arg);
        let symbol = Symbol::new(slot_value, Rc::clone(&param.declared_type));
        if param.mode == ParameterMode::Out {
            out_writebacks.push((arg, Rc::clone(&symbol.slot)));
        }
        state.scopes.declare(param.name.clone(), symbol);
    }

    let result = execute_block(state, body);
    let return_value = match result {
        Ok(_) => {
            for (caller_lvalue, local_slot) in &out_writebacks {
                let _ = caller_lvalue.assign(&local_slot.borrow());
            }
            let mut ret = std::mem::replace(&mut state.ret, Value::Undefined);
            ret.dereference();
            Ok(ret)
        }
        Err(err) => Err(err),
    };
    state.scopes.pop_stack();
    return_value
}

#[cfg(test)]
mod tests {
    use super::run_program;
    use crate::parse::parse_program;
    use crate::state::State;

    fn run(source: &str, state: &mut State) {
        let program = parse_program(source).unwrap();
        run_program(state, &program).unwrap();
    }

    #[test]
    fn s1_declaration_and_assignment() {
        let mut state = State::new();
        run("declare x : Natural := 40; x := x + 2;", &mut state);
        assert_eq!(state.value("x").unwrap().display_string(), "42");
    }

    #[test]
    fn if_elsif_else_picks_the_right_branch() {
        let mut state = State::new();
        run(
            r"declare x : Natural := 2;
              declare result : Natural;
              if x = 1 then
                  result := 10;
              elsif x = 2 then
                  result := 20;
              else
                  result := 30;
              end if;",
            &mut state,
        );
        assert_eq!(state.value("result").unwrap().display_string(), "20");
    }

    #[test]
    fn while_loop_with_break() {
        let mut state = State::new();
        run(
            r"declare i : Natural := 0;
              while true loop
                  i := i + 1;
                  break when i = 5;
              end loop;",
            &mut state,
        );
        assert_eq!(state.value("i").unwrap().display_string(), "5");
    }

    #[test]
    fn for_loop_accumulates_over_an_inclusive_range() {
        let mut state = State::new();
        run(
            r"declare total : Natural := 0;
              for i in 1..5 loop
                  total := total + i;
              end loop;",
            &mut state,
        );
        assert_eq!(state.value("total").unwrap().display_string(), "15");
    }

    #[test]
    fn for_loop_with_empty_range_runs_zero_times() {
        let mut state = State::new();
        run(
            r"declare total : Natural := 7;
              for i in 5..1 loop
                  total := 0;
              end loop;",
            &mut state,
        );
        assert_eq!(state.value("total").unwrap().display_string(), "7");
    }

    #[test]
    fn function_call_returns_a_value() {
        let mut state = State::new();
        run(
            r"function add(a : in Number; b : in Number) return Number is
                  return a + b;
              end add;
              declare result : Number := add(1, 2);",
            &mut state,
        );
        assert_eq!(state.value("result").unwrap().display_string(), "3");
    }

    #[test]
    fn out_parameter_writes_back_to_the_caller() {
        let mut state = State::new();
        run(
            r"procedure increment(n : out Natural) is
                  n := n + 1;
              end increment;
              declare counter : Natural := 5;
              increment(counter);",
            &mut state,
        );
        assert_eq!(state.value("counter").unwrap().display_string(), "6");
    }

    #[test]
    fn list_cow_isolation_through_access_and_assignment() {
        let mut state = State::new();
        run(
            r"declare a : List := [1, 2, 3];
              declare b : List := a;
              b[0] := 99;",
            &mut state,
        );
        assert_eq!(state.value("a").unwrap().display_string(), "[1, 2, 3]");
        assert_eq!(state.value("b").unwrap().display_string(), "[99, 2, 3]");
    }

    #[test]
    fn break_outside_a_loop_is_a_diagnostic_not_an_error() {
        let mut state = State::new();
        run("break;", &mut state);
        assert_eq!(state.diagnostics.len(), 1);
    }

    #[test]
    fn comparison_between_incompatible_types_is_illegal() {
        let mut state = State::new();
        let program = crate::parse::parse_program("declare r : Boolean := 1 < \"x\";").unwrap();
        let err = run_program(&mut state, &program).unwrap_err();
        assert!(matches!(err, crate::error::RuntimeError::IllegalComparison { .. }));
    }
}
