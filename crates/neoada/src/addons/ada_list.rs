//! `list.length/append/insert/concat`, grounded on `addons/AdaList.cc`'s `add_AdaList_symbols`.
//!
//! Every method here is bound to the `List` type bucket; the receiver arrives as
//! `native_args[0]`, a `Value::Reference` aliasing the caller's variable, exactly like the
//! original's `args.at("this")`.

use std::rc::Rc;

use crate::addons::{any_formal, natural_return_type, number_formal};
use crate::function::{FunctionBody, FunctionEntry, FunctionTable, NativeBody};
use crate::ident::Ident;
use crate::value::{OpError, Value};

fn as_insert_position(value: &Value) -> Result<usize, OpError> {
    match value.resolved() {
        Value::Natural(n) if n >= 0 => Ok(n as usize),
        Value::Number(n) if n.fract() == 0.0 && n >= 0.0 => Ok(n as usize),
        _ => Err(OpError("insert position must be a non-negative integer".to_owned())),
    }
}

fn length_body() -> NativeBody {
    Rc::new(|args: &mut [Value]| -> Result<Value, OpError> {
        Ok(Value::Natural(args[0].resolved().list_len().unwrap_or(0) as i64))
    })
}

fn append_body() -> NativeBody {
    Rc::new(|args: &mut [Value]| -> Result<Value, OpError> {
        let element = args[1].clone();
        args[0].append_to_list(element)?;
        Ok(Value::Undefined)
    })
}

fn insert_body() -> NativeBody {
    Rc::new(|args: &mut [Value]| -> Result<Value, OpError> {
        let pos = as_insert_position(&args[1])?;
        let element = args[2].clone();
        args[0].insert_into_list(pos, element)?;
        Ok(Value::Undefined)
    })
}

fn concat_body() -> NativeBody {
    Rc::new(|args: &mut [Value]| -> Result<Value, OpError> {
        let joined = args[0].concat(&args[1])?;
        args[0].assign(&joined)?;
        Ok(Value::Undefined)
    })
}

pub fn register(functions: &mut FunctionTable) {
    functions.bind_method(
        crate::types::DataType::List,
        FunctionEntry {
            name: Ident::from("length"),
            params: vec![],
            returns: Some(natural_return_type()),
            body: FunctionBody::Native(length_body()),
        },
    );
    functions.bind_method(
        crate::types::DataType::List,
        FunctionEntry {
            name: Ident::from("append"),
            params: vec![any_formal("v")],
            returns: None,
            body: FunctionBody::Native(append_body()),
        },
    );
    functions.bind_method(
        crate::types::DataType::List,
        FunctionEntry {
            name: Ident::from("insert"),
            params: vec![number_formal("p"), any_formal("v")],
            returns: None,
            body: FunctionBody::Native(insert_body()),
        },
    );
    functions.bind_method(
        crate::types::DataType::List,
        FunctionEntry {
            name: Ident::from("concat"),
            params: vec![any_formal("v")],
            returns: None,
            body: FunctionBody::Native(concat_body()),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::register;
    use crate::function::FunctionTable;
    use crate::types::DataType;
    use crate::value::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn append_writes_back_through_the_receiver_reference() {
        let mut table = FunctionTable::new();
        register(&mut table);
        let entry = table.resolve_method(DataType::List, "append", 1).unwrap();
        let slot = Rc::new(RefCell::new(Value::new_list(vec![Value::Natural(1)])));
        let mut args = vec![Value::reference_to_slot(Rc::clone(&slot)), Value::Natural(2)];
        let crate::function::FunctionBody::Native(native) = &entry.body else {
            panic!("expected a native body")
        };
        native(&mut args).unwrap();
        assert_eq!(slot.borrow().list_len(), Some(2));
    }

    #[test]
    fn length_reports_element_count() {
        let mut table = FunctionTable::new();
        register(&mut table);
        let entry = table.resolve_method(DataType::List, "length", 0).unwrap();
        let mut args = vec![Value::new_list(vec![Value::Natural(1), Value::Natural(2), Value::Natural(3)])];
        let crate::function::FunctionBody::Native(native) = &entry.body else {
            panic!("expected a native body")
        };
        assert_eq!(native(&mut args).unwrap().display_string(), "3");
    }
}
