//! `string.length`, grounded on `addons/AdaString.cc`'s `add_AdaString_symbols`.

use crate::addons::natural_return_type;
use crate::function::{FunctionBody, FunctionEntry, FunctionTable, NativeBody};
use crate::ident::Ident;
use crate::value::{OpError, Value};
use std::rc::Rc;

fn length_body() -> NativeBody {
    Rc::new(|args: &mut [Value]| -> Result<Value, OpError> {
        Ok(Value::Natural(args[0].resolved().length()))
    })
}

pub fn register(functions: &mut FunctionTable) {
    functions.bind_method(
        crate::types::DataType::String,
        FunctionEntry {
            name: Ident::from("length"),
            params: vec![],
            returns: Some(natural_return_type()),
            body: FunctionBody::Native(length_body()),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::register;
    use crate::function::{FunctionBody, FunctionTable};
    use crate::types::DataType;
    use crate::value::Value;

    #[test]
    fn length_counts_bytes() {
        let mut table = FunctionTable::new();
        register(&mut table);
        let entry = table.resolve_method(DataType::String, "length", 0).unwrap();
        let mut args = vec![Value::new_string("hello")];
        let FunctionBody::Native(native) = &entry.body else {
            panic!("expected a native body")
        };
        assert_eq!(native(&mut args).unwrap().display_string(), "5");
    }
}
