//! Built-in method packs for `list` and `string`, loaded either eagerly by the embedder
//! (`Runtime::load_addon_ada_list`/`load_addon_ada_string`) or lazily by an in-script
//! `with "ada.list";`/`with "ada.string";` statement via `State::on_with`.

pub mod ada_list;
pub mod ada_string;

use std::rc::Rc;

use crate::function::{FormalParameter, ParameterMode};
use crate::ident::Ident;
use crate::types::{DataType, RuntimeType};

/// An `in any`-mode formal, the shape every addon method below takes its arguments as (the
/// original C++ addons are just as permissive: `{"v", "any", Nda::InMode}`).
fn any_formal(name: &str) -> FormalParameter {
    FormalParameter {
        name: Ident::from(name),
        mode: ParameterMode::In,
        declared_type: Rc::new(RuntimeType {
            display_name: "Any".to_owned(),
            data_type: DataType::Any,
        }),
    }
}

/// An `in Number`-mode formal, for the addon methods whose original C++ signature pins the
/// parameter to a numeric type (`AdaList.cc`'s `insert`: `{"p", "Number", Nda::InMode}`).
fn number_formal(name: &str) -> FormalParameter {
    FormalParameter {
        name: Ident::from(name),
        mode: ParameterMode::In,
        declared_type: Rc::new(RuntimeType {
            display_name: "Number".to_owned(),
            data_type: DataType::Number,
        }),
    }
}

fn natural_return_type() -> Rc<RuntimeType> {
    Rc::new(RuntimeType {
        display_name: "Natural".to_owned(),
        data_type: DataType::Natural,
    })
}
