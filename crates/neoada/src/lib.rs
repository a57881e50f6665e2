#![doc = include_str!("../../../README.md")]

mod addons;
mod ast;
mod diagnostics;
mod error;
mod function;
mod ident;
mod interpreter;
mod io;
mod lexer;
mod numeric;
mod parse;
mod runtime;
mod state;
mod symbol;
mod token;
mod types;
mod value;

pub use crate::{
    diagnostics::{Diagnostic, DiagnosticKind},
    error::{LexError, NeoAdaError, RuntimeError, StaticError, SyntaxError},
    function::{FormalParameter, FunctionBody, FunctionEntry, NativeBody, ParameterMode},
    ident::Ident,
    io::{CollectStringPrint, NoPrint, PrintWriter, StdPrint},
    runtime::Runtime,
    state::{SharedPrintWriter, State},
    types::{DataType, RuntimeType},
    value::{OpError, Value},
};
