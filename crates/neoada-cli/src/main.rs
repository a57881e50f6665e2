use std::io::Read as _;
use std::rc::Rc;
use std::time::Instant;
use std::{env, fs, process::ExitCode};

use neoada::{
    DataType, FormalParameter, FunctionBody, FunctionEntry, Ident, ParameterMode, Runtime, RuntimeType, StdPrint,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let code = match read_source(args.get(1).map(String::as_str)) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut runtime = Runtime::new();
    runtime.state_mut().set_print_writer(Box::new(StdPrint));
    bind_print(&mut runtime);
    runtime.load_addon_ada_list();
    runtime.load_addon_ada_string();

    let start = Instant::now();
    let span = tracing::debug_span!("run_script");
    let result = span.in_scope(|| runtime.run_script(&code));
    let elapsed = start.elapsed();

    for diagnostic in &runtime.state().diagnostics {
        eprintln!("{diagnostic}");
    }

    match result {
        Ok(value) => {
            tracing::debug!(?elapsed, %value, "script finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Registers `print(message : any)`, writing through the shared handle installed on `State` so
/// it lands wherever the embedder pointed `print_writer` (here, standard output).
fn bind_print(runtime: &mut Runtime) {
    let writer = runtime.state().print_writer_handle();
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
            let mut writer = writer.borrow_mut();
            writer.write_str(&args[0].resolved().display_string());
            writer.write_newline();
            Ok(neoada::Value::Undefined)
        })),
    });
}

fn read_source(file_path: Option<&str>) -> Result<String, String> {
    let Some(file_path) = file_path else {
        let mut buf = String::new();
        return std::io::stdin()
            .read_to_string(&mut buf)
            .map(|_| buf)
            .map_err(|err| format!("error reading stdin: {err}"));
    };

    match fs::metadata(file_path) {
        Ok(metadata) if !metadata.is_file() => return Err(format!("{file_path} is not a file")),
        Ok(_) => {}
        Err(err) => return Err(format!("error reading {file_path}: {err}")),
    }
    fs::read_to_string(file_path).map_err(|err| format!("error reading file: {err}"))
}
