// src/main.rs
use std::env;
use std::io;
use std::ops::ControlFlow;
use std::process::ExitCode;
use tracing::Level;

use photofind::{parse_args, run};

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args(env::args_os()) {
        ControlFlow::Continue(args) => args,
        ControlFlow::Break(code) => return code,
    };

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}
