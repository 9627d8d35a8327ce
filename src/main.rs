// src/main.rs

pub mod bounds;
pub mod compute;
pub mod config;
pub mod counter;
pub mod error;
pub mod platform;
pub mod runner;
pub mod util;

use std::process::ExitCode;

fn main() -> ExitCode {
    match runner::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
