use std::process::{Command, Output};

/// Run the lectern binary with arguments.
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lectern"));
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}
