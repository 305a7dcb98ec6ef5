use clap::{ArgAction, Parser};
use libls8::{Cpu, ExecutionState};
use ls8_emu::{loader, trace};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run an LS-8 program file", long_about = None)]
struct Args {
    /// Path to the .ls8 program file
    program: PathBuf,

    /// Print a machine state trace line to stderr before every instruction
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let memory = match loader::load_file(&args.program) {
        Ok(memory) => memory,
        Err(err) => {
            eprintln!("ls8: {}: {}", args.program.display(), err);
            return ExitCode::from(2);
        }
    };

    let mut cpu = Cpu::new(memory);
    let mut stdout = io::stdout();

    loop {
        if args.trace {
            eprintln!("{}", trace::trace_line(&cpu));
        }

        let outcome = cpu.step();

        // Drain printed bytes after every instruction so output stays
        // live for long-running programs.
        let output = cpu.take_output();
        if !output.is_empty() {
            let written = stdout.write_all(&output).and_then(|_| stdout.flush());
            if written.is_err() {
                return ExitCode::from(1);
            }
        }

        match outcome {
            Ok(ExecutionState::Running) => {}
            Ok(ExecutionState::Halted) => return ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("ls8: {}", err);
                eprintln!("{}", trace::trace_line(&cpu));
                return ExitCode::from(1);
            }
        }
    }
}
