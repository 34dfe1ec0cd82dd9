use concom::runtime::{
    built_ins::core_words::register_core_words,
    data_structures::value::render_stack,
    error::ErrorKind,
    interpreter::{Interpreter, InterpreterStack, concom_interpreter::ConcomInterpreter},
};
use linefeed::{Interface, ReadResult};
use std::{
    env::args,
    fs::File,
    io::Read,
    process::ExitCode,
};

/// A batch mode program is read from the front of the file, bounded to 16 KiB.
const BATCH_SOURCE_LIMIT: u64 = 16 * 1024;

fn main() -> ExitCode {
    // Create the core instance of the interpreter and register the builtin words.  One
    // interpreter owns the dictionary and stack for the whole run.
    let mut interpreter = ConcomInterpreter::new();

    register_core_words(&mut interpreter);

    let args: Vec<String> = args().collect();

    match args.len() {
        1 => run_interactive(&mut interpreter),
        2 => run_batch(&mut interpreter, &args[1]),
        _ => {
            eprintln!("usage: {} [script]", args[0]);
            ExitCode::FAILURE
        }
    }
}

/// Interactive mode.  Each line is parsed and evaluated as an independent top level program
/// against the persistent interpreter.  On success the resulting stack is printed, on error the
/// report is printed and the loop simply moves on to the next line.  End of input exits with
/// code 0.
fn run_interactive(interpreter: &mut ConcomInterpreter) -> ExitCode {
    let interface = match Interface::new("concom") {
        Ok(interface) => interface,
        Err(error) => {
            eprintln!("could not open terminal: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = interface.set_prompt(">>> ") {
        eprintln!("could not set prompt: {}", error);
        return ExitCode::FAILURE;
    }

    loop {
        match interface.read_line() {
            Ok(ReadResult::Input(line)) => {
                if !line.trim().is_empty() {
                    interface.add_history_unique(line.clone());
                }

                match interpreter.process_source(&line) {
                    Ok(()) => println!("{}", render_stack(interpreter.stack())),
                    Err(error) => eprintln!("{}", error),
                }
            }

            Ok(ReadResult::Eof) | Ok(ReadResult::Signal(_)) => break,

            Err(error) => {
                eprintln!("{}", error);
                break;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Batch mode.  The file is read once, bounded to 16 KiB, and run as a single program.  A file
/// that can not be opened or a failed parse exits with code 1.  A runtime error is reported but
/// still exits with code 0.
fn run_batch(interpreter: &mut ConcomInterpreter, path: &str) -> ExitCode {
    let source = match read_bounded(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("open: {}: {}", path, error);
            return ExitCode::FAILURE;
        }
    };

    match interpreter.process_source(&source) {
        Ok(()) => {
            println!("{}", render_stack(interpreter.stack()));
            ExitCode::SUCCESS
        }

        Err(error) => {
            eprintln!("{}", error);

            match error.kind() {
                ErrorKind::Parse => ExitCode::FAILURE,
                ErrorKind::Runtime => ExitCode::SUCCESS,
            }
        }
    }
}

/// Read at most BATCH_SOURCE_LIMIT bytes of the file as the program text.
fn read_bounded(path: &str) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut bytes = Vec::new();

    file.take(BATCH_SOURCE_LIMIT).read_to_end(&mut bytes)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
