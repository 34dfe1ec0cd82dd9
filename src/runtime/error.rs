use crate::runtime::interpreter::{CallStack, Interpreter};
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};

pub type Result<T> = std::result::Result<T, ScriptError>;

/// The recoverable error classes.  Allocation exhaustion is not represented here, growth of any
/// of the interpreter's containers aborts the process if the allocator fails.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed nesting found while parsing.  Nothing from the failed program unit is
    /// evaluated, but the caller may move on to its next input unit.
    Parse,

    /// A failure during evaluation, such as a stack underflow, a wrongly typed operand, or an
    /// unknown word.  Evaluation of the current program unit aborts.
    Runtime,
}

/// Any recoverable error that occurs while running a script.
#[derive(Clone)]
pub struct ScriptError {
    /// Which phase the error came from.
    kind: ErrorKind,

    /// The source line the error occurred on, if available.
    line: Option<usize>,

    /// The description of the error.
    error: String,

    /// The script's call stack at the time of the error, if available.
    call_stack: Option<CallStack>,
}

impl Error for ScriptError {}

/// Pretty print the error the way the drivers report it.  The call stack, when present, is
/// printed innermost frame first so the failure point reads top down.
impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Parse => write!(f, "parse error")?,
            ErrorKind::Runtime => write!(f, "runtime error")?,
        }

        if let Some(line) = self.line {
            write!(f, ": {}", line)?;
        }

        write!(f, ": {}", self.error)?;

        if let Some(call_stack) = &self.call_stack {
            if !call_stack.is_empty() {
                write!(f, "\n\nCall stack\n")?;

                for item in call_stack.iter().rev() {
                    writeln!(f, "  {}", item)?;
                }
            }
        }

        Ok(())
    }
}

impl Debug for ScriptError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ScriptError {
    /// Create a new ScriptError.
    pub fn new(
        kind: ErrorKind,
        line: Option<usize>,
        error: String,
        call_stack: Option<CallStack>,
    ) -> ScriptError {
        ScriptError {
            kind,
            line,
            error,
            call_stack,
        }
    }

    /// Create a new ScriptError and wrap it in a Result::Err.
    pub fn new_as_result<T>(
        kind: ErrorKind,
        line: Option<usize>,
        error: String,
        call_stack: Option<CallStack>,
    ) -> Result<T> {
        Err(ScriptError::new(kind, line, error, call_stack))
    }

    /// Which phase the error came from.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// If available, the source line the error occurred on.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// The description of the error.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// If available, the script's call stack at the time of the error.
    pub fn call_stack(&self) -> &Option<CallStack> {
        &self.call_stack
    }
}

/// A convenience function for creating a parse error at the given source line and wrapping it
/// in a Result::Err.
pub fn parse_error<T>(line: usize, message: String) -> Result<T> {
    ScriptError::new_as_result(ErrorKind::Parse, Some(line), message, None)
}

pub fn parse_error_str<T>(line: usize, message: &str) -> Result<T> {
    parse_error(line, message.to_string())
}

/// A convenience function for creating a runtime error using the interpreter's current source
/// line and a snapshot of its live call stack.  The frames are cloned here, at the moment of
/// failure, so the full chain stays visible while the frames themselves unwind as the error
/// propagates.
pub fn script_error<T>(interpreter: &dyn Interpreter, message: String) -> Result<T> {
    let line = interpreter.current_line();
    let call_stack = interpreter.call_stack().clone();

    ScriptError::new_as_result(ErrorKind::Runtime, Some(line), message, Some(call_stack))
}

pub fn script_error_str<T>(interpreter: &dyn Interpreter, message: &str) -> Result<T> {
    script_error(interpreter, message.to_string())
}
