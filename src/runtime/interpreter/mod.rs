use crate::runtime::{
    data_structures::{
        dictionary::{Dictionary, Word},
        value::{QuotationPtr, Quotation, Value},
    },
    error,
};
use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

pub mod concom_interpreter;

/// A call stack item is a record of one in-flight user word invocation, the name of the word
/// and the source line of its call site.  These items are read-only and exist purely so that
/// runtime errors can report a backtrace.  They are never used for control flow.
#[derive(Clone)]
pub struct CallItem {
    line: usize,
    word: String,
}

impl CallItem {
    /// Create a new call stack item.
    pub fn new(line: usize, word: String) -> CallItem {
        CallItem { line, word }
    }

    /// The source line the word was invoked from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The name of the word being executed.
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Make sure the frame can be nicely displayed to the user in the event of an error.
impl Display for CallItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.word)
    }
}

/// The chain of call items currently being executed by the interpreter.  The chain mirrors the
/// evaluator's live invocation depth, growing on invoke and shrinking on return, including the
/// error return path.
pub type CallStack = Vec<CallItem>;

/// The operand stack of values managed by the interpreter.
pub type ValueStack = Vec<Value>;

/// Definition of a word handler function.  This is the function that is called when a native
/// word is executed.  It operates directly on the interpreter's state and must leave its
/// results on the stack or signal an error.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// Trait for managing the interpreter's operand stack.  Intended to be called by words, both
/// native and scripted.  The stack is the sole mutable shared state every operation touches.
pub trait InterpreterStack {
    /// Use to examine the full operand stack when required, for example by the `show` word.
    fn stack(&self) -> &ValueStack;

    /// Discard the entire stack.  Used by the `empty` word.
    fn clear_stack(&mut self);

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: Value);

    /// Pop a value from the stack.  This is the primary way of receiving inputs within words.
    /// If the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Value>;
}

/// Trait for managing the words known to the interpreter and the diagnostic state that goes
/// with invoking them.
pub trait WordManagement {
    /// The source line evaluation last reached.  Used when reporting runtime errors and when
    /// builtins synthesize new objects.
    fn current_line(&self) -> usize;

    /// Bind a native operation to a name.  Rebinding an existing name replaces it.
    fn add_native_word(&mut self, name: &str, handler: Rc<WordHandler>);

    /// Bind a user defined body quotation to a name.  Rebinding an existing name replaces it.
    fn add_defined_word(&mut self, name: &str, body: QuotationPtr);

    /// Find a word in the interpreter's dictionary by name.
    fn find_word(&self, name: &str) -> Option<&Word>;

    /// The current script execution call stack.
    fn call_stack(&self) -> &CallStack;
}

/// Core interpreter trait, bringing together the stack and word management along with
/// evaluation itself.
///
/// Evaluation of a user word's body recurses through the host call stack.  A word that invokes
/// itself, directly or transitively, grows both the call frame chain and the native stack
/// without bound.  Exhausting the native stack this way is a documented limitation of the
/// caller, not a checked error.
pub trait Interpreter: InterpreterStack + WordManagement {
    /// The dictionary of words known by the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// Execute a quotation's items in order against the operand stack.  Frozen symbols and
    /// nested quotations are pushed verbatim, non-frozen symbols are looked up in the
    /// dictionary and invoked.  An unknown word aborts the whole evaluation.
    fn evaluate(&mut self, quotation: &Quotation) -> error::Result<()>;

    /// Invoke a bound word from the given call site line.  A call frame is pushed for the
    /// duration of the invocation and popped on return, on the error path as well.
    fn invoke(&mut self, word: &Word, line: usize) -> error::Result<()>;

    /// Run one source string as a complete program unit: tokenize, parse (installing any word
    /// definitions), and evaluate the resulting top level quotation.
    fn process_source(&mut self, source: &str) -> error::Result<()>;
}
