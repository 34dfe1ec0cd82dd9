use crate::{
    lang::{parsing::parse_tokens, tokenizing::tokenize_from_source},
    runtime::{
        data_structures::{
            dictionary::{Dictionary, Word, WordKind},
            value::{QuotationPtr, Quotation, Value},
        },
        error::{self, script_error},
        interpreter::{
            CallItem, CallStack, Interpreter, InterpreterStack, ValueStack, WordHandler,
            WordManagement,
        },
    },
};
use std::rc::Rc;

/// The core interpreter implementation.  One instance owns the dictionary, the operand stack,
/// and the call stack for its entire lifetime, and is threaded explicitly through every
/// operation by the driver that constructed it.
pub struct ConcomInterpreter {
    /// The operand stack used by the interpreter.
    stack: ValueStack,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// The call stack used to keep track of the current invocation chain for diagnostics.
    call_stack: CallStack,

    /// The last source line evaluation has reached.
    current_line: usize,
}

impl InterpreterStack for ConcomInterpreter {
    fn stack(&self) -> &ValueStack {
        &self.stack
    }

    fn clear_stack(&mut self) {
        self.stack.clear();
    }

    fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<Value> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None => script_error(self, "stack underflow".to_string()),
        }
    }
}

impl WordManagement for ConcomInterpreter {
    fn current_line(&self) -> usize {
        self.current_line
    }

    fn add_native_word(&mut self, name: &str, handler: Rc<WordHandler>) {
        self.dictionary.define(Word::new_native(name, handler));
    }

    fn add_defined_word(&mut self, name: &str, body: QuotationPtr) {
        self.dictionary.define(Word::new_defined(name, body));
    }

    fn find_word(&self, name: &str) -> Option<&Word> {
        self.dictionary.lookup(name)
    }

    fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }
}

impl Interpreter for ConcomInterpreter {
    fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn evaluate(&mut self, quotation: &Quotation) -> error::Result<()> {
        for item in quotation.items() {
            match item {
                Value::Symbol(symbol) => {
                    self.current_line = symbol.line();

                    if symbol.is_frozen() {
                        self.stack.push(item.clone());
                    } else {
                        match self.find_word(symbol.name()).cloned() {
                            Some(word) => self.invoke(&word, symbol.line())?,
                            None => {
                                return script_error(
                                    self,
                                    format!("unknown word `{}'", symbol.name()),
                                );
                            }
                        }
                    }
                }

                Value::Quotation(_) => self.stack.push(item.clone()),
            }
        }

        Ok(())
    }

    fn invoke(&mut self, word: &Word, line: usize) -> error::Result<()> {
        self.call_stack
            .push(CallItem::new(line, word.name().to_string()));

        let result = match word.kind() {
            WordKind::Native(handler) => {
                let handler = handler.clone();
                (*handler)(self)
            }

            WordKind::Defined(body) => {
                let body = body.clone();
                self.evaluate(&body)
            }
        };

        let _ = self.call_stack.pop();

        result
    }

    fn process_source(&mut self, source: &str) -> error::Result<()> {
        let tokens = tokenize_from_source(source);
        let program = parse_tokens(tokens, self)?;

        self.evaluate(&program)
    }
}

impl ConcomInterpreter {
    pub fn new() -> ConcomInterpreter {
        ConcomInterpreter {
            stack: Vec::with_capacity(10),
            dictionary: Dictionary::new(),
            call_stack: CallStack::with_capacity(40),
            current_line: 1,
        }
    }
}

impl Default for ConcomInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
