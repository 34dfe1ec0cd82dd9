use crate::runtime::{data_structures::value::QuotationPtr, interpreter::WordHandler};
use std::{collections::HashMap, rc::Rc};

/// The behavior bound to a word.  Either a native operation implemented in Rust against the
/// interpreter's state, or the body quotation of a user definition.
#[derive(Clone)]
pub enum WordKind {
    /// The word is implemented natively in Rust.
    Native(Rc<WordHandler>),

    /// The word was defined in the language with `: name ... ;`.
    Defined(QuotationPtr),
}

/// A named operation in the dictionary.
#[derive(Clone)]
pub struct Word {
    name: String,
    kind: WordKind,
}

impl Word {
    /// Create a new native word.
    pub fn new_native(name: &str, handler: Rc<WordHandler>) -> Word {
        Word {
            name: name.to_string(),
            kind: WordKind::Native(handler),
        }
    }

    /// Create a new user defined word with the given body quotation.
    pub fn new_defined(name: &str, body: QuotationPtr) -> Word {
        Word {
            name: name.to_string(),
            kind: WordKind::Defined(body),
        }
    }

    /// The name of the word.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The behavior bound to the word.
    pub fn kind(&self) -> &WordKind {
        &self.kind
    }
}

/// The word dictionary used by the interpreter.  Lookup happens by name when a word is actually
/// invoked, not when its call site is parsed.  This is what lets a definition refer to itself or
/// to words that have not been defined yet.
///
/// Defining a name that already exists replaces the old binding, the last definition wins.
/// There is no undefine.
pub struct Dictionary {
    words: HashMap<String, Word>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a word into the dictionary, replacing any previous binding of the same name.
    pub fn define(&mut self, word: Word) {
        let _ = self.words.insert(word.name().to_string(), word);
    }

    /// Try to get a word from the dictionary by name.
    pub fn lookup(&self, name: &str) -> Option<&Word> {
        self.words.get(name)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
