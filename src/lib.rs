//! An interpreter for a small concatenative scripting language.
//!
//! Programs are sequences of whitespace separated tokens.  A lowercase token names a word to be
//! invoked, an uppercase token is a frozen symbol pushed onto the stack as data, `[ ... ]` builds
//! a quotation, a first-class block of unevaluated code, and `: name ... ;` binds a quotation to
//! a name in the word dictionary.
//!
//! The crate is split into two halves.  The `lang` module turns source text into a tree of
//! quotations.  The `runtime` module holds the values, the word dictionary, and the stack
//! evaluator that executes those trees.

/// Module for managing source code and turning it into a quotation tree.
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
pub mod runtime;
