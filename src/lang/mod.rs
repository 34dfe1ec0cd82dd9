/// Module for managing the original source code.
pub mod source_buffer;

/// Module for turning the source code into a list of tokens for further processing.
pub mod tokenizing;

/// Module for parsing a token list into a tree of quotations.  Word definitions are installed
/// into the interpreter's dictionary as they are parsed, so this phase requires an active
/// interpreter.
pub mod parsing;
