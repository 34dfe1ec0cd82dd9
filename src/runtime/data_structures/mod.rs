/// Module containing the Value enumeration and the symbol and quotation objects it shares.
/// Values are the only data the interpreter and the underlying scripts can manipulate.
pub mod value;

/// The dictionary module provides the word dictionary used by the interpreter.
pub mod dictionary;
