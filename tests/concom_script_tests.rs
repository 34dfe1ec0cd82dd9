// Behavior tests for the language core.  Each case runs one source program through a fresh
// interpreter and compares the rendered stack against the expected text, in the exact format
// the `show` word prints.

use concom::runtime::built_ins::core_words::register_core_words;
use concom::runtime::data_structures::value::{Value, render_stack};
use concom::runtime::error::Result;
use concom::runtime::interpreter::concom_interpreter::ConcomInterpreter;
use concom::runtime::interpreter::{Interpreter, InterpreterStack};
use std::rc::Rc;
use test_case::test_case;

fn new_interpreter() -> ConcomInterpreter {
    let mut interpreter = ConcomInterpreter::new();

    register_core_words(&mut interpreter);
    interpreter
}

fn eval_and_render(source: &str) -> Result<String> {
    let mut interpreter = new_interpreter();

    interpreter.process_source(source)?;
    Ok(render_stack(interpreter.stack()))
}

#[test_case("FOO BAR", "2: FOO BAR "; "two literals")]
#[test_case("[ FOO BAR ]", "1: [ FOO BAR ] "; "quotation literal")]
#[test_case(": double dup cat ; [ FOO ] double", "1: [ FOO FOO ] "; "defined word")]
#[test_case("FOO BAR swap", "2: BAR FOO "; "swap exchanges the top two")]
#[test_case("", "0: "; "empty program leaves an empty stack")]
#[test_case("[ [ FOO ] BAR ]", "1: [ [ FOO ] BAR ] "; "nested quotation literal")]
#[test_case("[ ]", "1: [ ] "; "empty quotation literal")]
#[test_case("FOO # BAR baz", "1: FOO "; "comment runs to end of line")]
#[test_case("FOO\nBAR", "2: FOO BAR "; "line breaks separate tokens")]
#[test_case("FOO unit", "1: [ FOO ] "; "unit wraps a symbol")]
#[test_case("[ FOO ] unit", "1: [ [ FOO ] ] "; "unit wraps a quotation")]
#[test_case("FOO BAR zap", "1: FOO "; "zap discards the top")]
#[test_case("FOO BAR empty", "0: "; "empty clears the stack")]
#[test_case("[ FOO BAR ] i", "2: FOO BAR "; "i evaluates a quotation in place")]
#[test_case("[ [ FOO ] ] i", "1: [ FOO ] "; "i pushes nested quotations verbatim")]
#[test_case("FOO [ BAR ] cons", "1: [ FOO BAR ] "; "cons prefixes a value")]
#[test_case("[ FOO ] [ BAR ] cat", "1: [ FOO BAR ] "; "cat concatenates")]
#[test_case("FOO BAR [ zap ] dip", "1: BAR "; "dip evaluates under the top")]
#[test_case("FOO BAR [ unit ] dip", "2: [ FOO ] BAR "; "dip pushes the set aside value back")]
#[test_case("FOO dup", "2: FOO FOO "; "dup copies a symbol")]
#[test_case("[ FOO ] dup", "2: [ FOO ] [ FOO ] "; "dup copies a quotation")]
#[test_case(": f FOO ; : f BAR ; f", "1: BAR "; "last definition wins")]
#[test_case(": g h ; : h FOO ; g", "1: FOO "; "forward reference resolves at invocation")]
#[test_case(": x'2 FOO ; x'2", "1: FOO "; "word names allow digits and apostrophes")]
#[test_case("ZAPFOO", "1: ZAPFOO "; "frozen symbols are never looked up")]
fn program_leaves_expected_stack(source: &str, expected: &str) {
    assert_eq!(eval_and_render(source).unwrap(), expected);
}

// The algebraic properties of the builtins, checked by running two programs that must leave
// identical stacks.

#[test_case("FOO unit", "[ FOO ]"; "unit builds a singleton")]
#[test_case("FOO BAR dup zap", "FOO BAR"; "dup zap is a no-op")]
#[test_case("[ FOO ] dup zap", "[ FOO ]"; "dup zap is a no-op for quotations")]
#[test_case("FOO BAR swap swap", "FOO BAR"; "swap swap restores order")]
#[test_case("[ AA BB CC ] i", "AA BB CC"; "i is equivalent to inlining")]
#[test_case(
    "[ AA ] [ BB ] cat [ CC ] cat",
    "[ AA ] [ BB ] [ CC ] cat cat";
    "cat is associative"
)]
fn programs_are_equivalent(left: &str, right: &str) {
    assert_eq!(eval_and_render(left).unwrap(), eval_and_render(right).unwrap());
}

#[test]
fn definitions_land_in_the_dictionary() {
    let mut interpreter = new_interpreter();

    interpreter.process_source(": double dup cat ;").unwrap();

    assert!(interpreter.dictionary().lookup("double").is_some());
    assert!(interpreter.dictionary().lookup("triple").is_none());
}

#[test]
fn definitions_persist_across_program_units() {
    let mut interpreter = new_interpreter();

    interpreter.process_source(": double dup cat ;").unwrap();
    interpreter.process_source("[ FOO ] double").unwrap();

    assert_eq!(render_stack(interpreter.stack()), "1: [ FOO FOO ] ");
}

#[test]
fn dup_shallow_copies_the_item_list() {
    let mut interpreter = new_interpreter();

    interpreter.process_source("[ [ AA ] ] dup").unwrap();

    let stack = interpreter.stack();
    let (original, copy) = match (&stack[0], &stack[1]) {
        (Value::Quotation(original), Value::Quotation(copy)) => (original, copy),
        _ => panic!("expected two quotations on the stack"),
    };

    // The copy has its own item list but the nested quotation is aliased, not cloned.
    assert!(!Rc::ptr_eq(original, copy));

    match (&original.items()[0], &copy.items()[0]) {
        (Value::Quotation(inner_original), Value::Quotation(inner_copy)) => {
            assert!(Rc::ptr_eq(inner_original, inner_copy));
        }
        _ => panic!("expected nested quotations"),
    }
}

#[test]
fn dup_shares_a_symbol_outright() {
    let mut interpreter = new_interpreter();

    interpreter.process_source("FOO dup").unwrap();

    let stack = interpreter.stack();

    match (&stack[0], &stack[1]) {
        (Value::Symbol(original), Value::Symbol(copy)) => {
            assert!(Rc::ptr_eq(original, copy));
        }
        _ => panic!("expected two symbols on the stack"),
    }
}

#[test]
fn recursion_grows_the_stack_each_round() {
    // A word may invoke itself because lookup happens at call time.  Bottom out by erroring on
    // an empty stack rather than recursing forever.
    let mut interpreter = new_interpreter();

    let result = interpreter.process_source(": shrink zap shrink ; FOO BAR BAZ shrink");

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().error(), "stack underflow");
    assert!(interpreter.stack().is_empty());
}
