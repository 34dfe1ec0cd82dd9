// Tests for the parse and runtime error reporting, including message text, source lines, and
// the call stack backtrace.

use concom::runtime::built_ins::core_words::register_core_words;
use concom::runtime::data_structures::value::render_stack;
use concom::runtime::error::{ErrorKind, ScriptError};
use concom::runtime::interpreter::concom_interpreter::ConcomInterpreter;
use concom::runtime::interpreter::{Interpreter, InterpreterStack, WordManagement};
use test_case::test_case;

fn new_interpreter() -> ConcomInterpreter {
    let mut interpreter = ConcomInterpreter::new();

    register_core_words(&mut interpreter);
    interpreter
}

fn eval_expecting_error(source: &str) -> ScriptError {
    let mut interpreter = new_interpreter();

    interpreter.process_source(source).unwrap_err()
}

#[test_case(": f : g ;", "can't define inside a definition"; "definition inside definition")]
#[test_case(": f FOO ; : f : g ;", "can't define inside a definition"; "second definition nests")]
#[test_case("[ : f ;", "can't define inside a quotation"; "definition inside quotation")]
#[test_case(": [ ] ;", "expecting word after definition"; "name is not a word")]
#[test_case(": FOO dup ;", "expecting word after definition"; "name can not be a symbol")]
#[test_case(":", "expecting word after definition"; "name missing at end of input")]
#[test_case(";", "unexpected `;': not inside a definition"; "stray end of definition")]
#[test_case(": f [ ;", "mismatched quotes inside of `f'"; "open quote at end of definition")]
#[test_case("]", "unexpected `]': no matching `['"; "stray end of quotation")]
#[test_case("[ FOO", "unterminated quotation: expecting `]'"; "open quote at end of input")]
#[test_case(": f FOO", "unterminated definition `f': expecting `;'"; "open definition at end of input")]
fn malformed_nesting_is_a_parse_error(source: &str, expected: &str) {
    let error = eval_expecting_error(source);

    assert!(error.kind() == ErrorKind::Parse);
    assert_eq!(error.error(), expected);
}

#[test_case("nosuchword", "unknown word `nosuchword'"; "unknown word")]
#[test_case("zap", "stack underflow"; "zap on an empty stack")]
#[test_case("unit", "stack underflow"; "unit on an empty stack")]
#[test_case("dup", "stack underflow"; "dup on an empty stack")]
#[test_case("FOO swap", "stack underflow"; "swap with one item")]
#[test_case("FOO i", "can't evaluate a non-quotation object"; "i on a symbol")]
#[test_case("FOO BAR cons", "cons: quotation expected"; "cons without a quotation")]
#[test_case("FOO BAR dip", "dip: quotation expected"; "dip without a quotation")]
#[test_case("[ FOO ] BAR cat", "cat: quotation expected"; "cat with a symbol on top")]
#[test_case("FOO [ BAR ] cat", "cat: quotation expected"; "cat with a symbol underneath")]
fn runtime_failures_report_the_cause(source: &str, expected: &str) {
    let error = eval_expecting_error(source);

    assert!(error.kind() == ErrorKind::Runtime);
    assert_eq!(error.error(), expected);
}

#[test]
fn unknown_word_at_top_level_has_an_empty_backtrace() {
    let mut interpreter = new_interpreter();

    let error = interpreter.process_source("nosuchword").unwrap_err();

    assert!(error.call_stack().as_ref().unwrap().is_empty());
    assert!(interpreter.stack().is_empty());
    assert!(!error.to_string().contains("Call stack"));
}

#[test]
fn interpreter_recovers_after_a_runtime_error() {
    let mut interpreter = new_interpreter();

    assert!(interpreter.process_source("zap").is_err());
    interpreter.process_source("FOO").unwrap();

    assert_eq!(render_stack(interpreter.stack()), "1: FOO ");
}

#[test]
fn interpreter_recovers_after_a_parse_error() {
    let mut interpreter = new_interpreter();

    assert!(interpreter.process_source("]").is_err());
    interpreter.process_source("FOO BAR").unwrap();

    assert_eq!(render_stack(interpreter.stack()), "2: FOO BAR ");
}

#[test]
fn cat_type_error_leaves_the_top_value_in_place() {
    let mut interpreter = new_interpreter();

    assert!(interpreter.process_source("[ FOO ] BAR cat").is_err());

    // The offending value is pushed back before the error is reported.
    assert_eq!(render_stack(interpreter.stack()), "2: [ FOO ] BAR ");
}

#[test]
fn errors_carry_the_offending_line() {
    let error = eval_expecting_error("FOO\nnosuchword");

    assert_eq!(error.line(), Some(2));
    assert_eq!(
        error.to_string(),
        "runtime error: 2: unknown word `nosuchword'"
    );
}

#[test]
fn parse_errors_carry_the_offending_line() {
    let error = eval_expecting_error("FOO\n\n]");

    assert!(error.kind() == ErrorKind::Parse);
    assert_eq!(error.line(), Some(3));
    assert_eq!(
        error.to_string(),
        "parse error: 3: unexpected `]': no matching `['"
    );
}

#[test]
fn backtrace_lists_frames_innermost_first() {
    let error = eval_expecting_error(": boom zap ;\n: outer boom ;\nouter");

    let frames = error.call_stack().as_ref().unwrap();

    // Frames are pushed outermost first, so the live chain ends at the failing word.  The
    // underflow is detected inside `zap`, whose call site is inside `boom`'s body on line 1.
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].word(), "outer");
    assert_eq!(frames[0].line(), 3);
    assert_eq!(frames[1].word(), "boom");
    assert_eq!(frames[1].line(), 2);
    assert_eq!(frames[2].word(), "zap");
    assert_eq!(frames[2].line(), 1);

    assert_eq!(
        error.to_string(),
        "runtime error: 1: stack underflow\n\nCall stack\n  1: zap\n  2: boom\n  3: outer\n"
    );
}

#[test]
fn frames_unwind_after_the_error_propagates() {
    let mut interpreter = new_interpreter();

    assert!(interpreter.process_source(": boom zap ; boom").is_err());
    assert!(interpreter.call_stack().is_empty());
}

#[test]
fn nothing_from_a_failed_parse_is_evaluated() {
    let mut interpreter = new_interpreter();

    assert!(interpreter.process_source("FOO BAR ]").is_err());

    // The partial tree is discarded, so neither literal reached the stack.
    assert!(interpreter.stack().is_empty());
}
