use crate::runtime::{
    data_structures::value::{Quotation, Value, render_stack},
    error::{self, script_error_str},
    interpreter::Interpreter,
};
use std::{process::exit, rc::Rc};

/// Discard the top value on the stack.
///
/// Signature: `a -- `
fn word_zap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Discard the entire stack.
///
/// Signature: `... -- `
fn word_empty(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.clear_stack();

    Ok(())
}

/// Pop the top quotation and evaluate its body in place.
///
/// Signature: `[a] -- ...`
fn word_i(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    match interpreter.pop()? {
        Value::Quotation(quotation) => interpreter.evaluate(&quotation),
        _ => script_error_str(interpreter, "can't evaluate a non-quotation object"),
    }
}

/// Pop the top value and push a new one item quotation holding it.
///
/// Signature: `a -- [a]`
fn word_unit(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;
    let line = interpreter.current_line();

    interpreter.push(Quotation::from_items(line, vec![value]).into());

    Ok(())
}

/// Push a copy of the top value.  A quotation is copied with a new top level item list whose
/// items still alias the original's, never a deep clone.  A symbol is shared outright, the same
/// reference is pushed again.
///
/// Signature: `a -- a a`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let top = match interpreter.stack().last() {
        Some(value) => value.clone(),
        None => return script_error_str(interpreter, "stack underflow"),
    };

    match top {
        Value::Quotation(quotation) => {
            let copy = Quotation::from_items(quotation.line(), quotation.items().to_vec());

            interpreter.push(copy.into());
        }

        symbol => interpreter.push(symbol),
    }

    Ok(())
}

/// Exchange the top two values on the stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pop()?;
    let b = interpreter.pop()?;

    interpreter.push(a);
    interpreter.push(b);

    Ok(())
}

/// Pop two quotations and push their concatenation.  On a type error the offending value is
/// pushed back before reporting.
///
/// Signature: `[a] [b] -- [a b]`
fn word_cat(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = match interpreter.pop()? {
        Value::Quotation(quotation) => quotation,
        other => {
            interpreter.push(other);
            return script_error_str(interpreter, "cat: quotation expected");
        }
    };

    let b = match interpreter.pop()? {
        Value::Quotation(quotation) => quotation,
        other => {
            interpreter.push(other);
            return script_error_str(interpreter, "cat: quotation expected");
        }
    };

    let line = interpreter.current_line();
    let mut items = b.items().to_vec();

    items.extend_from_slice(a.items());
    interpreter.push(Quotation::from_items(line, items).into());

    Ok(())
}

/// Pop a quotation and a value and push a new quotation with the value prefixed onto the
/// quotation's items.
///
/// Signature: `b [a] -- [b a]`
fn word_cons(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = match interpreter.pop()? {
        Value::Quotation(quotation) => quotation,
        other => {
            interpreter.push(other);
            return script_error_str(interpreter, "cons: quotation expected");
        }
    };

    let b = interpreter.pop()?;
    let line = interpreter.current_line();
    let mut items = Vec::with_capacity(a.items().len() + 1);

    items.push(b);
    items.extend_from_slice(a.items());
    interpreter.push(Quotation::from_items(line, items).into());

    Ok(())
}

/// Pop a quotation and a value, evaluate the quotation with the value set aside, then push the
/// value back on top.
///
/// Signature: `b [a] -- ... b`
fn word_dip(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = match interpreter.pop()? {
        Value::Quotation(quotation) => quotation,
        other => {
            interpreter.push(other);
            return script_error_str(interpreter, "dip: quotation expected");
        }
    };

    let b = interpreter.pop()?;

    interpreter.evaluate(&a)?;
    interpreter.push(b);

    Ok(())
}

/// Print the stack depth and every stack item, bottom of the stack first.  The stack itself is
/// untouched.
///
/// Signature: ` -- `
fn word_show(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    println!("{}", render_stack(interpreter.stack()));

    Ok(())
}

/// Terminate the process immediately with exit code 0.
fn word_exit(_interpreter: &mut dyn Interpreter) -> error::Result<()> {
    exit(0);
}

/// Register the builtin words with the interpreter.
pub fn register_core_words(interpreter: &mut dyn Interpreter) {
    interpreter.add_native_word("zap", Rc::new(word_zap));
    interpreter.add_native_word("empty", Rc::new(word_empty));
    interpreter.add_native_word("i", Rc::new(word_i));
    interpreter.add_native_word("unit", Rc::new(word_unit));
    interpreter.add_native_word("dup", Rc::new(word_dup));
    interpreter.add_native_word("cat", Rc::new(word_cat));
    interpreter.add_native_word("swap", Rc::new(word_swap));
    interpreter.add_native_word("cons", Rc::new(word_cons));
    interpreter.add_native_word("dip", Rc::new(word_dip));
    interpreter.add_native_word("show", Rc::new(word_show));
    interpreter.add_native_word("exit", Rc::new(word_exit));
}
