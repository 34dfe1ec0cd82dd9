use crate::{
    lang::tokenizing::{Token, TokenList},
    runtime::{
        data_structures::value::{Quotation, Value},
        error::{self, parse_error, parse_error_str},
        interpreter::Interpreter,
    },
};
use std::rc::Rc;

/// Parse a token list into a tree of quotations, returning the implicit top level quotation
/// that holds the whole program unit.
///
/// Word definitions are handled here, interleaved with parsing.  When a `: name ... ;` block
/// closes, its body quotation is bound into the interpreter's dictionary immediately.  The
/// body's word references are not resolved at this point, lookup happens at invocation time,
/// which is what permits recursive and forward references.
///
/// Any parse error aborts the parse at once.  The caller discards the partial tree and
/// evaluates nothing from the failed unit, though definitions that closed before the error
/// remain installed.
pub fn parse_tokens(tokens: TokenList, interpreter: &mut dyn Interpreter) -> error::Result<Quotation> {
    // The stack of in-progress quotations.  The implicit top level quotation is opened before
    // scanning begins and is the final result.
    let mut open = vec![Quotation::new(1)];

    let mut bracket_depth: usize = 0;
    let mut in_definition = false;
    let mut pending_name = String::new();
    let mut last_line: usize = 1;

    let mut stream = tokens.into_iter();

    while let Some(token) = stream.next() {
        last_line = token.line();

        match token {
            Token::BeginDef(line) => {
                // Definitions can not nest and can not appear inside a quotation literal.
                if in_definition {
                    return parse_error_str(line, "can't define inside a definition");
                }

                if bracket_depth > 0 {
                    return parse_error_str(line, "can't define inside a quotation");
                }

                match stream.next() {
                    Some(Token::Word(_, name)) => pending_name = name,
                    _ => return parse_error_str(line, "expecting word after definition"),
                }

                open.push(Quotation::new(line));
                in_definition = true;
            }

            Token::EndDef(line) => {
                if !in_definition {
                    return parse_error_str(line, "unexpected `;': not inside a definition");
                }

                if bracket_depth != 0 {
                    return parse_error(
                        line,
                        format!("mismatched quotes inside of `{}'", pending_name),
                    );
                }

                let body = pop_quotation(&mut open);

                interpreter.add_defined_word(&pending_name, Rc::new(body));
                in_definition = false;
            }

            Token::BeginQuote(line) => {
                bracket_depth += 1;
                open.push(Quotation::new(line));
            }

            Token::EndQuote(line) => {
                if bracket_depth == 0 {
                    return parse_error_str(line, "unexpected `]': no matching `['");
                }

                bracket_depth -= 1;

                let quotation = pop_quotation(&mut open);

                current(&mut open).append(quotation.into());
            }

            Token::Symbol(line, name) => {
                current(&mut open).append(Value::symbol(line, name, true));
            }

            Token::Word(line, name) => {
                current(&mut open).append(Value::symbol(line, name, false));
            }
        }
    }

    if in_definition {
        return parse_error(
            last_line,
            format!("unterminated definition `{}': expecting `;'", pending_name),
        );
    }

    if bracket_depth > 0 {
        return parse_error_str(last_line, "unterminated quotation: expecting `]'");
    }

    Ok(pop_quotation(&mut open))
}

/// The quotation currently being filled in.
fn current(open: &mut [Quotation]) -> &mut Quotation {
    open.last_mut().expect("parser quotation stack is never empty")
}

/// Close the innermost open quotation.
fn pop_quotation(open: &mut Vec<Quotation>) -> Quotation {
    open.pop().expect("parser quotation stack is never empty")
}
