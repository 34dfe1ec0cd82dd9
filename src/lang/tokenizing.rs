use crate::lang::source_buffer::SourceBuffer;
use std::{
    fmt::{self, Debug, Display, Formatter},
    process::exit,
};

/// A token is a simple unit of the language.  A word is a name to be resolved against the
/// dictionary when evaluated, a symbol is a frozen data literal, and the four punctuation tokens
/// delimit word definitions and quotation literals.
///
/// Every token carries the 1 based source line it started on.  The original line numbering is
/// used extensively in the error reporting.
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A word in the language to be invoked, spelled with a lowercase first letter.
    Word(usize, String),

    /// A frozen symbol literal, spelled in uppercase letters only.
    Symbol(usize, String),

    /// The `:` that starts a word definition.
    BeginDef(usize),

    /// The `;` that ends a word definition.
    EndDef(usize),

    /// The `[` that opens a quotation literal.
    BeginQuote(usize),

    /// The `]` that closes a quotation literal.
    EndQuote(usize),
}

/// A list of tokens found in the source code.
pub type TokenList = Vec<Token>;

impl Token {
    /// Get the token's line in the original source text.
    pub fn line(&self) -> usize {
        match self {
            Token::Word(line, _) => *line,
            Token::Symbol(line, _) => *line,
            Token::BeginDef(line) => *line,
            Token::EndDef(line) => *line,
            Token::BeginQuote(line) => *line,
            Token::EndQuote(line) => *line,
        }
    }
}

/// Make sure that the tokens are nicely printable for debugging purposes.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::Word(_, text) => write!(f, "{}", text),
            Token::Symbol(_, text) => write!(f, "{}", text),
            Token::BeginDef(_) => write!(f, ":"),
            Token::EndDef(_) => write!(f, ";"),
            Token::BeginQuote(_) => write!(f, "["),
            Token::EndQuote(_) => write!(f, "]"),
        }
    }
}

/// Include the source line along with the token text.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.line(), self)
    }
}

/// Skip over a `#` comment.  Everything up to, but not including, the end of the line is
/// consumed.
fn skip_comment(buffer: &mut SourceBuffer) {
    while let Some(next) = buffer.peek_next() {
        if next == '\r' || next == '\n' {
            break;
        }

        let _ = buffer.next_char();
    }
}

/// Scan a word token.  The first character has already been checked to be a lowercase letter.
/// The rest of the run can contain lowercase letters, digits, and apostrophes.
fn scan_word(buffer: &mut SourceBuffer) -> String {
    let mut text = String::new();

    text.push(buffer.next_char().unwrap());

    while let Some(next) = buffer.peek_next() {
        if next.is_ascii_lowercase() || next.is_ascii_digit() || next == '\'' {
            text.push(buffer.next_char().unwrap());
        } else {
            break;
        }
    }

    text
}

/// Scan a symbol token, a run of uppercase letters only.  The run ends at the first character
/// outside the class.
fn scan_symbol(buffer: &mut SourceBuffer) -> String {
    let mut text = String::new();

    while let Some(next) = buffer.peek_next() {
        if next.is_ascii_uppercase() {
            text.push(buffer.next_char().unwrap());
        } else {
            break;
        }
    }

    text
}

/// Report an unrecognized character and terminate the process.  The lexer can not safely
/// resynchronize after one of these, so this is the one failure with no recovery path.
fn syntax_error(line: usize, next: char) -> ! {
    eprintln!(
        "syntax error: {}: unrecognized input `{}' 0x{:X}",
        line, next, next as u32
    );
    exit(1);
}

/// Tokenize the source code from a string.  Comments and whitespace are consumed here and never
/// reach the parser.
pub fn tokenize_from_source(source: &str) -> TokenList {
    let mut buffer = SourceBuffer::new(source);
    let mut token_list = TokenList::new();

    while let Some(next) = buffer.peek_next() {
        let line = buffer.line();

        match next {
            ' ' | '\t' | '\r' | '\n' => {
                let _ = buffer.next_char();
            }

            '#' => {
                let _ = buffer.next_char();
                skip_comment(&mut buffer);
            }

            ':' => {
                let _ = buffer.next_char();
                token_list.push(Token::BeginDef(line));
            }

            ';' => {
                let _ = buffer.next_char();
                token_list.push(Token::EndDef(line));
            }

            '[' => {
                let _ = buffer.next_char();
                token_list.push(Token::BeginQuote(line));
            }

            ']' => {
                let _ = buffer.next_char();
                token_list.push(Token::EndQuote(line));
            }

            _ if next.is_ascii_lowercase() => {
                token_list.push(Token::Word(line, scan_word(&mut buffer)));
            }

            _ if next.is_ascii_uppercase() => {
                token_list.push(Token::Symbol(line, scan_symbol(&mut buffer)));
            }

            _ => syntax_error(line, next),
        }
    }

    token_list
}
