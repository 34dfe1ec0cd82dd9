use core::str::Chars;

/// A buffer for processing source code.  This is used by the tokenizer to extract meaningful
/// tokens from the source code.  The buffer acts as a forward only iterator over the code.  As
/// characters are consumed the 1 based line number of the cursor is maintained, allowing the
/// tokenizer to tag every token with the line it was found on.
///
/// The SourceBuffer only holds a reference to the source code, the code is not copied.  The
/// source code string is expected to outlive the SourceBuffer.
pub struct SourceBuffer<'a> {
    /// An iterator over the source code being processed.
    chars: Chars<'a>,

    /// The line the cursor is currently on in the source code.
    line: usize,

    /// A character that has been peeked at but not yet consumed.
    current: Option<char>,
}

impl<'a> SourceBuffer<'a> {
    /// Create a new SourceBuffer over the given source code.
    pub fn new(source: &'a str) -> Self {
        SourceBuffer {
            chars: source.chars(),
            line: 1,
            current: None,
        }
    }

    /// The 1 based line number the cursor is at in the source code being processed.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Take a peek at the next character in the source code without consuming it.
    pub fn peek_next(&mut self) -> Option<char> {
        match self.current {
            Some(_) => self.current,
            None => {
                let next = self.chars.next();

                self.current = next;
                next
            }
        }
    }

    /// Get and consume the next character in the source code.
    pub fn next_char(&mut self) -> Option<char> {
        let next = match self.current.take() {
            Some(current) => Some(current),
            None => self.chars.next(),
        };

        // A \r\n pair counts as a single line ending, so only the \n advances the counter.
        if next == Some('\n') {
            self.line += 1;
        }

        next
    }
}
