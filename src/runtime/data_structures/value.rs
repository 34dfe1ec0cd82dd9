use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

/// An immutable name read from the source code.  A frozen symbol is a data literal that is
/// pushed onto the stack verbatim.  A non-frozen symbol is a word invocation whose name is
/// resolved against the dictionary at evaluation time, not at parse time.
pub struct Symbol {
    /// The 1 based source line the symbol was read from.
    line: usize,

    /// The text of the symbol.
    name: String,

    /// Frozen symbols are data, non-frozen symbols are invocations.
    frozen: bool,
}

/// Symbols on the stack and inside quotations are shared, never deep copied.
pub type SymbolPtr = Rc<Symbol>;

impl Symbol {
    /// Create a new symbol.
    pub fn new(line: usize, name: String, frozen: bool) -> Symbol {
        Symbol { line, name, frozen }
    }

    /// The source line the symbol was read from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The text of the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Is this symbol a frozen data literal?
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.name)
    }
}

/// An ordered, first-class sequence of values.  A quotation is the language's only compound
/// structure, serving as both data and unevaluated code.  Pushing one never executes it.
///
/// Items are only ever appended while the quotation is being built, by the parser or by one of
/// the synthesizing builtin words.  Once a quotation is wrapped in a QuotationPtr it is never
/// mutated again, so sharing its items between quotations is observationally safe.
pub struct Quotation {
    /// The source line where the quotation was opened.
    line: usize,

    /// The owned item sequence.  Individual items are shared references.
    items: Vec<Value>,
}

/// Quotations on the stack, inside other quotations, and bound in the dictionary are shared.
pub type QuotationPtr = Rc<Quotation>;

impl Quotation {
    /// Create a new empty quotation to be filled in by the parser.
    pub fn new(line: usize) -> Quotation {
        Quotation {
            line,
            items: Vec::new(),
        }
    }

    /// Create a new quotation from an already built item list.  Used by the builtin words that
    /// synthesize quotations.
    pub fn from_items(line: usize, items: Vec<Value>) -> Quotation {
        Quotation { line, items }
    }

    /// The source line where the quotation was opened.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The quotation's item sequence.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Append one item.  Only valid while the quotation is under construction.
    pub fn append(&mut self, value: Value) {
        self.items.push(value);
    }
}

/// Render the quotation as a bracketed item list, `[ FOO BAR ]`, recursing into nested
/// quotations.
impl Display for Quotation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[ ")?;

        for item in self.items.iter() {
            write!(f, "{} ", item)?;
        }

        write!(f, "]")
    }
}

impl Debug for Quotation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.line, self)
    }
}

/// Core value enumeration used by the interpreter.  A value is either a symbol or a quotation,
/// and this is the only polymorphism the language has.
///
/// Cloning a value clones the shared reference, not the object behind it.  The one place a real
/// copy is made is the `dup` word, which gives a duplicated quotation its own top level item
/// list while leaving the items themselves aliased.
#[derive(Clone)]
pub enum Value {
    /// A symbol, either a frozen literal or a word invocation.
    Symbol(SymbolPtr),

    /// A quotation.
    Quotation(QuotationPtr),
}

impl Value {
    /// Create a new shared symbol value.
    pub fn symbol(line: usize, name: String, frozen: bool) -> Value {
        Value::Symbol(Rc::new(Symbol::new(line, name, frozen)))
    }

    /// Check if the value is a quotation.
    pub fn is_quotation(&self) -> bool {
        matches!(self, Value::Quotation(_))
    }

    /// The source line the value was created from.
    pub fn line(&self) -> usize {
        match self {
            Value::Symbol(symbol) => symbol.line(),
            Value::Quotation(quotation) => quotation.line(),
        }
    }
}

/// Wrap a freshly built quotation into a shared value.
impl From<Quotation> for Value {
    fn from(quotation: Quotation) -> Value {
        Value::Quotation(Rc::new(quotation))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Symbol(symbol) => write!(f, "{}", symbol),
            Value::Quotation(quotation) => write!(f, "{}", quotation),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Symbol(symbol) => write!(f, "{:?}", symbol),
            Value::Quotation(quotation) => write!(f, "{:?}", quotation),
        }
    }
}

/// Render a stack as the `show` word prints it.  The depth comes first, then every item from
/// the bottom of the stack up, each followed by a single space.
pub fn render_stack(stack: &[Value]) -> String {
    let mut rendered = format!("{}: ", stack.len());

    for item in stack.iter() {
        rendered = rendered + &format!("{} ", item);
    }

    rendered
}
