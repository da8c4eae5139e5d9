use std::collections::BTreeMap;

use tracing::trace;

/// The type tag recorded for a symbol.
///
/// The language has a single numeric kind; the tag exists so the table keeps
/// the shape of a classic compiler symbol table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SymbolType {
    /// A 64-bit floating-point number.
    #[default]
    Float,
}

impl std::fmt::Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
        }
    }
}

/// One entry of the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The variable's name.
    pub name:        String,
    /// The variable's type tag.
    pub symbol_type: SymbolType,
    /// The most recently assigned value.
    pub value:       f64,
    /// Line of the most recent assignment.
    pub line:        usize,
}

/// Maps variable names to their last assigned value.
///
/// The table is created empty for a session and only ever grows or changes
/// through assignments; entries are never removed. Iteration is ordered by
/// name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, unconditionally replacing any previous entry with the
    /// same name.
    ///
    /// # Example
    /// ```
    /// use attrcalc::interpreter::symbol_table::{SymbolTable, SymbolType};
    ///
    /// let mut table = SymbolTable::new();
    /// table.insert("x", SymbolType::Float, 1.0, 1);
    /// table.insert("x", SymbolType::Float, 2.0, 4);
    ///
    /// let x = table.lookup("x").unwrap();
    /// assert_eq!((x.value, x.line), (2.0, 4));
    /// ```
    pub fn insert(&mut self, name: &str, symbol_type: SymbolType, value: f64, line: usize) {
        trace!(name, value, line, "symbol table write");
        self.symbols.insert(name.to_string(),
                            Symbol { name: name.to_string(),
                                     symbol_type,
                                     value,
                                     line });
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Changes the value of an existing entry, keeping its type and line.
    ///
    /// Returns `false` and leaves the table untouched when `name` is not
    /// defined.
    pub fn update(&mut self, name: &str, value: f64) -> bool {
        match self.symbols.get_mut(name) {
            Some(symbol) => {
                trace!(name, value, "symbol table update");
                symbol.value = value;
                true
            },
            None => false,
        }
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no variable has been defined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}
