use crate::error::EvalError;

/// An abstract syntax tree (AST) node representing one parsed statement or one
/// of its sub-expressions.
///
/// `Expr` is a closed set of four variants. Every node owns its children
/// exclusively and holds no reference back to its parent, so a parsed
/// statement is a plain tree that can be evaluated and rendered any number of
/// times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    NumberLiteral {
        /// The literal's value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VariableRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// Assignment of an expression's value to a variable.
    ///
    /// Evaluating an assignment writes to the symbol table, so evaluating the
    /// same node twice applies the write twice.
    Assignment {
        /// The name of the variable.
        name:       String,
        /// The value which is being assigned.
        expression: Box<Self>,
        /// Line of the assigned identifier.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use attrcalc::ast::Expr;
    ///
    /// let expr = Expr::VariableRef { name: "x".to_string(),
    ///                                line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumberLiteral { line, .. }
            | Self::VariableRef { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }

    /// Returns the direct children of this node, left to right.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::NumberLiteral { .. } | Self::VariableRef { .. } => Vec::new(),
            Self::BinaryOp { left, right, .. } => vec![&**left, &**right],
            Self::Assignment { expression, .. } => vec![&**expression],
        }
    }

    /// Counts the nodes of the tree rooted at `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children()
                .into_iter()
                .map(Self::node_count)
                .sum::<usize>()
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Combines two operands with ordinary floating-point arithmetic.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when dividing by exactly zero.
    ///
    /// # Example
    /// ```
    /// use attrcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 2.5, 1).unwrap(), 4.5);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0, 1).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64, line: usize) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { line });
                }
                Ok(left / right)
            },
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
