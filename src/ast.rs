use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is an owned tree: every node exclusively owns its children, so
/// there is no sharing and no cycles. Construction has no side effects, and
/// every transformation (see [`Expr::simplify`]) builds a fresh tree rather
/// than mutating one in place.
///
/// Structural equality (`PartialEq`) compares trees node by node, which is
/// what the simplifier's fixed-point guarantee is stated in terms of.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable by name.
    Variable(String),
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (`a + b`, `a && b`, ...).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Assignment of a value to a named variable (`x = 3`).
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// Ternary conditional (`cond ? then : else`).
    Conditional {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression selected when the condition is truthy.
        then_branch: Box<Self>,
        /// Expression selected otherwise.
        else_branch: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Variable`] node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Builds a [`Expr::Unary`] node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds a [`Expr::Binary`] node.
    ///
    /// ## Example
    /// ```
    /// use exprcalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::variable("y"), Expr::Number(1.0));
    ///
    /// assert_eq!(expr.to_string(), "(y + 1)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Returns the literal value when `self` is a [`Expr::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` when `self` is the literal `value`, compared exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number().is_some_and(|n| n == value)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the logical
/// connectives. Assignment is not a binary operator at tree level; it has
/// its own [`Expr::Assign`] node.
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
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^` or `**`)
    Pow,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Renders the tree textually.
///
/// Binary nodes are fully parenthesised, so the output is deterministic but
/// not guaranteed to round-trip for every operator spelling (`**` always
/// renders as `^`).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Unary { op, operand } => write!(f, "{op}{operand}"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Assign { name, value } => write!(f, "{name} = {value}"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                write!(f, "{condition} ? {then_branch} : {else_branch}")
            },
        }
    }
}
