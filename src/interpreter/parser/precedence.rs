use crate::{ast::BinaryOperator, interpreter::lexer::Token};

/// Binding power of an infix `=`.
pub const ASSIGN: u8 = 1;
/// Binding power of the ternary `?`.
pub const TERNARY: u8 = 2;
/// Binding power of `||`.
pub const OR: u8 = 3;
/// Binding power of `&&`.
pub const AND: u8 = 4;
/// Binding power of `==` and `!=`.
pub const EQUALITY: u8 = 5;
/// Binding power of `<`, `>`, `<=` and `>=`.
pub const RELATIONAL: u8 = 6;
/// Binding power of `+` and `-`.
pub const ADDITIVE: u8 = 7;
/// Binding power of `*`, `/` and `%`.
pub const MULTIPLICATIVE: u8 = 8;
/// Binding power of `^` and `**`.
pub const POWER: u8 = 9;

/// An operator that may follow a complete operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Infix {
    /// An ordinary binary operator.
    Binary(BinaryOperator),
    /// `=`, valid only after a variable.
    Assign,
    /// `?`, the start of a ternary conditional.
    Ternary,
}

impl Infix {
    /// Returns the binding power of the operator; higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::parser::precedence::{Infix, POWER},
    /// };
    ///
    /// assert_eq!(Infix::Binary(BinaryOperator::Pow).precedence(), POWER);
    /// assert!(Infix::Ternary.precedence() < Infix::Binary(BinaryOperator::Or).precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        match self {
            Self::Assign => ASSIGN,
            Self::Ternary => TERNARY,
            Self::Binary(op) => match op {
                Or => OR,
                And => AND,
                Equal | NotEqual => EQUALITY,
                Greater | Less | GreaterEqual | LessEqual => RELATIONAL,
                Add | Sub => ADDITIVE,
                Mul | Div | Mod => MULTIPLICATIVE,
                Pow => POWER,
            },
        }
    }

    /// Returns `true` for `=` and `^`, which group right to left.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Assign | Self::Binary(BinaryOperator::Pow))
    }

    /// Returns the minimum binding power for the right-hand operand.
    ///
    /// Right-associative operators pass their own precedence unchanged; all
    /// others pass `precedence + 1`.
    #[must_use]
    pub const fn next_min_precedence(self) -> u8 {
        if self.is_right_associative() {
            self.precedence()
        } else {
            self.precedence() + 1
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including `=`
/// and `?`.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::precedence::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Pow => Some(BinaryOperator::Pow),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::DoublePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Maps a token to the infix operator it introduces, if any.
#[must_use]
pub const fn token_to_infix(token: &Token) -> Option<Infix> {
    match token {
        Token::Equals => Some(Infix::Assign),
        Token::Question => Some(Infix::Ternary),
        _ => match token_to_binary_operator(token) {
            Some(op) => Some(Infix::Binary(op)),
            None => None,
        },
    }
}
