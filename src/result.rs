use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Classifies what went wrong while reading an equation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ParseErrorKind {
    /// The text is empty or consists of whitespace only.
    EmptyInput,
    /// The text ended where a number was expected, e.g., `2+3-(`.
    UnexpectedEndOfInput,
    /// A number is malformed, e.g., `1.5.2`, `2/-` or `a20`.
    InvalidNumber,
    /// Opening and closing parentheses do not balance.
    MismatchedParentheses,
    /// A character after a number is not one of `+ - * ** / //`.
    InvalidOperator,
}

impl ParseErrorKind {
    /// The fixed message of this kind. Callers may match on it.
    pub fn msg(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "Missing Equation",
            ParseErrorKind::UnexpectedEndOfInput => "Unexpected End of Equation",
            ParseErrorKind::InvalidNumber => "Invalid Number",
            ParseErrorKind::MismatchedParentheses => "Mismatched Parentheses",
            ParseErrorKind::InvalidOperator => "Invalid Operation",
        }
    }
}

/// This will be thrown at you if the text could not be read into operations. Ok, obviously
/// it is not an exception, so thrown needs to be understood figuratively.
///
/// Besides the [kind](ParseErrorKind) we keep the byte offset into the whitespace-stripped
/// text at which reading stopped. The offset is not part of the message.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn msg(&self) -> &'static str {
        self.kind.msg()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg())
    }
}
impl Error for ParseError {}

/// Failures that can only show up while operations are merged.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum EvalError {
    /// The right operand of `/` or `//` was zero when the merge was attempted.
    DivideByZero,
}

impl EvalError {
    pub fn msg(&self) -> &'static str {
        match self {
            EvalError::DivideByZero => "Divide by Zero",
        }
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg())
    }
}
impl Error for EvalError {}

/// Either of the two error phases. Useful if parsing and evaluation are chained with `?`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum EqError {
    Parse(ParseError),
    Eval(EvalError),
}

impl EqError {
    pub fn msg(&self) -> &'static str {
        match self {
            EqError::Parse(e) => e.msg(),
            EqError::Eval(e) => e.msg(),
        }
    }
}

impl Display for EqError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg())
    }
}

impl Error for EqError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EqError::Parse(e) => Some(e),
            EqError::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for EqError {
    fn from(e: ParseError) -> Self {
        EqError::Parse(e)
    }
}

impl From<EvalError> for EqError {
    fn from(e: EvalError) -> Self {
        EqError::Eval(e)
    }
}

/// Result of reading a text, with [`ParseError`](ParseError) as error type.
pub type ParseResult<U> = Result<U, ParseError>;
/// Result of reducing operations, with [`EvalError`](EvalError) as error type.
pub type EvalResult<U> = Result<U, EvalError>;
/// Result of reading and reducing, with [`EqError`](EqError) as error type.
pub type EqResult<U> = Result<U, EqError>;
