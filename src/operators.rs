use crate::{result::EvalError, DataType, EvalResult};
use std::fmt::{self, Display, Formatter};

/// Binary operators that connect a term with the next one.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Exponent,
}

/// Operator category used to break ties between operations of equal priority.
/// The lower the number, the tighter the operator binds.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PrecedenceClass {
    Exponent = 0,
    MultiplyDivide = 1,
    AddSubtract = 2,
}

impl OperationKind {
    pub fn precedence_class(&self) -> PrecedenceClass {
        match self {
            OperationKind::Exponent => PrecedenceClass::Exponent,
            OperationKind::Multiply | OperationKind::Divide | OperationKind::FloorDivide => {
                PrecedenceClass::MultiplyDivide
            }
            OperationKind::Add | OperationKind::Subtract => PrecedenceClass::AddSubtract,
        }
    }

    /// Representation of the operator in the text to be parsed.
    pub fn repr(&self) -> &'static str {
        match self {
            OperationKind::Add => "+",
            OperationKind::Subtract => "-",
            OperationKind::Multiply => "*",
            OperationKind::Divide => "/",
            OperationKind::FloorDivide => "//",
            OperationKind::Exponent => "**",
        }
    }

    /// Applies the operator to `a` on the left and `b` on the right.
    ///
    /// # Errors
    ///
    /// [`EvalError::DivideByZero`](EvalError::DivideByZero) if `b` is zero and the operator
    /// is `/` or `//`. Everything else follows IEEE-754, e.g., `(-8)**0.5` is NaN.
    ///
    pub fn apply<T: DataType>(&self, a: T, b: T) -> EvalResult<T> {
        let check_divisor = |b: T| {
            if b == T::zero() {
                Err(EvalError::DivideByZero)
            } else {
                Ok(b)
            }
        };
        Ok(match self {
            OperationKind::Add => a + b,
            OperationKind::Subtract => a - b,
            OperationKind::Multiply => a * b,
            OperationKind::Divide => a / check_divisor(b)?,
            OperationKind::FloorDivide => (a / check_divisor(b)?).floor(),
            OperationKind::Exponent => a.powf(b),
        })
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

/// All operators sorted such that longer representations come first, i.e., `**` is
/// tried before `*` and `//` before `/`.
pub const OPERATORS_LONGEST_FIRST: [OperationKind; 6] = [
    OperationKind::Exponent,
    OperationKind::FloorDivide,
    OperationKind::Add,
    OperationKind::Subtract,
    OperationKind::Multiply,
    OperationKind::Divide,
];

/// Finds the operator at the beginning of `text`.
///
/// # Returns
///
/// The operator together with the length of its representation or `None` if `text` does
/// not start with an operator.
pub fn find_operator(text: &str) -> Option<(OperationKind, usize)> {
    OPERATORS_LONGEST_FIRST
        .iter()
        .find(|op| text.starts_with(op.repr()))
        .map(|op| (*op, op.repr().len()))
}
