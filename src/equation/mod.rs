use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::operation::{Operation, OperationVec};
use crate::parser::parse_operations;
use crate::reduce::reduce;
use crate::util::strip_whitespace;
use crate::{DataType, EvalResult, ParseError, ParseResult};

#[cfg(feature = "serde")]
mod serde;

/// This is the core data type of Flateq. An equation is read eagerly into a flat sequence
/// of [operations](Operation) when it is created. The sequence is reduced in place the
/// first time the solution is requested.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use flateq::Equation;
///
/// let mut eq = Equation::<f64>::new("3 + 5 - 16 / 2 * 4")?;
/// assert_eq!(eq.solution()?, -24.0);
/// #
/// #     Ok(())
/// # }
/// ```
///
/// The outcome of the first reduction, a number or an error, is cached. Hence, calling
/// [`solution`](Equation::solution) repeatedly always returns the same outcome.
#[derive(Clone, Debug)]
pub struct Equation<T: DataType = f64> {
    text: String,
    operations: OperationVec<T>,
    outcome: Option<EvalResult<T>>,
}

impl<T: DataType> Equation<T> {
    /// Strips all whitespace from `text` and reads it into operations.
    ///
    /// # Errors
    ///
    /// See [`parse_operations`](crate::parse_operations).
    ///
    pub fn new(text: &str) -> ParseResult<Self> {
        let text = strip_whitespace(text);
        let operations = parse_operations(&text)?;
        debug!("read '{}' into {} operations", text, operations.len());
        Ok(Equation {
            text,
            operations,
            outcome: None,
        })
    }

    /// Reduces the equation to a single number.
    ///
    /// # Errors
    ///
    /// [`EvalError::DivideByZero`](crate::EvalError::DivideByZero) if a division by zero is
    /// attempted during the reduction. The error is cached like a successful result.
    ///
    pub fn solution(&mut self) -> EvalResult<T> {
        match self.outcome {
            Some(outcome) => outcome,
            None => {
                let outcome = reduce(&mut self.operations);
                self.outcome = Some(outcome);
                outcome
            }
        }
    }

    /// The current sequence of operations. Before the first call of
    /// [`solution`](Equation::solution) this is the result of reading the text.
    pub fn operations(&self) -> &[Operation<T>] {
        &self.operations
    }

    /// The text without whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_solved(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<T: DataType> FromStr for Equation<T> {
    type Err = ParseError;
    fn from_str(text: &str) -> ParseResult<Self> {
        Self::new(text)
    }
}

impl<T: DataType> Display for Equation<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
