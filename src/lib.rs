#![doc(html_root_url = "https://docs.rs/flateq/0.1.0")]
//! Flateq evaluates arithmetic equations given as text such as `"(1 + 2) * 3 ** 2 // 4"`.
//! Parentheses, `**`, `*`, `/`, `//`, `+`, and `-` are supported with the usual precedence.
//! Operators of equal precedence are evaluated from left to right, this includes `**`.
//!
//! Instead of building a tree, the text is read into a flat sequence of
//! [operations](Operation). Each operation consists of a number, the operator
//! that connects the number with the next one, and the depth of parentheses at that
//! operator as priority. Neighboring operations are merged in passes over the sequence
//! until a single number remains.
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use flateq::{eval, Equation};
//!
//! let mut eq = Equation::<f64>::new("1 - (2 + (3 - (4 + 5)))")?;
//! assert_eq!(eq.operations().len(), 5);
//! assert_eq!(eq.solution()?, 5.0);
//!
//! assert_eq!(eval::<f64>("48 // -3")?, -16.0);
//! assert_eq!(eval::<f32>("2 ** -1")?, 0.5);
//! assert!(eval::<f64>("1 / 0").is_err());
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! Numbers may carry a leading minus, e.g., `2*-3`. Everything else, i.e., variables,
//! functions, scientific notation, and other unary operators, is not supported.
//!
//! Errors of reading the text are [`ParseError`](ParseError)s and are reported when an
//! [`Equation`](Equation) is created. Errors during reduction are
//! [`EvalError`](EvalError)s. Both come with a fixed message per kind.

mod data_type;
mod equation;
mod operation;
mod operators;
mod parser;
mod reduce;
mod result;
mod util;

pub use {
    data_type::DataType,
    equation::Equation,
    operation::{Operation, OperationVec, N_OPERATIONS_ON_STACK},
    operators::{OperationKind, PrecedenceClass},
    parser::parse_operations,
    result::{
        EqError, EqResult, EvalError, EvalResult, ParseError, ParseErrorKind, ParseResult,
    },
    util::strip_whitespace,
};

/// Parses a text and reduces it to a number in one go.
///
/// # Errors
///
/// An [`EqError`](EqError) wraps either the [`ParseError`](ParseError) of
/// [`Equation::new`](Equation::new) or the [`EvalError`](EvalError) of
/// [`Equation::solution`](Equation::solution).
///
pub fn eval<T: DataType>(text: &str) -> EqResult<T> {
    let mut eq = Equation::<T>::new(text)?;
    Ok(eq.solution()?)
}
