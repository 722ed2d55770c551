use crate::operation::{Operation, OperationVec};
use crate::operators::{self, OperationKind};
use crate::result::{ParseError, ParseErrorKind};
use crate::{DataType, ParseResult};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

/// Reads a number with an optional leading minus from the beginning of `text`.
///
/// # Returns
///
/// The number and the length of its representation, or `None` if `text` does not start
/// with a well-formed number. A number that is directly followed by another digit or
/// dot is not well-formed, e.g., `1.5.2` or `3.`.
pub fn read_number<T: DataType>(text: &str) -> Option<(T, usize)> {
    lazy_static! {
        static ref RE_NUMBER: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?").unwrap();
    }
    let num_str = RE_NUMBER.find(text)?.as_str();
    let n_chars = num_str.len();
    match text[n_chars..].chars().next() {
        Some(c) if c == '.' || c.is_ascii_digit() => None,
        _ => num_str.parse::<T>().ok().map(|n| (n, n_chars)),
    }
}

fn count_leading(text: &str, c: u8) -> usize {
    text.bytes().take_while(|b| *b == c).count()
}

/// Reads a whitespace-free text into a sequence of operations in a single scan from left
/// to right. The priority of each operation is the depth of parentheses at its operator.
/// A trailing operator ends the scan like the end of the text, e.g., `1+` is read as `1`.
///
/// # Arguments
///
/// * `text` - equation without any whitespace, see [`strip_whitespace`](crate::util::strip_whitespace)
///
/// # Errors
///
/// A [`ParseError`](ParseError) is returned if
///
/// * the text is empty ([`EmptyInput`](ParseErrorKind::EmptyInput)),
/// * the text ends after opening parentheses, e.g., `2+3-(`
///   ([`UnexpectedEndOfInput`](ParseErrorKind::UnexpectedEndOfInput)),
/// * a number is malformed, e.g., `1.5.2`, `2/-`, or `a20+5`
///   ([`InvalidNumber`](ParseErrorKind::InvalidNumber)),
/// * there are more closing than opening parentheses at some position or the counts
///   differ at the end, e.g., `(1+2))-1` or `((1+2)-1`
///   ([`MismatchedParentheses`](ParseErrorKind::MismatchedParentheses)),
/// * a number is followed by something that is not an operator, e.g., `1?2` or `2(3)`
///   ([`InvalidOperator`](ParseErrorKind::InvalidOperator)).
///
pub fn parse_operations<T: DataType>(text: &str) -> ParseResult<OperationVec<T>> {
    let fail = |kind: ParseErrorKind, offset: usize| {
        debug!("cannot read '{}' at offset {}: {}", text, offset, kind.msg());
        Err(ParseError::new(kind, offset))
    };
    if text.is_empty() {
        return fail(ParseErrorKind::EmptyInput, 0);
    }

    let mut res = OperationVec::new();
    let mut depth = 0usize;
    let mut offset = 0usize;
    while offset < text.len() {
        let n_open = count_leading(&text[offset..], b'(');
        depth += n_open;
        offset += n_open;
        if offset >= text.len() {
            return fail(ParseErrorKind::UnexpectedEndOfInput, offset);
        }

        let value = match read_number::<T>(&text[offset..]) {
            Some((value, n_chars)) => {
                offset += n_chars;
                value
            }
            None => return fail(ParseErrorKind::InvalidNumber, offset),
        };

        let n_close = count_leading(&text[offset..], b')');
        if n_close > depth {
            return fail(ParseErrorKind::MismatchedParentheses, offset + depth);
        }
        depth -= n_close;
        offset += n_close;

        let mut kind = OperationKind::Add;
        if offset < text.len() {
            match operators::find_operator(&text[offset..]) {
                Some((op, n_chars)) => {
                    offset += n_chars;
                    // the last number keeps the terminating addition, also after a
                    // trailing operator
                    if offset < text.len() {
                        kind = op;
                    }
                }
                None => return fail(ParseErrorKind::InvalidOperator, offset),
            }
        }

        let operation = Operation::new(value, kind, depth);
        trace!("read {:?}", operation);
        res.push(operation);
    }

    if depth != 0 {
        return fail(ParseErrorKind::MismatchedParentheses, offset);
    }
    Ok(res)
}
