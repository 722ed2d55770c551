use crate::operation::{Operation, OperationVec};
use crate::{DataType, EvalResult};
use log::{debug, trace};

/// Decides whether `left` may be merged into its right neighbor `right`. This is the case
/// if `left` is nested deeper, or equally deep with an operator that binds at least as
/// tight as the operator of `right`.
pub(crate) fn is_eligible<T>(left: &Operation<T>, right: &Operation<T>) -> bool {
    left.priority > right.priority
        || (left.priority == right.priority && left.precedence_class() <= right.precedence_class())
}

/// Eligibility of the pair at `idx` and `idx + 1`. The last operation has no successor, so
/// its operator and priority never hold back the operation to its left.
fn is_pair_eligible<T>(ops: &[Operation<T>], idx: usize) -> bool {
    idx + 2 == ops.len() || is_eligible(&ops[idx], &ops[idx + 1])
}

/// A pair at `idx` and `idx + 1` is merged only if it is eligible and the pair to its left
/// is not. Otherwise a pending operation on the left would be overtaken, e.g., `2-3*4+1`
/// would be computed as `2-(12+1)`.
fn can_merge_at<T>(ops: &[Operation<T>], idx: usize) -> bool {
    is_pair_eligible(ops, idx) && (idx == 0 || !is_pair_eligible(ops, idx - 1))
}

/// Applies the operator of the operation at `idx` to its value and the value of the next
/// operation. The result is stored in the next operation, which keeps its operator and
/// priority, and the operation at `idx` is removed.
fn merge_at<T: DataType>(ops: &mut OperationVec<T>, idx: usize) -> EvalResult<()> {
    let left = ops[idx];
    let right = &mut ops[idx + 1];
    right.value = left.kind.apply(left.value, right.value)?;
    trace!("merged {:?} into {:?}", left, right);
    ops.remove(idx);
    Ok(())
}

/// Performs one pass from left to right and merges every pair that can be merged.
///
/// # Returns
///
/// The number of merges of this pass.
pub(crate) fn reduce_pass<T: DataType>(ops: &mut OperationVec<T>) -> EvalResult<usize> {
    let mut n_merges = 0;
    let mut idx = 0;
    while idx + 1 < ops.len() {
        if can_merge_at(ops, idx) {
            merge_at(ops, idx)?;
            n_merges += 1;
            // the merged operation is now at idx and is compared to its new neighbor
        } else {
            idx += 1;
        }
    }
    Ok(n_merges)
}

/// Reduces a sequence of operations to a single operation with passes over the sequence
/// until a pass does not merge anything. Each merge removes one operation, hence there
/// are at most `ops.len() - 1` merges. The leftmost pair with the highest priority and
/// precedence can always be merged, so a non-empty sequence always ends with a single
/// operation.
///
/// # Errors
///
/// [`EvalError::DivideByZero`](crate::EvalError::DivideByZero) if a division with zero
/// divisor is attempted. The sequence is left partially reduced in this case.
///
/// # Panics
///
/// If `ops` is empty. Sequences created by [`parse_operations`](crate::parse_operations)
/// are never empty.
pub(crate) fn reduce<T: DataType>(ops: &mut OperationVec<T>) -> EvalResult<T> {
    let mut n_passes = 0usize;
    loop {
        let n_merges = reduce_pass(ops)?;
        n_passes += 1;
        trace!("pass {} merged {} operations", n_passes, n_merges);
        if n_merges == 0 {
            break;
        }
    }
    debug_assert_eq!(ops.len(), 1);
    debug!("reduced to {:?} after {} passes", ops[0].value, n_passes);
    Ok(ops[0].value)
}
