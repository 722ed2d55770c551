use crate::operators::{OperationKind, PrecedenceClass};
use smallvec::SmallVec;

/// Number of operations we keep on the stack before the sequence spills to the heap.
pub const N_OPERATIONS_ON_STACK: usize = 32;

pub type OperationVec<T> = SmallVec<[Operation<T>; N_OPERATIONS_ON_STACK]>;

/// One term of an equation. It holds the number, the operator that combines the number
/// with the next term, and the depth of parentheses in effect at that operator.
///
/// The last term of a sequence has no successor and carries
/// [`OperationKind::Add`](OperationKind::Add) as inert terminator.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Operation<T> {
    pub value: T,
    pub kind: OperationKind,
    /// Depth of parentheses after the closing parentheses directly following the number.
    /// Operations with a higher priority are merged first.
    pub priority: usize,
}

impl<T> Operation<T> {
    pub fn new(value: T, kind: OperationKind, priority: usize) -> Self {
        Operation {
            value,
            kind,
            priority,
        }
    }

    pub fn precedence_class(&self) -> PrecedenceClass {
        self.kind.precedence_class()
    }
}
