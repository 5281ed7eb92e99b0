//! Deferred computations.
//!
//! Branches handed to `eval_if` are thunks: nothing runs until the branch
//! is selected and forced with [`Eval::eval`].

/// A computation that produces a value when forced.
pub trait Eval {
    type Output;

    fn eval(self) -> Self::Output;
}

impl<F, R> Eval for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    #[inline(always)]
    fn eval(self) -> R {
        self()
    }
}

/// An already computed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ready<T>(pub T);

impl<T> Eval for Ready<T> {
    type Output = T;

    #[inline(always)]
    fn eval(self) -> T {
        self.0
    }
}

/// Force a deferred computation.
pub fn eval<E: Eval>(computation: E) -> E::Output {
    computation.eval()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_forced_once() {
        let mut runs = 0;
        let value = eval(|| {
            runs += 1;
            42
        });
        assert_eq!(value, 42);
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_ready() {
        assert_eq!(eval(Ready("done")), "done");
    }
}
