use crate::types::Step;

/// Ready/Halted state carried by every source and combinator.
///
/// A stage observes each step it returns; once a terminal step goes out the
/// latch closes and any further pull is a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Latch {
    #[default]
    Ready,
    Halted,
}

impl Latch {
    /// Panics if the stage has already returned a terminal step.
    #[inline]
    #[track_caller]
    pub(crate) fn check(&self) {
        if *self == Self::Halted {
            pulled_after_halt();
        }
    }

    /// Closes the latch if `step` is terminal, then hands the step back.
    #[inline]
    pub(crate) fn observe<T, E>(&mut self, step: Step<T, E>) -> Step<T, E> {
        if step.is_terminal() {
            *self = Self::Halted;
        }
        step
    }

    #[inline]
    pub(crate) fn is_halted(&self) -> bool {
        *self == Self::Halted
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn pulled_after_halt() -> ! {
    trace_event!(error, "sequence pulled after it halted");
    panic!("sequence pulled after it halted");
}
