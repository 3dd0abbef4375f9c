/// Options to tune how a transform is computed.
///
/// Calling FFT routines without specifying options selects the defaults, which use the running
/// twiddle recurrence.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub twiddles: TwiddleStrategy,
}

impl Options {
    /// Options with the given twiddle strategy
    pub fn with_twiddles(twiddles: TwiddleStrategy) -> Self {
        Self { twiddles }
    }
}

/// How the twiddle factors of each stage are produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TwiddleStrategy {
    #[default]
    /// One `sin`/`cos` evaluation per stage, then one complex multiplication per twiddle.
    ///
    /// Each twiddle depends on the previous one within a stage.
    Recurrence,
    /// Build a table of `N/2` twiddles, each evaluated directly from its angle.
    ///
    /// Slightly more accurate for large sizes, at the cost of `N/2` trigonometric evaluations and
    /// an allocation per call. Reuse a [`Planner`](crate::planner::Planner) to pay that once.
    Table,
}
