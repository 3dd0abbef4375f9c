/// Errors the transform functions can return.
///
/// Every variant is detected before the input buffers are touched.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FftError {
    /// The input length is not a power of two. Zero is not a power of two.
    NonPowerOfTwo {
        /// The offending length
        len: usize,
    },
    /// The real and imaginary buffers have different lengths.
    LengthMismatch {
        /// Length of the real buffer
        reals: usize,
        /// Length of the imaginary buffer
        imags: usize,
    },
    /// A [`Planner`](crate::planner::Planner) was used on a buffer of a different size.
    PlanMismatch {
        /// The size the planner was built for
        expected: usize,
        /// The length of the buffer it was given
        actual: usize,
    },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonPowerOfTwo { len } => {
                write!(f, "Input length {len} is not a power of two")
            }
            Self::LengthMismatch { reals, imags } => write!(
                f,
                "Real and imaginary buffers differ in length ({reals} != {imags})"
            ),
            Self::PlanMismatch { expected, actual } => write!(
                f,
                "Planner was built for {expected} points but the input has {actual}"
            ),
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for FftError {}
