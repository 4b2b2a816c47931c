use crate::domain::ports::RandomSource;
use crate::utils::error::{PulseError, Result};

/// Draw a uniform integer in `[min, max]` inclusive from `source`.
///
/// An inverted range is a caller bug, not a runtime condition: it fails with
/// `PulseError::InvalidRange` instead of silently clamping.
pub fn in_range<R: RandomSource + ?Sized>(source: &mut R, min: u32, max: u32) -> Result<u32> {
    if min > max {
        return Err(PulseError::InvalidRange { min, max });
    }

    let value = source.next_in_range(min, max);
    debug_assert!((min..=max).contains(&value));
    Ok(value)
}
