//! Shared index normalization for get/set and slicing.
//!
//! Negative indices count back from the rear (`-1` is the last element).
//! Single-element access resolves and then bounds-checks; slicing clamps
//! out-of-range bounds instead of failing, matching Python slice semantics.

/// Resolves a possibly-negative logical index against `len`.
///
/// Returns `None` when the resolved index falls outside `[0, len)`.
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let len = len as isize;
    let resolved = if index < 0 { index + len } else { index };
    if (0..len).contains(&resolved) {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Iterator over the logical indices selected by a clamped slice.
///
/// All yielded indices are guaranteed to lie in `[0, len)` for the `len`
/// the slice was computed against.
pub(crate) struct SliceIndices {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let at = self.next as usize;
        self.remaining -= 1;
        // Advancing past the final index could overflow for huge steps.
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(at)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

/// Computes the clamped index sequence for a Python-style slice of a
/// sequence of length `len`.
///
/// `None` bounds default per the sign of `step` (whole sequence forward,
/// whole sequence backward). Out-of-range bounds clamp. A `step` of zero
/// selects nothing.
pub(crate) fn slice_indices(
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
    len: usize,
) -> SliceIndices {
    let len = len as isize;
    if step == 0 || len == 0 {
        return SliceIndices { next: 0, step: 1, remaining: 0 };
    }

    let clamp = |bound: Option<isize>, default: isize| match bound {
        None => default,
        Some(b) => {
            let b = if b < 0 { b + len } else { b };
            if step > 0 {
                b.clamp(0, len)
            } else {
                b.clamp(-1, len - 1)
            }
        }
    };
    let start = clamp(start, if step > 0 { 0 } else { len - 1 });
    let stop = clamp(stop, if step > 0 { len } else { -1 });

    // Ceiling division of the span by the step, truncated at zero. Widened
    // so that steps near the isize limits cannot overflow the dividend.
    let span = stop as i128 - start as i128;
    let step_wide = step as i128;
    let remaining = if step > 0 {
        ((span + step_wide - 1) / step_wide).max(0)
    } else {
        ((span + step_wide + 1) / step_wide).max(0)
    } as usize;

    SliceIndices { next: start, step, remaining }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
        len: usize,
    ) -> Vec<usize> {
        slice_indices(start, stop, step, len).collect()
    }

    #[test]
    fn test_resolve_index_forward_and_backward() {
        assert_eq!(resolve_index(0, 3), Some(0));
        assert_eq!(resolve_index(2, 3), Some(2));
        assert_eq!(resolve_index(-1, 3), Some(2));
        assert_eq!(resolve_index(-3, 3), Some(0));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(-4, 3), None);
        assert_eq!(resolve_index(0, 0), None);
        assert_eq!(resolve_index(-1, 0), None);
    }

    #[test]
    fn test_slice_indices_forward() {
        assert_eq!(collect(Some(2), Some(5), 1, 10), vec![2, 3, 4]);
        assert_eq!(collect(None, None, 1, 4), vec![0, 1, 2, 3]);
        assert_eq!(collect(None, None, 3, 10), vec![0, 3, 6, 9]);
        assert_eq!(collect(Some(5), Some(2), 1, 10), vec![]);
    }

    #[test]
    fn test_slice_indices_backward() {
        assert_eq!(collect(None, None, -1, 4), vec![3, 2, 1, 0]);
        assert_eq!(collect(None, None, -2, 10), vec![9, 7, 5, 3, 1]);
        assert_eq!(collect(Some(5), Some(1), -2, 10), vec![5, 3]);
        assert_eq!(collect(Some(1), Some(5), -1, 10), vec![]);
    }

    #[test]
    fn test_slice_indices_clamping() {
        assert_eq!(collect(Some(20), Some(30), 1, 10), vec![]);
        assert_eq!(collect(Some(-100), Some(100), 1, 3), vec![0, 1, 2]);
        assert_eq!(collect(Some(100), Some(-100), -1, 3), vec![2, 1, 0]);
        assert_eq!(collect(Some(-2), None, 1, 10), vec![8, 9]);
        assert_eq!(collect(None, Some(-3), 1, 10), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_slice_indices_huge_step() {
        // A step beyond the sequence length selects only the starting
        // element, even at the isize limits.
        assert_eq!(collect(None, None, isize::MAX, 10), vec![0]);
        assert_eq!(collect(None, None, isize::MIN, 10), vec![9]);
        assert_eq!(collect(Some(3), None, isize::MAX, 10), vec![3]);
        assert_eq!(collect(None, None, isize::MAX, 0), vec![]);
    }

    #[test]
    fn test_slice_indices_degenerate() {
        assert_eq!(collect(None, None, 0, 10), vec![]);
        assert_eq!(collect(None, None, 1, 0), vec![]);
        assert_eq!(collect(Some(3), Some(3), 1, 10), vec![]);
    }
}
