//! Highlight index arithmetic.
//!
//! Moving the highlight never wraps and never clamps: stepping past either
//! end of the list clears the highlight, and stepping from "nothing
//! highlighted" enters the list from the end that lies in the direction of
//! travel.

/// Computes the highlight that results from moving `amount` steps away from
/// `current` in a list of `len` items.
///
/// Returns `None` when the list is empty or the target falls outside
/// `0..len`.
///
/// ```rust
/// use bubbletea_autocomplete::navigation::next_index;
///
/// assert_eq!(next_index(None, 1, 3), Some(0));
/// assert_eq!(next_index(None, -1, 3), Some(2));
/// assert_eq!(next_index(Some(2), 1, 3), None);
/// assert_eq!(next_index(Some(0), 5, 3), None);
/// ```
pub fn next_index(current: Option<usize>, amount: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
    let base = match current {
        Some(index) => i64::try_from(index).ok()?,
        None if amount > 0 => -1,
        None => last + 1,
    };
    let target = base.checked_add(amount)?;
    if (0..=last).contains(&target) {
        Some(target as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_noop() {
        assert_eq!(next_index(None, 1, 0), None);
        assert_eq!(next_index(Some(3), -1, 0), None);
    }

    #[test]
    fn test_enter_from_nothing() {
        assert_eq!(next_index(None, 1, 4), Some(0));
        assert_eq!(next_index(None, 5, 10), Some(4));
        assert_eq!(next_index(None, -1, 4), Some(3));
        assert_eq!(next_index(None, -5, 10), Some(5));
    }

    #[test]
    fn test_zero_amount_from_nothing_lands_past_the_end() {
        assert_eq!(next_index(None, 0, 4), None);
    }

    #[test]
    fn test_walking_off_either_end_clears() {
        assert_eq!(next_index(Some(3), 1, 4), None);
        assert_eq!(next_index(Some(0), -1, 4), None);
        assert_eq!(next_index(Some(2), 5, 4), None);
        assert_eq!(next_index(Some(1), i64::MAX, 3), None);
        assert_eq!(next_index(Some(1), i64::MIN, 3), None);
        assert_eq!(next_index(None, i64::MIN, 3), None);
    }

    #[test]
    fn test_result_always_in_range() {
        for len in 0..6usize {
            for amount in [-5i64, -1, 1, 5] {
                let mut current = None;
                for _ in 0..20 {
                    current = next_index(current, amount, len);
                    if let Some(i) = current {
                        assert!(i < len);
                    }
                }
            }
        }
    }
}
