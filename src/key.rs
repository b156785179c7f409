/// Factor key ordering
///
/// Factor keys are dotted identifiers such as "1", "1.2", "1.10" or "14.3.2".
/// Numeric segments compare as numbers, anything else compares as text, and
/// a numeric segment always sorts before a textual one.
use std::cmp::Ordering;

/// Keys ordered before this one belong to the "points 1 to 22" range.
pub const RANGE_1_TO_22_LIMIT: &str = "23";

/// Compare two dotted factor keys
///
/// A key that is a prefix of another sorts first ("1" < "1.1"). Numerically
/// equal segments with different spelling fall back to text ("01" < "1"),
/// so only identical keys compare equal.
pub fn compare_factor_keys(x: &str, y: &str) -> Ordering {
    let x_parts: Vec<&str> = x.split('.').collect();
    let y_parts: Vec<&str> = y.split('.').collect();
    let parts_len = x_parts.len().max(y_parts.len());

    for i in 0..parts_len {
        let (x_part, y_part) = match (x_parts.get(i), y_parts.get(i)) {
            (None, _) => return Ordering::Less,
            (_, None) => return Ordering::Greater,
            (Some(x_part), Some(y_part)) => (*x_part, *y_part),
        };

        let ordering = match (parse_segment(x_part), parse_segment(y_part)) {
            (Some(x_num), Some(y_num)) => x_num.cmp(&y_num).then_with(|| x_part.cmp(y_part)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => x_part.cmp(y_part),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// True if `key` sorts strictly before `limit`
pub fn is_before(key: &str, limit: &str) -> bool {
    compare_factor_keys(key, limit) == Ordering::Less
}

/// True if the key falls into the 1-22 range of the general contraindications
pub fn in_range_1_to_22(key: &str) -> bool {
    is_before(key, RANGE_1_TO_22_LIMIT)
}

// Integer segments only; "", "1a", "+1" and digit runs past u64 stay textual
fn parse_segment(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;
