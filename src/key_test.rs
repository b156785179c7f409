/// Tests for factor key ordering
#[cfg(test)]
mod tests {
    use crate::key::*;
    use std::cmp::Ordering;

    #[test]
    fn test_numeric_segments_compare_as_numbers() {
        assert_eq!(compare_factor_keys("1.2", "1.10"), Ordering::Less);
        assert_eq!(compare_factor_keys("9", "10"), Ordering::Less);
        assert_eq!(compare_factor_keys("10", "9"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_before_extension() {
        assert_eq!(compare_factor_keys("1", "1.1"), Ordering::Less);
        assert_eq!(compare_factor_keys("1.1", "1"), Ordering::Greater);
        assert_eq!(compare_factor_keys("4.2", "4.2.1"), Ordering::Less);
    }

    #[test]
    fn test_equal_keys() {
        assert_eq!(compare_factor_keys("23", "23"), Ordering::Equal);
        assert_eq!(compare_factor_keys("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_range_boundary() {
        assert_eq!(compare_factor_keys("22", "23"), Ordering::Less);
        assert!(in_range_1_to_22("22"));
        assert!(in_range_1_to_22("22.9"));
        assert!(in_range_1_to_22("1"));
        assert!(!in_range_1_to_22("23"));
        assert!(!in_range_1_to_22("23.1"));
        assert!(!in_range_1_to_22("24"));
    }

    #[test]
    fn test_non_numeric_segments_compare_as_text() {
        assert_eq!(compare_factor_keys("1.a", "1.b"), Ordering::Less);
        assert_eq!(compare_factor_keys("1.b", "1.a"), Ordering::Greater);
        assert_eq!(compare_factor_keys("1.a", "1.a"), Ordering::Equal);
    }

    #[test]
    fn test_numeric_segments_sort_before_text() {
        assert_eq!(compare_factor_keys("10", "1a"), Ordering::Less);
        assert_eq!(compare_factor_keys("1a", "2"), Ordering::Greater);
        assert_eq!(compare_factor_keys("1.9", "1.a"), Ordering::Less);
        assert!(!in_range_1_to_22("1a"));
    }

    #[test]
    fn test_leading_zeros_break_ties_on_text() {
        assert_eq!(compare_factor_keys("01", "1"), Ordering::Less);
        assert_eq!(compare_factor_keys("1", "01"), Ordering::Greater);
        assert_eq!(compare_factor_keys("1.01", "1.1"), Ordering::Less);
        assert_eq!(compare_factor_keys("01", "2"), Ordering::Less);
    }

    #[test]
    fn test_order_is_consistent_over_sample_keys() {
        let keys = [
            "1", "1.1", "1.2", "1.10", "2", "4.1.1", "4.1.2", "9", "10", "22", "23", "24.3", "1a", "01", "0a", "10.b",
            "1.a", "",
        ];
        for a in keys.iter() {
            for b in keys.iter() {
                let ab = compare_factor_keys(a, b);
                let ba = compare_factor_keys(b, a);
                assert_eq!(ab, ba.reverse(), "antisymmetry for {} / {}", a, b);
                assert_eq!(ab == Ordering::Equal, a == b, "equality for {} / {}", a, b);
                for c in keys.iter() {
                    if ab == Ordering::Less && compare_factor_keys(b, c) == Ordering::Less {
                        assert_eq!(compare_factor_keys(a, c), Ordering::Less, "transitivity {} {} {}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sorting_mixed_keys_gives_strict_order() {
        let mut keys: Vec<String> = (0..200).map(|i| i.to_string()).chain((0..200).map(|i| format!("{}a", i))).collect();
        keys.reverse();
        keys.sort_by(|a, b| compare_factor_keys(a, b));

        assert_eq!(keys[0], "0");
        assert_eq!(keys[199], "199");
        assert_eq!(keys[200], "0a");
        for pair in keys.windows(2) {
            assert_eq!(compare_factor_keys(&pair[0], &pair[1]), Ordering::Less, "{} / {}", pair[0], pair[1]);
        }
    }
}
