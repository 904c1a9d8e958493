//! Integration tests for angle/ratio symmetry folding.

#[cfg(test)]
mod tests {
    use integer_trig::kernel::{fold_atan2, fold_sine};

    #[test]
    fn fold_sine_lands_at_top_of_table_on_quarter_turn() {
        let fold = fold_sine(4096, 128);
        assert_eq!(fold.index, 127);
        assert_eq!(fold.fraction, 0);
    }

    #[test]
    fn fold_sine_third_and_fourth_quadrant_sign_masks_agree() {
        let q3 = fold_sine(9000, 128);
        let q4 = fold_sine(15000, 128);
        assert_eq!(q3.sign_mask, -1);
        assert_eq!(q4.sign_mask, -1);
    }

    #[test]
    fn fold_atan2_equal_magnitudes_are_not_swapped() {
        let fold = fold_atan2(1000, 1000);
        assert!(!fold.swapped);
        assert_eq!(fold.numerator, 1000);
        assert_eq!(fold.denominator, 1000);
    }

    #[test]
    fn fold_atan2_zero_denominator_candidate_is_swapped() {
        let fold = fold_atan2(1000, 0);
        assert!(fold.swapped);
        assert_eq!(fold.denominator, 1000);
        assert_eq!(fold.numerator, 0);
    }
}
