//! Smoke tests: exercise every public function at every standard table
//! size. These are not accuracy tests (see `verification.rs`); they check
//! that each instantiation runs to completion, agrees on its own
//! identities, and does not panic across the full input domain.

#[cfg(test)]
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop bounds in this file are chosen to fit the narrower type before each cast"
)]
mod tests {
    use integer_trig::{
        from_degrees, from_milliradians, magnitude, to_degrees, IntegerTrig, Trig128, Trig256,
        Trig32, Trig512, Trig64,
    };

    fn smoke_test_trig<const N: usize>() {
        for angle in (0u32..16384).step_by(97) {
            let angle = angle as u16;
            let s = IntegerTrig::<N>::sin(angle);
            let c = IntegerTrig::<N>::cos(angle);
            assert_eq!(IntegerTrig::<N>::sincos(angle), (s, c));
            let t = IntegerTrig::<N>::tan(angle);
            assert!((-32767..=32767).contains(&t));
        }
    }

    fn smoke_test_inverse_trig<const N: usize>() {
        for v in (-8192i32..=8192).step_by(173) {
            let v = v as i16;
            let a = IntegerTrig::<N>::asin(v);
            let c = IntegerTrig::<N>::acos(v);
            assert!(a < 16384);
            assert!(c < 16384);
        }
        for y in (-20000i32..=20000).step_by(2371) {
            for x in (-20000i32..=20000).step_by(2371) {
                let angle = IntegerTrig::<N>::atan2(y as i16, x as i16);
                assert!(angle < 16384);
            }
        }
    }

    fn smoke_test_magnitude() {
        for x in (-1_000_000i64..=1_000_000).step_by(137_777) {
            for y in (-1_000_000i64..=1_000_000).step_by(137_777) {
                let _ = magnitude(x as i32, y as i32);
            }
        }
    }

    fn smoke_test_angle_conversion() {
        for d in -400i16..=400 {
            let angle = from_degrees(d);
            assert!(angle < 16384);
            let _ = to_degrees(angle);
        }
        for m in (-7000i32..=7000).step_by(131) {
            let angle = from_milliradians(m);
            assert!(angle < 16384);
        }
    }

    #[test]
    fn smoke_trig_trig32() {
        smoke_test_trig::<32>();
    }

    #[test]
    fn smoke_trig_trig64() {
        smoke_test_trig::<64>();
    }

    #[test]
    fn smoke_trig_trig128() {
        smoke_test_trig::<128>();
    }

    #[test]
    fn smoke_trig_trig256() {
        smoke_test_trig::<256>();
    }

    #[test]
    fn smoke_trig_trig512() {
        smoke_test_trig::<512>();
    }

    #[test]
    fn smoke_inverse_trig_across_sizes() {
        smoke_test_inverse_trig::<32>();
        smoke_test_inverse_trig::<64>();
        smoke_test_inverse_trig::<128>();
        smoke_test_inverse_trig::<256>();
        smoke_test_inverse_trig::<512>();
    }

    #[test]
    fn smoke_magnitude_domain_sweep() {
        smoke_test_magnitude();
    }

    #[test]
    fn smoke_angle_conversion_domain_sweep() {
        smoke_test_angle_conversion();
    }

    #[test]
    fn type_aliases_agree_with_their_backing_instantiation() {
        for angle in [0u16, 4096, 8192, 12288] {
            assert_eq!(Trig32::sin(angle), IntegerTrig::<32>::sin(angle));
            assert_eq!(Trig64::sin(angle), IntegerTrig::<64>::sin(angle));
            assert_eq!(Trig128::sin(angle), IntegerTrig::<128>::sin(angle));
            assert_eq!(Trig256::sin(angle), IntegerTrig::<256>::sin(angle));
            assert_eq!(Trig512::sin(angle), IntegerTrig::<512>::sin(angle));
        }
    }

    #[test]
    fn free_functions_match_the_default_table_size() {
        for angle in [0u16, 1000, 8192, 15000] {
            assert_eq!(integer_trig::sin(angle), Trig128::sin(angle));
            assert_eq!(integer_trig::cos(angle), Trig128::cos(angle));
            assert_eq!(integer_trig::tan(angle), Trig128::tan(angle));
            assert_eq!(integer_trig::sincos(angle), Trig128::sincos(angle));
        }
        for v in [-8192i16, 0, 8192] {
            assert_eq!(integer_trig::asin(v), Trig128::asin(v));
            assert_eq!(integer_trig::acos(v), Trig128::acos(v));
        }
        assert_eq!(integer_trig::atan2(1000, 1000), Trig128::atan2(1000, 1000));
        assert_eq!(integer_trig::atan(1000), Trig128::atan(1000));
    }
}
