//! Unit tests for the availability estimator

use super::*;

#[cfg(test)]
mod normal_cdf_tests {
    use super::*;

    #[test]
    fn test_normal_cdf_at_zero() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normal_cdf_reference_values() {
        // (x, Φ(x)) from standard normal tables
        let cases = [
            (1.0, 0.841_344_746),
            (-1.0, 0.158_655_254),
            (1.959_964, 0.975_000_0),
            (2.5, 0.993_790_335),
            (-3.0, 0.001_349_898),
            (0.5, 0.691_462_461),
        ];
        for (x, expected) in cases {
            let actual = normal_cdf(x);
            assert!(
                (actual - expected).abs() <= 1e-7,
                "normal_cdf({}) = {}, expected {}",
                x,
                actual,
                expected
            );
        }
    }

    /// Φ(k / 8) for k = 0..=64, from `0.5 * erfc(-x / √2)`.
    const PHI_EIGHTHS: [f64; 65] = [
        0.500000000000000, 0.549738224830113, 0.598706325682924, 0.646169766672724,
        0.691462461274013, 0.734014470951299, 0.773372647623132, 0.809213047147489,
        0.841344746068543, 0.869705482863191, 0.894350226333145, 0.915434277648664,
        0.933192798731142, 0.947918720584780, 0.959940843136183, 0.969603638234739,
        0.977249868051821, 0.983206693551551, 0.987775527344955, 0.991225524904262,
        0.993790334674224, 0.995667551636987, 0.997020236764945, 0.997979862510054,
        0.998650101968370, 0.999110974700892, 0.999422974957609, 0.999630921545725,
        0.999767370920964, 0.999855519274119, 0.999911582714799, 0.999946687650249,
        0.999968328758167, 0.999981463262154, 0.999989311474225, 0.999993928376089,
        0.999996602326875, 0.999998127007994, 0.999998982916757, 0.999999455957724,
        0.999999713348428, 0.999999851231127, 0.999999923950395, 0.999999961708659,
        0.999999981010438, 0.999999990724601, 0.999999995537828, 0.999999997885783,
        0.999999999013412, 0.999999999546582, 0.999999999794774, 0.999999999908519,
        0.999999999959840, 0.999999999982638, 0.999999999992608, 0.999999999996900,
        0.999999999998720, 0.999999999999480, 0.999999999999792, 0.999999999999918,
        0.999999999999968, 0.999999999999988, 0.999999999999995, 0.999999999999998,
        0.999999999999999,
    ];

    #[test]
    fn test_normal_cdf_dense_grid() {
        for (k, expected) in PHI_EIGHTHS.iter().enumerate() {
            let x = k as f64 / 8.0;
            let upper = normal_cdf(x);
            let lower = normal_cdf(-x);
            assert!(
                (upper - expected).abs() <= 1e-7,
                "normal_cdf({}) = {}, expected {}",
                x,
                upper,
                expected
            );
            assert!(
                (lower - (1.0 - expected)).abs() <= 1e-7,
                "normal_cdf({}) = {}, expected {}",
                -x,
                lower,
                1.0 - expected
            );
        }
    }

    #[test]
    fn test_normal_cdf_odd_symmetry() {
        for i in 0..=80 {
            let x = i as f64 * 0.1;
            let sum = normal_cdf(x) + normal_cdf(-x);
            assert!((sum - 1.0).abs() < 1e-8, "asymmetric at x = {}", x);
        }
    }

    #[test]
    fn test_normal_cdf_saturates() {
        assert_eq!(normal_cdf(-8.01), 0.0);
        assert_eq!(normal_cdf(8.01), 1.0);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_cdf(-1e300), 0.0);
    }

    #[test]
    fn test_normal_cdf_nan_is_midpoint() {
        assert_eq!(normal_cdf(f64::NAN), 0.5);
    }

    #[test]
    fn test_normal_cdf_stays_in_unit_interval() {
        for i in -200..=200 {
            let p = normal_cdf(i as f64 * 0.05);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[cfg(test)]
mod estimate_availability_tests {
    use super::*;

    #[test]
    fn test_target_before_adp_is_likely_available() {
        // adp 50, target 40: z = -10/18, availability = 1 - Φ(-0.556) ≈ 0.711
        let p = estimate_availability(50.0, 40, 0, DEFAULT_SIGMA);
        assert!(p > 0.5);
        assert!((p - 0.7107).abs() < 1e-3, "got {}", p);
    }

    #[test]
    fn test_target_after_adp_is_likely_gone() {
        let p = estimate_availability(20.0, 40, 10, DEFAULT_SIGMA);
        assert!(p < 0.05, "got {}", p);
    }

    #[test]
    fn test_target_equal_to_adp_is_coin_flip() {
        let p = estimate_availability(45.0, 40, 5, DEFAULT_SIGMA);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_non_increasing_as_turn_moves_away() {
        let mut previous = estimate_availability(60.0, 30, 0, DEFAULT_SIGMA);
        for picks in 1..400 {
            let next = estimate_availability(60.0, 30, picks, DEFAULT_SIGMA);
            assert!(
                next <= previous + 1e-12,
                "availability rose from {} to {} at {} picks",
                previous,
                next,
                picks
            );
            previous = next;
        }
    }

    #[test]
    fn test_extremes_saturate() {
        assert_eq!(estimate_availability(1.0, 500, 0, DEFAULT_SIGMA), 0.0);
        assert_eq!(estimate_availability(500.0, 0, 0, DEFAULT_SIGMA), 1.0);
        assert_eq!(estimate_availability(0.0, u32::MAX, u32::MAX, 1e-9), 0.0);
    }

    #[test]
    fn test_always_in_unit_interval() {
        let adps = [0.0, 1.0, 12.5, 99.0, 250.0, 1e6];
        let picks = [0u32, 1, 10, 150, 10_000];
        let sigmas = [0.5, 5.0, 18.0, 60.0];
        for &adp in &adps {
            for &current in &picks {
                for &until in &picks {
                    for &sigma in &sigmas {
                        let p = estimate_availability(adp, current, until, sigma);
                        assert!((0.0..=1.0).contains(&p));
                    }
                }
            }
        }
    }

    #[test]
    fn test_degenerate_inputs_do_not_escape_unit_interval() {
        // sigma = 0 breaks the precondition but must not produce NaN
        assert_eq!(estimate_availability(40.0, 40, 0, 0.0), 0.5);
        assert_eq!(estimate_availability(30.0, 40, 0, 0.0), 0.0);
        assert_eq!(estimate_availability(50.0, 40, 0, 0.0), 1.0);
        assert_eq!(estimate_availability(f64::NAN, 40, 0, 18.0), 0.5);
    }

    #[test]
    fn test_referentially_transparent() {
        let first = estimate_availability(33.3, 21, 7, 12.0);
        for _ in 0..10 {
            assert_eq!(estimate_availability(33.3, 21, 7, 12.0), first);
        }
    }

    #[test]
    fn test_wider_sigma_pulls_toward_half() {
        let narrow = estimate_availability(80.0, 50, 0, 5.0);
        let wide = estimate_availability(80.0, 50, 0, 60.0);
        assert!(narrow > wide);
        assert!(wide > 0.5);
    }
}

#[cfg(test)]
mod sigma_model_tests {
    use super::*;

    #[test]
    fn test_default_is_fixed_eighteen() {
        assert_eq!(SigmaModel::default(), SigmaModel::fixed(18.0));
        assert_eq!(SigmaModel::default().sigma_for(120.0), 18.0);
    }

    #[test]
    fn test_variable_sigma_grows_with_adp() {
        let model = SigmaModel::variable();
        assert!((model.sigma_for(0.0) - 10.0).abs() < 1e-12);
        assert!((model.sigma_for(80.0) - 18.0).abs() < 1e-12);
        assert!((model.sigma_for(200.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_variable_sigma_ignores_negative_adp() {
        let model = SigmaModel::variable();
        assert_eq!(model.sigma_for(-50.0), model.sigma_for(0.0));
    }

    #[test]
    fn test_validate() {
        assert!(SigmaModel::fixed(18.0).validate().is_ok());
        assert!(SigmaModel::variable().validate().is_ok());
        assert!(SigmaModel::fixed(0.0).validate().is_err());
        assert!(SigmaModel::fixed(-3.0).validate().is_err());
        assert!(SigmaModel::fixed(f64::NAN).validate().is_err());
        assert!(SigmaModel::Variable {
            base: 10.0,
            slope: -0.1
        }
        .validate()
        .is_err());
        assert!(SigmaModel::Variable {
            base: 0.0,
            slope: 0.1
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_sigma_model_serde() {
        let json = serde_json::to_string(&SigmaModel::fixed(12.0)).unwrap();
        assert_eq!(json, r#"{"mode":"fixed","sigma":12.0}"#);

        let model: SigmaModel =
            serde_json::from_str(r#"{"mode":"variable","base":8.0,"slope":0.2}"#).unwrap();
        assert_eq!(
            model,
            SigmaModel::Variable {
                base: 8.0,
                slope: 0.2
            }
        );
    }
}

#[cfg(test)]
mod estimate_tests {
    use super::*;

    #[test]
    fn test_draft_window_target_pick() {
        let window = DraftWindow::new(40, 9);
        assert_eq!(window.target_pick(), 49);

        let huge = DraftWindow::new(u32::MAX, u32::MAX);
        assert_eq!(huge.target_pick(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_estimate_matches_direct_call() {
        let window = DraftWindow::new(40, 0);
        let result = estimate(50.0, window, &SigmaModel::default());

        assert_eq!(result.target_pick, 40);
        assert_eq!(result.sigma, 18.0);
        assert!((result.z_score - (-10.0 / 18.0)).abs() < 1e-12);
        assert_eq!(
            result.probability,
            estimate_availability(50.0, 40, 0, DEFAULT_SIGMA)
        );
    }

    #[test]
    fn test_estimate_uses_model_sigma() {
        let window = DraftWindow::new(100, 0);
        let result = estimate(100.0, window, &SigmaModel::variable());
        assert!((result.sigma - 20.0).abs() < 1e-12);
        assert!((result.probability - 0.5).abs() < 1e-6);
    }
}

#[cfg(test)]
mod discount_tests {
    use super::*;

    #[test]
    fn test_discount_bounds() {
        assert_eq!(apply_availability_discount(10.0, 0.0, 0.19), 10.0);
        assert!((apply_availability_discount(10.0, 1.0, 0.19) - 8.1).abs() < 1e-12);
    }

    #[test]
    fn test_discount_clamps_availability() {
        assert_eq!(
            apply_availability_discount(10.0, 2.0, 0.5),
            apply_availability_discount(10.0, 1.0, 0.5)
        );
        assert_eq!(apply_availability_discount(10.0, -1.0, 0.5), 10.0);
    }
}
