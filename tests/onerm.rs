#[cfg(test)]
mod tests {
    use liftlog::libs::onerm::{bodyweight_adjusted, Formula, ALL_FORMULAS};

    #[test]
    fn test_epley_estimate() {
        // 100 lbs x 10 reps: 100 * (1 + 10/30)
        let estimate = Formula::Epley.estimate(100.0, 10).unwrap();
        assert!((estimate - 133.333333).abs() < 0.001);
    }

    #[test]
    fn test_brzycki_estimate() {
        // 100 lbs x 10 reps: 100 * 36 / 27
        let estimate = Formula::Brzycki.estimate(100.0, 10).unwrap();
        assert!((estimate - 133.333333).abs() < 0.001);
    }

    #[test]
    fn test_lombardi_estimate() {
        // 100 lbs x 10 reps: 100 * 10^0.10
        let estimate = Formula::Lombardi.estimate(100.0, 10).unwrap();
        assert!((estimate - 125.892541).abs() < 0.001);
    }

    #[test]
    fn test_oconner_estimate() {
        // 100 lbs x 10 reps: 100 * (1 + 10/40)
        let estimate = Formula::OConner.estimate(100.0, 10).unwrap();
        assert!((estimate - 125.0).abs() < 0.001);
    }

    #[test]
    fn test_single_rep_returns_the_weight_itself() {
        for formula in ALL_FORMULAS {
            assert_eq!(formula.estimate(225.0, 1), Some(225.0));
        }
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        for formula in ALL_FORMULAS {
            assert_eq!(formula.estimate(0.0, 10), None);
            assert_eq!(formula.estimate(-50.0, 10), None);
            assert_eq!(formula.estimate(100.0, 0), None);
        }
    }

    #[test]
    fn test_brzycki_domain_limit() {
        assert!(Formula::Brzycki.estimate(100.0, 36).is_some());
        assert_eq!(Formula::Brzycki.estimate(100.0, 37), None);
        assert_eq!(Formula::Brzycki.estimate(100.0, 40), None);
    }

    #[test]
    fn test_bodyweight_adjustment() {
        // 100 lbs estimate at 200 lbs bodyweight: 100 + 0.0333 * 100 * 2
        let adjusted = bodyweight_adjusted(100.0, 200.0);
        assert!((adjusted - 106.66).abs() < 0.001);
    }

    #[test]
    fn test_formula_parsing() {
        assert_eq!("epley".parse::<Formula>().unwrap(), Formula::Epley);
        assert_eq!("Brzycki".parse::<Formula>().unwrap(), Formula::Brzycki);
        assert_eq!("LOMBARDI".parse::<Formula>().unwrap(), Formula::Lombardi);
        assert_eq!("oconner".parse::<Formula>().unwrap(), Formula::OConner);
        assert!("sinclair".parse::<Formula>().is_err());
    }
}
