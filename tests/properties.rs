//! Property tests for the scoring rules and the level classifier.

use proptest::prelude::*;
use pwd_analyzer::{classify, evaluate, Criterion, StrengthLevel};

proptest! {
    #[test]
    fn score_in_range_and_six_feedback_lines(pwd in any::<String>()) {
        let evaluation = evaluate(&pwd);
        prop_assert!(evaluation.score.value() <= 100);
        prop_assert_eq!(evaluation.feedback.len(), 6);
        let order: Vec<Criterion> = evaluation.criteria.iter().map(|r| r.criterion).collect();
        prop_assert_eq!(order, Criterion::ALL.to_vec());
    }

    #[test]
    fn evaluation_is_deterministic(pwd in any::<String>()) {
        prop_assert_eq!(evaluate(&pwd), evaluate(&pwd));
    }

    #[test]
    fn score_is_sum_of_criteria(pwd in any::<String>()) {
        let evaluation = evaluate(&pwd);
        let sum: u32 = evaluation.criteria.iter().map(|r| u32::from(r.points)).sum();
        prop_assert_eq!(u32::from(evaluation.score.value()), sum);
    }

    #[test]
    fn long_passwords_get_full_length_points(pwd in "\\PC{12,40}") {
        prop_assert_eq!(evaluate(&pwd).points_for(Criterion::Length), 25);
    }

    #[test]
    fn medium_passwords_get_good_length_points(pwd in "\\PC{8,11}") {
        prop_assert_eq!(evaluate(&pwd).points_for(Criterion::Length), 20);
    }

    #[test]
    fn short_passwords_get_no_length_points(pwd in "\\PC{0,7}") {
        prop_assert_eq!(evaluate(&pwd).points_for(Criterion::Length), 0);
    }

    #[test]
    fn classify_bands_are_exhaustive(score in any::<i64>()) {
        let (level, message) = classify(score);
        let expected = if score >= 90 {
            StrengthLevel::Strong
        } else if score >= 70 {
            StrengthLevel::Good
        } else if score >= 50 {
            StrengthLevel::Fair
        } else {
            StrengthLevel::Weak
        };
        prop_assert_eq!(level, expected);
        prop_assert_eq!(message, level.message());
    }

    #[test]
    fn classify_is_monotonic(a in -200i64..300, b in -200i64..300) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo).0 <= classify(hi).0);
    }
}

#[test]
fn common_check_is_case_insensitive() {
    for pwd in ["PASSWORD", "Password", "password"] {
        assert_eq!(evaluate(pwd).points_for(Criterion::Commonality), 0, "{pwd}");
    }
}

#[test]
fn decimal_digits_in_any_script_count_as_numbers() {
    assert_eq!(evaluate("١٢٣").points_for(Criterion::Numbers), 15);
    assert_eq!(evaluate("１").points_for(Criterion::Numbers), 15);
    assert_eq!(evaluate("१").feedback[3], "Password contains numbers");
    assert_eq!(evaluate("²½").points_for(Criterion::Numbers), 0);
}

#[test]
fn reference_scenarios() {
    assert_eq!(evaluate("").score.value(), 15);
    assert_eq!(evaluate("").feedback[5], "Not a common password");

    let weak = evaluate("password");
    assert_eq!(weak.score.value(), 35);
    assert_eq!(classify(35).0, StrengthLevel::Weak);
    assert_eq!(weak.strength(), StrengthLevel::Weak);

    assert_eq!(evaluate("Passw0rd!").score.value(), 95);
    assert_eq!(evaluate("Passw0rd!").strength(), StrengthLevel::Strong);

    assert_eq!(evaluate("Tr0ub4dor&3xtra").score.value(), 100);
}
