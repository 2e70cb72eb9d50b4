//! Integration tests for the Fisher combination statistic and config types.

use fisher_classifier::stats::fisher_combine;
use fisher_classifier::{Classifier, ClassifierConfig};

// ---------------------------------------------------------------------------
// Fisher combination
// ---------------------------------------------------------------------------

#[test]
fn fisher_combine_empty_is_zero() {
    assert_eq!(fisher_combine(&[]), 0.0);
}

#[test]
fn fisher_combine_certain_estimate_is_one() {
    // p = 1 zeroes the complement product; the log-of-zero branch must
    // return the boundary value instead of NaN.
    assert_eq!(fisher_combine(&[1.0]), 1.0);
    assert_eq!(fisher_combine(&[0.2, 1.0, 0.4]), 1.0);
}

#[test]
fn fisher_combine_single_estimate_is_identity() {
    // With one estimate the statistic has 2 degrees of freedom, whose CDF
    // is 1 - exp(-x/2); plugging in -2 ln(1-p) gives back p.
    for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
        let combined = fisher_combine(&[p]);
        assert!(
            (combined - p).abs() < 1e-9,
            "fisher_combine([{}]) = {}",
            p,
            combined
        );
    }
}

#[test]
fn fisher_combine_stays_in_unit_interval() {
    let cases: &[&[f64]] = &[
        &[0.0],
        &[0.0, 0.0, 0.0],
        &[0.5, 0.5],
        &[0.01, 0.99],
        &[0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9],
    ];
    for probs in cases {
        let combined = fisher_combine(probs);
        assert!(
            (0.0..=1.0).contains(&combined),
            "fisher_combine({:?}) = {} out of bounds",
            probs,
            combined
        );
    }
}

#[test]
fn fisher_combine_grows_with_stronger_evidence() {
    let weak = fisher_combine(&[0.6, 0.6]);
    let strong = fisher_combine(&[0.9, 0.9]);
    assert!(
        strong > weak,
        "stronger estimates should combine higher: {} vs {}",
        strong,
        weak
    );
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_default_values() {
    let cfg = ClassifierConfig::default();
    assert!((cfg.assumed_probability - 0.5).abs() < 1e-12);
    assert!((cfg.assumed_weight - 1.0).abs() < 1e-12);
    assert!(cfg.cutoffs.is_empty());
}

#[test]
fn config_new() {
    let cfg = ClassifierConfig::new(0.3, 2.0);
    assert!((cfg.assumed_probability - 0.3).abs() < 1e-12);
    assert!((cfg.assumed_weight - 2.0).abs() < 1e-12);
}

#[test]
fn config_round_trips_json() {
    let mut cfg = ClassifierConfig::new(0.4, 1.5);
    cfg.cutoffs.insert("bad".to_string(), 0.8);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("assumed_probability"));
    let cfg2: ClassifierConfig = serde_json::from_str(&json).unwrap();
    assert!((cfg.assumed_probability - cfg2.assumed_probability).abs() < 1e-12);
    assert_eq!(cfg2.cutoffs.get("bad"), Some(&0.8));
}

#[test]
fn config_cutoffs_field_is_optional() {
    let cfg: ClassifierConfig =
        serde_json::from_str(r#"{"assumed_probability":0.5,"assumed_weight":1.0}"#).unwrap();
    assert!(cfg.cutoffs.is_empty());
}

#[test]
fn classifier_from_config_applies_cutoffs() {
    let mut cfg = ClassifierConfig::default();
    cfg.cutoffs.insert("good".to_string(), 0.99);

    let mut c = Classifier::from_config(&cfg);
    let item: Vec<String> = vec!["x".to_string()];
    c.train(&item, "good");

    // The lone category scores below its configured cutoff.
    assert_eq!(c.classify(&item), None);
}
