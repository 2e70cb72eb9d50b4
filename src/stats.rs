use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Combine independent per-feature probability estimates into a single
/// confidence score using Fisher's method.
///
/// Given probabilities `p_1 .. p_n` that a feature belongs to some category,
/// the statistic is computed over their complements:
///
/// fscore = -2 * ln( Π (1 - p_i) )
///
/// which under the null hypothesis follows a chi-squared distribution with
/// `2n` degrees of freedom. The returned value is the chi-squared CDF at
/// `fscore`: a number in [0, 1] interpretable as confidence that the
/// combined evidence is not random. Estimates near 1 drive the complement
/// product toward 0 and the score toward 1.
///
/// Degenerate inputs are normalized to defined boundary values rather than
/// propagating NaN or infinity:
/// - an empty slice yields 0.0 (no evidence, no confidence);
/// - a zero complement product (some `p_i == 1`, or underflow) yields 1.0
///   without evaluating the logarithm.
///
/// # Arguments
///
/// * `probs` - The per-feature probability estimates, each in [0, 1].
///
/// # Returns
///
/// The combined confidence score in [0, 1].
pub fn fisher_combine(probs: &[f64]) -> f64 {
    if probs.is_empty() {
        return 0.0;
    }
    let product: f64 = probs.iter().map(|p| 1.0 - p).product();
    if product <= 0.0 {
        return 1.0;
    }
    let fscore = -2.0 * product.ln();
    let dof = 2.0 * probs.len() as f64;
    let chi = ChiSquared::new(dof).expect("fisher_combine: positive degrees of freedom");
    chi.cdf(fscore)
}
