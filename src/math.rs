use statrs::distribution::{ContinuousCDF, StudentsT};

pub fn arithmetic_mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns NaN for fewer than two observations.
pub fn sample_std(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return f64::NAN;
    }
    let mean = arithmetic_mean(x);
    let ssq = x.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (ssq / (x.len() - 1) as f64).sqrt()
}

/// Two-tailed p-value of an independent two-sample Student's t-test with
/// pooled variance (equal population variances assumed).
///
/// Degenerate inputs never panic:
/// - either sample has fewer than two observations: NaN
/// - zero pooled standard error with equal means: NaN
/// - zero pooled standard error with unequal means: 0.0 (infinite statistic)
pub fn students_t_test(a: &[f64], b: &[f64]) -> f64 {
    let n1 = a.len();
    let n2 = b.len();
    if n1 < 2 || n2 < 2 {
        return f64::NAN;
    }

    let mean1 = arithmetic_mean(a);
    let mean2 = arithmetic_mean(b);
    let var1 = sample_std(a).powi(2);
    let var2 = sample_std(b).powi(2);

    let df = (n1 + n2 - 2) as f64;
    let pooled_var = ((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2) / df;
    let se = (pooled_var * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();

    if se == 0.0 {
        if mean1 == mean2 {
            return f64::NAN;
        }
        return 0.0;
    }

    let t_stat = (mean1 - mean2) / se;
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t_stat.abs())),
        Err(_) => f64::NAN,
    }
}
