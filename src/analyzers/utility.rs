/// Arithmetic mean from an accumulated sum and count. Returns 0.0 for
/// an empty group.
pub fn mean(sum: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Sample standard deviation from an accumulated count, sum, and sum of
/// squares (n-1 denominator). Groups with fewer than two observations
/// report 0.0.
pub fn sample_stddev(count: u64, sum: f64, sum_sq: f64) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let n = count as f64;
    let variance = (sum_sq - sum * sum / n) / (n - 1.0);

    // Accumulated floating point can push a constant series slightly negative
    variance.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_group() {
        assert_eq!(mean(0.0, 0), 0.0);
    }

    #[test]
    fn test_mean_normal_values() {
        assert_eq!(mean(9.0, 2), 4.5);
        assert_eq!(mean(5.0, 5), 1.0);
    }

    #[test]
    fn test_sample_stddev_two_points() {
        // scores 4 and 5: sample variance 0.5
        let sd = sample_stddev(2, 9.0, 41.0);
        assert!((sd - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_stddev_known_series() {
        // scores 5, 4, 4, 3: mean 4, sample variance 2/3
        let sd = sample_stddev(4, 16.0, 66.0);
        assert!((sd - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_stddev_undersized_groups() {
        assert_eq!(sample_stddev(0, 0.0, 0.0), 0.0);
        assert_eq!(sample_stddev(1, 5.0, 25.0), 0.0);
    }

    #[test]
    fn test_sample_stddev_constant_series_is_zero() {
        let sd = sample_stddev(3, 12.0, 48.0);
        assert_eq!(sd, 0.0);
    }
}
