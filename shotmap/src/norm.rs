//! Linear normalisation of values onto the unit interval.

/// Maps `[min, max]` linearly onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub min: f64,
    pub max: f64,
}
impl Normalize {
    /// Fits the range to the smallest and largest of the given `values`, ignoring NaNs. Returns
    /// `None` if there are no values to fit.
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|value| !value.is_nan())
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
            })
            .map(|(min, max)| Self { min, max })
    }

    /// Normalises `value`. A degenerate range (`min == max`) maps everything to 0. Values outside
    /// the range are clamped.
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn fit_empty() {
        assert_eq!(None, Normalize::fit(vec![]));
    }

    #[test]
    fn fit_ignores_nan() {
        let norm = Normalize::fit(vec![0.3, f64::NAN, 0.05, 0.7]).unwrap();
        assert_eq!(Normalize { min: 0.05, max: 0.7 }, norm);
    }

    #[test]
    fn apply_linear() {
        let norm = Normalize { min: 0.1, max: 0.5 };
        assert_float_absolute_eq!(0.0, norm.apply(0.1));
        assert_float_absolute_eq!(0.5, norm.apply(0.3));
        assert_float_absolute_eq!(1.0, norm.apply(0.5));
    }

    #[test]
    fn apply_clamps() {
        let norm = Normalize { min: 0.1, max: 0.5 };
        assert_eq!(0.0, norm.apply(-1.0));
        assert_eq!(1.0, norm.apply(2.0));
    }

    #[test]
    fn apply_degenerate() {
        let norm = Normalize::fit(vec![0.4, 0.4]).unwrap();
        assert_eq!(0.0, norm.apply(0.4));
    }
}
