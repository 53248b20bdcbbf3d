use num_traits::Bounded;

/// Minimum, mean and maximum of a list of values.
///
/// An empty list is reported with sentinels: `min` and `max` hold the largest value of `T` and
/// `mean` is NaN. Downstream consumers rely on the sentinels to tell "no data" from a real zero.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MinMeanMax<T> {
    pub min: T,
    pub mean: f64,
    pub max: T,
}

impl<T: Copy + PartialOrd + Bounded + Into<f64>> MinMeanMax<T> {
    pub fn empty() -> Self {
        Self { min: T::max_value(), mean: f64::NAN, max: T::max_value() }
    }

    pub fn of(values: &[T]) -> Self {
        let (first, rest) = match values.split_first() {
            None => return Self::empty(),
            Some(x) => x,
        };

        let (mut min, mut max) = (*first, *first);
        let mut sum: f64 = (*first).into();
        for &x in rest {
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
            sum += x.into();
        }
        Self { min, mean: sum / values.len() as f64, max }
    }
}

/// Sample standard deviation around the given `mean`; NaN for fewer than two values.
pub fn std_dev<T: Copy + Into<f64>>(values: &[T], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let var: f64 = values
        .iter()
        .map(|&x| {
            let d = x.into() - mean;
            d * d
        })
        .sum();
    (var / (values.len() - 1) as f64).sqrt()
}
