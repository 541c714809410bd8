// Numeric aggregation terminals

use crate::sequence::Sequence;

/// Conversion of an item into the optional numeric value it contributes to
/// an aggregation. Absent values are skipped, not errors.
pub trait AsNumber {
    fn as_number(&self) -> Option<f64>;
}

macro_rules! impl_as_number {
    ($($ty:ty),*) => {
        $(
            impl AsNumber for $ty {
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_as_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<N: AsNumber> AsNumber for Option<N> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(AsNumber::as_number)
    }
}

/// Sum the sequence's numeric values, skipping absent ones.
///
/// An empty or all-absent sequence sums to `0.0`.
pub fn sum<T>(source: &Sequence<T>) -> f64
where
    T: AsNumber + 'static,
{
    sum_of(source, AsNumber::as_number)
}

/// Sum selector-mapped values, skipping absent ones.
pub fn sum_of<T, S>(source: &Sequence<T>, selector: S) -> f64
where
    T: 'static,
    S: Fn(&T) -> Option<f64>,
{
    let mut total = 0.0;
    for item in source.iter() {
        if let Some(value) = selector(&item) {
            total += value;
        }
    }
    total
}

/// Average the sequence's numeric values, skipping absent ones.
///
/// The divisor is the count of contributing values; when nothing contributes
/// the result is `0.0`, never an error or NaN.
pub fn average<T>(source: &Sequence<T>) -> f64
where
    T: AsNumber + 'static,
{
    average_of(source, AsNumber::as_number)
}

/// Average selector-mapped values, skipping absent ones.
pub fn average_of<T, S>(source: &Sequence<T>, selector: S) -> f64
where
    T: 'static,
    S: Fn(&T) -> Option<f64>,
{
    let mut total = 0.0;
    let mut contributing = 0u64;
    for item in source.iter() {
        if let Some(value) = selector(&item) {
            total += value;
            contributing += 1;
        }
    }
    if contributing == 0 {
        0.0
    } else {
        total / contributing as f64
    }
}

/// The smallest numeric value in the sequence, or `None` when no value
/// contributes.
pub fn min<T>(source: &Sequence<T>) -> Option<f64>
where
    T: AsNumber + 'static,
{
    min_of(source, AsNumber::as_number)
}

/// The smallest selector-mapped value, or `None` when no value contributes.
pub fn min_of<T, S>(source: &Sequence<T>, selector: S) -> Option<f64>
where
    T: 'static,
    S: Fn(&T) -> Option<f64>,
{
    let mut smallest: Option<f64> = None;
    for item in source.iter() {
        if let Some(value) = selector(&item) {
            match smallest {
                Some(current) if value >= current => {}
                _ => smallest = Some(value),
            }
        }
    }
    smallest
}

/// The largest numeric value in the sequence, or `None` when no value
/// contributes.
pub fn max<T>(source: &Sequence<T>) -> Option<f64>
where
    T: AsNumber + 'static,
{
    max_of(source, AsNumber::as_number)
}

/// The largest selector-mapped value, or `None` when no value contributes.
pub fn max_of<T, S>(source: &Sequence<T>, selector: S) -> Option<f64>
where
    T: 'static,
    S: Fn(&T) -> Option<f64>,
{
    let mut largest: Option<f64> = None;
    for item in source.iter() {
        if let Some(value) = selector(&item) {
            match largest {
                Some(current) if value <= current => {}
                _ => largest = Some(value),
            }
        }
    }
    largest
}
