use std::{array, fmt, slice};

use arrayvec::ArrayVec;

use crate::comparator::{Comparator, Max, Min};
use crate::error::{Error, Result};

/// Owns exactly two values of one type and reports the one favored by `C`.
///
/// With the default [`Max`] comparator the favored value is the greater one; the
/// second value is only chosen when it is strictly greater than the first.
pub struct PairHolder<T, C = Max<T>> {
    values: [T; 2],
    compare: C,
}

pub type MaxPair<T> = PairHolder<T, Max<T>>;
pub type MinPair<T> = PairHolder<T, Min<T>>;

impl<T> MaxPair<T> {
    pub fn get_max(&self) -> T
    where
        T: PartialOrd + Clone,
    {
        self.max().clone()
    }

    pub fn max(&self) -> &T
    where
        T: PartialOrd,
    {
        self.favored()
    }

    pub fn into_max(self) -> T
    where
        T: PartialOrd,
    {
        self.into_favored()
    }

    pub fn try_get_max(&self) -> Result<T>
    where
        T: PartialOrd + Clone,
    {
        self.try_favored().cloned()
    }
}

impl<T> MinPair<T> {
    pub fn get_min(&self) -> T
    where
        T: PartialOrd + Clone,
    {
        self.min().clone()
    }

    pub fn min(&self) -> &T
    where
        T: PartialOrd,
    {
        self.favored()
    }

    pub fn into_min(self) -> T
    where
        T: PartialOrd,
    {
        self.into_favored()
    }

    pub fn try_get_min(&self) -> Result<T>
    where
        T: PartialOrd + Clone,
    {
        self.try_favored().cloned()
    }
}

impl<T, C> PairHolder<T, C> {
    pub fn new(first: T, second: T) -> Self
    where
        C: Default,
    {
        Self {
            values: [first, second],
            compare: C::default(),
        }
    }

    /// Builds a pair from an iterator yielding exactly two values.
    ///
    /// Stops reading after the third value, so an oversized input reports `actual: 3`.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self>
    where
        C: Default,
    {
        let mut values = ArrayVec::<T, 2>::new();
        let mut actual = 0;
        for value in iter {
            actual += 1;
            if values.try_push(value).is_err() {
                break;
            }
        }
        if actual != 2 {
            tracing::debug!(actual, "rejecting pair of wrong length");
            return Err(Error::WrongLength { actual });
        }
        let values = values
            .into_inner()
            .map_err(|values| Error::WrongLength {
                actual: values.len(),
            })?;
        Ok(Self {
            values,
            compare: C::default(),
        })
    }

    pub fn first(&self) -> &T {
        &self.values[0]
    }

    pub fn second(&self) -> &T {
        &self.values[1]
    }

    pub fn as_array(&self) -> &[T; 2] {
        &self.values
    }

    pub fn into_inner(self) -> (T, T) {
        let [first, second] = self.values;
        (first, second)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn favored(&self) -> &T
    where
        C: Comparator<T>,
    {
        let [first, second] = &self.values;
        self.compare.favored(first, second)
    }

    pub fn into_favored(self) -> T
    where
        C: Comparator<T>,
    {
        let [first, second] = self.values;
        self.compare.favored_owned(first, second)
    }

    pub fn try_favored(&self) -> Result<&T>
    where
        C: Comparator<T>,
    {
        let [first, second] = &self.values;
        let favored = self.compare.try_favored(first, second)?;
        tracing::trace!("pair ordered");
        Ok(favored)
    }
}

impl<T, C: Default> TryFrom<Vec<T>> for PairHolder<T, C> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        if values.len() != 2 {
            tracing::debug!(actual = values.len(), "rejecting pair of wrong length");
            return Err(Error::WrongLength {
                actual: values.len(),
            });
        }
        Self::try_from_iter(values)
    }
}

impl<T, C: Default> From<(T, T)> for PairHolder<T, C> {
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}

impl<T, C> IntoIterator for PairHolder<T, C> {
    type Item = T;
    type IntoIter = array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a PairHolder<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, C: Clone> Clone for PairHolder<T, C> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairHolder<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairHolder")
            .field("first", self.first())
            .field("second", self.second())
            .finish()
    }
}

impl<T: PartialEq, C> PartialEq for PairHolder<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq, C> Eq for PairHolder<T, C> {}
