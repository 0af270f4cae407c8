use std::{fmt, marker::PhantomData};

use crate::error::{Error, Result};

pub struct Max<T>(PhantomData<T>);
impl<T> Default for Max<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

pub struct Min<T>(PhantomData<T>);
impl<T> Default for Min<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

// Manual impls so the markers stay Clone/Copy/Debug regardless of T.
impl<T> Clone for Max<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Max<T> {}
impl<T> fmt::Debug for Max<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Max")
    }
}

impl<T> Clone for Min<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Min<T> {}
impl<T> fmt::Debug for Min<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Min")
    }
}

/// An ordering direction over `T`.
///
/// `favors(a, b)` must be strict: it is false whenever `a` and `b` are equal, so that
/// [`favored`](Comparator::favored) resolves ties to its first argument.
pub trait Comparator<T>: Default {
    fn favors(&self, a: &T, b: &T) -> bool;

    /// Whether `a` and `b` can be ordered at all.
    fn comparable(&self, _a: &T, _b: &T) -> bool {
        true
    }

    fn favored<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.favors(b, a) {
            b
        } else {
            a
        }
    }

    fn favored_owned(&self, a: T, b: T) -> T {
        if self.favors(&b, &a) {
            b
        } else {
            a
        }
    }

    fn try_favored<'a>(&self, a: &'a T, b: &'a T) -> Result<&'a T> {
        if !self.comparable(a, b) {
            tracing::debug!("rejecting incomparable pair");
            return Err(Error::Incomparable);
        }
        Ok(self.favored(a, b))
    }
}

impl<T: PartialOrd> Comparator<T> for Max<T> {
    fn favors(&self, a: &T, b: &T) -> bool {
        a > b
    }

    fn comparable(&self, a: &T, b: &T) -> bool {
        a.partial_cmp(b).is_some()
    }
}

impl<T: PartialOrd> Comparator<T> for Min<T> {
    fn favors(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn comparable(&self, a: &T, b: &T) -> bool {
        a.partial_cmp(b).is_some()
    }
}
