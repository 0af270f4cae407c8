use crate::comparator::{Comparator, Max, Min};
use crate::error::Result;

/// Returns a copy of the greater of `a` and `b`, preferring `a` unless `b > a`.
pub fn max_of<T: PartialOrd + Clone>(a: &T, b: &T) -> T {
    favored_of::<T, Max<T>>(a, b)
}

pub fn min_of<T: PartialOrd + Clone>(a: &T, b: &T) -> T {
    favored_of::<T, Min<T>>(a, b)
}

pub fn favored_of<T: Clone, C: Comparator<T>>(a: &T, b: &T) -> T {
    C::default().favored(a, b).clone()
}

pub fn try_max_of<T: PartialOrd + Clone>(a: &T, b: &T) -> Result<T> {
    Max::default().try_favored(a, b).cloned()
}

pub fn try_min_of<T: PartialOrd + Clone>(a: &T, b: &T) -> Result<T> {
    Min::default().try_favored(a, b).cloned()
}

/// Folds [`max_of`] over `values`; the earliest of equal maxima wins.
pub fn max_of_all<T: PartialOrd, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    let compare = Max::default();
    values
        .into_iter()
        .reduce(|acc, value| compare.favored_owned(acc, value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    #[test]
    fn max_of_scenarios() {
        assert_eq!(max_of(&2, &9), 9);
        assert_eq!(max_of(&9, &2), 9);
        assert_eq!(max_of(&4, &4), 4);
    }

    #[test]
    fn min_of_scenarios() {
        assert_eq!(min_of(&2, &9), 2);
        assert_eq!(min_of(&9, &2), 2);
        assert_eq!(min_of(&4, &4), 4);
    }

    #[test]
    fn caller_keeps_originals() {
        let a = vec![1, 2];
        let b = vec![1, 3];
        let max = max_of(&a, &b);
        assert_eq!(max, b);
        assert_eq!(a, vec![1, 2]);
    }

    #[test]
    fn try_variants_reject_nan() {
        assert_eq!(try_max_of(&f32::NAN, &0.0), Err(Error::Incomparable));
        assert_eq!(try_min_of(&0.0, &f32::NAN), Err(Error::Incomparable));
        assert_eq!(try_max_of(&-1.0, &0.5), Ok(0.5));
        assert_eq!(max_of(&0.0, &f32::NAN), 0.0);
    }

    #[test]
    fn max_of_all_picks_earliest_max() {
        assert_eq!(max_of_all(Vec::<i32>::new()), None);
        assert_eq!(max_of_all([3, 8, 1, 8]), Some(8));
        let words = ["bb", "a", "cc", "c"];
        let longest = max_of_all(words.iter().map(|w| (w.len(), *w)));
        assert_eq!(longest, Some((2, "cc")));
        let by_len = max_of_all(words.iter().map(|w| Len(w)));
        assert_eq!(by_len.map(|l| l.0), Some("bb"));
    }

    struct Len<'a>(&'a str);

    impl PartialEq for Len<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.0.len() == other.0.len()
        }
    }

    impl PartialOrd for Len<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.len().partial_cmp(&other.0.len())
        }
    }
}
