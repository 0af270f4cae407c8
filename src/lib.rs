pub use self::comparator::{Comparator, Max, Min};
pub use self::error::{Error, Result};
pub use self::max_of::{favored_of, max_of, max_of_all, min_of, try_max_of, try_min_of};
pub use self::pair::{MaxPair, MinPair, PairHolder};

pub mod comparator;
pub mod error;
pub mod max_of;
pub mod pair;
