#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("values cannot be ordered against each other")]
    Incomparable,
    #[error("a pair holds exactly 2 values, but found {actual}")]
    WrongLength { actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
