use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("empty pattern")]
    EmptyPattern,
}

pub type Result<T> = std::result::Result<T, Error>;
