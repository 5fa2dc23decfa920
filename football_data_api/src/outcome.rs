//! Per-call result paired with the error that emptied it, if any.

use crate::Error;

/// What a client operation returns.
///
/// `data` is always usable: on failure it is the empty list or `None`.
/// `error` says why, so each call carries its own classification.
#[derive(Debug)]
pub struct Outcome<T> {
    pub data: T,
    pub error: Option<Error>,
}

impl<T: Default> Outcome<T> {
    pub(crate) fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => Self { data, error: None },
            Err(error) => Self {
                data: T::default(),
                error: Some(error),
            },
        }
    }
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}
