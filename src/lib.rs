//! Exact rational numbers over fixed-width signed integers.
//!
//! A [`Rational`] keeps its numerator and denominator reduced and carries the
//! sign in the numerator. Arithmetic never widens the underlying integer type,
//! so overflow behaves exactly like the native integer arithmetic.

pub mod integer;
pub mod rational;

use std::fmt;

use std::fmt::{Display, Formatter};
use std::sync::RwLock;

use lazy_static::lazy_static;

pub use crate::{
    integer::Integer,
    rational::{Rational, Rational32, Rational64},
};

lazy_static! {
    /// Log callback.
    static ref LOG_CALLBACK: RwLock<LogCallback> = {
        RwLock::new(LogCallback::new())
    };
}

/// Wrapper around a log closure.
struct LogCallback {
    callback: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl LogCallback {
    /// Create a new empty log callback.
    fn new() -> LogCallback {
        LogCallback { callback: None }
    }

    /// Store a log callback closure.
    fn set<F>(&mut self, callback: F)
    where
        F: 'static + Fn(&str) + Send + Sync,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Check if there is a closure to call.
    fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Call the stored closure (if any).
    fn call(&self, message: &str) {
        if let Some(callback) = self.callback.as_ref() {
            callback(message);
        }
    }
}

/// Set log callback. Diagnostic messages (e.g. precision loss while
/// normalizing a fraction at the edge of the integer range) will be passed to
/// a given closure.
pub fn set_log_callback<F>(callback: F)
where
    F: 'static + Fn(&str) + Send + Sync,
{
    LOG_CALLBACK.write().unwrap().set(callback);
}

/// Pass a lazily formatted message to the log callback. The message is not
/// formatted at all if there is no callback.
pub(crate) fn log<F>(message: F)
where
    F: FnOnce() -> String,
{
    let callback = LOG_CALLBACK.read().unwrap();

    if callback.is_set() {
        callback.call(&message());
    }
}

/// Error kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// A fraction was constructed with a zero denominator.
    InvalidDenominator,
    /// A fraction was divided by a zero-valued fraction.
    DivisionByZero,
}

impl ErrorKind {
    /// Get a default error message for this kind.
    fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidDenominator => "denominator cannot be zero",
            ErrorKind::DivisionByZero => "cannot divide by a fraction with a zero numerator",
        }
    }
}

/// A fraction error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

impl Error {
    /// Create a new error of a given kind with a custom message.
    pub fn new<T>(kind: ErrorKind, msg: T) -> Error
    where
        T: ToString,
    {
        Error {
            kind,
            msg: msg.to_string(),
        }
    }

    /// Get the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind, kind.message())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for Error {}
