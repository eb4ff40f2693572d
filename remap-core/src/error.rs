// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error type shared by configuration and mapping.
//!
//! Only configuration mistakes and argument errors surface as [`Error`].
//! A property that has no match, or a value that has no conversion to its
//! target type, is skipped and never produces an error.

use std::borrow::Cow;

use thiserror::Error;

pub use anyhow::Error as AnyhowError;

/// Global flag to check if REMAP_PANIC_ON_ERROR environment variable is set at compile time.
/// Set REMAP_PANIC_ON_ERROR=1 at compile time to enable panic on error.
pub const PANIC_ON_ERROR: bool = option_env!("REMAP_PANIC_ON_ERROR").is_some();

/// Error type for remap configuration and mapping operations.
///
/// # IMPORTANT: Always Use Static Constructor Functions
///
/// **DO NOT** construct error variants directly using the enum syntax.
/// **ALWAYS** use the provided static constructor functions instead, so that
/// `REMAP_PANIC_ON_ERROR` can stop at the exact creation site.
///
/// ```rust
/// use remap_core::error::Error;
///
/// let err = Error::invalid_argument("property name must not be empty");
/// let err = Error::duplicate_configuration("app::UserDto", "app::User");
/// ```
///
/// ## Available Constructor Functions
///
/// - [`Error::duplicate_configuration`] - A type pair was configured twice
/// - [`Error::invalid_path`] - A member path reaches through a nested member
/// - [`Error::invalid_argument`] - Empty names, `None` root sources, alias collisions
/// - [`Error::type_error`] - Converter or factory values of the wrong type
/// - [`Error::construction`] - A root target has neither constructor nor factory
/// - [`Error::unsupported`] - A root source cannot be converted to the target
/// - [`Error::depth_exceed`] - Nesting deeper than the configured limit
/// - [`Error::unknown`] - For generic errors raised by user callbacks
///
/// ## Debug Mode: REMAP_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 REMAP_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A type pair was configured a second time.
    ///
    /// Do not construct this variant directly; use [`Error::duplicate_configuration`] instead.
    #[error("{0}")]
    DuplicateConfiguration(Cow<'static, str>),

    /// A member path names a nested member where a single level is required.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_path`] instead.
    #[error("{0}")]
    InvalidPath(Cow<'static, str>),

    /// Invalid argument passed to configuration or mapping.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_argument`] instead.
    #[error("{0}")]
    InvalidArgument(Cow<'static, str>),

    /// General type-related error.
    ///
    /// Do not construct this variant directly; use [`Error::type_error`] instead.
    #[error("{0}")]
    TypeError(Cow<'static, str>),

    /// A target instance could not be constructed.
    ///
    /// Do not construct this variant directly; use [`Error::construction`] instead.
    #[error("{0}")]
    Construction(Cow<'static, str>),

    /// Unsupported mapping.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported`] instead.
    #[error("{0}")]
    Unsupported(Cow<'static, str>),

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Generic unknown error.
    ///
    /// Do not construct this variant directly; use [`Error::unknown`] instead.
    #[error("{0}")]
    Unknown(Cow<'static, str>),

    /// Error raised by user code through `anyhow`.
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

impl Error {
    /// Creates a new [`Error::DuplicateConfiguration`] naming both types of the pair.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use remap_core::error::Error;
    ///
    /// let err = Error::duplicate_configuration("a::Source", "b::Target");
    /// assert!(err.to_string().contains("a::Source"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn duplicate_configuration(source: &str, target: &str) -> Self {
        let err = Error::DuplicateConfiguration(Cow::Owned(format!(
            "mapping from `{source}` to `{target}` is already configured"
        )));
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidPath`] from a string or static message.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_path<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidPath(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidArgument`] from a string or static message.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use remap_core::error::Error;
    ///
    /// let err = Error::invalid_argument("name must not be empty");
    /// let err = Error::invalid_argument(format!("unknown property {}", "age"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_argument<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidArgument(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeError`] from a string or static message.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TypeError(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Construction`] from a string or static message.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn construction<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Construction(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unsupported`] from a string or static message.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unsupported(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unknown`] from a string or static message.
    ///
    /// This is the error converters and factories usually return when the
    /// input cannot be handled.
    ///
    /// If `REMAP_PANIC_ON_ERROR` environment variable is set, this will panic with the error message.
    ///
    /// # Example
    /// ```
    /// use remap_core::error::Error;
    ///
    /// let err = Error::unknown("Something went wrong");
    /// let err = Error::unknown(format!("ID:{} not found", 1));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unknown(s.into());
        if PANIC_ON_ERROR {
            panic!("REMAP_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use remap_core::ensure;
/// use remap_core::error::Error;
///
/// fn check_value(n: i32) -> Result<(), Error> {
///     ensure!(n > 0, "value must be positive");
///     ensure!(n < 10, "value {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unknown($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)));
        }
    };
}
