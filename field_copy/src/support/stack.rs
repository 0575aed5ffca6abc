//! Call-site annotation for `error_stack` reports
//!
//! Every wrap appends one [`CallSite`] frame to the report, so a report that travels
//! through several layers records each layer it passed. Wrapping an `Ok` result is a
//! no-op.

use std::fmt;
use std::panic::Location;

use error_stack::Report;

/// Source location recorded by a wrap, with an optional remark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    file:   &'static str,
    line:   u32,
    column: u32,
    remark: Option<String>,
}

impl CallSite {
    #[track_caller]
    fn here(remark: Option<String>) -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
            remark,
        }
    }

    /// File of the wrapping call
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the wrapping call
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column of the wrapping call
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Remark given to [`wrapf`]
    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}:{}:{}", self.file, self.line, self.column)?;
        if let Some(remark) = &self.remark {
            write!(f, ": {remark}")?;
        }
        Ok(())
    }
}

/// Start a report for `error`, recording the caller
#[track_caller]
pub fn report<C>(error: C) -> Report<C>
where
    C: std::error::Error + Send + Sync + 'static,
{
    Report::new(error).attach(CallSite::here(None))
}

/// Record the caller on an existing report
#[track_caller]
pub fn wrap<C>(report: Report<C>) -> Report<C>
where
    C: std::error::Error + Send + Sync + 'static,
{
    report.attach(CallSite::here(None))
}

/// Record the caller on an existing report together with `remark`
#[track_caller]
pub fn wrapf<C>(report: Report<C>, remark: impl fmt::Display) -> Report<C>
where
    C: std::error::Error + Send + Sync + 'static,
{
    report.attach(CallSite::here(Some(remark.to_string())))
}

/// Call sites recorded on `report`, most recent first
pub fn call_sites<C>(report: &Report<C>) -> Vec<&CallSite> {
    report
        .frames()
        .filter_map(|frame| frame.downcast_ref::<CallSite>())
        .collect()
}

/// [`wrap`] and [`wrapf`] for results; both leave `Ok` untouched
pub trait StackResultExt: Sized {
    /// Record the caller on the error, if any
    #[must_use]
    fn wrap(self) -> Self;

    /// Record the caller and `remark` on the error, if any
    #[must_use]
    fn wrapf<R: fmt::Display>(self, remark: R) -> Self;
}

impl<T, C> StackResultExt for Result<T, Report<C>>
where
    C: std::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn wrap(self) -> Self {
        match self {
            Ok(value) => Ok(value),
            Err(report) => Err(wrap(report)),
        }
    }

    #[track_caller]
    fn wrapf<R: fmt::Display>(self, remark: R) -> Self {
        match self {
            Ok(value) => Ok(value),
            Err(report) => Err(wrapf(report, remark)),
        }
    }
}
