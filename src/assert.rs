//! Result codes and assertion helpers for test bodies
//!
//! A test body is a plain `fn() -> i32`: `0` passes, anything else fails. The
//! macros here return early from the enclosing test with the right code.
//!
//! ```
//! use unitrun::{check, check_code};
//! use unitrun::assert::PASS;
//!
//! fn parses_port() -> i32 {
//!     let port: Result<u16, _> = "8080".parse();
//!     check!(port.is_ok());
//!     check_code!(port == Ok(8080), 2);
//!     PASS
//! }
//!
//! assert_eq!(parses_port(), 0);
//! ```

/// Returned by a passing test.
pub const PASS: i32 = 0;

/// Returned by a failing test that has no more specific code to report.
pub const GENERIC_FAILURE: i32 = -1;

/// Map a caller-chosen failure code to the code a failing test returns.
///
/// `0` would read as a pass, so it is replaced by [`GENERIC_FAILURE`].
pub const fn failure_code(code: i32) -> i32 {
    if code == PASS { GENERIC_FAILURE } else { code }
}

/// Fail the enclosing test with [`GENERIC_FAILURE`] unless `cond` holds.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return $crate::assert::GENERIC_FAILURE;
        }
    };
}

/// Fail the enclosing test with `code` unless `cond` holds.
///
/// A `code` of `0` is reported as [`GENERIC_FAILURE`].
#[macro_export]
macro_rules! check_code {
    ($cond:expr, $code:expr $(,)?) => {
        if !($cond) {
            return $crate::assert::failure_code($code);
        }
    };
}
