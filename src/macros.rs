//! Macros emitted by test generators
//!
//! A generator that scans a source tree for test functions only has to write a
//! file like this:
//!
//! ```no_run
//! mod parser_tests {
//!     pub fn test_empty_input() -> i32 {
//!         0
//!     }
//! }
//!
//! fn test_tokens() -> i32 {
//!     0
//! }
//!
//! unitrun::harness! {
//!     env: "UNITTEST_MAX_ERRORS",
//!     summary: Count,
//!     tests: [
//!         parser_tests::test_empty_input => "src/parser_tests.c",
//!         test_tokens => "src/lexer_tests.c",
//!     ],
//! }
//! ```

/// Build a [`Registry`](crate::registry::Registry) from test function paths.
///
/// Each path becomes one descriptor named after the path. The source label is
/// either given explicitly with `path => "label"` or defaults to the file the
/// macro is invoked from.
///
/// ```
/// fn test_a() -> i32 {
///     0
/// }
/// fn test_b() -> i32 {
///     0
/// }
///
/// let registry = unitrun::registry![test_a, test_b];
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get(1).map(|t| t.name()), Some("test_b"));
///
/// let labelled = unitrun::registry![test_a => "src/a.c"];
/// assert_eq!(labelled.get(0).map(|t| t.source()), Some("src/a.c"));
/// ```
#[macro_export]
macro_rules! registry {
    () => {
        $crate::registry::Registry::empty()
    };
    ($($test:path => $source:expr),+ $(,)?) => {{
        const TESTS: &[$crate::registry::TestDescriptor<'static>] = &[
            $($crate::registry::TestDescriptor::new(::core::stringify!($test), $source, &$test)),+
        ];
        $crate::registry::Registry::new(TESTS)
    }};
    ($($test:path),+ $(,)?) => {
        $crate::registry![$($test => ::core::file!()),+]
    };
}

/// Define `fn main` for a test binary running the listed tests.
///
/// `env` names the variable holding the default failure budget and `summary`
/// picks a [`SummaryStyle`](crate::report::SummaryStyle) variant; both are
/// optional. The test list uses the [`registry!`](crate::registry!) syntax.
#[macro_export]
macro_rules! harness {
    (
        $(env: $env:expr,)?
        $(summary: $style:ident,)?
        tests: [$($tests:tt)*] $(,)?
    ) => {
        fn main() {
            let registry = $crate::registry![$($tests)*];
            let options = $crate::cli::HarnessOptions::new()
                $(.with_env_var($env))?
                $(.with_summary($crate::report::SummaryStyle::$style))?;
            $crate::cli::run_harness(&registry, options);
        }
    };
}
