//! Test registry: the fixed table of tests a run executes
//!
//! The registry is produced ahead of time by whatever discovers tests in a source
//! tree (usually a code generator emitting a [`registry!`](crate::registry!) call).
//! The engine only ever borrows it.
//!
//! ## Static tables
//!
//! [`TestDescriptor::new`] and [`Registry::new`] are `const fn`, so a generated table
//! can live in a `static` or `const` item:
//!
//! ```
//! use unitrun::registry::{Registry, TestDescriptor};
//!
//! fn adds() -> i32 {
//!     if 1 + 1 == 2 { 0 } else { -1 }
//! }
//!
//! static TESTS: [TestDescriptor<'static>; 1] = [TestDescriptor::new("adds", "math.rs", &adds)];
//! static REGISTRY: Registry<'static> = Registry::new(&TESTS);
//!
//! assert_eq!(REGISTRY.len(), 1);
//! ```

use std::fmt;

use crate::outcome::TestOutcome;

/// Capability to run one test body and obtain its raw result code.
///
/// `Sync` is required so that tables of descriptors can be placed in `static` items.
pub type TestFn<'a> = dyn Fn() -> i32 + Sync + 'a;

/// One entry of the registry.
#[derive(Clone, Copy)]
pub struct TestDescriptor<'a> {
    invoke: &'a TestFn<'a>,
    name: &'a str,
    source: &'a str,
}

impl<'a> TestDescriptor<'a> {
    /// Describe a test by display name, origin label and body.
    pub const fn new(name: &'a str, source: &'a str, invoke: &'a TestFn<'a>) -> Self {
        Self { invoke, name, source }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Label of the file the test was found in (diagnostics only).
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Run the test body once and return its raw result code.
    pub fn invoke(&self) -> i32 {
        (self.invoke)()
    }

    /// Run the test body once and classify the result.
    pub fn run(&self) -> TestOutcome {
        TestOutcome::from_code(self.invoke())
    }
}

impl fmt::Debug for TestDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Ordered, read-only sequence of tests with its length fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    tests: &'a [TestDescriptor<'a>],
    len: usize,
}

impl<'a> Registry<'a> {
    pub const fn new(tests: &'a [TestDescriptor<'a>]) -> Self {
        Self {
            tests,
            len: tests.len(),
        }
    }

    /// A registry with no tests.
    pub const fn empty() -> Self {
        Self::new(&[])
    }

    /// Number of tests, as reported in the success summary.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate descriptors in registry order.
    pub fn iter(&self) -> std::slice::Iter<'a, TestDescriptor<'a>> {
        self.tests.iter()
    }

    pub fn get(&self, index: usize) -> Option<&'a TestDescriptor<'a>> {
        self.tests.get(index)
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &Registry<'a> {
    type Item = &'a TestDescriptor<'a>;
    type IntoIter = std::slice::Iter<'a, TestDescriptor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
