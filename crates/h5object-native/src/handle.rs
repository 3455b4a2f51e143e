//! Opaque handle and status primitives shared by all backends.

use std::fmt;

/// Opaque identifier for a live resource issued by the native library.
///
/// Mirrors the C library's `hid_t`: zero and negative values denote
/// "no open resource". Copying an `Hid` copies the raw value only; it
/// never duplicates the underlying resource. Getting an independent
/// reference to the same entity means asking the library for a fresh
/// handle to the same named path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hid(i64);

impl Hid {
    /// The "no resource" sentinel.
    pub const NONE: Hid = Hid(0);

    /// Wraps a raw identifier value as issued by a backend.
    pub const fn from_raw(raw: i64) -> Self {
        Hid(raw)
    }

    /// The raw identifier value.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Whether this handle can denote an open resource.
    ///
    /// A `true` result only means the value is not a sentinel; the
    /// resource it names may still have been closed at the library.
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl Default for Hid {
    fn default() -> Self {
        Hid::NONE
    }
}

impl fmt::Display for Hid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status code returned by mutating native calls.
///
/// Mirrors `herr_t`: negative means failure, zero or positive success.
pub type Status = i32;

/// Token naming a library-owned allocation.
///
/// Variable-length reads hand the caller data together with one of
/// these; the allocation must be returned through
/// [`NativeLibrary::free_memory`](crate::library::NativeLibrary::free_memory)
/// exactly once. Freeing it any other way (or not at all) is a
/// resource-discipline violation the backend is allowed to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufToken(u64);

impl BufToken {
    /// Wraps a raw token value as issued by a backend.
    pub const fn from_raw(raw: u64) -> Self {
        BufToken(raw)
    }

    /// The raw token value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}
