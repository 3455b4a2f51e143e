//! Native handle interface for hierarchical-storage backends.
//!
//! This crate defines the seam between the object wrappers in `h5object`
//! and whatever library actually stores the data: the opaque [`Hid`]
//! handle type, the shared classification enums, and the
//! [`NativeLibrary`] trait that mirrors the C-style contract of an
//! HDF5-like library (sentinel handles on failure, negative statuses,
//! library-owned variable-length buffers).
//!
//! [`MemLibrary`] is a complete in-memory backend: a hierarchical store
//! of groups, datasets, and attributes behind a handle table. It keeps
//! the ledger of open handles and outstanding variable-length buffers,
//! which makes release discipline observable in tests.

pub mod handle;
pub mod library;
pub mod mem;

pub use handle::{BufToken, Hid, Status};
pub use library::{
    AttributeInfo, NativeLibrary, ObjectKind, SpaceClass, TypeClass, TypeDirection,
};
pub use mem::{AttrValue, ElemType, MemLibrary};
