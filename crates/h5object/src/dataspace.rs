//! Wrapped dataspace (shape descriptor) handles.

use std::sync::Arc;

use h5object_native::{Hid, NativeLibrary, SpaceClass};

use crate::raw::RawHandle;

/// A dataspace handle, closed on drop.
///
/// Describes the shape of a dataset: scalar (rank 0), simple
/// (N-dimensional), or null (no data). Like
/// [`Datatype`](crate::Datatype) it is a derived handle with no named
/// location of its own.
#[derive(Debug)]
pub struct Dataspace {
    raw: RawHandle,
}

impl Dataspace {
    /// Takes ownership of an open dataspace handle.
    pub fn from_raw(library: Arc<dyn NativeLibrary>, id: Hid) -> Dataspace {
        Dataspace {
            raw: RawHandle::owned(library, id),
        }
    }

    /// The wrapped handle, [`Hid::NONE`] once closed.
    pub fn id(&self) -> Hid {
        self.raw.id()
    }

    /// Whether the handle still denotes a dataspace.
    pub fn is_valid(&self) -> bool {
        self.raw.is_valid()
    }

    /// Releases the handle; idempotent.
    pub fn close(&mut self) {
        self.raw.close();
    }

    /// The class of this dataspace.
    pub fn class(&self) -> SpaceClass {
        self.raw.library().space_class(self.raw.id())
    }

    /// Whether this dataspace holds a single element (rank 0).
    pub fn is_scalar(&self) -> bool {
        self.class() == SpaceClass::Scalar
    }

    /// Whether this dataspace is a simple N-dimensional array.
    pub fn is_simple(&self) -> bool {
        self.raw.library().space_is_simple(self.raw.id())
    }

    /// Per-dimension sizes; empty for scalar and null dataspaces.
    pub fn extents(&self) -> Vec<u64> {
        self.raw
            .library()
            .space_extents(self.raw.id())
            .unwrap_or_default()
    }

    /// Number of dimensions, the length of [`extents`](Dataspace::extents).
    pub fn ndim(&self) -> usize {
        self.extents().len()
    }
}
