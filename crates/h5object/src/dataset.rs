//! Dataset wrappers with derived shape and type queries.

use std::sync::Arc;

use h5object_native::{Hid, NativeLibrary, ObjectKind, TypeClass};

use crate::attribute::Attribute;
use crate::dataspace::Dataspace;
use crate::datatype::Datatype;
use crate::error::{Error, Result};
use crate::object::Object;

/// An open dataset.
///
/// Shape and type information is always queried from the library at
/// call time, never cached: each query opens a fresh datatype or
/// dataspace handle and releases it when the returned wrapper drops.
#[derive(Debug)]
pub struct Dataset {
    object: Object,
}

impl Dataset {
    /// Opens the dataset `name` below `parent`.
    ///
    /// Fails with [`Error::InvalidSourceKind`] when the name resolves
    /// to something other than a dataset.
    pub fn open(library: Arc<dyn NativeLibrary>, parent: Hid, name: &str) -> Result<Dataset> {
        Dataset::try_from(Object::open_child(library, parent, name)?)
    }

    /// Wraps an already-open dataset handle, taking ownership.
    ///
    /// No library call is made.
    pub fn from_raw(
        library: Arc<dyn NativeLibrary>,
        id: Hid,
        parent: Hid,
        name: impl Into<String>,
    ) -> Dataset {
        Dataset {
            object: Object::from_raw(library, id, parent, name),
        }
    }

    /// The wrapped handle, [`Hid::NONE`] once closed.
    pub fn id(&self) -> Hid {
        self.object.id()
    }

    /// Handle of the parent this dataset was opened under.
    pub fn parent_id(&self) -> Hid {
        self.object.parent_id()
    }

    /// The dataset's name.
    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// Whether the handle still denotes an open dataset.
    pub fn is_valid(&self) -> bool {
        self.object.is_valid()
    }

    /// Releases the handle; idempotent.
    pub fn close(&mut self) {
        self.object.close();
    }

    /// Opens an independent handle to the same dataset.
    pub fn try_clone(&self) -> Result<Dataset> {
        self.object.try_clone().map(|object| Dataset { object })
    }

    /// Opens the attribute `name` attached to this dataset.
    pub fn attribute(&self, name: &str) -> Result<Attribute> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        Attribute::open(Arc::clone(self.object.library()), self.id(), name)
    }

    /// The class of the stored element type.
    pub fn datatype(&self) -> Result<TypeClass> {
        Ok(self.datatype_handle()?.class())
    }

    /// The stored element type as a wrapped handle.
    pub fn datatype_handle(&self) -> Result<Datatype> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        let library = self.object.library();
        let tid = library.dataset_type(self.id());
        if !tid.is_valid() {
            return Err(Error::MetadataQueryFailed {
                name: self.name().to_string(),
            });
        }
        Ok(Datatype::from_raw(Arc::clone(library), tid))
    }

    /// The dataset's shape descriptor.
    pub fn dataspace(&self) -> Result<Dataspace> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        let library = self.object.library();
        let sid = library.dataset_space(self.id());
        if !sid.is_valid() {
            return Err(Error::MetadataQueryFailed {
                name: self.name().to_string(),
            });
        }
        Ok(Dataspace::from_raw(Arc::clone(library), sid))
    }

    /// Whether the dataset holds a single element (rank 0).
    pub fn is_scalar(&self) -> Result<bool> {
        Ok(self.dataspace()?.is_scalar())
    }

    /// Whether the dataset is a simple N-dimensional array.
    pub fn is_simple(&self) -> Result<bool> {
        Ok(self.dataspace()?.is_simple())
    }

    /// Per-dimension sizes; empty for scalar datasets.
    pub fn extents(&self) -> Result<Vec<u64>> {
        Ok(self.dataspace()?.extents())
    }

    /// Number of dimensions, the length of
    /// [`extents`](Dataset::extents); 0 for scalar datasets.
    pub fn dimension_count(&self) -> Result<usize> {
        Ok(self.extents()?.len())
    }
}

impl TryFrom<Object> for Dataset {
    type Error = Error;

    /// Converts a generic object into a dataset.
    ///
    /// Only valid when the object actually is a dataset; anything else
    /// is rejected and the object is dropped (releasing its handle),
    /// so no half-converted dataset ever exists.
    fn try_from(object: Object) -> Result<Dataset> {
        let kind = object.kind();
        if kind != ObjectKind::Dataset {
            log::error!("cannot make a dataset from {object}");
            return Err(Error::InvalidSourceKind {
                expected: ObjectKind::Dataset,
                actual: kind,
            });
        }
        Ok(Dataset { object })
    }
}
