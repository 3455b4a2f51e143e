//! RAII object wrappers over a native hierarchical-storage library.
//!
//! This crate puts safe lifetime management around the raw handles of
//! an HDF5-style storage library: every wrapper owns its handle,
//! releases it exactly once, and turns the library's sentinel-handle
//! and negative-status conventions into [`Result`]s. The library
//! itself sits behind the [`NativeLibrary`] trait from
//! `h5object-native`; the examples here use the in-memory backend.
//!
//! Duplication never copies a raw handle value. [`Attribute::try_clone`]
//! and friends ask the library for a fresh handle to the same named
//! path, so the clone and the original are independent resources.
//!
//! ```
//! use std::sync::Arc;
//!
//! use h5object::Group;
//! use h5object_native::{AttrValue, ElemType, MemLibrary};
//!
//! let library = Arc::new(MemLibrary::new());
//! library.create_dataset("sensors/temperature", ElemType::F64, &[3]);
//! library.set_attr(
//!     "sensors/temperature",
//!     "units",
//!     AttrValue::FixedString("celsius".into()),
//! );
//!
//! let root = Group::root(library).unwrap();
//! let dataset = root.dataset("sensors/temperature").unwrap();
//! assert_eq!(dataset.extents().unwrap(), vec![3]);
//! assert_eq!(dataset.dimension_count().unwrap(), 1);
//!
//! let units = dataset.attribute("units").unwrap();
//! assert_eq!(units.read_string().unwrap(), "celsius");
//! ```

pub mod attribute;
pub mod dataset;
pub mod dataspace;
pub mod datatype;
pub mod error;
pub mod group;
pub mod object;
pub mod raw;

pub use attribute::Attribute;
pub use dataset::Dataset;
pub use dataspace::Dataspace;
pub use datatype::Datatype;
pub use error::{Error, Result};
pub use group::Group;
pub use object::Object;
pub use raw::{Ownership, RawHandle};

// Re-export the native seam so callers rarely need the crate directly.
pub use h5object_native::{
    Hid, NativeLibrary, ObjectKind, SpaceClass, Status, TypeClass, TypeDirection,
};
