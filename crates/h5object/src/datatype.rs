//! Wrapped datatype handles.

use std::sync::Arc;

use h5object_native::{Hid, NativeLibrary, TypeClass, TypeDirection};

use crate::error::{Error, Result};
use crate::raw::RawHandle;

/// A datatype handle, closed on drop.
///
/// Datatype handles are derived: the library issues a fresh one for
/// every query, so unlike [`Object`](crate::Object)-based wrappers
/// there is no parent/name location to re-open from.
#[derive(Debug)]
pub struct Datatype {
    raw: RawHandle,
}

impl Datatype {
    /// Takes ownership of an open datatype handle.
    pub fn from_raw(library: Arc<dyn NativeLibrary>, id: Hid) -> Datatype {
        Datatype {
            raw: RawHandle::owned(library, id),
        }
    }

    /// The wrapped handle, [`Hid::NONE`] once closed.
    pub fn id(&self) -> Hid {
        self.raw.id()
    }

    /// Whether the handle still denotes a datatype.
    pub fn is_valid(&self) -> bool {
        self.raw.is_valid()
    }

    /// Releases the handle; idempotent.
    pub fn close(&mut self) {
        self.raw.close();
    }

    /// The class of this datatype.
    pub fn class(&self) -> TypeClass {
        self.raw.library().type_class(self.raw.id())
    }

    /// Whether this is a variable-length string type.
    pub fn is_variable_string(&self) -> bool {
        self.raw.library().is_variable_string(self.raw.id())
    }

    /// The native in-memory rendition of this datatype.
    pub fn native(&self, direction: TypeDirection) -> Result<Datatype> {
        let id = self.raw.library().native_type(self.raw.id(), direction);
        if !id.is_valid() {
            return Err(Error::MetadataQueryFailed {
                name: "native datatype".to_string(),
            });
        }
        Ok(Datatype::from_raw(Arc::clone(self.raw.library()), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use h5object_native::{AttrValue, MemLibrary};

    #[test]
    fn class_and_vl_queries() {
        let lib = Arc::new(MemLibrary::new());
        lib.set_attr("", "note", AttrValue::VarString("hi".into()));
        let root = lib.open_root();
        let attr = lib.open_attribute(root, "note");

        let dt = Datatype::from_raw(lib.clone(), lib.attribute_type(attr));
        assert_eq!(dt.class(), TypeClass::String);
        assert!(dt.is_variable_string());

        let native = dt.native(TypeDirection::Ascend).unwrap();
        assert_ne!(native.id(), dt.id());
        assert_eq!(native.class(), TypeClass::String);
        lib.close(attr);
        lib.close(root);
    }

    #[test]
    fn closed_handle_has_no_class() {
        let lib = Arc::new(MemLibrary::new());
        lib.set_attr("", "note", AttrValue::I64(1));
        let root = lib.open_root();
        let attr = lib.open_attribute(root, "note");

        let mut dt = Datatype::from_raw(lib.clone(), lib.attribute_type(attr));
        dt.close();
        assert_eq!(dt.class(), TypeClass::NoClass);
        assert!(dt.native(TypeDirection::Descend).is_err());
        lib.close(attr);
        lib.close(root);
    }
}
