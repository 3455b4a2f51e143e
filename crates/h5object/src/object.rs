//! Shared base for named wrapper objects.

use std::fmt;
use std::sync::Arc;

use h5object_native::{Hid, NativeLibrary, ObjectKind};

use crate::error::{Error, Result};
use crate::raw::RawHandle;

/// Base state shared by every named wrapper object.
///
/// Pairs the owned handle with the logical location that identifies
/// the entity inside the container: the parent's handle and the name
/// under that parent. The location is what makes independent
/// duplication possible: [`try_clone`](Object::try_clone) asks the
/// library for a fresh handle to the same named path instead of ever
/// copying the raw handle value.
#[derive(Debug)]
pub struct Object {
    raw: RawHandle,
    parent: Hid,
    name: String,
}

impl Object {
    /// Wraps an already-open handle, taking ownership of it.
    ///
    /// No library call is made; use this when the handle was produced
    /// by some other code path.
    pub fn from_raw(
        library: Arc<dyn NativeLibrary>,
        id: Hid,
        parent: Hid,
        name: impl Into<String>,
    ) -> Object {
        Object {
            raw: RawHandle::owned(library, id),
            parent,
            name: name.into(),
        }
    }

    /// Wraps a handle owned elsewhere; it will not be released here.
    pub fn borrow_raw(
        library: Arc<dyn NativeLibrary>,
        id: Hid,
        parent: Hid,
        name: impl Into<String>,
    ) -> Object {
        Object {
            raw: RawHandle::borrowed(library, id),
            parent,
            name: name.into(),
        }
    }

    /// Opens the named object below `parent`.
    pub(crate) fn open_child(
        library: Arc<dyn NativeLibrary>,
        parent: Hid,
        name: &str,
    ) -> Result<Object> {
        let id = library.open_child(parent, name);
        if !id.is_valid() {
            return Err(Error::ResourceNotFound {
                name: name.to_string(),
            });
        }
        log::trace!("opened {name} under {parent} as {id}");
        Ok(Object::from_raw(library, id, parent, name))
    }

    /// The wrapped handle, [`Hid::NONE`] once closed.
    pub fn id(&self) -> Hid {
        self.raw.id()
    }

    /// Handle of the parent this object was opened under.
    pub fn parent_id(&self) -> Hid {
        self.parent
    }

    /// Name of the entity under its parent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the handle still denotes a resource.
    pub fn is_valid(&self) -> bool {
        self.raw.is_valid()
    }

    /// What kind of entity the handle currently denotes.
    pub fn kind(&self) -> ObjectKind {
        self.raw.library().kind(self.raw.id())
    }

    /// The library this object belongs to.
    pub fn library(&self) -> &Arc<dyn NativeLibrary> {
        self.raw.library()
    }

    /// Releases the handle; idempotent.
    pub fn close(&mut self) {
        self.raw.close();
    }

    /// Opens an independent handle to the same named entity.
    ///
    /// The duplicate owns its own handle; closing or dropping either
    /// object leaves the other fully usable. Duplication always goes
    /// through the library; a raw handle value is never shared
    /// between two owners.
    pub fn try_clone(&self) -> Result<Object> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        if self.name.is_empty() || !self.parent.is_valid() {
            return Err(Error::NotReopenable {
                name: self.name.clone(),
            });
        }
        let library = Arc::clone(self.raw.library());
        let id = match self.kind() {
            ObjectKind::Attribute => library.open_attribute(self.parent, &self.name),
            _ => library.open_child(self.parent, &self.name),
        };
        if !id.is_valid() {
            return Err(Error::ResourceNotFound {
                name: self.name.clone(),
            });
        }
        log::trace!("re-opened {} as {id}", self.name);
        Ok(Object {
            raw: RawHandle::owned(library, id),
            parent: self.parent,
            name: self.name.clone(),
        })
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" (id {})", self.kind(), self.name, self.id())
    }
}
