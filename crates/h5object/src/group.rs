//! Group wrappers: the containers other objects are opened from.

use std::sync::Arc;

use h5object_native::{Hid, NativeLibrary, ObjectKind};

use crate::attribute::Attribute;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::object::Object;

/// An open group.
///
/// Groups are where parent handles come from: attributes, datasets,
/// and subgroups are opened relative to one, starting at
/// [`Group::root`].
#[derive(Debug)]
pub struct Group {
    object: Object,
}

impl Group {
    /// Opens the container's root group.
    pub fn root(library: Arc<dyn NativeLibrary>) -> Result<Group> {
        let id = library.open_root();
        if !id.is_valid() {
            return Err(Error::ResourceNotFound { name: "/".into() });
        }
        log::trace!("opened root group as {id}");
        Ok(Group {
            object: Object::from_raw(library, id, Hid::NONE, "/"),
        })
    }

    /// Opens the group `name` below `parent`.
    ///
    /// Fails with [`Error::InvalidSourceKind`] when the name resolves
    /// to something other than a group.
    pub fn open(library: Arc<dyn NativeLibrary>, parent: Hid, name: &str) -> Result<Group> {
        Group::try_from(Object::open_child(library, parent, name)?)
    }

    /// The wrapped handle, [`Hid::NONE`] once closed.
    pub fn id(&self) -> Hid {
        self.object.id()
    }

    /// Handle of the parent this group was opened under.
    pub fn parent_id(&self) -> Hid {
        self.object.parent_id()
    }

    /// The group's name; `"/"` for the root group.
    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// Whether the handle still denotes an open group.
    pub fn is_valid(&self) -> bool {
        self.object.is_valid()
    }

    /// Releases the handle; idempotent.
    pub fn close(&mut self) {
        self.object.close();
    }

    /// Opens an independent handle to the same group.
    pub fn try_clone(&self) -> Result<Group> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        // The root group has no parent location; re-open it directly.
        if !self.object.parent_id().is_valid() && self.object.name() == "/" {
            return Group::root(Arc::clone(self.object.library()));
        }
        self.object.try_clone().map(|object| Group { object })
    }

    /// Opens the attribute `name` attached to this group.
    pub fn attribute(&self, name: &str) -> Result<Attribute> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        Attribute::open(Arc::clone(self.object.library()), self.id(), name)
    }

    /// Opens the dataset at `name` (a `/`-separated path) below this
    /// group.
    pub fn dataset(&self, name: &str) -> Result<Dataset> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        Dataset::open(Arc::clone(self.object.library()), self.id(), name)
    }

    /// Opens the subgroup at `name` below this group.
    pub fn group(&self, name: &str) -> Result<Group> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        Group::open(Arc::clone(self.object.library()), self.id(), name)
    }

    /// Opens the named child as a generic [`Object`], whatever its
    /// kind.
    pub fn object(&self, name: &str) -> Result<Object> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        Object::open_child(Arc::clone(self.object.library()), self.id(), name)
    }
}

impl TryFrom<Object> for Group {
    type Error = Error;

    /// Converts a generic object into a group.
    fn try_from(object: Object) -> Result<Group> {
        let kind = object.kind();
        if !matches!(kind, ObjectKind::Group | ObjectKind::File) {
            log::error!("cannot make a group from {object}");
            return Err(Error::InvalidSourceKind {
                expected: ObjectKind::Group,
                actual: kind,
            });
        }
        Ok(Group { object })
    }
}
