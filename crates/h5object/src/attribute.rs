//! Named metadata attributes.

use std::sync::Arc;

use h5object_native::{BufToken, Hid, NativeLibrary, TypeClass, TypeDirection};

use crate::datatype::Datatype;
use crate::error::{Error, Result};
use crate::object::Object;

/// An open attribute: a small named value attached to a group or
/// dataset.
///
/// The handle is released exactly once, on drop or explicit
/// [`close`](Attribute::close). `Attribute` deliberately does not
/// implement `Clone`; an independent second handle to the same
/// attribute comes from [`try_clone`](Attribute::try_clone), which
/// re-opens it by name.
#[derive(Debug)]
pub struct Attribute {
    object: Object,
}

/// Returns a library-owned variable-length buffer when dropped, so the
/// allocation goes back through the library's own deallocator exactly
/// once on every exit path.
struct VarLenGuard<'a> {
    library: &'a dyn NativeLibrary,
    token: BufToken,
}

impl Drop for VarLenGuard<'_> {
    fn drop(&mut self) {
        let status = self.library.free_memory(self.token);
        if status < 0 {
            log::warn!(
                "returning VL buffer {} failed with status {status}",
                self.token.raw()
            );
        }
    }
}

impl Attribute {
    /// Opens the attribute `name` attached to the object `parent`.
    pub fn open(library: Arc<dyn NativeLibrary>, parent: Hid, name: &str) -> Result<Attribute> {
        let id = library.open_attribute(parent, name);
        if !id.is_valid() {
            return Err(Error::ResourceNotFound {
                name: name.to_string(),
            });
        }
        log::trace!("opened attribute {name} under {parent} as {id}");
        Ok(Attribute {
            object: Object::from_raw(library, id, parent, name),
        })
    }

    /// Wraps an already-open attribute handle, taking ownership.
    ///
    /// No library call is made.
    pub fn from_raw(
        library: Arc<dyn NativeLibrary>,
        id: Hid,
        parent: Hid,
        name: impl Into<String>,
    ) -> Attribute {
        Attribute {
            object: Object::from_raw(library, id, parent, name),
        }
    }

    /// The wrapped handle, [`Hid::NONE`] once closed.
    pub fn id(&self) -> Hid {
        self.object.id()
    }

    /// Handle of the object this attribute is attached to.
    pub fn parent_id(&self) -> Hid {
        self.object.parent_id()
    }

    /// The attribute's name.
    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// Whether the handle still denotes an open attribute.
    pub fn is_valid(&self) -> bool {
        self.object.is_valid()
    }

    /// Releases the handle; idempotent.
    pub fn close(&mut self) {
        self.object.close();
    }

    /// Opens an independent handle to the same attribute.
    ///
    /// Both attributes must then be released separately; neither
    /// affects the other.
    pub fn try_clone(&self) -> Result<Attribute> {
        self.object.try_clone().map(|object| Attribute { object })
    }

    /// Reads the stored value as a string.
    ///
    /// Only string-class attributes are supported; numeric and other
    /// classes fail with [`Error::TypeMismatch`]. Both encodings the
    /// library uses are handled: for variable-length strings the
    /// library allocates the buffer and it is returned through the
    /// library's own deallocator, for fixed-length strings the buffer
    /// is allocated here, sized from the attribute metadata, and
    /// decoded up to the first NUL (fixed strings are null padded).
    ///
    /// `Ok("")` means the attribute genuinely stores an empty string;
    /// all failures are reported as errors.
    pub fn read_string(&self) -> Result<String> {
        if !self.is_valid() {
            return Err(Error::HandleClosed);
        }
        let library = self.object.library();

        let tid = library.attribute_type(self.id());
        if !tid.is_valid() {
            return Err(Error::MetadataQueryFailed {
                name: self.name().to_string(),
            });
        }
        let stored = Datatype::from_raw(Arc::clone(library), tid);
        let class = stored.class();
        if class != TypeClass::String {
            return Err(Error::TypeMismatch {
                expected: TypeClass::String,
                actual: class,
            });
        }

        let info = library
            .attribute_info(self.id())
            .ok_or_else(|| Error::MetadataQueryFailed {
                name: self.name().to_string(),
            })?;

        let native = stored.native(TypeDirection::Ascend)?;
        let bytes = if stored.is_variable_string() {
            let (token, bytes) = library
                .read_variable(self.id(), native.id())
                .ok_or_else(|| Error::ReadFailed {
                    name: self.name().to_string(),
                })?;
            let _buf = VarLenGuard {
                library: library.as_ref(),
                token,
            };
            bytes
        } else {
            let mut buf = vec![0u8; info.data_size as usize];
            let status = library.read_fixed(self.id(), native.id(), &mut buf);
            if status < 0 {
                return Err(Error::ReadFailed {
                    name: self.name().to_string(),
                });
            }
            buf
        };

        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }

    /// Reads the stored value as a string, mapping every failure to an
    /// empty string.
    ///
    /// The failure is still reported through the `log` facade. Use
    /// [`read_string`](Attribute::read_string) when the caller needs
    /// to tell an empty value from an error.
    pub fn read_string_or_empty(&self) -> String {
        match self.read_string() {
            Ok(value) => value,
            Err(err) => {
                log::error!(
                    "reading attribute \"{}\" as string failed: {err}",
                    self.name()
                );
                String::new()
            }
        }
    }
}
