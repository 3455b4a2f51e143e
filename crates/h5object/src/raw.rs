//! RAII ownership of a single native handle.

use std::fmt;
use std::sync::Arc;

use h5object_native::{Hid, NativeLibrary};

/// Whether a wrapper releases its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The handle is released through the library exactly once, on
    /// explicit close or on drop.
    Owned,
    /// The handle is a view on a resource owned elsewhere; closing
    /// detaches without releasing.
    Borrowed,
}

/// A native handle paired with the library that issued it.
///
/// This is the one place release happens: [`close`](RawHandle::close)
/// resets the id to [`Hid::NONE`] after releasing, which makes it
/// idempotent and makes drop-after-close a no-op. Borrowed handles are
/// never released. Every wrapper object composes over one of these, so
/// attributes, datasets, datatypes, dataspaces, and groups all share
/// the same close path.
pub struct RawHandle {
    library: Arc<dyn NativeLibrary>,
    id: Hid,
    ownership: Ownership,
}

impl RawHandle {
    /// Takes ownership of `id`; it will be released exactly once.
    pub fn owned(library: Arc<dyn NativeLibrary>, id: Hid) -> Self {
        RawHandle {
            library,
            id,
            ownership: Ownership::Owned,
        }
    }

    /// Wraps `id` as a view; it will never be released here.
    pub fn borrowed(library: Arc<dyn NativeLibrary>, id: Hid) -> Self {
        RawHandle {
            library,
            id,
            ownership: Ownership::Borrowed,
        }
    }

    /// The library this handle belongs to.
    pub fn library(&self) -> &Arc<dyn NativeLibrary> {
        &self.library
    }

    /// The wrapped handle, [`Hid::NONE`] after close.
    pub fn id(&self) -> Hid {
        self.id
    }

    /// Whether the handle still denotes a resource.
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
    }

    /// How this handle is held.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Releases the handle if owned, then resets it to the sentinel.
    ///
    /// Safe to call any number of times; only the first call on an
    /// owned handle reaches the library.
    pub fn close(&mut self) {
        if self.id.is_valid() && self.ownership == Ownership::Owned {
            let status = self.library.close(self.id);
            if status < 0 {
                log::warn!("closing handle {} failed with status {status}", self.id);
            } else {
                log::trace!("closed handle {}", self.id);
            }
        }
        self.id = Hid::NONE;
    }
}

impl Drop for RawHandle {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawHandle")
            .field("id", &self.id)
            .field("ownership", &self.ownership)
            .finish()
    }
}
