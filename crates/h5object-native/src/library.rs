//! The handle-based interface every storage backend implements.

use std::fmt;

use crate::handle::{BufToken, Hid, Status};

/// Class of a stored element type, as reported for a datatype handle.
///
/// The numbering follows the native library's type classes; only the
/// string class gets special treatment in the wrapper layer, the rest
/// exist so callers can classify what they found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Fixed-point (integer) types.
    Integer,
    /// Floating-point types.
    Float,
    /// Time types (rarely used).
    Time,
    /// String types, both fixed- and variable-length.
    String,
    /// Bit field types.
    BitField,
    /// Opaque byte blobs.
    Opaque,
    /// Compound (record) types.
    Compound,
    /// Object and region references.
    Reference,
    /// Enumeration types.
    Enum,
    /// Variable-length sequence types.
    VariableLength,
    /// Array types.
    Array,
    /// Reported for handles that do not denote a datatype.
    NoClass,
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeClass::Integer => "integer",
            TypeClass::Float => "float",
            TypeClass::Time => "time",
            TypeClass::String => "string",
            TypeClass::BitField => "bitfield",
            TypeClass::Opaque => "opaque",
            TypeClass::Compound => "compound",
            TypeClass::Reference => "reference",
            TypeClass::Enum => "enum",
            TypeClass::VariableLength => "vlen",
            TypeClass::Array => "array",
            TypeClass::NoClass => "no-class",
        };
        write!(f, "{name}")
    }
}

/// Class of a dataspace: the shape descriptor of a dataset or attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceClass {
    /// A single element, rank 0.
    Scalar,
    /// An N-dimensional array.
    Simple,
    /// No data at all.
    Null,
    /// Reported for handles that do not denote a dataspace.
    NoClass,
}

/// What kind of entity a handle currently denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A storage container root.
    File,
    /// A group of named children.
    Group,
    /// A named, typed, shaped array resource.
    Dataset,
    /// A datatype handle.
    Datatype,
    /// A dataspace handle.
    Dataspace,
    /// A named metadata value attached to another object.
    Attribute,
    /// The handle is closed or unrecognized.
    Unknown,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::File => "file",
            ObjectKind::Group => "group",
            ObjectKind::Dataset => "dataset",
            ObjectKind::Datatype => "datatype",
            ObjectKind::Dataspace => "dataspace",
            ObjectKind::Attribute => "attribute",
            ObjectKind::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Search direction for native type resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDirection {
    /// Prefer the smallest matching native type.
    Ascend,
    /// Prefer the largest matching native type.
    Descend,
}

/// Metadata the library reports for an open attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeInfo {
    /// Size in bytes of the attribute's raw data.
    ///
    /// For fixed-length strings this is the full string storage size;
    /// for variable-length data it is the size of the heap reference,
    /// not of the data itself.
    pub data_size: u64,
}

/// The handle-based contract of the native storage library.
///
/// The shape of this trait is deliberately C-flavored: lookups that
/// fail return the [`Hid::NONE`] sentinel (or an otherwise invalid
/// handle) instead of an error value, mutating calls report failure
/// through a negative [`Status`], and variable-length reads hand out
/// allocations that stay owned by the library until returned through
/// [`free_memory`](NativeLibrary::free_memory). The wrapper layer is
/// responsible for turning those conventions into `Result`s.
///
/// Handles issued by one library instance are meaningless to another.
/// Implementations must tolerate arbitrary garbage handles on every
/// call and fail with the sentinel/negative-status convention rather
/// than panic.
pub trait NativeLibrary: Send + Sync {
    /// Opens a handle to the container root group.
    fn open_root(&self) -> Hid;

    /// Opens the named object (group or dataset) below `parent`.
    ///
    /// `name` may be a `/`-separated path. Returns an invalid handle if
    /// the parent is not an open group or no such child exists.
    fn open_child(&self, parent: Hid, name: &str) -> Hid;

    /// Opens the named attribute attached to the object `parent`.
    fn open_attribute(&self, parent: Hid, name: &str) -> Hid;

    /// Releases a handle of any kind.
    ///
    /// Closing a handle that is not open fails with a negative status;
    /// the library releases each handle at most once.
    fn close(&self, id: Hid) -> Status;

    /// Whether `id` currently denotes an open resource in this library.
    fn is_valid(&self, id: Hid) -> bool;

    /// The kind of entity `id` denotes, [`ObjectKind::Unknown`] if none.
    fn kind(&self, id: Hid) -> ObjectKind;

    /// Returns a fresh handle to the stored datatype of an attribute.
    ///
    /// The caller owns the returned handle and must close it.
    fn attribute_type(&self, attr: Hid) -> Hid;

    /// Queries attribute metadata; `None` on failure.
    fn attribute_info(&self, attr: Hid) -> Option<AttributeInfo>;

    /// Returns a fresh handle to the native rendition of a datatype.
    ///
    /// The caller owns the returned handle and must close it.
    fn native_type(&self, tid: Hid, direction: TypeDirection) -> Hid;

    /// The class of the datatype `tid` denotes.
    fn type_class(&self, tid: Hid) -> TypeClass;

    /// Whether `tid` denotes a variable-length string type.
    fn is_variable_string(&self, tid: Hid) -> bool;

    /// Reads a fixed-size attribute value into the caller's buffer.
    ///
    /// The buffer must be at least `data_size` bytes (from
    /// [`attribute_info`](NativeLibrary::attribute_info)); shorter
    /// buffers receive a truncated value.
    fn read_fixed(&self, attr: Hid, mem_type: Hid, buf: &mut [u8]) -> Status;

    /// Reads a variable-length attribute value.
    ///
    /// On success the returned bytes come with a token for the
    /// library-side allocation backing them; the caller must hand the
    /// token back through [`free_memory`](NativeLibrary::free_memory)
    /// exactly once. Fails (`None`) if the attribute does not hold
    /// variable-length data.
    fn read_variable(&self, attr: Hid, mem_type: Hid) -> Option<(BufToken, Vec<u8>)>;

    /// Returns a library-owned allocation.
    ///
    /// Double frees and unknown tokens fail with a negative status.
    fn free_memory(&self, token: BufToken) -> Status;

    /// Returns a fresh handle to the stored datatype of a dataset.
    ///
    /// The caller owns the returned handle and must close it.
    fn dataset_type(&self, ds: Hid) -> Hid;

    /// Returns a fresh handle to the shape descriptor of a dataset.
    ///
    /// The caller owns the returned handle and must close it.
    fn dataset_space(&self, ds: Hid) -> Hid;

    /// The class of the dataspace `sid` denotes.
    fn space_class(&self, sid: Hid) -> SpaceClass;

    /// Whether `sid` denotes a simple (N-dimensional) dataspace.
    fn space_is_simple(&self, sid: Hid) -> bool;

    /// Per-dimension extents of a dataspace; `None` on failure.
    ///
    /// Scalar and null dataspaces report an empty extent list.
    fn space_extents(&self, sid: Hid) -> Option<Vec<u64>>;
}
