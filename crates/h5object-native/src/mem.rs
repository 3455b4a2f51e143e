//! In-memory reference backend.
//!
//! `MemLibrary` keeps a hierarchical store of groups, datasets, and
//! attributes behind a handle table, and implements [`NativeLibrary`]
//! with the same conventions a C library would use: sentinel handles
//! for failed lookups, negative statuses, and a ledger of
//! variable-length allocations that callers must return through
//! [`NativeLibrary::free_memory`].
//!
//! The population methods (`create_group`, `create_dataset`,
//! `set_attr`) are not part of the trait; they exist so tests and
//! embedders can lay out a container without a storage engine.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::handle::{BufToken, Hid, Status};
use crate::library::{
    AttributeInfo, NativeLibrary, ObjectKind, SpaceClass, TypeClass, TypeDirection,
};

const FAIL: Status = -1;
const OK: Status = 0;

/// Size in bytes of a variable-length heap reference.
const VL_REF_SIZE: u64 = 8;

/// Value stored in an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Fixed-length string; reads fill a caller-allocated buffer.
    FixedString(String),
    /// Variable-length string; reads go through a library-owned buffer.
    VarString(String),
    /// 64-bit signed integer.
    I64(i64),
    /// 64-bit float.
    F64(f64),
}

impl AttrValue {
    fn type_desc(&self) -> TypeDesc {
        match self {
            AttrValue::FixedString(s) => TypeDesc {
                class: TypeClass::String,
                variable: false,
                size: s.len() as u64,
            },
            AttrValue::VarString(_) => TypeDesc {
                class: TypeClass::String,
                variable: true,
                size: VL_REF_SIZE,
            },
            AttrValue::I64(_) => TypeDesc {
                class: TypeClass::Integer,
                variable: false,
                size: 8,
            },
            AttrValue::F64(_) => TypeDesc {
                class: TypeClass::Float,
                variable: false,
                size: 8,
            },
        }
    }

    /// Raw data size as reported through [`AttributeInfo`].
    fn data_size(&self) -> u64 {
        match self {
            AttrValue::FixedString(s) => s.len() as u64,
            // VL data stores a heap reference, not the data itself.
            AttrValue::VarString(_) => VL_REF_SIZE,
            AttrValue::I64(_) | AttrValue::F64(_) => 8,
        }
    }

    /// Bytes for a fixed-size read; `None` for variable-length values.
    fn fixed_bytes(&self) -> Option<Vec<u8>> {
        match self {
            AttrValue::FixedString(s) => Some(s.as_bytes().to_vec()),
            AttrValue::VarString(_) => None,
            AttrValue::I64(v) => Some(v.to_le_bytes().to_vec()),
            AttrValue::F64(v) => Some(v.to_le_bytes().to_vec()),
        }
    }
}

/// Element type of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemType {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Fixed-length string of the given byte size.
    FixedString(u32),
    /// Variable-length string.
    VarString,
}

impl ElemType {
    fn type_desc(&self) -> TypeDesc {
        match self {
            ElemType::I32 => TypeDesc {
                class: TypeClass::Integer,
                variable: false,
                size: 4,
            },
            ElemType::I64 => TypeDesc {
                class: TypeClass::Integer,
                variable: false,
                size: 8,
            },
            ElemType::F32 => TypeDesc {
                class: TypeClass::Float,
                variable: false,
                size: 4,
            },
            ElemType::F64 => TypeDesc {
                class: TypeClass::Float,
                variable: false,
                size: 8,
            },
            ElemType::FixedString(size) => TypeDesc {
                class: TypeClass::String,
                variable: false,
                size: *size as u64,
            },
            ElemType::VarString => TypeDesc {
                class: TypeClass::String,
                variable: true,
                size: VL_REF_SIZE,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TypeDesc {
    class: TypeClass,
    variable: bool,
    size: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct SpaceDesc {
    class: SpaceClass,
    dims: Vec<u64>,
}

#[derive(Debug)]
enum NodeKind {
    Group { children: HashMap<String, usize> },
    Dataset { elem: ElemType, space: SpaceDesc },
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    attrs: HashMap<String, AttrValue>,
}

impl Node {
    fn group() -> Self {
        Node {
            kind: NodeKind::Group {
                children: HashMap::new(),
            },
            attrs: HashMap::new(),
        }
    }
}

/// What an open handle refers to.
#[derive(Debug, Clone)]
enum Target {
    Node(usize),
    Attr { node: usize, name: String },
    Type(TypeDesc),
    Space(SpaceDesc),
}

#[derive(Debug)]
struct State {
    nodes: Vec<Node>,
    handles: HashMap<i64, Target>,
    next_id: i64,
    buffers: HashMap<u64, usize>,
    next_token: u64,
}

const ROOT: usize = 0;

impl State {
    fn new() -> Self {
        State {
            nodes: vec![Node::group()],
            handles: HashMap::new(),
            next_id: 1,
            buffers: HashMap::new(),
            next_token: 1,
        }
    }

    fn issue(&mut self, target: Target) -> Hid {
        let id = self.next_id;
        self.next_id += 1;
        self.handles.insert(id, target);
        Hid::from_raw(id)
    }

    fn target(&self, id: Hid) -> Option<&Target> {
        if !id.is_valid() {
            return None;
        }
        self.handles.get(&id.raw())
    }

    /// Node a handle refers to, if it is an open group/dataset handle.
    fn node_of(&self, id: Hid) -> Option<usize> {
        match self.target(id)? {
            Target::Node(node) => Some(*node),
            _ => None,
        }
    }

    /// Walks `/`-separated components starting from `from`.
    fn resolve_from(&self, from: usize, path: &str) -> Option<usize> {
        let mut node = from;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            match &self.nodes[node].kind {
                NodeKind::Group { children } => node = *children.get(part)?,
                NodeKind::Dataset { .. } => return None,
            }
        }
        Some(node)
    }

    /// Resolves the parent group of `path` from the root, creating
    /// intermediate groups, and returns `(parent, leaf_name)`.
    fn ensure_parent<'p>(&mut self, path: &'p str) -> Option<(usize, &'p str)> {
        let mut parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        let leaf = parts.pop()?;
        let mut node = ROOT;
        for part in parts {
            let existing = match &self.nodes[node].kind {
                NodeKind::Group { children } => children.get(part).copied(),
                NodeKind::Dataset { .. } => return None,
            };
            node = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::group());
                    if let NodeKind::Group { children } = &mut self.nodes[node].kind {
                        children.insert(part.to_string(), child);
                    }
                    child
                }
            };
        }
        Some((node, leaf))
    }

    fn insert_node(&mut self, path: &str, node: Node) -> Status {
        let Some((parent, leaf)) = self.ensure_parent(path) else {
            return FAIL;
        };
        let id = self.nodes.len();
        match &mut self.nodes[parent].kind {
            NodeKind::Group { children } => {
                if children.contains_key(leaf) {
                    return FAIL;
                }
                children.insert(leaf.to_string(), id);
            }
            NodeKind::Dataset { .. } => return FAIL,
        }
        self.nodes.push(node);
        OK
    }
}

/// In-memory implementation of [`NativeLibrary`].
///
/// All state sits behind a mutex, so a single instance can be shared
/// through `Arc<dyn NativeLibrary>` across wrappers.
#[derive(Debug)]
pub struct MemLibrary {
    state: Mutex<State>,
}

impl Default for MemLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MemLibrary {
    /// Creates an empty container with just a root group.
    pub fn new() -> Self {
        MemLibrary {
            state: Mutex::new(State::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Creates a group at `path`, with intermediate groups as needed.
    pub fn create_group(&self, path: &str) -> Status {
        self.state().insert_node(path, Node::group())
    }

    /// Creates a dataset at `path` with the given extents.
    pub fn create_dataset(&self, path: &str, elem: ElemType, extents: &[u64]) -> Status {
        self.state().insert_node(
            path,
            Node {
                kind: NodeKind::Dataset {
                    elem,
                    space: SpaceDesc {
                        class: SpaceClass::Simple,
                        dims: extents.to_vec(),
                    },
                },
                attrs: HashMap::new(),
            },
        )
    }

    /// Creates a rank-0 (scalar) dataset at `path`.
    pub fn create_scalar_dataset(&self, path: &str, elem: ElemType) -> Status {
        self.state().insert_node(
            path,
            Node {
                kind: NodeKind::Dataset {
                    elem,
                    space: SpaceDesc {
                        class: SpaceClass::Scalar,
                        dims: Vec::new(),
                    },
                },
                attrs: HashMap::new(),
            },
        )
    }

    /// Creates a dataset with a null dataspace (no data) at `path`.
    pub fn create_null_dataset(&self, path: &str, elem: ElemType) -> Status {
        self.state().insert_node(
            path,
            Node {
                kind: NodeKind::Dataset {
                    elem,
                    space: SpaceDesc {
                        class: SpaceClass::Null,
                        dims: Vec::new(),
                    },
                },
                attrs: HashMap::new(),
            },
        )
    }

    /// Sets an attribute on the object at `path` (`""` or `"/"` for the
    /// root group), replacing any previous value.
    pub fn set_attr(&self, path: &str, name: &str, value: AttrValue) -> Status {
        let mut st = self.state();
        let Some(node) = st.resolve_from(ROOT, path) else {
            return FAIL;
        };
        st.nodes[node].attrs.insert(name.to_string(), value);
        OK
    }

    /// Number of currently open handles, of any kind.
    pub fn open_handle_count(&self) -> usize {
        self.state().handles.len()
    }

    /// Number of variable-length allocations not yet returned through
    /// [`NativeLibrary::free_memory`].
    pub fn outstanding_buffers(&self) -> usize {
        self.state().buffers.len()
    }
}

impl NativeLibrary for MemLibrary {
    fn open_root(&self) -> Hid {
        let mut st = self.state();
        let id = st.issue(Target::Node(ROOT));
        log::trace!("open root group as {id}");
        id
    }

    fn open_child(&self, parent: Hid, name: &str) -> Hid {
        let mut st = self.state();
        let Some(parent_node) = st.node_of(parent) else {
            return Hid::NONE;
        };
        let Some(node) = st.resolve_from(parent_node, name) else {
            return Hid::NONE;
        };
        let id = st.issue(Target::Node(node));
        log::trace!("open child {name} of {parent} as {id}");
        id
    }

    fn open_attribute(&self, parent: Hid, name: &str) -> Hid {
        let mut st = self.state();
        let Some(node) = st.node_of(parent) else {
            return Hid::NONE;
        };
        if !st.nodes[node].attrs.contains_key(name) {
            return Hid::NONE;
        }
        let id = st.issue(Target::Attr {
            node,
            name: name.to_string(),
        });
        log::trace!("open attribute {name} of {parent} as {id}");
        id
    }

    fn close(&self, id: Hid) -> Status {
        if !id.is_valid() {
            return FAIL;
        }
        if self.state().handles.remove(&id.raw()).is_some() {
            log::trace!("close handle {id}");
            OK
        } else {
            FAIL
        }
    }

    fn is_valid(&self, id: Hid) -> bool {
        self.state().target(id).is_some()
    }

    fn kind(&self, id: Hid) -> ObjectKind {
        let st = self.state();
        match st.target(id) {
            Some(Target::Node(node)) => match st.nodes[*node].kind {
                NodeKind::Group { .. } => ObjectKind::Group,
                NodeKind::Dataset { .. } => ObjectKind::Dataset,
            },
            Some(Target::Attr { .. }) => ObjectKind::Attribute,
            Some(Target::Type(_)) => ObjectKind::Datatype,
            Some(Target::Space(_)) => ObjectKind::Dataspace,
            None => ObjectKind::Unknown,
        }
    }

    fn attribute_type(&self, attr: Hid) -> Hid {
        let mut st = self.state();
        let desc = match st.target(attr) {
            Some(Target::Attr { node, name }) => {
                st.nodes[*node].attrs.get(name).map(AttrValue::type_desc)
            }
            _ => None,
        };
        match desc {
            Some(desc) => st.issue(Target::Type(desc)),
            None => Hid::NONE,
        }
    }

    fn attribute_info(&self, attr: Hid) -> Option<AttributeInfo> {
        let st = self.state();
        match st.target(attr)? {
            Target::Attr { node, name } => {
                let value = st.nodes[*node].attrs.get(name)?;
                Some(AttributeInfo {
                    data_size: value.data_size(),
                })
            }
            _ => None,
        }
    }

    fn native_type(&self, tid: Hid, _direction: TypeDirection) -> Hid {
        let mut st = self.state();
        let desc = match st.target(tid) {
            Some(Target::Type(desc)) => Some(desc.clone()),
            _ => None,
        };
        match desc {
            Some(desc) => st.issue(Target::Type(desc)),
            None => Hid::NONE,
        }
    }

    fn type_class(&self, tid: Hid) -> TypeClass {
        match self.state().target(tid) {
            Some(Target::Type(desc)) => desc.class,
            _ => TypeClass::NoClass,
        }
    }

    fn is_variable_string(&self, tid: Hid) -> bool {
        match self.state().target(tid) {
            Some(Target::Type(desc)) => desc.variable && desc.class == TypeClass::String,
            _ => false,
        }
    }

    fn read_fixed(&self, attr: Hid, mem_type: Hid, buf: &mut [u8]) -> Status {
        let st = self.state();
        if !matches!(st.target(mem_type), Some(Target::Type(_))) {
            return FAIL;
        }
        let bytes = match st.target(attr) {
            Some(Target::Attr { node, name }) => {
                st.nodes[*node].attrs.get(name).and_then(AttrValue::fixed_bytes)
            }
            _ => None,
        };
        let Some(bytes) = bytes else {
            return FAIL;
        };
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        OK
    }

    fn read_variable(&self, attr: Hid, mem_type: Hid) -> Option<(BufToken, Vec<u8>)> {
        let mut st = self.state();
        if !matches!(st.target(mem_type), Some(Target::Type(_))) {
            return None;
        }
        let value = match st.target(attr) {
            Some(Target::Attr { node, name }) => st.nodes[*node].attrs.get(name).cloned(),
            _ => None,
        };
        match value {
            Some(AttrValue::VarString(s)) => {
                let token = st.next_token;
                st.next_token += 1;
                st.buffers.insert(token, s.len());
                log::trace!("allocate VL buffer {token} ({} bytes)", s.len());
                Some((BufToken::from_raw(token), s.into_bytes()))
            }
            _ => None,
        }
    }

    fn free_memory(&self, token: BufToken) -> Status {
        if self.state().buffers.remove(&token.raw()).is_some() {
            log::trace!("free VL buffer {}", token.raw());
            OK
        } else {
            FAIL
        }
    }

    fn dataset_type(&self, ds: Hid) -> Hid {
        let mut st = self.state();
        let desc = match st.target(ds) {
            Some(Target::Node(node)) => match &st.nodes[*node].kind {
                NodeKind::Dataset { elem, .. } => Some(elem.type_desc()),
                NodeKind::Group { .. } => None,
            },
            _ => None,
        };
        match desc {
            Some(desc) => st.issue(Target::Type(desc)),
            None => Hid::NONE,
        }
    }

    fn dataset_space(&self, ds: Hid) -> Hid {
        let mut st = self.state();
        let desc = match st.target(ds) {
            Some(Target::Node(node)) => match &st.nodes[*node].kind {
                NodeKind::Dataset { space, .. } => Some(space.clone()),
                NodeKind::Group { .. } => None,
            },
            _ => None,
        };
        match desc {
            Some(desc) => st.issue(Target::Space(desc)),
            None => Hid::NONE,
        }
    }

    fn space_class(&self, sid: Hid) -> SpaceClass {
        match self.state().target(sid) {
            Some(Target::Space(desc)) => desc.class,
            _ => SpaceClass::NoClass,
        }
    }

    fn space_is_simple(&self, sid: Hid) -> bool {
        self.space_class(sid) == SpaceClass::Simple
    }

    fn space_extents(&self, sid: Hid) -> Option<Vec<u64>> {
        match self.state().target(sid) {
            Some(Target::Space(desc)) => Some(desc.dims.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> MemLibrary {
        let lib = MemLibrary::new();
        assert_eq!(lib.create_group("sensors"), OK);
        assert_eq!(lib.create_dataset("sensors/temperature", ElemType::F64, &[3]), OK);
        assert_eq!(lib.create_scalar_dataset("sensors/offset", ElemType::I64), OK);
        assert_eq!(
            lib.set_attr(
                "sensors/temperature",
                "units",
                AttrValue::FixedString("meters".into()),
            ),
            OK
        );
        assert_eq!(
            lib.set_attr("sensors", "location", AttrValue::VarString("lab_a".into())),
            OK
        );
        assert_eq!(lib.set_attr("", "version", AttrValue::I64(3)), OK);
        lib
    }

    // -----------------------------------------------------------------------
    // Handle lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn open_and_close_root() {
        let lib = sample_library();
        let root = lib.open_root();
        assert!(root.is_valid());
        assert!(lib.is_valid(root));
        assert_eq!(lib.kind(root), ObjectKind::Group);
        assert_eq!(lib.close(root), OK);
        assert!(!lib.is_valid(root));
        assert_eq!(lib.open_handle_count(), 0);
    }

    #[test]
    fn double_close_fails() {
        let lib = sample_library();
        let root = lib.open_root();
        assert_eq!(lib.close(root), OK);
        assert!(lib.close(root) < 0);
    }

    #[test]
    fn close_sentinel_fails() {
        let lib = sample_library();
        assert!(lib.close(Hid::NONE) < 0);
        assert!(lib.close(Hid::from_raw(-7)) < 0);
    }

    #[test]
    fn each_open_issues_a_distinct_handle() {
        let lib = sample_library();
        let root = lib.open_root();
        let a = lib.open_child(root, "sensors");
        let b = lib.open_child(root, "sensors");
        assert!(a.is_valid() && b.is_valid());
        assert_ne!(a, b);
        // Closing one leaves the other open.
        assert_eq!(lib.close(a), OK);
        assert!(lib.is_valid(b));
    }

    #[test]
    fn garbage_handles_are_harmless() {
        let lib = sample_library();
        let bogus = Hid::from_raw(9999);
        assert!(!lib.is_valid(bogus));
        assert_eq!(lib.kind(bogus), ObjectKind::Unknown);
        assert_eq!(lib.open_child(bogus, "sensors"), Hid::NONE);
        assert_eq!(lib.attribute_type(bogus), Hid::NONE);
        assert!(lib.attribute_info(bogus).is_none());
        assert_eq!(lib.type_class(bogus), TypeClass::NoClass);
        assert_eq!(lib.space_class(bogus), SpaceClass::NoClass);
    }

    // -----------------------------------------------------------------------
    // Tree layout and lookups
    // -----------------------------------------------------------------------

    #[test]
    fn open_child_by_path() {
        let lib = sample_library();
        let root = lib.open_root();
        let ds = lib.open_child(root, "sensors/temperature");
        assert!(ds.is_valid());
        assert_eq!(lib.kind(ds), ObjectKind::Dataset);
    }

    #[test]
    fn open_missing_child_returns_sentinel() {
        let lib = sample_library();
        let root = lib.open_root();
        assert_eq!(lib.open_child(root, "nope"), Hid::NONE);
        assert_eq!(lib.open_child(root, "sensors/nope"), Hid::NONE);
    }

    #[test]
    fn create_intermediate_groups() {
        let lib = MemLibrary::new();
        assert_eq!(lib.create_dataset("a/b/c", ElemType::I32, &[2, 2]), OK);
        let root = lib.open_root();
        assert!(lib.open_child(root, "a/b/c").is_valid());
        assert_eq!(lib.kind(lib.open_child(root, "a/b")), ObjectKind::Group);
    }

    #[test]
    fn duplicate_create_fails() {
        let lib = MemLibrary::new();
        assert_eq!(lib.create_group("g"), OK);
        assert!(lib.create_group("g") < 0);
        assert!(lib.create_dataset("g", ElemType::I32, &[1]) < 0);
    }

    #[test]
    fn set_attr_on_missing_object_fails() {
        let lib = MemLibrary::new();
        assert!(lib.set_attr("ghost", "a", AttrValue::I64(1)) < 0);
    }

    // -----------------------------------------------------------------------
    // Attribute metadata and reads
    // -----------------------------------------------------------------------

    #[test]
    fn attribute_type_and_info() {
        let lib = sample_library();
        let root = lib.open_root();
        let ds = lib.open_child(root, "sensors/temperature");
        let attr = lib.open_attribute(ds, "units");
        assert!(attr.is_valid());
        assert_eq!(lib.kind(attr), ObjectKind::Attribute);

        let tid = lib.attribute_type(attr);
        assert_eq!(lib.kind(tid), ObjectKind::Datatype);
        assert_eq!(lib.type_class(tid), TypeClass::String);
        assert!(!lib.is_variable_string(tid));

        let info = lib.attribute_info(attr).unwrap();
        assert_eq!(info.data_size, 6);
    }

    #[test]
    fn variable_string_attribute_type() {
        let lib = sample_library();
        let root = lib.open_root();
        let grp = lib.open_child(root, "sensors");
        let attr = lib.open_attribute(grp, "location");
        let tid = lib.attribute_type(attr);
        assert_eq!(lib.type_class(tid), TypeClass::String);
        assert!(lib.is_variable_string(tid));
        assert_eq!(lib.attribute_info(attr).unwrap().data_size, VL_REF_SIZE);
    }

    #[test]
    fn numeric_attribute_class() {
        let lib = sample_library();
        let root = lib.open_root();
        let attr = lib.open_attribute(root, "version");
        let tid = lib.attribute_type(attr);
        assert_eq!(lib.type_class(tid), TypeClass::Integer);
        assert!(!lib.is_variable_string(tid));
    }

    #[test]
    fn read_fixed_string() {
        let lib = sample_library();
        let root = lib.open_root();
        let ds = lib.open_child(root, "sensors/temperature");
        let attr = lib.open_attribute(ds, "units");
        let tid = lib.attribute_type(attr);
        let native = lib.native_type(tid, TypeDirection::Ascend);
        assert_ne!(native, tid);

        let mut buf = vec![0u8; 6];
        assert_eq!(lib.read_fixed(attr, native, &mut buf), OK);
        assert_eq!(&buf, b"meters");
    }

    #[test]
    fn read_fixed_rejects_variable_value() {
        let lib = sample_library();
        let root = lib.open_root();
        let grp = lib.open_child(root, "sensors");
        let attr = lib.open_attribute(grp, "location");
        let tid = lib.attribute_type(attr);
        let mut buf = vec![0u8; 8];
        assert!(lib.read_fixed(attr, tid, &mut buf) < 0);
    }

    #[test]
    fn read_variable_and_free() {
        let lib = sample_library();
        let root = lib.open_root();
        let grp = lib.open_child(root, "sensors");
        let attr = lib.open_attribute(grp, "location");
        let tid = lib.attribute_type(attr);

        let (token, bytes) = lib.read_variable(attr, tid).unwrap();
        assert_eq!(bytes, b"lab_a");
        assert_eq!(lib.outstanding_buffers(), 1);
        assert_eq!(lib.free_memory(token), OK);
        assert_eq!(lib.outstanding_buffers(), 0);
        // Double free fails.
        assert!(lib.free_memory(token) < 0);
    }

    #[test]
    fn read_variable_rejects_fixed_value() {
        let lib = sample_library();
        let root = lib.open_root();
        let ds = lib.open_child(root, "sensors/temperature");
        let attr = lib.open_attribute(ds, "units");
        let tid = lib.attribute_type(attr);
        assert!(lib.read_variable(attr, tid).is_none());
        assert_eq!(lib.outstanding_buffers(), 0);
    }

    // -----------------------------------------------------------------------
    // Dataset type and space queries
    // -----------------------------------------------------------------------

    #[test]
    fn dataset_type_and_space() {
        let lib = sample_library();
        let root = lib.open_root();
        let ds = lib.open_child(root, "sensors/temperature");

        let tid = lib.dataset_type(ds);
        assert_eq!(lib.type_class(tid), TypeClass::Float);

        let sid = lib.dataset_space(ds);
        assert_eq!(lib.kind(sid), ObjectKind::Dataspace);
        assert_eq!(lib.space_class(sid), SpaceClass::Simple);
        assert!(lib.space_is_simple(sid));
        assert_eq!(lib.space_extents(sid).unwrap(), vec![3]);
    }

    #[test]
    fn scalar_dataset_space() {
        let lib = sample_library();
        let root = lib.open_root();
        let ds = lib.open_child(root, "sensors/offset");
        let sid = lib.dataset_space(ds);
        assert_eq!(lib.space_class(sid), SpaceClass::Scalar);
        assert!(!lib.space_is_simple(sid));
        assert!(lib.space_extents(sid).unwrap().is_empty());
    }

    #[test]
    fn null_dataset_space() {
        let lib = MemLibrary::new();
        assert_eq!(lib.create_null_dataset("empty", ElemType::F32), OK);
        let root = lib.open_root();
        let ds = lib.open_child(root, "empty");
        let sid = lib.dataset_space(ds);
        assert_eq!(lib.space_class(sid), SpaceClass::Null);
        assert!(!lib.space_is_simple(sid));
        assert!(lib.space_extents(sid).unwrap().is_empty());
    }

    #[test]
    fn dataset_queries_reject_groups() {
        let lib = sample_library();
        let root = lib.open_root();
        let grp = lib.open_child(root, "sensors");
        assert_eq!(lib.dataset_type(grp), Hid::NONE);
        assert_eq!(lib.dataset_space(grp), Hid::NONE);
    }

    #[test]
    fn fixed_string_dataset_type() {
        let lib = MemLibrary::new();
        assert_eq!(lib.create_dataset("names", ElemType::FixedString(16), &[4]), OK);
        let root = lib.open_root();
        let ds = lib.open_child(root, "names");
        let tid = lib.dataset_type(ds);
        assert_eq!(lib.type_class(tid), TypeClass::String);
        assert!(!lib.is_variable_string(tid));
    }
}
