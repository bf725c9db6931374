//! rawdoc - flattens typed API documentation trees into raw model records.
//!
//! An external static-analysis tool produces a hierarchical tree of
//! declarations (classes, interfaces, methods, enums, namespaces, ...). This
//! crate walks that tree and emits one flat, kind-tagged record per visible
//! declaration, plus one record per declared function parameter.
//! Relationships between records are identifier strings, never embedded
//! sub-records, so the consumer rebuilds structure by indexing on `id`.
//!
//! # Architecture
//!
//! - `model::source` - the ingested tree: arena storage, nodes with explicit
//!   optional facets (release tier, static marker, parameter list, excerpts,
//!   documentation comment)
//! - `model::raw` - the emitted records and their serialization shape
//! - `walker` - pre-order traversal with release-tier pruning, dispatching
//!   each node to a per-kind shaping rule
//! - `identity` - collaborator seams for identifier derivation and markup
//!   rendering, with deterministic reference implementations
//!
//! # Example
//!
//! ```
//! use rawdoc::{
//!     walk, DocItem, DocTree, HashResolver, ItemKind, PlainTextRenderer, ReleaseTag,
//! };
//!
//! let mut tree = DocTree::new();
//! let mut class = DocItem::new(ItemKind::Class, "Widget");
//! class.release_tag = Some(ReleaseTag::Public);
//! let class = tree.insert(None, class);
//!
//! let mut records = Vec::new();
//! walk(
//!     &tree,
//!     class,
//!     ReleaseTag::Public,
//!     &HashResolver,
//!     &PlainTextRenderer,
//!     |record| records.push(record),
//! )
//! .unwrap();
//! assert_eq!(records.len(), 1);
//! ```

pub mod error;
pub mod identity;
pub mod model;
pub mod walker;

// Re-export the public API
pub use error::WalkError;
pub use identity::{HashResolver, IdentityResolver, MarkupRenderer, PlainTextRenderer};
pub use model::raw::{
    RawBase, RawClass, RawEnum, RawInterface, RawKind, RawMethod, RawModel, RawNamespace,
    RawParameter, RawProperty,
};
pub use model::source::{
    DocComment, DocContent, DocItem, DocTree, Excerpt, ItemId, ItemKind, Param, ParameterList,
    ReleaseTag,
};
pub use walker::{walk, Walker};
