// Data model for the flattening pipeline.
//
// Split in two halves:
// - source.rs: the ingested documentation tree (arena, nodes, facets)
// - raw.rs: the flat, id-addressable records this crate emits

pub mod raw;
pub mod source;

pub use raw::{
    RawBase, RawClass, RawEnum, RawInterface, RawKind, RawMethod, RawModel, RawNamespace,
    RawParameter, RawProperty,
};
pub use source::{
    DocComment, DocContent, DocItem, DocTree, Excerpt, ItemId, ItemKind, Param, ParameterList,
    ReleaseTag,
};
