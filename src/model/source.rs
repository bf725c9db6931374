// Ingestion-side documentation tree.
//
// The source AST arrives from an external static-analysis tool. Rather than
// probing nodes for capabilities at every mapping site, each capability is an
// explicit optional facet on `DocItem`, decided once at ingestion time.

use serde::{Deserialize, Serialize};

/// Declaration kinds as produced by the external analysis tool.
///
/// This set is closed by construction of the source tree. Structural kinds
/// (`Model`, `Package`, `EntryPoint`, `CallSignature`, `IndexSignature`,
/// `None`) are traversed but never produce a record of their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKind {
    CallSignature,
    Class,
    Constructor,
    ConstructSignature,
    EntryPoint,
    Enum,
    EnumMember,
    Function,
    IndexSignature,
    Interface,
    Method,
    MethodSignature,
    Model,
    Namespace,
    None,
    Package,
    Property,
    PropertySignature,
    TypeAlias,
    Variable,
}

impl ItemKind {
    /// Whether this kind contributes a segment to a qualified name.
    ///
    /// Mirrors the scoped-name rule of the source tool: the package wrapper,
    /// entry point, and synthetic root are invisible in `fullname`.
    pub(crate) fn is_scope_segment(self) -> bool {
        !matches!(
            self,
            ItemKind::Model | ItemKind::Package | ItemKind::EntryPoint | ItemKind::None
        )
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Release tier attached to a documentation node.
///
/// Ordering matters: `None < Internal < Alpha < Beta < Public`, so a higher
/// minimum tier is more restrictive when walking.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum ReleaseTag {
    #[default]
    None,
    Internal,
    Alpha,
    Beta,
    Public,
}

impl ReleaseTag {
    /// Lower-case mirror used for the record `visibility` field.
    pub fn as_visibility(self) -> &'static str {
        match self {
            ReleaseTag::None => "none",
            ReleaseTag::Internal => "internal",
            ReleaseTag::Alpha => "alpha",
            ReleaseTag::Beta => "beta",
            ReleaseTag::Public => "public",
        }
    }
}

/// Opaque documentation content block, handed to the markup renderer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocContent {
    pub text: String,
}

impl DocContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Parsed documentation comment attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocComment {
    /// Full raw documentation text, re-emitted verbatim on the record.
    pub raw: String,
    pub summary: Option<DocContent>,
    pub remarks: Option<DocContent>,
    pub deprecated: Option<DocContent>,
    pub returns: Option<DocContent>,
    /// Aggregated `@param`-style blocks in declaration order. Used as a
    /// positional fallback when a parameter has no dedicated block.
    pub params: Vec<DocContent>,
}

/// One declared parameter of a function-like node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// Parameter type excerpt text.
    pub type_text: String,
    /// Dedicated documentation block attached directly to this parameter.
    pub doc: Option<DocContent>,
}

impl Param {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            doc: None,
        }
    }
}

/// Parameter-list facet carried by function-like nodes.
///
/// The overload index travels with the parameter list because the source tool
/// only assigns one where a parameter list exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterList {
    /// Zero-based position among same-named siblings.
    pub overload_index: u32,
    pub parameters: Vec<Param>,
}

/// Declaration excerpt for a node, with and without modifier keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    /// Declaration text without modifiers.
    pub text: String,
    /// Full declaration text including modifier keywords.
    pub with_modifiers: String,
}

impl Excerpt {
    /// Excerpt whose modifier-bearing form equals its plain text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            with_modifiers: text.clone(),
            text,
        }
    }

    pub fn with_modifiers(text: impl Into<String>, with_modifiers: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            with_modifiers: with_modifiers.into(),
        }
    }
}

/// Handle to a node inside a [`DocTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    /// Arena index of this node. Stable for the lifetime of the tree.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the ingested documentation tree.
///
/// Facets are `Option`s: `None` means the node does not carry the facet at
/// all, which is distinct from a facet carrying an empty or default value.
/// In particular `release_tag: None` means "never pruned by tier" while
/// `Some(ReleaseTag::None)` is the lowest tier.
#[derive(Debug, Clone, PartialEq)]
pub struct DocItem {
    pub kind: ItemKind,
    /// Short display name.
    pub name: String,
    pub parent: Option<ItemId>,
    /// Direct children in declaration order.
    pub members: Vec<ItemId>,
    pub release_tag: Option<ReleaseTag>,
    /// Static/instance marker; absent on kinds without that distinction.
    pub is_static: Option<bool>,
    pub parameter_list: Option<ParameterList>,
    /// Return-type excerpt text.
    pub return_type: Option<String>,
    /// Declared-type excerpt for properties and variables; initializer
    /// excerpt for enum members.
    pub type_text: Option<String>,
    pub excerpt: Option<Excerpt>,
    pub docs: Option<DocComment>,
}

impl DocItem {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            parent: None,
            members: Vec::new(),
            release_tag: None,
            is_static: None,
            parameter_list: None,
            return_type: None,
            type_text: None,
            excerpt: None,
            docs: None,
        }
    }
}

/// Arena-backed documentation tree.
///
/// Nodes own nothing but indices, which gives us parent back-references and
/// ordered member lists without cyclic ownership.
#[derive(Debug, Clone, Default)]
pub struct DocTree {
    items: Vec<DocItem>,
}

impl DocTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` under `parent`, wiring both directions of the link.
    /// Returns the new node's handle.
    pub fn insert(&mut self, parent: Option<ItemId>, mut item: DocItem) -> ItemId {
        let id = ItemId(self.items.len());
        item.parent = parent;
        self.items.push(item);
        if let Some(p) = parent {
            self.items[p.0].members.push(id);
        }
        id
    }

    pub fn get(&self, id: ItemId) -> &DocItem {
        &self.items[id.0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fully qualified name of `id` within its containing package: ancestor
    /// display names joined with `.`, skipping structural kinds.
    pub fn scoped_name(&self, id: ItemId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut current = Some(id);
        while let Some(cursor) = current {
            let item = self.get(cursor);
            if item.kind.is_scope_segment() {
                parts.push(&item.name);
            }
            current = item.parent;
        }
        parts.reverse();
        parts.join(".")
    }
}
