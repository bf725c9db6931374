// Output-side raw model records.
//
// Records are flat and id-addressable: relationships between records are
// expressed as identifier strings, never as embedded sub-records, so the
// consumer reassembles structure by indexing on `id`.

use serde::Serialize;

use crate::error::WalkError;
use crate::model::source::{ItemKind, ReleaseTag};

/// Record discriminant. Closed set; every emitted record carries exactly one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum RawKind {
    Class,
    Interface,
    Constructor,
    ConstructSignature,
    Enum,
    EnumMember,
    Function,
    Method,
    MethodSignature,
    Namespace,
    Property,
    PropertySignature,
    TypeAlias,
    Variable,
    Parameter,
}

impl std::fmt::Display for RawKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<ItemKind> for RawKind {
    type Error = WalkError;

    /// Structural kinds have no record representation; reaching this
    /// conversion with one of them is a contract violation with the source
    /// tree and fails loudly.
    fn try_from(kind: ItemKind) -> Result<Self, WalkError> {
        match kind {
            ItemKind::Class => Ok(RawKind::Class),
            ItemKind::Constructor => Ok(RawKind::Constructor),
            ItemKind::ConstructSignature => Ok(RawKind::ConstructSignature),
            ItemKind::Enum => Ok(RawKind::Enum),
            ItemKind::EnumMember => Ok(RawKind::EnumMember),
            ItemKind::Function => Ok(RawKind::Function),
            ItemKind::Interface => Ok(RawKind::Interface),
            ItemKind::Method => Ok(RawKind::Method),
            ItemKind::MethodSignature => Ok(RawKind::MethodSignature),
            ItemKind::Namespace => Ok(RawKind::Namespace),
            ItemKind::Property => Ok(RawKind::Property),
            ItemKind::PropertySignature => Ok(RawKind::PropertySignature),
            ItemKind::TypeAlias => Ok(RawKind::TypeAlias),
            ItemKind::Variable => Ok(RawKind::Variable),
            ItemKind::CallSignature
            | ItemKind::EntryPoint
            | ItemKind::IndexSignature
            | ItemKind::Model
            | ItemKind::None
            | ItemKind::Package => Err(WalkError::UnsupportedKind(kind)),
        }
    }
}

/// Base shape shared by every record variant.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawBase {
    /// Stable identifier, unique within a walk.
    pub id: String,
    /// Identifier of the enclosing node; absent at the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub permalink: String,
    /// Short display name.
    pub name: String,
    /// Fully qualified name within the containing package.
    pub fullname: String,
    pub kind: RawKind,
    pub release_tag: ReleaseTag,
    /// Lower-case mirror of `release_tag`; `"public"` when the node carries
    /// no release-tier facet at all.
    pub visibility: String,
    /// Declaration excerpt with modifiers included; absent when the node has
    /// no non-empty excerpt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_markup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks_markup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_markup: Option<String>,
    /// Full raw documentation text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsdoc: Option<String>,
}

/// Class record: members referenced by id, never embedded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawClass {
    #[serde(flatten)]
    pub base: RawBase,
    /// Id of the single constructor member, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,
    pub properties: Vec<String>,
    /// Only overload-index-0 methods; later overloads are emitted as their
    /// own records but excluded here.
    pub methods: Vec<String>,
}

/// Interface record. Mirrors [`RawClass`] over signature-kind members.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawInterface {
    #[serde(flatten)]
    pub base: RawBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,
    pub properties: Vec<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawEnum {
    #[serde(flatten)]
    pub base: RawBase,
    /// Enum member ids.
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawNamespace {
    #[serde(flatten)]
    pub base: RawBase,
    /// All direct member ids, unfiltered by kind.
    pub members: Vec<String>,
}

/// Function-like record: methods, method signatures, free functions,
/// constructors, and construct signatures.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawMethod {
    #[serde(flatten)]
    pub base: RawBase,
    pub return_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_markup: Option<String>,
    pub is_static: bool,
    pub overload_index: u32,
    /// Ids of same-named siblings under the same parent.
    pub overloads: Vec<String>,
    /// Parameter record ids in declaration order.
    pub parameters: Vec<String>,
}

/// Property-like record: properties, property signatures, variables, and
/// enum members (whose `type` is the initializer excerpt).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawProperty {
    #[serde(flatten)]
    pub base: RawBase,
    #[serde(rename = "type")]
    pub type_text: String,
}

/// Parameter record. Inherits its owner's base fields with identity, naming,
/// and documentation overridden.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawParameter {
    #[serde(flatten)]
    pub base: RawBase,
    #[serde(rename = "type")]
    pub type_text: String,
}

/// Any raw model record. The discriminant lives in the base `kind` field, so
/// serialization is untagged.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RawModel {
    Class(RawClass),
    Interface(RawInterface),
    Enum(RawEnum),
    Namespace(RawNamespace),
    Method(RawMethod),
    Property(RawProperty),
    Parameter(RawParameter),
    TypeAlias(RawBase),
}

impl RawModel {
    pub fn base(&self) -> &RawBase {
        match self {
            RawModel::Class(r) => &r.base,
            RawModel::Interface(r) => &r.base,
            RawModel::Enum(r) => &r.base,
            RawModel::Namespace(r) => &r.base,
            RawModel::Method(r) => &r.base,
            RawModel::Property(r) => &r.base,
            RawModel::Parameter(r) => &r.base,
            RawModel::TypeAlias(b) => b,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn kind(&self) -> RawKind {
        self.base().kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_base() -> RawBase {
        RawBase {
            id: "abc".into(),
            parent_id: Some("def".into()),
            permalink: "/widgets/widget".into(),
            name: "Widget".into(),
            fullname: "Widget".into(),
            kind: RawKind::Class,
            release_tag: ReleaseTag::Public,
            visibility: "public".into(),
            signature: None,
            summary_markup: None,
            remarks_markup: None,
            deprecated_markup: None,
            tsdoc: None,
        }
    }

    #[test]
    fn test_base_serializes_camel_case_and_omits_absent_fields() {
        let value = serde_json::to_value(sample_base()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["parentId"], "def");
        assert_eq!(obj["releaseTag"], "Public");
        assert_eq!(obj["visibility"], "public");
        assert!(!obj.contains_key("signature"));
        assert!(!obj.contains_key("summaryMarkup"));
        assert!(!obj.contains_key("tsdoc"));
    }

    #[test]
    fn test_class_record_flattens_base() {
        let record = RawModel::Class(RawClass {
            base: sample_base(),
            constructor: Some("ctor".into()),
            properties: vec![],
            methods: vec!["m0".into()],
        });
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["id"], "abc");
        assert_eq!(obj["kind"], "Class");
        assert_eq!(obj["constructor"], "ctor");
        assert_eq!(obj["methods"], serde_json::json!(["m0"]));
    }

    #[test]
    fn test_property_type_field_name() {
        let mut base = sample_base();
        base.kind = RawKind::Property;
        let record = RawProperty {
            base,
            type_text: "string".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value.as_object().unwrap()["type"], "string");
    }

    #[test]
    fn test_structural_kinds_have_no_raw_mapping() {
        for kind in [
            ItemKind::CallSignature,
            ItemKind::EntryPoint,
            ItemKind::IndexSignature,
            ItemKind::Model,
            ItemKind::None,
            ItemKind::Package,
        ] {
            assert!(RawKind::try_from(kind).is_err());
        }
        assert_eq!(RawKind::try_from(ItemKind::Class), Ok(RawKind::Class));
    }
}
