// Per-kind shaping rules: one pure mapping per declaration kind.
//
// Every shaper delegates to the shared base builder and layers kind-specific
// fields on top. Cross-record references are resolver ids, never embedded
// records.

use tracing::warn;

use super::Walker;
use crate::error::WalkError;
use crate::identity::{IdentityResolver, MarkupRenderer};
use crate::model::raw::{
    RawClass, RawEnum, RawInterface, RawKind, RawMethod, RawNamespace, RawParameter, RawProperty,
};
use crate::model::source::{DocItem, ItemId, ItemKind, Param};

impl<R: IdentityResolver, M: MarkupRenderer> Walker<'_, R, M> {
    pub(super) fn shape_class(&self, id: ItemId) -> Result<RawClass, WalkError> {
        let item = self.tree.get(id);
        Ok(RawClass {
            base: self.base_record(id)?,
            constructor: self.find_member_id(item, ItemKind::Constructor),
            properties: self.member_ids(item, |m| m.kind == ItemKind::Property),
            methods: self.member_ids(item, |m| {
                m.kind == ItemKind::Method && is_primary_overload(m)
            }),
        })
    }

    /// Mirrors [`shape_class`] over signature-kind members.
    pub(super) fn shape_interface(&self, id: ItemId) -> Result<RawInterface, WalkError> {
        let item = self.tree.get(id);
        Ok(RawInterface {
            base: self.base_record(id)?,
            constructor: self.find_member_id(item, ItemKind::ConstructSignature),
            properties: self.member_ids(item, |m| m.kind == ItemKind::PropertySignature),
            methods: self.member_ids(item, |m| {
                m.kind == ItemKind::MethodSignature && is_primary_overload(m)
            }),
        })
    }

    pub(super) fn shape_enum(&self, id: ItemId) -> Result<RawEnum, WalkError> {
        let item = self.tree.get(id);
        Ok(RawEnum {
            base: self.base_record(id)?,
            fields: self.member_ids(item, |m| m.kind == ItemKind::EnumMember),
        })
    }

    pub(super) fn shape_namespace(&self, id: ItemId) -> Result<RawNamespace, WalkError> {
        let item = self.tree.get(id);
        Ok(RawNamespace {
            base: self.base_record(id)?,
            members: self.member_ids(item, |_| true),
        })
    }

    /// Methods, method signatures, free functions, constructors, and
    /// construct signatures.
    pub(super) fn shape_function_like(&self, id: ItemId) -> Result<RawMethod, WalkError> {
        let item = self.tree.get(id);
        let parent = item.parent.map(|p| self.tree.get(p));

        // Same-named siblings under the same parent are overloads; the node
        // itself is excluded by handle, not by name.
        let overloads = match item.parent {
            Some(p) => self
                .tree
                .get(p)
                .members
                .iter()
                .filter(|&&m| m != id && self.tree.get(m).name == item.name)
                .map(|&m| self.resolver.id(self.tree, m))
                .collect(),
            None => Vec::new(),
        };

        let is_static = item.is_static.unwrap_or(false);
        let static_prefix = if is_static { "static " } else { "" };
        let return_type = item
            .return_type
            .clone()
            .unwrap_or_else(|| "void".to_string());
        let return_markup = item
            .docs
            .as_ref()
            .and_then(|d| d.returns.as_ref())
            .and_then(|c| self.render_nonempty(c));

        let params = declared_params(item);
        let parameters = params
            .iter()
            .map(|p| self.resolver.parameter_id(self.tree, id, p))
            .collect();
        let joined = params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let (name, signature) = match parent {
            Some(parent_item)
                if matches!(
                    item.kind,
                    ItemKind::Constructor | ItemKind::ConstructSignature
                ) =>
            {
                (
                    parent_item.name.clone(),
                    format!("{}({})", parent_item.name, joined),
                )
            }
            Some(parent_item) if parent_item.kind == ItemKind::Namespace => (
                item.name.clone(),
                format!(
                    "{}{}.{}({}): {}",
                    static_prefix, parent_item.name, item.name, joined, return_type
                ),
            ),
            _ => (
                item.name.clone(),
                format!("{}{}({}): {}", static_prefix, item.name, joined, return_type),
            ),
        };

        let mut base = self.base_record(id)?;
        base.name = name;
        base.signature = Some(signature);

        Ok(RawMethod {
            base,
            return_type,
            return_markup,
            is_static,
            overload_index: item
                .parameter_list
                .as_ref()
                .map(|l| l.overload_index)
                .unwrap_or(0),
            overloads,
            parameters,
        })
    }

    /// Properties, property signatures, variables, and enum members.
    pub(super) fn shape_property(&self, id: ItemId) -> Result<RawProperty, WalkError> {
        let item = self.tree.get(id);
        let type_text = item.type_text.clone().unwrap_or_default();
        let mut base = self.base_record(id)?;

        // Enum members keep the excerpt-based signature; their `type` is the
        // initializer expression, not a declared type.
        if item.kind != ItemKind::EnumMember {
            let static_prefix = if item.is_static.unwrap_or(false) {
                "static "
            } else {
                ""
            };
            base.signature = Some(format!("{}{}: {}", static_prefix, item.name, type_text));
        }

        Ok(RawProperty { base, type_text })
    }

    /// One declared parameter of `owner`. The record starts from the owner's
    /// base shape with identity, naming, and documentation overridden.
    pub(super) fn shape_parameter(
        &self,
        owner: ItemId,
        index: usize,
        param: &Param,
    ) -> Result<RawParameter, WalkError> {
        let owner_item = self.tree.get(owner);

        let mut base = self.base_record(owner)?;
        base.id = self.resolver.parameter_id(self.tree, owner, param);
        base.parent_id = Some(self.resolver.id(self.tree, owner));
        base.name = param.name.clone();
        base.fullname = format!("{}.{}", self.tree.scoped_name(owner), param.name);
        base.kind = RawKind::Parameter;
        base.summary_markup = self.parameter_summary(owner_item, index, param);
        base.remarks_markup = None;

        Ok(RawParameter {
            base,
            type_text: param.type_text.clone(),
        })
    }

    /// Documentation precedence for a parameter: a dedicated block wins;
    /// otherwise fall back to a positional lookup into the owner's
    /// aggregated parameter blocks. The positional match tolerates malformed
    /// annotations that lost their name marker, so it can mis-attribute text
    /// when blocks are miscounted upstream.
    fn parameter_summary(&self, owner: &DocItem, index: usize, param: &Param) -> Option<String> {
        if let Some(doc) = &param.doc {
            return self.render_nonempty(doc);
        }
        let blocks = owner
            .docs
            .as_ref()
            .map(|d| d.params.as_slice())
            .unwrap_or(&[]);
        let block = blocks.get(index)?;
        warn!(
            parameter = %param.name,
            index,
            "no dedicated doc block; using positional parameter documentation"
        );
        self.render_nonempty(block)
    }

    fn find_member_id(&self, item: &DocItem, kind: ItemKind) -> Option<String> {
        item.members
            .iter()
            .find(|&&m| self.tree.get(m).kind == kind)
            .map(|&m| self.resolver.id(self.tree, m))
    }

    fn member_ids<P>(&self, item: &DocItem, pred: P) -> Vec<String>
    where
        P: Fn(&DocItem) -> bool,
    {
        item.members
            .iter()
            .filter(|&&m| pred(self.tree.get(m)))
            .map(|&m| self.resolver.id(self.tree, m))
            .collect()
    }
}

fn is_primary_overload(item: &DocItem) -> bool {
    item.parameter_list
        .as_ref()
        .is_some_and(|l| l.overload_index == 0)
}

fn declared_params(item: &DocItem) -> &[Param] {
    item.parameter_list
        .as_ref()
        .map(|l| l.parameters.as_slice())
        .unwrap_or(&[])
}
