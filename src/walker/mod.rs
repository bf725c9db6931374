//! Tree walker: recursive traversal of the ingested documentation tree.
//!
//! The walker applies the release-tier cutoff, dispatches each node to the
//! per-kind shaper, and forwards every produced record to the caller's
//! `emit` callback. Data flows one direction only; the shaper never
//! re-enters the walker.

mod base;
mod shape;

use tracing::debug;

use crate::error::WalkError;
use crate::identity::{IdentityResolver, MarkupRenderer};
use crate::model::raw::RawModel;
use crate::model::source::{DocTree, ItemId, ItemKind, ReleaseTag};

/// Walks a documentation tree and emits one raw model record per mapped
/// node, plus one per declared parameter of every emitted function-like
/// node.
///
/// Holds only borrows and a tier; independent walks never interfere.
pub struct Walker<'a, R, M> {
    tree: &'a DocTree,
    min_tier: ReleaseTag,
    resolver: &'a R,
    renderer: &'a M,
}

impl<'a, R: IdentityResolver, M: MarkupRenderer> Walker<'a, R, M> {
    pub fn new(tree: &'a DocTree, min_tier: ReleaseTag, resolver: &'a R, renderer: &'a M) -> Self {
        Self {
            tree,
            min_tier,
            resolver,
            renderer,
        }
    }

    /// Pre-order traversal of `root` and its descendants.
    ///
    /// A node carrying a release-tier facet strictly below the minimum tier
    /// is pruned together with its entire subtree. Nodes without the facet
    /// are never pruned. Parameters of a function-like node are emitted
    /// after that node's members have been traversed.
    pub fn walk<F>(&self, root: ItemId, emit: &mut F) -> Result<(), WalkError>
    where
        F: FnMut(RawModel),
    {
        let item = self.tree.get(root);
        if let Some(tag) = item.release_tag {
            if tag < self.min_tier {
                debug!(name = %item.name, tag = ?tag, "pruning subtree below minimum release tier");
                return Ok(());
            }
        }

        let record = self.to_record(root)?;
        let produced = record.is_some();
        if let Some(record) = record {
            emit(record);
        }

        for &member in &item.members {
            self.walk(member, emit)?;
        }

        // Parameters ride along with their owning record; a node that maps
        // to no record contributes no parameter records either.
        if produced {
            if let Some(list) = &item.parameter_list {
                for (index, param) in list.parameters.iter().enumerate() {
                    emit(RawModel::Parameter(self.shape_parameter(root, index, param)?));
                }
            }
        }

        Ok(())
    }

    /// Maps one node to its record, or `None` for structural kinds that are
    /// traversed but never emitted.
    fn to_record(&self, id: ItemId) -> Result<Option<RawModel>, WalkError> {
        let item = self.tree.get(id);
        match item.kind {
            ItemKind::CallSignature
            | ItemKind::EntryPoint
            | ItemKind::IndexSignature
            | ItemKind::Model
            | ItemKind::None
            | ItemKind::Package => Ok(None),
            ItemKind::Class => Ok(Some(RawModel::Class(self.shape_class(id)?))),
            ItemKind::Interface => Ok(Some(RawModel::Interface(self.shape_interface(id)?))),
            ItemKind::Enum => Ok(Some(RawModel::Enum(self.shape_enum(id)?))),
            ItemKind::Namespace => Ok(Some(RawModel::Namespace(self.shape_namespace(id)?))),
            ItemKind::Constructor
            | ItemKind::ConstructSignature
            | ItemKind::Function
            | ItemKind::Method
            | ItemKind::MethodSignature => {
                Ok(Some(RawModel::Method(self.shape_function_like(id)?)))
            }
            ItemKind::EnumMember
            | ItemKind::Property
            | ItemKind::PropertySignature
            | ItemKind::Variable => Ok(Some(RawModel::Property(self.shape_property(id)?))),
            ItemKind::TypeAlias => Ok(Some(RawModel::TypeAlias(self.base_record(id)?))),
        }
    }
}

/// Convenience entry point mirroring the walker's contract:
/// `walk(root, minTier, emit)` with collaborators passed alongside.
pub fn walk<R, M, F>(
    tree: &DocTree,
    root: ItemId,
    min_tier: ReleaseTag,
    resolver: &R,
    renderer: &M,
    mut emit: F,
) -> Result<(), WalkError>
where
    R: IdentityResolver,
    M: MarkupRenderer,
    F: FnMut(RawModel),
{
    Walker::new(tree, min_tier, resolver, renderer).walk(root, &mut emit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{HashResolver, PlainTextRenderer};
    use crate::model::raw::RawKind;
    use crate::model::source::{DocItem, Param, ParameterList};

    fn public_item(kind: ItemKind, name: &str) -> DocItem {
        let mut item = DocItem::new(kind, name);
        item.release_tag = Some(ReleaseTag::Public);
        item
    }

    fn function_like(kind: ItemKind, name: &str, params: Vec<Param>) -> DocItem {
        let mut item = public_item(kind, name);
        item.parameter_list = Some(ParameterList {
            overload_index: 0,
            parameters: params,
        });
        item
    }

    fn collect(tree: &DocTree, root: ItemId, min_tier: ReleaseTag) -> Vec<RawModel> {
        let mut records = Vec::new();
        walk(tree, root, min_tier, &HashResolver, &PlainTextRenderer, |r| {
            records.push(r)
        })
        .unwrap();
        records
    }

    fn id_of(tree: &DocTree, item: ItemId) -> String {
        HashResolver.id(tree, item)
    }

    /// Scenario A: class + constructor + parameterless method at Public.
    #[test]
    fn test_class_with_constructor_and_method() {
        let mut tree = DocTree::new();
        let class = tree.insert(None, public_item(ItemKind::Class, "Widget"));
        let ctor = tree.insert(
            Some(class),
            function_like(ItemKind::Constructor, "(constructor)", vec![]),
        );
        let draw = tree.insert(Some(class), function_like(ItemKind::Method, "draw", vec![]));

        let records = collect(&tree, class, ReleaseTag::Public);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind(), RawKind::Class);
        assert_eq!(records[1].kind(), RawKind::Constructor);
        assert_eq!(records[2].kind(), RawKind::Method);

        match &records[0] {
            RawModel::Class(c) => {
                assert_eq!(c.constructor, Some(id_of(&tree, ctor)));
                assert_eq!(c.methods, vec![id_of(&tree, draw)]);
                assert!(c.properties.is_empty());
            }
            other => panic!("expected class record, got {:?}", other.kind()),
        }
    }

    /// Scenario B: an internal method is pruned at Public, but the class's
    /// member list still references it (accepted tolerance).
    #[test]
    fn test_internal_method_pruned_but_still_referenced() {
        let mut tree = DocTree::new();
        let class = tree.insert(None, public_item(ItemKind::Class, "Widget"));
        tree.insert(
            Some(class),
            function_like(ItemKind::Constructor, "(constructor)", vec![]),
        );
        let mut draw = function_like(ItemKind::Method, "draw", vec![]);
        draw.release_tag = Some(ReleaseTag::Internal);
        let draw = tree.insert(Some(class), draw);

        let records = collect(&tree, class, ReleaseTag::Public);
        assert_eq!(records.len(), 2);
        let draw_id = id_of(&tree, draw);
        assert!(records.iter().all(|r| r.id() != draw_id));

        match &records[0] {
            RawModel::Class(c) => assert_eq!(c.methods, vec![draw_id]),
            other => panic!("expected class record, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_tier_exclusion_is_transitive() {
        let mut tree = DocTree::new();
        let mut ns = public_item(ItemKind::Namespace, "Internals");
        ns.release_tag = Some(ReleaseTag::Internal);
        let ns = tree.insert(None, ns);
        let class = tree.insert(Some(ns), public_item(ItemKind::Class, "Exposed"));
        tree.insert(Some(class), function_like(ItemKind::Method, "leak", vec![]));

        let records = collect(&tree, ns, ReleaseTag::Public);
        assert!(records.is_empty());
    }

    #[test]
    fn test_untagged_nodes_are_never_pruned() {
        let mut tree = DocTree::new();
        let alias = tree.insert(None, DocItem::new(ItemKind::TypeAlias, "WidgetRef"));

        let records = collect(&tree, alias, ReleaseTag::Public);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].base().visibility, "public");
        assert_eq!(records[0].base().release_tag, ReleaseTag::None);
    }

    #[test]
    fn test_structural_nodes_are_traversed_but_not_emitted() {
        let mut tree = DocTree::new();
        let model = tree.insert(None, DocItem::new(ItemKind::Model, ""));
        let package = tree.insert(Some(model), DocItem::new(ItemKind::Package, "widgets"));
        let entry = tree.insert(Some(package), DocItem::new(ItemKind::EntryPoint, ""));
        let iface = tree.insert(Some(entry), public_item(ItemKind::Interface, "Drawable"));
        tree.insert(Some(iface), DocItem::new(ItemKind::IndexSignature, "[key]"));
        let sibling = tree.insert(
            Some(iface),
            public_item(ItemKind::PropertySignature, "visible"),
        );

        let records = collect(&tree, model, ReleaseTag::None);
        let kinds: Vec<RawKind> = records.iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, vec![RawKind::Interface, RawKind::PropertySignature]);
        assert_eq!(records[1].id(), id_of(&tree, sibling));
    }

    /// Parameter emits equal the sum of parameter-list lengths over emitted
    /// function-like nodes.
    #[test]
    fn test_parameter_emit_count_matches_declared_parameters() {
        let mut tree = DocTree::new();
        let entry = tree.insert(None, DocItem::new(ItemKind::EntryPoint, ""));
        tree.insert(
            Some(entry),
            function_like(
                ItemKind::Function,
                "blend",
                vec![Param::new("a", "Color"), Param::new("b", "Color")],
            ),
        );
        let class = tree.insert(Some(entry), public_item(ItemKind::Class, "Widget"));
        tree.insert(
            Some(class),
            function_like(ItemKind::Method, "resize", vec![Param::new("scale", "number")]),
        );

        let records = collect(&tree, entry, ReleaseTag::None);
        let parameter_count = records
            .iter()
            .filter(|r| r.kind() == RawKind::Parameter)
            .count();
        assert_eq!(parameter_count, 3);
    }

    #[test]
    fn test_parameters_follow_their_owners_members() {
        let mut tree = DocTree::new();
        let method = tree.insert(
            None,
            function_like(ItemKind::Method, "move", vec![Param::new("dx", "number")]),
        );
        // A nested member under the method, to pin the ordering contract.
        tree.insert(Some(method), public_item(ItemKind::Variable, "cache"));

        let records = collect(&tree, method, ReleaseTag::None);
        let kinds: Vec<RawKind> = records.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![RawKind::Method, RawKind::Variable, RawKind::Parameter]
        );
    }

    #[test]
    fn test_walks_are_repeatable() {
        let mut tree = DocTree::new();
        let class = tree.insert(None, public_item(ItemKind::Class, "Widget"));
        tree.insert(
            Some(class),
            function_like(ItemKind::Method, "draw", vec![Param::new("frame", "Rect")]),
        );

        let first = collect(&tree, class, ReleaseTag::Public);
        let second = collect(&tree, class, ReleaseTag::Public);
        assert_eq!(first, second);
    }
}
