// Collaborator seams: identifier derivation and markup rendering.
//
// Both are supplied by the caller in production. The reference
// implementations below are deterministic and good enough for tests and
// stand-alone use.

use crate::model::source::{DocContent, DocTree, ItemId, Param};

/// Derives stable identifiers and permalinks for tree nodes.
///
/// Implementations must be deterministic and stable across repeated walks of
/// the same tree; cross-record references are resolved by these ids.
pub trait IdentityResolver {
    /// Globally stable identifier for a node, unique within a walk.
    fn id(&self, tree: &DocTree, item: ItemId) -> String;

    /// Identifier for one declared parameter of a function-like node.
    fn parameter_id(&self, tree: &DocTree, item: ItemId, param: &Param) -> String;

    /// Human-navigable permalink. Purely presentational; no uniqueness
    /// contract.
    fn permalink(&self, tree: &DocTree, item: ItemId) -> String;
}

/// Renders a documentation content block to markup text.
pub trait MarkupRenderer {
    /// An empty result is treated as "no markup" by the shaper.
    fn render(&self, content: &DocContent) -> String;
}

/// Default resolver: md5 hex digest over the node's scoped name, kind, and
/// overload index.
///
/// The overload index keeps same-named overload siblings distinct; everything
/// else about two such nodes hashes identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashResolver;

impl IdentityResolver for HashResolver {
    fn id(&self, tree: &DocTree, item: ItemId) -> String {
        let node = tree.get(item);
        let overload_index = node
            .parameter_list
            .as_ref()
            .map(|p| p.overload_index)
            .unwrap_or(0);
        let input = format!(
            "{}:{}:{}",
            tree.scoped_name(item),
            node.kind,
            overload_index
        );
        format!("{:x}", md5::compute(input.as_bytes()))
    }

    fn parameter_id(&self, tree: &DocTree, item: ItemId, param: &Param) -> String {
        let input = format!("{}#{}", self.id(tree, item), param.name);
        format!("{:x}", md5::compute(input.as_bytes()))
    }

    fn permalink(&self, tree: &DocTree, item: ItemId) -> String {
        let scoped = tree.scoped_name(item).to_lowercase().replace('.', "/");
        format!("/{}", scoped)
    }
}

/// Renderer that passes documentation text through untouched (trimmed).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl MarkupRenderer for PlainTextRenderer {
    fn render(&self, content: &DocContent) -> String {
        content.text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::{DocItem, ItemKind, ParameterList};

    fn widget_tree() -> (DocTree, ItemId, ItemId) {
        let mut tree = DocTree::new();
        let class = tree.insert(None, DocItem::new(ItemKind::Class, "Widget"));
        let method = tree.insert(Some(class), DocItem::new(ItemKind::Method, "draw"));
        (tree, class, method)
    }

    #[test]
    fn test_ids_are_deterministic_across_walks() {
        let (tree, class, method) = widget_tree();
        let resolver = HashResolver;

        assert_eq!(resolver.id(&tree, class), resolver.id(&tree, class));
        assert_ne!(resolver.id(&tree, class), resolver.id(&tree, method));
    }

    #[test]
    fn test_overload_siblings_get_distinct_ids() {
        let mut tree = DocTree::new();
        let class = tree.insert(None, DocItem::new(ItemKind::Class, "Widget"));

        let mut first = DocItem::new(ItemKind::Method, "draw");
        first.parameter_list = Some(ParameterList::default());
        let mut second = DocItem::new(ItemKind::Method, "draw");
        second.parameter_list = Some(ParameterList {
            overload_index: 1,
            parameters: vec![],
        });

        let a = tree.insert(Some(class), first);
        let b = tree.insert(Some(class), second);

        let resolver = HashResolver;
        assert_ne!(resolver.id(&tree, a), resolver.id(&tree, b));
    }

    #[test]
    fn test_parameter_id_depends_on_owner_and_name() {
        let (tree, _, method) = widget_tree();
        let resolver = HashResolver;
        let a = resolver.parameter_id(&tree, method, &Param::new("x", "number"));
        let b = resolver.parameter_id(&tree, method, &Param::new("y", "number"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_permalink_is_lowercased_path() {
        let (tree, _, method) = widget_tree();
        assert_eq!(HashResolver.permalink(&tree, method), "/widget/draw");
    }

    #[test]
    fn test_plain_text_renderer_trims() {
        let rendered = PlainTextRenderer.render(&DocContent::new("  hello \n"));
        assert_eq!(rendered, "hello");
    }
}
