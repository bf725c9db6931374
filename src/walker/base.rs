// Shared base-record builder: identity, naming, visibility, documentation.

use super::Walker;
use crate::error::WalkError;
use crate::identity::{IdentityResolver, MarkupRenderer};
use crate::model::raw::{RawBase, RawKind};
use crate::model::source::{DocContent, DocItem, ItemId, ReleaseTag};

impl<R: IdentityResolver, M: MarkupRenderer> Walker<'_, R, M> {
    /// Builds the base shape every record variant shares. Kind-specific
    /// shapers layer their own fields (and overrides) on top.
    pub(super) fn base_record(&self, id: ItemId) -> Result<RawBase, WalkError> {
        let item = self.tree.get(id);

        // A signature excerpt exists only for declaration-bearing nodes with
        // non-empty excerpt text.
        let signature = item
            .excerpt
            .as_ref()
            .filter(|e| !e.text.is_empty())
            .map(|e| e.with_modifiers.clone());

        let visibility = match item.release_tag {
            Some(tag) => tag.as_visibility(),
            None => "public",
        };

        let (tsdoc, summary_markup, remarks_markup, deprecated_markup) = self.extract_docs(item);

        Ok(RawBase {
            id: self.resolver.id(self.tree, id),
            parent_id: item.parent.map(|p| self.resolver.id(self.tree, p)),
            permalink: self.resolver.permalink(self.tree, id),
            name: item.name.clone(),
            fullname: self.tree.scoped_name(id),
            kind: RawKind::try_from(item.kind)?,
            release_tag: item.release_tag.unwrap_or(ReleaseTag::None),
            visibility: visibility.to_string(),
            signature,
            summary_markup,
            remarks_markup,
            deprecated_markup,
            tsdoc,
        })
    }

    /// Derives the four documentation fields independently. No documentation
    /// block yields all four absent, not empty strings.
    fn extract_docs(
        &self,
        item: &DocItem,
    ) -> (
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
    ) {
        match &item.docs {
            Some(docs) => (
                Some(docs.raw.clone()),
                docs.summary.as_ref().and_then(|c| self.render_nonempty(c)),
                docs.remarks.as_ref().and_then(|c| self.render_nonempty(c)),
                docs.deprecated
                    .as_ref()
                    .and_then(|c| self.render_nonempty(c)),
            ),
            None => (None, None, None, None),
        }
    }

    /// Renders a content block, treating an empty result as no markup.
    pub(super) fn render_nonempty(&self, content: &DocContent) -> Option<String> {
        let rendered = self.renderer.render(content);
        if rendered.is_empty() {
            None
        } else {
            Some(rendered)
        }
    }
}
