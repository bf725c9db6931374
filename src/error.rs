use thiserror::Error;

use crate::model::source::ItemKind;

/// Failures a walk can produce. All fatal: a failed walk yields no usable
/// partial result and callers should discard anything emitted before it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// A structural node kind reached record classification. The source
    /// tree's kind set has grown without a matching update here.
    #[error("item kind `{0}` has no raw model representation")]
    UnsupportedKind(ItemKind),
}
