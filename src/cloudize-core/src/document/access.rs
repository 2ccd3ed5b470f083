//! Lookups and assignments by path that tolerate missing structure.
use crate::document::{DocumentNode, NodePath, PathStep};
use crate::error::document::SetDeepError;

/// The child at `step`, or `None` when `container` is a scalar, the key is
/// missing, the index is out of bounds, or the step kind does not match the
/// container kind.
pub fn get<'a>(container: &'a DocumentNode, step: &PathStep) -> Option<&'a DocumentNode> {
    match (container, step) {
        (DocumentNode::Map(map), PathStep::Key(key)) => map.get(key),
        (DocumentNode::Sequence(items), PathStep::Index(index)) => items.get(*index),
        _ => None,
    }
}

/// Follows `path` from `container`. An empty path yields `container`.
pub fn get_deep<'a>(container: &'a DocumentNode, path: &[PathStep]) -> Option<&'a DocumentNode> {
    path.iter()
        .try_fold(container, |node, step| get(node, step))
}

/// Assigns `value` at `path`, creating maps along the way.
///
/// Any intermediate value that is missing or falsy (null, `false`, zero, or
/// an empty string, map or sequence) is replaced by an empty map first, so
/// callers must be prepared for such values to be overwritten. An empty path
/// replaces `container` itself.
pub fn set_deep(
    container: &mut DocumentNode,
    path: &[PathStep],
    value: DocumentNode,
) -> Result<(), SetDeepError> {
    set_deep_at(container, path, value, &NodePath::root())
}

fn set_deep_at(
    container: &mut DocumentNode,
    path: &[PathStep],
    value: DocumentNode,
    at: &NodePath,
) -> Result<(), SetDeepError> {
    let Some((step, rest)) = path.split_first() else {
        *container = value;
        return Ok(());
    };
    let slot = slot_mut(container, step, at)?;
    if rest.is_empty() {
        *slot = value;
        return Ok(());
    }
    if !slot.is_truthy() {
        *slot = DocumentNode::empty_map();
    }
    set_deep_at(slot, rest, value, &at.child(step.clone()))
}

fn slot_mut<'a>(
    container: &'a mut DocumentNode,
    step: &PathStep,
    at: &NodePath,
) -> Result<&'a mut DocumentNode, SetDeepError> {
    match (container, step) {
        (DocumentNode::Map(map), PathStep::Key(key)) => Ok(map.entry_mut(key)),
        (DocumentNode::Sequence(items), PathStep::Index(index)) => {
            let len = items.len();
            items
                .get_mut(*index)
                .ok_or_else(|| SetDeepError::IndexOutOfBounds {
                    at: at.clone(),
                    index: *index,
                    len,
                })
        }
        (DocumentNode::Sequence(_), PathStep::Key(key)) => Err(SetDeepError::KeyOnSequence {
            at: at.clone(),
            key: key.clone(),
        }),
        (DocumentNode::Map(_), PathStep::Index(index)) => Err(SetDeepError::IndexOnMap {
            at: at.clone(),
            index: *index,
        }),
        (DocumentNode::Scalar(_), _) => Err(SetDeepError::ScalarInPath(at.clone())),
    }
}
