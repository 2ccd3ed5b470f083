use crate::document::{DocumentMap, DocumentNode, NodePath};

/// Rebuilds `node` bottom-up, handing every node (containers after their
/// children) to `node_fn` together with its path. Whatever `node_fn` returns
/// takes that node's place in the result; `node` itself is not modified.
pub fn walk<F>(node: &DocumentNode, node_fn: &mut F) -> DocumentNode
where
    F: FnMut(DocumentNode, &NodePath) -> DocumentNode,
{
    walk_at(node, &NodePath::root(), node_fn)
}

fn walk_at<F>(node: &DocumentNode, path: &NodePath, node_fn: &mut F) -> DocumentNode
where
    F: FnMut(DocumentNode, &NodePath) -> DocumentNode,
{
    let walked = match node {
        DocumentNode::Map(map) => DocumentNode::Map(
            map.iter()
                .map(|(key, value)| {
                    let walked = walk_at(value, &path.child(key.to_string()), node_fn);
                    (key.clone(), walked)
                })
                .collect::<DocumentMap>(),
        ),
        DocumentNode::Sequence(items) => DocumentNode::Sequence(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| walk_at(item, &path.child(index), node_fn))
                .collect(),
        ),
        DocumentNode::Scalar(scalar) => DocumentNode::Scalar(scalar.clone()),
    };
    node_fn(walked, path)
}

/// Same traversal order as [`walk`], for callers that only observe nodes.
pub fn visit<F>(node: &DocumentNode, node_fn: &mut F)
where
    F: FnMut(&DocumentNode, &NodePath),
{
    visit_at(node, &NodePath::root(), node_fn)
}

fn visit_at<F>(node: &DocumentNode, path: &NodePath, node_fn: &mut F)
where
    F: FnMut(&DocumentNode, &NodePath),
{
    match node {
        DocumentNode::Map(map) => {
            for (key, value) in map.iter() {
                visit_at(value, &path.child(key.to_string()), node_fn);
            }
        }
        DocumentNode::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                visit_at(item, &path.child(index), node_fn);
            }
        }
        DocumentNode::Scalar(_) => {}
    }
    node_fn(node, path)
}
