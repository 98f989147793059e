use crate::{Id, Node};

/// Child indices leading from a root node down to a descendant.
/// The empty path addresses the root itself.
pub type NodePath = Vec<usize>;

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id::UNASSIGNED {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }
        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    let path = path_to_id(node, id)?;
    node_at_path(node, &path)
}

/// Path from `root` to the node carrying `id`, in document order.
pub fn path_to_id(root: &Node, id: Id) -> Option<NodePath> {
    find_first(root, |node| node.id() == id)
}

/// Path to the first node (root included) satisfying `pred`, in document order.
pub fn find_first(root: &Node, mut pred: impl FnMut(&Node) -> bool) -> Option<NodePath> {
    fn walk(node: &Node, path: &mut NodePath, pred: &mut dyn FnMut(&Node) -> bool) -> bool {
        if pred(node) {
            return true;
        }
        for (i, c) in node.children().iter().enumerate() {
            path.push(i);
            if walk(c, path, pred) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    walk(root, &mut path, &mut pred).then_some(path)
}

/// Path to the first element named `tag` (root included).
pub fn find_first_element(root: &Node, tag: &str) -> Option<NodePath> {
    find_first(root, |node| node.is_element_named(tag))
}

pub fn node_at_path<'a>(root: &'a Node, path: &[usize]) -> Option<&'a Node> {
    path.iter()
        .try_fold(root, |node, &i| node.children().get(i))
}

pub fn node_at_path_mut<'a>(root: &'a mut Node, path: &[usize]) -> Option<&'a mut Node> {
    path.iter().try_fold(root, |node, &i| {
        node.children_mut().and_then(|children| children.get_mut(i))
    })
}
