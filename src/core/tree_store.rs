use crate::core::{Course, CourseStore, StoreKind};
use std::cmp::Ordering;

/// Index of a node in [`TreeStore::nodes`].
type NodeId = usize;

#[derive(Debug)]
struct TreeNode {
    course: Course,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl TreeNode {
    fn leaf(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree keyed by course number.
///
/// Nodes are owned by a flat arena and link to their children by index.
/// There is no rebalancing and no removal; the arena only grows until
/// [`CourseStore::clear`] drops it wholesale.
///
/// Keys strictly less than a node go left, everything else goes right, so a
/// duplicate course number lands in the right subtree of the first one and
/// can never be returned by [`CourseStore::find`].
#[derive(Debug, Default)]
pub struct TreeStore {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            pending.extend(node.left.map(|child| (child, depth + 1)));
            pending.extend(node.right.map(|child| (child, depth + 1)));
        }

        height
    }
}

impl CourseStore for TreeStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Tree
    }

    fn insert(&mut self, course: Course) {
        let new_id = self.nodes.len();

        let mut current = match self.root {
            Some(id) => id,
            None => {
                self.nodes.push(TreeNode::leaf(course));
                self.root = Some(new_id);
                return;
            }
        };

        // 往下走到空的子節點；相等的鍵放右邊
        loop {
            let node = &mut self.nodes[current];
            let slot = if course.course_number < node.course.course_number {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(new_id);
                    break;
                }
            }
        }

        self.nodes.push(TreeNode::leaf(course));
    }

    fn find(&self, course_number: &str) -> Option<&Course> {
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match course_number.cmp(node.course.course_number.as_str()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }

    fn sorted_courses(&self) -> Vec<&Course> {
        let mut sorted = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut current = self.root;

        // 中序走訪：左、自己、右
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }

            if let Some(id) = stack.pop() {
                let node = &self.nodes[id];
                sorted.push(&node.course);
                current = node.right;
            }
        }

        sorted
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}
