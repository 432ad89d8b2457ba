use crate::base;
use crate::base::units::Overflow;

/// Category hierarchy built from entries. The root is synthetic: it has an
/// empty label, never owns an entry, and is not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    label: String,
    entry: Option<base::Entry>,
    /// In first-insertion order.
    children: Vec<Self>,
    total: base::Units,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate category path '{path}'")]
pub struct DuplicateCategoryPath {
    pub path: String,
}

impl Node {
    fn new(label: String) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rolled-up total. Zero until [`Tree::aggregate`] runs.
    pub fn total(&self) -> base::Units {
        self.total
    }

    fn child_or_insert(&mut self, label: &str) -> &mut Self {
        let i = match self.children.iter().position(|c| c.label == label) {
            Some(i) => i,
            None => {
                self.children.push(Self::new(label.to_string()));
                self.children.len() - 1
            }
        };
        &mut self.children[i]
    }

    /// Post-order: own contribution plus the totals of all children.
    fn aggregate(&mut self) -> Result<base::Units, Overflow> {
        let own = self
            .entry
            .as_ref()
            .map(base::Entry::contribution)
            .unwrap_or_default();
        self.total = self
            .children
            .iter_mut()
            .try_fold(own, |acc, c| acc.checked_add(c.aggregate()?))?;
        Ok(self.total)
    }
}

impl Tree {
    /// Descends each entry's category path from the root, creating missing
    /// nodes along the way, and attaches the entry to the last one.
    pub fn build<I>(entries: I) -> Result<Self, DuplicateCategoryPath>
    where
        I: IntoIterator<Item = base::Entry>,
    {
        let mut root = Node::default();
        for entry in entries {
            let mut node = &mut root;
            for segment in entry.categories() {
                node = node.child_or_insert(segment);
            }
            if node.entry.is_some() {
                return Err(DuplicateCategoryPath { path: entry.path() });
            }
            node.entry = Some(entry);
        }
        Ok(Self { root })
    }

    /// Computes and stores every node's rolled-up total. Returns the root's,
    /// or [`Overflow`] if any subtree total leaves the `i64` range.
    pub fn aggregate(&mut self) -> Result<base::Units, Overflow> {
        self.root.aggregate()
    }

    /// Pre-order walk over every node below the root, paired with its depth
    /// (top-level categories have depth 0).
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Node)> {
        let mut stack = self
            .root
            .children
            .iter()
            .rev()
            .map(|n| (0, n))
            .collect::<Vec<_>>();
        std::iter::from_fn(move || {
            let (depth, node) = stack.pop()?;
            stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
            Some((depth, node))
        })
    }
}
