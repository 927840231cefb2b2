use std::fmt;
use std::rc::Rc;

/// One expanded step of a search: a state, the cost accumulated to reach it
/// and the node it was reached from.
///
/// Parents form an immutable singly-linked chain ending at a root node with
/// no parent. Sibling branches share their common ancestors through [`Rc`].
/// Chains may be arbitrarily long: dropping and formatting a node never
/// recurse through its ancestors.
#[derive(Clone)]
pub struct PathNode<S, C> {
    state: S,
    cost: C,
    parent: Option<Rc<PathNode<S, C>>>,
}

impl<S, C> PathNode<S, C> {
    /// A node without parent, usually the search's initial state.
    pub fn root(state: S, cost: C) -> Rc<Self> {
        Rc::new(Self {
            state,
            cost,
            parent: None,
        })
    }

    /// A node reached from `parent`.
    pub fn child(parent: &Rc<Self>, state: S, cost: C) -> Rc<Self> {
        Rc::new(Self {
            state,
            cost,
            parent: Some(Rc::clone(parent)),
        })
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Cost accumulated from the root.
    #[inline]
    pub fn cost(&self) -> &C {
        &self.cost
    }

    #[inline]
    pub fn parent(&self) -> Option<&PathNode<S, C>> {
        self.parent.as_deref()
    }

    /// Number of nodes from the root to this node, inclusive.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// This node followed by its parent, grandparent, ... up to the root.
    pub fn ancestors(&self) -> Ancestors<'_, S, C> {
        Ancestors { next: Some(self) }
    }
}

impl<S: Clone, C> PathNode<S, C> {
    /// The states from the root to this node.
    ///
    /// The returned vector is independent of the node chain.
    pub fn path(&self) -> Vec<S> {
        let mut path: Vec<S> = self.ancestors().map(|n| n.state.clone()).collect();
        path.reverse();
        path
    }
}

impl<S, C> Drop for PathNode<S, C> {
    fn drop(&mut self) {
        // Unlink uniquely owned ancestors one at a time. A shared ancestor is
        // still alive elsewhere, so releasing our reference ends the walk.
        let mut next = self.parent.take();
        while let Some(rc) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl<S: fmt::Debug, C: fmt::Debug> fmt::Debug for PathNode<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathNode")
            .field("state", &self.state)
            .field("cost", &self.cost)
            .field("depth", &self.depth())
            .finish()
    }
}

/// Iterator over a node and its ancestors, see [`PathNode::ancestors`].
pub struct Ancestors<'a, S, C> {
    next: Option<&'a PathNode<S, C>>,
}

impl<'a, S, C> Iterator for Ancestors<'a, S, C> {
    type Item = &'a PathNode<S, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
