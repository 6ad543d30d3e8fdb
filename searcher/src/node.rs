//! Search tree nodes.

use std::rc::Rc;

/// A node in the search tree.
///
/// Nodes are never modified once built. Each node holds a
/// shared reference to its parent, so a chain stays alive for
/// as long as any frontier entry, recursion frame or goal
/// still refers to one of its descendants.
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<Rc<Node<S, A>>>,
    action: Option<A>,
    depth: usize,
    cost: usize,
}

impl<S, A> Node<S, A>
where
    A: Clone,
{
    /// The node for the initial state.
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            depth: 0,
            cost: 0,
        })
    }

    /// The node reached from `parent` by taking `action`.
    pub fn child(parent: &Rc<Self>, action: A, state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            depth: parent.depth + 1,
            cost: parent.cost + 1,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The actions leading from the root to this node.
    pub fn path(&self) -> Vec<A> {
        let mut path = Vec::with_capacity(self.depth);
        let mut current = self;
        while let (Some(action), Some(parent)) = (current.action.as_ref(), current.parent.as_ref())
        {
            path.push(action.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

// Unlink the parent chain iteratively, long chains would otherwise
// recurse once per ancestor when the last reference goes away.
impl<S, A> Drop for Node<S, A> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = match Rc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}
