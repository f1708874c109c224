//! Minimal priority-tree primitives for turn-based decisions.
//!
//! Nodes complete in one tick with either success or failure; there is no
//! running state. Action leaves record their choice in the context.

/// Result of evaluating a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn from_bool(value: bool) -> Self {
        if value { Self::Success } else { Self::Failure }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// A node evaluated against a mutable blackboard `C`.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node borrowing data for `'n`.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

impl<C> Behavior<C> for Node<'_, C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Short-circuit AND: fails on the first failing child.
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if !child.tick(ctx).is_success() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Short-circuit OR: the first succeeding child wins.
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Leaf that succeeds when the predicate holds. Never mutates the context.
pub struct Condition<C> {
    predicate: fn(&C) -> bool,
}

impl<C> Condition<C> {
    pub fn new(predicate: fn(&C) -> bool) -> Self {
        Self { predicate }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Leaf that runs `action` and reports whether it produced a choice.
pub struct Action<C> {
    action: fn(&mut C) -> bool,
}

impl<C> Action<C> {
    pub fn new(action: fn(&mut C) -> bool) -> Self {
        Self { action }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.action)(ctx))
    }
}
