//! Precondition gate consumed by actions.
//!
//! What a precondition checks is up to the host. This module only defines
//! the boolean seam and an all-of combinator.

/// A gate deciding whether an action may run now.
pub trait Precondition: Send + Sync {
    fn is_satisfied(&self) -> bool;
}

impl Precondition for bool {
    #[inline]
    fn is_satisfied(&self) -> bool {
        *self
    }
}

impl<F> Precondition for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self) -> bool {
        self()
    }
}

/// All-of gate: satisfied when every member is satisfied.
///
/// Members are checked in insertion order and evaluation stops at the first
/// unsatisfied one. An empty set is satisfied.
#[derive(Default)]
pub struct PreconditionSet {
    members: Vec<Box<dyn Precondition>>,
}

impl PreconditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member (builder pattern).
    #[must_use]
    pub fn with(mut self, precondition: impl Precondition + 'static) -> Self {
        self.push(precondition);
        self
    }

    pub fn push(&mut self, precondition: impl Precondition + 'static) {
        self.members.push(Box::new(precondition));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Precondition for PreconditionSet {
    fn is_satisfied(&self) -> bool {
        self.members.iter().all(|member| member.is_satisfied())
    }
}

impl std::fmt::Debug for PreconditionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreconditionSet")
            .field("members", &self.members.len())
            .finish()
    }
}
