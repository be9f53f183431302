//! Leaf specifications over [`User`].

use super::{SpecRef, Specification};
use crate::domain::{User, UserType};
use std::sync::Arc;

/// Satisfied when the user's type equals the configured type.
#[derive(Debug, Clone, Copy)]
pub struct TypeSpecification {
    kind: UserType,
}

impl TypeSpecification {
    pub fn new(kind: UserType) -> Self {
        Self { kind }
    }

    pub fn shared(kind: UserType) -> SpecRef<User> {
        Arc::new(Self::new(kind))
    }
}

impl Specification<User> for TypeSpecification {
    fn is_satisfied_by(&self, candidate: &User) -> bool {
        candidate.kind() == self.kind
    }

    fn describe(&self) -> String {
        format!("type == {}", self.kind)
    }
}

/// Satisfied when the user's name equals the configured name, ignoring case.
#[derive(Debug, Clone)]
pub struct NameSpecification {
    /// Stored lower-cased.
    name: String,
}

impl NameSpecification {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
        }
    }

    pub fn shared(name: &str) -> SpecRef<User> {
        Arc::new(Self::new(name))
    }
}

impl Specification<User> for NameSpecification {
    fn is_satisfied_by(&self, candidate: &User) -> bool {
        candidate.name().to_lowercase() == self.name
    }

    fn describe(&self) -> String {
        format!("name ~= {:?}", self.name)
    }
}

/// Satisfied when the user's name is at most `max_len` bytes long (UTF-8).
#[derive(Debug, Clone, Copy)]
pub struct NameLengthSpecification {
    max_len: usize,
}

impl NameLengthSpecification {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn shared(max_len: usize) -> SpecRef<User> {
        Arc::new(Self::new(max_len))
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Specification<User> for NameLengthSpecification {
    fn is_satisfied_by(&self, candidate: &User) -> bool {
        candidate.name().len() <= self.max_len
    }

    fn describe(&self) -> String {
        format!("len(name) <= {}", self.max_len)
    }
}

/// Satisfied when the user is locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockedSpecification;

impl LockedSpecification {
    pub fn shared() -> SpecRef<User> {
        Arc::new(Self)
    }
}

impl Specification<User> for LockedSpecification {
    fn is_satisfied_by(&self, candidate: &User) -> bool {
        candidate.is_locked()
    }

    fn describe(&self) -> String {
        "locked".to_string()
    }
}

/// Evaluates `spec` against `user`.
pub fn user_satisfies(user: &User, spec: &dyn Specification<User>) -> bool {
    spec.is_satisfied_by(user)
}
