//! Composable specifications (boolean predicates) over a candidate entity.
//!
//! A specification answers one question: does a candidate satisfy a rule?
//! Leaf specifications test a single property; the combinators in this
//! module compose them:
//!
//! - [`AndSpecification`] - every child must hold (vacuously true when empty)
//! - [`OrSpecification`] - at least one child must hold (false when empty)
//! - [`NotSpecification`] - negates its single child
//!
//! Children are held as [`SpecRef`] (`Arc<dyn Specification<T>>`), so one
//! rule can be shared by many composites. Specifications are built bottom-up,
//! which rules out cycles.
//!
//! ## Usage
//! ```
//! use spec_gate::domain::{User, UserType};
//! use spec_gate::specification::{Specification, SpecificationExt, user::TypeSpecification};
//!
//! let is_admin = TypeSpecification::shared(UserType::Admin);
//! let is_super_admin = TypeSpecification::shared(UserType::SuperAdmin);
//! let any_admin = is_admin.or(is_super_admin);
//!
//! let alex = User::new(UserType::Admin, "Alex");
//! assert!(any_admin.is_satisfied_by(&alex));
//! assert!(!any_admin.not().is_satisfied_by(&alex));
//! ```

pub mod user;

use std::sync::Arc;

// =============================================================================
// Core Specification Trait
// =============================================================================

/// A predicate over candidates of type `T`.
///
/// Evaluation is total and side-effect-free.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Returns `true` if `candidate` satisfies this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Human-readable rendering of the rule, e.g. `(type == ADMIN OR locked)`.
    fn describe(&self) -> String;
}

/// Shared handle to a specification.
pub type SpecRef<T> = Arc<dyn Specification<T>>;

// =============================================================================
// Combinators
// =============================================================================

/// Satisfied when every child is satisfied. Short-circuits on the first
/// unsatisfied child.
pub struct AndSpecification<T: ?Sized> {
    specs: Vec<SpecRef<T>>,
}

impl<T: ?Sized> AndSpecification<T> {
    pub fn new(specs: Vec<SpecRef<T>>) -> Self {
        Self { specs }
    }
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied_by(candidate))
    }

    fn describe(&self) -> String {
        join_descriptions(&self.specs, " AND ", "true")
    }
}

/// Satisfied when at least one child is satisfied. Short-circuits on the
/// first satisfied child.
pub struct OrSpecification<T: ?Sized> {
    specs: Vec<SpecRef<T>>,
}

impl<T: ?Sized> OrSpecification<T> {
    pub fn new(specs: Vec<SpecRef<T>>) -> Self {
        Self { specs }
    }
}

impl<T: ?Sized> Specification<T> for OrSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied_by(candidate))
    }

    fn describe(&self) -> String {
        join_descriptions(&self.specs, " OR ", "false")
    }
}

/// Negates a single child.
pub struct NotSpecification<T: ?Sized> {
    spec: SpecRef<T>,
}

impl<T: ?Sized> NotSpecification<T> {
    pub fn new(spec: SpecRef<T>) -> Self {
        Self { spec }
    }
}

impl<T: ?Sized> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.spec.is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.spec.describe())
    }
}

fn join_descriptions<T: ?Sized>(specs: &[SpecRef<T>], separator: &str, empty: &str) -> String {
    match specs {
        [] => empty.to_string(),
        [single] => single.describe(),
        many => {
            let parts = many
                .iter()
                .map(|spec| spec.describe())
                .collect::<Vec<_>>()
                .join(separator);
            format!("({parts})")
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// AND over `specs`.
pub fn all_of<T, I>(specs: I) -> SpecRef<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = SpecRef<T>>,
{
    Arc::new(AndSpecification::new(specs.into_iter().collect()))
}

/// OR over `specs`.
pub fn any_of<T, I>(specs: I) -> SpecRef<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = SpecRef<T>>,
{
    Arc::new(OrSpecification::new(specs.into_iter().collect()))
}

/// NOT over `spec`.
pub fn not<T>(spec: SpecRef<T>) -> SpecRef<T>
where
    T: ?Sized + 'static,
{
    Arc::new(NotSpecification::new(spec))
}

/// Fluent composition on shared specifications.
pub trait SpecificationExt<T: ?Sized> {
    fn and(&self, other: SpecRef<T>) -> SpecRef<T>;
    fn or(&self, other: SpecRef<T>) -> SpecRef<T>;
    fn not(&self) -> SpecRef<T>;
}

impl<T: ?Sized + 'static> SpecificationExt<T> for SpecRef<T> {
    fn and(&self, other: SpecRef<T>) -> SpecRef<T> {
        all_of([Arc::clone(self), other])
    }

    fn or(&self, other: SpecRef<T>) -> SpecRef<T> {
        any_of([Arc::clone(self), other])
    }

    fn not(&self) -> SpecRef<T> {
        not(Arc::clone(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Constant specification that counts how often it is evaluated.
    struct Counting {
        value: bool,
        calls: AtomicUsize,
    }

    impl Counting {
        fn new(value: bool) -> Arc<Self> {
            Arc::new(Self {
                value,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Specification<i32> for Counting {
        fn is_satisfied_by(&self, _candidate: &i32) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value
        }

        fn describe(&self) -> String {
            self.value.to_string()
        }
    }

    struct Positive;

    impl Specification<i32> for Positive {
        fn is_satisfied_by(&self, candidate: &i32) -> bool {
            *candidate > 0
        }

        fn describe(&self) -> String {
            "positive".to_string()
        }
    }

    fn positive() -> SpecRef<i32> {
        Arc::new(Positive)
    }

    #[test]
    fn test_empty_and_is_true() {
        let spec: SpecRef<i32> = all_of(Vec::new());
        assert!(spec.is_satisfied_by(&0));
        assert_eq!(spec.describe(), "true");
    }

    #[test]
    fn test_empty_or_is_false() {
        let spec: SpecRef<i32> = any_of(Vec::new());
        assert!(!spec.is_satisfied_by(&0));
        assert_eq!(spec.describe(), "false");
    }

    #[test]
    fn test_and_short_circuits_on_first_false() {
        let first = Counting::new(false);
        let second = Counting::new(true);
        let spec = all_of([first.clone() as SpecRef<i32>, second.clone() as SpecRef<i32>]);

        assert!(!spec.is_satisfied_by(&1));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_or_short_circuits_on_first_true() {
        let first = Counting::new(true);
        let second = Counting::new(false);
        let spec = any_of([first.clone() as SpecRef<i32>, second.clone() as SpecRef<i32>]);

        assert!(spec.is_satisfied_by(&1));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_not_negates() {
        let spec = positive().not();
        assert!(spec.is_satisfied_by(&-3));
        assert!(!spec.is_satisfied_by(&3));
        assert_eq!(spec.describe(), "NOT positive");
    }

    #[test]
    fn test_fluent_composition_describes_tree() {
        let spec = positive().and(positive().not()).or(positive());
        assert_eq!(
            spec.describe(),
            "((positive AND NOT positive) OR positive)"
        );
        assert!(spec.is_satisfied_by(&1));
        assert!(!spec.is_satisfied_by(&-1));
    }

    #[test]
    fn test_shared_child_in_several_composites() {
        let shared = positive();
        let both = all_of([shared.clone(), shared.clone()]);
        let negated = shared.not();
        assert!(both.is_satisfied_by(&5));
        assert!(!negated.is_satisfied_by(&5));
        assert_eq!(Arc::strong_count(&shared), 4);
    }
}
