//! Access gate: a specification guarding a handler
//!
//! Given a subject, the gate evaluates its specification once. A refused
//! subject yields [`GateError::AccessDenied`]; an accepted subject runs the
//! handler and yields an [`AccessGrant`] carrying the handler's output.
//!
//! Usage:
//! ```
//! use spec_gate::domain::{User, UserType};
//! use spec_gate::gate::AccessGate;
//! use spec_gate::specification::user::TypeSpecification;
//!
//! let gate = AccessGate::new(
//!     "high level",
//!     TypeSpecification::shared(UserType::SuperAdmin),
//!     |_user: &User| "execute handlerSecret",
//! );
//!
//! let denied = gate.check_access(&User::new(UserType::Admin, "Alex"));
//! assert!(denied.is_err());
//!
//! let grant = gate
//!     .check_access(&User::new(UserType::SuperAdmin, "SuperAlex"))
//!     .unwrap();
//! assert_eq!(grant.output, "execute handlerSecret");
//! ```

use crate::error::{GateError, GateResult};
use crate::specification::{SpecRef, Specification};
use std::fmt;

/// Handler run for subjects the gate admits
pub type Handler<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;

/// Successful access decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant<R = ()> {
    /// Gate name
    pub gate: String,
    /// Display form of the admitted subject
    pub subject: String,
    /// Value returned by the handler
    pub output: R,
}

impl<R> fmt::Display for AccessGrant<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: access granted, user: {}", self.gate, self.subject)
    }
}

/// Pairs a named specification with the handler it protects
pub struct AccessGate<T: ?Sized, R = ()> {
    name: String,
    spec: SpecRef<T>,
    handler: Handler<T, R>,
}

impl<T, R> AccessGate<T, R>
where
    T: fmt::Display + ?Sized,
{
    pub fn new<F>(name: impl Into<String>, spec: SpecRef<T>, handler: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            spec,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The guarding specification
    pub fn specification(&self) -> &SpecRef<T> {
        &self.spec
    }

    /// Check the subject without running the handler
    pub fn permits(&self, subject: &T) -> bool {
        self.spec.is_satisfied_by(subject)
    }

    /// Evaluate the specification and, if satisfied, run the handler once
    pub fn check_access(&self, subject: &T) -> GateResult<AccessGrant<R>> {
        if !self.permits(subject) {
            tracing::warn!(
                gate = %self.name,
                subject = %subject,
                rule = %self.spec.describe(),
                "access denied"
            );
            return Err(GateError::access_denied(&self.name, subject));
        }

        tracing::info!(
            gate = %self.name,
            subject = %subject,
            rule = %self.spec.describe(),
            "access granted"
        );

        let output = (self.handler)(subject);
        Ok(AccessGrant {
            gate: self.name.clone(),
            subject: subject.to_string(),
            output,
        })
    }
}

impl<T: ?Sized, R> fmt::Debug for AccessGate<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate")
            .field("name", &self.name)
            .field("spec", &self.spec.describe())
            .finish_non_exhaustive()
    }
}
