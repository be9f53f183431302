//! Catalogue of predefined user rules
//!
//! Rules are built once, bottom-up, and shared: `any-admin` is itself a child
//! of `not-admin` and `valid-name-not-admin`.

use crate::domain::{User, UserType};
use crate::specification::user::{LockedSpecification, NameLengthSpecification, TypeSpecification};
use crate::specification::{SpecRef, Specification, SpecificationExt, all_of};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Names of the predefined rules
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RuleName {
    IsPersonal,
    IsAdmin,
    IsSuperAdmin,
    AnyAdmin,
    NotAdmin,
    NotSuperAdmin,
    IsNameShort,
    Locked,
    NotLocked,
    ValidNameNotAdmin,
}

/// Short-name threshold used when none is configured
pub const DEFAULT_SHORT_NAME_THRESHOLD: usize = 4;

/// The predefined rules, looked up by [`RuleName`]
pub struct RuleCatalog {
    short_name_threshold: usize,
    is_personal: SpecRef<User>,
    is_admin: SpecRef<User>,
    is_super_admin: SpecRef<User>,
    any_admin: SpecRef<User>,
    not_admin: SpecRef<User>,
    not_super_admin: SpecRef<User>,
    is_name_short: SpecRef<User>,
    locked: SpecRef<User>,
    not_locked: SpecRef<User>,
    valid_name_not_admin: SpecRef<User>,
}

impl RuleCatalog {
    /// Builds every rule; `is-name-short` uses `short_name_threshold`.
    pub fn new(short_name_threshold: usize) -> Self {
        let is_personal = TypeSpecification::shared(UserType::Personal);
        let is_admin = TypeSpecification::shared(UserType::Admin);
        let is_super_admin = TypeSpecification::shared(UserType::SuperAdmin);

        let any_admin = is_admin.or(is_super_admin.clone());
        let not_admin = any_admin.not();
        let not_super_admin = is_super_admin.not();

        let is_name_short = NameLengthSpecification::shared(short_name_threshold);

        let locked = LockedSpecification::shared();
        let not_locked = locked.not();

        let valid_name_not_admin = all_of([
            any_admin.not(),
            not_locked.clone(),
            is_name_short.not(),
        ]);

        tracing::debug!(short_name_threshold, "rule catalog built");

        Self {
            short_name_threshold,
            is_personal,
            is_admin,
            is_super_admin,
            any_admin,
            not_admin,
            not_super_admin,
            is_name_short,
            locked,
            not_locked,
            valid_name_not_admin,
        }
    }

    pub fn get(&self, name: RuleName) -> SpecRef<User> {
        let spec = match name {
            RuleName::IsPersonal => &self.is_personal,
            RuleName::IsAdmin => &self.is_admin,
            RuleName::IsSuperAdmin => &self.is_super_admin,
            RuleName::AnyAdmin => &self.any_admin,
            RuleName::NotAdmin => &self.not_admin,
            RuleName::NotSuperAdmin => &self.not_super_admin,
            RuleName::IsNameShort => &self.is_name_short,
            RuleName::Locked => &self.locked,
            RuleName::NotLocked => &self.not_locked,
            RuleName::ValidNameNotAdmin => &self.valid_name_not_admin,
        };
        spec.clone()
    }

    pub fn short_name_threshold(&self) -> usize {
        self.short_name_threshold
    }

    /// `(name, description)` for every rule, in declaration order
    pub fn describe_all(&self) -> Vec<(RuleName, String)> {
        RuleName::iter()
            .map(|name| (name, self.get(name).describe()))
            .collect()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_NAME_THRESHOLD)
    }
}
