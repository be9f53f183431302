//! Walkthrough of the rule catalogue and two access gates.
//!
//! Prints, in order: two direct rule checks for an admin, the `high level`
//! gate (super admins only) for an admin and a super admin, then the
//! `onlyValidUser` gate for an admin, a locked personal user and an unlocked
//! personal user.

use crate::domain::{User, UserType};
use crate::error::GateResult;
use crate::gate::{AccessGate, AccessGrant};
use crate::rules::{RuleCatalog, RuleName};
use crate::specification::user::user_satisfies;
use anyhow::Result;
use std::io::Write;

/// Runs the walkthrough against `rules`, writing status lines to `out`.
pub fn run_scenario<W: Write>(rules: &RuleCatalog, out: &mut W) -> Result<()> {
    let _span = tracing::info_span!("scenario").entered();

    let alex = User::new(UserType::Admin, "Alex");
    let super_alex = User::new(UserType::SuperAdmin, "SuperAlex");

    writeln!(
        out,
        "{}: Any Admin? {}",
        alex,
        user_satisfies(&alex, rules.get(RuleName::AnyAdmin).as_ref())
    )?;
    writeln!(
        out,
        "{}: Any SuperAdmin? {}",
        alex,
        user_satisfies(&alex, rules.get(RuleName::IsSuperAdmin).as_ref())
    )?;

    let handler_secret = AccessGate::new(
        "high level",
        rules.get(RuleName::IsSuperAdmin),
        |_: &User| "execute handlerSecret",
    );
    for user in [&alex, &super_alex] {
        report(handler_secret.check_access(user), out)?;
    }

    let boo_foo_locked = User::new(UserType::Personal, "BooFooLocked").with_locked(true);
    let boo_foo = User::new(UserType::Personal, "BooFoo");

    let handler_only_valid_user = AccessGate::new(
        "onlyValidUser",
        rules.get(RuleName::ValidNameNotAdmin),
        |_: &User| "execute handlerOnlyValidUser",
    );
    for user in [&alex, &boo_foo_locked, &boo_foo] {
        report(handler_only_valid_user.check_access(user), out)?;
    }

    Ok(())
}

/// Prints a gate decision: the denial text, or the grant line followed by
/// the handler's output.
pub fn report<W, R>(decision: GateResult<AccessGrant<R>>, out: &mut W) -> Result<()>
where
    W: Write,
    R: std::fmt::Display,
{
    match decision {
        Ok(grant) => {
            writeln!(out, "{grant}")?;
            writeln!(out, "{}", grant.output)?;
        }
        Err(denied) => writeln!(out, "{denied}")?,
    }
    Ok(())
}
