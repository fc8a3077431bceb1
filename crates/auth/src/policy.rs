//! Role- and ownership-based authorization

use crate::claims::SessionPrincipal;
use crate::error::AuthError;
use crate::types::Role;

/// What a route demands of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement<'a> {
    /// Any verified principal
    AnyAuthenticated,
    /// Principal's role must be one of these
    OneOf(&'a [Role]),
    /// Principal must own the resource (by subject id) or be an admin
    SelfOrAdmin(&'a str),
}

/// Pure access predicate.
pub fn authorize(principal: &SessionPrincipal, requirement: RoleRequirement<'_>) -> bool {
    match requirement {
        RoleRequirement::AnyAuthenticated => true,
        RoleRequirement::OneOf(roles) => roles.contains(&principal.role),
        RoleRequirement::SelfOrAdmin(owner_id) => {
            principal.subject_id == owner_id || principal.role.is_admin()
        }
    }
}

/// `authorize`, with a denial reported as `InsufficientRole` or `NotOwner`.
pub fn require(
    principal: &SessionPrincipal,
    requirement: RoleRequirement<'_>,
) -> Result<(), AuthError> {
    if authorize(principal, requirement) {
        return Ok(());
    }

    tracing::debug!(
        subject_id = %principal.subject_id,
        role = %principal.role,
        ?requirement,
        "Authorization denied"
    );

    match requirement {
        RoleRequirement::SelfOrAdmin(_) => Err(AuthError::NotOwner),
        RoleRequirement::AnyAuthenticated | RoleRequirement::OneOf(_) => {
            Err(AuthError::InsufficientRole)
        }
    }
}
