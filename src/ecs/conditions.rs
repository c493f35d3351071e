use bevy_ecs::system::Res;

use super::resources::NetRole;

// Internal check functions for testability.

fn authoritative_check(role: Option<&NetRole>) -> bool {
    matches!(role, Some(NetRole::Server))
}

// Bevy run condition functions (for use with `.run_if()`).

/// Only the authoritative side mutates toxin state. A missing role resource
/// is treated as non-authoritative.
pub fn is_authoritative(role: Option<Res<NetRole>>) -> bool {
    authoritative_check(role.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_is_authoritative() {
        assert!(authoritative_check(Some(&NetRole::Server)));
    }

    #[test]
    fn client_is_not_authoritative() {
        assert!(!authoritative_check(Some(&NetRole::Client)));
    }

    #[test]
    fn missing_role_is_not_authoritative() {
        assert!(!authoritative_check(None));
    }
}
