//! Guild-level permission resolution.
//!
//! Discord only sends resolved permissions for the channel an interaction happened in.
//! Guild-wide permissions are computed here from the guild's roles: the `@everyone`
//! role (which shares the guild's ID) combined with every role the member holds.

use std::collections::HashMap;

use serenity::all::{GuildId, Permissions, Role, RoleId, UserId};

/// Computes a member's guild-wide permissions
///
/// # Arguments
/// - `guild_id` - The guild, whose ID is also the `@everyone` role ID
/// - `owner_id` - Owner of the guild, who always has every permission
/// - `user_id` - The member being checked
/// - `roles` - Every role of the guild
/// - `member_roles` - Roles the member holds
///
/// # Returns
/// - `Permissions` - Union of the role permissions, or all permissions for owners and
///   administrators
pub fn guild_permissions(
    guild_id: GuildId,
    owner_id: UserId,
    user_id: UserId,
    roles: &HashMap<RoleId, Role>,
    member_roles: &[RoleId],
) -> Permissions {
    if user_id == owner_id {
        return Permissions::all();
    }

    let everyone = RoleId::new(guild_id.get());
    let mut permissions = roles
        .get(&everyone)
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    for role_id in member_roles {
        if let Some(role) = roles.get(role_id) {
            permissions |= role.permissions;
        }
    }

    if permissions.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    permissions
}

/// Whether the permissions allow running moderator commands.
pub fn is_moderator(permissions: Permissions) -> bool {
    permissions.contains(Permissions::ADMINISTRATOR)
        || permissions.contains(Permissions::MANAGE_GUILD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_role;

    const GUILD: u64 = 100;
    const OWNER: u64 = 1;
    const MEMBER: u64 = 2;

    fn roles(entries: &[(u64, Permissions)]) -> HashMap<RoleId, Role> {
        entries
            .iter()
            .map(|(id, permissions)| {
                (
                    RoleId::new(*id),
                    create_test_role(*id, &format!("role {}", id), permissions.bits(), 1),
                )
            })
            .collect()
    }

    fn resolve(roles: &HashMap<RoleId, Role>, member_roles: &[u64]) -> Permissions {
        let member_roles: Vec<_> = member_roles.iter().map(|id| RoleId::new(*id)).collect();
        guild_permissions(
            GuildId::new(GUILD),
            UserId::new(OWNER),
            UserId::new(MEMBER),
            roles,
            &member_roles,
        )
    }

    /// Tests that the guild owner has every permission.
    ///
    /// Expected: all permissions even without roles
    #[test]
    fn owner_has_all_permissions() {
        let permissions = guild_permissions(
            GuildId::new(GUILD),
            UserId::new(OWNER),
            UserId::new(OWNER),
            &HashMap::new(),
            &[],
        );

        assert_eq!(permissions, Permissions::all());
        assert!(is_moderator(permissions));
    }

    /// Tests that `@everyone` permissions apply to every member.
    ///
    /// Expected: permission of the role sharing the guild's ID
    #[test]
    fn everyone_role_applies() {
        let roles = roles(&[(GUILD, Permissions::SEND_MESSAGES)]);

        let permissions = resolve(&roles, &[]);

        assert!(permissions.contains(Permissions::SEND_MESSAGES));
        assert!(!is_moderator(permissions));
    }

    /// Tests that member role permissions are combined.
    ///
    /// Expected: union of everyone and member roles, ignoring roles not held
    #[test]
    fn member_roles_are_combined() {
        let roles = roles(&[
            (GUILD, Permissions::SEND_MESSAGES),
            (10, Permissions::MANAGE_GUILD),
            (11, Permissions::BAN_MEMBERS),
        ]);

        let permissions = resolve(&roles, &[10]);

        assert!(permissions.contains(Permissions::SEND_MESSAGES | Permissions::MANAGE_GUILD));
        assert!(!permissions.contains(Permissions::BAN_MEMBERS));
        assert!(is_moderator(permissions));
    }

    /// Tests that administrators are granted everything.
    ///
    /// Expected: all permissions
    #[test]
    fn administrator_grants_all() {
        let roles = roles(&[(10, Permissions::ADMINISTRATOR)]);

        assert_eq!(resolve(&roles, &[10]), Permissions::all());
    }

    /// Tests that unknown member roles are ignored.
    ///
    /// Expected: empty permissions
    #[test]
    fn unknown_roles_are_ignored() {
        assert_eq!(resolve(&HashMap::new(), &[99]), Permissions::empty());
    }
}
