use crate::{error::AppError, util::parse::parse_u64_from_string};

/// One role belonging to a named role group.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleGroupEntry {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub role_id: u64,
}

impl RoleGroupEntry {
    pub fn from_entity(entity: entity::role_group::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            name: entity.name,
            role_id: parse_u64_from_string(entity.role_id)?,
        })
    }
}
