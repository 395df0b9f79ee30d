use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use serenity::all::{Permissions, RoleId};
use serenity::async_trait;

use crate::action::{
    ActionEnvironment, EphemeralMessage, EventKind, InteractionGateway,
};
use crate::error::action::ActionError;


/// Calls recorded by [`MockGateway`], in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Acknowledge,
    SendEphemeral(Option<String>),
    AddRole(u64),
    RemoveRoles(Vec<u64>),
}

/// In-memory gateway with configurable member, guild and permission state.
pub(crate) struct MockGateway {
    member_roles: Mutex<Vec<RoleId>>,
    guild_roles: Vec<RoleId>,
    member_permissions: Permissions,
    bot_permissions: Permissions,
    groups: Vec<(String, Vec<RoleId>)>,
    fail_role_updates: bool,
    fail_messages: bool,
    responded: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl MockGateway {
    pub(crate) fn new() -> Self {
        Self {
            member_roles: Mutex::new(Vec::new()),
            guild_roles: Vec::new(),
            member_permissions: Permissions::empty(),
            bot_permissions: Permissions::empty(),
            groups: Vec::new(),
            fail_role_updates: false,
            fail_messages: false,
            responded: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn member_roles(self, roles: &[u64]) -> Self {
        *self.member_roles.lock().unwrap() = roles.iter().map(|id| RoleId::new(*id)).collect();
        self
    }

    pub(crate) fn guild_roles(mut self, roles: &[u64]) -> Self {
        self.guild_roles = roles.iter().map(|id| RoleId::new(*id)).collect();
        self
    }

    pub(crate) fn member_permissions(mut self, permissions: Permissions) -> Self {
        self.member_permissions = permissions;
        self
    }

    pub(crate) fn bot_permissions(mut self, permissions: Permissions) -> Self {
        self.bot_permissions = permissions;
        self
    }

    pub(crate) fn group(mut self, name: &str, roles: &[u64]) -> Self {
        self.groups.push((
            name.to_string(),
            roles.iter().map(|id| RoleId::new(*id)).collect(),
        ));
        self
    }

    pub(crate) fn failing_role_updates(mut self) -> Self {
        self.fail_role_updates = true;
        self
    }

    pub(crate) fn failing_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn current_roles(&self) -> Vec<u64> {
        self.member_roles
            .lock()
            .unwrap()
            .iter()
            .map(|id| id.get())
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl InteractionGateway for MockGateway {
    async fn acknowledge(&self) -> Result<(), ActionError> {
        self.record(Call::Acknowledge);
        self.responded.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn send_ephemeral(&self, message: &EphemeralMessage) -> Result<(), ActionError> {
        if self.fail_messages {
            return Err(ActionError::Gateway("message rejected".to_string()));
        }
        self.record(Call::SendEphemeral(message.content.clone()));
        self.responded.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn add_role(&self, role_id: RoleId) -> Result<(), ActionError> {
        if self.fail_role_updates {
            return Err(ActionError::Gateway("missing access".to_string()));
        }
        self.record(Call::AddRole(role_id.get()));
        let mut roles = self.member_roles.lock().unwrap();
        if !roles.contains(&role_id) {
            roles.push(role_id);
        }
        Ok(())
    }

    async fn remove_roles(&self, role_ids: &[RoleId]) -> Result<(), ActionError> {
        if self.fail_role_updates {
            return Err(ActionError::Gateway("missing access".to_string()));
        }
        self.record(Call::RemoveRoles(role_ids.iter().map(|id| id.get()).collect()));
        self.member_roles
            .lock()
            .unwrap()
            .retain(|id| !role_ids.contains(id));
        Ok(())
    }

    async fn member_role_ids(&self) -> Result<Vec<RoleId>, ActionError> {
        Ok(self.member_roles.lock().unwrap().clone())
    }

    async fn guild_has_role(&self, role_id: RoleId) -> Result<bool, ActionError> {
        Ok(self.guild_roles.contains(&role_id))
    }

    async fn member_channel_permissions(&self) -> Result<Permissions, ActionError> {
        Ok(self.member_permissions)
    }

    async fn member_guild_permissions(&self) -> Result<Permissions, ActionError> {
        Ok(self.member_permissions)
    }

    async fn bot_channel_permissions(&self) -> Result<Permissions, ActionError> {
        Ok(self.bot_permissions)
    }

    async fn bot_guild_permissions(&self) -> Result<Permissions, ActionError> {
        Ok(self.bot_permissions)
    }

    async fn role_group_roles(&self, group_name: &str) -> Result<Vec<RoleId>, ActionError> {
        Ok(self
            .groups
            .iter()
            .find(|(name, _)| name == group_name)
            .map(|(_, roles)| roles.clone())
            .unwrap_or_default())
    }

    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::SeqCst)
    }
}

/// Builds a button environment with a single `on_button_click` event.
fn button_environment(entrypoint: &str, actions: serde_json::Value) -> ActionEnvironment {
    ActionEnvironment::from_value(serde_json::json!({
        "type": "buttons",
        "events": [{ "id": "on_button_click", "entrypoint": entrypoint, "actions": actions }]
    }))
    .unwrap()
}
