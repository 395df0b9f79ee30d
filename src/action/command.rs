//! Action commands and how each one runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serenity::all::RoleId;

use super::{
    condition::{check_groups, Condition},
    gateway::{EphemeralMessage, InteractionGateway},
    snowflake,
};
use crate::error::action::ActionError;

/// Command names as written in action documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionCommand {
    Ack,
    AddRole,
    Predicate,
    RemoveRoleGroup,
    RemoveRole,
    SendEphemeralMessage,
}

impl ActionCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ack => "ACK",
            Self::AddRole => "ADD_ROLE",
            Self::Predicate => "PREDICATE",
            Self::RemoveRoleGroup => "REMOVE_ROLE_GROUP",
            Self::RemoveRole => "REMOVE_ROLE",
            Self::SendEphemeralMessage => "SEND_EPHEMERAL_MESSAGE",
        }
    }
}

/// One action as it appears in the document, before its data is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDocument {
    pub id: String,
    pub command: ActionCommand,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleData {
    #[serde(deserialize_with = "snowflake::deserialize_snowflake")]
    pub role_id: u64,
    #[serde(default)]
    pub on_http_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleGroupData {
    pub group_name: String,
    #[serde(default)]
    pub on_http_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredicateData {
    #[serde(default)]
    pub conditions: Vec<Vec<Condition>>,
    #[serde(default)]
    pub on_success: Option<String>,
    #[serde(default)]
    pub on_failure: Option<String>,
}

/// Interpreted command data.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    Ack,
    AddRole(RoleData),
    RemoveRole(RoleData),
    RemoveRoleGroup(RoleGroupData),
    Predicate(PredicateData),
    SendEphemeralMessage(EphemeralMessage),
}

/// What the event should do after an action finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Continue with the action of the given ID.
    Next(String),
    /// Stop executing the event.
    Exit,
}

/// A validated action ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub id: String,
    pub command: ActionCommand,
    pub kind: ActionKind,
    pub next: Option<String>,
}

impl Action {
    /// Interprets a document action.
    ///
    /// # Returns
    /// - `Ok(Action)` - Data matched the command
    /// - `Err(ActionError::InvalidData)` - Data does not fit the command
    /// - `Err(ActionError::UnexpectedNext)` - `ACK` or `PREDICATE` given a `next`
    pub fn from_document(document: &ActionDocument) -> Result<Self, ActionError> {
        let command = document.command;
        let invalid = |source| ActionError::InvalidData {
            action_id: document.id.clone(),
            command: command.as_str(),
            source,
        };

        let kind = match command {
            ActionCommand::Ack => ActionKind::Ack,
            ActionCommand::AddRole => {
                ActionKind::AddRole(serde_json::from_value(document.data.clone()).map_err(invalid)?)
            }
            ActionCommand::RemoveRole => ActionKind::RemoveRole(
                serde_json::from_value(document.data.clone()).map_err(invalid)?,
            ),
            ActionCommand::RemoveRoleGroup => ActionKind::RemoveRoleGroup(
                serde_json::from_value(document.data.clone()).map_err(invalid)?,
            ),
            ActionCommand::Predicate => ActionKind::Predicate(
                serde_json::from_value(document.data.clone()).map_err(invalid)?,
            ),
            ActionCommand::SendEphemeralMessage => ActionKind::SendEphemeralMessage(
                serde_json::from_value(document.data.clone()).map_err(invalid)?,
            ),
        };

        if document.next.is_some()
            && matches!(command, ActionCommand::Ack | ActionCommand::Predicate)
        {
            return Err(ActionError::UnexpectedNext {
                action_id: document.id.clone(),
                command: command.as_str(),
            });
        }

        Ok(Self {
            id: document.id.clone(),
            command,
            kind,
            next: document.next.clone(),
        })
    }

    /// Every action ID this action may continue with.
    pub fn references(&self) -> Vec<&str> {
        let mut references: Vec<&str> = self.next.iter().map(String::as_str).collect();

        match &self.kind {
            ActionKind::AddRole(data) | ActionKind::RemoveRole(data) => {
                references.extend(data.on_http_error.as_deref());
            }
            ActionKind::RemoveRoleGroup(data) => {
                references.extend(data.on_http_error.as_deref());
            }
            ActionKind::Predicate(data) => {
                references.extend(data.on_success.as_deref());
                references.extend(data.on_failure.as_deref());
            }
            ActionKind::Ack | ActionKind::SendEphemeralMessage(_) => {}
        }

        references
    }

    /// Runs the action and returns where the event continues.
    ///
    /// Failed role changes are not fatal: the run continues with `on_http_error`
    /// when set, otherwise with `next`. Failing to send a message or to evaluate a
    /// condition stops the run with an error.
    pub async fn run<G>(&self, gateway: &G) -> Result<Step, ActionError>
    where
        G: InteractionGateway + ?Sized,
    {
        tracing::debug!("Running action '{}' ({})", self.id, self.command.as_str());

        match &self.kind {
            ActionKind::Ack => {
                gateway.acknowledge().await?;
                Ok(Step::Exit)
            }
            ActionKind::AddRole(data) => {
                let result = gateway.add_role(RoleId::new(data.role_id)).await;
                Ok(self.after_role_change(result, data.on_http_error.as_deref()))
            }
            ActionKind::RemoveRole(data) => {
                let result = gateway.remove_roles(&[RoleId::new(data.role_id)]).await;
                Ok(self.after_role_change(result, data.on_http_error.as_deref()))
            }
            ActionKind::RemoveRoleGroup(data) => {
                let result = remove_role_group(gateway, &data.group_name).await;
                Ok(self.after_role_change(result, data.on_http_error.as_deref()))
            }
            ActionKind::Predicate(data) => {
                let success = check_groups(&data.conditions, gateway).await?;
                let branch = if success {
                    data.on_success.as_ref()
                } else {
                    data.on_failure.as_ref()
                };

                Ok(branch.map_or(Step::Exit, |id| Step::Next(id.clone())))
            }
            ActionKind::SendEphemeralMessage(message) => {
                gateway.send_ephemeral(message).await?;
                Ok(self.next_step())
            }
        }
    }

    fn next_step(&self) -> Step {
        self.next.as_ref().map_or(Step::Exit, |id| Step::Next(id.clone()))
    }

    fn after_role_change(
        &self,
        result: Result<(), ActionError>,
        on_http_error: Option<&str>,
    ) -> Step {
        match result {
            Ok(()) => self.next_step(),
            Err(e) => {
                tracing::warn!("Action '{}' failed to update roles: {}", self.id, e);
                match on_http_error {
                    Some(id) => Step::Next(id.to_string()),
                    None => self.next_step(),
                }
            }
        }
    }
}

/// Removes every role of the group that the member currently has.
async fn remove_role_group<G>(gateway: &G, group_name: &str) -> Result<(), ActionError>
where
    G: InteractionGateway + ?Sized,
{
    let grouped = gateway.role_group_roles(group_name).await?;
    if grouped.is_empty() {
        tracing::debug!("Role group '{}' is empty or missing", group_name);
        return Ok(());
    }

    let current = gateway.member_role_ids().await?;
    let to_remove: Vec<RoleId> = grouped
        .into_iter()
        .filter(|role_id| current.contains(role_id))
        .collect();

    if to_remove.is_empty() {
        return Ok(());
    }

    gateway.remove_roles(&to_remove).await
}
