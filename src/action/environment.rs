use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{
    command::{Action, ActionDocument, Step},
    gateway::InteractionGateway,
};
use crate::error::action::ActionError;

/// Component type an environment is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    Buttons,
    Menus,
}

impl EnvironmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Menus => "menus",
        }
    }
}

/// Interaction events an environment can respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    OnButtonClick,
    OnMenuSelect,
    OnMenuUnselect,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnButtonClick => "on_button_click",
            Self::OnMenuSelect => "on_menu_select",
            Self::OnMenuUnselect => "on_menu_unselect",
        }
    }

    fn allowed_for(&self, environment: EnvironmentType) -> bool {
        match self {
            Self::OnButtonClick => environment == EnvironmentType::Buttons,
            Self::OnMenuSelect | Self::OnMenuUnselect => environment == EnvironmentType::Menus,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventDocument {
    id: EventKind,
    entrypoint: String,
    actions: Vec<ActionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EnvironmentDocument {
    #[serde(rename = "type")]
    kind: EnvironmentType,
    events: Vec<EventDocument>,
}

/// One event of an environment: an entrypoint and the actions reachable from it.
#[derive(Debug, Clone)]
pub struct ActionEvent {
    pub kind: EventKind,
    pub entrypoint: String,
    actions: HashMap<String, Action>,
    document: EventDocument,
}

impl ActionEvent {
    fn from_document(document: EventDocument) -> Result<Self, ActionError> {
        let mut actions = HashMap::with_capacity(document.actions.len());

        for action_document in &document.actions {
            let action = Action::from_document(action_document)?;
            if actions.contains_key(&action.id) {
                return Err(ActionError::DuplicateAction(action.id));
            }
            actions.insert(action.id.clone(), action);
        }

        if !actions.contains_key(&document.entrypoint) {
            return Err(ActionError::UnknownReference {
                from: document.id.as_str().to_string(),
                target: document.entrypoint.clone(),
            });
        }

        for action in actions.values() {
            for target in action.references() {
                if !actions.contains_key(target) {
                    return Err(ActionError::UnknownReference {
                        from: action.id.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            kind: document.id,
            entrypoint: document.entrypoint.clone(),
            actions,
            document,
        })
    }

    /// Number of actions in the event.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs the event from its entrypoint until an action exits.
    ///
    /// Every action runs at most once per execution; reaching an action a second
    /// time ends the run.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of actions that ran
    /// - `Err(ActionError)` - An action failed in a way that stops the run
    pub async fn execute<G>(&self, gateway: &G) -> Result<usize, ActionError>
    where
        G: InteractionGateway + ?Sized,
    {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = self.entrypoint.as_str();

        loop {
            if !visited.insert(current) {
                tracing::warn!(
                    "Event {} revisited action '{}', stopping",
                    self.kind.as_str(),
                    current
                );
                break;
            }

            let Some(action) = self.actions.get(current) else {
                tracing::warn!(
                    "Event {} has no action '{}', stopping",
                    self.kind.as_str(),
                    current
                );
                break;
            };

            match action.run(gateway).await? {
                Step::Next(next) => match self.actions.get_key_value(next.as_str()) {
                    Some((id, _)) => current = id.as_str(),
                    None => {
                        tracing::warn!(
                            "Action '{}' continued with unknown action '{}'",
                            action.id,
                            next
                        );
                        break;
                    }
                },
                Step::Exit => break,
            }
        }

        Ok(visited.len())
    }
}

/// A parsed and validated action document.
#[derive(Debug, Clone)]
pub struct ActionEnvironment {
    pub kind: EnvironmentType,
    events: Vec<ActionEvent>,
}

impl ActionEnvironment {
    /// Parses and validates an action document.
    ///
    /// # Arguments
    /// - `json` - The document text
    ///
    /// # Returns
    /// - `Ok(ActionEnvironment)` - The document is well formed
    /// - `Err(ActionError)` - The first problem found
    pub fn parse(json: &str) -> Result<Self, ActionError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parses an already decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ActionError> {
        let document: EnvironmentDocument = serde_json::from_value(value)?;
        Self::from_document(document)
    }

    fn from_document(document: EnvironmentDocument) -> Result<Self, ActionError> {
        let mut seen = HashSet::new();
        let mut events = Vec::with_capacity(document.events.len());

        for event in document.events {
            if !event.id.allowed_for(document.kind) {
                return Err(ActionError::EventTypeMismatch {
                    event: event.id.as_str(),
                    environment: document.kind.as_str(),
                });
            }
            if !seen.insert(event.id) {
                return Err(ActionError::DuplicateEvent(event.id.as_str().to_string()));
            }

            events.push(ActionEvent::from_document(event)?);
        }

        Ok(Self {
            kind: document.kind,
            events,
        })
    }

    /// Serializes the environment back to its canonical JSON form.
    pub fn to_json(&self) -> Result<String, ActionError> {
        let document = EnvironmentDocument {
            kind: self.kind,
            events: self.events.iter().map(|e| e.document.clone()).collect(),
        };

        Ok(serde_json::to_string(&document)?)
    }

    pub fn events(&self) -> &[ActionEvent] {
        &self.events
    }

    pub fn event(&self, kind: EventKind) -> Option<&ActionEvent> {
        self.events.iter().find(|event| event.kind == kind)
    }

    /// Short human readable description, e.g. `buttons: on_button_click (3 actions)`.
    pub fn summary(&self) -> String {
        let events = self
            .events
            .iter()
            .map(|event| format!("{} ({} actions)", event.kind.as_str(), event.len()))
            .collect::<Vec<_>>();

        if events.is_empty() {
            format!("{}: no events", self.kind.as_str())
        } else {
            format!("{}: {}", self.kind.as_str(), events.join(", "))
        }
    }

    /// Runs the `on_button_click` event if the environment has one.
    pub async fn execute_button<G>(&self, gateway: &G) -> Result<(), ActionError>
    where
        G: InteractionGateway + ?Sized,
    {
        if let Some(event) = self.event(EventKind::OnButtonClick) {
            event.execute(gateway).await?;
        }

        Ok(())
    }

    /// Runs `on_menu_select` when the option was selected, `on_menu_unselect` otherwise.
    pub async fn execute_menu<G>(&self, gateway: &G, selected: bool) -> Result<(), ActionError>
    where
        G: InteractionGateway + ?Sized,
    {
        let kind = if selected {
            EventKind::OnMenuSelect
        } else {
            EventKind::OnMenuUnselect
        };

        if let Some(event) = self.event(kind) {
            event.execute(gateway).await?;
        }

        Ok(())
    }
}
