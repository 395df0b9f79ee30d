use thiserror::Error;

/// Errors raised while parsing, validating or executing an action environment.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("Invalid action document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The `data` object of an action does not fit its command.
    #[error("Action '{action_id}' has invalid data for {command}: {source}")]
    InvalidData {
        /// ID of the action carrying the data
        action_id: String,
        /// Command name the data was parsed for
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two actions inside one event share an ID.
    #[error("Duplicate action ID '{0}'")]
    DuplicateAction(String),

    /// Two events share the same event ID.
    #[error("Duplicate event '{0}'")]
    DuplicateEvent(String),

    /// An event's entrypoint or an action's follow-up points to a missing action.
    #[error("Action '{from}' references unknown action '{target}'")]
    UnknownReference {
        /// ID of the referencing action, or the event ID for entrypoints
        from: String,
        /// The missing action ID
        target: String,
    },

    /// A command that ends or branches the run was given a `next` action.
    #[error("{command} action '{action_id}' cannot have a 'next' action")]
    UnexpectedNext {
        /// ID of the offending action
        action_id: String,
        /// Command name
        command: &'static str,
    },

    /// An event ID that cannot fire for the environment's component type.
    #[error("Event '{event}' is not valid for {environment} environments")]
    EventTypeMismatch {
        /// Event ID
        event: &'static str,
        /// Environment type
        environment: &'static str,
    },

    /// The Discord side of an action failed in a way that stops the run.
    #[error("Interaction gateway error: {0}")]
    Gateway(String),
}
