//! Edit/clone/delete controls bound to a single secret configuration.

use crate::models::SecretConfig;

/// Caller-supplied handlers for the per-entry actions.
///
/// The widget never mutates anything itself; every activation is forwarded
/// here with the entry the control was rendered for.
pub trait SecretConfigOperations {
    fn on_edit(&self, config: &SecretConfig);
    fn on_clone(&self, config: &SecretConfig);
    fn on_delete(&self, config: &SecretConfig);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Edit,
    Clone,
    Delete,
}

impl ActionKind {
    pub const ALL: [Self; 3] = [Self::Edit, Self::Clone, Self::Delete];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Clone => "Clone",
            Self::Delete => "Delete",
        }
    }

    #[must_use]
    pub const fn test_id(self) -> &'static str {
        match self {
            Self::Edit => "secret-config-edit",
            Self::Clone => "secret-config-clone",
            Self::Delete => "secret-config-delete",
        }
    }

    /// Edit and clone need a secret plugin to open their editors.
    #[must_use]
    pub const fn requires_plugin(self) -> bool {
        matches!(self, Self::Edit | Self::Clone)
    }
}

/// One icon button of a panel's action group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton<'a> {
    pub kind: ActionKind,
    pub disabled: bool,
    pub config: &'a SecretConfig,
}

impl ActionButton<'_> {
    /// Forward the bound entry to the matching handler.
    ///
    /// Returns `false` without calling anything when the control is disabled.
    pub fn activate<O>(&self, operations: &O) -> bool
    where
        O: SecretConfigOperations + ?Sized,
    {
        if self.disabled {
            tracing::debug!(
                "Ignoring {} on disabled control for secret config {}",
                self.kind.label(),
                self.config.id
            );
            return false;
        }

        match self.kind {
            ActionKind::Edit => operations.on_edit(self.config),
            ActionKind::Clone => operations.on_clone(self.config),
            ActionKind::Delete => operations.on_delete(self.config),
        }
        true
    }
}

/// Build the edit, clone, and delete controls for an entry.
#[must_use]
pub fn action_buttons(config: &SecretConfig, has_secret_plugins: bool) -> [ActionButton<'_>; 3] {
    ActionKind::ALL.map(|kind| ActionButton {
        kind,
        disabled: kind.requires_plugin() && !has_secret_plugins,
        config,
    })
}
