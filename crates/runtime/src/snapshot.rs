//! Read-only views of scene variables for display and export.

use std::fmt;

use okapi_core::{InstanceHandle, ValueKind, VariableHandle};
use serde::Serialize;

/// Where a variable lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", content = "owner", rename_all = "snake_case")]
pub enum VariableScope {
    /// Scene-level asset shared by every behavior.
    Global,
    /// Instance owned by the named behavior.
    Local(String),
}

/// Value of one variable at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableSnapshot {
    #[serde(flatten)]
    pub scope: VariableScope,
    pub name: String,
    pub kind: ValueKind,
    pub value: f32,
    pub display: String,
    /// False for instances still reporting their configured default.
    pub materialized: bool,
}

impl VariableSnapshot {
    pub fn of_asset(asset: &VariableHandle) -> Self {
        asset.with(|asset| Self {
            scope: VariableScope::Global,
            name: asset.name().to_owned(),
            kind: asset.kind(),
            value: asset.current_value(),
            display: asset.to_display_string(),
            materialized: true,
        })
    }

    pub fn of_instance(behavior: &str, instance: &InstanceHandle) -> Self {
        instance.with(|instance| {
            let view = instance.get_value();
            Self {
                scope: VariableScope::Local(behavior.to_owned()),
                name: instance.name().to_owned(),
                kind: view.kind(),
                value: view.current(),
                display: view.to_display_string(),
                materialized: view.is_live(),
            }
        })
    }

    /// Qualified name: `score` for globals, `player.ammo` for instances.
    pub fn qualified_name(&self) -> String {
        match &self.scope {
            VariableScope::Global => self.name.clone(),
            VariableScope::Local(owner) => format!("{owner}.{}", self.name),
        }
    }
}

impl fmt::Display for VariableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.qualified_name(), self.display)
    }
}

#[cfg(test)]
mod tests {
    use okapi_core::{ValueTarget, VariableConfig};

    use super::*;

    #[test]
    fn formats_globals_and_locals() {
        let score = VariableHandle::create("score", &VariableConfig::integer(0.0));
        score.change_value(12.9);
        let ammo = InstanceHandle::create("ammo", VariableConfig::integer(5.0));

        let global = VariableSnapshot::of_asset(&score);
        let local = VariableSnapshot::of_instance("player", &ammo);

        assert_eq!(global.to_string(), "score = 12");
        assert_eq!(local.to_string(), "player.ammo = 5");
        assert!(!local.materialized);
    }
}
