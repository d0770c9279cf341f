use crate::variable::{InstanceHandle, ValueTarget, VariableHandle};

/// Variables an action is bound to, as configured.
///
/// Configuration may bind an asset, an instance, both, or neither. Execution
/// goes through [`TargetBinding::resolve`], which applies the tie-break.
#[derive(Clone, Debug, Default)]
pub struct TargetBinding {
    pub asset: Option<VariableHandle>,
    pub instance: Option<InstanceHandle>,
}

impl TargetBinding {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn asset(asset: VariableHandle) -> Self {
        Self {
            asset: Some(asset),
            instance: None,
        }
    }

    pub fn instance(instance: InstanceHandle) -> Self {
        Self {
            asset: None,
            instance: Some(instance),
        }
    }

    /// Resolves the binding to a single target.
    ///
    /// Tie-break: when both are bound the **instance** wins; the asset is
    /// ignored (validation reports the ambiguity).
    pub fn resolve(&self) -> Target<'_> {
        match (&self.instance, &self.asset) {
            (Some(instance), _) => Target::Instance(instance),
            (None, Some(asset)) => Target::Asset(asset),
            (None, None) => Target::Unset,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.asset.is_some() && self.instance.is_some()
    }
}

impl From<VariableHandle> for TargetBinding {
    fn from(asset: VariableHandle) -> Self {
        Self::asset(asset)
    }
}

impl From<InstanceHandle> for TargetBinding {
    fn from(instance: InstanceHandle) -> Self {
        Self::instance(instance)
    }
}

/// The variable an action actually mutates.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    Unset,
    Asset(&'a VariableHandle),
    Instance(&'a InstanceHandle),
}

impl<'a> Target<'a> {
    pub fn as_value_target(&self) -> Option<&'a dyn ValueTarget> {
        match *self {
            Target::Unset => None,
            Target::Asset(asset) => Some(asset as &dyn ValueTarget),
            Target::Instance(instance) => Some(instance as &dyn ValueTarget),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Target::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::VariableConfig;

    #[test]
    fn instance_wins_over_asset() {
        let asset = VariableHandle::create("global", &VariableConfig::float(0.0));
        let instance = InstanceHandle::create("local", VariableConfig::float(0.0));
        let binding = TargetBinding {
            asset: Some(asset),
            instance: Some(instance.clone()),
        };

        assert!(binding.is_ambiguous());
        match binding.resolve() {
            Target::Instance(resolved) => assert!(resolved.ptr_eq(&instance)),
            other => panic!("expected instance target, got {other:?}"),
        }
    }

    #[test]
    fn resolves_single_bindings() {
        let asset = VariableHandle::create("global", &VariableConfig::float(0.0));
        assert!(matches!(TargetBinding::from(asset).resolve(), Target::Asset(_)));
        assert!(TargetBinding::unset().resolve().is_unset());
        assert!(TargetBinding::unset().resolve().as_value_target().is_none());
    }
}
