use tessera_core::DynamicValueError;
use thiserror::Error;

/// Raised by a builder's `build()` when mandatory props were not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(
        "{}: The following props are not marked as optional and were not supplied: [{}]",
        .component,
        .props.join(", ")
    )]
    MissingRequiredProps {
        component: &'static str,
        props: Vec<&'static str>,
    },
}

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error(transparent)]
    Build(#[from] BuildError),

    /// A lifecycle callback reported a failure.
    #[error("{component}.{callback} failed: {reason}")]
    Lifecycle {
        component: &'static str,
        callback: &'static str,
        reason: String,
    },

    #[error("component tree {tree_id} was released")]
    TreeReleased { tree_id: u64 },

    #[error(transparent)]
    DynamicValue(#[from] DynamicValueError),
}

impl ComponentError {
    pub fn lifecycle(
        component: &'static str,
        callback: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ComponentError::Lifecycle {
            component,
            callback,
            reason: reason.into(),
        }
    }
}
