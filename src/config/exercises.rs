//! Exercise behaviour configuration

use serde::Deserialize;

use crate::domain::exercise::ExerciseOrderPolicy;

/// Exercise settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExercisesConfig {
    /// Order given to an added exercise when the request omits it:
    /// `first` (always 1) or `append` (after the session's last exercise)
    #[serde(default)]
    pub default_order: ExerciseOrderPolicy,
}
