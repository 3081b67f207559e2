use serde::{Deserialize, Serialize};
use sheetnest::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::RunConfig;

/// Everything needed to reproduce a run: the instance, the solution and the configuration used.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NestRunOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: RunConfig,
}
