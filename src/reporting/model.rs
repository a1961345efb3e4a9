use serde::Serialize;

use crate::core::orchestrator::Module;

/// One heuristic positive signal recorded during a run. Not a verified
/// vulnerability: every finding needs manual confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub module: String,
    pub target: String,
    pub payload: String,
    pub message: String,
}

impl Finding {
    pub fn new(module: Module, target: &str, payload: &str, message: &str) -> Self {
        Self {
            module: module.tag().to_string(),
            target: target.to_string(),
            payload: payload.to_string(),
            message: message.to_string(),
        }
    }
}
