use std::collections::BTreeMap;

use serde::Deserialize;

/// A background workflow. Parsed and exposed, not generated.
#[derive(Debug, Clone, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub description: Option<String>,
    /// manual, schedule, webhook or database
    pub trigger: Option<String>,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    /// Cron expression for scheduled workflows
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowStep {
    pub name: String,
    pub action: String,
    #[serde(default)]
    pub config: BTreeMap<String, serde_json::Value>,
}
