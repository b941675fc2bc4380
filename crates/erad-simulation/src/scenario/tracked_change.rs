//! Scenario-tagged property edits for an external power system model.

use chrono::{DateTime, Utc};
use erad_core::constants::IN_SERVICE_PROPERTY;
use erad_core::types::ComponentId;
use serde::{Deserialize, Serialize};

/// One property assignment on one backing component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEdit {
    pub component_id: ComponentId,
    pub name: String,
    pub value: bool,
}

impl PropertyEdit {
    /// `in_service = false` on `component_id`.
    pub fn out_of_service(component_id: ComponentId) -> Self {
        Self {
            component_id,
            name: IN_SERVICE_PROPERTY.to_string(),
            value: false,
        }
    }
}

/// Edits applied together to one scenario at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedChange {
    pub scenario_name: String,
    pub timestamp: DateTime<Utc>,
    pub edits: Vec<PropertyEdit>,
}

impl TrackedChange {
    pub fn new(
        scenario_name: impl Into<String>,
        timestamp: DateTime<Utc>,
        edits: Vec<PropertyEdit>,
    ) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            timestamp,
            edits,
        }
    }

    /// Components this change takes out of service.
    pub fn outaged_components(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.edits
            .iter()
            .filter(|e| e.name == IN_SERVICE_PROPERTY && !e.value)
            .map(|e| e.component_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_service_edit() {
        let id = ComponentId::random();
        let change = TrackedChange::new("sample_0", Utc::now(), vec![PropertyEdit::out_of_service(id)]);
        assert_eq!(change.outaged_components().collect::<Vec<_>>(), vec![id]);
        assert_eq!(change.edits[0].name, "in_service");
        assert!(!change.edits[0].value);
    }
}
