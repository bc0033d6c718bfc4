//! Project resource models

use serde::{Deserialize, Serialize};

/// A project visible to the authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier
    pub project_id: String,

    /// Human-readable name; may be empty for legacy projects
    #[serde(default)]
    pub display_name: String,
}

impl Project {
    /// Label shown in selection prompts
    ///
    /// Falls back to the id when the backend returns no display name.
    pub fn display_label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.project_id
        } else {
            &self.display_name
        }
    }

    /// Text the fuzzy matcher runs against: id and display name combined,
    /// so either is searchable
    pub fn search_key(&self) -> String {
        format!("{} {}", self.project_id, self.display_name)
    }
}

/// Request body for project creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub project_id: String,
    pub display_name: String,
    /// Suppresses server-side confirmation emails and onboarding hooks
    pub non_interactive: bool,
}

/// Response from the project list endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListResponse {
    #[serde(default)]
    pub results: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_prefers_display_name() {
        let project = Project {
            project_id: "p1".to_string(),
            display_name: "P One".to_string(),
        };
        assert_eq!(project.display_label(), "P One");
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let project = Project {
            project_id: "legacy-project".to_string(),
            display_name: String::new(),
        };
        assert_eq!(project.display_label(), "legacy-project");
    }

    #[test]
    fn test_search_key_contains_both_fields() {
        let project = Project {
            project_id: "p1".to_string(),
            display_name: "P One".to_string(),
        };
        assert_eq!(project.search_key(), "p1 P One");
    }

    #[test]
    fn test_project_list_deserialization() {
        let json = r#"{
            "results": [
                {"projectId": "p1", "displayName": "P One"},
                {"projectId": "p2"}
            ]
        }"#;

        let response: ProjectListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].project_id, "p1");
        assert_eq!(response.results[1].display_name, "");
    }
}
