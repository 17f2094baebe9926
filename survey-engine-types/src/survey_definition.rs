use serde::{Deserialize, Serialize};

use crate::{PageSizeConfig, SurveyError, SurveyGroupItem, SurveyItem};

/// One revision of a survey: the root group holding the full item tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDefinition {
    pub survey_definition: SurveyGroupItem,
}

impl SurveyDefinition {
    /// Create a definition from its root group.
    pub fn new(root: SurveyGroupItem) -> Self {
        Self {
            survey_definition: root,
        }
    }

    /// Get the root group.
    pub fn root(&self) -> &SurveyGroupItem {
        &self.survey_definition
    }

    /// Get the root's direct children.
    pub fn items(&self) -> &[SurveyItem] {
        self.survey_definition.items()
    }
}

/// A survey as handed to the engine: the current definition plus optional
/// per-viewport page size limits.
///
/// Without `max_items_per_page` every segment between page breaks becomes a
/// single page, whatever viewport class is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub current: SurveyDefinition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items_per_page: Option<PageSizeConfig>,
}

impl Survey {
    /// Create a survey with no page size limits.
    pub fn new(root: SurveyGroupItem) -> Self {
        Self {
            current: SurveyDefinition::new(root),
            max_items_per_page: None,
        }
    }

    /// Set the page size limits.
    pub fn with_max_items_per_page(mut self, config: PageSizeConfig) -> Self {
        self.max_items_per_page = Some(config);
        self
    }

    /// Get the root group of the current definition.
    pub fn root(&self) -> &SurveyGroupItem {
        self.current.root()
    }

    /// Get the page size limits, if any.
    pub fn page_size_config(&self) -> Option<&PageSizeConfig> {
        self.max_items_per_page.as_ref()
    }

    /// Parse a survey from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, SurveyError> {
        serde_json::from_str(json).map_err(SurveyError::serialization)
    }

    /// Render the survey as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SurveyError> {
        serde_json::to_string_pretty(self).map_err(SurveyError::serialization)
    }
}
