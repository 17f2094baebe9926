use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::SurveyError;

/// A named viewport class, e.g. `"large"` or `"small"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSizeClass(String);

impl PageSizeClass {
    pub const LARGE: &'static str = "large";
    pub const SMALL: &'static str = "small";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The primary class, used when a caller does not name one.
    pub fn large() -> Self {
        Self::new(Self::LARGE)
    }

    pub fn small() -> Self {
        Self::new(Self::SMALL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PageSizeClass {
    fn default() -> Self {
        Self::large()
    }
}

impl fmt::Display for PageSizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageSizeClass {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PageSizeClass {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Maximum number of items per page for each viewport class.
///
/// Serialized as a plain map, e.g. `{ "large": 4, "small": 2 }`. Limits are
/// always at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSizeConfig {
    limits: BTreeMap<PageSizeClass, NonZeroUsize>,
}

impl PageSizeConfig {
    /// Create the usual two-class configuration.
    pub fn new(large: usize, small: usize) -> Result<Self, SurveyError> {
        Self::empty()
            .with_class(PageSizeClass::large(), large)?
            .with_class(PageSizeClass::small(), small)
    }

    /// Create a configuration with no classes at all.
    pub fn empty() -> Self {
        Self {
            limits: BTreeMap::new(),
        }
    }

    /// Add or replace the limit for a class.
    pub fn with_class(
        mut self,
        class: impl Into<PageSizeClass>,
        max_items: usize,
    ) -> Result<Self, SurveyError> {
        let class = class.into();
        let Some(max_items) = NonZeroUsize::new(max_items) else {
            return Err(SurveyError::InvalidPageSize {
                class,
                size: max_items,
            });
        };
        self.limits.insert(class, max_items);
        Ok(self)
    }

    /// Look up the limit for a class.
    pub fn max_items(&self, class: &PageSizeClass) -> Result<NonZeroUsize, SurveyError> {
        self.limits
            .get(class)
            .copied()
            .ok_or_else(|| SurveyError::UnknownPageSizeClass(class.clone()))
    }

    /// Iterate over the configured classes in name order.
    pub fn classes(&self) -> impl Iterator<Item = &PageSizeClass> {
        self.limits.keys()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_is_the_default_class() {
        assert_eq!(PageSizeClass::default().as_str(), "large");
    }

    #[test]
    fn two_class_config() {
        let config = PageSizeConfig::new(4, 2).unwrap();
        assert_eq!(config.max_items(&PageSizeClass::large()).unwrap().get(), 4);
        assert_eq!(config.max_items(&PageSizeClass::small()).unwrap().get(), 2);
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn extra_classes() {
        let config = PageSizeConfig::new(4, 2)
            .unwrap()
            .with_class("kiosk", 10)
            .unwrap();
        let names: Vec<_> = config.classes().map(PageSizeClass::as_str).collect();
        assert_eq!(names, vec!["kiosk", "large", "small"]);
        assert_eq!(config.max_items(&"kiosk".into()).unwrap().get(), 10);
    }

    #[test]
    fn unknown_class() {
        let config = PageSizeConfig::new(4, 2).unwrap();
        let err = config.max_items(&"tablet".into()).unwrap_err();
        assert_eq!(err, SurveyError::UnknownPageSizeClass("tablet".into()));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = PageSizeConfig::new(0, 2).unwrap_err();
        assert_eq!(
            err,
            SurveyError::InvalidPageSize {
                class: PageSizeClass::large(),
                size: 0
            }
        );
    }

    #[test]
    fn serializes_as_map() {
        let config = PageSizeConfig::new(41, 22).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "large": 41, "small": 22 }));
    }
}
