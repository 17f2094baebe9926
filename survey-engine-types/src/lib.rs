//! Core types for the survey-engine crate.
//!
//! This crate provides the foundational types for describing a survey layout:
//! - `Survey` and `SurveyDefinition` - The top-level survey structure
//! - `SurveyItem`, `SurveyGroupItem` and `SurveySingleItem` - The item tree
//! - `PageSizeConfig` and `PageSizeClass` - Per-viewport page size limits
//! - `Page` - A bounded run of answerable items
//! - `SurveyError` - Definition and query errors

mod item_key;
pub use item_key::ItemKey;

mod item;
pub use item::{ItemType, SurveyGroupItem, SurveyItem, SurveySingleItem};

mod survey_definition;
pub use survey_definition::{Survey, SurveyDefinition};

mod page_size;
pub use page_size::{PageSizeClass, PageSizeConfig};

mod page;
pub use page::Page;

mod error;
pub use error::{DependencyError, SurveyError};
