//! # survey-engine
//!
//! Computes how a survey item tree is presented: the ordered list of items
//! that need a response, and how that list is cut into pages for a given
//! viewport class.
//!
//! ## Usage
//!
//! ```rust
//! use survey_engine::{
//!     PageSizeClass, PageSizeConfig, Survey, SurveyEngineCore, SurveyGroupItem, SurveySingleItem,
//! };
//!
//! let root = SurveyGroupItem::new("root", 0, vec![])
//!     .with_item(SurveySingleItem::new("root.1", 1))
//!     .with_item(SurveySingleItem::new("root.2", 1))
//!     .with_item(SurveySingleItem::page_break("root.3", 1))
//!     .with_item(SurveySingleItem::new("root.4", 1));
//! let survey = Survey::new(root).with_max_items_per_page(PageSizeConfig::new(4, 1)?);
//!
//! let engine = SurveyEngineCore::new(survey);
//! assert_eq!(engine.survey_pages()?.len(), 2);
//! assert_eq!(engine.survey_pages_for(&PageSizeClass::small())?.len(), 3);
//! assert_eq!(engine.responses()?.len(), 3);
//! # Ok::<(), survey_engine::SurveyError>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`flatten`] orders every item of the tree so that each item comes after
//!   the items it `follows`.
//! - [`segment`] cuts that order at page breaks and drops the markers.
//! - [`paginate`] chunks each segment into pages of at most `M` items.
//! - [`SurveyEngineCore`] ties them together and answers queries.

// Re-export all types from survey-engine-types
pub use survey_engine_types::*;

pub mod flatten;
pub mod paginate;
pub mod segment;

mod engine;
pub use engine::SurveyEngineCore;
