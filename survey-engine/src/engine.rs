use std::ops::Range;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::flatten::{declared_items, flatten_order};
use crate::paginate::{max_items_for, paginate_all};
use crate::segment::segment;
use crate::{ItemKey, Page, PageSizeClass, Survey, SurveyError, SurveySingleItem};

/// Flattened and segmented view of a survey, in declaration indices.
#[derive(Debug)]
struct Layout {
    /// Answerable items in dependency order, as indices into `declared_items`.
    responses: Vec<usize>,

    /// Page-break delimited ranges into `responses`.
    segments: Vec<Range<usize>>,
}

/// Answers page and response queries for one survey.
///
/// The flattened order and its segments are computed on first use and kept
/// for the lifetime of the engine, as indices into the item tree. Each query
/// resolves those indices with one walk over the tree and chunks the cached
/// segments for its class. The survey is never mutated, so a shared reference
/// can serve concurrent queries.
#[derive(Debug)]
pub struct SurveyEngineCore {
    survey: Survey,
    layout: OnceLock<Result<Layout, SurveyError>>,
}

impl SurveyEngineCore {
    pub fn new(survey: Survey) -> Self {
        Self {
            survey,
            layout: OnceLock::new(),
        }
    }

    /// Get the survey this engine was built from.
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Pages for the primary viewport class (`large`).
    pub fn survey_pages(&self) -> Result<Vec<Page<'_>>, SurveyError> {
        self.survey_pages_for(&PageSizeClass::default())
    }

    /// Pages for the given viewport class.
    ///
    /// Each page-break delimited segment is chunked into pages of at most the
    /// class's configured size; pages of all segments are returned in order.
    pub fn survey_pages_for(&self, class: &PageSizeClass) -> Result<Vec<Page<'_>>, SurveyError> {
        let layout = self.layout()?;
        let max_items = max_items_for(self.survey.page_size_config(), class)?;
        let declared = declared_items(self.survey.root());

        let pages: Vec<Page<'_>> = paginate_all(&layout.segments, max_items)
            .into_iter()
            .filter_map(|range| {
                Page::new(
                    layout.responses[range]
                        .iter()
                        .map(|&idx| declared[idx])
                        .collect(),
                )
            })
            .collect();

        debug!(
            survey = %self.survey.root().key,
            class = %class,
            max_items = max_items.map(|m| m.get()),
            pages = pages.len(),
            "Paginated survey"
        );
        Ok(pages)
    }

    /// Number of pages for the given viewport class.
    pub fn page_count_for(&self, class: &PageSizeClass) -> Result<usize, SurveyError> {
        let layout = self.layout()?;
        let max_items = max_items_for(self.survey.page_size_config(), class)?;
        Ok(paginate_all(&layout.segments, max_items).len())
    }

    /// Index of the page showing `key` for the given viewport class.
    ///
    /// `None` for page breaks, groups and unknown keys.
    pub fn page_index_of(
        &self,
        key: &ItemKey,
        class: &PageSizeClass,
    ) -> Result<Option<usize>, SurveyError> {
        Ok(self
            .survey_pages_for(class)?
            .iter()
            .position(|page| page.contains(key)))
    }

    /// All answerable items in flattened order.
    ///
    /// Independent of viewport class: this is the concatenation of every
    /// page's items for any class.
    pub fn responses(&self) -> Result<Vec<&SurveySingleItem>, SurveyError> {
        let layout = self.layout()?;
        let declared = declared_items(self.survey.root());
        Ok(layout.responses.iter().map(|&idx| declared[idx]).collect())
    }

    fn layout(&self) -> Result<&Layout, SurveyError> {
        self.layout
            .get_or_init(|| self.compute_layout())
            .as_ref()
            .map_err(Clone::clone)
    }

    fn compute_layout(&self) -> Result<Layout, SurveyError> {
        let root = self.survey.root();
        let declared = declared_items(root);
        let order = flatten_order(root).inspect_err(|err| {
            warn!(survey = %root.key, error = %err, "Survey definition rejected");
        })?;

        let segments = segment(order, |&idx| declared[idx].is_page_break());
        debug!(
            survey = %root.key,
            version = root.version,
            items = declared.len(),
            responses = segments.responses.len(),
            segments = segments.len(),
            "Computed survey layout"
        );

        Ok(Layout {
            responses: segments.responses,
            segments: segments.ranges,
        })
    }
}
