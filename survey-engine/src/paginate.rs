//! Chunking segments into pages.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::{PageSizeClass, PageSizeConfig, SurveyError};

/// Resolve the page size limit for `class`.
///
/// Without any configuration there is no limit (`Ok(None)`), whatever the
/// class. With a configuration, an unlisted class is an error.
pub fn max_items_for(
    config: Option<&PageSizeConfig>,
    class: &PageSizeClass,
) -> Result<Option<NonZeroUsize>, SurveyError> {
    config.map(|config| config.max_items(class)).transpose()
}

/// Split one segment into consecutive pages of `max_items` items, the last
/// page holding the remainder. No balancing: 10 items at 4 per page gives
/// 4, 4, 2.
pub fn paginate(segment: Range<usize>, max_items: Option<NonZeroUsize>) -> Vec<Range<usize>> {
    if segment.is_empty() {
        return Vec::new();
    }
    let Some(max_items) = max_items else {
        return vec![segment];
    };

    segment
        .clone()
        .step_by(max_items.get())
        .map(|start| start..start.saturating_add(max_items.get()).min(segment.end))
        .collect()
}

/// Paginate every segment and concatenate the pages in segment order.
pub fn paginate_all(
    segments: &[Range<usize>],
    max_items: Option<NonZeroUsize>,
) -> Vec<Range<usize>> {
    segments
        .iter()
        .flat_map(|segment| paginate(segment.clone(), max_items))
        .collect()
}
