//! Property tests for page layout

use proptest::prelude::*;
use survey_engine::{
    PageSizeClass, PageSizeConfig, Survey, SurveyEngineCore, SurveyGroupItem, SurveySingleItem,
};

/// Builds a flat survey; `true` entries are page breaks.
fn survey_from_layout(layout: &[bool], large: usize, small: usize) -> SurveyEngineCore {
    let items = layout
        .iter()
        .enumerate()
        .map(|(i, &is_break)| {
            let key = format!("root.{i}");
            if is_break {
                SurveySingleItem::page_break(key, 1).into()
            } else {
                SurveySingleItem::new(key, 1).into()
            }
        })
        .collect();
    let config = PageSizeConfig::new(large, small).expect("sizes are non-zero");
    SurveyEngineCore::new(
        Survey::new(SurveyGroupItem::new("root", 0, items)).with_max_items_per_page(config),
    )
}

proptest! {
    #[test]
    fn page_count_is_ceiling_without_breaks(n in 0usize..60, m in 1usize..15) {
        let engine = survey_from_layout(&vec![false; n], m, m);
        let pages = engine.survey_pages().unwrap();

        prop_assert_eq!(pages.len(), n.div_ceil(m));
        if let Some((last, full)) = pages.split_last() {
            prop_assert!(full.iter().all(|page| page.len() == m));
            let expected_last = if n % m == 0 { m } else { n % m };
            prop_assert_eq!(last.len(), expected_last);
        }
    }

    #[test]
    fn responses_match_pages_for_every_class(
        layout in prop::collection::vec(any::<bool>(), 0..60),
        large in 1usize..10,
        small in 1usize..10,
    ) {
        let engine = survey_from_layout(&layout, large, small);
        let responses = engine.responses().unwrap();
        let answerable = layout.iter().filter(|&&is_break| !is_break).count();

        prop_assert_eq!(responses.len(), answerable);
        prop_assert!(responses.iter().all(|item| !item.is_page_break()));

        for class in [PageSizeClass::large(), PageSizeClass::small()] {
            let pages = engine.survey_pages_for(&class).unwrap();
            prop_assert!(pages.iter().all(|page| !page.is_empty()));
            let concatenated: Vec<_> = pages.into_iter().flatten().collect();
            prop_assert_eq!(&concatenated, &responses);
        }
    }

    #[test]
    fn only_page_breaks_make_nothing(n in 0usize..30) {
        let engine = survey_from_layout(&vec![true; n], 3, 1);
        prop_assert!(engine.survey_pages().unwrap().is_empty());
        prop_assert!(engine.responses().unwrap().is_empty());
    }
}
