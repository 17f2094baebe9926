use crate::{ItemKey, SurveySingleItem};

/// One page of answerable items, borrowed from the survey definition.
///
/// Pages are never empty and never contain page break markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    items: Vec<&'a SurveySingleItem>,
}

impl<'a> Page<'a> {
    /// Build a page, or `None` if there is nothing to show.
    pub fn new(items: Vec<&'a SurveySingleItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    pub fn items(&self) -> &[&'a SurveySingleItem] {
        &self.items
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a ItemKey> + '_ {
        self.items.iter().copied().map(|item| &item.key)
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.keys().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for Page<'a> {
    type Item = &'a SurveySingleItem;
    type IntoIter = std::vec::IntoIter<&'a SurveySingleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_is_never_built() {
        assert!(Page::new(Vec::new()).is_none());
    }

    #[test]
    fn keys_in_order() {
        let a = SurveySingleItem::new("root.1", 1);
        let b = SurveySingleItem::new("root.2", 1);
        let page = Page::new(vec![&a, &b]).unwrap();

        let keys: Vec<_> = page.keys().map(ItemKey::as_str).collect();
        assert_eq!(keys, vec!["root.1", "root.2"]);
        assert_eq!(page.len(), 2);
        assert!(page.contains(&"root.2".into()));
        assert!(!page.contains(&"root.3".into()));
    }
}
