use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ItemKey;

const PAGE_BREAK_TAG: &str = "pageBreak";

/// The structural role tag of an item.
///
/// Only `PageBreak` carries meaning for page layout. Any other tag is kept
/// verbatim so definitions round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    /// Forces a page boundary; never collected as a response.
    PageBreak,

    /// Any other tag, opaque to the engine.
    Other(String),
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PageBreak => PAGE_BREAK_TAG,
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ItemType {
    fn from(tag: String) -> Self {
        if tag == PAGE_BREAK_TAG {
            Self::PageBreak
        } else {
            Self::Other(tag)
        }
    }
}

impl From<&str> for ItemType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::PageBreak => PAGE_BREAK_TAG.to_string(),
            ItemType::Other(tag) => tag,
        }
    }
}

/// A leaf item: either something the respondent answers, or a structural
/// marker such as a page break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySingleItem {
    pub key: ItemKey,

    pub version: i64,

    /// Keys of items that must precede this one in the flattened order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follows: Vec<ItemKey>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
}

impl SurveySingleItem {
    /// Create a plain answerable item.
    pub fn new(key: impl Into<ItemKey>, version: i64) -> Self {
        Self {
            key: key.into(),
            version,
            follows: Vec::new(),
            item_type: None,
        }
    }

    /// Create a page break marker.
    pub fn page_break(key: impl Into<ItemKey>, version: i64) -> Self {
        Self::new(key, version).with_type(ItemType::PageBreak)
    }

    /// Set the predecessors this item follows.
    pub fn with_follows<I, K>(mut self, follows: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ItemKey>,
    {
        self.follows = follows.into_iter().map(Into::into).collect();
        self
    }

    /// Set the structural type tag.
    pub fn with_type(mut self, item_type: impl Into<ItemType>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    /// Check if this item is a page break marker.
    pub fn is_page_break(&self) -> bool {
        matches!(self.item_type, Some(ItemType::PageBreak))
    }

    /// Check if this item requires a response.
    pub fn is_answerable(&self) -> bool {
        !self.is_page_break()
    }
}

/// A group of items, flattened into the same linear sequence as its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyGroupItem {
    pub key: ItemKey,

    pub version: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follows: Vec<ItemKey>,

    /// Type tag of the group itself. Carried for round-tripping; a group is
    /// never a page break.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,

    /// Children in declared order.
    #[serde(default)]
    pub items: Vec<SurveyItem>,
}

impl SurveyGroupItem {
    /// Create a new group with the given children.
    pub fn new(key: impl Into<ItemKey>, version: i64, items: Vec<SurveyItem>) -> Self {
        Self {
            key: key.into(),
            version,
            follows: Vec::new(),
            item_type: None,
            items,
        }
    }

    /// Set the predecessors this group follows.
    pub fn with_follows<I, K>(mut self, follows: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ItemKey>,
    {
        self.follows = follows.into_iter().map(Into::into).collect();
        self
    }

    /// Append a child item.
    pub fn with_item(mut self, item: impl Into<SurveyItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Get the children.
    pub fn items(&self) -> &[SurveyItem] {
        &self.items
    }

    /// Check if the group has any children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A node of the survey item tree.
///
/// On the wire an item with an `items` array is a group; anything else is a
/// single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawItem", into = "RawItem")]
pub enum SurveyItem {
    Group(SurveyGroupItem),
    Single(SurveySingleItem),
}

impl SurveyItem {
    pub fn key(&self) -> &ItemKey {
        match self {
            Self::Group(group) => &group.key,
            Self::Single(single) => &single.key,
        }
    }

    pub fn version(&self) -> i64 {
        match self {
            Self::Group(group) => group.version,
            Self::Single(single) => single.version,
        }
    }

    pub fn follows(&self) -> &[ItemKey] {
        match self {
            Self::Group(group) => &group.follows,
            Self::Single(single) => &single.follows,
        }
    }

    /// Check if this is a page break marker. Groups never are.
    pub fn is_page_break(&self) -> bool {
        match self {
            Self::Group(_) => false,
            Self::Single(single) => single.is_page_break(),
        }
    }

    pub fn as_group(&self) -> Option<&SurveyGroupItem> {
        match self {
            Self::Group(group) => Some(group),
            Self::Single(_) => None,
        }
    }

    pub fn as_single(&self) -> Option<&SurveySingleItem> {
        match self {
            Self::Group(_) => None,
            Self::Single(single) => Some(single),
        }
    }
}

impl From<SurveySingleItem> for SurveyItem {
    fn from(item: SurveySingleItem) -> Self {
        Self::Single(item)
    }
}

impl From<SurveyGroupItem> for SurveyItem {
    fn from(group: SurveyGroupItem) -> Self {
        Self::Group(group)
    }
}

/// Wire shape shared by both item kinds.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    key: ItemKey,
    version: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    follows: Vec<ItemKey>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<SurveyItem>>,
}

impl From<RawItem> for SurveyItem {
    fn from(raw: RawItem) -> Self {
        match raw.items {
            Some(items) => Self::Group(SurveyGroupItem {
                key: raw.key,
                version: raw.version,
                follows: raw.follows,
                item_type: raw.item_type,
                items,
            }),
            None => Self::Single(SurveySingleItem {
                key: raw.key,
                version: raw.version,
                follows: raw.follows,
                item_type: raw.item_type,
            }),
        }
    }
}

impl From<SurveyItem> for RawItem {
    fn from(item: SurveyItem) -> Self {
        match item {
            SurveyItem::Group(group) => Self {
                key: group.key,
                version: group.version,
                follows: group.follows,
                item_type: group.item_type,
                items: Some(group.items),
            },
            SurveyItem::Single(single) => Self {
                key: single.key,
                version: single.version,
                follows: single.follows,
                item_type: single.item_type,
                items: None,
            },
        }
    }
}
