use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::Record;
use crate::error::Result;

/// Literal prefix stripped from names before the numeric comparison.
pub const ITEM_PREFIX: &str = "Item ";

/// How a decoded list is turned into the display sequence.
///
/// Both policies drop records without a displayable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingPolicy {
    /// Sort by `(list_id, numeric name suffix)`, both ascending.
    #[default]
    FilterAndSort,

    /// Group by `list_id` in ascending order, keeping the received order
    /// inside each group. Names are not compared.
    GroupOnly,
}

impl OrderingPolicy {
    /// Apply the policy to a decoded list. Records are moved, never edited.
    pub fn apply(self, records: Vec<Record>) -> Vec<Record> {
        let displayable = records.into_iter().filter(is_displayable);

        match self {
            OrderingPolicy::FilterAndSort => {
                let mut sorted: Vec<Record> = displayable.collect();
                sorted.sort_by_key(|r| (r.list_id, name_sort_key(r.name())));
                sorted
            }
            OrderingPolicy::GroupOnly => {
                let mut groups: BTreeMap<i64, Vec<Record>> = BTreeMap::new();
                for record in displayable {
                    groups.entry(record.list_id).or_default().push(record);
                }
                groups.into_values().flatten().collect()
            }
        }
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingPolicy::FilterAndSort => write!(f, "filter-and-sort"),
            OrderingPolicy::GroupOnly => write!(f, "group-only"),
        }
    }
}

impl FromStr for OrderingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "filter-and-sort" => Ok(OrderingPolicy::FilterAndSort),
            "group-only" => Ok(OrderingPolicy::GroupOnly),
            other => Err(format!(
                "unknown ordering policy '{other}' (expected 'filter-and-sort' or 'group-only')"
            )),
        }
    }
}

/// Order a fetch outcome. A failure is passed through untouched.
pub fn order(outcome: Result<Vec<Record>>, policy: OrderingPolicy) -> Result<Vec<Record>> {
    outcome.map(|records| {
        let received = records.len();
        let ordered = policy.apply(records);
        tracing::debug!(%policy, received, kept = ordered.len(), "ordered item list");
        ordered
    })
}

/// A record is displayable when it has a name that is not blank.
pub fn is_displayable(record: &Record) -> bool {
    record.name().is_some_and(|name| !name.trim().is_empty())
}

/// Numeric secondary sort key of a name.
///
/// Strips [`ITEM_PREFIX`] when present and parses the rest as an integer, so
/// `"Item 29"` sorts before `"Item 280"`. Anything unparsable yields `0`.
///
/// # Examples
///
/// ```
/// use itemlist_fetch::core::name_sort_key;
///
/// assert_eq!(name_sort_key(Some("Item 280")), 280);
/// assert_eq!(name_sort_key(Some("42")), 42);
/// assert_eq!(name_sort_key(Some("Item abc")), 0);
/// assert_eq!(name_sort_key(None), 0);
/// ```
pub fn name_sort_key(name: Option<&str>) -> i32 {
    name.map(|n| n.strip_prefix(ITEM_PREFIX).unwrap_or(n))
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

/// Bucket records by `list_id`, groups in ascending order, received order
/// inside each group.
pub fn group_by_list_id(records: &[Record]) -> BTreeMap<i64, Vec<Record>> {
    let mut groups: BTreeMap<i64, Vec<Record>> = BTreeMap::new();
    for record in records {
        groups.entry(record.list_id).or_default().push(record.clone());
    }
    groups
}
