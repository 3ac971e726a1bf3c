use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::model::{OrderRecord, OrderStatus};

/// Date bounds carried by the filter panel. Not applied yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// Search text plus the status inclusion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub status: BTreeSet<OrderStatus>,
    pub date_range: DateRange,
    pub project_type: BTreeSet<String>,
}

impl FilterState {
    pub fn toggle_status(&mut self, status: OrderStatus) {
        if !self.status.remove(&status) {
            self.status.insert(status);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.status.is_empty()
    }

    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.matches_search(record) && self.matches_status(record)
    }

    fn matches_search(&self, record: &OrderRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        [&record.name, &record.project, &record.id, &record.address]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_status(&self, record: &OrderRecord) -> bool {
        self.status.is_empty() || self.status.contains(&record.status)
    }
}

/// Sortable order columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Project,
    Address,
    Date,
    Status,
    Priority,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// Advance a column header click: unsorted, ascending, descending, unsorted.
///
/// Clicking a different column always starts over at ascending.
pub fn next_sort(
    current: Option<SortConfig>,
    key: SortKey,
) -> Option<SortConfig> {
    match current {
        Some(config) if config.key == key => match config.direction {
            SortDirection::Asc => Some(SortConfig::desc(key)),
            SortDirection::Desc => None,
        },
        _ => Some(SortConfig::asc(key)),
    }
}

fn compare(a: &OrderRecord, b: &OrderRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Project => a.project.cmp(&b.project),
        SortKey::Address => a.address.cmp(&b.address),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Status => a.status.label().cmp(b.status.label()),
        SortKey::Priority => {
            let a = a.priority.map(|p| p.label());
            let b = b.priority.map(|p| p.label());
            a.cmp(&b)
        },
        SortKey::Amount => match (a.amount, b.amount) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Filter then stable-sort records into display order.
///
/// Records without a value for an optional sort key order before records
/// that have one.
pub fn apply<'a>(
    records: &'a [OrderRecord],
    filters: &FilterState,
    sort: Option<SortConfig>,
) -> Vec<&'a OrderRecord> {
    let mut rows: Vec<&OrderRecord> =
        records.iter().filter(|record| filters.matches(record)).collect();

    if let Some(config) = sort {
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, config.key);
            match config.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    rows
}
