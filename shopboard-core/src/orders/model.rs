use std::fmt;

use serde::{Deserialize, Serialize};

/// Order lifecycle status, serialized with its display label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::InProgress,
        OrderStatus::Complete,
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] =
        [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub name: String,
    pub project: String,
    pub address: String,
    pub date: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::{OrderRecord, OrderStatus};

    #[test]
    fn given_fixture_row_when_deserializing_then_status_label_and_optionals_map()
     {
        let raw = r##"{
            "id": "#CM9801",
            "name": "Natali Craig",
            "project": "Landing Page",
            "address": "Meadow Lane Oakland",
            "date": "Just now",
            "status": "In Progress",
            "avatar": "natali-craig",
            "alt": "Natali Craig"
        }"##;

        let record: OrderRecord =
            serde_json::from_str(raw).expect("row should parse");
        assert_eq!(record.status, OrderStatus::InProgress);
        assert_eq!(record.priority, None);
        assert_eq!(record.amount, None);
    }

    #[test]
    fn given_status_when_serializing_then_display_label_is_used() {
        let json = serde_json::to_string(&OrderStatus::InProgress)
            .expect("status should serialize");
        assert_eq!(json, "\"In Progress\"");
        assert_eq!(OrderStatus::Rejected.to_string(), "Rejected");
    }
}
