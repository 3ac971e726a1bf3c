use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Fields of the add-order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    Name,
    Project,
    Address,
    Amount,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderField::Name => "name",
            OrderField::Project => "project",
            OrderField::Address => "address",
            OrderField::Amount => "amount",
        };
        f.write_str(label)
    }
}

/// Inline field errors that block an order submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("order has {} invalid field(s)", .fields.len())]
pub struct ValidationErrors {
    fields: BTreeMap<OrderField, String>,
}

impl ValidationErrors {
    pub(crate) fn insert(&mut self, field: OrderField, message: &str) {
        self.fields.insert(field, message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderField, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
