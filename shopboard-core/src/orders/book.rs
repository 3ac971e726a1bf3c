use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::errors::{OrderField, ValidationErrors};
use super::filter::{FilterState, SortConfig, apply};
use super::model::{OrderRecord, OrderStatus, Priority};

pub const ORDER_ID_PREFIX: &str = "#CM98";
const NEW_ORDER_AVATAR: &str = "default-avatar";
const NEW_ORDER_DATE_FORMAT: &str = "%b %-d, %Y";

/// Format a sequence number as an order id, zero-padded to two digits.
pub fn format_order_id(sequence: u32) -> String {
    format!("{ORDER_ID_PREFIX}{sequence:02}")
}

/// Sequence number of an id in the `#CM98<NN>` family.
pub fn parse_order_sequence(id: &str) -> Option<u32> {
    id.strip_prefix(ORDER_ID_PREFIX)?.parse().ok()
}

/// Monotonic generator for new order ids.
///
/// Seeded past both the record count and the highest existing sequence, so
/// generated ids never reuse one already handed out.
#[derive(Debug, Clone)]
pub struct OrderIdSequence {
    next: u32,
}

impl OrderIdSequence {
    pub fn seeded(records: &[OrderRecord]) -> Self {
        let by_len = u32::try_from(records.len()).unwrap_or(u32::MAX);
        let by_id = records
            .iter()
            .filter_map(|record| parse_order_sequence(&record.id))
            .max()
            .unwrap_or(0);

        Self {
            next: by_len.max(by_id).saturating_add(1),
        }
    }

    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Hand out the next id for which `taken` is false.
    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = format_order_id(self.next);
            self.next = self.next.saturating_add(1);
            if !taken(&id) {
                return id;
            }
            log::warn!("order id {id} already present, skipping");
        }
    }
}

/// Raw add-order form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrder {
    pub name: String,
    pub project: String,
    pub address: String,
    pub amount: String,
    pub priority: Priority,
}

impl NewOrder {
    /// Check required fields and the amount.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }

    fn parse(&self) -> Result<f64, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(OrderField::Name, "Name is required");
        }
        if self.project.trim().is_empty() {
            errors.insert(OrderField::Project, "Project is required");
        }
        if self.address.trim().is_empty() {
            errors.insert(OrderField::Address, "Address is required");
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0);
        if amount.is_none() {
            errors.insert(OrderField::Amount, "Amount must be greater than 0");
        }

        match amount {
            Some(amount) if errors.is_empty() => Ok(amount),
            _ => Err(errors),
        }
    }
}

/// Set of selected order ids.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Flip one row and return whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn select_all<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a OrderRecord>,
    ) {
        self.ids = rows.into_iter().map(|row| row.id.clone()).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether every row of a non-empty list is selected.
    pub fn covers(&self, rows: &[&OrderRecord]) -> bool {
        !rows.is_empty() && rows.iter().all(|row| self.contains(&row.id))
    }

    /// Keep only the selected rows, in display order.
    pub fn narrow<'a>(
        &self,
        rows: &[&'a OrderRecord],
    ) -> Vec<&'a OrderRecord> {
        rows.iter()
            .copied()
            .filter(|row| self.contains(&row.id))
            .collect()
    }
}

/// In-memory order list with id generation and row selection.
#[derive(Debug, Clone)]
pub struct OrderBook {
    records: Vec<OrderRecord>,
    sequence: OrderIdSequence,
    selection: Selection,
}

impl OrderBook {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        let sequence = OrderIdSequence::seeded(&records);
        Self {
            records,
            sequence,
            selection: Selection::default(),
        }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&OrderRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Display list for the given filters and sort.
    pub fn view(
        &self,
        filters: &FilterState,
        sort: Option<SortConfig>,
    ) -> Vec<&OrderRecord> {
        apply(&self.records, filters, sort)
    }

    /// Rows to export: the selected part of the display list, or all of it
    /// when nothing is selected.
    pub fn export_rows(
        &self,
        filters: &FilterState,
        sort: Option<SortConfig>,
    ) -> Vec<&OrderRecord> {
        let rows = self.view(filters, sort);
        if self.selection.is_empty() {
            rows
        } else {
            self.selection.narrow(&rows)
        }
    }

    /// Validate and prepend a new pending order.
    pub fn add(
        &mut self,
        order: &NewOrder,
        today: NaiveDate,
    ) -> Result<&OrderRecord, ValidationErrors> {
        let amount = order.parse()?;
        let records = &self.records;
        let id = self
            .sequence
            .next_id(|candidate| records.iter().any(|r| r.id == candidate));

        let name = order.name.trim().to_string();
        let record = OrderRecord {
            id,
            alt: name.clone(),
            name,
            project: order.project.trim().to_string(),
            address: order.address.trim().to_string(),
            date: today.format(NEW_ORDER_DATE_FORMAT).to_string(),
            status: OrderStatus::Pending,
            avatar: NEW_ORDER_AVATAR.to_string(),
            priority: Some(order.priority),
            amount: Some(amount),
        };
        log::info!("order {} added for {}", record.id, record.name);

        self.records.insert(0, record);
        Ok(&self.records[0])
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        NewOrder, OrderBook, OrderIdSequence, format_order_id,
        parse_order_sequence,
    };
    use crate::orders::errors::OrderField;
    use crate::orders::filter::FilterState;
    use crate::orders::model::{OrderRecord, OrderStatus, Priority};

    fn record(id: &str) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            name: "Kate Morrison".into(),
            project: "CRM Admin pages".into(),
            address: "Larry San Francisco".into(),
            date: "A minute ago".into(),
            status: OrderStatus::Complete,
            avatar: String::new(),
            alt: String::new(),
            priority: None,
            amount: None,
        }
    }

    fn valid_order() -> NewOrder {
        NewOrder {
            name: "  Drew Cano ".into(),
            project: "Client Project".into(),
            address: "Bagwell Avenue Ocala".into(),
            amount: "129.50".into(),
            priority: Priority::High,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[test]
    fn given_sequence_numbers_when_formatting_then_ids_are_zero_padded() {
        assert_eq!(format_order_id(7), "#CM9807");
        assert_eq!(format_order_id(26), "#CM9826");
        assert_eq!(parse_order_sequence("#CM9826"), Some(26));
        assert_eq!(parse_order_sequence("ORD-1"), None);
    }

    #[test]
    fn given_sparse_ids_when_seeding_then_sequence_starts_past_highest() {
        let records = vec![record("#CM9840"), record("#CM9802")];
        assert_eq!(OrderIdSequence::seeded(&records).peek(), 41);
    }

    #[test]
    fn given_foreign_ids_when_seeding_then_sequence_starts_past_length() {
        let records = vec![record("A"), record("B"), record("C")];
        assert_eq!(OrderIdSequence::seeded(&records).peek(), 4);
    }

    #[test]
    fn given_taken_candidate_when_generating_then_it_is_skipped() {
        let mut sequence = OrderIdSequence::seeded(&[]);
        let id = sequence.next_id(|candidate| candidate == "#CM9801");
        assert_eq!(id, "#CM9802");
    }

    #[test]
    fn given_valid_form_when_added_then_record_is_prepended_as_pending() {
        let mut book = OrderBook::new(vec![record("#CM9801")]);
        let added = book.add(&valid_order(), today()).expect("valid order");

        assert_eq!(added.id, "#CM9802");
        assert_eq!(added.name, "Drew Cano");
        assert_eq!(added.status, OrderStatus::Pending);
        assert_eq!(added.date, "Oct 18, 2026");
        assert_eq!(added.amount, Some(129.5));
        assert_eq!(book.records()[0].id, "#CM9802");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn given_blank_form_when_added_then_every_field_error_is_reported() {
        let mut book = OrderBook::new(Vec::new());
        let errors = book
            .add(&NewOrder::default(), today())
            .expect_err("blank form must be rejected");

        for field in [
            OrderField::Name,
            OrderField::Project,
            OrderField::Address,
            OrderField::Amount,
        ] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
        assert!(book.is_empty());
    }

    #[test]
    fn given_non_positive_amount_when_validated_then_only_amount_fails() {
        for amount in ["0", "-3", "abc", "NaN", "inf"] {
            let order = NewOrder {
                amount: amount.into(),
                ..valid_order()
            };
            let errors = order.validate().expect_err("amount must be > 0");
            assert_eq!(
                errors.iter().map(|(field, _)| field).collect::<Vec<_>>(),
                [OrderField::Amount],
                "amount {amount}"
            );
        }
    }

    #[test]
    fn given_rejected_submission_when_retried_then_sequence_was_not_consumed() {
        let mut book = OrderBook::new(vec![record("#CM9801")]);
        let _ = book.add(&NewOrder::default(), today());
        let added = book.add(&valid_order(), today()).expect("valid order");
        assert_eq!(added.id, "#CM9802");
    }

    #[test]
    fn given_active_search_when_adding_non_matching_order_then_it_stays_hidden() {
        let mut book = OrderBook::new(vec![record("#CM9801")]);
        book.add(&valid_order(), today()).expect("valid order");

        let filters = FilterState {
            search: "kate".into(),
            ..FilterState::default()
        };
        let rows = book.view(&filters, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "#CM9801");
    }

    #[test]
    fn given_selection_when_exporting_then_only_selected_visible_rows_remain() {
        let mut book = OrderBook::new(vec![
            record("#CM9801"),
            record("#CM9802"),
            record("#CM9803"),
        ]);
        let filters = FilterState::default();
        assert_eq!(book.export_rows(&filters, None).len(), 3);

        book.selection_mut().toggle("#CM9803");
        book.selection_mut().toggle("#CM9801");
        let ids: Vec<&str> = book
            .export_rows(&filters, None)
            .iter()
            .map(|row| row.id.as_str())
            .collect();
        assert_eq!(ids, ["#CM9801", "#CM9803"]);
    }

    #[test]
    fn given_all_rows_selected_when_checking_cover_then_toggle_breaks_it() {
        let mut book =
            OrderBook::new(vec![record("#CM9801"), record("#CM9802")]);
        let filters = FilterState::default();
        let rows: Vec<OrderRecord> =
            book.view(&filters, None).into_iter().cloned().collect();

        book.selection_mut().select_all(rows.iter());
        let view = book.view(&filters, None);
        assert!(book.selection().covers(&view));

        book.selection_mut().toggle("#CM9802");
        let view = book.view(&filters, None);
        assert!(!book.selection().covers(&view));
        assert_eq!(book.selection().len(), 1);
    }
}
