use chrono::NaiveDate;

use super::model::OrderRecord;

pub const CSV_HEADER: [&str; 6] =
    ["Order ID", "Name", "Project", "Address", "Date", "Status"];

/// Render records as comma-joined lines under [`CSV_HEADER`].
///
/// Fields are written verbatim. Values containing commas, quotes or line
/// breaks are not escaped and will shift columns for CSV readers.
pub fn export<'a>(
    records: impl IntoIterator<Item = &'a OrderRecord>,
) -> String {
    let mut lines = vec![CSV_HEADER.join(",")];
    lines.extend(records.into_iter().map(|record| {
        [
            record.id.as_str(),
            record.name.as_str(),
            record.project.as_str(),
            record.address.as_str(),
            record.date.as_str(),
            record.status.label(),
        ]
        .join(",")
    }));
    lines.join("\n")
}

/// Download name for an export made on `date`, e.g. `orders-2026-10-18.csv`.
pub fn file_name(date: NaiveDate) -> String {
    format!("orders-{}.csv", date.format("%Y-%m-%d"))
}
