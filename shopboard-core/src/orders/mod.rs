//! Order list engine: filter, sort, paginate, add, select and export.

pub mod book;
pub mod csv;
pub mod errors;
pub mod filter;
pub mod model;
pub mod page;

pub use book::{NewOrder, OrderBook, OrderIdSequence, Selection};
pub use errors::{OrderField, ValidationErrors};
pub use filter::{
    DateRange, FilterState, SortConfig, SortDirection, SortKey, apply,
    next_sort,
};
pub use model::{OrderRecord, OrderStatus, Priority};
pub use page::{
    DEFAULT_PAGE_SIZE, VISIBLE_PAGE_WINDOW, page_count, paginate,
    visible_pages,
};
