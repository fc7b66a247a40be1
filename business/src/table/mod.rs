//! People table: rows, live filter and sort.

pub mod filter;
mod row;
pub mod sort;
mod state;

pub use filter::SearchBox;
pub use row::{Row, RowTrigger, TableSeed};
pub use sort::SortKey;
pub use state::PeopleTableState;
