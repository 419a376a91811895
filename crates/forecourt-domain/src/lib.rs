//! forecourt-domain
//!
//! Pure domain models (Dealership, CarDetail, StockItem, SaleRecord, Month,
//! report shapes). No I/O, no CLI, no storage. Only data types and core enums.

pub mod car;
pub mod common;
pub mod dealership;
pub mod month;
pub mod price;
pub mod report;
pub mod sale;

pub use car::*;
pub use common::*;
pub use dealership::*;
pub use month::*;
pub use price::*;
pub use report::*;
pub use sale::*;
