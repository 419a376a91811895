pub mod catalog_service;
pub mod purchase_service;
pub mod report_service;
pub mod stock_service;

pub use catalog_service::CatalogService;
pub use purchase_service::PurchaseService;
pub use report_service::{ReportService, TOP_CARS_PER_MONTH, YEARLY_LEADERBOARD_SIZE};
pub use stock_service::StockService;
