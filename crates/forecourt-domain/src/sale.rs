//! Sale ledger entries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable};
use crate::month::Month;

/// One purchase event in the append-only sales ledger. The month and year
/// are stamped at insertion time and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    pub id: Uuid,
    pub car_name: String,
    pub quantity: u32,
    pub month: Month,
    pub year: i32,
}

impl SaleRecord {
    pub fn new(car_name: impl Into<String>, quantity: u32, recorded_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            car_name: car_name.into(),
            quantity,
            month: Month::from_date(recorded_on),
            year: recorded_on.year(),
        }
    }
}

impl Identifiable for SaleRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for SaleRecord {
    fn display_label(&self) -> String {
        format!(
            "sale:{} {}x {} ({} {})",
            self.id, self.quantity, self.car_name, self.month, self.year
        )
    }
}
