pub mod money;
pub mod payment;

pub use money::{Money, TaxRate};
pub use payment::{PaymentStatusLabel, PaymentStatusTable, TerminalStatuses};
