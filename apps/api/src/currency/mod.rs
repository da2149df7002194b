// Currency display for job listings.
// Location text is resolved to a display symbol on every call; nothing is cached.

pub mod handlers;
pub mod regions;
pub mod resolver;
pub mod salary;

pub use resolver::{resolve_currency_symbol, CurrencyIcon, CurrencySymbol};
pub use salary::format_salary_range;
