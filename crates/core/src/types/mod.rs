//! Validated value types shared by the site's flows.
//!
//! Each type parses untrusted form or payload input once, so the rest of the
//! code can rely on its invariants.

pub mod email;
pub mod id;
pub mod phone;
pub mod price;
pub mod zip;

pub use email::{Email, EmailError};
pub use id::{ServiceId, ServiceIdError};
pub use phone::{PhoneError, PhoneNumber};
pub use price::{MonthlyPrice, PriceError, format_dollars};
pub use zip::{ZipCode, ZipCodeError};
