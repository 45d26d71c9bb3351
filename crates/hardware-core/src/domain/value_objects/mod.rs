//! Value objects.

mod email;
mod order_status;
mod role;

pub use email::*;
pub use order_status::*;
pub use role::*;
