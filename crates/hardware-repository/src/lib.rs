//! # Hardware Repository
//!
//! SQLite data access for the Hardware Store API.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (domain interface)
//! SqliteUserRepository           (SQLx implementation)
//!   ↓  Arc<DatabasePool>
//! SQLite
//! ```
//!
//! Inserts run inside a transaction; an uncommitted transaction is rolled
//! back when dropped, so a failed insert leaves nothing behind.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
