//! # pgtable
//!
//! A loosely-typed, single-statement table accessor for PostgreSQL.
//!
//! Given a table name and loosely-typed parameters, `pgtable` performs
//! parametrized point lookup, filtered/paginated list, partial or full-row
//! update, single-row delete, and insert — one statement, one table, one
//! uniform `Result`. It is not an ORM: no migrations, no joins, no
//! transactions spanning calls, no caching.
//!
//! ## Design
//!
//! - **Identifiers vs. values**: dynamic table/column names reach statement
//!   text only through [`Ident`] (quoted); caller-supplied values travel
//!   only as `$n` parameters ([`Value`]). The two paths never mix. LIMIT and
//!   OFFSET counts are `i64` by construction and are written inline.
//! - **Ordered input bags**: [`InputData`] is an explicit ordered list of
//!   `(column, value)` pairs, so INSERT column/value pairing is structural.
//! - **Tagged errors**: every operation returns
//!   `Result<_, `[`AccessError`]`>` with SQLSTATE-classified categories;
//!   faults are logged once via `tracing` and never panic.
//! - **Decoding at the boundary**: results are generic over [`FromRow`];
//!   [`Record`] is the loosely-typed fallback.
//!
//! ## Example
//!
//! ```ignore
//! use pgtable::{InputData, ListOptions, Order, Record, TableClient};
//!
//! let client = TableClient::connect("postgres://localhost/app")?;
//!
//! let user: Record = client
//!     .insert_row("users", &InputData::new().set("email", "a@b.c"))
//!     .await?;
//!
//! let recent: Vec<Record> = client
//!     .fetch_all("users", &ListOptions::new().order(Order::Desc).limit(10))
//!     .await?;
//! ```

pub mod client;
pub mod error;
pub mod ident;
pub mod options;
pub mod pool;
pub mod row;
pub mod stmt;
pub mod value;

pub use client::{ClientConfig, TableClient};
pub use error::{AccessError, AccessResult};
pub use ident::Ident;
pub use options::{ListOptions, Order, Page, PageOptions};
pub use pool::{create_pool, create_pool_with_tls};
pub use row::{FromRow, Record, RowExt};
pub use value::{InputData, Value};
