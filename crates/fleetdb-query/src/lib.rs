//! # fleetdb-query
//!
//! Injection-safe fluent command builder for the fleetdb agent store.
//!
//! fleetdb keeps one database per enrolled endpoint ("agent" scope) plus a
//! fleet-wide database ("global" scope), and accepts single-line textual
//! commands from its dispatcher. This crate assembles those commands; it
//! never parses or executes them.
//!
//! ## Features
//!
//! - **Fixed fragments**: every operation appends a constant template with
//!   at most two validated slots, so caller input can never widen the
//!   grammar
//! - **Whitelist validation**: agent ids must be all digits; free text must
//!   stay inside ASCII alphanumerics plus `-`, `_` and space
//! - **Fail-fast**: the first invalid argument aborts the chain with a
//!   typed error before anything reaches the buffer
//! - **Ownership-transferring chain**: operations consume and return the
//!   builder, so a command is assembled by exactly one owner and extracted
//!   once
//!
//! ## Example
//!
//! ```ignore
//! use fleetdb_query::qb;
//!
//! // Per-endpoint inventory query
//! let command = qb::agent("0")?
//!     .select_all()
//!     .from_table("sys_programs")?
//!     .where_column("name")?
//!     .equals_to("bash")?
//!     .build();
//! // "agent 0 sql SELECT * FROM sys_programs WHERE name = 'bash' "
//!
//! // Named fleet-wide command
//! let command = qb::QueryBuilder::builder().global_get_command("agent-info 1")?.build();
//! // "global get-agent-info 1 "
//! ```

pub mod builder;
pub mod error;
pub mod qb;
pub mod validate;

pub use builder::Builder;
pub use error::{QueryError, QueryResult};
pub use qb::{ALLOWED_EXTRA_CHARS, QueryBuilder, agent, global};
pub use validate::{is_allowed_text, is_number};
