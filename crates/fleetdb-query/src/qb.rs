//! Fluent command builder for the fleetdb agent store.
//!
//! Commands are single-line, space-delimited strings addressed either to
//! the fleet-wide store (`global …`) or to one endpoint's store
//! (`agent <id> …`). Each operation appends one fixed fragment and
//! whitelists every caller-supplied slot before it touches the buffer, so
//! the finished command cannot carry characters outside the allowed set.
//!
//! # Usage
//!
//! ```ignore
//! use fleetdb_query::qb;
//!
//! let command = qb::agent("0")?
//!     .select_all()
//!     .from_table("sys_programs")?
//!     .where_column("name")?
//!     .equals_to("bash")?
//!     .build();
//! assert_eq!(command, "agent 0 sql SELECT * FROM sys_programs WHERE name = 'bash' ");
//! ```
//!
//! The builder is a textual accumulator: it does not check that clauses
//! arrive in a grammatically sensible order. Sequencing is the caller's
//! contract with the downstream query engine, which also owns transport
//! and execution.

use crate::builder::Builder;
use crate::error::{QueryError, QueryResult};
use crate::validate;

/// Extra characters permitted in free-text fragments besides ASCII
/// alphanumerics: hyphen, underscore, space.
pub const ALLOWED_EXTRA_CHARS: &str = "-_ ";

/// Start a fleet-wide query: the command opens with `global sql `.
///
/// # Example
/// ```ignore
/// let command = fleetdb_query::global().select_all().from_table("agent")?.build();
/// ```
pub fn global() -> QueryBuilder {
    QueryBuilder::builder().global()
}

/// Start a per-endpoint query: the command opens with `agent <id> sql `.
///
/// Fails with [`QueryError::InvalidAgentId`] unless `id` is all digits.
pub fn agent(id: &str) -> QueryResult<QueryBuilder> {
    QueryBuilder::builder().agent(id)
}

/// Fluent, injection-safe command builder.
///
/// Operations append fixed fragments to an owned buffer and hand the
/// builder back for further chaining. Fallible operations validate their
/// argument first and append nothing on failure, so an invalid input can
/// never reach the emitted command. [`QueryBuilder::build`] consumes the
/// builder and returns the accumulated text verbatim.
#[derive(Clone, Debug, Default)]
pub struct QueryBuilder {
    query: String,
}

impl Builder for QueryBuilder {}

impl QueryBuilder {
    // ==================== Scopes ====================

    /// Address the fleet-wide store: appends `global sql `.
    pub fn global(mut self) -> Self {
        self.query.push_str("global sql ");
        self
    }

    /// Address one endpoint's store: appends `agent <id> sql `.
    ///
    /// `id` must be all ASCII digits.
    pub fn agent(mut self, id: &str) -> QueryResult<Self> {
        let id = checked_id(id)?;
        self.query.push_str("agent ");
        self.query.push_str(id);
        self.query.push_str(" sql ");
        Ok(self)
    }

    // ==================== Query clauses ====================

    /// Appends `SELECT * `.
    pub fn select_all(mut self) -> Self {
        self.query.push_str("SELECT * ");
        self
    }

    /// Appends `SELECT <column> `.
    pub fn select_column(mut self, column: &str) -> QueryResult<Self> {
        let column = checked_text(column, QueryError::InvalidColumnName)?;
        self.query.push_str("SELECT ");
        self.query.push_str(column);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `FROM <table> `.
    pub fn from_table(mut self, table: &str) -> QueryResult<Self> {
        let table = checked_text(table, QueryError::InvalidTableName)?;
        self.query.push_str("FROM ");
        self.query.push_str(table);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `WHERE <column> `.
    pub fn where_column(mut self, column: &str) -> QueryResult<Self> {
        let column = checked_text(column, QueryError::InvalidColumnName)?;
        self.query.push_str("WHERE ");
        self.query.push_str(column);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `IS NULL `.
    pub fn is_null(mut self) -> Self {
        self.query.push_str("IS NULL ");
        self
    }

    /// Appends `IS NOT NULL `.
    pub fn is_not_null(mut self) -> Self {
        self.query.push_str("IS NOT NULL ");
        self
    }

    /// Appends `= '<value>' `.
    ///
    /// The single quotes around the slot are part of the fixed template;
    /// the value itself must stay inside the allowed character set, which
    /// excludes the quote character.
    pub fn equals_to(mut self, value: &str) -> QueryResult<Self> {
        let value = checked_text(value, QueryError::InvalidValue)?;
        self.query.push_str("= '");
        self.query.push_str(value);
        self.query.push_str("' ");
        Ok(self)
    }

    /// Appends `AND <column> `.
    pub fn and_column(mut self, column: &str) -> QueryResult<Self> {
        let column = checked_text(column, QueryError::InvalidColumnName)?;
        self.query.push_str("AND ");
        self.query.push_str(column);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `OR <column> `.
    pub fn or_column(mut self, column: &str) -> QueryResult<Self> {
        let column = checked_text(column, QueryError::InvalidColumnName)?;
        self.query.push_str("OR ");
        self.query.push_str(column);
        self.query.push(' ');
        Ok(self)
    }

    // ==================== Named commands ====================

    /// Appends `global get-<command> `.
    pub fn global_get_command(mut self, command: &str) -> QueryResult<Self> {
        let command = checked_text(command, QueryError::InvalidCommand)?;
        self.query.push_str("global get-");
        self.query.push_str(command);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `global find-<command> `.
    pub fn global_find_command(mut self, command: &str) -> QueryResult<Self> {
        let command = checked_text(command, QueryError::InvalidCommand)?;
        self.query.push_str("global find-");
        self.query.push_str(command);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `global select-<command> `.
    pub fn global_select_command(mut self, command: &str) -> QueryResult<Self> {
        let command = checked_text(command, QueryError::InvalidCommand)?;
        self.query.push_str("global select-");
        self.query.push_str(command);
        self.query.push(' ');
        Ok(self)
    }

    /// Appends `agent <id> osinfo get `.
    pub fn agent_get_os_info_command(mut self, id: &str) -> QueryResult<Self> {
        let id = checked_id(id)?;
        self.query.push_str("agent ");
        self.query.push_str(id);
        self.query.push_str(" osinfo get ");
        Ok(self)
    }

    /// Appends `agent <id> hotfix get `.
    pub fn agent_get_hotfixes_command(mut self, id: &str) -> QueryResult<Self> {
        let id = checked_id(id)?;
        self.query.push_str("agent ");
        self.query.push_str(id);
        self.query.push_str(" hotfix get ");
        Ok(self)
    }

    /// Appends `agent <id> package get `.
    pub fn agent_get_packages_command(mut self, id: &str) -> QueryResult<Self> {
        let id = checked_id(id)?;
        self.query.push_str("agent ");
        self.query.push_str(id);
        self.query.push_str(" package get ");
        Ok(self)
    }

    // ==================== Extraction ====================

    /// View the accumulated command without consuming the builder.
    pub fn as_command(&self) -> &str {
        &self.query
    }

    /// Consume the builder and return the finished command verbatim,
    /// trailing space included.
    ///
    /// No trimming, joining or reordering is performed: the output is the
    /// exact concatenation of the appended fragments in call order.
    pub fn build(self) -> String {
        #[cfg(feature = "tracing")]
        tracing::debug!(command = %self.query, "built fleetdb command");
        self.query
    }
}

fn checked_id(id: &str) -> QueryResult<&str> {
    if validate::is_number(id) {
        Ok(id)
    } else {
        Err(QueryError::InvalidAgentId(id.to_string()))
    }
}

fn checked_text(text: &str, reject: fn(String) -> QueryError) -> QueryResult<&str> {
    if validate::is_allowed_text(text, ALLOWED_EXTRA_CHARS) {
        Ok(text)
    } else {
        Err(reject(text.to_string()))
    }
}
