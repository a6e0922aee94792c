//! Statement assembly: wraps generated column clauses in the statement
//! templates the warehouse expects.
//!
//! Three templates exist:
//! - [`bronze_ddl`]: DROP/CREATE of the external landing table.
//! - [`silver_procedure`]: stored procedure rebuilding the typed,
//!   deduplicated silver table from bronze.
//! - [`prefixed_aliases`]: rewrites a bracketed column block with a table
//!   prefix for multi-source joins.
//!
//! Assembly is pure text generation; for identical inputs the output is
//! byte-identical.

mod aliases;
mod bronze;
mod silver;

pub use aliases::prefixed_aliases;
pub use bronze::bronze_ddl;
pub use silver::silver_procedure;

#[cfg(test)]
mod tests;
