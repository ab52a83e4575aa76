use thiserror::Error;

/// Structural problems in a catalog file that the TOML/JSON parser accepts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown table `{table}` (expected one of: {expected})")]
    UnknownTable { table: String, expected: String },

    #[error("table `{table}` must map record ids to tables")]
    NotATable { table: String },

    #[error("record `{table}.{id}` must be a table of fields")]
    RecordNotATable { table: String, id: String },

    #[error("record `{table}.{id}` has an empty id")]
    EmptyRecordId { table: String, id: String },

    #[error("record `{table}.{id}` sets `name` to `{name}`; the record id is its name")]
    NameMismatch {
        table: String,
        id: String,
        name: String,
    },
}
