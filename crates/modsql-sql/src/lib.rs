pub mod dialect;
pub use dialect::{DialectProfile, PlaceholderStyle};

pub mod serializer;
pub use serializer::Serializer;

mod statements;
pub use statements::{rewrite, Prepared, Statements, PARAM, QUOTE};

pub mod stmt;
pub use stmt::Statement;
