mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::{Insert, InsertSource};

pub use modsql_core::driver::Transaction;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    Transaction(Transaction),
}

impl Statement {
    pub fn begin() -> Self {
        Statement::Transaction(Transaction::Start)
    }

    pub fn commit() -> Self {
        Statement::Transaction(Transaction::Commit)
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Statement::Transaction(_))
    }
}

impl From<Transaction> for Statement {
    fn from(value: Transaction) -> Self {
        Self::Transaction(value)
    }
}
