use crate::{
    schema::{is_identifier, IntWidth, ScalarType},
    stmt::Value,
    Error,
};

/// A column declaration, built by chaining annotations onto
/// [`ColumnDef::new`].
///
/// Annotation calls never fail. Problems are recorded on the column and
/// surface when the column is handed to [`Builder::table`], which refuses to
/// build anything while an error is outstanding.
///
/// A column holds at most one annotation: a primary key, a foreign key, a
/// unique constraint or an index. Any second annotation, including a repeat
/// of the first, is a constraint conflict. Combinations are declared at table
/// level instead.
///
/// [`Builder::table`]: super::Builder::table
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub(crate) name: String,
    pub(crate) ty: ScalarType,
    pub(crate) annotation: Annotation,
    pub(crate) default: Option<Value>,
    pub(crate) errors: Vec<Error>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Annotation {
    None,
    PrimaryKey,
    Unique,
    ForeignKey { table: String, column: String },
    Index { unique: bool },
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: ScalarType) -> ColumnDef {
        let name = name.into();
        let mut errors = vec![];

        if !is_identifier(&name) {
            errors.push(Error::invalid_name(&name, "not an SQL identifier"));
        }

        ColumnDef {
            name,
            ty,
            annotation: Annotation::None,
            default: None,
            errors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> ScalarType {
        self.ty
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn primary_key(self) -> ColumnDef {
        self.annotate(Annotation::PrimaryKey)
    }

    pub fn unique(self) -> ColumnDef {
        self.annotate(Annotation::Unique)
    }

    /// References `column` of `table`. The table must be declared before the
    /// table holding this column.
    pub fn foreign_key(self, table: &str, column: &str) -> ColumnDef {
        self.annotate(Annotation::ForeignKey {
            table: table.to_string(),
            column: column.to_string(),
        })
    }

    /// Creates a single-column index, unique or not.
    pub fn index(self, unique: bool) -> ColumnDef {
        self.annotate(Annotation::Index { unique })
    }

    /// Sets the column default.
    ///
    /// A value outside the column type's family is recorded as a type
    /// mismatch. Integer widths are checked again against the schema's
    /// resolved `Int` width when the column joins a table.
    pub fn default(mut self, value: impl Into<Value>) -> ColumnDef {
        let value = value.into();

        if !self.ty.accepts(&value, IntWidth::W64) {
            self.errors
                .push(Error::type_mismatch(&self.name, self.ty, &value));
        }

        self.default = Some(value);
        self
    }

    fn annotate(mut self, annotation: Annotation) -> ColumnDef {
        if self.annotation == Annotation::None {
            self.annotation = annotation;
        } else {
            self.errors.push(Error::constraint_conflict(
                &self.name,
                format!(
                    "cannot declare {} on a column that already declares {}",
                    annotation.describe(),
                    self.annotation.describe()
                ),
            ));
        }

        self
    }
}

impl Annotation {
    fn describe(&self) -> &'static str {
        match self {
            Annotation::None => "nothing",
            Annotation::PrimaryKey => "PRIMARY KEY",
            Annotation::Unique => "UNIQUE",
            Annotation::ForeignKey { .. } => "a FOREIGN KEY",
            Annotation::Index { unique: false } => "an INDEX",
            Annotation::Index { unique: true } => "a UNIQUE INDEX",
        }
    }
}
