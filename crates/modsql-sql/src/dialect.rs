use modsql_core::{
    schema::{IntWidth, ScalarType},
    Engine,
};

use std::fmt::Write;

/// Everything that differs between engines when rendering SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectProfile {
    pub engine: Engine,

    /// Width of `Int`
    pub int_width: IntWidth,

    /// Character quoting reserved identifiers
    pub quote: char,

    pub placeholder: PlaceholderStyle,
}

/// Bind parameter syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` for every parameter
    Question,

    /// `$1`, `$2`, ... numbered left to right
    Numbered,
}

impl DialectProfile {
    pub fn new(engine: Engine, int_width: IntWidth) -> Self {
        Self {
            engine,
            int_width,
            quote: quote_char(engine),
            placeholder: PlaceholderStyle::of(engine),
        }
    }

    pub fn lexeme(&self, ty: ScalarType) -> &'static str {
        ty.lexeme(self.engine, self.int_width)
    }

    pub fn bool_literal(&self, value: bool) -> &'static str {
        match (self.engine, value) {
            (Engine::Sqlite, true) => "1",
            (Engine::Sqlite, false) => "0",
            (_, true) => "TRUE",
            (_, false) => "FALSE",
        }
    }
}

impl PlaceholderStyle {
    pub fn of(engine: Engine) -> Self {
        match engine {
            Engine::Postgresql => PlaceholderStyle::Numbered,
            Engine::Mysql | Engine::Sqlite => PlaceholderStyle::Question,
        }
    }

    /// Writes the `n`-th parameter, counting from 1.
    pub fn write(self, dst: &mut String, n: usize) {
        match self {
            PlaceholderStyle::Question => dst.push('?'),
            PlaceholderStyle::Numbered => {
                let _ = write!(dst, "${n}");
            }
        }
    }
}

pub fn quote_char(engine: Engine) -> char {
    match engine {
        Engine::Mysql => '`',
        Engine::Postgresql | Engine::Sqlite => '"',
    }
}
