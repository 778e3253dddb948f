use crate::Error;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A target SQL database family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Mysql,
    #[serde(alias = "postgres")]
    Postgresql,
    Sqlite,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Mysql, Engine::Postgresql, Engine::Sqlite];

    pub fn name(self) -> &'static str {
        match self {
            Engine::Mysql => "mysql",
            Engine::Postgresql => "postgresql",
            Engine::Sqlite => "sqlite",
        }
    }

    pub fn is_mysql(self) -> bool {
        matches!(self, Engine::Mysql)
    }

    pub fn is_postgresql(self) -> bool {
        matches!(self, Engine::Postgresql)
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, Engine::Sqlite)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Engine::Mysql),
            "postgresql" | "postgres" => Ok(Engine::Postgresql),
            "sqlite" => Ok(Engine::Sqlite),
            _ => Err(Error::invalid_config(format!("unknown engine `{s}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_engine_names() {
        assert_eq!("mysql".parse::<Engine>().unwrap(), Engine::Mysql);
        assert_eq!("postgres".parse::<Engine>().unwrap(), Engine::Postgresql);
        assert_eq!("postgresql".parse::<Engine>().unwrap(), Engine::Postgresql);
        assert_eq!("sqlite".parse::<Engine>().unwrap(), Engine::Sqlite);
        assert!("oracle".parse::<Engine>().unwrap_err().is_invalid_config());
    }
}
