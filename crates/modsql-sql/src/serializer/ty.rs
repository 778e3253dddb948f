use super::{Flavor, Formatter, ToSql};

use modsql_core::schema::ScalarType;

impl ToSql for ScalarType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.flavor {
            Flavor::Dialect(profile) => f.dst.push_str(profile.lexeme(self)),
            Flavor::Canonical => {
                let ty = self.to_string();
                f.dst.push_str(&ty);
            }
        }
    }
}
