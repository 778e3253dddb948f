use super::{Flavor, Formatter, ToSql};
use crate::statements::QUOTE;

/// An identifier, quoted when the schema lists it as reserved.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        if !f.serializer.schema.is_quoted(name) {
            f.dst.push_str(name);
            return;
        }

        match f.serializer.flavor {
            Flavor::Dialect(profile) => fmt!(f, profile.quote name profile.quote),
            Flavor::Canonical => fmt!(f, QUOTE name QUOTE),
        }
    }
}
