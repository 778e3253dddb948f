use super::{Flavor, Formatter, ToSql};
use crate::statements::PARAM;

/// The next positional bind parameter.
pub(super) struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.params += 1;

        match f.serializer.flavor {
            Flavor::Dialect(profile) => profile.placeholder.write(f.dst, f.params),
            Flavor::Canonical => f.dst.push_str(PARAM),
        }
    }
}
