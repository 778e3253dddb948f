use crate::dialect::{quote_char, PlaceholderStyle};

use modsql_core::{err, Connection, Engine, Error, Result};
use tracing::{debug, warn};

/// Canonical sentinel for one positional bind parameter.
pub const PARAM: &str = "{P}";

/// Canonical sentinel for one identifier quote character.
pub const QUOTE: &str = "{Q}";

/// Registry of canonical parameterized statements, keyed by id.
///
/// Statement ids are positions: the first statement pushed has id 0. The
/// texts are rewritten in place to one engine's syntax exactly once, after
/// which the registry is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statements {
    texts: Vec<String>,

    /// Engine the texts were rewritten for
    engine: Option<Engine>,
}

/// Prepared handles of a [`Statements`] registry, keyed by statement id.
#[derive(Debug)]
pub struct Prepared<S> {
    handles: Vec<S>,
}

impl Statements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a canonical statement, returning its id.
    pub fn push(&mut self, text: impl Into<String>) -> usize {
        self.texts.push(text.into());
        self.texts.len() - 1
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.texts.iter().map(String::as_str).enumerate()
    }

    /// The engine the registry was rewritten for, if it has been.
    pub fn engine(&self) -> Option<Engine> {
        self.engine
    }

    /// Rewrites every statement to `engine`'s placeholder and quoting syntax.
    ///
    /// Fails if the registry has already been rewritten.
    pub fn rewrite(&mut self, engine: Engine) -> Result<()> {
        if let Some(rewritten) = self.engine {
            return Err(Error::invalid_state(format!(
                "statements already rewritten for {rewritten}"
            )));
        }

        for text in &mut self.texts {
            *text = rewrite(text, engine);
        }

        self.engine = Some(engine);
        Ok(())
    }

    /// Prepares every statement on `conn`, rewriting the registry for the
    /// connection's engine first if it has not been rewritten yet.
    ///
    /// A single failure fails the whole batch; handles prepared before it are
    /// closed again.
    pub async fn prepare<C: Connection>(&mut self, conn: &mut C) -> Result<Prepared<C::Statement>> {
        let engine = conn.engine();

        match self.engine {
            None => self.rewrite(engine)?,
            Some(rewritten) if rewritten == engine => {}
            Some(rewritten) => {
                return Err(Error::invalid_state(format!(
                    "statements rewritten for {rewritten} cannot be prepared on {engine}"
                )))
            }
        }

        let mut prepared = Prepared {
            handles: Vec::with_capacity(self.texts.len()),
        };

        for (id, text) in self.texts.iter().enumerate() {
            match conn.prepare(text).await {
                Ok(handle) => {
                    debug!(id, sql = %text, "prepared statement");
                    prepared.handles.push(handle);
                }
                Err(err) => {
                    if let Err(close) = prepared.close(conn).await {
                        warn!(error = %close, "failed to close statements of a failed batch");
                    }
                    return Err(err.context(err!("preparing statement {id}: {text}")));
                }
            }
        }

        Ok(prepared)
    }
}

impl<S: Into<String>> FromIterator<S> for Statements {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            texts: iter.into_iter().map(Into::into).collect(),
            engine: None,
        }
    }
}

impl<S> Prepared<S> {
    /// The handle of statement `id`.
    pub fn get(&self, id: usize) -> Option<&S> {
        self.handles.get(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Closes every handle. All handles are attempted; the first failure is
    /// returned.
    pub async fn close<C>(self, conn: &mut C) -> Result<()>
    where
        C: Connection<Statement = S>,
    {
        let mut first = None;

        for (id, handle) in self.handles.into_iter().enumerate() {
            if let Err(err) = conn.close_statement(handle).await {
                warn!(id, error = %err, "failed to close statement");
                first.get_or_insert(err);
            }
        }

        match first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Rewrites canonical text to `engine`'s syntax.
///
/// Each `{P}` becomes `?` (MySQL, SQLite) or `$k` for the k-th parameter
/// from the left (PostgreSQL). Each `{Q}` becomes the engine's identifier
/// quote character.
pub fn rewrite(canonical: &str, engine: Engine) -> String {
    let style = PlaceholderStyle::of(engine);
    let quote = quote_char(engine);

    let mut out = String::with_capacity(canonical.len());
    let mut rest = canonical;
    let mut params = 0;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix(PARAM) {
            params += 1;
            style.write(&mut out, params);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(QUOTE) {
            out.push(quote);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
