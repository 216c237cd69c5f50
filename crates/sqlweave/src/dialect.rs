//! Dialect policy: identifier quoting and binder-token style.
//!
//! A dialect is resolved once per builder and affects rendering only. It never
//! changes tree structure or parameter ordering.

use crate::error::{BuildError, BuildResult};
use std::str::FromStr;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Backtick quoting, `?` binders.
    #[default]
    MySql,
    /// Double-quote quoting, `?` binders.
    Sqlite,
    /// Double-quote quoting, numbered `$n` binders.
    Postgres,
    /// Double-quote quoting, `?` binders.
    Firebird,
}

impl Dialect {
    pub(crate) fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Sqlite | Dialect::Postgres | Dialect::Firebird => '"',
        }
    }

    pub(crate) fn binder_style(self) -> BinderStyle {
        match self {
            Dialect::Postgres => BinderStyle::Numbered,
            Dialect::MySql | Dialect::Sqlite | Dialect::Firebird => BinderStyle::Question,
        }
    }

    /// Append `ident` to `out` wrapped in the dialect quote character.
    /// An embedded quote character is doubled.
    pub(crate) fn push_quoted(self, out: &mut String, ident: &str) {
        let quote = self.quote_char();
        out.push(quote);
        for ch in ident.chars() {
            if ch == quote {
                out.push(quote);
            }
            out.push(ch);
        }
        out.push(quote);
    }
}

impl FromStr for Dialect {
    type Err = BuildError;

    fn from_str(s: &str) -> BuildResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "sqlite" => Ok(Dialect::Sqlite),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "firebird" => Ok(Dialect::Firebird),
            _ => Err(BuildError::UnknownDialect(s.to_string())),
        }
    }
}

/// Shape of the binder token substituted for each bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinderStyle {
    /// Fixed `?` placeholder.
    Question,
    /// Incrementing `$1`, `$2`, ... placeholder.
    Numbered,
}

/// Monotonic binder-token source, threaded through one whole statement so
/// numbered tokens stay unique across JOIN ONs, WHERE, and VALUES/SET.
#[derive(Debug)]
pub(crate) struct BinderSequence {
    style: BinderStyle,
    count: usize,
}

impl BinderSequence {
    pub(crate) fn new(style: BinderStyle) -> Self {
        Self { style, count: 0 }
    }

    /// Append the next binder token to `out`.
    pub(crate) fn push(&mut self, out: &mut String) {
        self.count += 1;
        match self.style {
            BinderStyle::Question => out.push('?'),
            BinderStyle::Numbered => {
                out.push('$');
                out.push_str(&self.count.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_str() {
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("firebird".parse::<Dialect>().unwrap(), Dialect::Firebird);
        assert_eq!(
            "oracle".parse::<Dialect>(),
            Err(BuildError::UnknownDialect("oracle".to_string()))
        );
    }

    #[test]
    fn quoting_doubles_embedded_quote() {
        let mut out = String::new();
        Dialect::Postgres.push_quoted(&mut out, r#"weird"name"#);
        assert_eq!(out, r#""weird""name""#);
    }

    #[test]
    fn numbered_binders_increment() {
        let mut seq = BinderSequence::new(BinderStyle::Numbered);
        let mut out = String::new();
        seq.push(&mut out);
        seq.push(&mut out);
        seq.push(&mut out);
        assert_eq!(out, "$1$2$3");
    }

    #[test]
    fn question_binders_are_fixed() {
        let mut seq = BinderSequence::new(BinderStyle::Question);
        let mut out = String::new();
        seq.push(&mut out);
        seq.push(&mut out);
        assert_eq!(out, "??");
    }
}
