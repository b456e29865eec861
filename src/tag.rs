//! Per-field annotations.
//!
//! An annotation is a comma-separated list of tokens attached to a composite field:
//!
//! | Token  | Directive                                                               |
//! |--------|-------------------------------------------------------------------------|
//! | `-`    | Ignore. The field is not on the wire: no bytes, no offset change.       |
//! | `skip` | Skip. The field's bytes are on the wire but are not copied.             |
//! | `BE`   | Force big-endian for the field and everything below it.                 |
//! | `LE`   | Force little-endian for the field and everything below it.              |
//!
//! `-` and `skip` end processing of the annotation, so they win over any order token, before or
//! after them. When both `BE` and `LE` appear, the last one wins. Empty tokens (`"BE,"`) are
//! no-ops. Tokens are matched exactly; `" BE"` is not `"BE"`.

use alloc::string::ToString;

use crate::error::{Error, Result};
use crate::order::ByteOrder;

/// The recognized annotation tokens.
pub mod tokens {
    /// Ignore the field.
    pub const IGNORE: &str = "-";
    /// Skip the field's bytes without copying.
    pub const SKIP: &str = "skip";
    /// Force big-endian.
    pub const BIG_ENDIAN: &str = "BE";
    /// Force little-endian.
    pub const LITTLE_ENDIAN: &str = "LE";
}

/// How unrecognized annotation tokens are handled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TagPolicy {
    /// Unknown tokens are dropped.
    #[default]
    Permissive,
    /// Unknown tokens fail the call with [`Error::UnknownTag`].
    Strict,
}

/// What the codec does with one composite field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FieldDirective {
    /// No directive; the ambient byte order applies.
    #[default]
    Inherit,
    /// The field does not exist on the wire.
    Ignore,
    /// The field occupies its full size on the wire, but is not copied.
    Skip,
    /// The field, and everything nested in it, uses this byte order.
    Order(ByteOrder),
}

impl FieldDirective {
    /// Parses an annotation. `None` means the field has no annotation.
    pub fn parse(tag: Option<&str>, policy: TagPolicy) -> Result<Self> {
        let Some(tag) = tag else {
            return Ok(Self::Inherit);
        };

        let mut directive = Self::Inherit;
        for token in tag.split(',') {
            match token {
                tokens::IGNORE => return Ok(Self::Ignore),
                tokens::SKIP => return Ok(Self::Skip),
                tokens::BIG_ENDIAN => directive = Self::Order(ByteOrder::Big),
                tokens::LITTLE_ENDIAN => directive = Self::Order(ByteOrder::Little),
                "" => {}
                _ => match policy {
                    TagPolicy::Permissive => {
                        tracing::debug!(token, tag, "ignoring unknown field annotation token");
                    }
                    TagPolicy::Strict => return Err(Error::UnknownTag(token.to_string())),
                },
            }
        }
        Ok(directive)
    }

    /// Parses an annotation, dropping unknown tokens.
    pub fn resolve(tag: Option<&str>) -> Self {
        // Only the strict policy can fail.
        Self::parse(tag, TagPolicy::Permissive).unwrap_or_default()
    }

    /// Returns the byte order to use for the field, given the ambient order.
    pub fn order_or(self, ambient: ByteOrder) -> ByteOrder {
        match self {
            Self::Order(order) => order,
            _ => ambient,
        }
    }
}
