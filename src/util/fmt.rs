use std::fmt::{self, Debug, Formatter};

/// Wraps a pre-rendered string so that it is emitted without quoting by [`Debug`] formatters.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
