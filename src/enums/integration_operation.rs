use std::fmt;

/// Remote call that failed, used to prefix integration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationOperation {
    Create,
    Read,
    Delete,
}

impl IntegrationOperation {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Create => "error creating a Webhook integration",
            Self::Read => "error reading the Webhook integration",
            Self::Delete => "error deleting a Webhook integration",
        }
    }
}

impl fmt::Display for IntegrationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Read => write!(f, "read"),
            Self::Delete => write!(f, "delete"),
        }
    }
}
