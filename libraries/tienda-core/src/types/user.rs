/// Account form types
use crate::error::Result;
use crate::types::require_non_empty;
use serde::Serialize;

/// Login credentials.
///
/// Never persisted; held only for the duration of a single submit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)?;
        Ok(())
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)?;
        Ok(())
    }
}
