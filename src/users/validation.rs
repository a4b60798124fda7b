use tracing::warn;

use super::repo_types::Role;
use crate::error::{ServiceError, ServiceResult};

/// Password and confirmation must be byte-equal.
pub fn check_password_confirm(password: &str, confirm: &str) -> ServiceResult<()> {
    if password.as_bytes() != confirm.as_bytes() {
        warn!("passwords do not match");
        return Err(ServiceError::PasswordMismatch);
    }
    Ok(())
}

pub fn parse_role(value: i32) -> ServiceResult<Role> {
    Role::try_from(value).inspect_err(|_| warn!(role = value, "invalid role value"))
}
