//! Client-side form validation.
//!
//! Validation runs before any simulated backend call is made; a form that
//! fails validation never reaches the network layer.

use crate::error::{PortalError, Result};
use crate::types::{Category, Severity};

const MSG_FILL_ALL: &str = "Please fill in all fields";
const MSG_FILL_REQUIRED: &str = "Please fill in all required fields";
const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
const MSG_AGREE_TERMS: &str = "You must agree to the terms and conditions";

fn validation(msg: &str) -> PortalError {
    PortalError::Validation(msg.to_string())
}

/// Sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(validation(MSG_FILL_ALL));
        }
        Ok(())
    }
}

/// Administrator self-registration form.
#[derive(Debug, Clone, Default)]
pub struct AdminRegisterForm {
    pub name: String,
    pub email: String,
    pub department: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

impl AdminRegisterForm {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.department.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(validation(MSG_FILL_REQUIRED));
        }
        if self.password != self.confirm_password {
            return Err(validation(MSG_PASSWORD_MISMATCH));
        }
        if !self.agreed_to_terms {
            return Err(validation(MSG_AGREE_TERMS));
        }
        Ok(())
    }
}

/// New issue report form. Photo and severity are optional; everything
/// else is required.
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub photo_path: Option<String>,
}

impl ReportForm {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.location.trim().is_empty()
            || self.category.is_none()
        {
            return Err(validation(MSG_FILL_REQUIRED));
        }
        Ok(())
    }
}
