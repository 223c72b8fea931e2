//! Validation of lead contact fields
//!
//! Both lead forms share the same contact rules. Checks short-circuit: the
//! first violated rule is reported and nothing else is evaluated.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace and exactly one `@` per part
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadValidationError {
    /// Name is blank
    NameRequired,
    /// Email is blank
    EmailRequired,
    /// WhatsApp number is blank
    WhatsappRequired,
    /// Email does not look like `local@domain.tld`
    InvalidEmail,
}

impl std::fmt::Display for LeadValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadValidationError::NameRequired => write!(f, "Nome é obrigatório"),
            LeadValidationError::EmailRequired => write!(f, "Email é obrigatório"),
            LeadValidationError::WhatsappRequired => write!(f, "WhatsApp é obrigatório"),
            LeadValidationError::InvalidEmail => write!(f, "Email inválido"),
        }
    }
}

impl std::error::Error for LeadValidationError {}

/// Check whether an email matches the simple `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate the contact fields shared by the trial and demo forms.
///
/// Rules run in order: name, email presence, WhatsApp presence, email format.
pub fn validate_contact(name: &str, email: &str, whatsapp: &str) -> Result<(), LeadValidationError> {
    if name.trim().is_empty() {
        return Err(LeadValidationError::NameRequired);
    }

    if email.trim().is_empty() {
        return Err(LeadValidationError::EmailRequired);
    }

    if whatsapp.trim().is_empty() {
        return Err(LeadValidationError::WhatsappRequired);
    }

    if !is_valid_email(email) {
        return Err(LeadValidationError::InvalidEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_contact() {
        assert!(validate_contact("Ana Costa", "ana@empresa.com.br", "11999999999").is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected_in_order() {
        assert_eq!(
            validate_contact("  ", "", ""),
            Err(LeadValidationError::NameRequired)
        );
        assert_eq!(
            validate_contact("Ana", "   ", ""),
            Err(LeadValidationError::EmailRequired)
        );
        assert_eq!(
            validate_contact("Ana", "ana@x.com", "\t"),
            Err(LeadValidationError::WhatsappRequired)
        );
    }

    #[test]
    fn test_missing_whatsapp_reported_before_bad_email() {
        assert_eq!(
            validate_contact("Ana", "not-an-email", ""),
            Err(LeadValidationError::WhatsappRequired)
        );
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("user@domain.tld"));
        assert!(is_valid_email("first.last+tag@sub.domain.io"));

        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user domain@x.com"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@@domain.com"));
        assert!(!is_valid_email(" user@domain.com"));
    }

    #[test]
    fn test_invalid_email_message() {
        let err = validate_contact("Ana", "ana@", "11999999999").unwrap_err();
        assert_eq!(err, LeadValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Email inválido");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(LeadValidationError::NameRequired.to_string(), "Nome é obrigatório");
        assert_eq!(LeadValidationError::EmailRequired.to_string(), "Email é obrigatório");
        assert_eq!(
            LeadValidationError::WhatsappRequired.to_string(),
            "WhatsApp é obrigatório"
        );
    }
}
