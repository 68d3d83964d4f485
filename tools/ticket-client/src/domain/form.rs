//! Officer input as typed, before it becomes a `TicketDraft`.

use shared_types::{FailureKind, TicketDraft};
use thiserror::Error;
use tk_02_ticket_validation::is_digit_only;

/// Raw text fields of the ticket form.
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    pub driver: String,
    pub pesel: String,
    pub offense: String,
    pub fine: String,
    pub penalty_points: String,
    pub recidivist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Fields must not be empty")]
    Empty,

    #[error("PESEL must contain digits only")]
    NonDigitPesel,

    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
}

impl FormError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Empty | Self::NotANumber { .. } => FailureKind::IncompleteInput,
            Self::NonDigitPesel => FailureKind::InvalidPersonalId,
        }
    }
}

impl TicketForm {
    /// Convert the form into a draft issued by `issuer`.
    ///
    /// Only checks what the text itself can tell: emptiness, digits in the
    /// PESEL, and numeric fine/points. Ranges and PESEL length are checked by
    /// the issuance pipeline.
    pub fn to_draft(&self, issuer: &str) -> Result<TicketDraft, FormError> {
        let fields = [
            &self.driver,
            &self.pesel,
            &self.offense,
            &self.fine,
            &self.penalty_points,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(FormError::Empty);
        }

        let pesel = self.pesel.trim();
        if !is_digit_only(pesel) {
            return Err(FormError::NonDigitPesel);
        }

        Ok(TicketDraft {
            driver_description: self.driver.trim().to_string(),
            personal_id: pesel.to_string(),
            offense_name: self.offense.clone(),
            fine_amount: Some(parse_number("Fine", &self.fine)?),
            penalty_points: Some(parse_number("Penalty points", &self.penalty_points)?),
            is_recidivist: self.recidivist,
            issuer_id: issuer.to_string(),
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber { field })
}
