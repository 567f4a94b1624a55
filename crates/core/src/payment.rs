//! Payment method details as a tagged union.
//!
//! The `details` column on a payment method is semi-structured JSON whose
//! shape depends on the method type. Modeling it as a serde-tagged enum keyed
//! on `type` makes a bank detail with card fields unrepresentable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from interpreting stored payment details.
#[derive(Debug, Error)]
pub enum PaymentDetailsError {
    /// The stored JSON does not match any known shape.
    #[error("invalid payment details: {0}")]
    Invalid(String),
}

/// Structured details for a payment method, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentDetails {
    /// A bank account.
    Bank {
        /// Bank name.
        bank_name: String,
        /// Account number (stored as given; masking is a display concern).
        account_number: String,
        /// Optional routing/sort code.
        #[serde(skip_serializing_if = "Option::is_none")]
        routing_number: Option<String>,
    },
    /// A credit or debit card.
    Card {
        /// Card brand, e.g. "visa".
        brand: String,
        /// Last four digits.
        last_four: String,
        /// Expiry month (1-12).
        expiry_month: u8,
        /// Expiry year (four digits).
        expiry_year: u16,
    },
    /// A digital wallet.
    Wallet {
        /// Wallet provider, e.g. "paypal".
        provider: String,
        /// Account handle or email at the provider.
        handle: String,
    },
    /// Anything else (cash drawer, barter, ...).
    Other {
        /// Short label.
        label: String,
        /// Free-form notes.
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
}

impl PaymentDetails {
    /// The discriminant string stored in the `method_type` column.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bank { .. } => "bank",
            Self::Card { .. } => "card",
            Self::Wallet { .. } => "wallet",
            Self::Other { .. } => "other",
        }
    }

    /// Parses stored JSON into typed details.
    ///
    /// # Errors
    ///
    /// Returns `PaymentDetailsError::Invalid` when the JSON does not match
    /// any variant.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, PaymentDetailsError> {
        serde_json::from_value(value.clone())
            .map_err(|e| PaymentDetailsError::Invalid(e.to_string()))
    }

    /// Serializes typed details back to the stored JSON shape.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of a plain enum with string/int fields cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::bank(
        PaymentDetails::Bank {
            bank_name: "First National".into(),
            account_number: "12345678".into(),
            routing_number: Some("021000021".into()),
        },
        "bank"
    )]
    #[case::card(
        PaymentDetails::Card {
            brand: "visa".into(),
            last_four: "4242".into(),
            expiry_month: 9,
            expiry_year: 2027,
        },
        "card"
    )]
    #[case::wallet(
        PaymentDetails::Wallet {
            provider: "paypal".into(),
            handle: "shop@example.com".into(),
        },
        "wallet"
    )]
    #[case::other(
        PaymentDetails::Other {
            label: "petty cash".into(),
            notes: None,
        },
        "other"
    )]
    fn json_round_trip(#[case] details: PaymentDetails, #[case] type_name: &str) {
        assert_eq!(details.type_name(), type_name);

        let value = details.to_json();
        assert_eq!(value["type"], type_name);

        let parsed = PaymentDetails::from_json(&value).unwrap();
        assert_eq!(parsed, details);
    }

    #[test]
    fn rejects_mismatched_discriminant() {
        // Card discriminant with bank fields must not parse.
        let value = json!({
            "type": "card",
            "bank_name": "First National",
            "account_number": "12345678"
        });

        assert!(PaymentDetails::from_json(&value).is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        let value = json!({ "type": "crypto", "address": "0xabc" });
        assert!(PaymentDetails::from_json(&value).is_err());
    }
}
