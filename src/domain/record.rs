use serde::{Deserialize, Deserializer};

/// Separator for usage tokens when a card is read from a flat source.
pub const LOGGING_TOKEN_SEPARATOR: char = ';';

/// A payment card as entered by the user.
///
/// Nothing here is validated; a card with an impossible expiry is still
/// turned into parameters and left for the API to reject.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct Card {
    pub number: Option<String>,
    pub cvc: Option<String>,
    pub exp_month: i32,
    pub exp_year: i32,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub address_country: Option<String>,
    /// Usage tokens recorded by the UI components that produced this card.
    #[serde(default, deserialize_with = "deserialize_logging_tokens")]
    pub logging_tokens: Vec<String>,
}

impl Card {
    pub fn new(number: &str, exp_month: i32, exp_year: i32, cvc: &str) -> Self {
        Self {
            number: Some(number.to_string()),
            cvc: Some(cvc.to_string()),
            exp_month,
            exp_year,
            ..Default::default()
        }
    }

    /// Records that `token` touched this card. Order of insertion is kept.
    pub fn add_logging_token(&mut self, token: impl Into<String>) {
        self.logging_tokens.push(token.into());
    }
}

fn deserialize_logging_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|tokens| {
            tokens
                .split(LOGGING_TOKEN_SEPARATOR)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

/// A bank account to be tokenized.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BankAccount {
    pub country_code: String,
    pub currency: String,
    pub account_number: String,
    pub routing_number: Option<String>,
    pub account_holder_name: Option<String>,
    pub account_holder_type: Option<String>,
}

impl BankAccount {
    pub fn new(
        account_number: &str,
        country_code: &str,
        currency: &str,
        routing_number: Option<&str>,
    ) -> Self {
        Self {
            country_code: country_code.to_string(),
            currency: currency.to_string(),
            account_number: account_number.to_string(),
            routing_number: routing_number.map(str::to_string),
            account_holder_name: None,
            account_holder_type: None,
        }
    }
}

/// Any instrument the builder knows how to turn into parameters.
#[derive(Debug, PartialEq, Clone)]
pub enum PaymentRecord {
    Card(Card),
    BankAccount(BankAccount),
}

impl From<Card> for PaymentRecord {
    fn from(card: Card) -> Self {
        PaymentRecord::Card(card)
    }
}

impl From<BankAccount> for PaymentRecord {
    fn from(account: BankAccount) -> Self {
        PaymentRecord::BankAccount(account)
    }
}
