use crate::domain::fingerprint::enrich;
use crate::domain::params::{ParamMap, prune, text};
use crate::domain::ports::DeviceIdentityProviderBox;
use crate::domain::record::{BankAccount, Card, PaymentRecord};
use crate::infrastructure::platform::PlatformDeviceIdentity;

/// Top-level key holding the card fields.
pub const TYPE_CARD: &str = "card";
/// Top-level key holding the bank account fields.
pub const TYPE_BANK_ACCOUNT: &str = "bank_account";
/// Top-level key carrying the usage tokens of a card.
pub const FIELD_PRODUCT_USAGE: &str = "product_usage";

/// Turns payment records into API request parameters.
///
/// `ParamBuilder` owns the device identity provider used to fingerprint card
/// payloads. Building never fails: absent or blank fields are left out and a
/// missing device id only drops the fingerprint.
pub struct ParamBuilder {
    identity: DeviceIdentityProviderBox,
}

impl ParamBuilder {
    /// Creates a new `ParamBuilder` reading the device identity from `identity`.
    pub fn new(identity: DeviceIdentityProviderBox) -> Self {
        Self { identity }
    }

    /// Creates a builder backed by the host's machine identifier.
    pub fn platform() -> Self {
        Self::new(Box::new(PlatformDeviceIdentity::default()))
    }

    /// Builds the parameters for any supported record.
    pub fn params(&self, record: &PaymentRecord) -> ParamMap {
        match record {
            PaymentRecord::Card(card) => self.card_params(card),
            PaymentRecord::BankAccount(account) => self.bank_account_params(account),
        }
    }

    /// Builds the token parameters for a card.
    ///
    /// The result holds the pruned card fields under `card`, the usage tokens
    /// under `product_usage` (even when there are none), and the device
    /// fingerprint when one is available.
    pub fn card_params(&self, card: &Card) -> ParamMap {
        let card_params = prune(
            ParamMap::new()
                .with("number", text(card.number.as_deref()))
                .with("cvc", text(card.cvc.as_deref()))
                .with("exp_month", card.exp_month)
                .with("exp_year", card.exp_year)
                .with("name", text(card.name.as_deref()))
                .with("currency", text(card.currency.as_deref()))
                .with("address_line1", text(card.address_line1.as_deref()))
                .with("address_line2", text(card.address_line2.as_deref()))
                .with("address_city", text(card.address_city.as_deref()))
                .with("address_zip", text(card.address_zip.as_deref()))
                .with("address_state", text(card.address_state.as_deref()))
                .with("address_country", text(card.address_country.as_deref())),
        );

        tracing::debug!(fields = card_params.len(), "built card params");

        // product_usage stays even when empty; the API expects the key.
        let token_params = ParamMap::new()
            .with(FIELD_PRODUCT_USAGE, card.logging_tokens.clone())
            .with(TYPE_CARD, card_params);

        enrich(token_params, &*self.identity)
    }

    /// Builds the token parameters for a bank account.
    ///
    /// Bank accounts are not fingerprinted.
    pub fn bank_account_params(&self, account: &BankAccount) -> ParamMap {
        let account_params = prune(
            ParamMap::new()
                .with("country", account.country_code.as_str())
                .with("currency", account.currency.as_str())
                .with("account_number", account.account_number.as_str())
                .with("routing_number", text(account.routing_number.as_deref()))
                .with("account_holder_name", text(account.account_holder_name.as_deref()))
                .with("account_holder_type", text(account.account_holder_type.as_deref())),
        );

        tracing::debug!(fields = account_params.len(), "built bank account params");

        ParamMap::new().with(TYPE_BANK_ACCOUNT, account_params)
    }
}

impl Default for ParamBuilder {
    fn default() -> Self {
        Self::platform()
    }
}
