//! Defines the currencies that transactions can be recorded in.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A currency that a transaction amount is denominated in.
///
/// Amounts in different currencies are never summed together, there is no
/// conversion logic anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar.
    Usd,
    /// Indian rupee.
    Inr,
}

impl Currency {
    /// The symbol used when displaying amounts in this currency.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        };

        write!(f, "{code}")
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "INR" => Ok(Currency::Inr),
            _ => Err(Error::InvalidCurrency(code.to_string())),
        }
    }
}

#[cfg(test)]
mod currency_tests {
    use crate::Error;

    use super::Currency;

    #[test]
    fn parse_succeeds_on_supported_codes() {
        assert_eq!("USD".parse(), Ok(Currency::Usd));
        assert_eq!("inr".parse(), Ok(Currency::Inr));
        assert_eq!(" usd ".parse(), Ok(Currency::Usd));
    }

    #[test]
    fn parse_fails_on_unsupported_code() {
        let result: Result<Currency, Error> = "EUR".parse();

        assert_eq!(result, Err(Error::InvalidCurrency("EUR".to_string())));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for currency in [Currency::Usd, Currency::Inr] {
            assert_eq!(currency.to_string().parse(), Ok(currency));
        }
    }
}
