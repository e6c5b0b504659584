use crate::{model::Currency, service::ConversionError};
use std::collections::{BTreeMap, HashMap};

const BUILTIN: [(&str, &str, &str); 5] = [
    ("US", "USD", "United States Dollar"),
    ("IN", "INR", "Indian Rupee"),
    ("GB", "GBP", "British Pound"),
    ("EU", "EUR", "Euro"),
    ("JP", "JPY", "Japanese Yen"),
];

/// Country code to currency, fixed once the service starts.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    currencies: HashMap<String, Currency>,
}

impl CurrencyTable {
    /// Built-in entries, then `extra` on top of them.
    pub fn new(extra: &BTreeMap<String, Currency>) -> CurrencyTable {
        let mut currencies: HashMap<String, Currency> = BUILTIN
            .iter()
            .map(|(country, code, name)| (country.to_string(), Currency::new(code, name)))
            .collect();

        for (country, currency) in extra {
            currencies.insert(country.to_uppercase(), currency.clone());
        }

        CurrencyTable { currencies }
    }

    /// Exact match, `country_code` must already be uppercase.
    pub fn lookup(&self, country_code: &str) -> Result<&Currency, ConversionError> {
        self.currencies
            .get(country_code)
            .ok_or_else(|| ConversionError::UnsupportedCountry(country_code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        CurrencyTable::new(&BTreeMap::new())
    }
}
