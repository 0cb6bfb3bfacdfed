use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aggregate::PRODUCT_DISPLAY_ORDER;

/// Цена за единицу по наименованию продукта.
///
/// Один экземпляр на всё приложение (см. `shared::config::panel_config`).
/// Неизвестный продукт стоит 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(BTreeMap<String, f64>);

impl PriceTable {
    pub fn price_of(&self, product_name: &str) -> f64 {
        self.0.get(product_name).copied().unwrap_or(0.0)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        let prices = [40.0, 50.0, 25.0, 20.0, 0.0];
        Self(
            PRODUCT_DISPLAY_ORDER
                .iter()
                .zip(prices)
                .map(|(name, price)| (name.to_string(), price))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prices() {
        let table = PriceTable::default();
        assert_eq!(table.price_of("Aluguel Pequeno"), 40.0);
        assert_eq!(table.price_of("Aluguel Médio"), 50.0);
        assert_eq!(table.price_of("Da casa"), 0.0);
    }

    #[test]
    fn test_unknown_product_costs_zero() {
        let table = PriceTable::default();
        for name in ["", "Narguilé", "reposição", "Aluguel Grande"] {
            assert_eq!(table.price_of(name), 0.0, "{name}");
        }
    }
}
