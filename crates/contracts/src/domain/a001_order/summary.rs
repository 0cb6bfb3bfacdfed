//! Сводка по продуктам для видимых строк таблицы заказов

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::aggregate::{Order, PRODUCT_DISPLAY_ORDER};
use super::price_table::PriceTable;

/// Строка сводки по одному продукту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub product_name: String,
    pub quantity: usize,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Summary {
    /// Нет видимых строк (пустая история или фильтр ничего не нашел)
    Unavailable,
    Lines {
        lines: Vec<SummaryLine>,
        quantity_general: usize,
        total_general: f64,
    },
}

impl Summary {
    pub fn total_general(&self) -> f64 {
        match self {
            Summary::Unavailable => 0.0,
            Summary::Lines { total_general, .. } => *total_general,
        }
    }

    pub fn quantity_general(&self) -> usize {
        match self {
            Summary::Unavailable => 0,
            Summary::Lines {
                quantity_general, ..
            } => *quantity_general,
        }
    }
}

/// Группирует видимые заказы по продукту.
///
/// Строки выводятся в фиксированном порядке `PRODUCT_DISPLAY_ORDER`,
/// отсутствующие продукты пропускаются. Продукты вне этого списка
/// не получают своей строки, но входят в общий итог.
pub fn compute_summary<'a, I>(visible: I, prices: &PriceTable) -> Summary
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut groups: HashMap<&str, (usize, f64)> = HashMap::new();
    let mut quantity_general = 0usize;
    let mut total_general = 0.0f64;

    for order in visible {
        let value = prices.price_of(&order.product_name);
        let entry = groups.entry(order.product_name.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += value;
        quantity_general += 1;
        total_general += value;
    }

    if quantity_general == 0 {
        return Summary::Unavailable;
    }

    let lines = PRODUCT_DISPLAY_ORDER
        .iter()
        .filter_map(|product| {
            groups.get(product).map(|(quantity, total)| SummaryLine {
                product_name: product.to_string(),
                quantity: *quantity,
                total: *total,
            })
        })
        .collect();

    Summary::Lines {
        lines,
        quantity_general,
        total_general,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderId;

    fn order(id: i64, product: &str) -> Order {
        Order {
            id: OrderId(id),
            customer_name: format!("Cliente {id}"),
            document_id: "12.345.678-9".into(),
            product_name: product.into(),
            staff_name: "Mix".into(),
            scent: "Menta".into(),
            note: String::new(),
            created_at: "2025-01-10 21:15:00".into(),
            updated_at: None,
            active: true,
        }
    }

    #[test]
    fn test_groups_in_display_order() {
        let orders = vec![
            order(1, "Reposição"),
            order(2, "Aluguel Médio"),
            order(3, "Reposição"),
            order(4, "Aluguel Pequeno"),
        ];
        let summary = compute_summary(&orders, &PriceTable::default());
        match summary {
            Summary::Lines {
                lines,
                quantity_general,
                total_general,
            } => {
                let names: Vec<&str> = lines.iter().map(|l| l.product_name.as_str()).collect();
                assert_eq!(names, vec!["Aluguel Pequeno", "Aluguel Médio", "Reposição"]);
                assert_eq!(lines[2].quantity, 2);
                assert_eq!(lines[2].total, 50.0);
                assert_eq!(quantity_general, 4);
                assert_eq!(total_general, 140.0);
            }
            Summary::Unavailable => panic!("expected lines"),
        }
    }

    #[test]
    fn test_house_orders_total_zero() {
        let orders: Vec<Order> = (1..=6).map(|i| order(i, "Da casa")).collect();
        let summary = compute_summary(&orders, &PriceTable::default());
        assert_eq!(summary.quantity_general(), 6);
        assert_eq!(summary.total_general(), 0.0);
    }

    #[test]
    fn test_unknown_product_only_in_grand_total() {
        let orders = vec![order(1, "Carvão"), order(2, "Funcionário")];
        let summary = compute_summary(&orders, &PriceTable::default());
        match summary {
            Summary::Lines {
                lines,
                quantity_general,
                total_general,
            } => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].product_name, "Funcionário");
                assert_eq!(quantity_general, 2);
                assert_eq!(total_general, 20.0);
            }
            Summary::Unavailable => panic!("expected lines"),
        }
    }

    #[test]
    fn test_empty_is_unavailable() {
        let orders: Vec<Order> = Vec::new();
        let summary = compute_summary(&orders, &PriceTable::default());
        assert_eq!(summary, Summary::Unavailable);
        assert_eq!(summary.total_general(), 0.0);
    }
}
