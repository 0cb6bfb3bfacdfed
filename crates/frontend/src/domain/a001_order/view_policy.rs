//! Политики представлений таблицы заказов.
//!
//! Рабочий экран и история намеренно отличаются порядком вставки строк
//! и способом фильтрации; оба поведения сохранены как отдельные политики.

use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::price_table::PriceTable;

use super::columns::OrderColumn;

pub const MSG_NO_HISTORY: &str = "Não há histórico de pedidos registrado.";
pub const MSG_NO_MATCH_HISTORY: &str = "Nenhum registro de pedido encontrado com base neste filtro.";
pub const MSG_NO_MATCH_WORKING: &str = "Nenhum pedido encontrado com base neste filtro.";
pub const MSG_SUMMARY_UNAVAILABLE: &str = "Resumo indisponível ou filtro ativo.";

/// Как строки ответа сервера попадают в таблицу
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPolicy {
    /// В порядке списка (рабочий экран)
    Append,
    /// Каждая следующая строка вставляется первой (история)
    Prepend,
}

impl InsertionPolicy {
    pub fn arrange(self, mut orders: Vec<Order>) -> Vec<Order> {
        if self == InsertionPolicy::Prepend {
            orders.reverse();
        }
        orders
    }
}

/// Способ фильтрации
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Несовпавшие строки скрываются (история), пробелы в запросе значимы
    Hide,
    /// Таблица перестраивается из полного списка (рабочий экран), запрос обрезается
    Rebuild,
}

impl FilterStrategy {
    pub fn normalize(self, term: &str) -> String {
        match self {
            FilterStrategy::Hide => term.to_lowercase(),
            FilterStrategy::Rebuild => term.trim().to_lowercase(),
        }
    }
}

/// Текст строки для поиска: все ячейки подряд, в нижнем регистре
pub fn row_search_text(order: &Order, columns: &[OrderColumn], prices: &PriceTable) -> String {
    columns
        .iter()
        .map(|column| column.cell_text(order, prices))
        .collect::<String>()
        .to_lowercase()
}

/// Строка таблицы после применения состояния представления
#[derive(Clone, Debug, PartialEq)]
pub enum TableRowView {
    Order(Order),
    /// Информационная строка на всю ширину таблицы; всегда последняя и не сортируется
    Placeholder(&'static str),
}

impl TableRowView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableRowView::Placeholder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::aggregate::OrderId;

    fn order(id: i64) -> Order {
        Order {
            id: OrderId(id),
            customer_name: "Joana".into(),
            document_id: "12.345.678-9".into(),
            product_name: "Reposição".into(),
            staff_name: "Mix".into(),
            scent: "Uva".into(),
            note: "Mesa 2".into(),
            created_at: "2025-02-01 20:00:00".into(),
            updated_at: None,
            active: true,
        }
    }

    #[test]
    fn test_prepend_reverses_server_order() {
        let orders = vec![order(1), order(2), order(3)];
        let ids: Vec<i64> = InsertionPolicy::Prepend
            .arrange(orders.clone())
            .iter()
            .map(|o| o.id.value())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let ids: Vec<i64> = InsertionPolicy::Append
            .arrange(orders)
            .iter()
            .map(|o| o.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(FilterStrategy::Rebuild.normalize("  JoAna "), "joana");
        assert_eq!(FilterStrategy::Hide.normalize(" JoAna"), " joana");
    }

    #[test]
    fn test_row_search_text_concatenates_cells() {
        let text = row_search_text(&order(7), &OrderColumn::HISTORY, &PriceTable::default());
        assert!(text.starts_with("7joana12.345.678-9reposição"));
        assert!(text.ends_with("2025-02-01 20:00:0025"));
    }
}
