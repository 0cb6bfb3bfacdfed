use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::price_table::PriceTable;

/// Колонки таблицы заказов
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderColumn {
    Id,
    Customer,
    Document,
    Product,
    Staff,
    Scent,
    Note,
    CreatedAt,
    /// Цена по таблице цен (только история)
    Value,
}

impl OrderColumn {
    pub const WORKING: [OrderColumn; 8] = [
        OrderColumn::Id,
        OrderColumn::Customer,
        OrderColumn::Document,
        OrderColumn::Product,
        OrderColumn::Staff,
        OrderColumn::Scent,
        OrderColumn::Note,
        OrderColumn::CreatedAt,
    ];

    pub const HISTORY: [OrderColumn; 9] = [
        OrderColumn::Id,
        OrderColumn::Customer,
        OrderColumn::Document,
        OrderColumn::Product,
        OrderColumn::Staff,
        OrderColumn::Scent,
        OrderColumn::Note,
        OrderColumn::CreatedAt,
        OrderColumn::Value,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderColumn::Id => "ID",
            OrderColumn::Customer => "Nome",
            OrderColumn::Document => "RG",
            OrderColumn::Product => "Produto",
            OrderColumn::Staff => "Rosh",
            OrderColumn::Scent => "Essência",
            OrderColumn::Note => "Observação",
            OrderColumn::CreatedAt => "Criação",
            OrderColumn::Value => "Valor",
        }
    }

    /// Текст ячейки, как он выводится в таблице
    pub fn cell_text(self, order: &Order, prices: &PriceTable) -> String {
        match self {
            OrderColumn::Id => order.id.to_string(),
            OrderColumn::Customer => order.customer_name.clone(),
            OrderColumn::Document => order.document_id.clone(),
            OrderColumn::Product => order.product_name.clone(),
            OrderColumn::Staff => order.staff_name.clone(),
            OrderColumn::Scent => order.scent.clone(),
            OrderColumn::Note => order.note.clone(),
            OrderColumn::CreatedAt => order.created_at.clone(),
            OrderColumn::Value => prices.price_of(&order.product_name).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::aggregate::OrderId;

    #[test]
    fn test_value_cell_uses_price_table() {
        let order = Order {
            id: OrderId(12),
            customer_name: "Rui".into(),
            document_id: "1".into(),
            product_name: "Aluguel Médio".into(),
            staff_name: "Único".into(),
            scent: String::new(),
            note: String::new(),
            created_at: String::new(),
            updated_at: None,
            active: false,
        };
        let prices = PriceTable::default();
        assert_eq!(OrderColumn::Value.cell_text(&order, &prices), "50");
        assert_eq!(OrderColumn::Id.cell_text(&order, &prices), "12");

        let unknown = Order {
            product_name: "Carvão".into(),
            ..order
        };
        assert_eq!(OrderColumn::Value.cell_text(&unknown, &prices), "0");
    }
}
