use crate::domain::a001_order::columns::OrderColumn;
use crate::domain::a001_order::view_policy::{
    row_search_text, FilterStrategy, InsertionPolicy, TableRowView, MSG_NO_HISTORY,
    MSG_NO_MATCH_HISTORY,
};
use crate::shared::list_utils::{
    filter_list, sort_by_cell_text, ColumnSort, Searchable, SortDirection,
};
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::price_table::PriceTable;
use contracts::domain::a001_order::summary::{compute_summary, Summary};
use leptos::prelude::*;

pub const INSERTION: InsertionPolicy = InsertionPolicy::Prepend;
pub const FILTER: FilterStrategy = FilterStrategy::Hide;

/// Строка истории вместе с предвычисленным текстом для поиска
#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub order: Order,
    search_text: String,
}

impl HistoryRow {
    fn new(order: Order, prices: &PriceTable) -> Self {
        let search_text = row_search_text(&order, &OrderColumn::HISTORY, prices);
        Self { order, search_text }
    }
}

impl Searchable for HistoryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.search_text.contains(filter)
    }
}

#[derive(Clone, Debug)]
pub struct HistoryState {
    /// Строки в порядке отображения (после вставки и сортировок), включая скрытые
    pub rows: Vec<HistoryRow>,
    pub filter: String,
    pub sort: ColumnSort<OrderColumn>,
    pub prices: PriceTable,
    pub is_loaded: bool,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::with_prices(contracts::shared::config::panel_config().prices.clone())
    }
}

impl HistoryState {
    pub fn with_prices(prices: PriceTable) -> Self {
        Self {
            rows: Vec::new(),
            filter: String::new(),
            sort: ColumnSort::default(),
            prices,
            is_loaded: false,
        }
    }

    /// Заменяет строки ответом сервера; активная сортировка применяется заново
    pub fn apply_loaded(&mut self, orders: Vec<Order>) {
        let prices = &self.prices;
        self.rows = INSERTION
            .arrange(orders)
            .into_iter()
            .map(|order| HistoryRow::new(order, prices))
            .collect();
        self.is_loaded = true;
        if let Some((column, direction)) = self.sort.active() {
            self.sort_rows(column, direction);
        }
    }

    /// Строки, не скрытые фильтром
    pub fn visible(&self) -> Vec<&Order> {
        let term = FILTER.normalize(&self.filter);
        filter_list(&self.rows, &term)
            .into_iter()
            .map(|row| &row.order)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// Видимые строки плюс одна информационная строка, если показывать нечего.
    /// До первой успешной загрузки таблица пуста.
    pub fn table_rows(&self) -> Vec<TableRowView> {
        if !self.is_loaded {
            return Vec::new();
        }
        if self.rows.is_empty() {
            return vec![TableRowView::Placeholder(MSG_NO_HISTORY)];
        }
        let mut rows: Vec<TableRowView> = self
            .visible()
            .into_iter()
            .cloned()
            .map(TableRowView::Order)
            .collect();
        if rows.is_empty() {
            rows.push(TableRowView::Placeholder(MSG_NO_MATCH_HISTORY));
        }
        rows
    }

    pub fn summary(&self) -> Summary {
        compute_summary(self.visible(), &self.prices)
    }

    /// Сортирует все строки (и скрытые тоже) в текущем порядке отображения
    pub fn sort_by(&mut self, column: OrderColumn) {
        let direction = self.sort.toggle(column);
        self.sort_rows(column, direction);
    }

    fn sort_rows(&mut self, column: OrderColumn, direction: SortDirection) {
        let prices = &self.prices;
        sort_by_cell_text(
            &mut self.rows,
            |row| column.cell_text(&row.order, prices),
            direction,
        );
    }
}

pub fn create_state() -> RwSignal<HistoryState> {
    RwSignal::new(HistoryState::default())
}
