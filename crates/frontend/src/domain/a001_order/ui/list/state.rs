use crate::domain::a001_order::columns::OrderColumn;
use crate::domain::a001_order::view_policy::{
    row_search_text, FilterStrategy, InsertionPolicy, TableRowView, MSG_NO_MATCH_WORKING,
};
use crate::shared::list_utils::{
    page_slice, sort_by_cell_text, total_pages, ColumnSort, PaginationView, Searchable,
    SortDirection,
};
use contracts::domain::a001_order::aggregate::{Order, OrderId};
use contracts::shared::config::panel_config;
use leptos::prelude::*;

pub const INSERTION: InsertionPolicy = InsertionPolicy::Append;
pub const FILTER: FilterStrategy = FilterStrategy::Rebuild;

/// Что делать с текущей страницей после загрузки
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    /// Первая загрузка и кнопка "Atualizar": страница 1
    Reset,
    /// Перезагрузка после изменения заказа: остаемся на странице
    KeepPage,
}

/// Строка рабочего экрана для поиска (без колонки цены)
struct WorkingRow<'a>(&'a Order);

impl Searchable for WorkingRow<'_> {
    fn matches_filter(&self, filter: &str) -> bool {
        row_search_text(self.0, &OrderColumn::WORKING, &panel_config().prices).contains(filter)
    }
}

#[derive(Clone, Debug)]
pub struct WorkingState {
    /// Полный список заказов за период (не только текущая страница)
    pub orders: Vec<Order>,
    pub page: usize,
    pub page_size: usize,
    /// Текст поля фильтра как его ввел пользователь
    pub filter: String,
    pub sort: ColumnSort<OrderColumn>,
}

impl Default for WorkingState {
    fn default() -> Self {
        Self::with_page_size(panel_config().working.page_size)
    }
}

impl WorkingState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            orders: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            filter: String::new(),
            sort: ColumnSort::default(),
        }
    }

    /// Заменяет список новым ответом сервера (новые заказы первыми,
    /// затем активная сортировка по заголовку, если она есть)
    pub fn apply_loaded(&mut self, mut orders: Vec<Order>, mode: LoadMode) {
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        self.orders = INSERTION.arrange(orders);
        self.reapply_sort();
        match mode {
            LoadMode::Reset => self.page = 1,
            LoadMode::KeepPage => self.page = self.page.clamp(1, self.total_pages().max(1)),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.orders.len(), self.page_size)
    }

    pub fn show_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn page_orders(&self) -> &[Order] {
        page_slice(&self.orders, self.page, self.page_size)
    }

    pub fn filter_term(&self) -> String {
        FILTER.normalize(&self.filter)
    }

    pub fn is_filtering(&self) -> bool {
        !self.filter_term().is_empty()
    }

    /// Строки таблицы: текущая страница или все совпадения по фильтру
    pub fn visible_rows(&self) -> Vec<TableRowView> {
        let term = self.filter_term();
        if term.is_empty() {
            return self
                .page_orders()
                .iter()
                .cloned()
                .map(TableRowView::Order)
                .collect();
        }

        let rows: Vec<WorkingRow> = self.orders.iter().map(WorkingRow).collect();
        let mut visible: Vec<TableRowView> = rows
            .iter()
            .filter(|row| row.matches_filter(&term))
            .map(|row| TableRowView::Order(row.0.clone()))
            .collect();
        if visible.is_empty() {
            visible.push(TableRowView::Placeholder(MSG_NO_MATCH_WORKING));
        }
        visible
    }

    /// Кнопки страниц скрыты при активном фильтре
    pub fn pagination(&self) -> Option<PaginationView> {
        if self.is_filtering() {
            return None;
        }
        PaginationView::new(self.page, self.total_pages())
    }

    /// Клик по заголовку: сортирует весь список в памяти
    pub fn sort_by(&mut self, column: OrderColumn) {
        let direction = self.sort.toggle(column);
        self.sort_orders(column, direction);
    }

    /// Стрелка в заголовке должна соответствовать порядку строк и после загрузки
    fn reapply_sort(&mut self) {
        if let Some((column, direction)) = self.sort.active() {
            self.sort_orders(column, direction);
        }
    }

    fn sort_orders(&mut self, column: OrderColumn, direction: SortDirection) {
        let prices = &panel_config().prices;
        sort_by_cell_text(
            &mut self.orders,
            |order| column.cell_text(order, prices),
            direction,
        );
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<WorkingState> {
    RwSignal::new(WorkingState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, name: &str) -> Order {
        Order {
            id: OrderId(id),
            customer_name: name.into(),
            document_id: format!("{id}"),
            product_name: "Reposição".into(),
            staff_name: "Mix".into(),
            scent: "Menta".into(),
            note: "-".into(),
            created_at: "2025-03-01 19:00:00".into(),
            updated_at: None,
            active: false,
        }
    }

    fn loaded(count: i64) -> WorkingState {
        let mut state = WorkingState::with_page_size(10);
        let orders = (1..=count).map(|i| order(i, &format!("Cliente {i}"))).collect();
        state.apply_loaded(orders, LoadMode::Reset);
        state
    }

    fn ids(rows: &[TableRowView]) -> Vec<i64> {
        rows.iter()
            .filter_map(|r| match r {
                TableRowView::Order(o) => Some(o.id.value()),
                TableRowView::Placeholder(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_loaded_newest_first() {
        let state = loaded(3);
        let ids: Vec<i64> = state.orders.iter().map(|o| o.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_pages_of_ten() {
        let mut state = loaded(25);
        assert_eq!(state.visible_rows().len(), 10);
        state.show_page(3);
        assert_eq!(state.visible_rows().len(), 5);
        let pagination = state.pagination().unwrap();
        assert_eq!(pagination.label(), "3 / 3");
        assert!(!pagination.next_enabled());
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let state = loaded(10);
        assert_eq!(state.pagination(), None);
    }

    #[test]
    fn test_filter_searches_whole_list() {
        let mut state = loaded(25);
        state.filter = "cliente 2".into();
        // "Cliente 2" и "Cliente 20".."Cliente 25", хотя на странице 1 только 25..16
        let mut found = ids(&state.visible_rows());
        found.sort();
        assert_eq!(found, vec![2, 20, 21, 22, 23, 24, 25]);
        assert_eq!(state.pagination(), None);
    }

    #[test]
    fn test_filter_no_match_single_placeholder() {
        let mut state = loaded(5);
        state.filter = "zzz".into();
        let rows = state.visible_rows();
        assert_eq!(rows, vec![TableRowView::Placeholder(MSG_NO_MATCH_WORKING)]);
    }

    #[test]
    fn test_clearing_filter_restores_current_page() {
        let mut state = loaded(25);
        state.show_page(2);
        let before = state.visible_rows();
        state.filter = "cliente 1".into();
        assert_ne!(state.visible_rows(), before);
        state.filter = "   ".into();
        assert_eq!(state.visible_rows(), before);
        assert_eq!(state.pagination().unwrap().label(), "2 / 3");
    }

    #[test]
    fn test_keep_page_after_mutation_reload() {
        let mut state = loaded(25);
        state.show_page(3);
        let orders: Vec<Order> = (1..=24).map(|i| order(i, "x")).collect();
        state.apply_loaded(orders, LoadMode::KeepPage);
        assert_eq!(state.page, 3);

        let orders: Vec<Order> = (1..=12).map(|i| order(i, "x")).collect();
        state.apply_loaded(orders, LoadMode::KeepPage);
        assert_eq!(state.page, 2);

        state.apply_loaded(vec![order(1, "x")], LoadMode::Reset);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_sort_by_id_numeric_and_toggle() {
        let mut state = WorkingState::with_page_size(10);
        state.apply_loaded(vec![order(2, "b"), order(10, "a"), order(1, "c")], LoadMode::Reset);
        state.sort_by(OrderColumn::Id);
        assert_eq!(ids(&state.visible_rows()), vec![1, 2, 10]);
        assert_eq!(state.sort.indicator(OrderColumn::Id), " ↑");
        state.sort_by(OrderColumn::Id);
        assert_eq!(ids(&state.visible_rows()), vec![10, 2, 1]);
        assert_eq!(state.sort.indicator(OrderColumn::Id), " ↓");
        state.sort_by(OrderColumn::Customer);
        assert_eq!(ids(&state.visible_rows()), vec![10, 2, 1]);
        assert_eq!(state.sort.indicator(OrderColumn::Id), "");
    }

    #[test]
    fn test_reload_keeps_header_sort() {
        let mut state = WorkingState::with_page_size(10);
        state.apply_loaded(
            vec![order(1, "Carla"), order(2, "Ana"), order(3, "Bruno")],
            LoadMode::Reset,
        );
        state.sort_by(OrderColumn::Customer);
        assert_eq!(ids(&state.visible_rows()), vec![2, 3, 1]);

        state.apply_loaded(
            vec![order(1, "Carla"), order(2, "Ana"), order(3, "Bruno"), order(4, "Beto")],
            LoadMode::KeepPage,
        );
        assert_eq!(ids(&state.visible_rows()), vec![2, 4, 3, 1]);
        assert_eq!(state.sort.indicator(OrderColumn::Customer), " ↑");

        // следующий клик по той же колонке все еще переворачивает порядок
        state.sort_by(OrderColumn::Customer);
        assert_eq!(ids(&state.visible_rows()), vec![1, 3, 4, 2]);
        assert_eq!(state.sort.indicator(OrderColumn::Customer), " ↓");
    }

    #[test]
    fn test_reload_without_sort_is_newest_first() {
        let mut state = WorkingState::with_page_size(10);
        state.apply_loaded(vec![order(1, "a"), order(3, "c")], LoadMode::Reset);
        state.apply_loaded(vec![order(1, "a"), order(2, "b"), order(3, "c")], LoadMode::KeepPage);
        assert_eq!(ids(&state.visible_rows()), vec![3, 2, 1]);
        assert_eq!(state.sort.active(), None);
    }
}
