/// Универсальные утилиты для работы со списками (поиск, сортировка, страницы)
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    /// `filter` уже приведен к нижнему регистру.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Фильтрует список по поисковому запросу (пустой запрос - весь список)
pub fn filter_list<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches_filter(filter)).collect()
}

// ============================================================================
// Сравнение ячеек
// ============================================================================

/// Число из текста ячейки: вся строка должна быть числом ("1", "-2.5", "3,75").
/// Даты и документы вида "12.345.678-9" числами не считаются.
pub fn parse_cell_number(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    if normalized.is_empty()
        || !normalized.chars().any(|c| c.is_ascii_digit())
        || !normalized
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Сравнение строк без учета регистра; буквы с диакритикой стоят рядом с базовой
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    let primary = a.chars().map(fold_accent).cmp(b.chars().map(fold_accent));
    primary.then_with(|| a.cmp(&b))
}

/// Числа сравниваются как числа, текст как текст, числа идут раньше текста
/// (порядок должен быть полным, иначе sort_by может паниковать)
pub fn compare_cell_text(a: &str, b: &str) -> Ordering {
    match (parse_cell_number(a), parse_cell_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_text(a, b),
    }
}

// ============================================================================
// Сортировка по колонкам
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ↑",
            SortDirection::Descending => " ↓",
        }
    }
}

/// Состояние сортировки: у каждой колонки свое направление для следующего клика.
///
/// Клик сортирует в текущем направлении колонки и переворачивает его.
/// Стрелку показывает только последняя нажатая колонка.
#[derive(Clone, Debug)]
pub struct ColumnSort<C> {
    next: HashMap<C, SortDirection>,
    active: Option<(C, SortDirection)>,
}

impl<C> Default for ColumnSort<C> {
    fn default() -> Self {
        Self {
            next: HashMap::new(),
            active: None,
        }
    }
}

impl<C: Copy + Eq + Hash> ColumnSort<C> {
    /// Регистрирует клик по заголовку, возвращает направление сортировки
    pub fn toggle(&mut self, column: C) -> SortDirection {
        let direction = self
            .next
            .get(&column)
            .copied()
            .unwrap_or(SortDirection::Ascending);
        self.next.insert(column, direction.flipped());
        self.active = Some((column, direction));
        direction
    }

    pub fn active(&self) -> Option<(C, SortDirection)> {
        self.active
    }

    /// Стрелка для заголовка (" ↑", " ↓" или пусто)
    pub fn indicator(&self, column: C) -> &'static str {
        match self.active {
            Some((active, direction)) if active == column => direction.glyph(),
            _ => "",
        }
    }
}

/// Стабильная сортировка по тексту ячейки
pub fn sort_by_cell_text<T, F>(items: &mut [T], cell_text: F, direction: SortDirection)
where
    F: Fn(&T) -> String,
{
    items.sort_by(|a, b| direction.apply(compare_cell_text(&cell_text(a), &cell_text(b))));
}

// ============================================================================
// Пагинация
// ============================================================================

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Срез страницы (страницы нумеруются с 1)
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Данные для кнопок пагинации
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub current: usize,
    pub total: usize,
}

impl PaginationView {
    /// `None`, если страниц не больше одной
    pub fn new(current: usize, total: usize) -> Option<Self> {
        (total > 1).then_some(Self { current, total })
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }

    pub fn prev_enabled(&self) -> bool {
        self.current > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current < self.total
    }
}

// ============================================================================
// UI
// ============================================================================

/// Поле поиска с кнопкой очистки; фильтр применяется на каждый ввод
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Filtrar pedidos...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                id="filtroPedidos"
                placeholder={placeholder}
                style=move || format!(
                    "width: 280px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| on_change.run(String::new())
                        title="Limpar"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cells_sort_numerically() {
        let mut values = vec!["2", "10", "1"];
        values.sort_by(|a, b| compare_cell_text(a, b));
        assert_eq!(values, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_cell_number("3,5"), Some(3.5));
        assert_eq!(compare_cell_text("10,5", "9.75"), Ordering::Greater);
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(parse_cell_number("12.345.678-9"), None);
        assert_eq!(parse_cell_number("2025-01-10 21:15:00"), None);
        assert_eq!(parse_cell_number("nan"), None);
        assert_eq!(parse_cell_number("inf"), None);
        assert_eq!(parse_cell_number(""), None);
    }

    #[test]
    fn test_numbers_before_text() {
        assert_eq!(compare_cell_text("10", "abc"), Ordering::Less);
        assert_eq!(compare_cell_text("1a", "2"), Ordering::Greater);
        assert_eq!(compare_cell_text("Maria", "ana"), Ordering::Greater);

        let mut values = vec!["1a", "10", "2"];
        values.sort_by(|a, b| compare_cell_text(a, b));
        assert_eq!(values, vec!["2", "10", "1a"]);
    }

    #[test]
    fn test_accents_sort_near_base_letter() {
        let mut values = vec!["Zeca", "Álvaro", "Bruno"];
        values.sort_by(|a, b| compare_cell_text(a, b));
        assert_eq!(values, vec!["Álvaro", "Bruno", "Zeca"]);
    }

    #[test]
    fn test_toggle_flips_per_column() {
        let mut sort: ColumnSort<u8> = ColumnSort::default();
        assert_eq!(sort.toggle(1), SortDirection::Ascending);
        assert_eq!(sort.toggle(1), SortDirection::Descending);
        assert_eq!(sort.toggle(2), SortDirection::Ascending);
        // колонка 1 помнит свое направление
        assert_eq!(sort.toggle(1), SortDirection::Ascending);
    }

    #[test]
    fn test_single_indicator() {
        let mut sort: ColumnSort<u8> = ColumnSort::default();
        assert_eq!(sort.indicator(1), "");
        sort.toggle(1);
        assert_eq!(sort.indicator(1), " ↑");
        sort.toggle(2);
        assert_eq!(sort.indicator(1), "");
        assert_eq!(sort.indicator(2), " ↑");
        sort.toggle(2);
        assert_eq!(sort.indicator(2), " ↓");
    }

    #[test]
    fn test_sort_twice_reverses() {
        let mut items = vec!["b", "c", "a", "10", "2"];
        sort_by_cell_text(&mut items, |s| s.to_string(), SortDirection::Ascending);
        let first = items.clone();
        sort_by_cell_text(&mut items, |s| s.to_string(), SortDirection::Descending);
        let mut reversed = first.clone();
        reversed.reverse();
        assert_eq!(items, reversed);
    }

    #[test]
    fn test_pages() {
        let items: Vec<usize> = (1..=25).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        assert_eq!(page_slice(&items, 1, 10).len(), 10);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_pagination_view() {
        assert_eq!(PaginationView::new(1, 1), None);
        let view = PaginationView::new(3, 3).unwrap();
        assert_eq!(view.label(), "3 / 3");
        assert!(view.prev_enabled());
        assert!(!view.next_enabled());
        let first = PaginationView::new(1, 3).unwrap();
        assert!(!first.prev_enabled());
        assert!(first.next_enabled());
    }
}
