//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Nome"
//!     indicator=Signal::derive(move || state.with(|s| s.sort.indicator(OrderColumn::Customer)))
//!     on_sort=Callback::new(move |_| state.update(|s| s.sort_by(OrderColumn::Customer)))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки: клик сортирует, стрелка (↑/↓) показывается
/// только у последней отсортированной колонки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Стрелка направления (" ↑", " ↓" или пусто)
    #[prop(into)]
    indicator: Signal<&'static str>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 60.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; user-select: none;"
                on:click=move |_| on_sort.run(())
            >
                {label}
                {move || indicator.get()}
            </div>
        </TableHeaderCell>
    }
}
