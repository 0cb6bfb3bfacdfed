use leptos::prelude::*;

/// Компонент строки итогов для таблиц
///
/// Использует Leptos `children` для гибкого содержимого.
/// Рендерит <tr> со стилями строки итогов.
///
/// # Пример использования
/// ```ignore
/// <TableTotalsRow>
///     <td>"Total Geral"</td>
///     <td>{quantity_general}</td>
///     <td>{format_brl(total_general)}</td>
/// </TableTotalsRow>
/// ```
#[component]
pub fn TableTotalsRow(
    /// Содержимое строки (td элементы)
    children: Children,
) -> impl IntoView {
    view! {
        <tr class="table__totals-row table-total">
            {children()}
        </tr>
    }
}
