use leptos::prelude::*;

/// Переключатель в ячейке таблицы (флаг "ativo")
///
/// Рендерит <td> со switch-чекбоксом внутри.
/// Состояние не откатывается при ошибке: после клика чекбокс показывает
/// то, что выбрал пользователь, пока список не будет перезагружен.
///
/// # Пример использования
/// ```ignore
/// <TableCheckbox
///     checked=order.active
///     on_change=Callback::new(move |checked| toggle_active(id, checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    /// Начальное состояние из данных
    checked: bool,
    /// Callback вызывается при изменении состояния
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <label class="switch-toggle">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=checked
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span class="slider-toggle"></span>
            </label>
        </td>
    }
}
