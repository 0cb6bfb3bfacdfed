use crate::shared::icons::icon;
use crate::shared::list_utils::PaginationView;
use leptos::prelude::*;

/// PaginationControls component - ‹ "current / total" ›
///
/// Ничего не рендерит, когда `pagination` = None
/// (одна страница или активный фильтр).
#[component]
pub fn PaginationControls(
    /// Состояние пагинации (страницы с 1)
    #[prop(into)]
    pagination: Signal<Option<PaginationView>>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    move || {
        pagination.get().map(|view| {
            let current = view.current;
            let prev_enabled = view.prev_enabled();
            let next_enabled = view.next_enabled();
            view! {
                <div class="pagination-controls" id="paginacao">
                    <button
                        class="pagination-btn"
                        disabled=!prev_enabled
                        on:click=move |_| {
                            if prev_enabled {
                                on_page_change.run(current - 1);
                            }
                        }
                        title="Página anterior"
                    >
                        {icon("chevron-left")}
                    </button>
                    <span class="pagination-info">{view.label()}</span>
                    <button
                        class="pagination-btn"
                        disabled=!next_enabled
                        on:click=move |_| {
                            if next_enabled {
                                on_page_change.run(current + 1);
                            }
                        }
                        title="Próxima página"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            }
        })
    }
}
