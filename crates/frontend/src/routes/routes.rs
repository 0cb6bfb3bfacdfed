use crate::domain::a001_order::ui::history::OrderHistory;
use crate::domain::a001_order::ui::list::OrderList;
use crate::layout::global_context::{AppGlobalContext, PanelView};
use crate::layout::Shell;
use leptos::prelude::*;

/// Содержимое активной вкладки; каждый экран при открытии загружает данные заново
fn active_view(view: PanelView) -> AnyView {
    match view {
        PanelView::Orders => view! { <OrderList /> }.into_any(),
        PanelView::History => view! { <OrderHistory /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || active_view(ctx.active.get()) />
    }
}
