//! TopHeader component - application top navigation bar.
//!
//! Contains the application title and one tab per panel view.

use crate::layout::global_context::{AppGlobalContext, PanelView};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn view_icon(view: PanelView) -> AnyView {
    match view {
        PanelView::Orders => icon("orders"),
        PanelView::History => icon("history"),
    }
}

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Painel de Pedidos"</span>
            </div>

            <nav class="top-header__tabs">
                {PanelView::ALL
                    .into_iter()
                    .map(|view| view! {
                        <button
                            class="top-header__tab"
                            class=("top-header__tab--active", move || ctx.active.get() == view)
                            on:click=move |_| ctx.activate(view)
                        >
                            {view_icon(view)}
                            <span>{view.title()}</span>
                        </button>
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
