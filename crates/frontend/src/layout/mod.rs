pub mod global_context;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |   TopHeader (Pedidos | Histórico)        |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class="app-main">
                    {center}
                </div>
            </div>
        </div>
    }
}
