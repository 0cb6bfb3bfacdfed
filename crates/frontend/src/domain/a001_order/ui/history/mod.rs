pub mod state;

use crate::domain::a001_order::api;
use crate::domain::a001_order::columns::OrderColumn;
use crate::domain::a001_order::ui::summary::OrderSummary;
use crate::domain::a001_order::view_policy::TableRowView;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use state::create_state;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// История заказов со столбцом цены и сводкой по видимым строкам
#[component]
#[allow(non_snake_case)]
pub fn OrderHistory() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_history().await {
                Ok(orders) => {
                    log::debug!("Histórico carregado: {}", orders.len());
                    state.update(|s| s.apply_loaded(orders));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Erro ao carregar histórico: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    load();

    let column_count = OrderColumn::HISTORY.len();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Histórico"}</h1>
                    <span class="header__badge">
                        {move || format!("{} registros", state.with(|s| s.visible_count()))}
                    </span>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.filter.clone()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.filter = v))
                        placeholder="Filtrar histórico..."
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">{icon("info")}</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table-wrapper">
                <Table attr:id="tabelaHistorico">
                    <TableHeader>
                        <TableRow>
                            {OrderColumn::HISTORY
                                .into_iter()
                                .map(|column| view! {
                                    <SortableHeaderCell
                                        label=column.label()
                                        indicator=Signal::derive(move || state.with(|s| s.sort.indicator(column)))
                                        on_sort=Callback::new(move |_| state.update(|s| s.sort_by(column)))
                                    />
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let (rows, prices) = state.with(|s| (s.table_rows(), s.prices.clone()));
                            rows.into_iter()
                                .map(|row| match row {
                                    TableRowView::Placeholder(message) => view! {
                                        <TableRow>
                                            <TableCell attr:colspan=column_count.to_string()>
                                                <TableCellLayout>{message}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any(),
                                    TableRowView::Order(order) => {
                                        let cells = OrderColumn::HISTORY
                                            .into_iter()
                                            .map(|column| {
                                                let text = column.cell_text(&order, &prices);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout>{text}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view();
                                        view! { <TableRow>{cells}</TableRow> }.into_any()
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>

            <OrderSummary summary=Signal::derive(move || state.with(|s| s.summary())) />
        </div>
    }
}
