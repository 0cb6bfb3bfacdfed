pub mod state;

use crate::domain::a001_order::api::{self, Catalogs};
use crate::domain::a001_order::columns::OrderColumn;
use crate::domain::a001_order::ui::details::OrderEditModal;
use crate::domain::a001_order::ui::form::{focus_input, OrderCreateForm, CREATE_FIELDS};
use crate::domain::a001_order::view_policy::TableRowView;
use crate::shared::api_utils::{confirm, report_error};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_order::aggregate::{Order, OrderDto, OrderId};
use contracts::shared::config::panel_config;
use leptos::prelude::*;
use state::{create_state, LoadMode};
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este pedido?";

/// Рабочий экран: заказы за период, форма нового заказа и действия по строкам
#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (catalogs, set_catalogs) = signal(Catalogs::default());
    let (editing, set_editing) = signal::<Option<Order>>(None);
    let form = RwSignal::new(OrderDto::default());

    let load = move |mode: LoadMode| {
        spawn_local(async move {
            match api::fetch_working_set().await {
                Ok(orders) => {
                    log::debug!("Pedidos carregados: {}", orders.len());
                    state.update(|s| s.apply_loaded(orders, mode));
                    set_error.set(None);
                }
                Err(e) => {
                    // Состояние не трогаем: таблица остается как была
                    log::error!("Erro ao carregar pedidos: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let load_catalogs = move || {
        spawn_local(async move {
            match api::fetch_catalogs().await {
                Ok(c) => set_catalogs.set(c),
                Err(e) => log::error!("Erro ao carregar catálogos: {}", e),
            }
        });
    };

    let toggle_active = move |id: OrderId, active: bool| {
        spawn_local(async move {
            match api::set_active(id, active).await {
                Ok(()) => load(LoadMode::KeepPage),
                Err(e) => report_error("Erro ao atualizar status", &e),
            }
        });
    };

    let delete = move |id: OrderId| {
        if !confirm(CONFIRM_DELETE) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(id).await {
                Ok(()) => load(LoadMode::KeepPage),
                Err(e) => report_error("Erro ao excluir pedido", &e),
            }
        });
    };

    let open_edit = move |id: OrderId| {
        if let Some(order) = state.with_untracked(|s| s.find(id).cloned()) {
            set_editing.set(Some(order));
        }
    };

    let reuse = move |order: Order| {
        form.set(order.to_reuse_dto());
        focus_input(CREATE_FIELDS.name);
    };

    load_catalogs();
    load(LoadMode::Reset);

    let column_count = OrderColumn::WORKING.len() + 2;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Pedidos"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.filter.clone()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.filter = v))
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load(LoadMode::Reset)
                    >
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

            <OrderCreateForm
                form=form
                catalogs=catalogs
                on_created=Callback::new(move |_| load(LoadMode::KeepPage))
            />

            <div class="table-wrapper">
                <Table attr:id="tabelaPedidos">
                    <TableHeader>
                        <TableRow>
                            {OrderColumn::WORKING
                                .into_iter()
                                .map(|column| view! {
                                    <SortableHeaderCell
                                        label=column.label()
                                        indicator=Signal::derive(move || state.with(|s| s.sort.indicator(column)))
                                        on_sort=Callback::new(move |_| state.update(|s| s.sort_by(column)))
                                    />
                                })
                                .collect_view()}
                            <TableHeaderCell min_width=60.0>"Ativo"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Ações"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            state
                                .with(|s| s.visible_rows())
                                .into_iter()
                                .map(|row| match row {
                                    TableRowView::Placeholder(message) => view! {
                                        <TableRow>
                                            <TableCell attr:colspan=column_count.to_string()>
                                                <TableCellLayout>{message}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any(),
                                    TableRowView::Order(order) => view! {
                                        <WorkingRowView
                                            order=order
                                            on_toggle=Callback::new(move |(id, active): (OrderId, bool)| toggle_active(id, active))
                                            on_edit=Callback::new(open_edit)
                                            on_delete=Callback::new(delete)
                                            on_reuse=Callback::new(reuse)
                                        />
                                    }
                                    .into_any(),
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                pagination=Signal::derive(move || state.with(|s| s.pagination()))
                on_page_change=Callback::new(move |page| state.update(|s| s.show_page(page)))
            />

            {move || editing.get().map(|order| view! {
                <OrderEditModal
                    order=order
                    catalogs=catalogs.get_untracked()
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        load(LoadMode::KeepPage);
                    })
                    on_cancel=Callback::new(move |_| set_editing.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn WorkingRowView(
    order: Order,
    on_toggle: Callback<(OrderId, bool)>,
    on_edit: Callback<OrderId>,
    on_delete: Callback<OrderId>,
    on_reuse: Callback<Order>,
) -> impl IntoView {
    let id = order.id;
    let prices = &panel_config().prices;
    let cells = OrderColumn::WORKING
        .into_iter()
        .map(|column| {
            let text = column.cell_text(&order, prices);
            view! {
                <TableCell>
                    <TableCellLayout>{text}</TableCellLayout>
                </TableCell>
            }
        })
        .collect_view();
    let active = order.active;

    view! {
        <TableRow>
            {cells}
            <TableCheckbox
                checked=active
                on_change=Callback::new(move |checked| on_toggle.run((id, checked)))
            />
            <TableCell>
                <TableCellLayout>
                    <div class="row-actions">
                        <button
                            class="button button--icon btn-editar"
                            title="Editar"
                            on:click=move |_| on_edit.run(id)
                        >
                            {icon("edit")}
                        </button>
                        <button
                            class="button button--icon btn-excluir"
                            title="Excluir"
                            on:click=move |_| on_delete.run(id)
                        >
                            {icon("delete")}
                        </button>
                        <button
                            class="button button--icon btn-reutilizar"
                            title="Reutilizar"
                            on:click=move |_| on_reuse.run(order.clone())
                        >
                            {icon("copy")}
                        </button>
                    </div>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
