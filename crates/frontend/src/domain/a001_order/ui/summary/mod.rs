use crate::domain::a001_order::view_policy::MSG_SUMMARY_UNAVAILABLE;
use crate::shared::components::table::format_brl;
use crate::shared::components::table_totals_row::TableTotalsRow;
use contracts::domain::a001_order::summary::Summary;
use leptos::prelude::*;
use thaw::*;

/// Итоги по видимым строкам истории
#[component]
pub fn OrderSummary(#[prop(into)] summary: Signal<Summary>) -> impl IntoView {
    view! {
        <div class="order-summary" id="resumoPedidos">
            <h3 class="order-summary__title">"Resumo"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=180.0>"Produto"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Quantidade"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || match summary.get() {
                        Summary::Unavailable => view! {
                            <TableRow>
                                <TableCell attr:colspan="3">
                                    <TableCellLayout>{MSG_SUMMARY_UNAVAILABLE}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                        .into_any(),
                        Summary::Lines { lines, quantity_general, total_general } => view! {
                            {lines
                                .into_iter()
                                .map(|line| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{line.product_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{line.quantity}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_brl(line.total)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                })
                                .collect_view()}
                            <TableTotalsRow>
                                <td><strong>"Total Geral"</strong></td>
                                <td><strong>{quantity_general}</strong></td>
                                <td><strong>{format_brl(total_general)}</strong></td>
                            </TableTotalsRow>
                        }
                        .into_any(),
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
