use super::view_model::OrderEditViewModel;
use crate::domain::a001_order::api::Catalogs;
use crate::domain::a001_order::ui::form::{OrderFields, EDIT_FIELDS};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_order::aggregate::Order;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderEditModal(
    order: Order,
    catalogs: Catalogs,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OrderEditViewModel::new(&order, catalogs);
    vm.refresh_catalogs();

    view! {
        <Modal title=format!("Editar pedido #{}", order.id) on_close=on_cancel>
            <form
                id="formEditar"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <OrderFields form=vm.form catalogs=vm.catalogs ids=EDIT_FIELDS />

                <div class="details-actions">
                    // Единственная submit-кнопка формы: сохранение идет только через on:submit
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=vm.saving
                    >
                        {icon("save")}
                        " Salvar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        " Cancelar"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
