use crate::domain::a001_order::api::{self, Catalogs};
use crate::shared::api_utils::report_error;
use crate::shared::icons::icon;
use contracts::domain::a001_order::aggregate::OrderDto;
use contracts::shared::document_mask::mask_document;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

/// Идентификаторы полей формы (префикс отличает форму создания от модалки)
#[derive(Clone, Copy)]
pub struct FieldIds {
    pub name: &'static str,
    pub document: &'static str,
    pub product: &'static str,
    pub staff: &'static str,
    pub scent: &'static str,
    pub note: &'static str,
}

pub const CREATE_FIELDS: FieldIds = FieldIds {
    name: "Nome_1",
    document: "RG_1",
    product: "produtos",
    staff: "roshs",
    scent: "Essencia",
    note: "Observacao",
};

pub const EDIT_FIELDS: FieldIds = FieldIds {
    name: "editNome",
    document: "editRG",
    product: "editProduto",
    staff: "editRosh",
    scent: "editEssencia",
    note: "editObservacao",
};

/// Ставит фокус на поле по id (после "Reutilizar")
pub fn focus_input(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

#[component]
fn CatalogSelect(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let id_for_label = id.clone();
    view! {
        <div class="form__group">
            <label class="form__label" for=id_for_label>{label}</label>
            <select
                id=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" hidden=true selected=move || value.get().is_empty()></option>
                {move || options.get().into_iter().map(|option| {
                    let option_label = option.clone();
                    let option_for_selected = option.clone();
                    view! {
                        <option
                            value=option
                            selected=move || value.get() == option_for_selected
                        >
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Поля заказа, общие для формы создания и модалки редактирования
#[component]
pub fn OrderFields(
    form: RwSignal<OrderDto>,
    #[prop(into)] catalogs: Signal<Catalogs>,
    ids: FieldIds,
) -> impl IntoView {
    view! {
        <div class="details-form">
            <div class="form__group">
                <label class="form__label" for=ids.name>"Nome"</label>
                <input
                    type="text"
                    id=ids.name
                    class="form__input"
                    prop:value=move || form.get().nome
                    on:input=move |ev| form.update(|f| f.nome = event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for=ids.document>"RG"</label>
                <input
                    type="text"
                    id=ids.document
                    class="form__input"
                    placeholder="00.000.000-0"
                    prop:value=move || form.get().rg
                    on:input=move |ev| {
                        let masked = mask_document(&event_target_value(&ev));
                        form.update(|f| f.rg = masked);
                    }
                />
            </div>

            <CatalogSelect
                id=ids.product
                label="Produto"
                options=Signal::derive(move || catalogs.get().products)
                value=Signal::derive(move || form.get().produto)
                on_change=Callback::new(move |v| form.update(|f| f.produto = v))
            />

            <CatalogSelect
                id=ids.staff
                label="Rosh"
                options=Signal::derive(move || catalogs.get().staff)
                value=Signal::derive(move || form.get().rosh)
                on_change=Callback::new(move |v| form.update(|f| f.rosh = v))
            />

            <div class="form__group">
                <label class="form__label" for=ids.scent>"Essência"</label>
                <input
                    type="text"
                    id=ids.scent
                    class="form__input"
                    prop:value=move || form.get().essencia
                    on:input=move |ev| form.update(|f| f.essencia = event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for=ids.note>"Observação"</label>
                <textarea
                    id=ids.note
                    class="form__textarea"
                    rows="2"
                    prop:value=move || form.get().observacao
                    on:input=move |ev| form.update(|f| f.observacao = event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Форма нового заказа. Enter внутри формы отправляет ее.
#[component]
pub fn OrderCreateForm(
    form: RwSignal<OrderDto>,
    #[prop(into)] catalogs: Signal<Catalogs>,
    /// Вызывается после успешного создания
    on_created: Callback<()>,
) -> impl IntoView {
    let (submitting, set_submitting) = signal(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            report_error("Validação do pedido", &e);
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_order(&dto).await {
                Ok(()) => {
                    form.set(OrderDto::default());
                    on_created.run(());
                }
                Err(e) => report_error("Erro ao criar pedido", &e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form
            id="formPedido"
            class="order-form"
            on:submit=move |ev| ev.prevent_default()
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    submit();
                }
            }
        >
            <OrderFields form=form catalogs=catalogs ids=CREATE_FIELDS />
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Button
                    on_click=move |_| submit()
                    disabled=submitting
                    attr:id="btnEnviar"
                >
                    {icon("plus")}
                    " Enviar"
                </Button>
            </div>
        </form>
    }
}
