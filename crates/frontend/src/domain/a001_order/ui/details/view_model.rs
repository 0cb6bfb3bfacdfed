use crate::domain::a001_order::api::{self, Catalogs};
use crate::shared::api_utils::report_error;
use contracts::domain::a001_order::aggregate::{Order, OrderDto, OrderId};
use contracts::domain::a001_order::error::OrderError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Что делает нажатие "Salvar"
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStep {
    /// Предыдущее сохранение еще не завершилось
    Busy,
    /// Незаполненные поля: показываем сообщение, запрос не отправляем
    Invalid(OrderError),
    Send(OrderDto),
}

pub fn save_step(saving: bool, form: &OrderDto) -> SaveStep {
    if saving {
        return SaveStep::Busy;
    }
    match form.validate() {
        Ok(()) => SaveStep::Send(form.clone()),
        Err(e) => SaveStep::Invalid(e),
    }
}

/// ViewModel модалки редактирования заказа
#[derive(Clone, Copy)]
pub struct OrderEditViewModel {
    pub id: OrderId,
    pub form: RwSignal<OrderDto>,
    pub catalogs: RwSignal<Catalogs>,
    pub saving: RwSignal<bool>,
}

impl OrderEditViewModel {
    /// Форма заполняется из состояния списка, а не из текста строки таблицы
    pub fn new(order: &Order, catalogs: Catalogs) -> Self {
        Self {
            id: order.id,
            form: RwSignal::new(order.to_dto()),
            catalogs: RwSignal::new(catalogs),
            saving: RwSignal::new(false),
        }
    }

    /// Каталоги перечитываются при открытии, чтобы списки были актуальными
    pub fn refresh_catalogs(&self) {
        let catalogs = self.catalogs;
        spawn_local(async move {
            match api::fetch_catalogs().await {
                Ok(fresh) => catalogs.set(fresh),
                Err(e) => log::error!("Erro ao carregar catálogos: {}", e),
            }
        });
    }

    /// PUT /api/pedido/{id}; при успехе вызывает `on_saved`
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = match save_step(self.saving.get_untracked(), &self.form.get_untracked()) {
            SaveStep::Busy => return,
            SaveStep::Invalid(e) => {
                report_error("Validação do pedido", &e);
                return;
            }
            SaveStep::Send(dto) => dto,
        };

        let id = self.id;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::update_order(id, &current).await {
                Ok(()) => on_saved.run(()),
                Err(e) => report_error("Erro na atualização", &e),
            }
            saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OrderDto {
        OrderDto {
            nome: "Ana".into(),
            rg: "12.345.678-9".into(),
            produto: "Reposição".into(),
            rosh: "Mix".into(),
            essencia: "Menta".into(),
            observacao: "Mesa 3".into(),
        }
    }

    #[test]
    fn test_second_save_while_saving_is_ignored() {
        assert_eq!(save_step(true, &filled()), SaveStep::Busy);
        assert_eq!(save_step(true, &OrderDto::default()), SaveStep::Busy);
    }

    #[test]
    fn test_missing_fields_reach_validation_message() {
        let form = OrderDto {
            nome: "  ".into(),
            ..filled()
        };
        match save_step(false, &form) {
            SaveStep::Invalid(e) => assert!(e.is_validation()),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_form_is_sent() {
        assert_eq!(save_step(false, &filled()), SaveStep::Send(filled()));
    }
}
