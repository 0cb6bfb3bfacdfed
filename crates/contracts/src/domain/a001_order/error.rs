use thiserror::Error;

/// Ошибки работы с заказами на клиенте
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// Незаполненные обязательные поля формы; запрос не отправляется
    #[error("Por favor, preencha todos os campos obrigatórios: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Erro na conexão com o servidor: {0}")]
    Network(String),

    #[error("Erro do servidor (HTTP {status})")]
    Http { status: u16 },

    /// Сервер отклонил операцию по сессии пользователя (401/403)
    #[error("Sem permissão para executar esta operação.")]
    Unauthorized,

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    #[error("Configuração inválida: {0}")]
    Config(String),
}

impl OrderError {
    /// Классификация ответа с неуспешным статусом
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => OrderError::Unauthorized,
            _ => OrderError::Http { status },
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, OrderError::MissingFields(_))
    }
}
