use serde::{Deserialize, Deserializer, Serialize};

use super::error::OrderError;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор заказа (назначается сервером)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Catalog constants
// ============================================================================

/// Порядок продуктов в сводке
pub const PRODUCT_DISPLAY_ORDER: [&str; 5] = [
    "Aluguel Pequeno",
    "Aluguel Médio",
    "Reposição",
    "Funcionário",
    "Da casa",
];

/// Продукт, подставляемый при повторном использовании заказа
pub const REUSE_PRODUCT: &str = "Reposição";

// ============================================================================
// Aggregate
// ============================================================================

/// Заказ (pedido) в том виде, в котором его отдает `/api/pedidos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "pedidoid")]
    pub id: OrderId,

    #[serde(rename = "name")]
    pub customer_name: String,

    #[serde(rename = "rg")]
    pub document_id: String,

    #[serde(rename = "nome_produto", default, deserialize_with = "string_or_empty")]
    pub product_name: String,

    #[serde(rename = "nome_rosh", default, deserialize_with = "string_or_empty")]
    pub staff_name: String,

    #[serde(rename = "essencia", default, deserialize_with = "string_or_empty")]
    pub scent: String,

    #[serde(rename = "observacao", default, deserialize_with = "string_or_empty")]
    pub note: String,

    #[serde(rename = "criacao", default, deserialize_with = "string_or_empty")]
    pub created_at: String,

    #[serde(rename = "atualizacao", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(rename = "ativo", default, deserialize_with = "flag_from_int_or_bool")]
    pub active: bool,
}

impl Order {
    /// Значения видимых колонок в порядке таблицы (без колонки цены)
    pub fn field_texts(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.customer_name.clone(),
            self.document_id.clone(),
            self.product_name.clone(),
            self.staff_name.clone(),
            self.scent.clone(),
            self.note.clone(),
            self.created_at.clone(),
        ]
    }

    /// Заполнить форму данными заказа (для редактирования)
    pub fn to_dto(&self) -> OrderDto {
        OrderDto {
            nome: self.customer_name.clone(),
            rg: self.document_id.clone(),
            produto: self.product_name.clone(),
            rosh: self.staff_name.clone(),
            essencia: self.scent.clone(),
            observacao: self.note.clone(),
        }
    }

    /// Форма для повторного заказа: те же клиент и rosh, продукт - всегда "Reposição"
    pub fn to_reuse_dto(&self) -> OrderDto {
        OrderDto {
            produto: REUSE_PRODUCT.to_string(),
            ..self.to_dto()
        }
    }
}

/// SQLite отдает `ativo` как 0/1, но допускаем и bool
fn flag_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Null(Option<()>),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
        Flag::Null(_) => false,
    })
}

/// Колонки без NOT NULL приходят как null; в таблице это пустая строка.
/// Числовые значения (старые записи хранят id продукта) превращаются в текст.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса создания/изменения заказа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub nome: String,
    pub rg: String,
    pub produto: String,
    pub rosh: String,
    pub essencia: String,
    pub observacao: String,
}

impl OrderDto {
    /// Все поля обязательны; возвращает список незаполненных
    pub fn validate(&self) -> Result<(), OrderError> {
        let missing: Vec<&'static str> = [
            ("nome", &self.nome),
            ("rg", &self.rg),
            ("produto", &self.produto),
            ("rosh", &self.rosh),
            ("essencia", &self.essencia),
            ("observacao", &self.observacao),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(OrderError::MissingFields(missing))
        }
    }

    /// Копия с обрезанными пробелами (так уходит на сервер)
    pub fn trimmed(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            rg: self.rg.trim().to_string(),
            produto: self.produto.trim().to_string(),
            rosh: self.rosh.trim().to_string(),
            essencia: self.essencia.trim().to_string(),
            observacao: self.observacao.trim().to_string(),
        }
    }
}

/// Тело запроса `PUT /api/pedido/{id}/ativo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFlagRequest {
    pub ativo: u8,
}

impl ActiveFlagRequest {
    pub fn new(active: bool) -> Self {
        Self {
            ativo: u8::from(active),
        }
    }
}
