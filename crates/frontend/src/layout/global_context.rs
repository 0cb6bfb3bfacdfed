use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Экран панели, выбранный во вкладках
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelView {
    #[default]
    Orders,
    History,
}

impl PanelView {
    pub const ALL: [PanelView; 2] = [PanelView::Orders, PanelView::History];

    pub fn key(self) -> &'static str {
        match self {
            PanelView::Orders => "pedidos",
            PanelView::History => "historico",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelView::Orders => "Pedidos",
            PanelView::History => "Histórico",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PanelView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PanelView::default()),
        }
    }

    /// Читает `?active=` из адреса и дальше держит его в синхроне с вкладкой
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("active").and_then(|key| PanelView::from_key(key)) {
            self.activate(view);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, view: PanelView) {
        log::debug!("activate view: '{}'", view.key());
        self.active.set(view);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
