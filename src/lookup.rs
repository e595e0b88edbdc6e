//! Consulta do link externo de uma função na tabela `APP` do Supabase.
//!
//! A consulta é uma tarefa única: `request` devolve um `Receiver` que recebe
//! exatamente um resultado. No nativo roda numa thread com `reqwest`; no WASM
//! usa `fetch` do navegador.

use serde::Deserialize;
use std::sync::mpsc::{self, Receiver};
use thiserror::Error;

pub const URL_VAR: &str = "LEX_QUIZ_SUPABASE_URL";
pub const KEY_VAR: &str = "LEX_QUIZ_SUPABASE_ANON_KEY";

const TABLE: &str = "APP";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Supabase não configurado (LEX_QUIZ_SUPABASE_URL / LEX_QUIZ_SUPABASE_ANON_KEY)")]
    NotConfigured,
    #[cfg(not(target_arch = "wasm32"))]
    #[error("erro de rede: {0}")]
    Http(#[from] reqwest::Error),
    #[error("fetch falhou: {0}")]
    Fetch(String),
    #[error("Supabase devolveu HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("nenhuma linha encontrada")]
    MissingRow,
    #[error("link vazio")]
    EmptyLink,
    #[error("resposta JSON inválida: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a consulta terminou sem resultado")]
    Disconnected,
}

pub type LookupResult = Result<String, LookupError>;

/// Colaborador de consulta externa.
pub trait LinkLookup {
    fn request(&self, function_name: &str) -> Receiver<LookupResult>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|s| !s.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(URL_VAR).ok();
        let key = std::env::var(KEY_VAR).ok();
        Self::from_values(url.as_deref(), key.as_deref())
    }

    // No navegador não há env: os valores entram no build.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            option_env!("LEX_QUIZ_SUPABASE_URL"),
            option_env!("LEX_QUIZ_SUPABASE_ANON_KEY"),
        )
    }

    /// Endpoint REST da tabela, sem query.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{TABLE}", self.url)
    }
}

/// Pares da query PostgREST que selecionam o link de uma função.
pub fn row_query(function_name: &str) -> [(&'static str, String); 2] {
    [
        ("select", "link".to_string()),
        ("funcao", format!("eq.{function_name}")),
    ]
}

#[derive(Debug, Deserialize)]
struct LinkRow {
    link: Option<String>,
}

/// Interpreta a resposta HTTP da consulta de uma linha.
pub fn parse_link_row(status: u16, body: &str) -> LookupResult {
    // PostgREST responde 406 quando o objeto único não existe
    if status == 406 {
        return Err(LookupError::MissingRow);
    }
    if !(200..300).contains(&status) {
        return Err(LookupError::Status {
            status,
            body: body.trim().to_string(),
        });
    }

    let row: Option<LinkRow> = serde_json::from_str(body)?;
    let link = row.ok_or(LookupError::MissingRow)?.link.unwrap_or_default();
    let link = link.trim();
    if link.is_empty() {
        return Err(LookupError::EmptyLink);
    }
    Ok(link.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct SupabaseLookup {
    config: Option<SupabaseConfig>,
}

impl SupabaseLookup {
    pub fn new(config: Option<SupabaseConfig>) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(SupabaseConfig::from_env())
    }
}

impl LinkLookup for SupabaseLookup {
    fn request(&self, function_name: &str) -> Receiver<LookupResult> {
        let (tx, rx) = mpsc::channel();

        let Some(config) = self.config.clone() else {
            let _ = tx.send(Err(LookupError::NotConfigured));
            return rx;
        };
        let query = row_query(function_name);

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(fetch_row(&config, &query));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(fetch_row(&config, &query).await);
        });

        rx
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_row(config: &SupabaseConfig, query: &[(&str, String)]) -> LookupResult {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(config.table_url())
        .query(query)
        .header("apikey", &config.anon_key)
        .bearer_auth(&config.anon_key)
        .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
        .send()?;

    let status = response.status().as_u16();
    let body = response.text()?;
    parse_link_row(status, &body)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_row(config: &SupabaseConfig, query: &[(&str, String)]) -> LookupResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let fetch_err = |err: wasm_bindgen::JsValue| LookupError::Fetch(format!("{err:?}"));

    let query = query
        .iter()
        .map(|(key, value)| format!("{key}={}", String::from(js_sys::encode_uri_component(value))))
        .collect::<Vec<_>>()
        .join("&");
    let url = format!("{}?{query}", config.table_url());

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(fetch_err)?;
    let headers = request.headers();
    headers.set("apikey", &config.anon_key).map_err(fetch_err)?;
    headers
        .set("Authorization", &format!("Bearer {}", config.anon_key))
        .map_err(fetch_err)?;
    headers.set("Accept", SINGLE_OBJECT).map_err(fetch_err)?;

    let window = web_sys::window().ok_or_else(|| LookupError::Fetch("sem window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_err)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| LookupError::Fetch("resposta não é um Response".into()))?;

    let text = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?
        .as_string()
        .unwrap_or_default();

    parse_link_row(response.status(), &text)
}
