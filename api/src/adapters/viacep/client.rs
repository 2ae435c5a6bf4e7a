//! ViaCEP API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{AddressLookup, AddressRecord};
use crate::error::LookupError;

/// Implementation of the address lookup port over the ViaCEP API
pub struct ViaCepClient {
    http: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self, postal_code: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, encode(postal_code))
    }
}

/// Response body from `GET /ws/{cep}/json/`
///
/// Unknown codes come back as `200 {"erro": true}`.
#[derive(Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepResponse {
    fn is_error(&self) -> bool {
        match &self.erro {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(flag)) => *flag,
            // Older deployments send the string "true"
            Some(_) => true,
        }
    }
}

impl From<ViaCepResponse> for AddressRecord {
    fn from(r: ViaCepResponse) -> Self {
        AddressRecord {
            neighborhood: r.bairro,
            postal_code: r.cep,
            city: r.localidade,
            street: r.logradouro,
            region: r.uf,
            complement: r.complemento,
        }
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(&self, postal_code: &str) -> Result<AddressRecord, LookupError> {
        let response = self.http.get(self.lookup_url(postal_code)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Deserialization(e.to_string()))?;

        if body.is_error() {
            return Err(LookupError::NotFound(postal_code.to_string()));
        }

        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn lookup_url_trims_trailing_slash() {
        let client = ViaCepClient::new("https://viacep.com.br/".to_string());
        assert_eq!(
            client.lookup_url("20941150"),
            "https://viacep.com.br/ws/20941150/json/"
        );
    }

    #[test]
    fn lookup_url_encodes_code() {
        let client = ViaCepClient::new("http://localhost".to_string());
        assert_eq!(client.lookup_url("a/b"), "http://localhost/ws/a%2Fb/json/");
    }

    #[tokio::test]
    async fn lookup_maps_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/20941150/json/");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "cep": "20941-150",
                        "logradouro": "Rua Bela",
                        "complemento": "",
                        "bairro": "Vasco da Gama",
                        "localidade": "Rio de Janeiro",
                        "uf": "RJ"
                    }));
            })
            .await;
        let client = ViaCepClient::new(server.base_url());

        let record = client.lookup("20941150").await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.neighborhood, "Vasco da Gama");
        assert_eq!(record.postal_code, "20941-150");
        assert_eq!(record.city, "Rio de Janeiro");
        assert_eq!(record.street, "Rua Bela");
        assert_eq!(record.region, "RJ");
        assert_eq!(record.complement, "");
    }

    #[tokio::test]
    async fn lookup_reports_unknown_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/99999999/json/");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "erro": true }));
            })
            .await;
        let client = ViaCepClient::new(server.base_url());

        let result = client.lookup("99999999").await;

        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[tokio::test]
    async fn lookup_reports_string_error_flag() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/00000000/json/");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "erro": "true" }));
            })
            .await;
        let client = ViaCepClient::new(server.base_url());

        let result = client.lookup("00000000").await;

        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[tokio::test]
    async fn lookup_reports_bad_request() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/99999/json/");
                then.status(400).body("Bad Request");
            })
            .await;
        let client = ViaCepClient::new(server.base_url());

        let result = client.lookup("99999").await;

        assert!(matches!(result, Err(LookupError::Api { status: 400, .. })));
    }

    #[tokio::test]
    async fn lookup_reports_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/20941150/json/");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;
        let client = ViaCepClient::new(server.base_url());

        let result = client.lookup("20941150").await;

        assert!(matches!(result, Err(LookupError::Deserialization(_))));
    }
}
