use crate::{
    GameSnapshot, LegalMoves, MoveRequest, PieceId, ServiceError, protocol::error_message,
};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// The remote game service: rules engine and authoritative game state.
pub trait GameService: Send + Sync {
    fn fetch_snapshot(&self) -> Result<GameSnapshot, ServiceError>;
    fn fetch_legal_moves(&self, piece_id: PieceId) -> Result<LegalMoves, ServiceError>;
    fn commit_move(&self, request: &MoveRequest) -> Result<GameSnapshot, ServiceError>;
    fn reset(&self) -> Result<(), ServiceError>;
}

/// [`GameService`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpGameService {
    client: Client,
    base_url: String,
}

impl HttpGameService {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<Response, ServiceError> {
        log::debug!("{method} {path}");
        let response = request.send().map_err(|e| {
            log::warn!("{method} {path}: {e}");
            ServiceError::Network(e.to_string())
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().unwrap_or_default();
        let error = ServiceError::Status {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        };
        log::warn!("{method} {path}: {status}: {error}");
        Err(error)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let response = self.send("GET", path, self.client.get(self.url(path)))?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let body = response
        .bytes()
        .map_err(|e| ServiceError::Network(e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
}

impl GameService for HttpGameService {
    fn fetch_snapshot(&self) -> Result<GameSnapshot, ServiceError> {
        self.get("/state")
    }

    fn fetch_legal_moves(&self, piece_id: PieceId) -> Result<LegalMoves, ServiceError> {
        self.get(&format!("/valid-moves/{piece_id}"))
    }

    fn commit_move(&self, request: &MoveRequest) -> Result<GameSnapshot, ServiceError> {
        let path = "/move";
        let response = self.send("POST", path, self.client.post(self.url(path)).json(request))?;
        decode(response)
    }

    fn reset(&self) -> Result<(), ServiceError> {
        let path = "/reset";
        let _response = self.send("POST", path, self.client.post(self.url(path)))?;
        Ok(())
    }
}
