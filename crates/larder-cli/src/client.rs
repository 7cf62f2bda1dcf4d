use larder_core::recipe::Recipe;
use std::collections::HashMap;
use std::io::Read;

/// Joins a base URL and a path without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Pulls the server's `{"error": ...}` message out of a failure body,
/// falling back to the raw body or the bare status code.
pub fn extract_error(status: u16, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
    }
    if body.trim().is_empty() {
        format!("server returned status {}", status)
    } else {
        format!("server returned status {}: {}", status, body.trim())
    }
}

/// Reads a JSON body from a file path, or stdin when `source` is `-`.
pub fn read_source(source: &str) -> std::io::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
    }
}

pub struct Client {
    agent: ureq::Agent,
    base: String,
}

impl Client {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new(),
            base: server.into(),
        }
    }

    pub fn add(&self, recipe: &Recipe) -> Result<String, String> {
        let resp = self
            .agent
            .post(&endpoint(&self.base, "/recipes"))
            .send_json(recipe)
            .map_err(request_failure)?;
        let body: serde_json::Value = resp.into_json().map_err(|e| e.to_string())?;
        Ok(body["id"].as_str().unwrap_or_default().to_string())
    }

    pub fn get(&self, id: &str) -> Result<Recipe, String> {
        self.agent
            .get(&endpoint(&self.base, &format!("/recipes/{id}")))
            .call()
            .map_err(request_failure)?
            .into_json()
            .map_err(|e| e.to_string())
    }

    pub fn list(&self) -> Result<HashMap<String, Recipe>, String> {
        self.agent
            .get(&endpoint(&self.base, "/recipes"))
            .call()
            .map_err(request_failure)?
            .into_json()
            .map_err(|e| e.to_string())
    }

    pub fn update(&self, id: &str, recipe: &Recipe) -> Result<(), String> {
        self.agent
            .put(&endpoint(&self.base, &format!("/recipes/{id}")))
            .send_json(recipe)
            .map_err(request_failure)?;
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Result<(), String> {
        self.agent
            .delete(&endpoint(&self.base, &format!("/recipes/{id}")))
            .call()
            .map_err(request_failure)?;
        Ok(())
    }

    pub fn health(&self) -> Result<serde_json::Value, String> {
        self.agent
            .get(&endpoint(&self.base, "/health"))
            .call()
            .map_err(request_failure)?
            .into_json()
            .map_err(|e| e.to_string())
    }
}

fn request_failure(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            extract_error(code, &body)
        }
        other => other.to_string(),
    }
}
