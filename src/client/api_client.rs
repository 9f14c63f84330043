use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;
use log::debug;

use crate::{
    Error,
    error::Result,
};

use super::{
    user::User,
    group::Group,
    group_member::GroupMember,
    post::{Post, PostStatus},
};

/// Thin wrapper over the network boundary. Session credentials ride on
/// the cookie store; no other auth header is used. Every call is a
/// single attempt, retry policy is a caller concern.
pub(crate) struct APIClient {
    base_url: Url,
    client  : Client,
}

impl APIClient {
    pub(crate) fn new(base_url: &Url) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| {
                Error::State(format!("Http error: creating http client error {e}"))
            })?;

        Ok(Self {
            base_url: base_url.clone(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues one request and classifies the outcome: 401 is
    /// `Unauthenticated`, any other non-2xx carries the server's own
    /// message when the body has one, transport and decoding failures
    /// map to `Transport`.
    pub(crate) async fn request(&self,
        method: Method,
        path: &str,
        body: Option<&Value>
    ) -> Result<Value> {
        let url = self.base_url.join(path)?;
        debug!("{} {}", method, url);

        let mut req = self.client.request(method, url)
            .header("Accept", "application/json");
        if let Some(body) = body {
            req = req
                .header("Content-Type", "application/json")
                .json(body);
        }

        let rsp = req.send().await.map_err(|e| {
            Error::Transport(format!("Http error: sending http request error {e}"))
        })?;

        let status = rsp.status();
        let decoded = rsp.json::<Value>().await;

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthenticated(
                "Session is not authenticated".into()
            ));
        }

        if !status.is_success() {
            let message = decoded.ok()
                .as_ref()
                .and_then(body_message)
                .unwrap_or_else(|| {
                    format!("Request failed with status {}", status.as_u16())
                });
            return Err(Error::Request {
                status: status.as_u16(),
                message
            });
        }

        decoded.map_err(|e| {
            Error::Transport(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn request_message(&self,
        method: Method,
        path: &str,
        body: Option<&Value>
    ) -> Result<String> {
        let value = self.request(method, path, body).await?;
        Ok(body_message(&value).unwrap_or_else(|| "OK".to_string()))
    }

    pub(crate) async fn me(&self) -> Result<User> {
        let value = self.request(Method::GET, "/me", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn sign_up(&self, username: &str, password: &str) -> Result<String> {
        #[derive(Serialize)]
        struct RequestData<'a> {
            username: &'a str,
            password: &'a str,
        }

        let data = serde_json::to_value(RequestData { username, password })?;
        self.request_message(Method::POST, "/user", Some(&data)).await
    }

    pub(crate) async fn log_in(&self, username: &str, password: &str) -> Result<String> {
        #[derive(Serialize)]
        struct RequestData<'a> {
            username: &'a str,
            password: &'a str,
        }

        let data = serde_json::to_value(RequestData { username, password })?;
        self.request_message(Method::POST, "/login", Some(&data)).await
    }

    pub(crate) async fn logout(&self) -> Result<String> {
        self.request_message(Method::POST, "/logout", None).await
    }

    pub(crate) async fn groups(&self) -> Result<Vec<Group>> {
        let value = self.request(Method::GET, "/groups", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn my_groups(&self) -> Result<Vec<Group>> {
        let value = self.request(Method::GET, "/mygroups", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn created_groups(&self) -> Result<Vec<Group>> {
        let value = self.request(Method::GET, "/createdgroups", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn create_group(&self, name: &str, description: &str) -> Result<String> {
        #[derive(Serialize)]
        struct RequestData<'a> {
            name: &'a str,
            description: &'a str,
        }

        let data = serde_json::to_value(RequestData { name, description })?;
        self.request_message(Method::POST, "/groups", Some(&data)).await
    }

    pub(crate) async fn join_group(&self, name: &str) -> Result<String> {
        let path = format!("/groups/{}", name);
        self.request_message(Method::POST, &path, None).await
    }

    pub(crate) async fn leave_group(&self, name: &str) -> Result<String> {
        let path = format!("/groups/{}/leave", name);
        self.request_message(Method::DELETE, &path, None).await
    }

    pub(crate) async fn delete_group(&self, name: &str) -> Result<String> {
        let path = format!("/groups/{}", name);
        self.request_message(Method::DELETE, &path, None).await
    }

    pub(crate) async fn members(&self, group_name: &str) -> Result<Vec<GroupMember>> {
        let path = format!("/members/{}", group_name);
        let value = self.request(Method::GET, &path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn posts(&self) -> Result<Vec<Post>> {
        let value = self.request(Method::GET, "/posts", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn group_posts(&self, group_name: &str) -> Result<Vec<Post>> {
        let path = format!("/posts/{}", group_name);
        let value = self.request(Method::GET, &path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn create_post(&self,
        group_name: &str,
        description: &str,
        deadline: &str
    ) -> Result<String> {
        #[derive(Serialize)]
        struct RequestData<'a> {
            name: &'a str,
            description: &'a str,
            deadline: &'a str,
        }

        let data = serde_json::to_value(RequestData {
            name: group_name,
            description,
            deadline
        })?;
        self.request_message(Method::POST, "/posts", Some(&data)).await
    }

    pub(crate) async fn update_post(&self,
        id: u64,
        description: &str,
        deadline: &str,
        status: PostStatus
    ) -> Result<String> {
        #[derive(Serialize)]
        struct RequestData<'a> {
            description: &'a str,
            deadline: &'a str,
            status: &'a str,
        }

        let data = serde_json::to_value(RequestData {
            description,
            deadline,
            status: status.as_str()
        })?;
        let path = format!("/posts/{}", id);
        self.request_message(Method::PUT, &path, Some(&data)).await
    }

    pub(crate) async fn delete_post(&self, id: u64) -> Result<String> {
        let path = format!("/posts/{}", id);
        self.request_message(Method::DELETE, &path, None).await
    }
}

// The service is inconsistent about failure bodies: some endpoints
// answer with a bare JSON string, others with {"message": ...} or
// {"error": ...}.
pub(crate) fn body_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => {
            map.get("message")
                .or_else(|| map.get("error"))
                .and_then(|v| v.as_str())
                .map(|v| v.to_string())
        },
        _ => None
    }
}
