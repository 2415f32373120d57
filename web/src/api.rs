//! Annotated parameter structs and business methods.
//!
//! `build.rs` runs the generator over this file; the output is included at
//! the bottom and adds `fill_and_validate`, the `wrapper_*` methods and
//! `serve_http` to the types below.

use apigen_runtime::{ApiError, BoxError, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Parameters of `/user/profile`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileParams {
    /// apivalidator: required
    pub login: String,
}

/// Parameters of `/user/create` on `MyApi`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateParams {
    /// apivalidator: required,min=10
    pub login: String,
    /// apivalidator: paramname=full_name
    pub name: String,
    /// apivalidator: enum=user|moderator|admin,default=user
    pub status: String,
    /// apivalidator: min=0,max=128
    pub age: i32,
}

/// Parameters of `/user/search`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// apivalidator: max=50
    pub query: String,
    /// apivalidator: default=10,min=1,max=100
    pub limit: u32,
}

/// Parameters of `/user/create` on `OtherApi`.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherCreateParams {
    /// apivalidator: required,min=3
    pub username: String,
    /// apivalidator: paramname=account_name
    pub name: String,
    /// apivalidator: enum=warrior|sorcerer|rouge,default=warrior
    pub class: String,
    /// apivalidator: min=1,max=50
    pub level: i32,
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Numeric id.
    pub id: u64,
    /// Unique login.
    pub login: String,
    /// Display name.
    pub full_name: String,
    /// Role.
    pub status: String,
}

/// Answer of a successful creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    /// Id of the created user.
    pub id: u64,
}

/// A character created through `OtherApi`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherUser {
    /// Numeric id.
    pub id: u64,
    /// Login.
    pub login: String,
    /// Account name.
    pub full_name: String,
    /// Character level.
    pub level: i32,
}

/// In-memory user service.
#[derive(Debug)]
pub struct MyApi {
    users: RwLock<HashMap<String, User>>,
    next_id: AtomicU64,
}

impl Default for MyApi {
    fn default() -> Self {
        let seed = User {
            id: 42,
            login: "alice".into(),
            full_name: "Alice Liddell".into(),
            status: "user".into(),
        };
        Self {
            users: RwLock::new(HashMap::from([(seed.login.clone(), seed)])),
            next_id: AtomicU64::new(43),
        }
    }
}

fn storage_error() -> ApiError {
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable")
}

impl MyApi {
    /// apigen:api {"url": "/user/profile", "auth": false}
    pub fn profile(&self, params: ProfileParams) -> Result<User, BoxError> {
        if params.login == "bad_user" {
            return Err("bad user".into());
        }
        let users = self.users.read().map_err(|_| storage_error())?;
        users
            .get(&params.login)
            .cloned()
            .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "user not exist").into())
    }

    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: CreateParams) -> Result<NewUser, BoxError> {
        if params.login == "bad_username" {
            return Err("bad user".into());
        }
        let mut users = self.users.write().map_err(|_| storage_error())?;
        if users.contains_key(&params.login) {
            return Err(ApiError::new(StatusCode::CONFLICT, "user exists").into());
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        users.insert(
            params.login.clone(),
            User {
                id,
                login: params.login,
                full_name: params.name,
                status: params.status,
            },
        );
        Ok(NewUser { id })
    }

    /// apigen:api {"url": "/user/search", "method": "GET"}
    pub fn search(&self, params: SearchParams) -> Result<Vec<User>, BoxError> {
        let users = self.users.read().map_err(|_| storage_error())?;
        let mut found: Vec<User> = users
            .values()
            .filter(|u| u.login.contains(&params.query))
            .cloned()
            .collect();
        found.sort_by_key(|u| u.id);
        found.truncate(params.limit as usize);
        Ok(found)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }

    /// Whether no user is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Character service with an async business method.
#[derive(Debug, Default)]
pub struct OtherApi;

impl OtherApi {
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub async fn create(&self, params: OtherCreateParams) -> Result<OtherUser, ApiError> {
        if params.username == "taken" {
            return Err(ApiError::new(StatusCode::CONFLICT, "user exists"));
        }
        Ok(OtherUser {
            id: 12,
            login: params.username,
            full_name: params.name,
            level: params.level,
        })
    }
}

include!(concat!(env!("OUT_DIR"), "/api_gen.rs"));
