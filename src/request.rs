//! Abstraction over an inbound request.
//!
//! The populator only needs the authenticated user, a flattened body
//! mapping, named attributes and uploaded files. [`InMemoryRequest`] is a
//! builder-style implementation for callers that already hold these parts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::file::UploadedFile;
use crate::value::{Mapping, ObjectMap, Value};

/// The authenticated user attached to a request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthUser {
    /// The user's identifier
    pub id: Value,
    /// Any further user attributes
    pub attributes: ObjectMap,
}

impl AuthUser {
    /// Create a user with the given id and no attributes
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            attributes: ObjectMap::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl From<AuthUser> for Value {
    fn from(user: AuthUser) -> Self {
        let mut map = user.attributes;
        map.insert("id".to_string(), user.id);
        Self::Object(map)
    }
}

/// What the populator reads from a request
pub trait Request {
    /// The authenticated user, if any
    fn user(&self) -> Option<&AuthUser>;

    /// The flattened request body
    fn input(&self) -> Mapping;

    /// A named request attribute: body input first, then route attributes
    fn attribute(&self, name: &str) -> Option<Value> {
        self.input().get(name).cloned()
    }

    /// Uploaded file(s) under `name`: a single `Value::File`, or an array of
    /// them
    fn file(&self, name: &str) -> Option<Value>;

    /// Whether a file was uploaded under `name`
    fn has_file(&self, name: &str) -> bool {
        self.file(name).is_some()
    }
}

/// A request assembled in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequest {
    user: Option<AuthUser>,
    input: Mapping,
    attributes: Mapping,
    files: BTreeMap<String, Vec<UploadedFile>>,
}

impl InMemoryRequest {
    /// An empty, unauthenticated request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an authenticated user
    #[must_use]
    pub fn with_user(mut self, user: AuthUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Replace the whole body
    #[must_use]
    pub fn with_body(mut self, body: Mapping) -> Self {
        self.input = body;
        self
    }

    /// Set one body input
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input.insert(key.into(), value.into());
        self
    }

    /// Set a route attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add an uploaded file under `name`; repeated calls build a list
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, file: UploadedFile) -> Self {
        self.files.entry(name.into()).or_default().push(file);
        self
    }

    /// Add several uploaded files under `name`
    #[must_use]
    pub fn with_files(mut self, name: impl Into<String>, files: Vec<UploadedFile>) -> Self {
        self.files.entry(name.into()).or_default().extend(files);
        self
    }
}

impl Request for InMemoryRequest {
    fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    fn input(&self) -> Mapping {
        self.input.clone()
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.input
            .get(name)
            .or_else(|| self.attributes.get(name))
            .cloned()
    }

    fn file(&self, name: &str) -> Option<Value> {
        match self.files.get(name)?.as_slice() {
            [] => None,
            [single] => Some(Value::File(single.clone())),
            many => Some(Value::Array(many.iter().cloned().map(Value::File).collect())),
        }
    }
}
