//! Shared record fixtures and helpers for the integration tests
#![allow(dead_code)]

use std::path::Path;

use chrono::Utc;
use dto_kit::{Mapping, ObjectMap, Record, RecordHooks, Request, Slot, UploadedFile, Value};
use serde_json::json;

/// Image record with compact keys `name` and `mime`
#[derive(Debug, Clone, Default, Record)]
#[record(keys(name, mime))]
pub struct Image {
    pub name: Slot<String>,
    pub mime: Slot<String>,
    pub size: Slot<i64>,
    pub path: Slot<String>,
}

/// Image record restricted to `name` and `mime`
#[derive(Debug, Clone, Default, Record)]
#[record(only(name, mime))]
pub struct ImageOnly {
    pub name: Slot<String>,
    pub path: Slot<String>,
    pub mime: Slot<String>,
    pub size: Slot<i64>,
}

/// Image record that never touches `size` or `path`
#[derive(Debug, Clone, Default, Record)]
#[record(exclude(size, path))]
pub struct ImageExclude {
    pub name: Slot<String>,
    pub path: Slot<String>,
    pub size: Slot<i64>,
    pub mime: Slot<String>,
    pub file: Slot<String>,
}

/// Record with an implicit owner id and a user id
#[derive(Debug, Clone, Default, Record)]
pub struct ImageDto {
    pub name: Slot<String>,
    pub path: Slot<String>,
    pub id: Slot<Value>,
    #[field(alias = "mime_type")]
    pub mime: Slot<String>,
    pub file: Slot<Option<String>>,
    #[field(name = "imageId")]
    pub image_id: Slot<Option<i64>>,
    #[field(name = "userId")]
    pub user_id: Slot<Option<i64>>,
}

/// Owner id field that is excluded from population
#[derive(Debug, Clone, Default, Record)]
#[record(name = "ImageDto", exclude(imageId))]
pub struct ImageOwnerExcluded {
    pub name: Slot<String>,
    #[field(name = "imageId")]
    pub image_id: Slot<Option<i64>>,
}

/// Record holding the authenticated user itself
#[derive(Debug, Clone, Default, Record)]
pub struct CommentDto {
    pub body: Slot<String>,
    pub user: Slot<Option<ObjectMap>>,
    #[field(name = "userId")]
    pub user_id: Slot<Option<i64>>,
}

/// Record with single and multiple file fields
#[derive(Debug, Clone, Default, Record)]
#[record(files(one, multiple))]
pub struct FilesDto {
    pub one: Slot<Option<UploadedFile>>,
    pub multiple: Slot<Vec<UploadedFile>>,
    pub name: Slot<String>,
}

/// Record listing a file field it does not declare
#[derive(Debug, Clone, Default, Record)]
#[record(files(avatar))]
pub struct ProfileDto {
    pub name: Slot<String>,
}

/// Record whose hooks stamp the time of population
#[derive(Debug, Clone, Default, Record)]
#[record(hooks, name = "ExampleDto")]
pub struct ExampleDto {
    pub name: Slot<String>,
    pub email: Slot<String>,
    pub date: Slot<String>,
}

impl RecordHooks for ExampleDto {
    fn request_data(&self, request: &dyn Request) -> Option<Mapping> {
        let mut data = request.input();
        if let Some(Value::Text(email)) = data.get("email").cloned() {
            data.insert("email".to_string(), Value::Text(email.to_lowercase()));
        }
        Some(data)
    }

    fn after_mapping(&mut self, _data: &Mapping) -> Option<Self> {
        let mut stamped = self.clone();
        stamped.date.set(Utc::now().to_rfc3339());
        Some(stamped)
    }

    fn after_request(&mut self, _request: &dyn Request) -> Option<Self> {
        self.date.set(Utc::now().to_rfc3339());
        None
    }
}

/// Record collecting undeclared properties
#[derive(Debug, Clone, Default, Record)]
pub struct LooseDto {
    pub name: Slot<String>,
    pub tags: Slot<Vec<Value>>,
    pub meta: Slot<ObjectMap>,
    pub ratio: Slot<f64>,
    pub active: Slot<bool>,
    pub note: Slot<Option<String>>,
    #[field(extra)]
    pub extra: ObjectMap,
}

/// The mapping used by the image scenarios
#[must_use]
pub fn image_mapping() -> Mapping {
    dto_kit::mapping_from_json(json!({
        "name": "cool.png",
        "mime": "image/jpeg",
        "size": 123,
        "path": "x",
    }))
}

/// Write a small file into `dir` and return its handle
pub fn upload(dir: &Path, name: &str) -> UploadedFile {
    let path = dir.join(name);
    std::fs::write(&path, b"fake image bytes").unwrap();
    UploadedFile::from_path(&path).unwrap()
}

/// `schema().name()` of a record type
#[must_use]
pub fn record_name<R: Record>() -> &'static str {
    R::schema().name()
}
