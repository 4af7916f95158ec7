//! Test helpers: build the app over a scratch directory for integration tests.
//!
//! Run from workspace root: `cargo test -p picboard-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use picboard_api::setup;
use picboard_core::Config;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the scratch directory it stores into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub spool_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of the files currently in the storage directory, sorted.
    pub fn stored_files(&self) -> Vec<String> {
        file_names(&self.upload_dir)
    }

    /// Temporary upload files still on disk.
    pub fn spooled_files(&self) -> Vec<String> {
        file_names(&self.spool_dir)
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read dir entry")
                .file_name()
                .into_string()
                .expect("Non UTF-8 file name")
        })
        .collect();
    names.sort();
    names
}

/// Setup test app with default upload settings.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(&[]).await
}

/// Setup test app, overriding configuration variables.
pub async fn setup_test_app_with(overrides: &[(&str, &str)]) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let upload_dir = temp_dir.path().join("uploads");
    let spool_dir = temp_dir.path().join("spool");
    std::fs::create_dir_all(&spool_dir).expect("Failed to create spool dir");

    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("UPLOAD_DIR".to_string(), upload_dir.display().to_string());
    vars.insert("UPLOAD_TEMP_DIR".to_string(), spool_dir.display().to_string());
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    let config = Config::from_vars(|key| vars.get(key).cloned()).expect("Invalid test config");
    let (_state, app) = setup::build_app(config)
        .await
        .expect("Failed to build app");

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        spool_dir,
        _temp_dir: temp_dir,
    }
}

/// Upload form with a title and one image part.
pub fn image_form(title: &str, data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name)
        .mime_type(mime_type);
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_part("image", part)
}
