//! Record stub generation.
//!
//! The [`Generator`] turns requested names into record source files below
//! a source root. File access and template rendering go through the
//! [`FileSystem`] and [`TemplateRenderer`] traits.

pub mod fs;
pub mod naming;
pub mod template;

pub use fs::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use naming::{TargetName, is_reserved};
pub use template::{DEFAULT_STUB, StubRenderer, TemplateRenderer};

use std::path::{Path, PathBuf};
use std::time::Instant;

use itertools::Itertools;
use log::info;

use crate::config::GeneratorConfig;
use crate::error::{DtoError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Folder used when neither the options nor the config name one
pub const DEFAULT_FOLDER: &str = "dtos";

/// Per-run generator options, usually from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Output folder, overriding the configured one
    pub folder_name: Option<String>,
    /// Append `Dto` to record names, in addition to the configured flag
    pub attach_dto: bool,
    /// Replace files that already exist
    pub force: bool,
}

/// The resolved output folder of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    /// Folder relative to the source root, `/`-separated
    pub folder: String,
    /// Absolute or root-relative directory path
    pub path: PathBuf,
}

impl OutputDir {
    /// Module path of a record placed in this folder
    #[must_use]
    pub fn module_path(&self, target: &TargetName) -> String {
        std::iter::once("crate")
            .chain(self.folder.split('/').filter(|s| !s.is_empty()))
            .chain(target.module_segments())
            .join("::")
    }
}

/// Writes record stub files
#[derive(Debug)]
pub struct Generator<F: FileSystem, T: TemplateRenderer> {
    fs: F,
    renderer: T,
    root: PathBuf,
    config: GeneratorConfig,
}

impl Generator<LocalFileSystem, StubRenderer> {
    /// A generator writing the built-in stub to the local disk
    pub fn local(root: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        Self::new(LocalFileSystem, StubRenderer::default(), root, config)
    }
}

impl<F: FileSystem, T: TemplateRenderer> Generator<F, T> {
    /// Create a generator over the given collaborators
    pub fn new(fs: F, renderer: T, root: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        Self {
            fs,
            renderer,
            root: root.into(),
            config,
        }
    }

    /// The file system this generator writes to
    pub const fn file_system(&self) -> &F {
        &self.fs
    }

    /// Generate one record per name
    ///
    /// The whole batch is rejected before anything is written if any name
    /// is reserved. Returns the written paths in request order.
    pub fn run<S: AsRef<str>>(&self, names: &[S], options: &GeneratorOptions) -> Result<Vec<PathBuf>> {
        let start = Instant::now();
        info!("Creating {} record file(s)", names.len());

        self.check_reserved(names)?;
        let output = self.prepare(options)?;

        let written = names
            .iter()
            .map(|name| self.generate_one(&output, name.as_ref(), options))
            .collect::<Result<Vec<_>>>()?;

        log_operation_complete("created", &output.path, written.len(), Some(start.elapsed()));
        Ok(written)
    }

    /// Fail with `ReservedName` for the first reserved name
    pub fn check_reserved<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        match names.iter().map(AsRef::as_ref).find(|name| is_reserved(name)) {
            Some(name) => Err(DtoError::ReservedName(name.trim().to_string())),
            None => Ok(()),
        }
    }

    /// Resolve and create the output folder
    pub fn prepare(&self, options: &GeneratorOptions) -> Result<OutputDir> {
        let folder = resolve_folder(options.folder_name.as_deref(), self.config.folder_name.as_deref());
        let path = self.root.join(&folder);
        self.ensure_dir(&path)?;
        Ok(OutputDir { folder, path })
    }

    /// Write a single record file into `output`
    pub fn generate_one(
        &self,
        output: &OutputDir,
        name: &str,
        options: &GeneratorOptions,
    ) -> Result<PathBuf> {
        let target = TargetName::parse(name, options.attach_dto || self.config.attach_dto);

        let dir = match &target.sub_folders {
            Some(sub) => {
                let dir = output.path.join(sub);
                self.ensure_dir(&dir)?;
                dir
            }
            None => output.path.clone(),
        };

        let path = dir.join(target.file_name());
        self.check_path(&path, options.force)?;

        let module = output.module_path(&target);
        let contents = self
            .renderer
            .render(&[("module", module.as_str()), ("class", target.class.as_str())])?;
        self.fs.write(&path, &contents)?;

        info!("{} was successfully created.", path.display());
        Ok(path)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if self.fs.is_dir(dir) {
            return Ok(());
        }
        log_operation_start("Creating directory", dir);
        self.fs.create_dir_all(dir)
    }

    fn check_path(&self, path: &Path, force: bool) -> Result<()> {
        if !self.fs.exists(path) {
            return Ok(());
        }
        if force {
            // The write below truncates, so the old file survives a failed render
            log_warning("Replacing existing file", Some(path));
            return Ok(());
        }
        Err(DtoError::FileAlreadyExists(path.to_path_buf()))
    }
}

/// Pick the output folder: option, then config, then [`DEFAULT_FOLDER`]
///
/// The result is trimmed, a leading `crate::` or `crate/` is dropped and
/// `::` separators become `/`.
#[must_use]
pub fn resolve_folder(option: Option<&str>, configured: Option<&str>) -> String {
    let chosen = [option, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|folder| !folder.is_empty())
        .unwrap_or(DEFAULT_FOLDER);

    let stripped = chosen
        .strip_prefix("crate::")
        .or_else(|| chosen.strip_prefix("crate/"))
        .unwrap_or(chosen);

    let folder = stripped.replace("::", "/");
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        DEFAULT_FOLDER.to_string()
    } else {
        folder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(config: GeneratorConfig) -> Generator<MemoryFileSystem, StubRenderer> {
        Generator::new(
            MemoryFileSystem::new(),
            StubRenderer::new("{{ module }}|{{ class }}"),
            "src",
            config,
        )
    }

    #[test]
    fn test_resolve_folder() {
        assert_eq!(resolve_folder(None, None), "dtos");
        assert_eq!(resolve_folder(Some("  "), Some("records")), "records");
        assert_eq!(resolve_folder(Some(" crate::api::dtos "), None), "api/dtos");
        assert_eq!(resolve_folder(None, Some("crate/models/")), "models");
    }

    #[test]
    fn test_run_writes_module_and_class() {
        let generator = generator(GeneratorConfig::default());
        let options = GeneratorOptions {
            attach_dto: true,
            ..GeneratorOptions::default()
        };
        let paths = generator.run(&["videos/videoFile"], &options).unwrap();

        assert_eq!(paths, vec![PathBuf::from("src/dtos/videos/video_file_dto.rs")]);
        assert_eq!(
            generator.file_system().read(&paths[0]).as_deref(),
            Some("crate::dtos::videos|VideoFileDto")
        );
        assert!(generator.file_system().is_dir(Path::new("src/dtos/videos")));
    }

    #[test]
    fn test_config_attach_dto() {
        let generator = generator(GeneratorConfig {
            folder_name: Some("records".into()),
            attach_dto: true,
        });
        let paths = generator.run(&["image"], &GeneratorOptions::default()).unwrap();
        assert_eq!(paths, vec![PathBuf::from("src/records/image_dto.rs")]);
    }

    #[test]
    fn test_reserved_rejects_whole_batch() {
        let generator = generator(GeneratorConfig::default());
        let err = generator
            .run(&["image", "match"], &GeneratorOptions::default())
            .unwrap_err();
        assert!(matches!(err, DtoError::ReservedName(name) if name == "match"));
        assert!(generator.file_system().paths().is_empty());
    }

    #[test]
    fn test_existing_file_needs_force() {
        let generator = generator(GeneratorConfig::default());
        let options = GeneratorOptions::default();
        generator.run(&["image"], &options).unwrap();

        let err = generator.run(&["image"], &options).unwrap_err();
        assert!(matches!(err, DtoError::FileAlreadyExists(_)));

        let forced = GeneratorOptions {
            force: true,
            ..GeneratorOptions::default()
        };
        assert!(generator.run(&["image"], &forced).is_ok());
    }

    struct BrokenRenderer;

    impl TemplateRenderer for BrokenRenderer {
        fn render(&self, _vars: &[(&str, &str)]) -> Result<String> {
            Err(DtoError::Config("stub unavailable".into()))
        }
    }

    #[test]
    fn test_forced_run_keeps_file_when_render_fails() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("src/dtos/image.rs"), "// hand written").unwrap();
        let generator = Generator::new(fs, BrokenRenderer, "src", GeneratorConfig::default());

        let forced = GeneratorOptions {
            force: true,
            ..GeneratorOptions::default()
        };
        assert!(generator.run(&["image"], &forced).is_err());
        assert_eq!(
            generator.file_system().read(Path::new("src/dtos/image.rs")).as_deref(),
            Some("// hand written")
        );
    }
}
