use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,
}

//
// ─── MEDIA CORE TYPES ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
}

/// Where a clip or picture lives: a file path or an absolute URL.
///
/// Relative paths are taken as given until [`MediaUri::rebased_on`] anchors them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    /// Accepts whatever a bank document holds: absolute URLs become `Url`,
    /// everything else (including `C:\...` style paths) is a file path.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        match Url::parse(s) {
            Ok(u) if u.scheme().len() > 1 => Ok(MediaUri::Url(u)),
            _ => Self::from_file(s),
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }

    /// Anchor a relative file path at `base`. URLs and absolute paths are kept.
    #[must_use]
    pub fn rebased_on(self, base: &Path) -> Self {
        match self {
            MediaUri::FilePath(path) if path.is_relative() => MediaUri::FilePath(base.join(path)),
            other => other,
        }
    }

    /// Value suitable for an element `src` attribute.
    #[must_use]
    pub fn as_src(&self) -> String {
        match self {
            MediaUri::FilePath(p) => p.to_string_lossy().replace('\\', "/"),
            MediaUri::Url(u) => u.to_string(),
        }
    }
}

/// A validated media reference attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub uri: MediaUri,
}

impl MediaRef {
    pub fn audio(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        Ok(Self {
            kind: MediaKind::Audio,
            uri: MediaUri::parse(raw)?,
        })
    }

    pub fn image(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        Ok(Self {
            kind: MediaKind::Image,
            uri: MediaUri::parse(raw)?,
        })
    }

    #[must_use]
    pub fn src(&self) -> String {
        self.uri.as_src()
    }
}
