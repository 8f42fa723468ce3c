use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A loaded hierarchy document and the name to show in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchySource {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("hierarchy is required: use a positional argument, - for stdin, or -d/--definition")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_hierarchy_source(
    hierarchy_path: Option<&Path>,
    hierarchy_text: Option<&str>,
) -> Result<HierarchySource, LoadError> {
    if let Some(text) = hierarchy_text {
        return Ok(HierarchySource {
            name: "<inline>".to_string(),
            text: text.to_string(),
        });
    }

    let Some(path) = hierarchy_path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        return load_stdin();
    }
    load_file(path)
}

fn load_stdin() -> Result<HierarchySource, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(HierarchySource {
        name: "<stdin>".to_string(),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<HierarchySource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(HierarchySource {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}
