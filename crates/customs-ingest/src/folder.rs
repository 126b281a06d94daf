use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, NamedFrom, Series};

use customs_model::columns::SOURCE_FILE;
use customs_model::{Dataset, DatasetError, ImportError};

use crate::declaration::{DeclarationFile, read_declaration};

/// Outcome of a folder import: every parsed file plus the per-file
/// failures. A failure never aborts the import of the remaining files.
#[derive(Debug, Default)]
pub struct FolderImport {
    pub files: Vec<DeclarationFile>,
    pub failures: Vec<(PathBuf, ImportError)>,
}

impl FolderImport {
    /// Merges all successfully imported files into one dataset.
    pub fn into_dataset(self) -> Result<Dataset, DatasetError> {
        merge_files(&self.files)
    }
}

/// Imports every `*.xml` file in `dir`, sequentially, in file-name order.
///
/// Only an unreadable directory is an error; unreadable or malformed
/// files are recorded in [`FolderImport::failures`] and skipped.
pub fn import_folder(dir: &Path) -> Result<FolderImport, ImportError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ImportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    paths.sort();

    let mut import = FolderImport::default();
    for path in paths {
        match read_declaration(&path) {
            Ok(file) => import.files.push(file),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping declaration file");
                import.failures.push((path, err));
            }
        }
    }
    Ok(import)
}

/// Merges parsed files into one [`Dataset`].
///
/// The merged schema is the union of all file columns in first-appearance
/// order; a column absent from a file is null for that file's rows. Each
/// row gets the source file name and a `row_id` unique across the merge.
pub fn merge_files(files: &[DeclarationFile]) -> Result<Dataset, DatasetError> {
    let mut columns: Vec<String> = Vec::new();
    for file in files {
        for column in &file.columns {
            if !columns.iter().any(|existing| existing == column) {
                columns.push(column.clone());
            }
        }
    }
    columns.push(SOURCE_FILE.to_string());

    let total_rows: usize = files.iter().map(DeclarationFile::item_count).sum();
    let mut series = Vec::with_capacity(columns.len());
    for column in &columns {
        let mut values: Vec<Option<String>> = Vec::with_capacity(total_rows);
        for file in files {
            let source_name = file
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.path.display().to_string());
            for row in &file.rows {
                if column == SOURCE_FILE {
                    values.push(Some(source_name.clone()));
                } else {
                    values.push(row.get(column).cloned());
                }
            }
        }
        series.push(Series::new(column.as_str().into(), values).into());
    }

    let frame = DataFrame::new(series)?;
    let dataset = Dataset::from_frame(frame)?;
    tracing::debug!(
        files = files.len(),
        rows = dataset.height(),
        columns = columns.len(),
        "merged declaration files"
    );
    Ok(dataset)
}
