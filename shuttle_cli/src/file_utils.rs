use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

/// Writes `value` as JSON for `.json` paths and as YAML otherwise, creating missing parent folders.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), anyhow::Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);

    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_yaml::to_writer(&mut writer, value)?;
    }

    writer.flush()?;

    Ok(())
}
