use formatx::formatx;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub trait Output: Debug {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

/// Writes each output to its own file in a directory.
///
/// The file template is a `formatx` template with two positional placeholders, filled with the
/// location key and file extension, e.g. `"house__{}.{}"`.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        let file_name = formatx!(&self.file_template, location_key, file_extension)
            .map_err(|err| anyhow::anyhow!("Could not build output file name: {err:?}"))?;

        Ok(BufWriter::new(File::create(
            self.directory_path.join(file_name),
        )?))
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key, file_extension)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(
        &self,
        _location_key: &str,
        _file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// An output held in memory, with the bytes written for each "file" kept under its
/// `"{location_key}.{file_extension}"` name in the order the files were first written.
#[derive(Clone, Debug, Default)]
pub struct StringOutput(Arc<Mutex<IndexMap<String, Vec<u8>>>>);

impl StringOutput {
    pub fn new() -> Self {
        Default::default()
    }

    /// The contents written for a location key, if any were, as UTF-8.
    pub fn contents(&self, location_key: &str, file_extension: &str) -> Option<String> {
        self.0
            .lock()
            .get(&file_name(location_key, file_extension))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn file_names(&self) -> Vec<String> {
        self.0.lock().keys().cloned().collect()
    }
}

fn file_name(location_key: &str, file_extension: &str) -> String {
    format!("{location_key}.{file_extension}")
}

impl Output for StringOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        let file_name = file_name(location_key, file_extension);
        self.0.lock().insert(file_name.clone(), vec![]);

        Ok(InMemoryFileWriter {
            files: self.0.clone(),
            file_name,
        })
    }
}

impl Output for &StringOutput {
    fn writer_for_location_key(
        &self,
        location_key: &str,
        file_extension: &str,
    ) -> anyhow::Result<impl Write> {
        <StringOutput as Output>::writer_for_location_key(self, location_key, file_extension)
    }
}

/// Represents a writer for an individual in-memory "file".
struct InMemoryFileWriter {
    files: Arc<Mutex<IndexMap<String, Vec<u8>>>>,
    file_name: String,
}

impl Write for InMemoryFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .lock()
            .entry(self.file_name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
