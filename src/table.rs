//! The tabular store: CSV files that are read in full and rewritten in full.
//!
//! A row's ID is its position in the file when the table was read. Deleting a
//! row shifts every later row down by one, so IDs are only meaningful until the
//! next write.

use std::{
    ffi::OsString,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

/// A record that is stored as one line of a table file.
///
/// The serde field names of the implementing type must match [Row::COLUMNS].
pub trait Row: Serialize + DeserializeOwned {
    /// The column names, in the order they appear in the file.
    const COLUMNS: &'static [&'static str];
}

/// Read every row in the table at `path`.
///
/// A missing file is an empty table.
///
/// # Errors
/// Returns [Error::TableIo] if the file exists but cannot be read, and
/// [Error::CorruptTable] if the header does not match [Row::COLUMNS] or a row
/// cannot be parsed.
pub fn load_table<R: Row>(path: &Path) -> Result<Vec<R>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(io_error(path, &error)),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let header = reader.headers().map_err(|error| read_error(path, error))?;

    if !header.iter().eq(R::COLUMNS.iter().copied()) {
        return Err(Error::CorruptTable {
            path: path.display().to_string(),
            message: format!(
                "expected the columns {:?} but got {:?}",
                R::COLUMNS,
                header.iter().collect::<Vec<_>>()
            ),
        });
    }

    reader
        .deserialize()
        .map(|row| row.map_err(|error| read_error(path, error)))
        .collect()
}

/// Overwrite the table at `path` with `rows`.
///
/// The rows are written to a sibling file which is then renamed over `path`,
/// so readers see either the old table or the new one.
pub fn save_table<R: Row>(path: &Path, rows: &[R]) -> Result<(), Error> {
    let temp_path = temp_path_for(path);

    if let Err(error) = write_rows(&temp_path, rows) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|error| io_error(path, &error))?;
    tracing::debug!("Wrote {} rows to {}", rows.len(), path.display());

    Ok(())
}

/// Create an empty table at `path`, and any missing parent directories, if
/// there is no file there yet.
pub fn ensure_table<R: Row>(path: &Path) -> Result<(), Error> {
    if path.try_exists().map_err(|error| io_error(path, &error))? {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| io_error(parent, &error))?;
    }

    tracing::info!("Creating empty table {}", path.display());
    save_table::<R>(path, &[])
}

/// Add `row` to the end of the table and return its index.
pub fn append_row<R: Row>(path: &Path, row: R) -> Result<usize, Error> {
    let mut rows = load_table::<R>(path)?;
    rows.push(row);
    save_table(path, &rows)?;

    Ok(rows.len() - 1)
}

/// Overwrite the row at `index` with `row`.
///
/// # Errors
/// Returns [Error::IndexOutOfRange] if there is no row at `index`, in which
/// case the table is left untouched.
pub fn replace_row<R: Row>(path: &Path, index: usize, row: R) -> Result<(), Error> {
    let mut rows = load_table::<R>(path)?;
    let len = rows.len();
    let slot = rows
        .get_mut(index)
        .ok_or(Error::IndexOutOfRange { index, len })?;
    *slot = row;

    save_table(path, &rows)
}

/// Remove the row at `index` and return it. Every later row moves down by one.
///
/// # Errors
/// Returns [Error::IndexOutOfRange] if there is no row at `index`, in which
/// case the table is left untouched.
pub fn delete_row<R: Row>(path: &Path, index: usize) -> Result<R, Error> {
    let mut rows = load_table::<R>(path)?;

    if index >= rows.len() {
        return Err(Error::IndexOutOfRange {
            index,
            len: rows.len(),
        });
    }

    let removed = rows.remove(index);
    save_table(path, &rows)?;

    Ok(removed)
}

/// Get the row at `index`.
pub fn get_row<R: Row>(path: &Path, index: usize) -> Result<R, Error> {
    let mut rows = load_table::<R>(path)?;
    let len = rows.len();

    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }

    Ok(rows.swap_remove(index))
}

fn write_rows<R: Row>(path: &Path, rows: &[R]) -> Result<(), Error> {
    let file = File::create(path).map_err(|error| io_error(path, &error))?;

    // The header is written by hand so that an empty table still has one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(R::COLUMNS)
        .map_err(|error| write_error(path, error))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|error| write_error(path, error))?;
    }

    let file = writer
        .into_inner()
        .map_err(|error| io_error(path, error.error()))?;

    file.sync_all().map_err(|error| io_error(path, &error))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("table"));
    file_name.push(".tmp");

    path.with_file_name(file_name)
}

fn io_error(path: &Path, error: &io::Error) -> Error {
    Error::TableIo {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn read_error(path: &Path, error: csv::Error) -> Error {
    if error.is_io_error() {
        Error::TableIo {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    } else {
        Error::CorruptTable {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

fn write_error(path: &Path, error: csv::Error) -> Error {
    Error::TableIo {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    use crate::Error;

    use super::{
        Row, append_row, delete_row, ensure_table, get_row, load_table, replace_row, save_table,
    };

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Value")]
        value: f64,
    }

    impl Row for Item {
        const COLUMNS: &'static [&'static str] = &["Name", "Value"];
    }

    fn item(name: &str, value: f64) -> Item {
        Item {
            name: name.to_owned(),
            value,
        }
    }

    fn table_path(dir: &TempDir) -> PathBuf {
        dir.path().join("items.csv")
    }

    fn save_items(dir: &TempDir, items: &[Item]) -> PathBuf {
        let path = table_path(dir);
        save_table(&path, items).expect("could not save test table");
        path
    }

    #[test]
    fn missing_file_is_empty_table() {
        let dir = TempDir::new().unwrap();

        let rows = load_table::<Item>(&table_path(&dir)).unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn save_then_load_preserves_rows_and_columns() {
        let dir = TempDir::new().unwrap();
        let want = vec![
            item("a", 1.5),
            item("with, comma", -2.0),
            item("with \"quotes\"\nand newline", 0.0),
        ];
        let path = save_items(&dir, &want);

        let got = load_table::<Item>(&path).unwrap();
        save_table(&path, &got).unwrap();
        let got_again = load_table::<Item>(&path).unwrap();

        assert_eq!(want, got);
        assert_eq!(want, got_again);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Name,Value\n"), "got {text:?}");
    }

    #[test]
    fn save_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        save_items(&dir, &[item("a", 1.0)]);

        let file_names = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect::<Vec<_>>();

        assert_eq!(file_names, vec!["items.csv"]);
    }

    #[test]
    fn ensure_table_creates_header_only_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("items.csv");

        ensure_table::<Item>(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), "Name,Value");
        assert!(load_table::<Item>(&path).unwrap().is_empty());
    }

    #[test]
    fn ensure_table_leaves_existing_table_untouched() {
        let dir = TempDir::new().unwrap();
        let want = vec![item("a", 1.0)];
        let path = save_items(&dir, &want);

        ensure_table::<Item>(&path).unwrap();

        assert_eq!(want, load_table::<Item>(&path).unwrap());
    }

    #[test]
    fn append_adds_one_row_at_the_end() {
        let dir = TempDir::new().unwrap();
        let path = save_items(&dir, &[item("a", 1.0), item("b", 2.0)]);

        let index = append_row(&path, item("c", 3.0)).unwrap();

        let rows = load_table::<Item>(&path).unwrap();
        assert_eq!(index, 2);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.last(), Some(&item("c", 3.0)));
    }

    #[test]
    fn append_to_missing_file_creates_it() {
        let dir = TempDir::new().unwrap();
        let path = table_path(&dir);

        let index = append_row(&path, item("a", 1.0)).unwrap();

        assert_eq!(index, 0);
        assert_eq!(load_table::<Item>(&path).unwrap(), vec![item("a", 1.0)]);
    }

    #[test]
    fn replace_overwrites_only_the_given_row() {
        let dir = TempDir::new().unwrap();
        let path = save_items(&dir, &[item("a", 1.0), item("b", 2.0)]);

        replace_row(&path, 1, item("z", 26.0)).unwrap();

        assert_eq!(
            load_table::<Item>(&path).unwrap(),
            vec![item("a", 1.0), item("z", 26.0)]
        );
    }

    #[test]
    fn replace_out_of_range_fails_and_leaves_table_untouched() {
        let dir = TempDir::new().unwrap();
        let want = vec![item("a", 1.0)];
        let path = save_items(&dir, &want);

        let result = replace_row(&path, 1, item("z", 26.0));

        assert_eq!(result, Err(Error::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(load_table::<Item>(&path).unwrap(), want);
    }

    #[test]
    fn delete_shifts_later_rows_down() {
        let dir = TempDir::new().unwrap();
        let path = save_items(
            &dir,
            &[item("a", 1.0), item("b", 2.0), item("c", 3.0), item("d", 4.0)],
        );

        let removed = delete_row::<Item>(&path, 1).unwrap();

        assert_eq!(removed, item("b", 2.0));
        assert_eq!(
            load_table::<Item>(&path).unwrap(),
            vec![item("a", 1.0), item("c", 3.0), item("d", 4.0)]
        );
    }

    #[test]
    fn delete_out_of_range_fails() {
        let dir = TempDir::new().unwrap();
        let path = save_items(&dir, &[item("a", 1.0)]);

        let result = delete_row::<Item>(&path, 3);

        assert_eq!(result, Err(Error::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(load_table::<Item>(&path).unwrap().len(), 1);
    }

    #[test]
    fn get_returns_row_at_index() {
        let dir = TempDir::new().unwrap();
        let path = save_items(&dir, &[item("a", 1.0), item("b", 2.0), item("c", 3.0)]);

        assert_eq!(get_row::<Item>(&path, 1), Ok(item("b", 2.0)));
        assert_eq!(
            get_row::<Item>(&path, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn wrong_header_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = table_path(&dir);
        fs::write(&path, "Value,Name\n1.0,a\n").unwrap();

        let result = load_table::<Item>(&path);

        assert!(
            matches!(result, Err(Error::CorruptTable { .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn unparseable_row_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = table_path(&dir);
        fs::write(&path, "Name,Value\na,not a number\n").unwrap();

        let result = load_table::<Item>(&path);

        assert!(
            matches!(result, Err(Error::CorruptTable { .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn empty_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = table_path(&dir);
        fs::write(&path, "").unwrap();

        let result = load_table::<Item>(&path);

        assert!(
            matches!(result, Err(Error::CorruptTable { .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = table_path(&dir);
        fs::create_dir(&path).unwrap();

        let result = load_table::<Item>(&path);

        assert!(
            matches!(result, Err(Error::TableIo { .. })),
            "got {result:?}"
        );
    }
}
