use crate::{Catalog, HeaderError, Record, TranscodeError};
use csv::{Reader, StringRecord};
use std::collections::HashMap;
use std::io::Read;

/// Column-name to position mapping built once from the header row
///
/// Every data row is assumed to be positionally aligned with the header
/// it was read under.
#[derive(Debug)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_record(headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        for (i, column) in headers.iter().enumerate() {
            // A duplicated header name keeps its first position
            positions.entry(column.to_string()).or_insert(i);
        }
        Self { positions }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

/// Resolved positions of the three columns the transform reads
///
/// Chromium based exports key entries by the site `name` column, firefox
/// based ones by the page `url`. The choice is made once against the
/// header and reused for every row.
#[derive(Debug)]
pub struct RowLayout {
    key: usize,
    key_column: &'static str,
    username: usize,
    password: usize,
}

impl RowLayout {
    pub fn resolve(index: &HeaderIndex) -> Result<Self, HeaderError> {
        let (key_column, key) = ["name", "url"]
            .into_iter()
            .find_map(|column| index.position(column).map(|pos| (column, pos)))
            .ok_or(HeaderError::MissingKeyColumn)?;

        Ok(Self {
            key,
            key_column,
            username: require(index, "username")?,
            password: require(index, "password")?,
        })
    }

    /// Name of the column used as the display-name key, `name` or `url`
    pub fn key_column(&self) -> &'static str {
        self.key_column
    }

    /// Project one data row into a display name and credential record
    pub fn extract(&self, row: &StringRecord) -> Result<(String, Record), TranscodeError> {
        let name = field(row, self.key, self.key_column)?;
        let username = field(row, self.username, "username")?;
        let password = field(row, self.password, "password")?;

        Ok((
            name.to_string(),
            Record::username_password(username, password),
        ))
    }
}

fn require(index: &HeaderIndex, column: &'static str) -> Result<usize, HeaderError> {
    index
        .position(column)
        .ok_or(HeaderError::MissingColumn(column))
}

fn field<'r>(
    row: &'r StringRecord,
    pos: usize,
    column: &'static str,
) -> Result<&'r str, TranscodeError> {
    row.get(pos).ok_or_else(|| {
        TranscodeError::MissingField(row.position().map_or(0, |p| p.line()), column)
    })
}

/// Convert an export into a [Catalog], consuming rows in file order
///
/// Browser exports differ in which columns they carry and in what order,
/// so rows are projected by header position instead of deserializing
/// into a fixed struct. Rows shorter than a resolved position and rows
/// the csv layer rejects outright are fatal; extra trailing fields are
/// ignored.
pub fn transcode<R>(mut rdr: Reader<R>) -> Result<Catalog, TranscodeError>
where
    R: Read,
{
    let index = HeaderIndex::from_record(rdr.headers()?);
    let layout = RowLayout::resolve(&index)?;

    let mut catalog = Catalog::default();
    for row in rdr.into_records() {
        let (name, record) = layout.extract(&row?)?;
        catalog.insert(name, record);
    }

    Ok(catalog)
}
