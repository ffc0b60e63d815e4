//! Flat-file persistence of charts, events and configurations.
//!
//! Every store is one JSON file holding an array of records. Writes replace
//! the file atomically. Ids work like a database sequence: a new record gets
//! the highest id in the file plus one.

use crate::domain::{CelestialBody, GeoLocation, HouseSystem, ObserverFrame};
use crate::error::{AztroError, Result};
use crate::response::Response;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// ---------------------------
// ## Records
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Chart,
    Event,
    Config,
}

pub trait Persistable: Serialize + DeserializeOwned + Clone {
    const KIND: RecordKind;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);

    fn name(&self) -> Option<&str> {
        None
    }

    fn chart_id(&self) -> Option<u32> {
        None
    }
}

/// Rodden rating of the birth data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    #[default]
    Unknown,
    Aa,
    A,
    B,
    C,
    Dd,
    X,
    Xx,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartCategory {
    #[default]
    Unknown,
    Female,
    Male,
    Event,
    Horary,
    Election,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub rating: Rating,
    pub category: ChartCategory,
    pub jd_ut: f64,
    pub location: GeoLocation,
    /// Date and time as entered by the user.
    pub input: String,
}

impl Persistable for ChartRecord {
    const KIND: RecordKind = RecordKind::Chart;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A moment related to a chart, e.g. for progressions or transits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub id: u32,
    pub chart_id: u32,
    pub description: String,
    pub jd_ut: f64,
    pub location: GeoLocation,
    pub input: String,
}

impl Persistable for EventRecord {
    const KIND: RecordKind = RecordKind::Event;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn chart_id(&self) -> Option<u32> {
        Some(self.chart_id)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsha {
    #[default]
    None,
    Fagan,
    Lahiri,
    Raman,
    Krishnamurti,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    SemiSextile,
    Inconjunct,
    SemiSquare,
    Sesquiquadrate,
    Quintile,
    BiQuintile,
    Parallel,
    ContraParallel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSetting {
    pub body: CelestialBody,
    pub show_in_drawing: bool,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectSetting {
    pub aspect: Aspect,
    pub show_in_drawing: bool,
    pub show_in_out: bool,
    pub glyph: String,
    pub second_glyph: String,
}

/// A named set of calculation and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub ayanamsha: Ayanamsha,
    pub house_system: HouseSystem,
    pub observer: ObserverFrame,
    pub points: Vec<PointSetting>,
    pub aspects: Vec<AspectSetting>,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        ConfigRecord {
            id: 0,
            name: String::new(),
            description: String::new(),
            ayanamsha: Ayanamsha::None,
            house_system: HouseSystem::NoHouses,
            observer: ObserverFrame::Geocentric,
            points: Vec::new(),
            aspects: Vec::new(),
        }
    }
}

impl Persistable for ConfigRecord {
    const KIND: RecordKind = RecordKind::Config;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

// ---------------------------
// ## Store
// ---------------------------

pub struct FlatFileStore<T> {
    path: PathBuf,
    _records: PhantomData<T>,
}

impl<T: Persistable> FlatFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileStore {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records; a missing file is an empty store.
    pub fn read_all(&self) -> Result<Vec<T>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Replaces the content of the store with `items`.
    pub fn write_all(&self, items: &[T]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let temp_file = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, items)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        debug!("wrote {} record(s) to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Stores `item` under the next free id and returns that id.
    pub fn add(&self, mut item: T) -> Result<u32> {
        let mut items = self.read_all()?;
        let id = next_id(&items);
        item.set_id(id);
        items.push(item);
        self.write_all(&items)?;
        Ok(id)
    }

    /// Replaces the record with the id of `item`, or appends `item` when the
    /// id is not in the store yet.
    pub fn update(&self, item: &T) -> Result<()> {
        let mut items = self.read_all()?;
        match items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => *slot = item.clone(),
            None => items.push(item.clone()),
        }
        self.write_all(&items)
    }

    pub fn delete(&self, id: u32) -> Result<()> {
        let mut items = self.read_all()?;
        let count = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == count {
            return Err(AztroError::RecordNotFound(id));
        }
        self.write_all(&items)
    }

    /// Records with `id`; empty when there is none.
    pub fn read_for_id(&self, id: u32) -> Result<Vec<T>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|item| item.id() == id)
            .collect())
    }

    /// Records whose name contains `part`, ignoring case.
    pub fn search_for_name(&self, part: &str) -> Result<Vec<T>> {
        let part = part.to_lowercase();
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|item| {
                item.name()
                    .map_or(false, |name| name.to_lowercase().contains(&part))
            })
            .collect())
    }

    /// Records that belong to chart `chart_id`.
    pub fn read_for_chart_id(&self, chart_id: u32) -> Result<Vec<T>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|item| item.chart_id() == Some(chart_id))
            .collect())
    }
}

fn next_id<T: Persistable>(items: &[T]) -> u32 {
    items.iter().map(|item| item.id()).max().map_or(1, |max| max + 1)
}

// ---------------------------
// ## Handler
// ---------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum WriteAction<T> {
    Add(T),
    WriteAll(Vec<T>),
    Update(T),
    Delete(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadAction {
    ReadAll,
    ReadForId(u32),
    SearchForName(String),
    ReadForChartId(u32),
}

/// Store operations with results as [`Response`]s.
pub struct PersistenceHandler<T> {
    store: FlatFileStore<T>,
}

impl<T: Persistable> PersistenceHandler<T> {
    pub fn new(store: FlatFileStore<T>) -> Self {
        PersistenceHandler { store }
    }

    pub fn store(&self) -> &FlatFileStore<T> {
        &self.store
    }

    /// Number of records written.
    pub fn write(&self, action: WriteAction<T>) -> Response<usize> {
        let outcome = match action {
            WriteAction::Add(item) => self.store.add(item).map(|_| 1),
            WriteAction::WriteAll(items) => self.store.write_all(&items).map(|_| items.len()),
            WriteAction::Update(item) => self.store.update(&item).map(|_| 1),
            WriteAction::Delete(id) => self.store.delete(id).map(|_| 1),
        };
        match outcome {
            Ok(count) => Response::ok(count),
            Err(e) => Response::failed(0, format!("Error while writing record(s): {}", e)),
        }
    }

    pub fn read(&self, action: ReadAction) -> Response<Vec<T>> {
        let outcome = match action {
            ReadAction::ReadAll => self.store.read_all(),
            ReadAction::ReadForId(id) => self.store.read_for_id(id),
            ReadAction::SearchForName(part) => {
                if T::KIND != RecordKind::Chart {
                    return Response::failed(
                        Vec::new(),
                        "Search for name is only supported for charts",
                    );
                }
                self.store.search_for_name(&part)
            }
            ReadAction::ReadForChartId(chart_id) => {
                if T::KIND != RecordKind::Event {
                    return Response::failed(
                        Vec::new(),
                        "Read for chartId is only supported for events",
                    );
                }
                self.store.read_for_chart_id(chart_id)
            }
        };
        match outcome {
            Ok(items) => Response::ok(items),
            Err(e) => Response::failed(Vec::new(), format!("Error while reading record(s): {}", e)),
        }
    }
}
