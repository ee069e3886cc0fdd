//! Level layout import.
//!
//! A layout is a headerless CSV of `progress,<Category>_<number>[_suffix],x`
//! lines. Every line is resolved against the minimal table before the store
//! is touched, so a bad layout never leaves a half-imported level behind.

use crate::category::AssetId;
use crate::description::SpriteSize;
use crate::error::{BuildError, Result};
use crate::tables::MinimalTable;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

pub const LEVELS_FILE: &str = "levels.csv";
pub const LEVEL_ENTITIES_FILE: &str = "level_entities.csv";

/// One parsed layout line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub line: u64,
    pub progress: u32,
    pub category: String,
    pub number: String,
    pub x: i32,
}

impl Placement {
    /// Asset name the placement refers to.
    pub fn asset_name(&self) -> String {
        format!("{}_{}", self.category, self.number)
    }
}

/// A placement whose asset has been found in the minimal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPlacement {
    pub progress: u32,
    pub entity: AssetId,
    pub x: i32,
    pub size: SpriteSize,
}

impl ResolvedPlacement {
    pub fn row(&self, level: u32) -> LevelEntityRow {
        LevelEntityRow {
            level,
            progress: self.progress,
            entity: self.entity,
            x_pos: self.x,
            y_pos: 0,
            x_size: self.size.width,
            y_size: self.size.height,
            x_velocity: 0,
            y_velocity: 0,
        }
    }
}

/// Row of the `level_entities` store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelEntityRow {
    pub level: u32,
    pub progress: u32,
    pub entity: AssetId,
    pub x_pos: i32,
    pub y_pos: i32,
    pub x_size: u32,
    pub y_size: u32,
    pub x_velocity: i32,
    pub y_velocity: i32,
}

/// Row of the `levels` store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    pub id: u32,
    pub creator: String,
}

/// Persistence for imported levels.
pub trait LevelStore {
    /// Records a new level and returns its id.
    fn create_level(&mut self, creator: &str) -> Result<u32>;

    fn insert_entities(&mut self, rows: &[LevelEntityRow]) -> Result<()>;

    /// Removes a level created by [`LevelStore::create_level`].
    fn discard_level(&mut self, level: u32) -> Result<()>;
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub level: u32,
    pub rows: usize,
}

/// Parses a layout file. Blank lines and `#` comments are ignored.
pub fn parse_layout(path: &Path) -> Result<Vec<Placement>> {
    let file = File::open(path).map_err(|e| BuildError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(file);

    let mut placements = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let invalid = |reason: String| BuildError::LevelLayout {
            path: path.to_path_buf(),
            line,
            reason,
        };

        if record.len() != 3 {
            return Err(invalid(format!(
                "expected 3 fields (progress,name,x), found {}",
                record.len()
            )));
        }

        let progress = record[0]
            .parse::<u32>()
            .map_err(|_| invalid(format!("invalid progress '{}'", &record[0])))?;
        let x = record[2]
            .parse::<i32>()
            .map_err(|_| invalid(format!("invalid x position '{}'", &record[2])))?;

        let mut parts = record[1].split('_');
        let (category, number) = match (parts.next(), parts.next()) {
            (Some(category), Some(number)) if !category.is_empty() && !number.is_empty() => {
                (category.to_string(), number.to_string())
            }
            _ => {
                return Err(invalid(format!(
                    "entity '{}' is not of the form <Category>_<number>",
                    &record[1]
                )));
            }
        };

        placements.push(Placement {
            line,
            progress,
            category,
            number,
            x,
        });
    }

    Ok(placements)
}

/// Looks every placement up in `table`; fails on the first unknown asset.
pub fn resolve_placements(
    path: &Path,
    placements: &[Placement],
    table: &MinimalTable,
) -> Result<Vec<ResolvedPlacement>> {
    placements
        .iter()
        .map(|placement| {
            let record = table
                .find_numbered(&placement.category, &placement.number)
                .ok_or_else(|| BuildError::LevelLayout {
                    path: path.to_path_buf(),
                    line: placement.line,
                    reason: format!("unknown asset '{}'", placement.asset_name()),
                })?;
            Ok(ResolvedPlacement {
                progress: placement.progress,
                entity: record.id,
                x: placement.x,
                size: record.size,
            })
        })
        .collect()
}

/// Imports the layout at `path` as a new level owned by `creator`.
pub fn import_level(
    path: &Path,
    creator: &str,
    table: &MinimalTable,
    store: &mut impl LevelStore,
) -> Result<ImportSummary> {
    let placements = parse_layout(path)?;
    let resolved = resolve_placements(path, &placements, table)?;
    if resolved.is_empty() {
        log::warn!("Level layout {} has no placements", path.display());
    }

    let level = store.create_level(creator)?;
    let rows: Vec<LevelEntityRow> = resolved.iter().map(|r| r.row(level)).collect();
    if let Err(err) = store.insert_entities(&rows) {
        // Leave no level without its placements
        if let Err(rollback) = store.discard_level(level) {
            log::error!("Failed to discard level {}: {}", level, rollback);
        }
        return Err(err);
    }

    log::info!(
        "Imported level {} ({} placements) from {}",
        level,
        rows.len(),
        path.display()
    );
    Ok(ImportSummary {
        level,
        rows: rows.len(),
    })
}

/// Appends levels and placements to two CSV files in one directory.
///
/// Level ids continue from the highest id already in `levels.csv`, starting
/// at 1.
#[derive(Debug, Clone)]
pub struct CsvLevelStore {
    dir: PathBuf,
}

impl CsvLevelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn levels_path(&self) -> PathBuf {
        self.dir.join(LEVELS_FILE)
    }

    pub fn entities_path(&self) -> PathBuf {
        self.dir.join(LEVEL_ENTITIES_FILE)
    }

    pub fn levels(&self) -> Result<Vec<LevelRow>> {
        read_rows(&self.levels_path())
    }

    pub fn entities(&self) -> Result<Vec<LevelEntityRow>> {
        read_rows(&self.entities_path())
    }

    fn append<T: Serialize>(&self, path: &Path, rows: &[T]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| BuildError::io(&self.dir, e))?;
        let is_new = fs::metadata(path).map_or(true, |meta| meta.len() == 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| BuildError::io(path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|e| BuildError::io(path, e))
    }
}

impl LevelStore for CsvLevelStore {
    fn create_level(&mut self, creator: &str) -> Result<u32> {
        let id = self
            .levels()?
            .iter()
            .map(|level| level.id)
            .max()
            .unwrap_or(0)
            + 1;
        self.append(
            &self.levels_path(),
            &[LevelRow {
                id,
                creator: creator.to_string(),
            }],
        )?;
        Ok(id)
    }

    fn insert_entities(&mut self, rows: &[LevelEntityRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        self.append(&self.entities_path(), rows)
    }

    fn discard_level(&mut self, level: u32) -> Result<()> {
        let path = self.levels_path();
        let kept: Vec<LevelRow> = self
            .levels()?
            .into_iter()
            .filter(|row| row.id != level)
            .collect();

        let mut writer = csv::Writer::from_path(&path)?;
        for row in &kept {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|e| BuildError::io(&path, e))
    }
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(BuildError::io(path, e)),
    };
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
