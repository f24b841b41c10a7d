use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use fxhash::FxHasher64;

use crate::{travel_matrix_provider::TravelMatrixProvider, travel_time_matrix::TravelTimeMatrix};

pub const CACHE_FOLDER_ENV_VAR: &str = "SHUTTLE_CACHE_FOLDER";

pub trait MatricesCache {
    fn cache<P>(
        &self,
        provider: &TravelMatrixProvider,
        points: &[P],
        matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error>
    where
        for<'a> &'a P: Into<geo_types::Point>;

    fn get_cached<P>(
        &self,
        provider: &TravelMatrixProvider,
        points: &[P],
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error>
    where
        for<'a> &'a P: Into<geo_types::Point>;
}

/// Never stores anything, every request goes to the provider.
#[derive(Default, Clone, Copy)]
pub struct NoCache;

impl MatricesCache for NoCache {
    fn cache<P>(
        &self,
        _provider: &TravelMatrixProvider,
        _points: &[P],
        _matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        Ok(())
    }

    fn get_cached<P>(
        &self,
        _provider: &TravelMatrixProvider,
        _points: &[P],
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        Ok(None)
    }
}

/// Stores fetched matrices as JSON files named after a hash of the points and the provider.
pub struct FileCache {
    folder: PathBuf,
}

fn hash_points<H, P>(points: &[P], hasher: &mut H)
where
    H: Hasher,
    for<'a> &'a P: Into<geo_types::Point>,
{
    points.len().hash(hasher);
    for point in points {
        let point: geo_types::Point = point.into();
        hasher.write_u64(point.x().to_bits());
        hasher.write_u64(point.y().to_bits());
    }
}

fn get_filename<P>(points: &[P], provider: &TravelMatrixProvider) -> String
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    let mut hasher = FxHasher64::default();

    hash_points(points, &mut hasher);
    provider.hash(&mut hasher);

    let hash = hasher.finish();
    format!("{:016x}.json", hash)
}

impl FileCache {
    pub fn new(folder: impl Into<PathBuf>) -> Result<Self, anyhow::Error> {
        let folder = folder.into();

        if !folder.is_dir() {
            return Err(anyhow::anyhow!(
                "Path {} is not a directory",
                folder.display()
            ));
        }

        Ok(Self { folder })
    }

    /// Uses the folder named by `SHUTTLE_CACHE_FOLDER`, if set.
    pub fn from_env() -> Option<Result<Self, anyhow::Error>> {
        std::env::var(CACHE_FOLDER_ENV_VAR).ok().map(Self::new)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl MatricesCache for FileCache {
    fn cache<P>(
        &self,
        provider: &TravelMatrixProvider,
        points: &[P],
        matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let filename = get_filename(points, provider);

        let file = std::fs::File::create(self.folder.join(filename))?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        serde_json::to_writer(&mut writer, matrix)?;
        writer.flush()?;

        Ok(())
    }

    fn get_cached<P>(
        &self,
        provider: &TravelMatrixProvider,
        points: &[P],
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let filename = get_filename(points, provider);
        let file_path = self.folder.join(filename);

        if !file_path.is_file() {
            return Ok(None);
        }

        let file = std::fs::File::open(file_path)?;
        let matrix: TravelTimeMatrix = serde_json::from_reader(file)?;

        Ok(Some(matrix))
    }
}
