//! Bulk sprite loading.

use std::path::{Path, PathBuf};

use tibia_common::FxHashMap;
use tracing::{debug, trace, warn};

use crate::{Result, Sprite, SpriteFile, SpriteLayout};

/// What a bulk load does with a sprite that fails to decode.
///
/// Empty IDs are skipped under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LoadPolicy {
    /// Abort the load on the first malformed sprite.
    #[default]
    Strict,
    /// Skip malformed sprites and count them in the [`LoadReport`].
    Lenient,
}

/// Outcome counts of a bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadReport {
    /// Number of IDs visited.
    pub total: usize,
    /// Sprites decoded successfully.
    pub loaded: usize,
    /// IDs with no sprite stored.
    pub not_found: usize,
    /// Sprites skipped because they failed to decode.
    pub failed: usize,
}

/// Sprites decoded by a bulk load, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    sprites: FxHashMap<u32, Sprite>,
    report: LoadReport,
}

impl SpriteSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            sprites: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            report: LoadReport::default(),
        }
    }

    /// Record the result for one ID according to `policy`.
    fn accept(&mut self, id: u32, result: Result<Sprite>, policy: LoadPolicy) -> Result<()> {
        self.report.total += 1;

        match result {
            Ok(sprite) => {
                self.sprites.insert(id, sprite);
                self.report.loaded += 1;
            }
            Err(e) if e.is_not_found() => {
                trace!(id, "sprite slot empty");
                self.report.not_found += 1;
            }
            Err(e) => match policy {
                LoadPolicy::Strict => return Err(e),
                LoadPolicy::Lenient => {
                    warn!(id, error = %e, "skipping malformed sprite");
                    self.report.failed += 1;
                }
            },
        }

        Ok(())
    }

    /// Get a sprite by ID.
    pub fn get(&self, id: u32) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.sprites.contains_key(&id)
    }

    /// Get the decoded IDs in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.sprites.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over `(id, sprite)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Sprite)> {
        self.sprites.iter().map(|(id, sprite)| (*id, sprite))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Get the outcome counts.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Take the sprite map.
    pub fn into_sprites(self) -> FxHashMap<u32, Sprite> {
        self.sprites
    }
}

/// Loads sprites from a sprite file on disk.
///
/// The manager holds no open file and caches nothing: every call opens the
/// file afresh.
#[derive(Debug, Clone)]
pub struct SpriteManager {
    path: PathBuf,
    layout: SpriteLayout,
    policy: LoadPolicy,
}

impl SpriteManager {
    /// Create a manager for the sprite file at `path`.
    pub fn new<P: AsRef<Path>>(path: P, layout: SpriteLayout) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout,
            policy: LoadPolicy::default(),
        }
    }

    /// Set the policy for malformed sprites during bulk loads.
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> SpriteLayout {
        self.layout
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Open the sprite file.
    pub fn open(&self) -> Result<SpriteFile> {
        SpriteFile::open(&self.path, self.layout)
    }

    /// Load a single sprite.
    pub fn load_by_id(&self, id: u32) -> Result<Sprite> {
        self.open()?.load_sprite(id)
    }

    /// Load every sprite, IDs `0..=count`.
    pub fn load_all(&self) -> Result<SpriteSet> {
        self.load_all_with_progress(|_, _| {})
    }

    /// Load every sprite, reporting `(done, total)` after each ID.
    pub fn load_all_with_progress<F>(&self, progress: F) -> Result<SpriteSet>
    where
        F: FnMut(usize, usize),
    {
        let file = self.open()?;
        load_from(&file, self.policy, progress)
    }

    /// Load every sprite using all available cores.
    #[cfg(feature = "parallel")]
    pub fn load_all_parallel(&self) -> Result<SpriteSet> {
        self.load_all_parallel_with_progress(|_, _| {})
    }

    /// Load every sprite in parallel, reporting `(done, total)` periodically.
    #[cfg(feature = "parallel")]
    pub fn load_all_parallel_with_progress<F>(&self, progress: F) -> Result<SpriteSet>
    where
        F: FnMut(usize, usize) + Send,
    {
        let file = self.open()?;
        load_from_parallel(&file, self.policy, progress)
    }
}

/// Load every sprite of an open file sequentially.
pub(crate) fn load_from<F>(file: &SpriteFile, policy: LoadPolicy, mut progress: F) -> Result<SpriteSet>
where
    F: FnMut(usize, usize),
{
    let count = file.count();
    let total = count as usize + 1;
    let mut set = SpriteSet::with_capacity(total);

    for id in 0..=count {
        set.accept(id, file.load_sprite(id), policy)?;
        progress(id as usize + 1, total);
    }

    debug!(
        loaded = set.report.loaded,
        not_found = set.report.not_found,
        failed = set.report.failed,
        "loaded sprites"
    );

    Ok(set)
}

/// Load every sprite of an open file in parallel.
///
/// Workers share the read-only file bytes; each decode uses its own reader.
/// Results are folded in ID order, so the outcome matches [`load_from`].
#[cfg(feature = "parallel")]
pub(crate) fn load_from_parallel<F>(
    file: &SpriteFile,
    policy: LoadPolicy,
    mut progress: F,
) -> Result<SpriteSet>
where
    F: FnMut(usize, usize) + Send,
{
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use rayon::prelude::*;

    let count = file.count();
    let total = count as usize + 1;

    let done = AtomicUsize::new(0);
    let progress = Mutex::new(&mut progress);

    let results: Vec<(u32, Result<Sprite>)> = (0..=count)
        .into_par_iter()
        .map(|id| {
            let result = file.load_sprite(id);

            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if finished % 256 == 0 || finished == total {
                if let Some(mut p) = progress.try_lock() {
                    (*p)(finished, total);
                }
            }

            (id, result)
        })
        .collect();

    (*progress.lock())(total, total);

    let mut set = SpriteSet::with_capacity(total);
    for (id, result) in results {
        set.accept(id, result, policy)?;
    }

    debug!(
        loaded = set.report.loaded,
        not_found = set.report.not_found,
        failed = set.report.failed,
        "loaded sprites in parallel"
    );

    Ok(set)
}
