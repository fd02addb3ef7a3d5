//! Persistent best-score list fed by finished game sessions.

use cardmaster_core::ScoreRecorder;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("invalid score: {0}")]
    InvalidScore(f64),
    #[error("index {index} is out of range, valid indices are 0 to {bound} (exclusive)")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("leaderboard persistence failed: {0}")]
    Persistence(String),
}

impl From<io::Error> for LeaderboardError {
    fn from(err: io::Error) -> Self {
        LeaderboardError::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub score: f64,
    pub rank: usize,
    pub timestamp: SystemTime,
}

/// Entries ordered by rank; equal scores keep the order they were added in.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a score and returns its rank: one more than the number of
    /// strictly better scores. Entries below it move down one rank.
    pub fn add(&mut self, score: f64) -> Result<usize, LeaderboardError> {
        self.add_at(score, SystemTime::now())
    }

    pub fn add_at(&mut self, score: f64, timestamp: SystemTime) -> Result<usize, LeaderboardError> {
        if !is_valid_score(score) {
            return Err(LeaderboardError::InvalidScore(score));
        }
        let rank = 1 + self.entries.iter().filter(|entry| entry.score > score).count();
        let position = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());
        for entry in &mut self.entries[position..] {
            entry.rank += 1;
        }
        self.entries.insert(
            position,
            Entry {
                score,
                rank,
                timestamp,
            },
        );
        debug!(score, rank, size = self.entries.len(), "score added");
        Ok(rank)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Result<&Entry, LeaderboardError> {
        self.entries.get(index).ok_or(LeaderboardError::IndexOutOfRange {
            index,
            bound: self.entries.len(),
        })
    }

    pub fn score(&self, index: usize) -> Result<f64, LeaderboardError> {
        Ok(self.entry(index)?.score)
    }

    pub fn rank(&self, index: usize) -> Result<usize, LeaderboardError> {
        Ok(self.entry(index)?.rank)
    }

    pub fn timestamp(&self, index: usize) -> Result<SystemTime, LeaderboardError> {
        Ok(self.entry(index)?.timestamp)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Writes the list as big-endian records: an i32 count, then per entry
    /// the f64 score, the i32 rank, and the timestamp as i64 seconds and
    /// i64 nanoseconds since the Unix epoch.
    pub fn save<W: Write>(&self, mut out: W) -> Result<(), LeaderboardError> {
        let count = i32::try_from(self.entries.len())
            .map_err(|_| LeaderboardError::Persistence("too many entries".to_string()))?;
        out.write_all(&count.to_be_bytes())?;
        for entry in &self.entries {
            let rank = i32::try_from(entry.rank).map_err(|_| {
                LeaderboardError::Persistence(format!("rank {} does not fit", entry.rank))
            })?;
            let (seconds, nanos) = split_timestamp(entry.timestamp);
            out.write_all(&entry.score.to_be_bytes())?;
            out.write_all(&rank.to_be_bytes())?;
            out.write_all(&seconds.to_be_bytes())?;
            out.write_all(&nanos.to_be_bytes())?;
        }
        out.flush()?;
        Ok(())
    }

    /// Replaces the entries with the ones read from `input`. On any error the
    /// current entries stay as they were.
    pub fn load<R: Read>(&mut self, mut input: R) -> Result<(), LeaderboardError> {
        let count = read_i32(&mut input)?;
        let count = usize::try_from(count)
            .map_err(|_| LeaderboardError::Persistence(format!("negative entry count {count}")))?;
        let mut loaded = Vec::new();
        for index in 0..count {
            let score = f64::from_be_bytes(read_array(&mut input)?);
            let rank = read_i32(&mut input)?;
            let seconds = i64::from_be_bytes(read_array(&mut input)?);
            let nanos = i64::from_be_bytes(read_array(&mut input)?);
            if !is_valid_score(score) {
                return Err(LeaderboardError::Persistence(format!(
                    "entry {index} has invalid score {score}"
                )));
            }
            let rank = usize::try_from(rank)
                .ok()
                .filter(|rank| *rank >= 1)
                .ok_or_else(|| {
                    LeaderboardError::Persistence(format!("entry {index} has invalid rank {rank}"))
                })?;
            let timestamp = join_timestamp(seconds, nanos).ok_or_else(|| {
                LeaderboardError::Persistence(format!(
                    "entry {index} has invalid timestamp {seconds}s {nanos}ns"
                ))
            })?;
            loaded.push(Entry {
                score,
                rank,
                timestamp,
            });
        }
        self.entries = loaded;
        debug!(size = self.entries.len(), "leaderboard loaded");
        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), LeaderboardError> {
        let file = File::create(path)?;
        self.save(BufWriter::new(file))
    }

    /// A missing file leaves the list empty.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), LeaderboardError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "no leaderboard file yet");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        self.load(BufReader::new(file))
    }
}

impl ScoreRecorder for Leaderboard {
    fn record(&mut self, score: f64) -> Option<usize> {
        match self.add(score) {
            Ok(rank) => Some(rank),
            Err(err) => {
                warn!(%err, "score not recorded");
                None
            }
        }
    }
}

fn is_valid_score(score: f64) -> bool {
    score.is_finite() && score >= 0.0
}

fn read_array<R: Read, const N: usize>(input: &mut R) -> Result<[u8; N], LeaderboardError> {
    let mut buf = [0u8; N];
    input.read_exact(&mut buf)?;
    Ok(buf)
}

fn read_i32<R: Read>(input: &mut R) -> Result<i32, LeaderboardError> {
    Ok(i32::from_be_bytes(read_array(input)?))
}

fn split_timestamp(timestamp: SystemTime) -> (i64, i64) {
    match timestamp.duration_since(UNIX_EPOCH) {
        Ok(since) => (
            i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
            i64::from(since.subsec_nanos()),
        ),
        Err(err) => {
            let before = err.duration();
            let mut seconds = -i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            let mut nanos = i64::from(before.subsec_nanos());
            if nanos > 0 {
                seconds -= 1;
                nanos = 1_000_000_000 - nanos;
            }
            (seconds, nanos)
        }
    }
}

fn join_timestamp(seconds: i64, nanos: i64) -> Option<SystemTime> {
    if !(0..1_000_000_000).contains(&nanos) {
        return None;
    }
    let nanos = Duration::from_nanos(u64::try_from(nanos).ok()?);
    if seconds >= 0 {
        UNIX_EPOCH
            .checked_add(Duration::from_secs(u64::try_from(seconds).ok()?))?
            .checked_add(nanos)
    } else {
        UNIX_EPOCH
            .checked_sub(Duration::from_secs(seconds.unsigned_abs()))?
            .checked_add(nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_survive_the_split() {
        let after = UNIX_EPOCH + Duration::new(1_700_000_000, 123);
        assert_eq!(split_timestamp(after), (1_700_000_000, 123));
        assert_eq!(join_timestamp(1_700_000_000, 123), Some(after));

        let before = UNIX_EPOCH - Duration::new(5, 250);
        let (seconds, nanos) = split_timestamp(before);
        assert_eq!((seconds, nanos), (-6, 999_999_750));
        assert_eq!(join_timestamp(seconds, nanos), Some(before));
    }

    #[test]
    fn join_rejects_out_of_range_nanos() {
        assert_eq!(join_timestamp(1, 1_000_000_000), None);
        assert_eq!(join_timestamp(1, -1), None);
    }

    #[test]
    fn invalid_scores_are_rejected() {
        let mut board = Leaderboard::new();
        for score in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(board.add(score), Err(LeaderboardError::InvalidScore(_))));
        }
        assert!(board.is_empty());
        assert_eq!(board.record(-3.0), None);
    }
}
