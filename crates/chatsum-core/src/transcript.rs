//! Transcript parsing and discovery
//!
//! A transcript is plain UTF-8 text with one utterance per line. Lines starting
//! with `User:` or `AI:` become turns; every other line is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{ChatsumError, Result};

const USER_MARKER: &str = "User:";
const AI_MARKER: &str = "AI:";
const TRANSCRIPT_SUFFIX: &str = ".txt";

/// The two participants of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    #[serde(rename = "ai")]
    Ai,
}

impl Speaker {
    fn marker(self) -> &'static str {
        match self {
            Speaker::User => USER_MARKER,
            Speaker::Ai => AI_MARKER,
        }
    }
}

/// A single utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    /// Classify one line of a transcript.
    ///
    /// Surrounding whitespace is ignored both before the marker test and on the
    /// extracted text. Returns `None` for blank or unlabeled lines.
    pub fn parse_line(line: &str) -> Option<Turn> {
        let line = line.trim();
        [Speaker::User, Speaker::Ai].into_iter().find_map(|speaker| {
            line.strip_prefix(speaker.marker()).map(|rest| Turn {
                speaker,
                text: rest.trim().to_string(),
            })
        })
    }
}

/// Turns split by speaker, each in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub user_turns: Vec<String>,
    pub ai_turns: Vec<String>,
}

impl Transcript {
    /// Parse transcript text
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut transcript = Transcript::default();

        for turn in text.lines().filter_map(Turn::parse_line) {
            match turn.speaker {
                Speaker::User => transcript.user_turns.push(turn.text),
                Speaker::Ai => transcript.ai_turns.push(turn.text),
            }
        }

        transcript
    }

    /// Read and parse a transcript file.
    ///
    /// Invalid UTF-8 is reported as [`ChatsumError::Decode`] rather than
    /// being replaced lossily.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| ChatsumError::io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| ChatsumError::Decode {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?;

        let transcript = Self::parse(&text);
        tracing::debug!(
            path = %path.display(),
            user_turns = transcript.user_turns.len(),
            ai_turns = transcript.ai_turns.len(),
            "parsed transcript"
        );
        Ok(transcript)
    }

    pub fn is_empty(&self) -> bool {
        self.user_turns.is_empty() && self.ai_turns.is_empty()
    }
}

/// List the transcript files directly inside `folder`.
///
/// Only regular files (or symlinks to them) whose name ends with `.txt` are
/// returned, sorted lexicographically by file name. Subdirectories are not
/// descended into.
pub fn discover_transcripts(folder: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(folder).map_err(|e| ChatsumError::io(folder, e))?;
    if !metadata.is_dir() {
        return Err(ChatsumError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                return Err(ChatsumError::io(folder, source));
            }
            Err(e) => {
                // Keep unreadable transcripts (dangling symlinks, denied
                // metadata) so loading reports them as per-file failures
                match e.path() {
                    Some(path) if is_transcript_name(path) => files.push(path.to_path_buf()),
                    _ => tracing::debug!(error = %e, "skipping unreadable entry"),
                }
                continue;
            }
        };

        if entry.file_type().is_file() && is_transcript_name(entry.path()) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(folder = %folder.display(), count = files.len(), "discovered transcripts");
    Ok(files)
}

fn is_transcript_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TRANSCRIPT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_line_markers() {
        assert_eq!(
            Turn::parse_line("User: Hello there"),
            Some(Turn {
                speaker: Speaker::User,
                text: "Hello there".to_string()
            })
        );
        assert_eq!(
            Turn::parse_line("AI:Hi!  "),
            Some(Turn {
                speaker: Speaker::Ai,
                text: "Hi!".to_string()
            })
        );
        assert_eq!(Turn::parse_line(""), None);
        assert_eq!(Turn::parse_line("Assistant: nope"), None);
        assert_eq!(Turn::parse_line("user: lowercase marker"), None);
    }

    #[test]
    fn test_parse_line_ignores_indentation() {
        let turn = Turn::parse_line("   User:   spaced out  ").unwrap();
        assert_eq!(turn.speaker, Speaker::User);
        assert_eq!(turn.text, "spaced out");
    }

    #[test]
    fn test_parse_splits_by_speaker_in_order() {
        let text = "User: one\nAI: two\n\nnoise\nUser: three\r\nAI: four\n";
        let transcript = Transcript::parse(text);
        assert_eq!(transcript.user_turns, vec!["one", "three"]);
        assert_eq!(transcript.ai_turns, vec!["two", "four"]);
    }

    #[test]
    fn test_parse_strips_bom() {
        let transcript = Transcript::parse("\u{feff}User: hi\nAI: hello");
        assert_eq!(transcript.user_turns, vec!["hi"]);
        assert_eq!(transcript.ai_turns, vec!["hello"]);
    }

    #[test]
    fn test_parse_unlabeled_input_is_empty() {
        let transcript = Transcript::parse("\n\nhello\nSystem: boot\n");
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Transcript::load(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ChatsumError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"User: ok\n\xff\xfe").unwrap();

        let err = Transcript::load(&path).unwrap_err();
        match err {
            ChatsumError::Decode { offset, .. } => assert_eq!(offset, 9),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "User: b").unwrap();
        fs::write(dir.path().join("a.txt"), "User: a").unwrap();
        fs::write(dir.path().join("c.log"), "User: c").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        fs::write(dir.path().join("nested.txt").join("d.txt"), "User: d").unwrap();

        let files = discover_transcripts(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_rejects_file_and_missing_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "User: a").unwrap();

        assert!(matches!(
            discover_transcripts(&file).unwrap_err(),
            ChatsumError::NotADirectory { .. }
        ));
        assert!(matches!(
            discover_transcripts(&dir.path().join("missing")).unwrap_err(),
            ChatsumError::NotFound { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_keeps_dangling_transcript_link() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "User: a").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("b.txt")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("d.log")).unwrap();
        fs::write(dir.path().join("c.txt"), "User: c").unwrap();

        let files = discover_transcripts(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);

        assert!(matches!(
            Transcript::load(&files[1]).unwrap_err(),
            ChatsumError::NotFound { .. }
        ));
    }
}
