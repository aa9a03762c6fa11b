//! This module provides a collection of Markdown notes, that can be stored in a local folder

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::PostponeError;
use crate::markdown::{parse_task_line, ParsedLine};
use crate::mock_behaviour::MockBehaviour;
use crate::task::Task;
use crate::traits::{CollaboratorError, DocumentRef, TaskSaver, Workspace};

const NOTE_EXTENSION: &str = "md";

/// A set of notes, indexed by their basename.
///
/// This implements both [`TaskSaver`] and [`Workspace`], so that it can back the postponement and relocation workflows.
#[derive(Debug, Default)]
pub struct Vault {
    folder: Option<PathBuf>,
    notes: Mutex<BTreeMap<String, String>>,
    active: Mutex<Option<String>>,
    mock_behaviour: Mutex<MockBehaviour>,
}

impl Vault {
    /// Create an empty vault, that only lives in memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.md` file of a folder (sub-folders are not visited)
    pub fn from_folder(folder: &Path) -> Result<Self, PostponeError> {
        let mut notes = BTreeMap::new();
        for entry in std::fs::read_dir(folder)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(NOTE_EXTENSION) {
                continue;
            }
            let basename = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => {
                    log::warn!("Ignoring {:?}, its name is not valid UTF-8", path);
                    continue;
                },
            };
            let content = std::fs::read_to_string(&path)?;
            notes.insert(basename, content);
        }
        log::debug!("Loaded {} notes from {:?}", notes.len(), folder);

        Ok(Self {
            folder: Some(folder.to_path_buf()),
            notes: Mutex::new(notes),
            ..Self::default()
        })
    }

    /// Store every note back to the folder this vault has been loaded from
    pub fn save_to_folder(&self) -> Result<(), PostponeError> {
        let folder = match &self.folder {
            Some(folder) => folder,
            None => return Err(PostponeError::Persistence(String::from("This vault has no backing folder"))),
        };
        for (basename, content) in self.lock_notes().iter() {
            let path = folder.join(format!("{}.{}", basename, NOTE_EXTENSION));
            std::fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn add_note(&self, basename: &str, content: &str) {
        self.lock_notes().insert(basename.to_string(), content.to_string());
    }

    pub fn note(&self, basename: &str) -> Option<String> {
        self.lock_notes().get(basename).cloned()
    }

    /// Open a note (or close every note if `basename` is `None`)
    pub fn set_active(&self, basename: Option<&str>) {
        let mut active = match self.active.lock() {
            Ok(active) => active,
            Err(poisoned) => poisoned.into_inner(),
        };
        *active = basename.map(|name| name.to_string());
    }

    /// Returns the task written at a given line (starting at 1) of a note
    pub fn task_at(&self, basename: &str, line_number: usize) -> Result<Task, PostponeError> {
        let content = self.note(basename)
            .ok_or_else(|| PostponeError::TaskNotFound { note: basename.to_string() })?;
        if line_number == 0 {
            return Err(PostponeError::TaskNotFound { note: format!("{}:{}", basename, line_number) });
        }
        content.lines()
            .nth(line_number - 1)
            .and_then(parse_task_line)
            .map(|parsed| parsed.task)
            .ok_or_else(|| PostponeError::TaskNotFound { note: format!("{}:{}", basename, line_number) })
    }

    /// Returns every task of a note, with their line numbers (starting at 1)
    pub fn tasks(&self, basename: &str) -> Vec<(usize, Task)> {
        match self.note(basename) {
            None => Vec::new(),
            Some(content) => content.lines()
                .enumerate()
                .filter_map(|(index, line)| parse_task_line(line).map(|parsed| (index + 1, parsed.task)))
                .collect(),
        }
    }

    /// Tweak this vault so that some of its operations fail
    pub fn set_mock_behaviour(&self, behaviour: MockBehaviour) {
        *self.lock_mock_behaviour() = behaviour;
    }

    fn lock_notes(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        match self.notes.lock() {
            Ok(notes) => notes,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_mock_behaviour(&self) -> std::sync::MutexGuard<'_, MockBehaviour> {
        match self.mock_behaviour.lock() {
            Ok(behaviour) => behaviour,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Replace the first line of `content` that holds `original`. Returns `None` if there is no such line
fn replace_task(content: &str, original: &Task, updated: &Task) -> Option<String> {
    let mut replaced = false;
    let lines: Vec<String> = content.split('\n')
        .map(|line| {
            if replaced {
                return line.to_string();
            }
            let (text, eol) = match line.strip_suffix('\r') {
                Some(text) => (text, "\r"),
                None => (line, ""),
            };
            match parse_task_line(text) {
                Some(parsed) if &parsed.task == original => {
                    replaced = true;
                    format!("{}{}", ParsedLine::rebuild_with(&parsed, updated), eol)
                },
                _ => line.to_string(),
            }
        })
        .collect();

    if replaced {
        Some(lines.join("\n"))
    } else {
        None
    }
}

#[async_trait]
impl TaskSaver for Vault {
    async fn save(&self, original: &Task, updated: &Task) -> Result<(), CollaboratorError> {
        self.lock_mock_behaviour().can_save_task()?;

        let mut notes = self.lock_notes();
        for (basename, content) in notes.iter_mut() {
            if let Some(new_content) = replace_task(content, original, updated) {
                log::debug!("Saving task {:?} in {}", updated.description(), basename);
                *content = new_content;
                return Ok(());
            }
        }
        Err(PostponeError::TaskNotFound { note: String::from("any note") }.into())
    }
}

#[async_trait]
impl Workspace for Vault {
    fn active_document(&self) -> Option<DocumentRef> {
        let active = match self.active.lock() {
            Ok(active) => active,
            Err(poisoned) => poisoned.into_inner(),
        };
        active.clone().map(DocumentRef::new)
    }

    async fn read(&self, doc: &DocumentRef) -> Result<String, CollaboratorError> {
        self.lock_mock_behaviour().can_read()?;
        match self.note(doc.basename()) {
            Some(content) => Ok(content),
            None => Err(format!("Note {} does not exist", doc.basename()).into()),
        }
    }

    async fn write(&self, doc: &DocumentRef, content: String) -> Result<(), CollaboratorError> {
        self.lock_mock_behaviour().can_write()?;
        self.lock_notes().insert(doc.basename().to_string(), content);
        Ok(())
    }
}
