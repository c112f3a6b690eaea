//! Output assembly: excluded folders plus whatever survived the merge pass.

use std::path::Path;

use serde::Serialize;

use super::engine::Accumulator;
use crate::folder::Folder;

/// The minimal folder set produced by one merge pass
///
/// Folders are kept in path order (kind breaks ties) so that rendering the
/// set is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SimplifiedFolders {
    folders: Vec<Folder>,
}

impl SimplifiedFolders {
    pub fn iter(&self) -> std::slice::Iter<'_, Folder> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// The folder at `path`, if one survived.
    pub fn get(&self, path: &Path) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.path() == path)
    }

    /// Folders that went through the merge engine.
    pub fn merged(&self) -> impl Iterator<Item = &Folder> + '_ {
        self.folders.iter().filter(|folder| !folder.is_excluded())
    }

    /// Excluded folders, exactly as they were passed in.
    pub fn excluded(&self) -> impl Iterator<Item = &Folder> + '_ {
        self.folders.iter().filter(|folder| folder.is_excluded())
    }

    pub fn into_vec(self) -> Vec<Folder> {
        self.folders
    }
}

impl IntoIterator for SimplifiedFolders {
    type Item = Folder;
    type IntoIter = std::vec::IntoIter<Folder>;

    fn into_iter(self) -> Self::IntoIter {
        self.folders.into_iter()
    }
}

impl<'a> IntoIterator for &'a SimplifiedFolders {
    type Item = &'a Folder;
    type IntoIter = std::slice::Iter<'a, Folder>;

    fn into_iter(self) -> Self::IntoIter {
        self.folders.iter()
    }
}

/// Combine pass-through excluded folders with the accumulator's survivors.
pub fn assemble(excluded: Vec<Folder>, accumulator: Accumulator) -> SimplifiedFolders {
    let mut folders = excluded;
    folders.extend(accumulator.into_folders());
    folders.sort_by(|a, b| a.path().cmp(b.path()).then(a.kind().cmp(&b.kind())));
    SimplifiedFolders { folders }
}
