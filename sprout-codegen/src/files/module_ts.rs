//! Plain module stub: an empty `.ts` file.

use std::path::{Path, PathBuf};

use sprout_core::{FileName, FileRules, GeneratedFile};

/// An empty TypeScript module.
pub struct ModuleTs {
    file: FileName,
}

impl ModuleTs {
    pub fn new(file: FileName) -> Self {
        Self { file }
    }

    pub fn file(&self) -> &FileName {
        &self.file
    }
}

impl GeneratedFile for ModuleTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file.as_str())
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        String::new()
    }
}
