//! Stub file generators, one per recognized file kind.

mod component_tsx;
mod module_ts;

pub use component_tsx::{ComponentTsx, FRAMEWORK_IMPORT, FRAMEWORK_MODULE};
pub use module_ts::ModuleTs;

use std::path::{Path, PathBuf};

use sprout_core::{FileKind, FileName, FileRules, GeneratedFile};

/// The stub for a single configured file, chosen by its suffix.
pub enum Stub {
    Component(ComponentTsx),
    Module(ModuleTs),
}

impl Stub {
    /// Select the stub generator for a file name.
    pub fn for_file(file: FileName) -> Self {
        match file.kind() {
            FileKind::Component => Self::Component(ComponentTsx::new(file)),
            FileKind::Module => Self::Module(ModuleTs::new(file)),
        }
    }

    pub fn file(&self) -> &FileName {
        match self {
            Self::Component(stub) => stub.file(),
            Self::Module(stub) => stub.file(),
        }
    }
}

impl GeneratedFile for Stub {
    fn path(&self, base: &Path) -> PathBuf {
        match self {
            Self::Component(stub) => stub.path(base),
            Self::Module(stub) => stub.path(base),
        }
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        match self {
            Self::Component(stub) => stub.render(),
            Self::Module(stub) => stub.render(),
        }
    }
}
