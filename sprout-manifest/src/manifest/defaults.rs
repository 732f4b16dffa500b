//! Reference configuration used when no sprout.toml is present.

use sprout_core::{FileName, InvalidFileName};

/// Conventional manifest file name.
pub const MANIFEST_FILE: &str = "sprout.toml";

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "components";

/// Default file list, in processing order.
pub const DEFAULT_FILES: &[&str] = &[
    "input.tsx",
    "label.tsx",
    "menubar.tsx",
    "navigation-menu.tsx",
    "pagination.tsx",
    "popover.tsx",
    "progress.tsx",
    "radio-group.tsx",
    "resizable.tsx",
    "scroll-area.tsx",
    "select.tsx",
    "separator.tsx",
    "sheet.tsx",
    "sidebar.tsx",
    "skeleton.tsx",
    "slider.tsx",
    "sonner.tsx",
    "switch.tsx",
    "table.tsx",
    "tabs.tsx",
    "textarea.tsx",
    "toast.tsx",
    "toaster.tsx",
    "toggle-group.tsx",
    "toggle.tsx",
    "tooltip.tsx",
    "use-toast.ts",
];

pub(super) fn default_files() -> Vec<FileName> {
    file_names(DEFAULT_FILES).expect("built-in file list holds only valid names")
}

fn file_names(names: &[&str]) -> Result<Vec<FileName>, InvalidFileName> {
    names.iter().map(|name| FileName::new(*name)).collect()
}
