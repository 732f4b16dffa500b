//! React function component stub for `.tsx` files.

use std::path::{Path, PathBuf};

use sprout_core::{ComponentName, FileName, FileRules, GeneratedFile};

use crate::{
    ast::{ArrowFn, Const, Import, JsxElement},
    builder::Indent,
    code_file::CodeFile,
};

/// Module the stub imports the UI framework from.
pub const FRAMEWORK_MODULE: &str = "react";

/// Default import bound from [`FRAMEWORK_MODULE`].
pub const FRAMEWORK_IMPORT: &str = "React";

/// A placeholder component that renders its own name.
///
/// ```tsx
/// import React from "react";
///
/// export const NavigationMenu = () => {
///     return <div>NavigationMenu</div>;
/// };
/// ```
pub struct ComponentTsx {
    file: FileName,
    name: ComponentName,
}

impl ComponentTsx {
    pub fn new(file: FileName) -> Self {
        let name = file.display_name();
        Self { file, name }
    }

    pub fn file(&self) -> &FileName {
        &self.file
    }

    fn build_component(&self) -> Const {
        let element = JsxElement::new("div", self.name.as_str());
        Const::new(
            self.name.as_str(),
            ArrowFn::new().body_line(format!("return {};", element)),
        )
    }
}

impl GeneratedFile for ComponentTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file.as_str())
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new(FRAMEWORK_IMPORT, FRAMEWORK_MODULE))
            .add(self.build_component())
            .render(Indent::STUB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str) -> ComponentTsx {
        ComponentTsx::new(FileName::new(name).unwrap())
    }

    #[test]
    fn test_render_navigation_menu() {
        insta::assert_snapshot!(component("navigation-menu.tsx").render(), @r#"
        import React from "react";

        export const NavigationMenu = () => {
            return <div>NavigationMenu</div>;
        };
        "#);
    }

    #[test]
    fn test_render_exact_bytes() {
        assert_eq!(
            component("toggle-group.tsx").render(),
            "import React from \"react\";\n\nexport const ToggleGroup = () => {\n    return <div>ToggleGroup</div>;\n};\n"
        );
    }

    #[test]
    fn test_name_appears_twice() {
        let content = component("radio-group.tsx").render();
        assert_eq!(content.matches("RadioGroup").count(), 2);
        assert!(content.contains("export const RadioGroup = "));
        assert!(content.contains("<div>RadioGroup</div>"));
    }

    #[test]
    fn test_preserves_inner_casing() {
        let content = component("my-HTTP-status.tsx").render();
        assert!(content.contains("export const MyHTTPStatus = "));
        assert!(content.contains("<div>MyHTTPStatus</div>"));
    }
}
