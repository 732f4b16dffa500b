//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a failure as a key-value pair on the error stream.
    fn failure(&mut self, key: &str, value: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn failure(&mut self, key: &str, value: &str) {
        eprintln!("{}: {}", key, value);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines in memory for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct BufferOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push(format!("  {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push(format!("warning: {}", msg));
    }

    fn failure(&mut self, key: &str, value: &str) {
        self.stderr.push(format!("{}: {}", key, value));
    }

    fn divider(&mut self, label: &str) {
        self.stdout.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn newline(&mut self) {
        self.stdout.push(String::new());
    }
}
