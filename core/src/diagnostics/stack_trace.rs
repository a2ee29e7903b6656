use serde::{Deserialize, Serialize};

/// One activation record of a call stack snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    /// File path, or a sentinel such as `<exec>` for dynamically compiled code.
    pub source_label: String,
    pub function_name: String,
    pub line: usize,
}

impl StackFrame {
    pub fn new(source_label: impl Into<String>, function_name: impl Into<String>, line: usize) -> Self {
        Self {
            source_label: source_label.into(),
            function_name: function_name.into(),
            line,
        }
    }
}

/// Call stack kept by the host, outermost caller first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    pub fn pop_frame(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn snapshot(&self) -> Vec<StackFrame> {
        self.frames.clone()
    }

    pub fn format_trace(&self) -> String {
        let mut out = String::new();
        for frame in self.frames.iter().rev() {
            out.push_str(&format!(
                "    at {} ({}:{})\n",
                frame.function_name, frame.source_label, frame.line
            ));
        }
        out
    }
}

impl From<Vec<StackFrame>> for CallStack {
    fn from(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }
}
