use crate::{Error, Result};

pub trait TestLogger {
    fn log_print(&mut self, message: &str);
    fn log_err_print(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Out,
    Err,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdLogger;

impl TestLogger for StdLogger {
    fn log_print(&mut self, message: &str) {
        println!("{message}");
    }

    fn log_err_print(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

#[derive(Debug, Clone)]
pub struct BufferLogger {
    lines: Vec<LogLine>,
    line_limit: usize,
    mirror_to_stderr: bool,
}

impl BufferLogger {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            line_limit: 10_000,
            mirror_to_stderr: false,
        }
    }

    pub fn set_line_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Config(
                "set_line_limit requires at least 1 entry".into(),
            ));
        }
        self.line_limit = max_entries;
        while self.lines.len() > self.line_limit {
            self.lines.remove(0);
        }
        Ok(())
    }

    pub fn set_mirror_stderr(&mut self, enabled: bool) {
        self.mirror_to_stderr = enabled;
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn take_lines(&mut self) -> Vec<LogLine> {
        std::mem::take(&mut self.lines)
    }

    fn push(&mut self, kind: LogKind, message: &str) {
        if self.mirror_to_stderr {
            eprintln!("{message}");
        }
        self.lines.push(LogLine {
            kind,
            text: message.to_string(),
        });
        while self.lines.len() > self.line_limit {
            self.lines.remove(0);
        }
    }
}

impl Default for BufferLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLogger for BufferLogger {
    fn log_print(&mut self, message: &str) {
        self.push(LogKind::Out, message);
    }

    fn log_err_print(&mut self, message: &str) {
        self.push(LogKind::Err, message);
    }
}

// Adapter for drivers that already run a `log` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLogger;

impl TestLogger for FacadeLogger {
    fn log_print(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn log_err_print(&mut self, message: &str) {
        log::error!("{message}");
    }
}
