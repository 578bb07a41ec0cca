use std::error::Error as StdError;
use std::fmt;

mod cases;
mod logger;
mod mock_dom;
mod platform;
mod suite;

pub use cases::ImportNodeDeepUnsupported;
pub use logger::{BufferLogger, FacadeLogger, LogKind, LogLine, StdLogger, TestLogger};
pub use mock_dom::{CreateBehavior, ImportBehavior, MockDocument};
pub use platform::{PLATFORM_ENV_VAR, Platform};
pub use suite::{Suite, SuiteReport};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DuplicateCase(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCase(name) => write!(f, "duplicate test case: {name}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl StdError for Error {}

// W3C DOMException codes, DOM Level 2.
pub mod exception_code {
    pub const INDEX_SIZE_ERR: u16 = 1;
    pub const HIERARCHY_REQUEST_ERR: u16 = 3;
    pub const WRONG_DOCUMENT_ERR: u16 = 4;
    pub const INVALID_CHARACTER_ERR: u16 = 5;
    pub const NOT_FOUND_ERR: u16 = 8;
    pub const NOT_SUPPORTED_ERR: u16 = 9;
    pub const INVALID_STATE_ERR: u16 = 11;
}

pub type DomResult<T> = std::result::Result<T, DomError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    UnsupportedOperation { method: String },
    Exception { code: u16, message: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation { method } => {
                write!(f, "unsupported operation: {method}")
            }
            Self::Exception { code, message } => {
                write!(f, "DOMException code {code}: {message}")
            }
        }
    }
}

impl StdError for DomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("PASSED"),
            Self::Failed => f.write_str("FAILED"),
        }
    }
}

// The capability set a test case needs from the document under test. The
// concrete DOM implementation stays behind this trait; handles are opaque.
pub trait DocumentTarget {
    fn create_element(&mut self, tag_name: &str) -> DomResult<Option<NodeHandle>>;
    fn import_node(&mut self, node: NodeHandle, deep: bool) -> DomResult<NodeHandle>;
}

pub struct TestContext<'a> {
    platform: Option<Platform>,
    expect_unsupported: bool,
    logger: &'a mut dyn TestLogger,
}

impl<'a> TestContext<'a> {
    pub fn new(logger: &'a mut dyn TestLogger) -> Self {
        Self {
            platform: None,
            expect_unsupported: false,
            logger,
        }
    }

    pub fn from_env(logger: &'a mut dyn TestLogger) -> Self {
        Self::new(logger).with_platform(Platform::from_env())
    }

    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn platform_skips(&self, case_name: &str) -> bool {
        self.platform
            .is_some_and(|platform| platform.skips_case(case_name))
    }

    // Suite-wide bookkeeping; has no effect on classification.
    pub fn set_expect_unsupported(&mut self, expected: bool) {
        self.expect_unsupported = expected;
    }

    pub fn expects_unsupported(&self) -> bool {
        self.expect_unsupported
    }

    pub fn log(&mut self, message: &str) {
        self.logger.log_print(message);
    }

    pub fn log_err(&mut self, message: &str) {
        self.logger.log_err_print(message);
    }
}

pub trait TestCase {
    fn name(&self) -> &str;
    fn execute(
        &self,
        target: Option<&mut (dyn DocumentTarget + '_)>,
        cx: &mut TestContext<'_>,
    ) -> Outcome;
}
