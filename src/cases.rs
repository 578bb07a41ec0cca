use crate::{DocumentTarget, DomError, Outcome, TestCase, TestContext};

const SETUP_TAG_NAME: &str = "HR";

// Document.importNode(node, deep=true) against an implementation that does
// not support node import. Any DOM-level rejection of the import counts as
// confirmation of non-support; a successful import is the failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportNodeDeepUnsupported;

impl ImportNodeDeepUnsupported {
    pub fn new() -> Self {
        Self
    }
}

impl TestCase for ImportNodeDeepUnsupported {
    fn name(&self) -> &str {
        "Document.importNode(node, deep=true) unsupported"
    }

    fn execute(
        &self,
        target: Option<&mut (dyn DocumentTarget + '_)>,
        cx: &mut TestContext<'_>,
    ) -> Outcome {
        let Some(doc) = target else {
            cx.log_err("target object is missing");
            return Outcome::Failed;
        };

        if cx.platform_skips(self.name()) {
            cx.log(&format!("{} skipped on this platform", self.name()));
            return Outcome::Passed;
        }
        cx.set_expect_unsupported(true);

        let element = match doc.create_element(SETUP_TAG_NAME) {
            Ok(Some(handle)) => handle,
            Ok(None) => {
                cx.log_err(&format!("createElement({SETUP_TAG_NAME}) returned no element"));
                return Outcome::Failed;
            }
            Err(error) => {
                cx.log_err(&format!(
                    "createElement({SETUP_TAG_NAME}) failed during setup: {error}"
                ));
                return Outcome::Failed;
            }
        };

        match doc.import_node(element, true) {
            Ok(_) => {
                cx.log_err("importNode(node, true) succeeded, expected it to be unsupported");
                Outcome::Failed
            }
            Err(DomError::UnsupportedOperation { .. }) => {
                cx.log("importNode(node, true) is unsupported");
                Outcome::Passed
            }
            Err(error @ DomError::Exception { .. }) => {
                cx.log(&format!("importNode(node, true) rejected: {error}"));
                Outcome::Passed
            }
        }
    }
}
