use crate::{DocumentTarget, DomError, DomResult, NodeHandle, exception_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportBehavior {
    Accept,
    Unsupported,
    Reject { code: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateBehavior {
    Accept,
    Absent,
    Reject { code: u16 },
}

#[derive(Debug, Clone)]
struct MockNode {
    tag_name: String,
    children: Vec<NodeHandle>,
}

#[derive(Debug, Clone)]
pub struct MockDocument {
    nodes: Vec<MockNode>,
    import_behavior: ImportBehavior,
    create_behavior: CreateBehavior,
    create_calls: usize,
    import_calls: usize,
}

impl MockDocument {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            import_behavior: ImportBehavior::Accept,
            create_behavior: CreateBehavior::Accept,
            create_calls: 0,
            import_calls: 0,
        }
    }

    pub fn unsupported_import() -> Self {
        let mut doc = Self::new();
        doc.import_behavior = ImportBehavior::Unsupported;
        doc
    }

    pub fn with_import(behavior: ImportBehavior) -> Self {
        let mut doc = Self::new();
        doc.import_behavior = behavior;
        doc
    }

    pub fn set_create_behavior(&mut self, behavior: CreateBehavior) {
        self.create_behavior = behavior;
    }

    pub fn append_child(&mut self, parent: NodeHandle, child: NodeHandle) {
        self.nodes[parent.0].children.push(child);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn tag_name(&self, node: NodeHandle) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag_name.as_str())
    }

    pub fn child_count(&self, node: NodeHandle) -> usize {
        self.nodes.get(node.0).map_or(0, |n| n.children.len())
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    pub fn import_calls(&self) -> usize {
        self.import_calls
    }

    fn clone_subtree(&mut self, node: NodeHandle, deep: bool) -> NodeHandle {
        let source = self.nodes[node.0].clone();
        let copy = NodeHandle(self.nodes.len());
        self.nodes.push(MockNode {
            tag_name: source.tag_name,
            children: Vec::new(),
        });
        if deep {
            for child in source.children {
                let imported = self.clone_subtree(child, true);
                self.nodes[copy.0].children.push(imported);
            }
        }
        copy
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTarget for MockDocument {
    fn create_element(&mut self, tag_name: &str) -> DomResult<Option<NodeHandle>> {
        self.create_calls += 1;
        match self.create_behavior {
            CreateBehavior::Accept => {
                let handle = NodeHandle(self.nodes.len());
                self.nodes.push(MockNode {
                    tag_name: tag_name.to_ascii_uppercase(),
                    children: Vec::new(),
                });
                Ok(Some(handle))
            }
            CreateBehavior::Absent => Ok(None),
            CreateBehavior::Reject { code } => Err(DomError::Exception {
                code,
                message: format!("createElement({tag_name}) rejected"),
            }),
        }
    }

    fn import_node(&mut self, node: NodeHandle, deep: bool) -> DomResult<NodeHandle> {
        self.import_calls += 1;
        match self.import_behavior {
            ImportBehavior::Unsupported => Err(DomError::UnsupportedOperation {
                method: "importNode".into(),
            }),
            ImportBehavior::Reject { code } => Err(DomError::Exception {
                code,
                message: "importNode rejected".into(),
            }),
            ImportBehavior::Accept => {
                if node.0 >= self.nodes.len() {
                    return Err(DomError::Exception {
                        code: exception_code::NOT_FOUND_ERR,
                        message: format!("no node with id {}", node.0),
                    });
                }
                Ok(self.clone_subtree(node, deep))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_element_uppercases_the_tag_name() {
        let mut doc = MockDocument::new();
        let handle = doc.create_element("hr").unwrap().unwrap();
        assert_eq!(doc.tag_name(handle), Some("HR"));
        assert_eq!(doc.create_calls(), 1);
    }

    #[test]
    fn deep_import_copies_the_whole_subtree() {
        let mut doc = MockDocument::new();
        let parent = doc.create_element("DIV").unwrap().unwrap();
        let child = doc.create_element("HR").unwrap().unwrap();
        doc.append_child(parent, child);

        let imported = doc.import_node(parent, true).unwrap();
        assert_ne!(imported, parent);
        assert_eq!(doc.tag_name(imported), Some("DIV"));
        assert_eq!(doc.child_count(imported), 1);
        assert_eq!(doc.node_count(), 4);
    }

    #[test]
    fn shallow_import_copies_only_the_node_itself() {
        let mut doc = MockDocument::new();
        let parent = doc.create_element("DIV").unwrap().unwrap();
        let child = doc.create_element("HR").unwrap().unwrap();
        doc.append_child(parent, child);

        let imported = doc.import_node(parent, false).unwrap();
        assert_eq!(doc.child_count(imported), 0);
    }

    #[test]
    fn unsupported_import_rejects_every_attempt() {
        let mut doc = MockDocument::unsupported_import();
        let handle = doc.create_element("HR").unwrap().unwrap();
        assert_eq!(
            doc.import_node(handle, true),
            Err(DomError::UnsupportedOperation {
                method: "importNode".into()
            })
        );
        assert_eq!(doc.import_calls(), 1);
    }

    #[test]
    fn accept_import_of_an_unknown_handle_is_a_not_found_rejection() {
        let mut doc = MockDocument::new();
        let result = doc.import_node(NodeHandle(7), true);
        assert_eq!(
            result,
            Err(DomError::Exception {
                code: exception_code::NOT_FOUND_ERR,
                message: "no node with id 7".into(),
            })
        );
    }

    #[test]
    fn create_behavior_absent_returns_no_element_without_an_error() {
        let mut doc = MockDocument::new();
        doc.set_create_behavior(CreateBehavior::Absent);
        assert_eq!(doc.create_element("HR"), Ok(None));
    }
}
