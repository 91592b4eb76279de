use crate::audit_report::domain::ApplicationIdentity;
use serde::Serialize;

/// Parent marker for the root of a project list.
pub const ROOT_PARENT: &str = "#";

/// Nested project hierarchy as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTree {
    pub id: u64,
    pub name: String,
    #[serde(rename = "childProject")]
    pub child_projects: Vec<ProjectTree>,
}

impl ProjectTree {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            child_projects: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ProjectTree) -> Self {
        self.child_projects.push(child);
        self
    }

    /// Total number of projects in the tree, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.child_projects.iter());
        }
        count
    }
}

impl Drop for ProjectTree {
    // Children are detached first so deep trees never drop recursively.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.child_projects);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.child_projects);
        }
    }
}

/// One project in the flattened report hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    #[serde(rename = "projectID")]
    pub project_id: u64,
    /// Tree key of the parent node, or [`ROOT_PARENT`] for the root.
    pub parent: String,
    /// Parent-path qualified key; `None` for the root.
    #[serde(rename = "uniqueID", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    pub project_name: String,
    pub project_link: String,
    /// Filled in by the aggregator once custom fields are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationIdentity>,
}

impl ProjectNode {
    pub fn root(project_id: u64, project_name: String, project_link: String) -> Self {
        Self {
            project_id,
            parent: ROOT_PARENT.to_string(),
            unique_id: None,
            project_name,
            project_link,
            application: None,
        }
    }

    pub fn child(
        project_id: u64,
        parent_key: &str,
        project_name: String,
        project_link: String,
    ) -> Self {
        Self {
            project_id,
            parent: parent_key.to_string(),
            unique_id: Some(format!("{}-{}", parent_key, project_id)),
            project_name,
            project_link,
            application: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent == ROOT_PARENT
    }

    /// Key children use to refer to this node: the unique ID, or the bare
    /// project ID for the root.
    pub fn tree_key(&self) -> String {
        self.unique_id
            .clone()
            .unwrap_or_else(|| self.project_id.to_string())
    }

    /// Display name for report rows, falling back to the project name until
    /// the application identity has been resolved.
    pub fn application_name_version(&self) -> &str {
        self.application
            .as_ref()
            .map(|app| app.application_name_version.as_str())
            .unwrap_or(&self.project_name)
    }
}

/// Ordered parent-then-children list of projects. The first node is the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectList(Vec<ProjectNode>);

impl ProjectList {
    pub fn new(root: ProjectNode) -> Self {
        Self(vec![root])
    }

    pub fn push(&mut self, node: ProjectNode) {
        self.0.push(node);
    }

    pub fn root(&self) -> Option<&ProjectNode> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_children(&self) -> bool {
        self.0.len() > 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectNode> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ProjectNode> {
        self.0.iter_mut()
    }

    pub fn find(&self, project_id: u64) -> Option<&ProjectNode> {
        self.0.iter().find(|node| node.project_id == project_id)
    }
}

impl<'a> IntoIterator for &'a ProjectList {
    type Item = &'a ProjectNode;
    type IntoIter = std::slice::Iter<'a, ProjectNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
