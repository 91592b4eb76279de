use crate::audit_report::domain::{ProjectList, ProjectNode, ProjectTree};

/// Flattens a project tree into the ordered list the report walks.
pub struct ProjectHierarchyBuilder;

impl ProjectHierarchyBuilder {
    /// Builds the project list for a report.
    ///
    /// The root always comes first. With `include_child_projects` the rest of
    /// the tree follows in pre-order, siblings sorted by name. The walk uses an
    /// explicit stack, so tree depth is bounded only by memory.
    ///
    /// # Arguments
    /// * `tree` - Root project and its descendants
    /// * `include_child_projects` - Whether to descend below the root
    /// * `project_link` - Builds the server link for a project ID
    pub fn build<F>(tree: &ProjectTree, include_child_projects: bool, project_link: F) -> ProjectList
    where
        F: Fn(u64) -> String,
    {
        let root = ProjectNode::root(tree.id, tree.name.clone(), project_link(tree.id));
        let mut projects = ProjectList::new(root);

        if !include_child_projects {
            return projects;
        }

        let mut stack: Vec<(&ProjectTree, String)> = Vec::new();
        Self::push_children(&mut stack, tree, tree.id.to_string());

        while let Some((project, parent_key)) = stack.pop() {
            let node = ProjectNode::child(
                project.id,
                &parent_key,
                project.name.clone(),
                project_link(project.id),
            );
            let key = node.tree_key();
            projects.push(node);
            Self::push_children(&mut stack, project, key);
        }

        projects
    }

    /// Pushes children in reverse name order so they pop in ascending order.
    fn push_children<'a>(
        stack: &mut Vec<(&'a ProjectTree, String)>,
        parent: &'a ProjectTree,
        parent_key: String,
    ) {
        let mut children: Vec<&ProjectTree> = parent.child_projects.iter().collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        stack.extend(
            children
                .into_iter()
                .rev()
                .map(|child| (child, parent_key.clone())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: u64) -> String {
        format!("https://fnci.example/projects/{}", id)
    }

    fn sample_tree() -> ProjectTree {
        ProjectTree::new(1, "Root")
            .with_child(
                ProjectTree::new(5, "beta")
                    .with_child(ProjectTree::new(8, "zeta"))
                    .with_child(ProjectTree::new(7, "Eta")),
            )
            .with_child(ProjectTree::new(3, "Alpha"))
            .with_child(ProjectTree::new(4, "alpha"))
    }

    #[test]
    fn test_without_children_only_root() {
        let tree = sample_tree();
        let projects = ProjectHierarchyBuilder::build(&tree, false, link);
        assert_eq!(projects.len(), 1);
        let root = projects.root().unwrap();
        assert_eq!(root.project_id, 1);
        assert_eq!(root.parent, "#");
        assert!(root.unique_id.is_none());
        assert_eq!(root.project_link, "https://fnci.example/projects/1");
    }

    #[test]
    fn test_with_children_preorder_sorted_by_name() {
        let tree = sample_tree();
        let projects = ProjectHierarchyBuilder::build(&tree, true, link);

        assert_eq!(projects.len(), tree.node_count());
        let names: Vec<&str> = projects.iter().map(|p| p.project_name.as_str()).collect();
        // Case-sensitive ordering: uppercase sorts before lowercase
        assert_eq!(names, vec!["Root", "Alpha", "alpha", "beta", "Eta", "zeta"]);
    }

    #[test]
    fn test_unique_ids_and_parents() {
        let tree = sample_tree();
        let projects = ProjectHierarchyBuilder::build(&tree, true, link);

        let beta = projects.find(5).unwrap();
        assert_eq!(beta.parent, "1");
        assert_eq!(beta.unique_id.as_deref(), Some("1-5"));

        let eta = projects.find(7).unwrap();
        assert_eq!(eta.parent, "1-5");
        assert_eq!(eta.unique_id.as_deref(), Some("1-5-7"));
        assert_eq!(eta.project_link, "https://fnci.example/projects/7");
    }

    #[test]
    fn test_leaf_root_with_children_enabled() {
        let tree = ProjectTree::new(10, "Solo");
        let projects = ProjectHierarchyBuilder::build(&tree, true, link);
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        // Keys carry the full parent path, so memory grows with depth squared.
        let depth = 10_000;
        let mut tree = ProjectTree::new(depth, format!("p{}", depth));
        for id in (0..depth).rev() {
            tree = ProjectTree::new(id, format!("p{}", id)).with_child(tree);
        }

        let projects = ProjectHierarchyBuilder::build(&tree, true, |_| String::new());
        assert_eq!(projects.len(), depth as usize + 1);
    }

    #[test]
    fn test_siblings_ascending_at_every_level() {
        let tree = sample_tree();
        let projects = ProjectHierarchyBuilder::build(&tree, true, link);
        let nodes: Vec<_> = projects.iter().collect();
        for parent in &nodes {
            let siblings: Vec<&str> = nodes
                .iter()
                .filter(|n| !n.is_root() && n.parent == parent.tree_key())
                .map(|n| n.project_name.as_str())
                .collect();
            let mut sorted = siblings.clone();
            sorted.sort();
            assert_eq!(siblings, sorted);
        }
    }
}
