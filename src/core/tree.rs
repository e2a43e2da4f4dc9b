use serde::Serialize;

/// Leaf node: a drug and the number of resistant strains in its fine cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugNode {
    pub name: String,
    pub value: usize,
}

/// One fine (`HC100`) cluster nested inside a coarse cluster.
///
/// `value` is the number of strains assigned to the cluster, independent of
/// how many of them carry resistant calls. `children` may be empty — fine
/// clusters are never pruned for having no resistant drugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FineClusterNode {
    pub name: String,
    pub hc100: i64,
    pub value: usize,
    pub children: Vec<DrugNode>,
}

/// One coarse (`HC500`) cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoarseClusterNode {
    pub name: String,
    pub hc500: i64,
    pub value: usize,
    pub children: Vec<FineClusterNode>,
}

/// The full three-level aggregation tree, ready for JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyTree {
    pub name: String,
    pub children: Vec<CoarseClusterNode>,
}

impl FineClusterNode {
    #[must_use]
    pub fn new(hc100: i64, value: usize, children: Vec<DrugNode>) -> Self {
        Self {
            name: format!("HC100_{hc100}"),
            hc100,
            value,
            children,
        }
    }
}

impl CoarseClusterNode {
    #[must_use]
    pub fn new(hc500: i64, value: usize, children: Vec<FineClusterNode>) -> Self {
        Self {
            name: format!("HC500_{hc500}"),
            hc500,
            value,
            children,
        }
    }
}

impl HierarchyTree {
    #[must_use]
    pub fn new(name: impl Into<String>, children: Vec<CoarseClusterNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Number of coarse cluster nodes directly under the root.
    #[must_use]
    pub fn coarse_count(&self) -> usize {
        self.children.len()
    }

    /// Total number of fine cluster nodes across all coarse clusters.
    #[must_use]
    pub fn fine_count(&self) -> usize {
        self.children.iter().map(|c| c.children.len()).sum()
    }

    /// Total number of strain rows represented by the tree.
    #[must_use]
    pub fn total_strains(&self) -> usize {
        self.children.iter().map(|c| c.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_names_include_cluster_ids() {
        let fine = FineClusterNode::new(10, 2, vec![]);
        assert_eq!(fine.name, "HC100_10");
        let coarse = CoarseClusterNode::new(1, 2, vec![fine]);
        assert_eq!(coarse.name, "HC500_1");
    }

    #[test]
    fn test_counts() {
        let tree = HierarchyTree::new(
            "MTB",
            vec![
                CoarseClusterNode::new(1, 3, vec![FineClusterNode::new(10, 3, vec![])]),
                CoarseClusterNode::new(
                    2,
                    1,
                    vec![
                        FineClusterNode::new(20, 1, vec![]),
                        FineClusterNode::new(21, 0, vec![]),
                    ],
                ),
            ],
        );
        assert_eq!(tree.coarse_count(), 2);
        assert_eq!(tree.fine_count(), 3);
        assert_eq!(tree.total_strains(), 4);
    }

    #[test]
    fn test_json_shape() {
        let tree = HierarchyTree::new(
            "MTB",
            vec![CoarseClusterNode::new(
                1,
                2,
                vec![FineClusterNode::new(
                    10,
                    2,
                    vec![DrugNode {
                        name: "Isoniazid".to_string(),
                        value: 1,
                    }],
                )],
            )],
        );

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "MTB",
                "children": [{
                    "name": "HC500_1",
                    "hc500": 1,
                    "value": 2,
                    "children": [{
                        "name": "HC100_10",
                        "hc100": 10,
                        "value": 2,
                        "children": [{"name": "Isoniazid", "value": 1}]
                    }]
                }]
            })
        );
    }
}
