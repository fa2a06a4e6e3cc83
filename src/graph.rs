//! Pathway topology
//!
//! A directed bipartite graph of the pathway: metabolite nodes point to the enzymes that
//! consume them and enzyme nodes point to the metabolites they produce. Enzyme nodes are
//! keyed by enzyme name, metabolite nodes by metabolite name.

use std::collections::HashMap;
use std::fmt;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::simulation::pathway::Pathway;

/// Kind of a node, exposed as its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Metabolite,
    Enzyme,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Metabolite => write!(f, "metabolite"),
            NodeType::Enzyme => write!(f, "enzyme"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl fmt::Display for PathwayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Directed graph of a pathway.
#[derive(Debug, Clone)]
pub struct PathwayGraph {
    graph: DiGraph<PathwayNode, ()>,
    nodes: HashMap<(NodeType, String), NodeIndex>,
}

impl PathwayGraph {
    fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
        }
    }

    fn add_node(&mut self, name: &str, node_type: NodeType) -> NodeIndex {
        let key = (node_type, name.to_string());
        if let Some(index) = self.nodes.get(&key) {
            return *index;
        }

        let index = self.graph.add_node(PathwayNode {
            name: name.to_string(),
            node_type,
        });
        self.nodes.insert(key, index);
        index
    }

    /// The underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<PathwayNode, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up a node by name, preferring metabolites when a name is used for both kinds.
    pub fn node(&self, name: &str) -> Option<&PathwayNode> {
        self.index(name).map(|i| &self.graph[i])
    }

    /// Names of the nodes an edge from `name` points to.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Outgoing)
    }

    /// Names of the nodes with an edge pointing to `name`.
    pub fn predecessors(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Incoming)
    }

    /// Graphviz rendering; enzyme nodes are drawn as boxes.
    pub fn to_dot(&self) -> String {
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &|_, _| String::new(),
            &|_, (_, node)| {
                let shape = match node.node_type {
                    NodeType::Metabolite => "ellipse",
                    NodeType::Enzyme => "box",
                };
                format!("label = \"{}\" shape = {}", node.name, shape)
            },
        );
        format!("{:?}", dot)
    }

    fn index(&self, name: &str) -> Option<NodeIndex> {
        [NodeType::Metabolite, NodeType::Enzyme]
            .into_iter()
            .find_map(|t| self.nodes.get(&(t, name.to_string())).copied())
    }

    fn neighbors(&self, name: &str, direction: Direction) -> Vec<&str> {
        let Some(index) = self.index(name) else {
            return Vec::new();
        };

        let mut names: Vec<&str> = self
            .graph
            .neighbors_directed(index, direction)
            .map(|i| self.graph[i].name.as_str())
            .collect();
        // petgraph yields the most recently added edge first
        names.reverse();
        names
    }
}

impl Pathway {
    /// Builds the metabolite/enzyme topology of the pathway.
    pub fn create_pathway_graph(&self) -> PathwayGraph {
        let mut graph = PathwayGraph::new();

        for metabolite in self.metabolites() {
            graph.add_node(metabolite.name(), NodeType::Metabolite);
        }

        for reaction in self.reactions() {
            let enzyme_name = self.enzymes()[reaction.enzyme().index()].name();
            let enzyme = graph.add_node(enzyme_name, NodeType::Enzyme);

            for substrate in reaction.substrates() {
                let name = self.metabolites()[substrate.metabolite.index()].name();
                let metabolite = graph.add_node(name, NodeType::Metabolite);
                graph.graph.update_edge(metabolite, enzyme, ());
            }

            for product in reaction.products() {
                let name = self.metabolites()[product.metabolite.index()].name();
                let metabolite = graph.add_node(name, NodeType::Metabolite);
                graph.graph.update_edge(enzyme, metabolite, ());
            }
        }

        graph
    }
}
