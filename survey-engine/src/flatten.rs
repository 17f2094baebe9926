//! Item graph flattening.
//!
//! Turns the item tree plus its `follows` declarations into one total order
//! using Kahn's algorithm over an arena of nodes:
//!
//! 1. Walk the tree in declaration (pre-order) order, giving every group and
//!    single item a node index. Groups are nodes too, so `follows` may name
//!    them.
//! 2. Add an edge from each group to each of its children and from every
//!    `follows` target to the item declaring it.
//! 3. Repeatedly emit the ready node with the lowest declaration index.
//! 4. Anything left over sits on a cycle.
//!
//! Picking the lowest declaration index keeps the declared order whenever no
//! `follows` edge says otherwise. Groups are dropped from the output; only
//! single items (answerable items and page breaks) are emitted.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::{DependencyError, ItemKey, SurveyError, SurveyGroupItem, SurveyItem, SurveySingleItem};

struct Node<'a> {
    key: &'a ItemKey,
    follows: &'a [ItemKey],
    parent: Option<usize>,
    /// Position among single items in declaration order; `None` for groups.
    single: Option<usize>,
}

/// Arena of every item in the tree, indexed by declaration order.
struct ItemGraph<'a> {
    nodes: Vec<Node<'a>>,
    index: HashMap<&'a ItemKey, usize>,
    singles: usize,
}

impl<'a> ItemGraph<'a> {
    fn build(root: &'a SurveyGroupItem) -> Result<Self, SurveyError> {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            singles: 0,
        };
        let root_idx = graph.add_node(&root.key, &root.follows, None, false)?;
        graph.add_children(root.items(), root_idx)?;
        Ok(graph)
    }

    fn add_children(&mut self, items: &'a [SurveyItem], parent: usize) -> Result<(), SurveyError> {
        for item in items {
            match item {
                SurveyItem::Group(group) => {
                    let idx = self.add_node(&group.key, &group.follows, Some(parent), false)?;
                    self.add_children(group.items(), idx)?;
                }
                SurveyItem::Single(single) => {
                    self.add_node(&single.key, &single.follows, Some(parent), true)?;
                }
            }
        }
        Ok(())
    }

    fn add_node(
        &mut self,
        key: &'a ItemKey,
        follows: &'a [ItemKey],
        parent: Option<usize>,
        is_single: bool,
    ) -> Result<usize, SurveyError> {
        let idx = self.nodes.len();
        match self.index.entry(key) {
            Entry::Occupied(_) => return Err(SurveyError::DuplicateKey(key.clone())),
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
        }

        let single = is_single.then(|| {
            self.singles += 1;
            self.singles - 1
        });
        self.nodes.push(Node {
            key,
            follows,
            parent,
            single,
        });
        Ok(idx)
    }

    /// `successors[i]` lists the nodes that must come after node `i`.
    fn edges(&self) -> Result<(Vec<Vec<usize>>, Vec<usize>), SurveyError> {
        let n = self.nodes.len();
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];

        for (idx, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                successors[parent].push(idx);
                in_degree[idx] += 1;
            }
            for target in node.follows {
                let Some(&pred) = self.index.get(target) else {
                    return Err(SurveyError::InvalidDependency {
                        key: node.key.clone(),
                        reason: DependencyError::UnknownKey(target.clone()),
                    });
                };
                successors[pred].push(idx);
                in_degree[idx] += 1;
            }
        }

        Ok((successors, in_degree))
    }

    fn sort(&self) -> Result<Vec<usize>, SurveyError> {
        let n = self.nodes.len();
        let (successors, mut in_degree) = self.edges()?;

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(idx, _)| Reverse(idx))
            .collect();

        let mut sorted = Vec::with_capacity(n);
        while let Some(Reverse(idx)) = ready.pop() {
            sorted.push(idx);
            for &next in &successors[idx] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        if sorted.len() != n {
            let stuck: Vec<ItemKey> = in_degree
                .iter()
                .enumerate()
                .filter(|&(_, &degree)| degree > 0)
                .map(|(idx, _)| self.nodes[idx].key.clone())
                .collect();
            return Err(SurveyError::InvalidDependency {
                key: stuck[0].clone(),
                reason: DependencyError::Cycle(stuck),
            });
        }

        Ok(sorted)
    }
}

/// Single items of the tree in declaration order, groups expanded in place.
pub fn declared_items(root: &SurveyGroupItem) -> Vec<&SurveySingleItem> {
    fn walk<'a>(items: &'a [SurveyItem], out: &mut Vec<&'a SurveySingleItem>) {
        for item in items {
            match item {
                SurveyItem::Group(group) => walk(group.items(), out),
                SurveyItem::Single(single) => out.push(single),
            }
        }
    }

    let mut out = Vec::new();
    walk(root.items(), &mut out);
    out
}

/// Dependency order of the single items, as indices into [`declared_items`].
pub fn flatten_order(root: &SurveyGroupItem) -> Result<Vec<usize>, SurveyError> {
    let graph = ItemGraph::build(root)?;
    let sorted = graph.sort()?;
    Ok(sorted
        .into_iter()
        .filter_map(|idx| graph.nodes[idx].single)
        .collect())
}

/// All single items of the tree, each placed after every item it follows.
///
/// Fails with [`SurveyError::InvalidDependency`] for a `follows` entry naming
/// an unknown key or for a cycle, and with [`SurveyError::DuplicateKey`] if a
/// key is used twice.
pub fn flatten(root: &SurveyGroupItem) -> Result<Vec<&SurveySingleItem>, SurveyError> {
    let declared = declared_items(root);
    Ok(flatten_order(root)?
        .into_iter()
        .map(|idx| declared[idx])
        .collect())
}
