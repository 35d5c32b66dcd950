//! Contract assembly — normalize inferred invariants into a stable shape.

use crate::model::{Contract, DynamicMethod, ExitGroup};
use std::collections::{HashMap, HashSet};

/// Build the contract of a dynamically analysed method.
///
/// Every predicate list keeps its source order with repeats dropped. Exit
/// groups stay in insertion order and are kept even when empty; groups that
/// repeat an id are folded into the first one.
pub fn assemble(method: &DynamicMethod) -> Contract {
    Contract {
        enter: dedup(&method.enter),
        exit: dedup(&method.exit),
        exits_by_id: merge_exit_groups(&method.exits),
    }
}

fn merge_exit_groups(groups: &[ExitGroup]) -> Vec<ExitGroup> {
    let mut position: HashMap<i32, usize> = HashMap::new();
    let mut merged: Vec<ExitGroup> = Vec::new();
    for group in groups {
        match position.get(&group.id) {
            Some(&i) => merged[i].exits.extend(group.exits.iter().cloned()),
            None => {
                position.insert(group.id, merged.len());
                merged.push(group.clone());
            }
        }
    }
    for group in &mut merged {
        group.exits = dedup(&group.exits);
    }
    merged
}

fn dedup(predicates: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    predicates
        .iter()
        .filter(|p| seen.insert(p.as_str()))
        .cloned()
        .collect()
}
