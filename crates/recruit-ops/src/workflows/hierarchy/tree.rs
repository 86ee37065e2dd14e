use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::domain::{RecruiterId, RecruiterProfile};

/// Structural invariant violations in the recruiter organization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("recruiter {} sits on a reporting cycle", recruiter_id.0)]
    CycleDetected { recruiter_id: RecruiterId },
    #[error("organization already has a main admin ({})", existing.0)]
    DuplicateMainAdmin { existing: RecruiterId },
}

/// One node of the organization tree with its owned direct reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterNode {
    pub profile: RecruiterProfile,
    pub reports: Vec<RecruiterNode>,
}

/// The recruiter organization as a rooted forest of owned child lists.
///
/// Built from the flat parent-pointer records the remote store hands back.
/// Owning the children (rather than chasing references) is what lets the
/// cycle check run once at construction and every traversal stay
/// allocation-free afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterForest {
    pub roots: Vec<RecruiterNode>,
}

impl RecruiterForest {
    /// Build the forest from flat profiles, preserving the given sibling
    /// order. A profile whose manager id is unknown becomes a root. A
    /// reporting chain that revisits itself is an `IntegrityError`, never
    /// a silently dropped subtree.
    pub fn from_profiles(profiles: Vec<RecruiterProfile>) -> Result<Self, IntegrityError> {
        let known: HashSet<RecruiterId> = profiles.iter().map(|p| p.id.clone()).collect();
        let managers: HashMap<RecruiterId, Option<RecruiterId>> = profiles
            .iter()
            .map(|p| (p.id.clone(), p.reporting_manager.clone()))
            .collect();

        // Walk each profile's ancestor chain before building anything.
        for profile in &profiles {
            let mut seen = HashSet::new();
            seen.insert(profile.id.clone());
            let mut cursor = profile.reporting_manager.clone();
            while let Some(manager_id) = cursor {
                if !known.contains(&manager_id) {
                    break;
                }
                if !seen.insert(manager_id.clone()) {
                    return Err(IntegrityError::CycleDetected {
                        recruiter_id: profile.id.clone(),
                    });
                }
                cursor = managers.get(&manager_id).cloned().flatten();
            }
        }

        let mut children: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut root_indexes = Vec::new();
        let index_of: HashMap<RecruiterId, usize> = profiles
            .iter()
            .enumerate()
            .map(|(index, p)| (p.id.clone(), index))
            .collect();

        for (index, profile) in profiles.iter().enumerate() {
            match profile
                .reporting_manager
                .as_ref()
                .and_then(|manager| index_of.get(manager))
            {
                Some(parent) => children.entry(*parent).or_default().push(index),
                None => root_indexes.push(index),
            }
        }

        fn build(
            index: usize,
            profiles: &[RecruiterProfile],
            children: &BTreeMap<usize, Vec<usize>>,
        ) -> RecruiterNode {
            let reports = children
                .get(&index)
                .map(|indexes| {
                    indexes
                        .iter()
                        .map(|child| build(*child, profiles, children))
                        .collect()
                })
                .unwrap_or_default();

            RecruiterNode {
                profile: profiles[index].clone(),
                reports,
            }
        }

        let roots = root_indexes
            .into_iter()
            .map(|index| build(index, &profiles, &children))
            .collect();

        Ok(Self { roots })
    }

    /// Pre-order traversal: every parent precedes its reports, siblings
    /// keep their given order.
    pub fn flatten(&self) -> Vec<&RecruiterProfile> {
        fn walk<'a>(node: &'a RecruiterNode, out: &mut Vec<&'a RecruiterProfile>) {
            out.push(&node.profile);
            for report in &node.reports {
                walk(report, out);
            }
        }

        let mut out = Vec::new();
        for root in &self.roots {
            walk(root, &mut out);
        }
        out
    }

    /// Keep every node that matches or has a surviving descendant, so a
    /// match deep in the tree keeps its whole chain of ancestors.
    ///
    /// The walk is bottom-up: children are filtered first and the parent's
    /// fate then depends on its own match or any survivor below it. A
    /// top-down filter would drop a non-matching manager and orphan the
    /// matching report underneath.
    pub fn filter_preserving_ancestry<F>(&self, predicate: F) -> RecruiterForest
    where
        F: Fn(&RecruiterProfile) -> bool,
    {
        fn keep<F>(node: &RecruiterNode, predicate: &F) -> Option<RecruiterNode>
        where
            F: Fn(&RecruiterProfile) -> bool,
        {
            let reports: Vec<RecruiterNode> = node
                .reports
                .iter()
                .filter_map(|report| keep(report, predicate))
                .collect();

            if predicate(&node.profile) || !reports.is_empty() {
                Some(RecruiterNode {
                    profile: node.profile.clone(),
                    reports,
                })
            } else {
                None
            }
        }

        RecruiterForest {
            roots: self
                .roots
                .iter()
                .filter_map(|root| keep(root, &predicate))
                .collect(),
        }
    }

    /// Distance from the node's root; roots are depth 0.
    pub fn depth(&self, id: &RecruiterId) -> Option<usize> {
        fn walk(node: &RecruiterNode, id: &RecruiterId, level: usize) -> Option<usize> {
            if &node.profile.id == id {
                return Some(level);
            }
            node.reports
                .iter()
                .find_map(|report| walk(report, id, level + 1))
        }

        self.roots.iter().find_map(|root| walk(root, id, 0))
    }

    pub fn get(&self, id: &RecruiterId) -> Option<&RecruiterProfile> {
        fn walk<'a>(node: &'a RecruiterNode, id: &RecruiterId) -> Option<&'a RecruiterProfile> {
            if &node.profile.id == id {
                return Some(&node.profile);
            }
            node.reports.iter().find_map(|report| walk(report, id))
        }

        self.roots.iter().find_map(|root| walk(root, id))
    }

    /// Whether `id` sits inside the subtree rooted at `ancestor`
    /// (inclusive of the ancestor itself).
    pub fn in_subtree(&self, ancestor: &RecruiterId, id: &RecruiterId) -> bool {
        fn find<'a>(node: &'a RecruiterNode, id: &RecruiterId) -> Option<&'a RecruiterNode> {
            if &node.profile.id == id {
                return Some(node);
            }
            node.reports.iter().find_map(|report| find(report, id))
        }

        let Some(subtree) = self.roots.iter().find_map(|root| find(root, ancestor)) else {
            return false;
        };
        find(subtree, id).is_some()
    }

    /// The organization's root authority, if one is present in this
    /// snapshot.
    pub fn main_admin(&self) -> Option<&RecruiterProfile> {
        self.flatten()
            .into_iter()
            .find(|profile| profile.is_main_admin)
    }

    pub fn len(&self) -> usize {
        fn count(node: &RecruiterNode) -> usize {
            1 + node.reports.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
