//! Deterministic 2D layout of the commit graph.
//!
//! [`LayoutEngine::layout`] is a pure function of the repository: it assigns every commit a
//! lane and a position, then derives positions for branch labels, the HEAD marker and the
//! two fixed nodes (staging area and working directory). Nothing here mutates the
//! repository; annotations can always be thrown away and recomputed.
//!
//! # Algorithm
//! 1. Root commits take lanes 0, 1, 2, ... in creation order at `INITIAL_X`.
//! 2. The remaining commits are placed in repeated passes once all their parents are placed.
//!    `x` is one column right of the rightmost parent.
//! 3. A single-parent commit keeps its parent's lane. A merge commit aims for the lane
//!    nearest the average parent `y`. Either way, if that lane is taken at `x` the nearest
//!    free lane is used, trying `lane + d` before `lane - d`.
//! 4. Branch labels, HEAD and the fixed nodes are fixed offsets from what they point at.
//!
//! All maps are ordered and every loop walks the repository in insertion order, so the same
//! repository always yields bit-identical coordinates.

use crate::core::{
    error::LayoutError,
    repository::{Commit, Head, Repository},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Horizontal distance between a commit and its rightmost parent
pub const HORIZONTAL_SPACING: i32 = 250;
/// Vertical distance between adjacent lanes
pub const VERTICAL_SPACING: i32 = 150;
pub const BRANCH_X_OFFSET: i32 = 120;
pub const BRANCH_Y_OFFSET: i32 = -50;
/// Extra vertical step between labels that point at the same commit
pub const BRANCH_STAGGER: i32 = 50;
pub const HEAD_X_OFFSET: i32 = -100;
pub const HEAD_Y_OFFSET: i32 = -50;
/// Layout origin: where the first root commit is drawn
pub const INITIAL_X: i32 = 200;
pub const INITIAL_Y: i32 = 250;
/// How far the free-lane search probes in each direction
pub const MAX_LANE_PROBES: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanePosition {
    pub x: i32,
    pub y: i32,
    pub lane: i32,
}

impl LanePosition {
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

/// Positions for everything the renderer draws.
///
/// Empty for an uninitialized repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAnnotations {
    pub commits: BTreeMap<String, LanePosition>,
    pub branches: BTreeMap<String, LanePosition>,
    pub head: Option<Position>,
    pub staging: Option<Position>,
    pub working_directory: Option<Position>,
}

impl LayoutAnnotations {
    pub fn commit(&self, id: &str) -> Option<&LanePosition> {
        self.commits.get(id)
    }

    pub fn branch(&self, name: &str) -> Option<&LanePosition> {
        self.branches.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty() && self.head.is_none() && self.staging.is_none()
    }
}

fn lane_y(lane: i32) -> i32 {
    INITIAL_Y + lane * VERTICAL_SPACING
}

/// Lanes in use, per column
#[derive(Debug, Default)]
struct LaneGrid {
    occupied: BTreeMap<i32, BTreeSet<i32>>,
}

impl LaneGrid {
    fn is_free(&self, x: i32, lane: i32) -> bool {
        self.occupied
            .get(&x)
            .map_or(true, |lanes| !lanes.contains(&lane))
    }

    fn occupy(&mut self, x: i32, lane: i32) {
        self.occupied.entry(x).or_default().insert(lane);
    }

    /// Nearest free lane to `target` in column `x`, checking `target + d` before `target - d`
    fn nearest_free(&self, x: i32, target: i32) -> i32 {
        if self.is_free(x, target) {
            return target;
        }

        for offset in 1..=MAX_LANE_PROBES {
            if self.is_free(x, target + offset) {
                return target + offset;
            }
            if self.is_free(x, target - offset) {
                return target - offset;
            }
        }

        // Column is saturated around the target: go past the last used lane
        let last = self
            .occupied
            .get(&x)
            .and_then(|lanes| lanes.iter().next_back().copied())
            .unwrap_or(target);
        log::warn!("Lane search exhausted at x={x}, falling back to lane {}", last + 1);
        last + 1
    }
}

pub struct LayoutEngine;

impl LayoutEngine {
    /// Compute positions for every commit, branch label, HEAD and the fixed nodes.
    ///
    /// # Errors
    /// Returns [`LayoutError`] only when the commit graph itself is corrupt: a parent id
    /// that does not exist, or commits that can never be placed (a cycle).
    pub fn layout(repository: &Repository) -> Result<LayoutAnnotations, LayoutError> {
        if !repository.is_initialized() {
            return Ok(LayoutAnnotations::default());
        }

        Self::check_parents(repository)?;

        let mut grid = LaneGrid::default();
        let mut placed: HashMap<&str, LanePosition> = HashMap::new();

        let (roots, mut remaining): (Vec<&Commit>, Vec<&Commit>) =
            repository.commits().iter().partition(|commit| commit.is_root());

        for (lane, root) in (0..).zip(roots) {
            grid.occupy(INITIAL_X, lane);
            placed.insert(
                root.id.as_str(),
                LanePosition {
                    x: INITIAL_X,
                    y: lane_y(lane),
                    lane,
                },
            );
        }

        let mut passes = 0;
        while !remaining.is_empty() {
            passes += 1;
            let before = remaining.len();
            let mut deferred = Vec::with_capacity(before);

            for commit in remaining {
                let parents: Option<Vec<LanePosition>> = commit
                    .parents
                    .iter()
                    .map(|parent| placed.get(parent.as_str()).copied())
                    .collect();

                match parents {
                    Some(parents) => {
                        let position = Self::place(&mut grid, &parents);
                        placed.insert(commit.id.as_str(), position);
                    }
                    None => deferred.push(commit),
                }
            }

            if deferred.len() == before {
                return Err(LayoutError::Unplaced {
                    commits: deferred.iter().map(|commit| commit.id.clone()).collect(),
                });
            }
            remaining = deferred;
        }

        log::debug!(
            "Placed {} commit(s) in {} pass(es)",
            placed.len(),
            passes
        );

        let commits: BTreeMap<String, LanePosition> = placed
            .into_iter()
            .map(|(id, position)| (id.to_string(), position))
            .collect();
        let branches = Self::branch_positions(repository, &commits);
        let head = Self::head_position(repository, &commits, &branches);

        Ok(LayoutAnnotations {
            commits,
            branches,
            head,
            staging: Some(Position {
                x: INITIAL_X + HORIZONTAL_SPACING / 2,
                y: INITIAL_Y - VERTICAL_SPACING * 3 / 2,
            }),
            working_directory: Some(Position {
                x: INITIAL_X,
                y: INITIAL_Y - VERTICAL_SPACING * 3 / 2,
            }),
        })
    }

    fn check_parents(repository: &Repository) -> Result<(), LayoutError> {
        for commit in repository.commits() {
            for parent in &commit.parents {
                if repository.commit(parent).is_none() {
                    return Err(LayoutError::MissingParent {
                        commit: commit.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Place a non-root commit given its parents' positions (in parent order)
    fn place(grid: &mut LaneGrid, parents: &[LanePosition]) -> LanePosition {
        let x = parents.iter().map(|p| p.x).max().unwrap_or(INITIAL_X) + HORIZONTAL_SPACING;

        let target = match parents {
            [single] => single.lane,
            _ => {
                let mean_y =
                    parents.iter().map(|p| f64::from(p.y)).sum::<f64>() / parents.len() as f64;
                let lane = (mean_y - f64::from(INITIAL_Y)) / f64::from(VERTICAL_SPACING);
                // Round half up
                (lane + 0.5).floor() as i32
            }
        };

        let lane = grid.nearest_free(x, target);
        grid.occupy(x, lane);

        LanePosition {
            x,
            y: lane_y(lane),
            lane,
        }
    }

    fn branch_positions(
        repository: &Repository,
        commits: &BTreeMap<String, LanePosition>,
    ) -> BTreeMap<String, LanePosition> {
        let mut labels_per_commit: HashMap<&str, i32> = HashMap::new();
        let mut positions = BTreeMap::new();

        for branch in repository.branches() {
            let Some(target) = commits.get(&branch.target) else {
                continue;
            };
            let stacked = labels_per_commit.entry(branch.target.as_str()).or_insert(0);
            let stagger = (*stacked % 3) * BRANCH_STAGGER;
            *stacked += 1;

            positions.insert(
                branch.name.clone(),
                LanePosition {
                    x: target.x + BRANCH_X_OFFSET,
                    y: target.y + BRANCH_Y_OFFSET + stagger,
                    lane: target.lane,
                },
            );
        }

        positions
    }

    fn head_position(
        repository: &Repository,
        commits: &BTreeMap<String, LanePosition>,
        branches: &BTreeMap<String, LanePosition>,
    ) -> Option<Position> {
        let anchor = match repository.head()? {
            Head::Branch(name) => branches.get(name)?,
            Head::Commit(id) => commits.get(id)?,
        };

        Some(Position {
            x: anchor.x + HEAD_X_OFFSET,
            y: anchor.y + HEAD_Y_OFFSET,
        })
    }
}
