use std::collections::{HashMap, VecDeque};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{matrix::MatrixRepository, member::MemberRepository},
    error::Error,
    model::matrix::{NetworkNodeDto, PlaceMemberDto, PositionDto},
};

/// Children per matrix position.
pub const MATRIX_WIDTH: usize = 3;

/// Total matrix levels; the root sits at depth 0, leaves at depth 6.
pub const MATRIX_DEPTH: i32 = 7;

const DEFAULT_TREE_DEPTH: i32 = 3;

pub struct MatrixService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatrixService<'a> {
    /// Creates a new instance of [`MatrixService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Downline tree rooted at a member's position, descending at most
    /// `depth` levels below it.
    pub async fn get_tree(
        &self,
        member_id: i32,
        depth: Option<i32>,
    ) -> Result<NetworkNodeDto, Error> {
        let depth = depth.unwrap_or(DEFAULT_TREE_DEPTH).clamp(0, MATRIX_DEPTH);

        let matrix = MatrixRepository::new(self.db);
        let root = matrix
            .get_by_member_id(member_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Matrix position for member {member_id}")))?;

        // Collect the bounded subtree level by level, then assemble in memory.
        let mut positions = vec![root.clone()];
        let mut frontier = vec![root.clone()];

        for _ in 0..depth {
            let mut next = Vec::new();
            for position in &frontier {
                next.extend(matrix.get_children(position.id).await?);
            }
            if next.is_empty() {
                break;
            }
            positions.extend(next.iter().cloned());
            frontier = next;
        }

        let member_ids = positions.iter().map(|p| p.member_id).collect();
        let names: HashMap<i32, String> = MemberRepository::new(self.db)
            .get_many_by_ids(member_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m.display_name))
            .collect();

        let mut children_of: HashMap<i32, Vec<&entity::matrix_position::Model>> = HashMap::new();
        for position in positions.iter().skip(1) {
            if let Some(parent_id) = position.parent_id {
                children_of.entry(parent_id).or_default().push(position);
            }
        }

        Ok(build_node(&root, &children_of, &names))
    }

    pub async fn get_position(&self, member_id: i32) -> Result<PositionDto, Error> {
        let position = MatrixRepository::new(self.db)
            .get_by_member_id(member_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Matrix position for member {member_id}")))?;

        Ok(position.into())
    }

    /// Places a member into the matrix.
    ///
    /// With no sponsor the member becomes the root, which may exist only
    /// once. Otherwise the member lands in the lowest free slot of the
    /// sponsor's subtree, breadth first, spilling over to deeper positions
    /// when the sponsor's own row is full. Positions at the bottom level
    /// take no children.
    pub async fn place(&self, placement: PlaceMemberDto) -> Result<PositionDto, Error> {
        let txn = self.db.begin().await?;

        let matrix = MatrixRepository::new(&txn);
        let members = MemberRepository::new(&txn);

        let member_id = placement.member_id;
        if members.get_by_id(member_id).await?.is_none() {
            return Err(Error::NotFound(format!("Member {member_id}")));
        }

        if matrix.get_by_member_id(member_id).await?.is_some() {
            return Err(Error::Conflict(format!(
                "Member {member_id} is already placed in the matrix"
            )));
        }

        let position = match placement.sponsor_id {
            None => {
                if matrix.get_root().await?.is_some() {
                    return Err(Error::Conflict("The matrix root already exists".into()));
                }

                matrix.create(member_id, None, 0, 0).await?
            }
            Some(sponsor_id) => {
                if members.get_by_id(sponsor_id).await?.is_none() {
                    return Err(Error::NotFound(format!("Member {sponsor_id}")));
                }

                let sponsor_position =
                    matrix.get_by_member_id(sponsor_id).await?.ok_or_else(|| {
                        Error::Validation(format!(
                            "Sponsor {sponsor_id} has no matrix position"
                        ))
                    })?;

                let (parent, slot) = find_open_slot(&matrix, sponsor_position).await?;
                matrix
                    .create(member_id, Some(parent.id), parent.depth + 1, slot)
                    .await?
            }
        };

        txn.commit().await?;

        info!(
            "Placed member {} at depth {} slot {}",
            member_id, position.depth, position.slot
        );

        Ok(position.into())
    }
}

fn build_node(
    position: &entity::matrix_position::Model,
    children_of: &HashMap<i32, Vec<&entity::matrix_position::Model>>,
    names: &HashMap<i32, String>,
) -> NetworkNodeDto {
    let children = children_of
        .get(&position.id)
        .map(|children| {
            children
                .iter()
                .map(|child| build_node(child, children_of, names))
                .collect()
        })
        .unwrap_or_default();

    NetworkNodeDto {
        member_id: position.member_id,
        display_name: names.get(&position.member_id).cloned().unwrap_or_default(),
        depth: position.depth,
        slot: position.slot,
        children,
    }
}

/// Breadth-first scan of a subtree for the first position with a free slot.
async fn find_open_slot<'a, C: ConnectionTrait>(
    matrix: &MatrixRepository<'a, C>,
    start: entity::matrix_position::Model,
) -> Result<(entity::matrix_position::Model, i32), Error> {
    let mut queue = VecDeque::from([start]);

    while let Some(position) = queue.pop_front() {
        // Bottom-level positions take no children.
        if position.depth >= MATRIX_DEPTH - 1 {
            continue;
        }

        let children = matrix.get_children(position.id).await?;

        if children.len() < MATRIX_WIDTH {
            let taken: Vec<i32> = children.iter().map(|c| c.slot).collect();
            let slot = (0..MATRIX_WIDTH as i32)
                .find(|candidate| !taken.contains(candidate))
                .unwrap_or(children.len() as i32);

            return Ok((position, slot));
        }

        queue.extend(children);
    }

    Err(Error::Conflict("The matrix is full".into()))
}
