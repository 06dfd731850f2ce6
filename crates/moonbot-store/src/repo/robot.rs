//! SQLite repository for the robot's position and command audit log
//!
//! Position snapshots and execution records are append-only. The
//! "current position" is the snapshot with the highest id - insertion
//! sequence, never created_at, since timestamps can tie.

use rusqlite::{Connection, OptionalExtension, Transaction};
use tracing::debug;

use moonbot_core::model::{coord_label, Coord, Direction, Pose};
use moonbot_core::RobotError;

use crate::errors::{from_rusqlite, Result};

/// A persisted position snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRecord {
    pub id: i64,
    pub pose: Pose,
    pub created_at: i64,
}

/// A persisted command-execution audit entry
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRecord {
    pub id: i64,
    pub command_string: String,
    pub initial: Pose,
    pub final_pose: Pose,
    pub obstacle_hit: Option<String>,
    pub executed_at: i64,
}

/// SQLite repository for position snapshots and execution records
pub struct RobotRepo;

/// Parse a persisted direction column.
///
/// A value outside the four canonical names means the row is corrupt,
/// so this surfaces as a persistence failure rather than an input error.
fn parse_direction_column(value: &str) -> Result<Direction> {
    value.parse().map_err(|_| RobotError::Persistence {
        op: "direction_column".to_string(),
        reason: format!("corrupt direction value '{}'", value),
    })
}

impl RobotRepo {
    /// Load the most recently inserted position snapshot, if any
    pub fn latest_position(conn: &Connection) -> Result<Option<PositionRecord>> {
        let row: Option<(i64, i64, i64, String, i64)> = conn
            .query_row(
                "SELECT id, x, y, direction, created_at
                 FROM robot_positions
                 ORDER BY id DESC
                 LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                    ))
                },
            )
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            None => Ok(None),
            Some((id, x, y, direction, created_at)) => {
                let facing = parse_direction_column(&direction)?;
                Ok(Some(PositionRecord {
                    id,
                    pose: Pose::new(x, y, facing),
                    created_at,
                }))
            }
        }
    }

    /// Insert a position snapshot, returning its id
    pub fn insert_position(conn: &Connection, pose: &Pose) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();
        conn.execute(
            "INSERT INTO robot_positions (x, y, direction, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![pose.x, pose.y, pose.facing.as_str(), now],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Current pose of the robot.
    ///
    /// Returns the pose of the most recently inserted snapshot; if no
    /// snapshot exists yet, seeds one from `start` and returns that.
    pub fn current_pose(conn: &Connection, start: &Pose) -> Result<Pose> {
        if let Some(record) = Self::latest_position(conn)? {
            return Ok(record.pose);
        }

        debug!(start = %start, "no position on record, seeding from start pose");
        Self::insert_position(conn, start)?;
        Ok(*start)
    }

    /// Persist one command execution: the new position snapshot and its
    /// audit record in a single transaction. Both succeed or both fail.
    pub fn record_execution(
        conn: &mut Connection,
        commands: &str,
        initial: &Pose,
        final_pose: &Pose,
        halted_at: Option<Coord>,
    ) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        Self::insert_position_tx(&tx, final_pose)?;
        Self::insert_execution_tx(&tx, commands, initial, final_pose, halted_at)?;

        tx.commit().map_err(from_rusqlite)?;
        Ok(())
    }

    fn insert_position_tx(tx: &Transaction, pose: &Pose) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        tx.execute(
            "INSERT INTO robot_positions (x, y, direction, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![pose.x, pose.y, pose.facing.as_str(), now],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    fn insert_execution_tx(
        tx: &Transaction,
        commands: &str,
        initial: &Pose,
        final_pose: &Pose,
        halted_at: Option<Coord>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        tx.execute(
            "INSERT INTO command_executions
             (command_string, initial_x, initial_y, initial_direction,
              final_x, final_y, final_direction, obstacle_hit, executed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                commands,
                initial.x,
                initial.y,
                initial.facing.as_str(),
                final_pose.x,
                final_pose.y,
                final_pose.facing.as_str(),
                halted_at.map(coord_label),
                now,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Load the most recent execution records, newest first
    pub fn recent_executions(conn: &Connection, limit: u32) -> Result<Vec<ExecutionRecord>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, command_string, initial_x, initial_y, initial_direction,
                        final_x, final_y, final_direction, obstacle_hit, executed_at
                 FROM command_executions
                 ORDER BY id DESC
                 LIMIT ?1",
            )
            .map_err(from_rusqlite)?;

        let rows: Vec<(i64, String, i64, i64, String, i64, i64, String, Option<String>, i64)> =
            stmt.query_map([limit], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                    row.get(8)?,
                    row.get(9)?,
                ))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter()
            .map(|(id, commands, ix, iy, idir, fx, fy, fdir, hit, at)| {
                Ok(ExecutionRecord {
                    id,
                    command_string: commands,
                    initial: Pose::new(ix, iy, parse_direction_column(&idir)?),
                    final_pose: Pose::new(fx, fy, parse_direction_column(&fdir)?),
                    obstacle_hit: hit,
                    executed_at: at,
                })
            })
            .collect::<std::result::Result<Vec<_>, RobotError>>()
    }
}
