use std::path::Path;
use std::sync::Mutex;

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use smx_types::RewardRecord;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::query::RewardQuery;
use crate::traits::RewardSource;

const BASE_QUERY: &str = "SELECT r.layer, r.total_reward, r.layer_reward, l.id \
     FROM rewards r \
     INNER JOIN layers l ON r.layer = l.id \
     WHERE lower(hex(r.coinbase)) = ?";

/// Reward source backed by a node's SQLite state database.
///
/// The database is opened read-only. Rewards are joined against the
/// `layers` table, so rewards for layers the node has not recorded are not
/// returned.
pub struct SqliteRewardSource {
    conn: Mutex<Connection>,
}

impl SqliteRewardSource {
    /// Open the database at `path` read-only.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::DatabaseNotFound(path.to_path_buf()));
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        debug!(path = %path.display(), "opened reward database");
        Ok(Self::from_connection(conn))
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

/// SQL text and positional parameters for `query`.
fn build_query(query: &RewardQuery) -> (String, Vec<Value>) {
    let mut sql = String::from(BASE_QUERY);
    let mut params = vec![Value::Text(query.coinbase_hex().to_string())];
    let range = query.range();
    if let Some(start) = range.start {
        sql.push_str(" AND r.layer >= ?");
        params.push(Value::Integer(start));
    }
    if let Some(end) = range.end {
        sql.push_str(" AND r.layer <= ?");
        params.push(Value::Integer(end));
    }
    sql.push_str(" ORDER BY r.layer");
    (sql, params)
}

impl RewardSource for SqliteRewardSource {
    fn rewards(&self, query: &RewardQuery) -> StoreResult<Vec<RewardRecord>> {
        let (sql, params) = build_query(query);
        let conn = self.conn.lock().expect("lock poisoned");
        let mut stmt = conn.prepare(&sql)?;
        let records = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok(RewardRecord {
                    layer: row.get(0)?,
                    total_reward: row.get(1)?,
                    layer_reward: row.get(2)?,
                    layer_id: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            coinbase = query.coinbase_hex(),
            range = %query.range(),
            bounded = !query.range().is_unbounded(),
            count = records.len(),
            "reward query complete"
        );
        Ok(records)
    }
}

impl std::fmt::Debug for SqliteRewardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteRewardSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smx_types::LayerRange;

    const MINER: [u8; 4] = [0xde, 0xad, 0xbe, 0xef];
    const OTHER: [u8; 4] = [0x0a, 0x0b, 0x0c, 0x0d];

    fn create_schema(conn: &Connection) {
        conn.execute_batch(
            "CREATE TABLE layers (id INT PRIMARY KEY);
             CREATE TABLE rewards (
                 coinbase CHAR(24),
                 layer INT NOT NULL,
                 total_reward UNSIGNED LONG INT,
                 layer_reward UNSIGNED LONG INT,
                 PRIMARY KEY (coinbase, layer)
             );",
        )
        .unwrap();
    }

    fn insert_reward(conn: &Connection, coinbase: &[u8], layer: i64, total: i64, reward: i64) {
        conn.execute(
            "INSERT INTO rewards (coinbase, layer, total_reward, layer_reward) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![coinbase, layer, total, reward],
        )
        .unwrap();
    }

    fn populate(conn: &Connection) {
        create_schema(conn);
        for layer in [100, 200, 300, 400] {
            conn.execute("INSERT INTO layers (id) VALUES (?1)", [layer]).unwrap();
        }
        insert_reward(conn, &MINER, 300, 3_100_000_000, 3_000_000_000);
        insert_reward(conn, &MINER, 100, 1_100_000_000, 1_000_000_000);
        insert_reward(conn, &MINER, 200, 2_100_000_000, 2_000_000_000);
        insert_reward(conn, &OTHER, 200, 9, 9);
        // No matching row in `layers`.
        insert_reward(conn, &MINER, 500, 5, 5);
    }

    fn in_memory() -> SqliteRewardSource {
        let conn = Connection::open_in_memory().unwrap();
        populate(&conn);
        SqliteRewardSource::from_connection(conn)
    }

    fn layers(records: &[RewardRecord]) -> Vec<i64> {
        records.iter().map(|r| r.layer).collect()
    }

    #[test]
    fn query_without_bounds() {
        let (sql, params) = build_query(&RewardQuery::new("ab", LayerRange::unbounded()));
        assert_eq!(sql, format!("{BASE_QUERY} ORDER BY r.layer"));
        assert_eq!(params, vec![Value::Text("ab".into())]);
    }

    #[test]
    fn query_with_both_bounds() {
        let (sql, params) =
            build_query(&RewardQuery::new("ab", LayerRange::new(Some(1), Some(2))));
        assert!(sql.ends_with(" AND r.layer >= ? AND r.layer <= ? ORDER BY r.layer"));
        assert_eq!(
            params,
            vec![Value::Text("ab".into()), Value::Integer(1), Value::Integer(2)]
        );
    }

    #[test]
    fn query_with_end_bound_only() {
        let (sql, params) = build_query(&RewardQuery::new("ab", LayerRange::new(None, Some(7))));
        assert!(sql.ends_with(" AND r.layer <= ? ORDER BY r.layer"));
        assert!(!sql.contains(">="));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn returns_joined_rows_for_coinbase() {
        let source = in_memory();
        let query = RewardQuery::new("deadbeef", LayerRange::unbounded());
        let records = source.rewards(&query).unwrap();
        assert_eq!(layers(&records), vec![100, 200, 300]);
        assert_eq!(
            records[0],
            RewardRecord::new(100, 1_100_000_000, 1_000_000_000, 100)
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let source = in_memory();
        let query = RewardQuery::new("deadbeef", LayerRange::new(Some(200), Some(300)));
        assert_eq!(layers(&source.rewards(&query).unwrap()), vec![200, 300]);
        let query = RewardQuery::new("deadbeef", LayerRange::new(Some(201), None));
        assert_eq!(layers(&source.rewards(&query).unwrap()), vec![300]);
    }

    #[test]
    fn other_coinbase_is_isolated() {
        let source = in_memory();
        let query = RewardQuery::new("0a0b0c0d", LayerRange::unbounded());
        let records = source.rewards(&query).unwrap();
        assert_eq!(records, vec![RewardRecord::new(200, 9, 9, 200)]);
    }

    #[test]
    fn open_reads_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.sql");
        {
            let conn = Connection::open(&path).unwrap();
            populate(&conn);
        }
        let source = SqliteRewardSource::open(&path).unwrap();
        let query = RewardQuery::new("DEADBEEF", LayerRange::new(None, Some(100)));
        assert_eq!(layers(&source.rewards(&query).unwrap()), vec![100]);
    }

    #[test]
    fn open_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.sql");
        {
            let conn = Connection::open(&path).unwrap();
            create_schema(&conn);
        }
        let source = SqliteRewardSource::open(&path).unwrap();
        let conn = source.conn.lock().unwrap();
        assert!(conn.execute("INSERT INTO layers (id) VALUES (1)", []).is_err());
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");
        let err = SqliteRewardSource::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::DatabaseNotFound(p) if p == path));
        assert!(!path.exists());
    }

    #[test]
    fn null_total_reward_is_carried_as_none() {
        let conn = Connection::open_in_memory().unwrap();
        populate(&conn);
        conn.execute(
            "INSERT INTO rewards (coinbase, layer, total_reward, layer_reward) VALUES (?1, 400, NULL, 4)",
            [&MINER[..]],
        )
        .unwrap();
        let source = SqliteRewardSource::from_connection(conn);
        let query = RewardQuery::new("deadbeef", LayerRange::new(Some(400), None));
        let records = source.rewards(&query).unwrap();
        assert_eq!(
            records,
            vec![RewardRecord {
                layer: 400,
                total_reward: None,
                layer_reward: 4,
                layer_id: 400,
            }]
        );
        assert_eq!(records[0].amount().smidge(), 4);
    }

    #[test]
    fn missing_tables_propagate_sqlite_error() {
        let source = SqliteRewardSource::from_connection(Connection::open_in_memory().unwrap());
        let query = RewardQuery::new("deadbeef", LayerRange::unbounded());
        assert!(matches!(source.rewards(&query), Err(StoreError::Sqlite(_))));
    }
}
