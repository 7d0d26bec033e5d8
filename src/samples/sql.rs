//! vpn_users workload: populate a keyed table, then sweep it with
//! selects, updates and deletes until a target row count is reached.

use log::{error, info};

use crate::driver::{Bind, Connection, Params, SqlValue};
use crate::error::Result;
use crate::samples::scalar_i64;

/// Name shown in the usage text.
pub const NAME: &str = "sql";

/// Number of records to insert. Must have an exact square root.
const NUM_RECORDS: u32 = 100;
/// Percentage of records covered by selects.
const READ_PERCENTAGE: u32 = 80;
/// Percentage of records covered by updates and deletes.
const UPDATE_PERCENTAGE: u32 = 20;

// Statements use positional binding (:1,:2) -> [arg1, arg2].
const CREATE_STMT: &str = r#"
  CREATE TABLE vpn_users(
    vpn_id             TT_INT    NOT NULL,
    vpn_nb             TT_INT    NOT NULL,
    directory_nb       CHAR(100) NOT NULL,
    last_calling_party CHAR(100) NOT NULL,
    descr              CHAR(100) NOT NULL,
    PRIMARY KEY (vpn_id, vpn_nb))
"#;

const INSERT_STMT: &str = "INSERT INTO vpn_users VALUES (:1,:2,:3,:4,:5)";

const SELECT_STMT: &str =
    "SELECT directory_nb, last_calling_party, descr FROM vpn_users WHERE vpn_id = :1 AND vpn_nb = :2";

const UPDATE_STMT: &str =
    "UPDATE vpn_users SET last_calling_party = :1 WHERE vpn_id = :2 AND vpn_nb = :3";

const DELETE_STMT: &str = "DELETE FROM vpn_users WHERE vpn_id = :1 AND vpn_nb = :2";

const DROP_STMT: &str = "DROP TABLE vpn_users";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dml {
    Select,
    Update,
    Delete,
}

impl Dml {
    fn label(self) -> &'static str {
        match self {
            Dml::Select => "select",
            Dml::Update => "update",
            Dml::Delete => "delete",
        }
    }

    fn target_rows(self) -> u64 {
        let percentage = match self {
            Dml::Select => READ_PERCENTAGE,
            Dml::Update | Dml::Delete => UPDATE_PERCENTAGE,
        };
        u64::from(NUM_RECORDS * percentage / 100)
    }
}

/// Run the vpn_users workload.
pub async fn run<C: Connection>(conn: &mut C) -> Result<()> {
    create_table(conn).await?;
    populate_table(conn).await?;
    perform_dml(conn, Dml::Select).await?;
    perform_dml(conn, Dml::Update).await?;
    perform_dml(conn, Dml::Delete).await?;
    conn.execute(DROP_STMT, Params::None).await?;
    Ok(())
}

// Keys are a combination of vpn_id and vpn_nb.
fn key_count() -> i64 {
    (f64::from(NUM_RECORDS)).sqrt() as i64
}

async fn create_table<C: Connection>(conn: &mut C) -> Result<()> {
    conn.execute(CREATE_STMT, Params::None).await?;
    let result = conn
        .execute("SELECT COUNT(*) FROM vpn_users", Params::None)
        .await?;
    if scalar_i64(&result) == Some(0) {
        info!("Table has been created");
    }
    Ok(())
}

async fn populate_table<C: Connection>(conn: &mut C) -> Result<()> {
    info!("Populating table");
    let key_cnt = key_count();

    for i in 0..key_cnt {
        for j in 0..key_cnt {
            conn.execute(
                INSERT_STMT,
                Params::Positional(vec![
                    Bind::In(SqlValue::from(i)),
                    Bind::In(SqlValue::from(j)),
                    Bind::In(SqlValue::from(format!("dir_{i}{j}"))),
                    Bind::In(SqlValue::from(format!("call_{i}{j}"))),
                    Bind::In(SqlValue::from(format!("desc{i}{j}"))),
                ]),
            )
            .await?;
        }
        info!("  Inserted {} rows", (i + 1) * key_cnt);
    }

    let result = conn
        .execute("SELECT COUNT(*) FROM vpn_users", Params::None)
        .await?;
    if scalar_i64(&result) != Some(key_cnt * key_cnt) {
        error!("Error populating table");
    }
    Ok(())
}

async fn perform_dml<C: Connection>(conn: &mut C, operation: Dml) -> Result<()> {
    info!("Performing {}s", operation.label());
    let target = operation.target_rows();
    let mut performed = 0u64;

    let key_cnt = key_count();
    for i in 0..key_cnt {
        for j in 0..key_cnt {
            let (stmt, binds) = match operation {
                Dml::Select => (
                    SELECT_STMT,
                    vec![Bind::In(SqlValue::from(i)), Bind::In(SqlValue::from(j))],
                ),
                Dml::Update => (
                    UPDATE_STMT,
                    vec![
                        Bind::In(SqlValue::from(format!("callU_{i}{j}"))),
                        Bind::In(SqlValue::from(i)),
                        Bind::In(SqlValue::from(j)),
                    ],
                ),
                Dml::Delete => (
                    DELETE_STMT,
                    vec![Bind::In(SqlValue::from(i)), Bind::In(SqlValue::from(j))],
                ),
            };

            match conn.execute(stmt, Params::Positional(binds)).await {
                Ok(result) => {
                    performed += match operation {
                        Dml::Select => result.len() as u64,
                        Dml::Update | Dml::Delete => result.rows_affected,
                    };
                    if performed == target {
                        info!("  {}(ed) {} rows", operation.label(), performed);
                        return Ok(());
                    }
                }
                Err(err) => error!("{err}"),
            }
        }
        info!("  {}(ed) {} rows", operation.label(), (i + 1) * key_cnt);
    }
    Ok(())
}
