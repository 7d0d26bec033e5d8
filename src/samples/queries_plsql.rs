//! Items table: guarded create block, array insert, then updates and
//! deletes through anonymous PL/SQL blocks.

use log::{error, info};

use crate::driver::{Bind, Connection, Params, SqlValue};
use crate::error::Result;
use crate::samples::scalar_i64;

/// Name shown in the usage text.
pub const NAME: &str = "queriesAndPlsql";

/// Number of records to insert.
const NUM_RECORDS: i64 = 100;

// Drops a leftover table if present, then creates it fresh.
const CREATE_BLOCK: &str = r#"
  BEGIN
    DECLARE
      e_table_missing EXCEPTION;
      PRAGMA EXCEPTION_INIT(e_table_missing, -00942);
    BEGIN
      EXECUTE IMMEDIATE ('DROP TABLE items');
    EXCEPTION
      WHEN e_table_missing
      THEN NULL;
    END;
    EXECUTE IMMEDIATE('
      CREATE TABLE items(
        id    TT_INT        NOT NULL,
        name  VARCHAR2(100) NOT NULL,
        descr VARCHAR2(100) NOT NULL,
        PRIMARY KEY (id))
    ');
  END;
"#;

const INSERT_STMT: &str = "INSERT INTO items VALUES (:1,:2,:3)";

const SELECT_STMT: &str = "SELECT id, name, descr FROM items WHERE id BETWEEN 0 AND 19";

const SELECT_DESCR_STMT: &str = "SELECT descr FROM items WHERE id = :id_in";

const UPDATE_BLOCK: &str = r#"
  DECLARE
    new_descr VARCHAR2(100) := 'updated description';
  BEGIN
    UPDATE items SET descr = new_descr WHERE id = :id_in;
  END;
"#;

const DELETE_BLOCK: &str = r#"
  BEGIN
    DELETE FROM items WHERE id = :id_in;
  END;
"#;

const DROP_STMT: &str = "DROP TABLE items";

/// Run the items walkthrough.
pub async fn run<C: Connection>(conn: &mut C) -> Result<()> {
    create_table(conn).await?;
    insert_many(conn).await?;
    if let Err(err) = perform_select(conn).await {
        error!("{err}");
    }
    if let Err(err) = update_with_anon_block(conn).await {
        error!("{err}");
    }
    if let Err(err) = delete_with_anon_block(conn).await {
        error!("{err}");
    }
    conn.execute(DROP_STMT, Params::None).await?;
    Ok(())
}

fn id_param(id: i64) -> Params {
    Params::Named(vec![("id_in".to_string(), Bind::In(SqlValue::from(id)))])
}

async fn create_table<C: Connection>(conn: &mut C) -> Result<()> {
    conn.execute(CREATE_BLOCK, Params::None).await?;
    let result = conn
        .execute("SELECT COUNT(*) FROM items", Params::None)
        .await?;
    if scalar_i64(&result) == Some(0) {
        info!("Table has been created");
    }
    Ok(())
}

async fn insert_many<C: Connection>(conn: &mut C) -> Result<()> {
    info!("Inserting with executeMany ...");
    let rows: Vec<Vec<SqlValue>> = (0..NUM_RECORDS)
        .map(|i| {
            vec![
                SqlValue::from(i),
                SqlValue::from(format!("name_{i}")),
                SqlValue::from(format!("descr_{i}")),
            ]
        })
        .collect();

    conn.execute_many(INSERT_STMT, rows).await?;

    let result = conn
        .execute("SELECT COUNT(*) FROM items", Params::None)
        .await?;
    if let Some(count) = scalar_i64(&result) {
        info!("  {count} Registries added");
    }
    Ok(())
}

async fn perform_select<C: Connection>(conn: &mut C) -> Result<()> {
    info!("Select some rows with one select ...");
    let result = conn.execute(SELECT_STMT, Params::None).await?;
    let fetched = result.iter().count();
    info!("  {fetched} Rows have been fetched and iterated");
    Ok(())
}

async fn update_with_anon_block<C: Connection>(conn: &mut C) -> Result<()> {
    info!("Updating a row using an anonymous block ...");

    let before = conn.execute(SELECT_DESCR_STMT, id_param(0)).await?;
    if let Some(row) = before.rows.first() {
        info!("  Value before update: {}", row.try_get(0)?);
    }

    conn.execute(UPDATE_BLOCK, id_param(0)).await?;

    let after = conn.execute(SELECT_DESCR_STMT, id_param(0)).await?;
    if let Some(row) = after.rows.first() {
        info!("  Value after update: {}", row.try_get(0)?);
    }
    Ok(())
}

async fn delete_with_anon_block<C: Connection>(conn: &mut C) -> Result<()> {
    info!("Delete a row using an anonymous block ...");

    conn.execute(DELETE_BLOCK, id_param(0)).await?;

    let result = conn
        .execute("SELECT COUNT(*) FROM items", Params::None)
        .await?;
    if let Some(count) = scalar_i64(&result) {
        info!("  Rows after delete = {count}");
    }
    Ok(())
}
