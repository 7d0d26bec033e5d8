//! Smallest end-to-end walkthrough: create a table, insert a few rows,
//! select them back, drop the table.

use log::info;

use crate::driver::{Connection, Params, SqlValue};
use crate::error::Result;

/// Name shown in the usage text.
pub const NAME: &str = "simple";

/// Run the employees walkthrough.
pub async fn run<C: Connection>(conn: &mut C) -> Result<()> {
    conn.execute(
        "CREATE TABLE employees(first_name VARCHAR2(20), last_name VARCHAR2(20))",
        Params::None,
    )
    .await?;
    info!("Table has been created");

    let values = vec![
        vec![SqlValue::from("ROBERT"), SqlValue::from("ROBERTSON")],
        vec![SqlValue::from("ANDY"), SqlValue::from("ANDREWS")],
        vec![SqlValue::from("MICHAEL"), SqlValue::from("MICHAELSON")],
    ];
    let inserted = values.len();
    conn.execute_many("INSERT INTO employees VALUES(:1, :2)", values)
        .await?;
    info!("Inserted {inserted} employees into the table");

    let result = conn
        .execute("SELECT first_name, last_name FROM employees", Params::None)
        .await?;
    for row in &result {
        info!("Selected employee: {} {}", row.try_get(0)?, row.try_get(1)?);
    }

    conn.execute("DROP TABLE employees", Params::None).await?;
    info!("Table has been dropped");

    Ok(())
}
