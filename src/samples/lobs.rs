//! CLOB round trip: insert a character LOB and read it back as a chunk
//! stream.

use futures::StreamExt;
use log::info;

use crate::driver::{Bind, Connection, Params, SqlValue};
use crate::error::{Error, Result};

/// Name shown in the usage text.
pub const NAME: &str = "lobs";

/// Text inserted into the CLOB column.
const SAMPLE_TEXT: &str = "\
TimesTen is an in-memory relational database. All data is held in memory, \
giving applications query and update response times measured in \
microseconds. Durability is provided through transaction logging and \
checkpointing to disk.\n\
Applications connect in direct mode, loading the database into their own \
address space, or in client/server mode through a listener. Either way the \
SQL surface is the same, so programs can switch between the two with a \
connection string change.";

/// Run the CLOB walkthrough.
pub async fn run<C: Connection>(conn: &mut C) -> Result<()> {
    info!("> Creating table with CLOB column");
    // The table may not exist yet.
    let _ = conn.execute("DROP TABLE clobs", Params::None).await;
    conn.execute("CREATE TABLE clobs (id NUMBER, text CLOB)", Params::None)
        .await?;

    info!("> Populating CLOB");
    conn.execute(
        "INSERT INTO clobs VALUES (1, :colClob)",
        Params::Named(vec![(
            "colClob".to_string(),
            Bind::In(SqlValue::from(SAMPLE_TEXT)),
        )]),
    )
    .await?;

    info!("> Querying CLOB column");
    let result = conn
        .execute("SELECT text FROM clobs WHERE id=1", Params::None)
        .await?;
    let clob = result
        .rows
        .first()
        .and_then(|row| row.get(0))
        .and_then(SqlValue::as_clob)
        .cloned()
        .ok_or_else(|| Error::type_conversion("expected a CLOB in the first row"))?;

    info!("> Reading CLOB");
    let mut chunks = conn.read_clob(&clob).await?;
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        info!("{}", String::from_utf8_lossy(&chunk));
    }
    info!("> Finished reading CLOB");

    Ok(())
}
