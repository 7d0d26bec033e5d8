//! Oracle TimesTen sample programs
//!
//! A collection of small programs that exercise an Oracle TimesTen
//! database: table creation, array inserts, PL/SQL blocks, CLOB
//! streaming and stored procedures with OUT binds. Each sample reads
//! its credentials from the command line and runs against any driver
//! implementing the [`Driver`] and [`Connection`] traits.
//!
//! # Example
//!
//! ```no_run
//! use ttsamples::samples::simple;
//! use ttsamples::Result;
//!
//! fn main() -> Result<()> {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!
//!     // Resolve -u, -p and the optional -c connection string
//!     let credentials = ttsamples::get_credentials(simple::NAME, &args)?;
//!
//!     println!("Connecting as {} to {}",
//!         credentials.username, credentials.connect_string);
//!
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod descriptor;
pub mod driver;
pub mod error;
pub mod harness;
pub mod samples;

// Re-export main types
pub use access::{get_credentials, get_credentials_to, usage, Credentials, DEFAULT_CONNECT_STRING};
pub use descriptor::{ConnectDescriptor, ConnectionMode};
pub use driver::{
    Bind, ClobLocator, Column, ColumnSet, Connection, Driver, ExecResult, Params, RefCursorHandle,
    Row, SqlType, SqlValue,
};
pub use error::{Error, Result};
pub use harness::{run_sample, run_sample_with_args};
