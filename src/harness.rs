//! Shared run skeleton for the sample programs.
//!
//! Every sample follows the same shape: resolve credentials from the
//! command line, connect, run the sample body, and always attempt to close
//! the connection. Only credential resolution failures propagate to the
//! caller; anything that goes wrong after that is logged and the run still
//! completes normally.

use futures::future::BoxFuture;
use log::{error, info, warn};

use crate::access::get_credentials;
use crate::descriptor::ConnectDescriptor;
use crate::driver::{Connection, Driver};
use crate::error::Result;

/// Run a sample body against a connection obtained from `driver`.
///
/// Credentials are resolved from `args`; a resolution failure is returned
/// to the caller. Connect, body and close failures are logged under
/// `script_name` and swallowed, and close is attempted whenever a
/// connection was opened.
pub async fn run_sample_with_args<D, F>(
    script_name: &str,
    driver: &D,
    args: &[String],
    body: F,
) -> Result<()>
where
    D: Driver,
    F: for<'a> FnOnce(&'a mut D::Conn) -> BoxFuture<'a, Result<()>>,
{
    let credentials = get_credentials(script_name, args)?;

    match ConnectDescriptor::parse(&credentials.connect_string) {
        Ok(descriptor) => info!("{script_name}: connecting to {descriptor}"),
        Err(err) => warn!("{script_name}: {err}"),
    }

    let mut connection = match driver.connect(credentials).await {
        Ok(connection) => connection,
        Err(err) => {
            error!("{script_name}: {err}");
            return Ok(());
        }
    };

    if let Err(err) = body(&mut connection).await {
        error!("{script_name}: {err}");
    }

    match connection.close().await {
        Ok(()) => info!("{script_name}: connection has been released"),
        Err(err) => error!("{script_name}: {err}"),
    }

    Ok(())
}

/// Run a sample body with arguments taken from the process command line.
pub async fn run_sample<D, F>(script_name: &str, driver: &D, body: F) -> Result<()>
where
    D: Driver,
    F: for<'a> FnOnce(&'a mut D::Conn) -> BoxFuture<'a, Result<()>>,
{
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_sample_with_args(script_name, driver, &args, body).await
}
