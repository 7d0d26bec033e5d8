//! Command-line credential resolution shared by the sample programs.

use std::collections::HashMap;
use std::fmt;
use std::io;

use crate::error::{Error, Result};

/// Connect string used when `-c` is not given.
pub const DEFAULT_CONNECT_STRING: &str = "localhost/sampledb:timesten_direct";

const USAGE_BANNER: &str = r#"
  Usage: node {script} -u <userName> -p <password> [-c <connectionString>]

  To run the sample, pass the following parameters to the sample program:

    Required:

      -u  <username>: database user name

      -p  <password>: database password for the user

    Optional:

      -c  <connectionString>:  Use the specified connection string (Default: "{default}")

            <connectionString> should be in Easy-Connect format:

              {<net_service_name> | <host>/<host_service_name>:{ timesten_direct | timesten_client }}
"#;

/// Resolved credentials for a sample-program run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Database user name.
    pub username: String,
    /// Database password for the user.
    pub password: String,
    /// Easy-Connect style connect string.
    pub connect_string: String,
}

impl Credentials {
    /// Create credentials with an explicit connect string.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        connect_string: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            connect_string: connect_string.into(),
        }
    }
}

// Keeps the password out of log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("connect_string", &self.connect_string)
            .finish()
    }
}

/// Parse flag-style arguments into a flag-to-value map.
///
/// Tokens are consumed in pairs. A flag given as the final token with no
/// following value is kept in the map with no value, so validation can
/// still see it. A repeated flag keeps its last value.
pub fn parse_args(args: &[String]) -> HashMap<String, Option<String>> {
    let mut opts = HashMap::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        opts.insert(flag.clone(), iter.next().cloned());
    }
    opts
}

/// Render the usage text for a sample program.
///
/// The invocation line embeds `script_name` exactly once.
pub fn usage(script_name: &str) -> String {
    USAGE_BANNER
        .replace("{script}", script_name)
        .replace("{default}", DEFAULT_CONNECT_STRING)
}

/// Resolve credentials from command-line arguments.
///
/// A missing or valueless `-u` or `-p` prints the usage text to stderr and
/// fails with [`Error::MissingCredential`]. Any other flag given without a
/// value fails with [`Error::MissingArgumentValue`]. Unrecognized
/// flag/value pairs are ignored, and `-c` falls back to
/// [`DEFAULT_CONNECT_STRING`].
pub fn get_credentials(script_name: &str, args: &[String]) -> Result<Credentials> {
    get_credentials_to(script_name, args, &mut io::stderr())
}

/// Resolve credentials, writing usage diagnostics to `diagnostics` instead
/// of stderr.
///
/// The usage text is written once, before the credential failure is
/// returned. A failed diagnostic write is ignored.
pub fn get_credentials_to(
    script_name: &str,
    args: &[String],
    diagnostics: &mut impl io::Write,
) -> Result<Credentials> {
    let mut opts = parse_args(args);

    let username = match opts.remove("-u") {
        Some(Some(value)) => value,
        _ => {
            let _ = writeln!(diagnostics, "{}", usage(script_name));
            return Err(Error::MissingCredential);
        }
    };
    let password = match opts.remove("-p") {
        Some(Some(value)) => value,
        _ => {
            let _ = writeln!(diagnostics, "{}", usage(script_name));
            return Err(Error::MissingCredential);
        }
    };

    // At most one flag can dangle (only the final token has no pair), but
    // the check is uniform: -c and unrecognized flags alike.
    if let Some((flag, _)) = opts.iter().find(|(_, value)| value.is_none()) {
        return Err(Error::MissingArgumentValue { flag: flag.clone() });
    }

    let connect_string = opts
        .remove("-c")
        .flatten()
        .unwrap_or_else(|| DEFAULT_CONNECT_STRING.to_string());

    Ok(Credentials {
        username,
        password,
        connect_string,
    })
}
