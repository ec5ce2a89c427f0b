use anyhow::bail;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5050;
pub const MIN_PORT: u16 = 1024;
pub const MAX_PORT: u16 = 65535;

/// Immutable server configuration, built once at startup and shared
/// (via `Arc`) with every connection task.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory below which all served files live.
    pub root: PathBuf,
    /// Port to bind on the loopback interface.
    pub port: u16,
    /// Reject resolved paths that escape the root. Off by default,
    /// matching the usual dev-server behavior.
    pub confine: bool,
}

impl Config {
    /// Validates and builds a configuration.
    ///
    /// Fails if the port is below 1024 or the root is not an existing
    /// directory. Validation happens before any socket is bound.
    pub fn new(port: u16, root: impl Into<PathBuf>, confine: bool) -> anyhow::Result<Self> {
        if port < MIN_PORT {
            bail!(
                "Invalid port number! It should fit in range between {} and {}.",
                MIN_PORT,
                MAX_PORT
            );
        }

        let root = root.into();
        match std::fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => bail!("{} is not a directory!", root.display()),
            Err(_) => bail!("Directory {} does not exist!", root.display()),
        }

        Ok(Self { root, port, confine })
    }

    /// Builds a configuration from command-line arguments (excluding the
    /// program name): `[port] [root] [--confine]`.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut port = DEFAULT_PORT;
        let mut root = PathBuf::from(".");
        let mut confine = false;
        let mut positional = 0;

        for arg in args {
            if arg == "--confine" {
                confine = true;
                continue;
            }

            match positional {
                0 => port = parse_port(&arg)?,
                1 => root = PathBuf::from(arg),
                _ => bail!("Unexpected argument: {}", arg),
            }
            positional += 1;
        }

        Self::new(port, root, confine)
    }

    /// The loopback address the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

fn parse_port(s: &str) -> anyhow::Result<u16> {
    // Parse into u64 first so an out-of-range value reports a range
    // error rather than "not a number".
    let Ok(n) = s.parse::<u64>() else {
        bail!(
            "{} is not a port number!\nNOTE: If you want to use a custom path, you also need to specify a custom port.",
            s
        );
    };

    if n < u64::from(MIN_PORT) || n > u64::from(MAX_PORT) {
        bail!(
            "Invalid port number! It should fit in range between {} and {}.",
            MIN_PORT,
            MAX_PORT
        );
    }

    Ok(n as u16)
}
