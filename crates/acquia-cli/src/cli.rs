//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lando Acquia - resolve Acquia recipes and run the pull/push prompt flows
#[derive(Parser, Debug)]
#[command(name = "lando-acquia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Home directory holding the Acquia and Lando credential caches
    #[arg(long, global = true, env = "LANDO_ACQUIA_HOME")]
    pub home: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Acquia API credentials passed on the command line
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialArgs {
    /// An Acquia API Client ID
    #[arg(long, env = "ACQUIA_KEY")]
    pub key: Option<String>,

    /// An Acquia API Client Secret
    #[arg(long, env = "ACQUIA_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

/// Remote API endpoints, overridable for testing
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EndpointArgs {
    #[arg(long, env = "ACQUIA_AUTH_URL", default_value = acquia_cloud::AUTH_URL, hide = true)]
    pub auth_url: String,

    #[arg(long, env = "ACQUIA_API_URL", default_value = acquia_cloud::BASE_URL, hide = true)]
    pub api_url: String,
}

/// Options shared by `pull` and `push`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TaskArgs {
    /// App config file
    #[arg(short = 'F', long, default_value = ".lando.yml")]
    pub file: PathBuf,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Environment for the code
    #[arg(short, long)]
    pub code: Option<String>,

    /// Environment for the database
    #[arg(short, long)]
    pub database: Option<String>,

    /// Environment for the files
    #[arg(short, long)]
    pub files: Option<String>,

    /// Take defaults instead of prompting
    #[arg(short = 'n', long)]
    pub no_interaction: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub endpoints: EndpointArgs,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the app's recipe into services, tooling and proxy routes
    ///
    /// Examples:
    ///   lando-acquia resolve                        # .lando.yml in the current directory
    ///   lando-acquia resolve --conf-dest ./config   # prune templates against ./config
    ///   lando-acquia resolve --format yaml
    Resolve {
        /// App config file
        #[arg(short = 'F', long, default_value = ".lando.yml")]
        file: PathBuf,

        /// Directory holding the config templates
        #[arg(long)]
        conf_dest: Option<PathBuf>,

        /// Proxy domain
        #[arg(long, default_value = acquia_meta::defaults::DEFAULT_DOMAIN)]
        domain: String,

        /// Port the proxy last bound for http
        #[arg(long)]
        http_port: Option<u16>,

        /// Port the proxy last bound for https
        #[arg(long)]
        https_port: Option<u16>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show the tooling resolved for a database
    Tooling {
        /// Database type, e.g. mysql:8.0 or postgres:13
        #[arg(default_value = "mysql")]
        database: String,
    },

    /// List saved Acquia keys
    Keys {
        /// Include keys saved for this app
        #[arg(long)]
        app: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Choose environments to pull code, database and files from
    Pull(TaskArgs),

    /// Choose environments to push code, database and files to
    Push(TaskArgs),

    /// List the applications the credentials can see
    Apps {
        #[command(flatten)]
        credentials: CredentialArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        endpoints: EndpointArgs,
    },

    /// Upload an SSH public key unless it is already registered
    PostKey {
        /// Public key file
        path: PathBuf,

        /// Label prefix for the uploaded key
        #[arg(long, default_value = acquia_cloud::DEFAULT_KEY_LABEL)]
        label: String,

        #[command(flatten)]
        credentials: CredentialArgs,

        #[command(flatten)]
        endpoints: EndpointArgs,
    },

    /// Read or record the application UUID in .acquia-cli.yml
    AcliUuid {
        /// UUID to record; the file is only written when it does not exist
        #[arg(long)]
        write: Option<String>,

        /// Project file
        #[arg(long, default_value = acquia_core::acli::ACLI_PROJECT_FILE)]
        file: PathBuf,
    },
}
