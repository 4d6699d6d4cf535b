//! Configuration for the forge remote.
use secrecy::SecretString;

/// Committer identity of the automatic merge commit the platform creates
/// when a pull request lands.
pub const PR_MERGE_BOT: &str = "web-flow";

/// Remote repository coordinates and credentials.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub owner: String,
    pub repo: String,
    pub token: SecretString,
}
