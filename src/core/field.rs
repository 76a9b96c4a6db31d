//! core::field
//!
//! Field vocabulary for metadata requests.
//!
//! # Types
//!
//! - [`GitField`] - A single requestable piece of repository metadata
//!
//! Requests arrive as plain strings (config files, CLI flags, adapter
//! options) and are narrowed into the closed [`GitField`] enum at the
//! boundary. Unknown names are dropped there rather than carried along, so
//! the resolver only ever dispatches on variants it knows about.
//!
//! # Custom fields
//!
//! Any request string starting with `custom:` names a custom field; the
//! remainder is a shell command run verbatim. The record key for a custom
//! field is the full original string, prefix included.
//!
//! # Example
//!
//! ```
//! use gitstamp::core::field::GitField;
//!
//! assert_eq!(GitField::parse("branch"), Some(GitField::Branch));
//! assert_eq!(GitField::parse("version"), None);
//!
//! let custom = GitField::parse("custom:git rev-list --count HEAD").unwrap();
//! assert_eq!(custom.key(), "custom:git rev-list --count HEAD");
//! ```

use std::fmt;

/// Reserved prefix marking a request string as a custom shell query.
pub const CUSTOM_PREFIX: &str = "custom:";

/// A single requestable piece of repository metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitField {
    /// Short repository name from the remote URL (or the root directory).
    Repo,
    /// Current branch name, with detached-HEAD fallbacks.
    Branch,
    /// Full commit hash of HEAD.
    Commit,
    /// Abbreviated commit hash of HEAD.
    CommitShort,
    /// Author name of the latest commit.
    Author,
    /// Author email of the latest commit.
    AuthorEmail,
    /// Committer timestamp of the latest commit (strict ISO 8601).
    CommitTime,
    /// Subject line of the latest commit.
    CommitMessage,
    /// Tag pointing exactly at HEAD, if any.
    Tag,
    /// Whether the working tree has uncommitted or untracked changes.
    IsDirty,
    /// Raw URL of the `origin` remote.
    RemoteUrl,
    /// Absolute path of the working-copy root.
    Root,
    /// A verbatim shell command whose trimmed stdout becomes the value.
    Custom(String),
}

impl GitField {
    /// Every built-in field, in canonical listing order.
    pub const BUILT_IN: [GitField; 12] = [
        GitField::Repo,
        GitField::Branch,
        GitField::Commit,
        GitField::CommitShort,
        GitField::Author,
        GitField::AuthorEmail,
        GitField::CommitTime,
        GitField::CommitMessage,
        GitField::Tag,
        GitField::IsDirty,
        GitField::RemoteUrl,
        GitField::Root,
    ];

    /// The request list used when a caller does not specify fields.
    pub const DEFAULT: [GitField; 9] = [
        GitField::Repo,
        GitField::Branch,
        GitField::Commit,
        GitField::CommitShort,
        GitField::Author,
        GitField::AuthorEmail,
        GitField::CommitTime,
        GitField::CommitMessage,
        GitField::IsDirty,
    ];

    /// Parse a request string.
    ///
    /// Built-in names match exactly (case-sensitive); a `custom:` prefix
    /// yields a custom field carrying the rest of the string.
    ///
    /// # Returns
    ///
    /// `Some(GitField)` for a recognized request, `None` otherwise.
    pub fn parse(name: &str) -> Option<GitField> {
        if let Some(command) = name.strip_prefix(CUSTOM_PREFIX) {
            return Some(GitField::Custom(command.to_string()));
        }
        match name {
            "repo" => Some(GitField::Repo),
            "branch" => Some(GitField::Branch),
            "commit" => Some(GitField::Commit),
            "commitShort" => Some(GitField::CommitShort),
            "author" => Some(GitField::Author),
            "authorEmail" => Some(GitField::AuthorEmail),
            "commitTime" => Some(GitField::CommitTime),
            "commitMessage" => Some(GitField::CommitMessage),
            "tag" => Some(GitField::Tag),
            "isDirty" => Some(GitField::IsDirty),
            "remoteUrl" => Some(GitField::RemoteUrl),
            "root" => Some(GitField::Root),
            _ => None,
        }
    }

    /// Narrow a list of request strings, silently dropping anything
    /// unrecognized. Duplicates survive; the record collapses them later.
    pub fn parse_many<S: AsRef<str>>(names: &[S]) -> Vec<GitField> {
        names
            .iter()
            .filter_map(|name| GitField::parse(name.as_ref()))
            .collect()
    }

    /// The record key this field resolves under.
    ///
    /// Built-in fields use their request name; custom fields keep the full
    /// original string including the `custom:` prefix.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GitField::Repo => "repo",
            GitField::Branch => "branch",
            GitField::Commit => "commit",
            GitField::CommitShort => "commitShort",
            GitField::Author => "author",
            GitField::AuthorEmail => "authorEmail",
            GitField::CommitTime => "commitTime",
            GitField::CommitMessage => "commitMessage",
            GitField::Tag => "tag",
            GitField::IsDirty => "isDirty",
            GitField::RemoteUrl => "remoteUrl",
            GitField::Root => "root",
            GitField::Custom(command) => return write!(f, "{}{}", CUSTOM_PREFIX, command),
        };
        f.write_str(name)
    }
}
