//! git::resolver
//!
//! Repository probe and field resolution.
//!
//! # Architecture
//!
//! [`Git`] is the single doorway to repository state. It owns a
//! [`CommandRunner`] and an optional working directory, and turns a request
//! list of [`GitField`]s into a [`GitLog`].
//!
//! # Failure semantics
//!
//! Acquisition is best-effort. A query that fails degrades that one field
//! to `""` (or `false` for flags) and resolution continues; nothing here
//! returns an error. A missing git binary and a directory that was never a
//! repository both just produce empty results. With debug tracing on, each
//! failed query is reported on stderr.
//!
//! # Example
//!
//! ```no_run
//! use gitstamp::core::field::GitField;
//! use gitstamp::git::Git;
//!
//! let git = Git::new(None);
//! if git.is_repository() {
//!     let log = git.collect(&[GitField::Branch, GitField::CommitShort]);
//!     println!("{:?}", log.get("branch"));
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::core::field::GitField;
use crate::core::record::{FieldValue, GitLog};

use super::runner::{CommandRunner, SystemRunner};

const REMOTE_URL_COMMAND: &str = "git config --get remote.origin.url";

/// Single doorway to repository metadata.
pub struct Git<R = SystemRunner> {
    runner: R,
    cwd: Option<PathBuf>,
    debug: bool,
}

impl Git<SystemRunner> {
    /// A resolver running real shell commands, rooted at `cwd` (or the
    /// process working directory).
    pub fn new(cwd: Option<&Path>) -> Self {
        Git::with_runner(SystemRunner, cwd)
    }
}

impl<R: CommandRunner> Git<R> {
    /// A resolver with a caller-supplied runner.
    pub fn with_runner(runner: R, cwd: Option<&Path>) -> Self {
        Git {
            runner,
            cwd: cwd.map(Path::to_path_buf),
            debug: false,
        }
    }

    /// Report failed queries on stderr.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Best-effort query: trimmed stdout on success, `""` on any failure.
    fn query(&self, command: &str) -> String {
        match self.runner.run(command, self.cwd.as_deref()) {
            Ok(output) => output,
            Err(err) => {
                if self.debug {
                    eprintln!("[debug] {}", err);
                }
                String::new()
            }
        }
    }

    /// Whether the working directory is inside a git repository.
    ///
    /// Fast path: a `.git` entry directly under the working directory, no
    /// subprocess needed. Slow path (covers subdirectories of a checkout
    /// and linked worktrees): ask git itself.
    pub fn is_repository(&self) -> bool {
        let dot_git = match &self.cwd {
            Some(dir) => dir.join(".git"),
            None => PathBuf::from(".git"),
        };
        if dot_git.exists() {
            return true;
        }
        !self.query("git rev-parse --git-dir").is_empty()
    }

    /// Absolute path of the working-copy root, `""` outside a repository.
    pub fn root(&self) -> String {
        self.query("git rev-parse --show-toplevel")
    }

    /// Resolve the requested fields into a record.
    ///
    /// An empty request and a non-repository directory both produce an
    /// empty record immediately; neither is an error. Otherwise every
    /// requested field is present in the result, in request order, with
    /// unresolvable fields carrying their empty default.
    pub fn collect(&self, fields: &[GitField]) -> GitLog {
        let mut log = GitLog::new();
        if fields.is_empty() || !self.is_repository() {
            return log;
        }

        // Queried once and shared by the fields that need it.
        let root = self.root();

        for field in fields {
            log.insert(field.key(), self.resolve(field, &root));
        }
        log
    }

    fn resolve(&self, field: &GitField, root: &str) -> FieldValue {
        match field {
            GitField::Repo => self.repo_name(root).into(),
            GitField::Branch => self.branch().into(),
            GitField::Commit => self.query("git rev-parse HEAD").into(),
            GitField::CommitShort => self.query("git rev-parse --short HEAD").into(),
            GitField::Author => self.query("git log -1 --pretty=format:%an").into(),
            GitField::AuthorEmail => self.query("git log -1 --pretty=format:%ae").into(),
            GitField::CommitTime => self.query("git log -1 --pretty=format:%cI").into(),
            GitField::CommitMessage => {
                collapse_lines(&self.query("git log -1 --pretty=format:%s")).into()
            }
            GitField::Tag => self.query("git describe --tags --exact-match HEAD").into(),
            GitField::IsDirty => {
                FieldValue::Bool(!self.query("git status --porcelain").is_empty())
            }
            GitField::RemoteUrl => self.query(REMOTE_URL_COMMAND).into(),
            GitField::Root => root.into(),
            GitField::Custom(command) => self.query(command).into(),
        }
    }

    /// Current branch, falling back through the detached-HEAD chain:
    /// exact tag, then short hash, then the literal `HEAD`.
    fn branch(&self) -> String {
        let name = self.query("git rev-parse --abbrev-ref HEAD");
        if name != "HEAD" {
            return name;
        }
        let tag = self.query("git describe --tags --exact-match HEAD");
        if !tag.is_empty() {
            return tag;
        }
        let short = self.query("git rev-parse --short HEAD");
        if !short.is_empty() {
            return short;
        }
        "HEAD".to_string()
    }

    /// Short repository name: derived from the remote URL when one is
    /// configured, else the base name of the working-copy root.
    fn repo_name(&self, root: &str) -> String {
        let url = self.query(REMOTE_URL_COMMAND);
        if !url.is_empty() {
            return repo_name_from_url(&url);
        }
        match Path::new(root).file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => String::new(),
        }
    }
}

/// Derive a short repository name from a remote URL.
///
/// Handles the common `scheme://host/path/name(.git)` and
/// `user@host:path/name(.git)` shapes. Anything that does not look like a
/// URL, or does not yield a plausible name, falls back to the raw string.
fn repo_name_from_url(url: &str) -> String {
    let url_like =
        url.contains("git@") || url.contains("http://") || url.contains("https://");
    if !url_like {
        return url.to_string();
    }
    let trimmed = url.strip_suffix(".git").unwrap_or(url);
    match trimmed.rsplit(['/', ':']).next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => url.to_string(),
    }
}

/// Collapse a possibly multi-line subject into one trimmed line.
fn collapse_lines(subject: &str) -> String {
    subject
        .split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::RunnerError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Replays canned responses and records every command it sees.
    /// A missing or `None` entry makes the command fail.
    struct ScriptedRunner {
        responses: HashMap<String, Option<String>>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn new(responses: &[(&str, Option<&str>)]) -> Self {
            ScriptedRunner {
                responses: responses
                    .iter()
                    .map(|(command, reply)| (command.to_string(), reply.map(String::from)))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for &ScriptedRunner {
        fn run(&self, command: &str, _cwd: Option<&Path>) -> Result<String, RunnerError> {
            self.calls.borrow_mut().push(command.to_string());
            match self.responses.get(command) {
                Some(Some(output)) => Ok(output.clone()),
                _ => Err(RunnerError::Failed {
                    command: command.to_string(),
                    status: 128,
                    stderr: String::new(),
                }),
            }
        }
    }

    /// A resolver over a tempdir that contains a `.git` marker, so the
    /// probe succeeds without touching the runner.
    fn repo_resolver<'a>(
        runner: &'a ScriptedRunner,
    ) -> (tempfile::TempDir, Git<&'a ScriptedRunner>) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let git = Git::with_runner(runner, Some(dir.path()));
        (dir, git)
    }

    /// A resolver over an empty tempdir: the probe falls through to the
    /// runner.
    fn bare_resolver<'a>(
        runner: &'a ScriptedRunner,
    ) -> (tempfile::TempDir, Git<&'a ScriptedRunner>) {
        let dir = tempfile::tempdir().unwrap();
        let git = Git::with_runner(runner, Some(dir.path()));
        (dir, git)
    }

    mod probe {
        use super::*;

        #[test]
        fn fast_path_needs_no_subprocess() {
            let runner = ScriptedRunner::new(&[]);
            let (_dir, git) = repo_resolver(&runner);
            assert!(git.is_repository());
            assert!(runner.calls().is_empty());
        }

        #[test]
        fn slow_path_asks_git() {
            let runner = ScriptedRunner::new(&[("git rev-parse --git-dir", Some(".git"))]);
            let (_dir, git) = bare_resolver(&runner);
            assert!(git.is_repository());
            assert_eq!(runner.calls(), vec!["git rev-parse --git-dir"]);
        }

        #[test]
        fn failure_means_not_a_repository() {
            let runner = ScriptedRunner::new(&[("git rev-parse --git-dir", None)]);
            let (_dir, git) = bare_resolver(&runner);
            assert!(!git.is_repository());
        }

        #[test]
        fn empty_probe_output_means_not_a_repository() {
            let runner = ScriptedRunner::new(&[("git rev-parse --git-dir", Some(""))]);
            let (_dir, git) = bare_resolver(&runner);
            assert!(!git.is_repository());
        }
    }

    mod collect {
        use super::*;

        #[test]
        fn empty_request_skips_even_the_probe() {
            let runner = ScriptedRunner::new(&[]);
            let (_dir, git) = bare_resolver(&runner);
            let log = git.collect(&[]);
            assert!(log.is_empty());
            assert!(runner.calls().is_empty());
        }

        #[test]
        fn outside_a_repository_returns_empty() {
            let runner = ScriptedRunner::new(&[("git rev-parse --git-dir", None)]);
            let (_dir, git) = bare_resolver(&runner);
            let log = git.collect(&[GitField::Branch, GitField::Commit]);
            assert!(log.is_empty());
            // The probe ran, nothing else did.
            assert_eq!(runner.calls(), vec!["git rev-parse --git-dir"]);
        }

        #[test]
        fn resolves_each_field_with_its_command() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-parse --abbrev-ref HEAD", Some("main")),
                ("git rev-parse HEAD", Some("0123abcd0123abcd")),
                ("git rev-parse --short HEAD", Some("0123abc")),
                ("git log -1 --pretty=format:%an", Some("Ada Lovelace")),
                ("git log -1 --pretty=format:%ae", Some("ada@example.com")),
                ("git log -1 --pretty=format:%cI", Some("2024-11-02T09:30:00+01:00")),
                ("git log -1 --pretty=format:%s", Some("add engine")),
                ("git describe --tags --exact-match HEAD", Some("v1.2.0")),
                ("git status --porcelain", Some(" M src/lib.rs")),
                ("git config --get remote.origin.url", Some("https://github.com/acme/widget.git")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&GitField::BUILT_IN);
            assert_eq!(log.get("repo"), Some(&FieldValue::String("widget".into())));
            assert_eq!(log.get("branch"), Some(&FieldValue::String("main".into())));
            assert_eq!(log.get("commit"), Some(&FieldValue::String("0123abcd0123abcd".into())));
            assert_eq!(log.get("commitShort"), Some(&FieldValue::String("0123abc".into())));
            assert_eq!(log.get("author"), Some(&FieldValue::String("Ada Lovelace".into())));
            assert_eq!(
                log.get("authorEmail"),
                Some(&FieldValue::String("ada@example.com".into()))
            );
            assert_eq!(
                log.get("commitTime"),
                Some(&FieldValue::String("2024-11-02T09:30:00+01:00".into()))
            );
            assert_eq!(
                log.get("commitMessage"),
                Some(&FieldValue::String("add engine".into()))
            );
            assert_eq!(log.get("tag"), Some(&FieldValue::String("v1.2.0".into())));
            assert_eq!(log.get("isDirty"), Some(&FieldValue::Bool(true)));
            assert_eq!(
                log.get("remoteUrl"),
                Some(&FieldValue::String("https://github.com/acme/widget.git".into()))
            );
            assert_eq!(log.get("root"), Some(&FieldValue::String("/work/widget".into())));
        }

        #[test]
        fn keys_follow_request_order() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-parse HEAD", Some("abc")),
                ("git status --porcelain", Some("")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::IsDirty, GitField::Commit, GitField::Root]);
            let keys: Vec<&str> = log.keys().collect();
            assert_eq!(keys, vec!["isDirty", "commit", "root"]);
        }

        #[test]
        fn failures_degrade_to_defaults() {
            // Only the root query answers; everything else fails.
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Commit, GitField::Tag, GitField::IsDirty]);
            assert_eq!(log.get("commit"), Some(&FieldValue::String(String::new())));
            assert_eq!(log.get("tag"), Some(&FieldValue::String(String::new())));
            assert_eq!(log.get("isDirty"), Some(&FieldValue::Bool(false)));
        }

        #[test]
        fn root_is_queried_once_per_collection() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            // Both fields need the root; repo falls back to its base name
            // because no remote is configured.
            let log = git.collect(&[GitField::Root, GitField::Repo]);
            assert_eq!(log.get("root"), Some(&FieldValue::String("/work/widget".into())));
            assert_eq!(log.get("repo"), Some(&FieldValue::String("widget".into())));

            let root_queries = runner
                .calls()
                .iter()
                .filter(|call| call.as_str() == "git rev-parse --show-toplevel")
                .count();
            assert_eq!(root_queries, 1);
        }

        #[test]
        fn duplicate_requests_collapse_to_one_entry() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-parse --abbrev-ref HEAD", Some("main")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Branch, GitField::Branch]);
            assert_eq!(log.len(), 1);
        }

        #[test]
        fn clean_tree_is_not_dirty() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git status --porcelain", Some("")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::IsDirty]);
            assert_eq!(log.get("isDirty"), Some(&FieldValue::Bool(false)));
        }

        #[test]
        fn commit_message_newlines_collapse() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git log -1 --pretty=format:%s", Some("first line\nsecond line")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::CommitMessage]);
            assert_eq!(
                log.get("commitMessage"),
                Some(&FieldValue::String("first line second line".into()))
            );
        }
    }

    mod branch_fallbacks {
        use super::*;

        #[test]
        fn detached_head_prefers_exact_tag() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-parse --abbrev-ref HEAD", Some("HEAD")),
                ("git describe --tags --exact-match HEAD", Some("v2.0.0")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Branch]);
            assert_eq!(log.get("branch"), Some(&FieldValue::String("v2.0.0".into())));
        }

        #[test]
        fn detached_head_without_tag_uses_short_hash() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-parse --abbrev-ref HEAD", Some("HEAD")),
                ("git rev-parse --short HEAD", Some("0123abc")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Branch]);
            assert_eq!(log.get("branch"), Some(&FieldValue::String("0123abc".into())));
        }

        #[test]
        fn exhausted_fallbacks_keep_the_literal_head() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-parse --abbrev-ref HEAD", Some("HEAD")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Branch]);
            assert_eq!(log.get("branch"), Some(&FieldValue::String("HEAD".into())));
        }

        #[test]
        fn failed_branch_query_degrades_to_empty() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Branch]);
            assert_eq!(log.get("branch"), Some(&FieldValue::String(String::new())));
        }
    }

    mod custom_fields {
        use super::*;

        #[test]
        fn runs_the_command_verbatim() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
                ("git rev-list --count HEAD", Some("42")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let field = GitField::Custom("git rev-list --count HEAD".to_string());
            let log = git.collect(&[field]);
            assert_eq!(
                log.get("custom:git rev-list --count HEAD"),
                Some(&FieldValue::String("42".into()))
            );
            assert!(runner.calls().contains(&"git rev-list --count HEAD".to_string()));
        }

        #[test]
        fn failing_command_degrades_to_empty() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Custom("exit 1".to_string())]);
            assert_eq!(log.get("custom:exit 1"), Some(&FieldValue::String(String::new())));
        }
    }

    mod repo_names {
        use super::*;

        #[test]
        fn https_url_with_git_suffix() {
            assert_eq!(repo_name_from_url("https://github.com/acme/widget.git"), "widget");
        }

        #[test]
        fn https_url_without_suffix() {
            assert_eq!(repo_name_from_url("https://github.com/acme/widget"), "widget");
        }

        #[test]
        fn scp_style_url() {
            assert_eq!(repo_name_from_url("git@github.com:acme/widget.git"), "widget");
        }

        #[test]
        fn scp_style_without_path() {
            assert_eq!(repo_name_from_url("git@github.com:widget.git"), "widget");
        }

        #[test]
        fn ssh_scheme_url() {
            assert_eq!(
                repo_name_from_url("ssh://git@github.com:2222/acme/widget.git"),
                "widget"
            );
        }

        #[test]
        fn trailing_slash_falls_back_to_raw() {
            let url = "https://github.com/acme/widget/";
            assert_eq!(repo_name_from_url(url), url);
        }

        #[test]
        fn non_url_remote_falls_back_to_raw() {
            assert_eq!(repo_name_from_url("/srv/mirrors/widget.git"), "/srv/mirrors/widget.git");
        }

        #[test]
        fn no_remote_uses_root_base_name() {
            let runner = ScriptedRunner::new(&[
                ("git rev-parse --show-toplevel", Some("/work/widget")),
            ]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Repo]);
            assert_eq!(log.get("repo"), Some(&FieldValue::String("widget".into())));
        }

        #[test]
        fn no_remote_and_no_root_is_empty() {
            // Probe passes via the .git marker, every query fails.
            let runner = ScriptedRunner::new(&[]);
            let (_dir, git) = repo_resolver(&runner);

            let log = git.collect(&[GitField::Repo]);
            assert_eq!(log.get("repo"), Some(&FieldValue::String(String::new())));
        }
    }

    mod collapse_lines {
        use super::*;

        #[test]
        fn single_line_unchanged() {
            assert_eq!(collapse_lines("fix parser"), "fix parser");
        }

        #[test]
        fn newline_runs_become_one_space() {
            assert_eq!(collapse_lines("a\n\nb\r\nc"), "a b c");
        }

        #[test]
        fn surrounding_newlines_are_trimmed() {
            assert_eq!(collapse_lines("\nfix parser\n"), "fix parser");
        }
    }
}
