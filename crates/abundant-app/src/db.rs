// Rust guideline compliant 2026-10-19

//! The database a command runs against.
//!
//! A [`Database`] is opened once per invocation. Opening it builds every
//! prefix index the commands need: issue IDs, users and the configured
//! metadata vocabularies. Prefix failures are turned into aborts worded for
//! the person at the terminal.

use crate::error::{AppError, Result};
use crate::repo::RepoContext;
use abundant_core::users::{self, bracketed, register_alias};
use abundant_core::{
    AliasTable, Config, Error as CoreError, Issue, MetaKind, PrefixIndex, Storage,
};
use std::collections::HashMap;
use std::time::Instant;

/// Pseudo-user that resolves to "no user".
pub const NOBODY: &str = "nobody";

/// Alias for the configured username.
pub const ME: &str = "me";

/// Ambiguity suggestions are cut to this many when there are more than
/// `SUGGESTION_LIMIT + 1` candidates.
const SUGGESTION_LIMIT: usize = 2;

/// An open database with its prefix indices.
#[derive(Debug)]
pub struct Database {
    repo: RepoContext,
    config: Config,
    storage: Storage,
    issues: PrefixIndex,
    users: AliasTable,
    single_user: bool,
    meta: HashMap<MetaKind, PrefixIndex>,
}

impl Database {
    /// Opens the database described by `repo`.
    ///
    /// If a username is configured but missing from the users file, it is
    /// appended to the file.
    ///
    /// # Arguments
    ///
    /// * `repo` - Paths of an existing database
    /// * `config` - Configuration already layered for this database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database does not exist
    /// - The issues directory or users file cannot be read
    /// - The users file cannot be appended to
    pub fn open(repo: RepoContext, config: Config) -> Result<Self> {
        if !repo.exists() {
            return Err(AppError::DatabaseNotFound {
                path: repo.root().to_path_buf(),
            });
        }
        let storage = repo.open_storage()?;

        let started = Instant::now();
        let issues = PrefixIndex::from_items(storage.ids()?);
        tracing::debug!(
            count = issues.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "issue prefix load"
        );

        let started = Instant::now();
        let entries = users::read_users(repo.users_path())?;
        let single_user = entries.len() <= 1;
        let mut user_table = users::user_table(&entries);
        add_pseudo_users(&mut user_table, &repo, config.ui.username.as_deref())?;
        tracing::debug!(
            count = entries.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "user prefix load"
        );

        let meta = build_meta_indices(&config);

        Ok(Self {
            repo,
            config,
            storage,
            issues,
            users: user_table,
            single_user,
            meta,
        })
    }

    /// Returns the database paths.
    #[must_use]
    pub fn repo(&self) -> &RepoContext {
        &self.repo
    }

    /// Returns the configuration the database was opened with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the issue ID index.
    #[must_use]
    pub fn issues(&self) -> &PrefixIndex {
        &self.issues
    }

    /// Returns the user table, including `me` and `nobody`.
    #[must_use]
    pub fn users(&self) -> &AliasTable {
        &self.users
    }

    /// Returns true if the users file lists at most one user.
    #[must_use]
    pub fn single_user(&self) -> bool {
        self.single_user
    }

    /// Resolves an issue prefix to a full issue ID.
    ///
    /// # Errors
    ///
    /// Returns `Abort` naming the prefix when it matches no issue or several
    /// issues. The ambiguity message suggests candidates as
    /// `prefix:title`.
    pub fn issue_id(&self, prefix: &str) -> Result<String> {
        match self.issues.lookup(prefix) {
            Ok(id) => Ok(id.to_string()),
            Err(CoreError::AmbiguousPrefix { prefix, candidates }) => Err(AppError::Abort(format!(
                "Issue prefix {} is ambiguous\n  Suggestions: {}",
                prefix,
                self.suggest_issues(&candidates)
            ))),
            Err(CoreError::UnknownPrefix(prefix)) => Err(AppError::Abort(format!(
                "Issue prefix {} does not correspond to any issues",
                prefix
            ))),
            Err(err) => Err(err.into()),
        }
    }

    fn suggest_issues(&self, candidates: &[String]) -> String {
        let shown = if candidates.len() > SUGGESTION_LIMIT + 1 {
            &candidates[..SUGGESTION_LIMIT]
        } else {
            candidates
        };
        shown
            .iter()
            .map(|id| {
                let unique = self.short_id(id);
                match self.storage.load(id) {
                    Ok(issue) if !issue.title().is_empty() => {
                        format!("{}:{}", unique, issue.title())
                    }
                    Ok(_) => unique.to_string(),
                    Err(err) => {
                        tracing::warn!(id = %id, error = %err, "cannot load suggested issue");
                        unique.to_string()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Loads the issue `prefix` identifies.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix does not resolve or the issue file
    /// cannot be read.
    pub fn issue(&self, prefix: &str) -> Result<Issue> {
        let id = self.issue_id(prefix)?;
        Ok(self.storage.load(&id)?)
    }

    /// Loads every issue in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the issues directory cannot be read.
    pub fn all_issues(&self) -> Result<Vec<Issue>> {
        Ok(self.storage.load_all()?)
    }

    /// Returns the shortest unique prefix of an issue ID.
    ///
    /// IDs missing from the index are returned whole.
    #[must_use]
    pub fn short_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.issues.shortest_unique_prefix(id).unwrap_or(id)
    }

    /// Formats an issue ID as `prefix:rest`, see [`PrefixIndex::pref_str`].
    ///
    /// IDs missing from the index are returned unmarked.
    #[must_use]
    pub fn pref_str(&self, id: &str, short: bool) -> String {
        self.issues
            .pref_str(id, short)
            .unwrap_or_else(|_| id.to_string())
    }

    /// Resolves a user prefix.
    ///
    /// # Returns
    ///
    /// The full user line, or `None` for `nobody` and for `me` when no
    /// username is configured.
    ///
    /// # Errors
    ///
    /// Returns `Abort` naming the prefix when it matches no user or several
    /// users.
    pub fn user(&self, prefix: &str) -> Result<Option<String>> {
        match self.users.resolve(prefix) {
            Ok(user) if user == ME || user == NOBODY => Ok(None),
            Ok(user) => Ok(Some(user.to_string())),
            Err(CoreError::AmbiguousPrefix { prefix, candidates }) => Err(AppError::Abort(format!(
                "User prefix {} is ambiguous\n  Suggestions: {}",
                prefix,
                candidates.join(", ")
            ))),
            Err(CoreError::UnknownPrefix(prefix)) => Err(AppError::Abort(format!(
                "User prefix {} does not correspond to any known user",
                prefix
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves users for every prefix, dropping the ones meaning "no user".
    ///
    /// # Errors
    ///
    /// Returns the first resolution failure.
    pub fn users_for(&self, prefixes: &[String]) -> Result<Vec<String>> {
        let mut resolved = Vec::with_capacity(prefixes.len());
        for prefix in prefixes {
            if let Some(user) = self.user(prefix)? {
                resolved.push(user);
            }
        }
        Ok(resolved)
    }

    /// Resolves a metadata value against its configured vocabulary.
    ///
    /// Values pass through unchanged when no vocabulary is configured for
    /// `kind`.
    ///
    /// # Errors
    ///
    /// Returns `Abort` if the value matches no choice or several choices.
    pub fn meta(&self, kind: MetaKind, value: &str) -> Result<String> {
        let Some(index) = self.meta.get(&kind) else {
            return Ok(value.to_string());
        };
        match index.lookup(value) {
            Ok(choice) => Ok(choice.to_string()),
            Err(CoreError::UnknownPrefix(prefix)) => Err(AppError::Abort(format!(
                "{} is not a valid option for {}",
                prefix, kind
            ))),
            Err(err) => Err(meta_ambiguity(kind, err)),
        }
    }

    /// Resolves a metadata filter value.
    ///
    /// Unlike [`Database::meta`], a value outside the vocabulary is kept as
    /// typed so it simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `Abort` if the value matches several choices.
    pub fn meta_filter(&self, kind: MetaKind, value: &str) -> Result<String> {
        match self.meta(kind, value) {
            Err(AppError::Abort(_)) if !self.is_ambiguous_meta(kind, value) => {
                Ok(value.to_string())
            }
            other => other,
        }
    }

    fn is_ambiguous_meta(&self, kind: MetaKind, value: &str) -> bool {
        self.meta.get(&kind).is_some_and(|index| {
            matches!(
                index.lookup(value),
                Err(CoreError::AmbiguousPrefix { .. })
            )
        })
    }

    /// Saves a new issue and makes it addressable by prefix.
    ///
    /// Issues updated alongside it, such as its parent, are written under the
    /// same lock.
    ///
    /// # Arguments
    ///
    /// * `issue` - The new issue
    /// * `related` - Existing issues changed to refer to it
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be taken or a write fails.
    pub fn add_issue(&mut self, issue: &Issue, related: &[&Issue]) -> Result<()> {
        let mut batch = Vec::with_capacity(related.len() + 1);
        batch.push(issue);
        batch.extend_from_slice(related);
        self.storage.save_all(&batch)?;
        self.issues.insert(issue.id.clone());
        Ok(())
    }

    /// Creates an issue whose ID does not collide with an existing one.
    #[must_use]
    pub fn new_issue(&self, title: String, creator: Option<String>, timestamp: i64) -> Issue {
        let mut nonce = 0;
        loop {
            let issue = Issue::new(title.clone(), creator.clone(), timestamp, nonce);
            if !self.issues.contains(&issue.id) {
                return issue;
            }
            tracing::debug!(id = %issue.id, "issue id taken, retrying");
            nonce += 1;
        }
    }

    /// Saves changes to existing issues under one lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be taken or a write fails.
    pub fn save(&self, issues: &[&Issue]) -> Result<()> {
        Ok(self.storage.save_all(issues)?)
    }
}

fn meta_ambiguity(kind: MetaKind, err: CoreError) -> AppError {
    match err {
        CoreError::AmbiguousPrefix { prefix, candidates } => AppError::Abort(format!(
            "{} is an ambiguous option for {}, choices: {}",
            prefix,
            kind,
            candidates.join(", ")
        )),
        other => other.into(),
    }
}

/// Adds `nobody` and `me` to the user table.
///
/// `me` is an alias of the configured username. A username that is not
/// itself a user (but perhaps a prefix of one) is appended to the users file
/// first.
fn add_pseudo_users(
    table: &mut AliasTable,
    repo: &RepoContext,
    username: Option<&str>,
) -> Result<()> {
    table.insert(NOBODY);
    let Some(name) = username.map(str::trim).filter(|name| !name.is_empty()) else {
        table.insert(ME);
        return Ok(());
    };

    let known = matches!(table.index().lookup(name), Ok(found) if found == name);
    if !known {
        tracing::info!(user = name, "adding configured user to users file");
        users::append_user(repo.users_path(), name)?;
        table.insert(name);
        if let Some(alias) = bracketed(name) {
            register_alias(table, alias, name);
        }
    }
    register_alias(table, ME, name);
    Ok(())
}

fn build_meta_indices(config: &Config) -> HashMap<MetaKind, PrefixIndex> {
    let mut indices = HashMap::new();
    for kind in MetaKind::ALL {
        let Some(field) = config.metadata.get(kind) else {
            continue;
        };
        if field.choices.is_empty() {
            continue;
        }
        let started = Instant::now();
        let index = PrefixIndex::from_items(field.vocabulary());
        tracing::debug!(
            meta = %kind,
            count = index.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "meta prefix load"
        );
        indices.insert(kind, index);
    }
    indices
}
