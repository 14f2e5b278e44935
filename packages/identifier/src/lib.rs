#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Syntactic extraction of GitHub owners and repositories from pasted input.
//!
//! Nothing here touches the network; an extracted owner may not exist.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Substring that separates the host from the path in a pasted URL.
pub const HOST_MARKER: &str = "github.com/";

const PATH_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Input is empty")]
    Empty,
    #[error("No owner found after '{HOST_MARKER}' in '{0}'")]
    MissingOwner(String),
    #[error("Invalid repo link: '{0}'")]
    MissingRepo(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRef {
    pub owner: String,
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.owner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Extract a profile owner from a profile URL or a bare username.
///
/// Input without [`HOST_MARKER`] is taken verbatim (after trimming) as the
/// owner name. This fallback is intentional: users paste either form.
///
/// # Errors
///
/// * [`ExtractError::Empty`] if the input is blank
/// * [`ExtractError::MissingOwner`] if nothing follows the host marker
pub fn extract_owner(input: &str) -> Result<OwnerRef, ExtractError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExtractError::Empty);
    }

    let Some(rest) = after_marker(input) else {
        return Ok(OwnerRef {
            owner: input.to_string(),
        });
    };

    let owner = rest.split(PATH_SEPARATOR).next().unwrap_or_default();
    if owner.is_empty() {
        return Err(ExtractError::MissingOwner(input.to_string()));
    }

    Ok(OwnerRef {
        owner: owner.to_string(),
    })
}

/// Extract `owner/repo` from a repository URL.
///
/// Unlike [`extract_owner`] there is no bare-name fallback: the host marker
/// must be present and followed by two non-empty path segments. Anything
/// after the second segment (`/issues`, `/tree/main`, ...) is ignored.
///
/// # Errors
///
/// * [`ExtractError::Empty`] if the input is blank
/// * [`ExtractError::MissingRepo`] if the marker or either segment is missing
pub fn extract_repo(input: &str) -> Result<RepoRef, ExtractError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExtractError::Empty);
    }

    let rest = after_marker(input).ok_or_else(|| ExtractError::MissingRepo(input.to_string()))?;

    let mut segments = rest.split(PATH_SEPARATOR);
    let owner = segments.next().unwrap_or_default();
    let repo = segments.next().unwrap_or_default();
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return Err(ExtractError::MissingRepo(input.to_string()));
    }

    Ok(RepoRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

fn after_marker(input: &str) -> Option<&str> {
    input
        .split_once(HOST_MARKER)
        .map(|(_, rest)| rest.split(['?', '#']).next().unwrap_or_default())
}
