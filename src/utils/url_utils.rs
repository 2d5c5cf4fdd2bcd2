//! Address classification and resolution.
//!
//! An address is either a remote URL (`http`/`https`) or a local file path.
//! Local paths are treated as pseudo-URLs whose directory is the containing
//! folder, so pages saved to disk resolve their assets the same way a served
//! page would.

use url::Url;

use crate::inliner::errors::InlineError;

/// Check whether an address names a remote resource
///
/// Classification looks at the scheme prefix only: `http` and `https` are
/// remote, anything else (including plain filesystem paths) is local. The rest
/// of the address is not validated here; a malformed host or port fails later
/// as a request error.
#[must_use]
pub fn is_remote(address: &str) -> bool {
    address.split_once(':').is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

/// Check whether an address contains any blacklisted substring
#[must_use]
pub fn is_blacklisted<S: AsRef<str>>(address: &str, blacklist: &[S]) -> bool {
    blacklist
        .iter()
        .map(AsRef::as_ref)
        .any(|entry| !entry.is_empty() && address.contains(entry))
}

/// Resolve a possibly relative reference against the address of the document
/// it was found in
///
/// References that already carry a scheme are returned verbatim, so resolving
/// an absolute address against any base is a no-op. Remote bases follow
/// RFC 3986 resolution through [`Url::join`]; local bases resolve against the
/// folder containing the base file.
pub fn resolve_path(base: &str, reference: &str) -> Result<String, InlineError> {
    if Url::parse(reference).is_ok() {
        return Ok(reference.to_string());
    }

    if is_remote(base) {
        let base_url = Url::parse(base).map_err(|source| InlineError::Resolve {
            base: base.to_string(),
            reference: reference.to_string(),
            source,
        })?;
        let resolved = base_url
            .join(reference)
            .map_err(|source| InlineError::Resolve {
                base: base.to_string(),
                reference: reference.to_string(),
                source,
            })?;
        return Ok(resolved.to_string());
    }

    Ok(resolve_local(base, reference))
}

fn resolve_local(base: &str, reference: &str) -> String {
    if reference.is_empty() {
        return base.to_string();
    }

    // Scheme-relative and absolute-path references have no base to inherit
    // from when the page itself lives on disk.
    if reference.starts_with('/') {
        return reference.to_string();
    }

    let joined = match base.rsplit_once('/') {
        Some((dir, _file)) => format!("{dir}/{reference}"),
        None => reference.to_string(),
    };

    normalize_segments(&joined)
}

/// Collapse `.` and `..` segments of a slash-separated path
///
/// Leading `..` segments survive on relative paths (they still mean something
/// on disk) and are dropped on absolute ones.
fn normalize_segments(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if !absolute => segments.push(".."),
                _ => {}
            },
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if absolute {
        normalized.insert(0, '/');
    }
    if path.ends_with('/') && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}
