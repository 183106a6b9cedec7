use super::error::RouterError;

use smallvec::SmallVec;

pub(super) const CAPTURE: char = ':';
pub(super) const STAR: char = '*';
pub(super) const SLASH: char = '/';

/// Name a bare `*` catch-all binds under.
pub(super) const STAR_NAME: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Segment<'a> {
    Static(&'a str),
    Dynamic(&'a str),
    CatchAll(&'a str),
}

pub(super) type Segments<'a> = SmallVec<[Segment<'a>; 8]>;

/// Path parts paired with their byte offset in the slash-trimmed path.
pub(super) type Parts<'a> = SmallVec<[(usize, &'a str); 8]>;

pub(super) fn parse_pattern(pattern: &str) -> Result<Segments<'_>, RouterError> {
    let rest = match pattern.strip_prefix(SLASH) {
        Some(rest) => rest,
        None => return Err(RouterError::invalid(pattern, "pattern must start with '/'")),
    };

    let parts: SmallVec<[&str; 8]> = rest.split(SLASH).collect();
    let last = parts.len() - 1;
    let mut segments = Segments::new();

    for (i, &part) in parts.iter().enumerate() {
        let segment = if let Some(name) = part.strip_prefix(CAPTURE) {
            if name.is_empty() {
                return Err(RouterError::invalid(pattern, "capture name can not be empty"));
            }
            check_single_placeholder(pattern, name)?;
            Segment::Dynamic(name)
        } else if let Some(name) = part.strip_prefix(STAR) {
            if i != last {
                return Err(RouterError::invalid(
                    pattern,
                    "catch-all segment can only appear at end",
                ));
            }
            check_single_placeholder(pattern, name)?;
            Segment::CatchAll(if name.is_empty() { STAR_NAME } else { name })
        } else {
            Segment::Static(part)
        };
        segments.push(segment);
    }

    Ok(segments)
}

fn check_single_placeholder(pattern: &str, name: &str) -> Result<(), RouterError> {
    if name.contains(|c: char| c == CAPTURE || c == STAR) {
        return Err(RouterError::invalid(
            pattern,
            "a segment can hold only one placeholder",
        ));
    }
    Ok(())
}

/// Splits a request path on `/` after dropping one leading slash.
/// Empty parts are kept, so a trailing slash yields a final empty part.
pub(super) fn split_path(path: &str) -> (&str, Parts<'_>) {
    let path = path.strip_prefix(SLASH).unwrap_or(path);
    let mut parts = Parts::new();
    let mut offset = 0;
    for part in path.split(SLASH) {
        parts.push((offset, part));
        offset += part.len() + 1;
    }
    (path, parts)
}
