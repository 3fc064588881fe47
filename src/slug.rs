use anyhow::*;
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_CHARACTERS_REGEX: Regex = Regex::new("[^\\sa-z0-9-]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
}

/// Turns a quiz name as typed by a user into the slug it is stored under.
pub fn sanitize_slug(name: &str) -> Result<String> {
    let name = unidecode(name);
    let name: String = FORBIDDEN_CHARACTERS_REGEX
        .replace_all(&name.to_lowercase(), "")
        .into();

    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Invalid quiz name"));
    }

    let name: String = WHITESPACE_REGEX.replace_all(name, "-").into();
    Ok(name)
}
