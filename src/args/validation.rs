use std::fs;
use std::path::PathBuf;

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a `.json`/`.csv` roster
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The roster file '{file}' is not readable."));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json" | "csv") => Ok(path),
        _ => Err(format!("The roster file '{file}' must end in .json or .csv.")),
    }
}

/// # Errors
///
/// Will return `Err` if the url has no scheme or the ttl isn't positive
pub fn validate(feed_url: &str, cache_ttl_secs: Option<i64>) -> Result<(), String> {
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(format!("feed url '{feed_url}' must start with http:// or https://"));
    }
    if cache_ttl_secs.is_some_and(|ttl| ttl <= 0) {
        return Err("cache ttl must be a positive number of seconds".to_string());
    }
    Ok(())
}
