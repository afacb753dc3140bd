/// Normalize a pasted API key into the form that is stored and sent.
///
/// Trims, drops a leading `Bearer ` (any case), unwraps one pair of
/// surrounding double quotes and removes every whitespace character. The
/// pipeline is repeated until the key stops changing, so the result is stable
/// under a second pass.
pub fn sanitize_api_key(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let mut current = sanitize_once(raw);
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_bearer = strip_bearer(trimmed);
    let without_quotes = strip_quotes(without_bearer);

    without_quotes.chars().filter(|c| !c.is_whitespace()).collect()
}

fn strip_bearer(value: &str) -> &str {
    const PREFIX: &str = "bearer";

    let Some(head) = value.get(..PREFIX.len()) else {
        return value;
    };
    if !head.eq_ignore_ascii_case(PREFIX) {
        return value;
    }

    let rest = &value[PREFIX.len()..];
    let stripped = rest.trim_start();
    if stripped.len() == rest.len() {
        // "Bearer" glued to the key is left alone
        return value;
    }
    stripped
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 3 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
