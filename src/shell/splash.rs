//! Start-up banner

/// Lines of the splash banner, wrapped to `width` columns
pub fn splash_lines(
    name: &str,
    version: &str,
    based_on: Option<&str>,
    width: usize,
) -> Vec<String> {
    let mut paragraphs = vec![format!("Template metaprogramming shell ({}) {}", name, version)];
    if let Some(based_on) = based_on {
        paragraphs.push(String::new());
        paragraphs.push(format!("Based on {}", based_on));
    }

    let mut lines = vec!["/*".to_string()];
    for paragraph in &paragraphs {
        if paragraph.is_empty() {
            lines.push(" *".to_string());
            continue;
        }
        // room for the " * " prefix
        for line in word_wrap(paragraph, width.saturating_sub(3)) {
            lines.push(format!(" * {}", line));
        }
    }
    lines.push(" */".to_string());
    lines
}

/// Greedy word wrap; a word longer than `width` gets a line of its own
pub fn word_wrap(
    text: &str,
    width: usize,
) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
