use concat_string::concat_string;

use crate::utils::{char_len, expand_tabs};

/// Expands tabs and right-pads every line to the widest one.
/// Returns the padded lines together with the content width.
pub fn normalize(lines: &[String]) -> (Vec<String>, usize) {
    let expanded: Vec<String> = lines.iter().map(|l| expand_tabs(l)).collect();
    let max_width = expanded.iter().map(|l| char_len(l)).max().unwrap_or(0);

    let padded = expanded
        .into_iter()
        .map(|l| {
            let fill = max_width - char_len(&l);
            concat_string!(l, " ".repeat(fill))
        })
        .collect();
    (padded, max_width)
}

/// Frames already padded lines. Zero lines are framed as one empty line.
pub fn build_balloon(lines: &[String], max_width: usize) -> String {
    let empty = [String::new()];
    let lines = if lines.is_empty() { &empty[..] } else { lines };
    let count = lines.len();

    let mut o = Vec::with_capacity(count + 2);
    o.push(concat_string!(" ", "_".repeat(max_width + 2)));
    for (i, line) in lines.iter().enumerate() {
        let (left, right) = match (count, i) {
            (1, _) => ('<', '>'),
            (_, 0) => ('/', '\\'),
            (_, i) if i == count - 1 => ('\\', '/'),
            _ => ('|', '|'),
        };
        o.push(format!("{left} {line} {right}"));
    }
    o.push(concat_string!(" ", "-".repeat(max_width + 2)));
    o.join("\n")
}

pub fn gen_bubble(lines: &[String]) -> String {
    let (padded, max_width) = normalize(lines);
    log::debug!("{} line(s), content width {}", padded.len(), max_width);
    build_balloon(&padded, max_width)
}
