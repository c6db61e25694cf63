/// Spaces substituted for each tab
pub const TAB_WIDTH: usize = 4;

// Width in code points, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}
