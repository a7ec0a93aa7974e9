//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
///
/// Lines are shown debug-quoted so padding and control characters stay
/// visible. Each differing line carries the char column of the first
/// mismatch.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::from("--- expected\n+++ actual\n");
    let mut exp_lines = expected.split('\n');
    let mut act_lines = actual.split('\n');
    let mut line = 0;
    loop {
        line += 1;
        match (exp_lines.next(), act_lines.next()) {
            (None, None) => break,
            (Some(e), Some(a)) if e == a => {}
            (e, a) => {
                let col = first_mismatch(e.unwrap_or(""), a.unwrap_or(""));
                out.push_str(&format!("@@ line {line}, col {col} @@\n"));
                if let Some(e) = e {
                    out.push_str(&format!("-{e:?}\n"));
                }
                if let Some(a) = a {
                    out.push_str(&format!("+{a:?}\n"));
                }
            }
        }
    }
    out
}

fn first_mismatch(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count() + 1
}
