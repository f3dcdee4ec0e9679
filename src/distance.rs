//! Levenshtein edit distance.
//!
//! Distances are computed over Unicode scalar values, so `"é"` and `"e"`
//! differ by one substitution regardless of how many bytes either takes.

/// Minimum number of single-character insertions, deletions or substitutions
/// that turn `a` into `b`.
///
/// Runs the usual dynamic-programming recurrence, keeping only two rows of
/// the table. Rows follow the longer string so the buffers are sized by the
/// shorter one.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let n = shorter.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &lc) in longer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in shorter.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Edit distance that gives up once the answer is known to exceed `max_dist`.
///
/// Returns the exact distance when it is `<= max_dist`, and some value
/// `> max_dist` otherwise. Only cells within `max_dist` of the diagonal are
/// evaluated, and the scan stops as soon as a whole row is out of range.
pub(crate) fn bounded_distance(a: &[char], b: &[char], max_dist: usize) -> usize {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if longer.len() - shorter.len() > max_dist {
        return max_dist + 1;
    }

    let over = max_dist + 1;
    let n = shorter.len();
    let mut prev: Vec<usize> = (0..=n).map(|j| j.min(over)).collect();
    let mut curr = vec![over; n + 1];

    for (i, &lc) in longer.iter().enumerate() {
        let row = i + 1;
        curr[0] = row.min(over);

        let col_min = row.saturating_sub(max_dist).max(1);
        let col_max = (row + max_dist).min(n);
        let mut row_min = curr[0];

        for j in 1..=n {
            if j < col_min || j > col_max {
                curr[j] = over;
                continue;
            }
            let value = if lc == shorter[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(prev[j]).min(curr[j - 1])
            };
            curr[j] = value.min(over);
            row_min = row_min.min(curr[j]);
        }

        if row_min > max_dist {
            return over;
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
