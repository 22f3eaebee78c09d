//! The Collatz recurrence and its inverse.
//!
//! Pure arithmetic with no simulation state. The forward step drives the
//! detail-panel path query; the inverse step feeds the growth frontier.

/// One forward Collatz step: n/2 when even, 3n+1 when odd.
pub fn next(n: u64) -> u64 {
    if n % 2 == 0 {
        n / 2
    } else {
        3 * n + 1
    }
}

/// Values m with next(m) == n, even predecessor first.
///
/// 2n always maps back down via the halving branch. The 3m+1 branch only
/// reaches n from m = (n-1)/3 when that quotient is a positive odd integer,
/// since the branch fires for odd m alone.
pub fn predecessors(n: u64) -> Vec<u64> {
    let mut preds = vec![n * 2];
    if n > 1 && (n - 1) % 3 == 0 {
        let m = (n - 1) / 3;
        if m % 2 == 1 {
            preds.push(m);
        }
    }
    preds
}

/// The full trajectory from `start` down to 1, both endpoints included.
pub fn path_to_one(start: u64) -> Vec<u64> {
    let mut path = vec![start];
    let mut n = start;
    while n != 1 {
        n = next(n);
        path.push(n);
    }
    path
}
