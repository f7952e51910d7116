// Drop trailing elements satisfying `is_zero`, always keeping the
// first one. Returns the number of removed elements.
pub(crate) fn trim_end<T, F>(v: &mut Vec<T>, is_zero: F) -> usize
where
    F: Fn(&T) -> bool,
{
    let keep = match v.iter().rposition(|c| !is_zero(c)) {
        Some(idx) => idx + 1,
        None => std::cmp::min(v.len(), 1),
    };
    let removed = v.len() - keep;
    v.truncate(keep);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_trim_end() {
        let mut v = vec![1, 2, 0, 0];
        assert_eq!(trim_end(&mut v, |c| *c == 0), 2);
        assert_eq!(v, [1, 2]);

        let mut v = vec![0, 0, 0];
        assert_eq!(trim_end(&mut v, |c| *c == 0), 2);
        assert_eq!(v, [0]);

        let mut v = vec![0, 3];
        assert_eq!(trim_end(&mut v, |c| *c == 0), 0);
        assert_eq!(v, [0, 3]);

        let mut v: Vec<i32> = vec![];
        assert_eq!(trim_end(&mut v, |c| *c == 0), 0);
        assert!(v.is_empty());
    }
}
