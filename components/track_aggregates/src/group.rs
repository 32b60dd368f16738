use std::collections::HashMap;
use track_records::Track;

/// Groups tracks by a string key, keeping groups in order of first appearance
pub(crate) fn group_by<'a>(
    tracks: &'a [Track],
    key: impl Fn(&'a Track) -> &'a str,
) -> Vec<(&'a str, Vec<&'a Track>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Track>)> = Vec::new();

    for track in tracks {
        let k = key(track);
        match index.get(k) {
            Some(&i) => groups[i].1.push(track),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![track]));
            }
        }
    }

    groups
}

pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(Vec::new()), None);
        assert_eq!(mean(vec![1.0, 2.0, 6.0]), Some(3.0));
    }
}
