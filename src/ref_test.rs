// Reference model for Llrb, entries are indexed by key, keys are in the
// range of 0..capacity. Every query is a linear scan over the entries.
#[derive(Clone)]
struct RefNode {
    key: i64,
    value: i64,
}

struct RefNodes {
    entries: Vec<RefNode>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        let mut entries: Vec<RefNode> = Vec::with_capacity(capacity);
        (0..capacity).for_each(|_| entries.push(RefNode { key: -1, value: 0 }));
        RefNodes { entries }
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn get(&self, key: i64) -> Option<i64> {
        let entry = self.entries[key as usize].clone();
        if entry.key < 0 {
            None
        } else {
            Some(entry.value)
        }
    }

    fn keys(&self) -> Vec<i64> {
        self.iter().map(|(key, _)| key).collect()
    }

    fn iter(&self) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .filter_map(|item| {
                if item.key < 0 {
                    None
                } else {
                    Some((item.key, item.value))
                }
            })
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }

    fn min_key(&self) -> Option<i64> {
        self.keys().first().cloned()
    }

    fn max_key(&self) -> Option<i64> {
        self.keys().last().cloned()
    }

    fn predecessor(&self, key: i64) -> Option<i64> {
        let keys = self.keys();
        match keys.binary_search(&key) {
            Ok(off) if off > 0 => Some(keys[off - 1]),
            _ => None,
        }
    }

    fn successor(&self, key: i64) -> Option<i64> {
        let keys = self.keys();
        match keys.binary_search(&key) {
            Ok(off) => keys.get(off + 1).cloned(),
            Err(_) => None,
        }
    }

    fn rank(&self, key: i64) -> Option<usize> {
        self.keys().binary_search(&key).ok()
    }

    fn select(&self, rank: usize) -> Option<i64> {
        self.keys().get(rank).cloned()
    }

    fn set(&mut self, key: i64, value: i64) -> Option<i64> {
        let entry = &mut self.entries[key as usize];
        let old_value = if entry.key < 0 {
            None
        } else {
            Some(entry.value)
        };
        entry.key = key;
        entry.value = value;
        old_value
    }

    fn delete(&mut self, key: i64) -> Option<i64> {
        let entry = &mut self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            entry.key = -1;
            Some(entry.value)
        }
    }
}
