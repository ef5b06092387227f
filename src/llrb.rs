use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    fmt, mem,
    ops::DerefMut,
};

use log::{debug, trace, warn};

use crate::config::{Config, Picker, Replace};
use crate::depth::Depth;
use crate::error::Error;

/// Llrb manage a single instance of in-memory ordered map using
/// [left-leaning-red-black][llrb] tree. Every node is augmented with
/// the size of its sub-tree, so that order-statistics queries like
/// [`rank`](Llrb::rank) and [`select`](Llrb::select) complete in
/// logarithmic time.
///
/// ```
/// use llrb_rank::Llrb;
///
/// let mut llrb: Llrb<&str, i64> = Llrb::new("example");
/// llrb.put("b", 1);
/// llrb.put("a", 2);
/// llrb.put("c", 3);
///
/// assert_eq!(llrb.min_key(), Ok(&"a"));
/// assert_eq!(llrb.rank("b"), Ok(1));
/// assert_eq!(llrb.select(2), Ok(&"c"));
/// ```
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct Llrb<K, V>
where
    K: Clone + Ord,
{
    name: String,
    replace: Replace,
    picker: Picker,
    root: Option<Box<Node<K, V>>>,
}

/// Different ways to construct a new Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
{
    /// Create an empty instance of Llrb, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Llrb<K, V>
    where
        S: AsRef<str>,
    {
        Llrb::from_config(Config::new(name))
    }

    /// Create an empty instance of Llrb using `config`.
    pub fn from_config(config: Config) -> Llrb<K, V> {
        debug!("{}: new llrb, replace {:?}", config.name, config.replace);
        Llrb {
            picker: Picker::new(config.replace),
            name: config.name,
            replace: config.replace,
            root: Default::default(),
        }
    }

    /// Create a new instance of Llrb tree and load it with entries
    /// from `iter`. Later entries overwrite earlier entries having the
    /// same key.
    pub fn load_from<S, I>(name: S, iter: I) -> Llrb<K, V>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut llrb = Llrb::new(name);
        for (key, value) in iter {
            llrb.put(key, value);
        }
        llrb
    }
}

/// Maintenance API.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Llrb instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return the replace policy used while deleting entries.
    #[inline]
    pub fn replace(&self) -> Replace {
        self.replace
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        size(self.root.as_deref())
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return quickly with basic statisics, only entries() method is valid
    /// with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }
}

type Upsert<K, V> = (Box<Node<K, V>>, Option<V>);

type Delete<K, V> = (Option<Box<Node<K, V>>>, Option<V>);

type Extract<K, V> = (Option<Box<Node<K, V>>>, Option<Box<Node<K, V>>>);

/// Write operations on Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old_value) = Llrb::upsert(self.root.take(), key, value);
        root.set_black();
        self.root = Some(root);
        old_value
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains(key) {
            trace!("{}: delete missing key, no-op", self.name);
            return None;
        }
        let mut root = self.root.take()?;
        if root.size == 1 {
            trace!("{}: delete last entry", self.name);
            let Node { value, .. } = *root;
            return Some(value);
        }

        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let pred = self.picker.predecessor();
        let (root, old_value) = Llrb::do_delete(Some(root), key, pred);
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
        old_value
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * Root is black, and red links lean only to the left.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Size of every node match the count of nodes in its sub-tree.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>>
    where
        K: fmt::Debug,
    {
        let root = self.root.as_deref();
        let mut stats = Stats::new(self.len(), mem::size_of::<Node<K, V>>());
        stats.set_depths(Depth::new());

        let res = if is_red(root) {
            Err(Error::RedRoot)
        } else {
            Llrb::validate_tree(root, false, 0, 0, (None, None), &mut stats)
        };
        match res {
            Ok(blacks) => {
                stats.set_blacks(blacks);
                Ok(stats)
            }
            Err(err) => {
                warn!("{}: validate failed, {}", self.name, err);
                Err(err)
            }
        }
    }
}

/// Read operations on Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
{
    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, Error<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        match Llrb::find(node, key) {
            Some(node) => Ok(&node.value),
            None => Err(Error::NotFound),
        }
    }

    /// Get a mutable reference to the value for key, useful for
    /// updating values in place.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref_mut();
        if node.is_none() {
            return Err(Error::EmptyTree);
        }
        while let Some(nref) = node {
            match nref.key.borrow().cmp(key) {
                Ordering::Less => node = nref.right.as_deref_mut(),
                Ordering::Greater => node = nref.left.as_deref_mut(),
                Ordering::Equal => return Ok(&mut nref.value),
            }
        }
        Err(Error::NotFound)
    }

    /// Check whether key is present in this index.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.root.as_deref() {
            Some(node) => Llrb::find(node, key).is_some(),
            None => false,
        }
    }

    /// Return an iterator over all entries in sort order.
    pub fn iter(&self) -> Iter<K, V> {
        let mut iter = Iter { stack: vec![] };
        iter.push_lefts(self.root.as_deref());
        iter
    }

    fn find<'a, Q>(node: &'a Node<K, V>, key: &Q) -> Option<&'a Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = Some(node);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(nref),
            };
        }
        None
    }
}

/// Order-statistics operations on Llrb instance. Rank is the zero-based
/// position of a key among all keys in sort order.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
{
    /// Return the smallest key in this index.
    pub fn min_key(&self) -> Result<&K, Error<K>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Return the largest key in this index.
    pub fn max_key(&self) -> Result<&K, Error<K>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Return the key just before `key` in sort order. Return None if
    /// `key` is the smallest key, or if `key` is not present.
    pub fn predecessor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut node, mut ancestor) = (self.root.as_deref(), None);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => {
                    ancestor = Some(nref);
                    nref.right_deref()
                }
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => match nref.left_deref() {
                    Some(mut left) => {
                        while let Some(right) = left.right_deref() {
                            left = right;
                        }
                        return Some(&left.key);
                    }
                    None => return ancestor.map(|n| &n.key),
                },
            };
        }
        None
    }

    /// Return the key just after `key` in sort order. Return None if
    /// `key` is the largest key, or if `key` is not present.
    pub fn successor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut node, mut ancestor) = (self.root.as_deref(), None);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => {
                    ancestor = Some(nref);
                    nref.left_deref()
                }
                Ordering::Equal => match nref.right_deref() {
                    Some(mut right) => {
                        while let Some(left) = right.left_deref() {
                            right = left;
                        }
                        return Some(&right.key);
                    }
                    None => return ancestor.map(|n| &n.key),
                },
            };
        }
        None
    }

    /// Return the rank of `key`, that is the number of keys less than
    /// `key` in this index.
    pub fn rank<Q>(&self, key: &Q) -> Result<usize, Error<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = Some(self.root.as_deref().ok_or(Error::EmptyTree)?);
        let mut rank = 0;
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => {
                    rank += size(nref.left_deref()) + 1;
                    nref.right_deref()
                }
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Ok(rank + size(nref.left_deref())),
            };
        }
        Err(Error::NotFound)
    }

    /// Return the key at position `rank` in sort order.
    pub fn select(&self, mut rank: usize) -> Result<&K, Error<K>> {
        let mut node = Some(self.root.as_deref().ok_or(Error::EmptyTree)?);
        while let Some(nref) = node {
            let left_size = size(nref.left_deref());
            node = match rank.cmp(&left_size) {
                Ordering::Greater => {
                    rank -= left_size + 1;
                    nref.right_deref()
                }
                Ordering::Less => nref.left_deref(),
                Ordering::Equal => return Ok(&nref.key),
            };
        }
        Err(Error::NotFound)
    }
}

/// Diagnostics.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord + fmt::Debug,
    V: fmt::Debug,
{
    /// Render the tree sideways, one node per line. Right sub-tree is
    /// rendered above its parent and left sub-tree below, each level
    /// indented by four spaces.
    pub fn dump(&self) -> Vec<String> {
        let mut lines = vec![];
        Llrb::dump_tree(self.root.as_deref(), 0, &mut lines);
        lines
    }

    /// Print [`dump`](Llrb::dump) on stdout.
    pub fn pretty_print(&self) {
        println!("{}:", self.name);
        for line in self.dump().into_iter() {
            println!("{}", line);
        }
    }

    fn dump_tree(node: Option<&Node<K, V>>, indent: usize, acc: &mut Vec<String>) {
        if let Some(node) = node {
            Llrb::dump_tree(node.right_deref(), indent + 4, acc);
            acc.push(format!("{:indent$}{:?}", "", node, indent = indent));
            Llrb::dump_tree(node.left_deref(), indent + 4, acc);
        }
    }
}

impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
{
    fn upsert(node: Option<Box<Node<K, V>>>, key: K, value: V) -> Upsert<K, V> {
        let mut node = match node {
            None => return (Node::new(key, value), None),
            Some(node) => node,
        };

        let old_value = match node.key.cmp(&key) {
            Ordering::Greater => {
                let (left, o) = Llrb::upsert(node.left.take(), key, value);
                node.left = Some(left);
                o
            }
            Ordering::Less => {
                let (right, o) = Llrb::upsert(node.right.take(), key, value);
                node.right = Some(right);
                o
            }
            Ordering::Equal => Some(mem::replace(&mut node.value, value)),
        };
        (Llrb::walkuprot_23(node), old_value)
    }

    // Entry into `node` assumes that `node` is red or its left child is
    // red, and `key` is present in the sub-tree. `pred` picks the
    // replacement for a target having both children.
    fn do_delete<Q>(node: Option<Box<Node<K, V>>>, key: &Q, pred: bool) -> Delete<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };

        let go_left = match node.key.borrow().cmp(key) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => pred && node.left.is_some() && node.right.is_some(),
        };

        if go_left {
            let left = node.left_deref();
            if !is_red(left) && !is_red(left.and_then(Node::left_deref)) {
                node = Llrb::move_red_left(node);
            }
            if node.key.borrow().cmp(key) == Ordering::Equal {
                let (left, predecessor) = Llrb::delete_max(node.left.take());
                node.left = left;
                let (node, old_value) = Llrb::splice(node, predecessor);
                return (Some(Llrb::fixup(node)), Some(old_value));
            }
            let (left, old_value) = Llrb::do_delete(node.left.take(), key, pred);
            node.left = left;
            return (Some(Llrb::fixup(node)), old_value);
        }

        if is_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
        }

        let at_key = node.key.borrow().cmp(key) == Ordering::Equal;
        if at_key && node.right.is_none() {
            // no right child at this point implies no left child.
            let left = node.left.take();
            let Node { value, .. } = *node;
            return (left, Some(value));
        }

        let right = node.right_deref();
        if !is_red(right) && !is_red(right.and_then(Node::left_deref)) {
            node = Llrb::move_red_right(node);
        }

        if node.key.borrow().cmp(key) == Ordering::Equal {
            let (right, successor) = Llrb::delete_min(node.right.take());
            node.right = right;
            let (node, old_value) = Llrb::splice(node, successor);
            (Some(Llrb::fixup(node)), Some(old_value))
        } else {
            let (right, old_value) = Llrb::do_delete(node.right.take(), key, pred);
            node.right = right;
            (Some(Llrb::fixup(node)), old_value)
        }
    }

    // Detach the leftmost node, return the remaining sub-tree and the
    // detached node.
    fn delete_min(node: Option<Box<Node<K, V>>>) -> Extract<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            let right = node.right.take();
            return (right, Some(node));
        }
        let left = node.left_deref();
        if !is_red(left) && !is_red(left.and_then(Node::left_deref)) {
            node = Llrb::move_red_left(node);
        }
        let (left, min_node) = Llrb::delete_min(node.left.take());
        node.left = left;
        (Some(Llrb::fixup(node)), min_node)
    }

    // Detach the rightmost node, return the remaining sub-tree and the
    // detached node.
    fn delete_max(node: Option<Box<Node<K, V>>>) -> Extract<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if is_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
        }
        if node.right.is_none() {
            let left = node.left.take();
            return (left, Some(node));
        }
        let right = node.right_deref();
        if !is_red(right) && !is_red(right.and_then(Node::left_deref)) {
            node = Llrb::move_red_right(node);
        }
        let (right, max_node) = Llrb::delete_max(node.right.take());
        node.right = right;
        (Some(Llrb::fixup(node)), max_node)
    }

    // Put `newnode` in place of `node`, adopting its children and color.
    // Return the new node and value of the replaced node.
    fn splice(
        mut node: Box<Node<K, V>>,
        newnode: Option<Box<Node<K, V>>>,
    ) -> (Box<Node<K, V>>, V) {
        let mut newnode = match newnode {
            Some(newnode) => newnode,
            None => panic!("splice(): missing replacement, call the programmer"),
        };
        newnode.left = node.left.take();
        newnode.right = node.right.take();
        newnode.black = node.black;
        newnode.recalc_size();
        let Node { value, .. } = *node;
        (newnode, value)
    }

    fn validate_tree(
        node: Option<&Node<K, V>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        (low, high): (Option<&K>, Option<&K>),
        stats: &mut Stats,
    ) -> Result<usize, Error<K>> {
        let node = match node {
            None => {
                if let Some(depths) = stats.depths.as_mut() {
                    depths.sample(depth);
                }
                return Ok(nb);
            }
            Some(node) => node,
        };

        let red = is_red(Some(node));
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if is_red(node.right_deref()) {
            return Err(Error::RightLeaningRed);
        }
        if is_black(Some(node)) {
            nb += 1;
        }
        match (low, high) {
            (Some(low), _) if node.key.le(low) => {
                return Err(Error::SortError(low.clone(), node.key.clone()));
            }
            (_, Some(high)) if node.key.ge(high) => {
                return Err(Error::SortError(node.key.clone(), high.clone()));
            }
            _ => (),
        }

        let (left, right) = (node.left_deref(), node.right_deref());
        let bounds = (low, Some(&node.key));
        let lblacks = Llrb::validate_tree(left, red, nb, depth + 1, bounds, stats)?;
        let bounds = (Some(&node.key), high);
        let rblacks = Llrb::validate_tree(right, red, nb, depth + 1, bounds, stats)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }

        let counted = 1 + size(left) + size(right);
        if node.size != counted {
            let key = node.key.clone();
            return Err(Error::SizeMismatch(key, node.size, counted));
        }
        Ok(lblacks)
    }

    //--------- rotation routines for 2-3 algorithm ----------------

    fn walkuprot_23(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(node.right_deref()) && !is_red(node.left_deref()) {
            node = Llrb::rotate_left(node);
        }
        let left = node.left_deref();
        if is_red(left) && is_red(left.and_then(Node::left_deref)) {
            node = Llrb::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Llrb::flip(node.deref_mut())
        }
        node.recalc_size();
        node
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    (r)                 (r)  \
    //            /       \                 /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = match node.right.take() {
            Some(x) if !x.is_black() => x,
            _ => panic!("rotate_left(): rotating a black link ? Call the programmer"),
        };
        node.right = x.left.take();
        x.black = node.black;
        node.set_red();
        node.recalc_size();
        x.left = Some(node);
        x.recalc_size();
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //            (r)   \                   (r)  \
    //           /       \                 /      \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = match node.left.take() {
            Some(x) if !x.is_black() => x,
            _ => panic!("rotate_right(): rotating a black link ? Call the programmer"),
        };
        node.left = x.right.take();
        x.black = node.black;
        node.set_red();
        node.recalc_size();
        x.right = Some(node);
        x.recalc_size();
        x
    }

    //        (x)                   (!x)
    //         |                     |
    //        node                  node
    //        / \                   / \
    //      (y) (z)              (!y) (!z)
    //     /      \              /      \
    //   left    right         left    right
    //
    fn flip(node: &mut Node<K, V>) {
        match (node.left.as_mut(), node.right.as_mut()) {
            (Some(left), Some(right)) => {
                left.toggle_link();
                right.toggle_link();
            }
            _ => panic!("flip(): missing child ? Call the programmer"),
        }
        node.toggle_link();
    }

    // Fix-up on the way back from delete. Unlike walkuprot_23, any red
    // right link is rotated, as move_red_left can leave a node with red
    // links on both sides and a red left-left grand-child.
    fn fixup(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(node.right_deref()) {
            node = Llrb::rotate_left(node);
        }
        let left = node.left_deref();
        if is_red(left) && is_red(left.and_then(Node::left_deref)) {
            node = Llrb::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Llrb::flip(node.deref_mut());
        }
        node.recalc_size();
        node
    }

    // Make node.left or one of its children red, before descending left.
    fn move_red_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        Llrb::flip(node.deref_mut());
        let right = node.right_deref();
        if is_red(right.and_then(Node::left_deref)) {
            if let Some(right) = node.right.take() {
                node.right = Some(Llrb::rotate_right(right));
            }
            node = Llrb::rotate_left(node);
            Llrb::flip(node.deref_mut());
        }
        node
    }

    // Make node.right or one of its children red, before descending right.
    fn move_red_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        Llrb::flip(node.deref_mut());
        let left = node.left_deref();
        if is_red(left.and_then(Node::left_deref)) {
            node = Llrb::rotate_right(node);
            Llrb::flip(node.deref_mut());
        }
        node
    }
}

// Present and red. Absent node is neither red nor black.
fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

// Present and black. Absent node is neither red nor black, callers
// needing "absent counts as black" shall use `!is_red()`.
fn is_black<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, Node::is_black)
}

fn size<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.size)
}

/// Iterator over entries of [`Llrb`] in sort order.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_lefts(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(nref) = node {
            self.stack.push(nref);
            node = nref.left_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_lefts(node.right_deref());
        Some((&node.key, &node.value))
    }
}

/// Node corresponds to a single entry in Llrb instance.
#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    black: bool,                    // store: black or red
    size: usize,                    // store: number of nodes in this sub-tree
    left: Option<Box<Node<K, V>>>,  // store: left child
    right: Option<Box<Node<K, V>>>, // store: right child
}

// Primary operations on a single node.
impl<K, V> Node<K, V> {
    // CREATE operation, new nodes are always red.
    fn new(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            black: false,
            size: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    #[inline]
    fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    #[inline]
    fn recalc_size(&mut self) {
        self.size = 1 + size(self.left_deref()) + size(self.right_deref());
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.black
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = if self.black { "BLACK" } else { "RED" };
        write!(
            f,
            "({:?}, value: {:?} [{}], size: {})",
            self.key, self.value, color, self.size
        )
    }
}

/// Statistics on [`Llrb`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Llrb::stats`] method.
/// * To get full statisics via [`Llrb::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Llrb`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Llrb<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types. EG:
    ///
    /// ```
    /// use llrb_rank::Llrb;
    /// let llrb: Llrb<u64,u64> = Llrb::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // size of value: 8 bytes
    /// // overhead is 32 bytes
    /// assert_eq!(llrb.stats().node_size(), 48);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match self.depths.as_ref() {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
