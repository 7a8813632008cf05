//! Set of `u32` keys that remembers insertion order and recycles removed nodes.
//!
//! Nodes live in a single slab owned by the set and are addressed by index. Each
//! node sits on two lists: the chain of its hash bucket and the insertion order
//! list. Removed nodes go on a free list and are handed out again before the
//! slab grows, so the slab only ever grows to the peak number of live keys.

type Link = Option<u32>;

#[derive(Clone, Copy, Debug, Default)]
struct Node {
    key: u32,
    bucket_next: Link,
    ordered_next: Link,
    ordered_prev: Link,
}

#[derive(Debug)]
pub struct IntHashSet {
    nodes: Vec<Node>,
    buckets: Vec<Link>,
    capacity: u32,
    len: u32,
    first: Link,
    last: Link,
    free: Link,
}

impl IntHashSet {
    pub fn with_capacity(capacity: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            nodes: Vec::new(),
            buckets: vec![None; next_prime(capacity) as usize],
            capacity,
            len: 0,
            first: None,
            last: None,
            free: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Number of nodes ever allocated, live or free.
    pub fn allocated(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `key`, returning `false` if it was already present.
    pub fn add(&mut self, key: u32) -> bool {
        if self.len >= self.capacity {
            self.resize();
        }

        let bucket = self.bucket_of(key);
        let mut link = self.buckets[bucket];
        while let Some(id) = link {
            let node = &self.nodes[id as usize];
            if node.key == key {
                return false;
            }
            link = node.bucket_next;
        }

        let id = match self.free {
            Some(id) => {
                self.free = self.nodes[id as usize].bucket_next;
                id
            }
            None => {
                self.nodes.push(Node::default());
                (self.nodes.len() - 1) as u32
            }
        };
        self.nodes[id as usize] = Node {
            key,
            bucket_next: self.buckets[bucket],
            ordered_next: None,
            ordered_prev: self.last,
        };
        self.buckets[bucket] = Some(id);

        match self.last {
            Some(last) => self.nodes[last as usize].ordered_next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.len += 1;
        true
    }

    pub fn contains(&self, key: u32) -> bool {
        let mut link = self.buckets[self.bucket_of(key)];
        while let Some(id) = link {
            let node = &self.nodes[id as usize];
            if node.key == key {
                return true;
            }
            link = node.bucket_next;
        }
        false
    }

    pub fn remove(&mut self, key: u32) -> bool {
        let bucket = self.bucket_of(key);
        let mut prev: Link = None;
        let mut link = self.buckets[bucket];
        while let Some(id) = link {
            let node = self.nodes[id as usize];
            if node.key != key {
                prev = link;
                link = node.bucket_next;
                continue;
            }

            match prev {
                Some(prev) => self.nodes[prev as usize].bucket_next = node.bucket_next,
                None => self.buckets[bucket] = node.bucket_next,
            }
            match node.ordered_prev {
                Some(prev) => self.nodes[prev as usize].ordered_next = node.ordered_next,
                None => self.first = node.ordered_next,
            }
            match node.ordered_next {
                Some(next) => self.nodes[next as usize].ordered_prev = node.ordered_prev,
                None => self.last = node.ordered_prev,
            }

            self.nodes[id as usize] = Node {
                bucket_next: self.free,
                ..Node::default()
            };
            self.free = Some(id);
            self.len -= 1;
            return true;
        }
        false
    }

    /// Live keys in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            next: self.first,
        }
    }

    /// Drops every node at once. Capacity and bucket count are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.buckets.iter_mut().for_each(|link| *link = None);
        self.len = 0;
        self.first = None;
        self.last = None;
        self.free = None;
    }

    fn bucket_of(&self, key: u32) -> usize {
        (key % self.buckets.len() as u32) as usize
    }

    fn resize(&mut self) {
        let capacity = next_prime(self.capacity.saturating_mul(2));
        if capacity <= self.capacity {
            return;
        }

        let mut buckets = vec![None; capacity as usize];
        let mut link = self.first;
        while let Some(id) = link {
            let node = &mut self.nodes[id as usize];
            let bucket = (node.key % capacity) as usize;
            node.bucket_next = buckets[bucket];
            buckets[bucket] = Some(id);
            link = node.ordered_next;
        }

        self.buckets = buckets;
        self.capacity = capacity;
    }
}

pub struct Iter<'a> {
    set: &'a IntHashSet,
    next: Link,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let node = &self.set.nodes[self.next? as usize];
        self.next = node.ordered_next;
        Some(node.key)
    }
}

impl<'a> IntoIterator for &'a IntHashSet {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Smallest prime not below `n`, or `u32::MAX` if there is none.
pub fn next_prime(n: u32) -> u32 {
    (n.max(2)..=u32::MAX).find(|&c| is_prime(c)).unwrap_or(u32::MAX)
}

fn is_prime(n: u32) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 || n % 3 == 0 => false,
        _ => {
            let n = n as u64;
            let mut i = 5u64;
            while i * i <= n {
                if n % i == 0 || n % (i + 2) == 0 {
                    return false;
                }
                i += 6;
            }
            true
        }
    }
}
