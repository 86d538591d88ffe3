//! crates/logging/src/chain.rs
//! Two ordered sequences of owned outputters and the dispatch walk over them.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroU64;

use logfan_core::Level;

use crate::outputter::{Outputter, OutputterId};

struct Entry {
    id: OutputterId,
    outputter: Box<dyn Outputter>,
}

/// Ordered chain of log destinations.
///
/// Holds two independent sequences: `head` entries are always invoked first,
/// front to back, with their return values ignored; `normal` entries follow,
/// front to back, until one of them returns `false`. Insertion prepends, so
/// the most-recently-installed destination in a sequence is consulted first.
/// There is no ordering guarantee between the two sequences beyond "all of
/// `head` before any of `normal`".
///
/// The chain owns its entries. [`OutputterChain::remove`] releases ownership
/// back to the caller; [`OutputterChain::pop_front`] and drop destroy entries
/// in place. The coordinator wraps every operation here in its shared lock;
/// the chain itself is not synchronized.
#[derive(Default)]
pub struct OutputterChain {
    head: VecDeque<Entry>,
    normal: VecDeque<Entry>,
    next_id: u64,
}

impl OutputterChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an outputter to the designated sequence and returns its
    /// handle.
    ///
    /// The chain takes ownership; the destination is destroyed when popped or
    /// when the chain is dropped, unless it is first released via
    /// [`OutputterChain::remove`].
    pub fn insert(&mut self, outputter: Box<dyn Outputter>, at_head: bool) -> OutputterId {
        self.next_id += 1;
        // next_id starts at 0 and only ever increments.
        let raw = NonZeroU64::new(self.next_id).unwrap_or(NonZeroU64::MIN);
        let entry = Entry {
            id: OutputterId::new(raw),
            outputter,
        };
        let id = entry.id;
        if at_head {
            self.head.push_front(entry);
        } else {
            self.normal.push_front(entry);
        }
        id
    }

    /// Removes the first entry matching `id` and returns it to the caller.
    ///
    /// The normal sequence is scanned before the head sequence. An absent
    /// handle is a no-op returning `None`; the chain is left unchanged.
    pub fn remove(&mut self, id: OutputterId) -> Option<Box<dyn Outputter>> {
        for sequence in [&mut self.normal, &mut self.head] {
            if let Some(index) = sequence.iter().position(|entry| entry.id == id) {
                return sequence.remove(index).map(|entry| entry.outputter);
            }
        }
        None
    }

    /// Erases and destroys the front entry of the designated sequence.
    ///
    /// A pop on an empty sequence is a no-op; the return value reports whether
    /// an entry was removed.
    pub fn pop_front(&mut self, at_head: bool) -> bool {
        let sequence = if at_head {
            &mut self.head
        } else {
            &mut self.normal
        };
        sequence.pop_front().is_some()
    }

    /// Walks the chain with a rendered message.
    ///
    /// Every head entry is invoked front to back with return values ignored,
    /// then normal entries front to back until one returns `false` or the
    /// sequence is exhausted.
    pub fn dispatch(&mut self, level: Level, message: &str) {
        for entry in &mut self.head {
            let _ = entry.outputter.write(level, message);
        }
        for entry in &mut self.normal {
            if !entry.outputter.write(level, message) {
                break;
            }
        }
    }

    /// Number of entries in the designated sequence.
    #[must_use]
    pub fn len(&self, at_head: bool) -> usize {
        if at_head {
            self.head.len()
        } else {
            self.normal.len()
        }
    }

    /// Whether both sequences are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.normal.is_empty()
    }
}

impl fmt::Debug for OutputterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputterChain")
            .field("head", &self.head.len())
            .field("normal", &self.normal.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Tag {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
        proceed: bool,
    }

    impl Outputter for Tag {
        fn write(&mut self, _level: Level, _message: &str) -> bool {
            self.seen.lock().unwrap().push(self.tag);
            self.proceed
        }
    }

    fn tag(tag: &'static str, seen: &Arc<Mutex<Vec<&'static str>>>, proceed: bool) -> Box<Tag> {
        Box::new(Tag {
            tag,
            seen: Arc::clone(seen),
            proceed,
        })
    }

    #[test]
    fn normal_entries_run_most_recent_first() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        chain.insert(tag("o1", &seen, true), false);
        chain.insert(tag("o2", &seen, true), false);
        chain.insert(tag("o3", &seen, true), false);

        chain.dispatch(Level::Info, "msg");
        assert_eq!(*seen.lock().unwrap(), vec!["o3", "o2", "o1"]);
    }

    #[test]
    fn false_return_stops_later_normal_entries() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        chain.insert(tag("oldest", &seen, true), false);
        chain.insert(tag("stopper", &seen, false), false);
        chain.insert(tag("newest", &seen, true), false);

        chain.dispatch(Level::Info, "msg");
        assert_eq!(*seen.lock().unwrap(), vec!["newest", "stopper"]);
    }

    #[test]
    fn head_entries_run_first_and_ignore_returns() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        chain.insert(tag("normal", &seen, true), false);
        chain.insert(tag("head-stopper", &seen, false), true);
        chain.insert(tag("head-late", &seen, false), true);

        chain.dispatch(Level::Info, "msg");
        // Both head entries run despite returning false, then normal follows.
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["head-late", "head-stopper", "normal"]
        );
    }

    #[test]
    fn remove_releases_ownership_and_skips_dispatch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        let id = chain.insert(tag("gone", &seen, true), false);
        chain.insert(tag("stays", &seen, true), false);

        let released = chain.remove(id);
        assert!(released.is_some());
        assert_eq!(chain.len(false), 1);

        chain.dispatch(Level::Info, "msg");
        assert_eq!(*seen.lock().unwrap(), vec!["stays"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        let id = chain.insert(tag("only", &seen, true), false);
        assert!(chain.remove(id).is_some());
        assert!(chain.remove(id).is_none());
        assert!(chain.is_empty());
    }

    #[test]
    fn remove_finds_head_entries_too() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        let id = chain.insert(tag("head", &seen, true), true);
        assert!(chain.remove(id).is_some());
        assert_eq!(chain.len(true), 0);
    }

    #[test]
    fn pop_front_respects_sequence_and_empty_is_noop() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        assert!(!chain.pop_front(true));
        assert!(!chain.pop_front(false));

        chain.insert(tag("n", &seen, true), false);
        chain.insert(tag("h", &seen, true), true);

        assert!(chain.pop_front(true));
        assert_eq!(chain.len(true), 0);
        assert_eq!(chain.len(false), 1);

        assert!(chain.pop_front(false));
        assert!(chain.is_empty());
        assert!(!chain.pop_front(false));
    }

    #[test]
    fn ids_stay_unique_across_sequences() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = OutputterChain::new();
        let a = chain.insert(tag("a", &seen, true), false);
        let b = chain.insert(tag("b", &seen, true), true);
        assert_ne!(a, b);
    }
}
