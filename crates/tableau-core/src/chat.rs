//! Chat Logs
//!
//! Two models of the shared message list:
//! - [`SharedArray`]: one whole-array value rewritten by every sender. Two
//!   senders that read the same snapshot lose one message.
//! - [`AppendLog`]: an append-only log where the log assigns each message a
//!   monotonic [`Seq`]. Clients send single messages, never the whole array.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{DashboardError, RemoteSyncError, Result};
use crate::medium::StorageMedium;
use crate::models::ChatMessage;
use crate::store::{keys, Store};

/// Outcome of a call to the shared log.
pub type SyncResult<T> = std::result::Result<T, RemoteSyncError>;

/// Log-assigned position. Ordering is lexicographic on the key text, so
/// numeric positions are zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seq(pub String);

impl Seq {
    pub fn from_index(index: u64) -> Self {
        Seq(format!("{:020}", index))
    }

    pub fn as_index(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for Seq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub seq: Seq,
    pub text: ChatMessage,
}

/// Append-only message log with log-assigned sequence numbers.
#[async_trait(?Send)]
pub trait AppendLog {
    /// Append one message; the log picks its position.
    async fn append(&self, text: &str) -> SyncResult<Seq>;

    /// Entries strictly after `after` (all entries for `None`), in order.
    async fn since(&self, after: Option<&Seq>) -> SyncResult<Vec<ChatEntry>>;
}

/// In-process log, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<ChatEntry>>,
    next: Cell<u64>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand out the next position, in call order.
    fn reserve(&self) -> Seq {
        let seq = Seq::from_index(self.next.get());
        self.next.set(self.next.get() + 1);
        seq
    }

    /// Store an entry at its reserved position, whatever order commits arrive in.
    fn commit(&self, entry: ChatEntry) {
        let mut entries = self.entries.borrow_mut();
        let pos = entries.partition_point(|e| e.seq < entry.seq);
        entries.insert(pos, entry);
    }
}

#[async_trait(?Send)]
impl AppendLog for MemoryLog {
    async fn append(&self, text: &str) -> SyncResult<Seq> {
        let seq = self.reserve();
        self.commit(ChatEntry {
            seq: seq.clone(),
            text: text.to_string(),
        });
        Ok(seq)
    }

    async fn since(&self, after: Option<&Seq>) -> SyncResult<Vec<ChatEntry>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .filter(|e| after.map_or(true, |a| e.seq > *a))
            .cloned()
            .collect())
    }
}

/// Single-tab log over the `chatMsgs` key; a message's position is its index.
#[derive(Debug, Clone)]
pub struct LocalLog<M> {
    store: Store<M>,
}

impl<M: StorageMedium> LocalLog<M> {
    pub fn new(store: Store<M>) -> Self {
        Self { store }
    }

    fn messages(&self) -> SyncResult<Vec<ChatMessage>> {
        self.store
            .get(keys::CHAT_MESSAGES, Vec::new())
            .map_err(|e| RemoteSyncError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl<M: StorageMedium> AppendLog for LocalLog<M> {
    async fn append(&self, text: &str) -> SyncResult<Seq> {
        let mut messages = self.messages()?;
        messages.push(text.to_string());
        self.store
            .set(keys::CHAT_MESSAGES, &messages)
            .map_err(|e| RemoteSyncError::Rejected(e.to_string()))?;
        Ok(Seq::from_index(messages.len() as u64 - 1))
    }

    async fn since(&self, after: Option<&Seq>) -> SyncResult<Vec<ChatEntry>> {
        let start = match after {
            None => 0,
            Some(seq) => seq
                .as_index()
                .map(|i| i as usize + 1)
                .ok_or_else(|| RemoteSyncError::Decode(format!("not a local position: {}", seq)))?,
        };
        Ok(self
            .messages()?
            .into_iter()
            .enumerate()
            .skip(start)
            .map(|(i, text)| ChatEntry {
                seq: Seq::from_index(i as u64),
                text,
            })
            .collect())
    }
}

/// Client-side view of a log: ordered and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatFeed {
    entries: Vec<ChatEntry>,
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last_seq(&self) -> Option<&Seq> {
        self.entries.last().map(|e| &e.seq)
    }

    /// Merge fetched entries; returns how many were new.
    pub fn merge(&mut self, fetched: Vec<ChatEntry>) -> usize {
        let mut added = 0;
        for entry in fetched {
            if let Err(pos) = self.entries.binary_search_by(|e| e.seq.cmp(&entry.seq)) {
                self.entries.insert(pos, entry);
                added += 1;
            }
        }
        added
    }

    /// Fetch everything after the last known entry and merge it.
    pub async fn refresh<L: AppendLog + ?Sized>(&mut self, log: &L) -> Result<usize> {
        let fetched = log.since(self.last_seq()).await?;
        Ok(self.merge(fetched))
    }
}

/// Unsent input. A failed send keeps the text so the user can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatDraft {
    text: String,
}

impl ChatDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub async fn send<L: AppendLog + ?Sized>(&mut self, log: &L) -> Result<Seq> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(DashboardError::InvalidInput("message is empty".to_string()));
        }
        match log.append(text).await {
            Ok(seq) => {
                info!(%seq, "message sent");
                self.text.clear();
                Ok(seq)
            }
            Err(e) => {
                error!(error = %e, "message not sent, keeping draft");
                Err(e.into())
            }
        }
    }
}

/// Input contents once a send started from `sent` has succeeded. Text typed
/// while the request was in flight is kept.
pub fn input_after_send(sent: &str, current: String) -> String {
    if current == sent {
        String::new()
    } else {
        current
    }
}

/// Whole-array shared value with change notification.
pub trait SharedArray {
    fn read(&self) -> Vec<ChatMessage>;

    /// Replace the whole value and notify subscribers.
    fn write(&self, messages: Vec<ChatMessage>);

    fn subscribe(&self, listener: Rc<dyn Fn(&[ChatMessage])>);
}

/// Read, push, write back. Loses messages when two senders interleave.
pub fn naive_send<A: SharedArray + ?Sized>(array: &A, text: &str) {
    let mut messages = array.read();
    messages.push(text.to_string());
    array.write(messages);
}

#[derive(Default)]
pub struct MemorySharedArray {
    value: RefCell<Vec<ChatMessage>>,
    listeners: RefCell<Vec<Rc<dyn Fn(&[ChatMessage])>>>,
}

impl MemorySharedArray {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedArray for MemorySharedArray {
    fn read(&self) -> Vec<ChatMessage> {
        self.value.borrow().clone()
    }

    fn write(&self, messages: Vec<ChatMessage>) {
        *self.value.borrow_mut() = messages;
        let snapshot = self.read();
        let listeners: Vec<_> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn subscribe(&self, listener: Rc<dyn Fn(&[ChatMessage])>) {
        listener(&self.read());
        self.listeners.borrow_mut().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;

    struct DownLog;

    #[async_trait(?Send)]
    impl AppendLog for DownLog {
        async fn append(&self, _text: &str) -> SyncResult<Seq> {
            Err(RemoteSyncError::Rejected("permission denied".into()))
        }

        async fn since(&self, _after: Option<&Seq>) -> SyncResult<Vec<ChatEntry>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_naive_interleaving_loses_a_message() {
        let remote = MemorySharedArray::new();
        naive_send(&remote, "hello");

        // Both senders read the same snapshot before either writes
        let mut alice = remote.read();
        let mut bob = remote.read();
        alice.push("from alice".into());
        bob.push("from bob".into());
        remote.write(alice);
        remote.write(bob);

        assert_eq!(remote.read(), vec!["hello", "from bob"]);
    }

    #[test]
    fn test_shared_array_notifies_subscribers() {
        let remote = MemorySharedArray::new();
        let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
        let sink = seen.clone();
        remote.subscribe(Rc::new(move |msgs| sink.borrow_mut().push(msgs.len())));

        naive_send(&remote, "one");
        naive_send(&remote, "two");
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    /// Sequenced log that suspends between taking a position and storing.
    struct SuspendingLog(MemoryLog);

    #[async_trait(?Send)]
    impl AppendLog for SuspendingLog {
        async fn append(&self, text: &str) -> SyncResult<Seq> {
            let seq = self.0.reserve();
            tokio::task::yield_now().await;
            self.0.commit(ChatEntry {
                seq: seq.clone(),
                text: text.to_string(),
            });
            Ok(seq)
        }

        async fn since(&self, after: Option<&Seq>) -> SyncResult<Vec<ChatEntry>> {
            self.0.since(after).await
        }
    }

    /// Whole-array read/push/write that suspends between read and write.
    struct WholeArrayLog(MemorySharedArray);

    #[async_trait(?Send)]
    impl AppendLog for WholeArrayLog {
        async fn append(&self, text: &str) -> SyncResult<Seq> {
            let mut messages = self.0.read();
            tokio::task::yield_now().await;
            messages.push(text.to_string());
            let seq = Seq::from_index(messages.len() as u64 - 1);
            self.0.write(messages);
            Ok(seq)
        }

        async fn since(&self, after: Option<&Seq>) -> SyncResult<Vec<ChatEntry>> {
            let start = after.and_then(Seq::as_index).map_or(0, |i| i as usize + 1);
            Ok(self
                .0
                .read()
                .into_iter()
                .enumerate()
                .skip(start)
                .map(|(i, text)| ChatEntry {
                    seq: Seq::from_index(i as u64),
                    text,
                })
                .collect())
        }
    }

    /// Two drafts sent at once after an initial message; returns the log text.
    async fn send_two_at_once<L: AppendLog>(log: &L) -> Vec<String> {
        log.append("hello").await.unwrap();
        let mut alice = ChatDraft::new("from alice");
        let mut bob = ChatDraft::new("from bob");

        let (a, b) = tokio::join!(alice.send(log), bob.send(log));
        a.unwrap();
        b.unwrap();
        log.since(None).await.unwrap().into_iter().map(|e| e.text).collect()
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_whole_array_log_loses_interleaved_send() {
        let texts = send_two_at_once(&WholeArrayLog(MemorySharedArray::new())).await;
        // Both sends reported success, yet only one survived
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], "hello");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_sequenced_log_keeps_interleaved_sends() {
        let texts = send_two_at_once(&SuspendingLog(MemoryLog::new())).await;
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], "hello");
        assert!(texts.contains(&"from alice".to_string()));
        assert!(texts.contains(&"from bob".to_string()));
    }

    #[test]
    fn test_input_cleared_only_when_unchanged() {
        assert_eq!(input_after_send("hi", "hi".to_string()), "");
        assert_eq!(input_after_send("hi", "hi there".to_string()), "hi there");
        assert_eq!(input_after_send("hi", String::new()), "");
    }

    #[test]
    fn test_commit_order_does_not_change_log_order() {
        let log = MemoryLog::new();
        let first = log.reserve();
        let second = log.reserve();
        log.commit(ChatEntry {
            seq: second,
            text: "second".into(),
        });
        log.commit(ChatEntry {
            seq: first,
            text: "first".into(),
        });
        let texts: Vec<String> = log.entries.borrow().iter().map(|e| e.text.clone()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_feed_refresh_is_incremental() {
        let log = MemoryLog::new();
        let mut feed = ChatFeed::new();
        log.append("one").await.unwrap();
        assert_eq!(feed.refresh(&log).await.unwrap(), 1);

        log.append("two").await.unwrap();
        log.append("three").await.unwrap();
        assert_eq!(feed.refresh(&log).await.unwrap(), 2);
        assert_eq!(feed.refresh(&log).await.unwrap(), 0);

        let texts: Vec<&str> = feed.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_feed_merge_dedupes_and_orders() {
        let mut feed = ChatFeed::new();
        let entry = |i: u64, t: &str| ChatEntry {
            seq: Seq::from_index(i),
            text: t.into(),
        };
        feed.merge(vec![entry(2, "c"), entry(0, "a")]);
        assert_eq!(feed.merge(vec![entry(1, "b"), entry(2, "c")]), 1);
        let texts: Vec<&str> = feed.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_failed_send_keeps_draft() {
        let mut draft = ChatDraft::new("see you at 8");
        let err = draft.send(&DownLog).await.unwrap_err();
        assert!(matches!(err, DashboardError::RemoteSync(RemoteSyncError::Rejected(_))));
        assert_eq!(draft.text(), "see you at 8");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_successful_send_clears_draft() {
        let log = MemoryLog::new();
        let mut draft = ChatDraft::new("  hi  ");
        draft.send(&log).await.unwrap();
        assert_eq!(draft.text(), "");
        assert_eq!(log.since(None).await.unwrap()[0].text, "hi");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_blank_draft_not_sent() {
        let log = MemoryLog::new();
        let mut draft = ChatDraft::new("   ");
        assert!(draft.send(&log).await.is_err());
        assert!(log.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_local_log_uses_chat_key() {
        let medium = MemoryMedium::new();
        let store = Store::new(&medium);
        let log = LocalLog::new(store.clone());
        let first = log.append("a").await.unwrap();
        log.append("b").await.unwrap();

        let stored: Vec<String> = store.get(keys::CHAT_MESSAGES, Vec::new()).unwrap();
        assert_eq!(stored, vec!["a", "b"]);
        let after = log.since(Some(&first)).await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].text, "b");
    }
}
