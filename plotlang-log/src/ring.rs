//! Bounded in-memory sink, mainly used by tests to capture output

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Ring buffer sink with a fixed capacity; oldest records are dropped first.
///
/// Cloning is cheap and clones share the same buffer.
#[derive(Clone)]
pub struct RingBufferSink {
    capacity: usize,
    records: Arc<Mutex<VecDeque<Record>>>,
}

impl RingBufferSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Number of buffered records
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all buffered records
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }

    /// Copy out all buffered records, oldest first
    pub fn dump_records(&self) -> Vec<Record> {
        self.records
            .lock()
            .map(|r| r.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl LogSink for RingBufferSink {
    fn write(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            if records.len() == self.capacity {
                records.pop_front();
            }
            records.push_back(record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    #[test]
    fn test_ring_buffer_basic() {
        let ring = RingBufferSink::new(10);
        assert!(ring.is_empty());

        ring.write(&Record::new(Level::Info, "test", "one"));
        ring.write(&Record::new(Level::Info, "test", "two"));

        assert_eq!(ring.len(), 2);
        let records = ring.dump_records();
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].message, "two");
    }

    #[test]
    fn test_ring_buffer_overflow_drops_oldest() {
        let ring = RingBufferSink::new(3);
        for i in 0..5 {
            ring.write(&Record::new(Level::Debug, "test", format!("msg {i}")));
        }

        assert_eq!(ring.len(), 3);
        let records = ring.dump_records();
        assert_eq!(records[0].message, "msg 2");
        assert_eq!(records[2].message, "msg 4");
    }

    #[test]
    fn test_ring_buffer_clear() {
        let ring = RingBufferSink::new(10);
        ring.write(&Record::new(Level::Info, "test", "msg"));
        ring.clear();
        assert!(ring.is_empty());
    }

    #[test]
    fn test_ring_buffer_clones_share_storage() {
        let ring = RingBufferSink::new(10);
        let clone = ring.clone();
        clone.write(&Record::new(Level::Info, "test", "shared"));
        assert_eq!(ring.len(), 1);
    }
}
