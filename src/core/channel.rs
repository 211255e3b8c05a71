//! Per-channel buffering and sink attachment
//!
//! A channel starts out buffering every message in a FIFO queue. Attaching a
//! sink moves it to draining: the attaching caller pops queued messages one at
//! a time and hands each to the new sink with the lock released, while
//! concurrent or reentrant producers keep appending to the same queue. The
//! channel switches to direct delivery only once the queue is observed empty
//! under the lock, so everything queued before or during the drain reaches the
//! sink before anything delivered directly.

use super::{log_message::LogMessage, sink::Sink};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// One of the two independent message pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Output,
    Error,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Output => f.write_str("output"),
            Channel::Error => f.write_str("error"),
        }
    }
}

enum ChannelState {
    Buffering(VecDeque<LogMessage>),
    Draining {
        sink: Arc<dyn Sink>,
        queue: VecDeque<LogMessage>,
    },
    Attached(Arc<dyn Sink>),
}

/// What happened to a submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Delivered,
    Buffered,
}

pub struct ChannelSlot {
    state: Mutex<ChannelState>,
}

impl ChannelSlot {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ChannelState::Buffering(VecDeque::new())),
        }
    }

    /// Deliver `message` to the attached sink, or queue it if the channel is
    /// still buffering or draining.
    ///
    /// The sink runs after the lock is released, so it may log again. A
    /// delivery that has already taken the sink handle completes to that sink
    /// even if [`attach`](Self::attach) replaces it in the meantime.
    pub fn submit(&self, message: LogMessage) -> Submission {
        let sink = {
            let mut state = self.state.lock();
            match &mut *state {
                ChannelState::Buffering(queue) | ChannelState::Draining { queue, .. } => {
                    queue.push_back(message);
                    return Submission::Buffered;
                }
                ChannelState::Attached(sink) => Arc::clone(sink),
            }
        };
        sink.deliver(message);
        Submission::Delivered
    }

    /// Replace the sink and drain any queued messages into it.
    ///
    /// Returns the number of messages this call delivered from the queue.
    /// Each message is delivered with the lock released, so the sink may log
    /// to this channel; such messages join the queue and are drained in turn.
    /// If another `attach` replaces the sink mid-drain, the remaining queue
    /// passes to the newer sink and this call stops.
    pub fn attach(&self, sink: Arc<dyn Sink>) -> usize {
        {
            let mut state = self.state.lock();
            let previous = std::mem::replace(&mut *state, ChannelState::Attached(Arc::clone(&sink)));
            match previous {
                ChannelState::Buffering(queue) | ChannelState::Draining { queue, .. } => {
                    *state = ChannelState::Draining {
                        sink: Arc::clone(&sink),
                        queue,
                    };
                }
                ChannelState::Attached(_) => return 0,
            }
        }

        let mut drained = 0;
        while let Some(message) = self.next_to_drain(&sink) {
            sink.deliver(message);
            drained += 1;
        }
        drained
    }

    /// Pop the next queued message for `sink`, switching to direct delivery
    /// once the queue is empty. `None` also when `sink` has been replaced.
    fn next_to_drain(&self, sink: &Arc<dyn Sink>) -> Option<LogMessage> {
        let mut state = self.state.lock();
        match &mut *state {
            ChannelState::Draining { sink: current, queue } if Arc::ptr_eq(current, sink) => {
                let next = queue.pop_front();
                if next.is_none() {
                    *state = ChannelState::Attached(Arc::clone(sink));
                }
                next
            }
            _ => None,
        }
    }

/// Number of messages waiting for a sink.
    pub fn pending(&self) -> usize {
        match &*self.state.lock() {
            ChannelState::Buffering(queue) | ChannelState::Draining { queue, .. } => queue.len(),
            ChannelState::Attached(_) => 0,
        }
    }

    /// Whether a sink has been connected, including while it is draining.
    pub fn is_attached(&self) -> bool {
        !matches!(&*self.state.lock(), ChannelState::Buffering(_))
    }
}

impl Default for ChannelSlot {
    fn default() -> Self {
        Self::new()
    }
}
