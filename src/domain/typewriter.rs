//! Typewriter animation for the hero line.
//!
//! Cycles through a fixed list of role phrases, typing then deleting one
//! character per due tick. Timing is deadline-driven: the machine stores
//! at most one pending deadline and is advanced by `poll(now)`, so tests
//! simulate time with synthetic instants instead of sleeping.

use std::time::{Duration, Instant};

use super::carousel::BoundedIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Revealing one more character per tick.
    Typing,
    /// Whole phrase shown, holding before deletion starts.
    Pausing,
    /// Removing one character per tick.
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
    pub rest: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
            rest: Duration::from_millis(500),
        }
    }
}

/// The hero-line animation state machine.
///
/// The rendered text is always `current_phrase[..char_count]`. An empty
/// phrase list builds an inert machine: it never schedules a tick and
/// renders nothing.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use folio::domain::{Typewriter, TypewriterConfig};
///
/// let mut tw = Typewriter::new(vec!["coder".to_string()], TypewriterConfig::default());
/// let t0 = Instant::now();
/// tw.start(t0);
/// tw.poll(t0);
/// assert_eq!(tw.visible(), "c");
/// tw.poll(t0 + Duration::from_millis(100));
/// assert_eq!(tw.visible(), "co");
/// ```
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    cycle: BoundedIndex,
    phase: TypingPhase,
    char_count: usize,
    rendered: String,
    config: TypewriterConfig,
    next_at: Option<Instant>,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Self {
        let cycle = BoundedIndex::new(phrases.len());
        Self {
            phrases,
            cycle,
            phase: TypingPhase::Typing,
            char_count: 0,
            rendered: String::new(),
            config,
            next_at: None,
        }
    }

    /// Schedules the first tick. Harmless on an empty phrase list.
    pub fn start(&mut self, now: Instant) {
        if self.phrases.is_empty() {
            return;
        }
        self.next_at = Some(now);
    }

    /// Stops all future ticks. The rendered text freezes as-is.
    pub fn cancel(&mut self) {
        self.next_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// The text currently shown, always a prefix of the current phrase.
    pub fn visible(&self) -> &str {
        &self.rendered
    }

    /// Index of the phrase currently being cycled, if any.
    pub fn phrase_index(&self) -> Option<usize> {
        self.cycle.current()
    }

    /// Runs every tick that has come due at `now`. Returns true if the
    /// rendered text changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let before = self.rendered.len();
        while let Some(at) = self.next_at {
            if at > now {
                break;
            }
            self.step(at);
        }
        self.rendered.len() != before
    }

    /// One scheduled tick. `at` is the tick's own deadline, so cadence
    /// stays exact even when polling runs late.
    fn step(&mut self, at: Instant) {
        let Some(index) = self.cycle.current() else {
            self.next_at = None;
            return;
        };
        let phrase_len = self.phrases[index].chars().count();

        match self.phase {
            TypingPhase::Typing => {
                if self.char_count < phrase_len {
                    self.char_count += 1;
                    self.render(index);
                }
                if self.char_count >= phrase_len {
                    self.phase = TypingPhase::Pausing;
                    self.next_at = Some(at + self.config.pause);
                } else {
                    self.next_at = Some(at + self.config.typing);
                }
            }
            TypingPhase::Pausing => {
                // The first deletion lands exactly when the hold elapses.
                self.phase = TypingPhase::Deleting;
                self.next_at = Some(at);
            }
            TypingPhase::Deleting => {
                if self.char_count > 0 {
                    self.char_count -= 1;
                    self.render(index);
                }
                if self.char_count == 0 {
                    self.cycle.set_to(index as i64 + 1);
                    self.phase = TypingPhase::Typing;
                    self.next_at = Some(at + self.config.rest);
                } else {
                    self.next_at = Some(at + self.config.deleting);
                }
            }
        }
    }

    fn render(&mut self, index: usize) {
        self.rendered = self.phrases[index].chars().take(self.char_count).collect();
    }
}
