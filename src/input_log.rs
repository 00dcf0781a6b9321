use crate::input::Key;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Whether a key went down or came up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPhase {
    Pressed,
    Released,
}

/// Key event with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedKey {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub key: Key,
    pub phase: KeyPhase,
}

/// Diagnostic record of the logical key stream
pub struct InputLog {
    start_time: Instant,
    events: Vec<LoggedKey>,
}

impl Default for InputLog {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLog {
    pub fn new() -> Self {
        InputLog {
            start_time: Instant::now(),
            events: Vec::new(),
        }
    }

    /// Log a key event with current timestamp
    pub fn log(&mut self, key: Key, phase: KeyPhase) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.log_at(timestamp_ms, key, phase);
    }

    /// Log a key event at an explicit timestamp
    pub fn log_at(&mut self, timestamp_ms: u64, key: Key, phase: KeyPhase) {
        self.events.push(LoggedKey {
            timestamp_ms,
            key,
            phase,
        });
    }

    pub fn events(&self) -> &[LoggedKey] {
        &self.events
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Input Log ({} events) ===", self.events.len());
        for (i, logged) in self.events.iter().enumerate() {
            let phase_str = match logged.phase {
                KeyPhase::Pressed => "DOWN",
                KeyPhase::Released => "UP  ",
            };
            println!("[{:6}ms] #{:3} {} {:?}", logged.timestamp_ms, i + 1, phase_str, logged.key);
        }
        println!("=== End of Log ===\n");
    }

    /// How long each press was held, in order of release: (key, pressed_at, held_ms)
    pub fn hold_durations(&self) -> Vec<(Key, u64, u64)> {
        use std::collections::HashMap;

        let mut pressed_at: HashMap<Key, u64> = HashMap::new();
        let mut holds = Vec::new();

        for logged in &self.events {
            match logged.phase {
                KeyPhase::Pressed => {
                    pressed_at.entry(logged.key).or_insert(logged.timestamp_ms);
                }
                KeyPhase::Released => {
                    if let Some(start_ms) = pressed_at.remove(&logged.key) {
                        holds.push((logged.key, start_ms, logged.timestamp_ms.saturating_sub(start_ms)));
                    }
                }
            }
        }

        holds
    }

    /// Print every completed hold
    pub fn print_with_durations(&self) {
        println!("\n=== Input Log with Durations ===");
        for (key, start_ms, held_ms) in self.hold_durations() {
            println!("[{:6}ms] {:?} held for {}ms", start_ms, key, held_ms);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut presses = [0usize; 4];

        for logged in &self.events {
            if logged.phase == KeyPhase::Pressed {
                let slot = match logged.key {
                    Key::Forward => 0,
                    Key::Backward => 1,
                    Key::TurnLeft => 2,
                    Key::TurnRight => 3,
                };
                presses[slot] += 1;
            }
        }

        let duration = self.events.last().map(|last| last.timestamp_ms).unwrap_or(0);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Presses: {} forward, {} backward, {} turn left, {} turn right",
            duration,
            self.events.len(),
            presses[0],
            presses[1],
            presses[2],
            presses[3]
        )
    }
}
